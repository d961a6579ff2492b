//! Necklace enumeration for a fixed multiset of beads.
//!
//! The eager enumeration follows Sawada's fixed-content algorithm: a
//! prenecklace `a[1..t-1]` with Lyndon prefix length `p` is extended by
//! every available bead `j >= a[t-p]`. Once `t > n`, the prenecklace is a
//! necklace iff `p` divides `n`. Beads are generated in rank space (see
//! `Composition::label_order`) and translated back to labels on output.
//!
//! The lazy `Necklaces` iterator walks multiset permutations in lexicographic
//! order and filters necklaces, it trades speed for O(n) memory.
//!

use log::debug;
use log::trace;

use crate::Composition;
use crate::Necklace;
use crate::NecklaceError;
use crate::necklace::is_necklace;

struct FixedContent<'a> {
    composition: &'a Composition,
    n: usize,
    a: Vec<usize>,       // 1-based prenecklace in rank space
    remaining: Vec<usize>,
    out: Vec<Necklace>,
}

/// One open position of the search: position `t`, Lyndon prefix length `p`
/// and the next bead `j` to try there.
struct Frame {
    t: usize,
    p: usize,
    j: usize,
}

impl FixedContent<'_> {
    /// Runs the search with an explicit stack, the depth is `n`.
    fn generate(&mut self) {
        let mut stack = vec![Frame { t: 2, p: 1, j: self.a[1] }];
        while let Some(frame) = stack.last_mut() {
            let (t, p) = (frame.t, frame.p);
            if t > self.n {
                if self.n % p == 0 {
                    let necklace = Necklace::from_canonical(self.composition.to_labels(&self.a[1..]));
                    trace!("necklace {necklace}");
                    self.out.push(necklace);
                }
                stack.pop();
                self.remaining[self.a[t - 1]] += 1;
                continue;
            }

            let next = (frame.j..self.remaining.len()).find(|&j| self.remaining[j] > 0);
            let Some(j) = next else {
                stack.pop();
                self.remaining[self.a[t - 1]] += 1;
                continue;
            };
            frame.j = j + 1;
            self.a[t] = j;
            self.remaining[j] -= 1;
            let p = if j == self.a[t - p] { p } else { t };
            stack.push(Frame { t: t + 1, p, j: self.a[t + 1 - p] });
        }
    }
}

/// Enumerate all necklaces of the multiset described by `composition`.
///
/// Each rotation class is reported exactly once, by its canonical
/// representative. The result is sorted lexicographically in the label
/// order of the composition, so repeated calls return identical vectors.
///
/// ```
/// use ff_combinatorics::enumerate_necklaces;
/// let necklaces = enumerate_necklaces([1usize, 1, 1]).unwrap();
/// assert_eq!(necklaces.len(), 2);
/// assert_eq!(necklaces[0].as_slice(), &[0, 1, 2]);
/// ```
pub fn enumerate_necklaces<C>(composition: C) -> Result<Vec<Necklace>, NecklaceError>
where
    C: TryInto<Composition>,
    NecklaceError: From<C::Error>,
{
    let composition = composition.try_into()?;
    debug!("Enumerating necklaces for {composition}, label order {:?}.",
        composition.label_order());

    let n = composition.total();
    let mut generator = FixedContent {
        composition: &composition,
        n,
        a: vec![0; n + 1],
        remaining: composition.rank_counts(),
        out: Vec::new(),
    };
    // The smallest bead is fixed at the first position.
    generator.a[1] = 0;
    generator.remaining[0] -= 1;
    generator.generate();

    debug!("Found {} necklaces for {composition}.", generator.out.len());
    Ok(generator.out)
}

/// Lazy necklace enumeration; yields the same sequence as
/// `enumerate_necklaces`.
#[derive(Debug, Clone)]
pub struct Necklaces {
    composition: Composition,
    current: Option<Vec<usize>>,
}

impl Necklaces {
    pub fn new<C>(composition: C) -> Result<Self, NecklaceError>
    where
        C: TryInto<Composition>,
        NecklaceError: From<C::Error>,
    {
        let composition = composition.try_into()?;
        let first: Vec<usize> = composition.rank_counts().iter()
            .enumerate()
            .flat_map(|(r, &c)| std::iter::repeat_n(r, c))
            .collect();
        debug!("Lazy necklace enumeration for {composition}.");
        Ok(Self { composition, current: Some(first) })
    }

    pub fn composition(&self) -> &Composition {
        &self.composition
    }
}

/// Rearrange into the lexicographically next permutation.
/// Returns false if `a` was already the last one.
fn next_permutation(a: &mut [usize]) -> bool {
    let Some(i) = (1..a.len()).rev().find(|&i| a[i - 1] < a[i]) else {
        return false;
    };
    let j = (i..a.len()).rev().find(|&j| a[j] > a[i - 1]).unwrap_or(i);
    a.swap(i - 1, j);
    a[i..].reverse();
    true
}

impl Iterator for Necklaces {
    type Item = Necklace;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let current = self.current.as_mut()?;
            // Necklaces start with the smallest bead, rank 0.
            if current[0] != 0 {
                self.current = None;
                return None;
            }
            let found = is_necklace(current).then(|| {
                Necklace::from_canonical(self.composition.to_labels(current))
            });
            if !next_permutation(current) {
                self.current = None;
            }
            if let Some(necklace) = found {
                trace!("necklace {necklace}");
                return Some(necklace);
            }
        }
    }
}
