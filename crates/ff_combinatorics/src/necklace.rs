//! The `Necklace` type and canonical rotations.
//!
//! A necklace stores the canonical representative of its rotation class:
//! the lexicographically smallest rotation under the label order of its
//! composition (see `Composition`).
//!

use std::fmt;
use std::ops::Deref;
use serde::Serialize;

use crate::Label;
use crate::Composition;
use crate::NecklaceError;
use crate::symmetry::smallest_period;

/// One cyclic arrangement of beads, stored as its canonical rotation.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Necklace(Vec<Label>);

impl Necklace {
    /// Wrap a sequence that is known to be canonical.
    pub(crate) fn from_canonical(labels: Vec<Label>) -> Self {
        Necklace(labels)
    }

    pub fn as_slice(&self) -> &[Label] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<Label> {
        self.0
    }

    /// Count of each label, for `k` labels.
    pub fn content(&self, k: usize) -> Vec<usize> {
        let mut counts = vec![0; k.max(self.0.iter().map(|&l| l + 1).max().unwrap_or(0))];
        for &l in &self.0 {
            counts[l] += 1;
        }
        counts
    }

    /// All `n` cyclic rotations, starting with the necklace itself.
    pub fn rotations(&self) -> impl Iterator<Item = Vec<Label>> + '_ {
        let n = self.0.len();
        (0..n).map(move |s| {
            self.0[s..].iter().chain(&self.0[..s]).copied().collect()
        })
    }

    /// Smallest nonzero shift that maps the necklace onto itself.
    pub fn period(&self) -> usize {
        smallest_period(&self.0)
    }

    /// Order of the rotational symmetry, i.e. `n / period`.
    pub fn symmetry(&self) -> usize {
        match self.0.len() {
            0 => 0,
            n => n / self.period(),
        }
    }
}

impl Deref for Necklace {
    type Target = [Label];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Necklace> for Vec<Label> {
    fn from(necklace: Necklace) -> Self {
        necklace.0
    }
}

impl fmt::Display for Necklace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, l) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{l}")?;
        }
        write!(f, ")")
    }
}

/// Start index of the least rotation of `s` (Booth's algorithm).
pub(crate) fn least_rotation(s: &[usize]) -> usize {
    let n = s.len();
    if n == 0 {
        return 0;
    }
    let mut fail: Vec<Option<usize>> = vec![None; 2 * n];
    let mut k = 0;
    for j in 1..2 * n {
        let sj = s[j % n];
        let mut i = fail[j - k - 1];
        while let Some(ii) = i {
            let si = s[(k + ii + 1) % n];
            if sj == si {
                break;
            }
            if sj < si {
                k = j - ii - 1;
            }
            i = fail[ii];
        }
        match i {
            Some(ii) => fail[j - k] = Some(ii + 1),
            None => {
                if sj != s[k % n] {
                    if sj < s[k % n] {
                        k = j;
                    }
                    fail[j - k] = None;
                } else {
                    fail[j - k] = Some(0);
                }
            }
        }
    }
    k % n
}

/// The canonical representative of the rotation class of `sequence`.
///
/// Fails with `ContentMismatch` if `sequence` does not carry exactly the
/// beads of `composition`.
pub fn canonical_rotation<C>(sequence: &[Label], composition: C) -> Result<Necklace, NecklaceError>
where
    C: TryInto<Composition>,
    NecklaceError: From<C::Error>,
{
    let composition = composition.try_into()?;
    let ranks = composition.to_ranks(sequence)?;
    let start = least_rotation(&ranks);
    let rotated: Vec<usize> = ranks[start..].iter().chain(&ranks[..start]).copied().collect();
    Ok(Necklace(composition.to_labels(&rotated)))
}

/// Linear-time test whether a rank sequence is a necklace, i.e. its own
/// least rotation. Tracks the Lyndon prefix length `p` of the prenecklace.
pub(crate) fn is_necklace(a: &[usize]) -> bool {
    let mut p = 1;
    for i in 1..a.len() {
        if a[i] < a[i - p] {
            return false;
        }
        if a[i] > a[i - p] {
            p = i + 1;
        }
    }
    a.len() % p == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_least_rotation() {
        assert_eq!(least_rotation(&[2, 0, 1]), 1);
        assert_eq!(least_rotation(&[1, 0, 1, 0]) % 2, 1);
        assert_eq!(least_rotation(&[0, 0, 0]), 0);
        assert_eq!(least_rotation(&[1, 1, 0, 1, 0, 0]), 4);
        assert_eq!(least_rotation(&[]), 0);
    }

    #[test]
    fn test_least_rotation_against_naive() {
        let seqs: [&[usize]; 5] = [
            &[3, 1, 2, 1, 2, 0, 1],
            &[1, 2, 1, 2, 1, 2],
            &[2, 2, 1, 2, 2, 1, 1],
            &[0, 1, 0, 0, 1, 0, 0],
            &[5],
        ];
        for s in seqs {
            let n = s.len();
            let rot = |k: usize| -> Vec<usize> { s[k..].iter().chain(&s[..k]).copied().collect() };
            let best = (0..n).map(rot).min().unwrap();
            assert_eq!(rot(least_rotation(s)), best);
        }
    }

    #[test]
    fn test_is_necklace() {
        assert!(is_necklace(&[0, 0, 1]));
        assert!(is_necklace(&[0, 1, 0, 1]));
        assert!(is_necklace(&[0]));
        assert!(!is_necklace(&[0, 1, 0]));
        assert!(!is_necklace(&[1, 0]));
        assert!(is_necklace(&[0, 0, 1, 0, 1]));
        assert!(!is_necklace(&[0, 1, 0, 0, 1]));
    }

    #[test]
    fn test_canonical_rotation() {
        // label 1 is the rarest bead, so it leads.
        let nk = canonical_rotation(&[0, 0, 2, 2, 1, 0], [3usize, 1, 2]).unwrap();
        assert_eq!(nk.as_slice(), &[1, 0, 0, 0, 2, 2]);
        let nk = canonical_rotation(&[2, 1, 3, 0], [1usize, 1, 1, 1]).unwrap();
        assert_eq!(nk.as_slice(), &[0, 2, 1, 3]);
        assert!(canonical_rotation(&[0, 1], [1usize, 2]).is_err());
    }

    #[test]
    fn test_necklace_helpers() {
        let nk = canonical_rotation(&[1, 0, 1, 0], [2usize, 2]).unwrap();
        assert_eq!(nk.as_slice(), &[0, 1, 0, 1]);
        assert_eq!(nk.period(), 2);
        assert_eq!(nk.symmetry(), 2);
        assert_eq!(nk.content(3), vec![2, 2, 0]);
        let rots: Vec<_> = nk.rotations().collect();
        assert_eq!(rots, vec![vec![0, 1, 0, 1], vec![1, 0, 1, 0], vec![0, 1, 0, 1], vec![1, 0, 1, 0]]);
        assert_eq!(format!("{}", nk), "(0, 1, 0, 1)");
        assert_eq!(serde_json::to_string(&nk).unwrap(), "[0,1,0,1]");
    }
}
