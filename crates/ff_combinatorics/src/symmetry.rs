//! Rotational symmetry of cyclic sequences.
//!
//! Multi-strand complexes built from symmetric strand orderings need a
//! symmetry correction of their partition function, these helpers provide
//! the order of the symmetry and the corresponding shifts.
//!

/// Smallest `p > 0` such that rotating `seq` by `p` gives `seq` again.
/// Returns 0 for the empty sequence.
pub(crate) fn smallest_period<T: PartialEq>(seq: &[T]) -> usize {
    let n = seq.len();
    if n == 0 {
        return 0;
    }
    // KMP failure function: length of the longest proper border.
    let mut fail = vec![0usize; n + 1];
    let mut k = 0;
    for i in 1..n {
        while k > 0 && seq[i] != seq[k] {
            k = fail[k];
        }
        if seq[i] == seq[k] {
            k += 1;
        }
        fail[i + 1] = k;
    }
    let p = n - fail[n];
    if n % p == 0 { p } else { n }
}

/// Number of rotations (identity included) that map `seq` onto itself.
///
/// ```
/// use ff_combinatorics::rotational_symmetry;
/// assert_eq!(rotational_symmetry(&[0, 1, 0, 1]), 2);
/// assert_eq!(rotational_symmetry(&[0, 1, 1]), 1);
/// ```
pub fn rotational_symmetry<T: PartialEq>(seq: &[T]) -> usize {
    match smallest_period(seq) {
        0 => 0,
        p => seq.len() / p,
    }
}

/// The shifts `s` with `rotate(seq, s) == seq`, ascending, starting at 0.
pub fn rotational_symmetry_positions<T: PartialEq>(seq: &[T]) -> Vec<usize> {
    match smallest_period(seq) {
        0 => Vec::new(),
        p => (0..seq.len()).step_by(p).collect(),
    }
}
