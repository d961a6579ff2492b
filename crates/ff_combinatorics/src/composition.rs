//! Compositions: how many beads of each label form the necklace.
//!
//! A `Composition` also fixes the *label order* used for canonical
//! representatives. Labels are ranked by ascending count, ties are broken
//! by ascending label index. The rarest label is therefore the smallest
//! bead and sits at position 0 of every canonical necklace. Labels with
//! count zero take no part in the order.
//!

use std::fmt;
use std::str::FromStr;

use crate::Label;
use crate::NecklaceError;

/// A validated multiplicity vector `(c_0, .., c_{k-1})` with `Σ c_i > 0`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Composition {
    counts: Vec<usize>,
    total: usize,
    order: Vec<Label>,          // rank -> label
    ranks: Vec<Option<usize>>,  // label -> rank
}

impl Composition {
    fn from_counts(counts: Vec<usize>) -> Result<Self, NecklaceError> {
        if counts.is_empty() {
            return Err(NecklaceError::EmptyComposition);
        }
        if counts.iter().all(|&c| c == 0) {
            return Err(NecklaceError::NoBeads);
        }
        let total = counts.iter()
            .try_fold(0usize, |acc, &c| acc.checked_add(c))
            .ok_or(NecklaceError::TooManyBeads)?;

        let mut order: Vec<Label> = (0..counts.len())
            .filter(|&l| counts[l] > 0)
            .collect();
        order.sort_by_key(|&l| (counts[l], l));

        let mut ranks = vec![None; counts.len()];
        for (r, &l) in order.iter().enumerate() {
            ranks[l] = Some(r);
        }

        Ok(Self { counts, total, order, ranks })
    }

    /// The multiplicities, indexed by label.
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Number of labels `k` (including those with count zero).
    pub fn num_labels(&self) -> usize {
        self.counts.len()
    }

    /// Total number of beads `n`.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Labels with nonzero count, smallest first.
    pub fn label_order(&self) -> &[Label] {
        &self.order
    }

    /// Rank of a label in the label order, `None` for absent labels.
    pub fn rank(&self, label: Label) -> Option<usize> {
        self.ranks.get(label).copied().flatten()
    }

    /// The label at a given rank, `None` past the last rank.
    pub fn label(&self, rank: usize) -> Option<Label> {
        self.order.get(rank).copied()
    }

    /// Multiplicities in rank order (ascending by construction).
    pub fn rank_counts(&self) -> Vec<usize> {
        self.order.iter().map(|&l| self.counts[l]).collect()
    }

    /// The nonzero multiplicities.
    pub fn nonzero_counts(&self) -> impl Iterator<Item = usize> + '_ {
        self.counts.iter().copied().filter(|&c| c > 0)
    }

    /// Translate a label sequence into rank space, or report its content
    /// if it does not match this composition.
    pub fn to_ranks(&self, sequence: &[Label]) -> Result<Vec<usize>, NecklaceError> {
        let width = sequence.iter().map(|&l| l + 1).max().unwrap_or(0).max(self.counts.len());
        let mut found = vec![0; width];
        for &l in sequence {
            found[l] += 1;
        }
        let ranks: Option<Vec<usize>> = sequence.iter()
            .map(|&l| self.rank(l))
            .collect();
        match ranks {
            Some(ranks) if found[..self.counts.len()] == self.counts[..] => Ok(ranks),
            _ => Err(NecklaceError::ContentMismatch {
                expected: self.counts.clone(),
                found,
            }),
        }
    }

    /// Translate a rank sequence back into labels.
    pub fn to_labels(&self, ranks: &[usize]) -> Vec<Label> {
        ranks.iter().map(|&r| self.order[r]).collect()
    }
}

impl TryFrom<Vec<usize>> for Composition {
    type Error = NecklaceError;

    fn try_from(counts: Vec<usize>) -> Result<Self, Self::Error> {
        Composition::from_counts(counts)
    }
}

impl TryFrom<&[usize]> for Composition {
    type Error = NecklaceError;

    fn try_from(counts: &[usize]) -> Result<Self, Self::Error> {
        Composition::from_counts(counts.to_vec())
    }
}

impl<const K: usize> TryFrom<[usize; K]> for Composition {
    type Error = NecklaceError;

    fn try_from(counts: [usize; K]) -> Result<Self, Self::Error> {
        Composition::from_counts(counts.to_vec())
    }
}

/// Binding-style input: plain integers that may be negative.
impl TryFrom<&[i64]> for Composition {
    type Error = NecklaceError;

    fn try_from(values: &[i64]) -> Result<Self, Self::Error> {
        let counts = values.iter()
            .enumerate()
            .map(|(label, &value)| usize::try_from(value)
                .map_err(|_| match value {
                    v if v < 0 => NecklaceError::NegativeCount { label, value },
                    _ => NecklaceError::TooManyBeads,
                }))
            .collect::<Result<Vec<_>, _>>()?;
        Composition::from_counts(counts)
    }
}

impl TryFrom<&Composition> for Composition {
    type Error = NecklaceError;

    fn try_from(c: &Composition) -> Result<Self, Self::Error> {
        Ok(c.clone())
    }
}

/// Parses `"3,1,2"`, `"3 1 2"` or `"(3, 1, 2)"`.
impl FromStr for Composition {
    type Err = NecklaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_start_matches('(').trim_end_matches(')');
        let values = trimmed
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
            .map(|t| t.parse::<i64>().map_err(|_| NecklaceError::ParseCount(t.to_string())))
            .collect::<Result<Vec<_>, _>>()?;
        Composition::try_from(&values[..])
    }
}

impl fmt::Display for Composition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, c) in self.counts.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{c}")?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_order_by_count() {
        let c = Composition::try_from([3usize, 1, 2]).unwrap();
        assert_eq!(c.label_order(), &[1, 2, 0]);
        assert_eq!(c.rank(1), Some(0));
        assert_eq!(c.rank(0), Some(2));
        assert_eq!(c.rank_counts(), vec![1, 2, 3]);
        assert_eq!(c.total(), 6);
        assert_eq!(c.label(0), Some(1));
        assert_eq!(c.label(2), Some(0));
        assert_eq!(c.label(3), None);
    }

    #[test]
    fn test_label_order_ties_and_zeros() {
        let c = Composition::try_from([2usize, 0, 2, 1]).unwrap();
        assert_eq!(c.label_order(), &[3, 0, 2]);
        assert_eq!(c.rank(1), None);
        assert_eq!(c.num_labels(), 4);
    }

    #[test]
    fn test_invalid_compositions() {
        assert_eq!(Composition::try_from(Vec::<usize>::new()), Err(NecklaceError::EmptyComposition));
        assert_eq!(Composition::try_from([0usize, 0]), Err(NecklaceError::NoBeads));
        let neg: &[i64] = &[1, -1, 2];
        assert_eq!(Composition::try_from(neg), Err(NecklaceError::NegativeCount { label: 1, value: -1 }));
    }

    #[test]
    fn test_bead_total_overflow() {
        let huge: &[i64] = &[i64::MAX, i64::MAX, 4];
        let err = Composition::try_from(huge).unwrap_err();
        assert_eq!(err, NecklaceError::TooManyBeads);
        assert!(err.is_invalid_input());
        assert_eq!(Composition::try_from([usize::MAX, 1]), Err(NecklaceError::TooManyBeads));
        assert_eq!(Composition::try_from([usize::MAX, 0]).unwrap().total(), usize::MAX);
    }

    #[test]
    fn test_from_str() {
        let c: Composition = "3,1,2".parse().unwrap();
        assert_eq!(c.counts(), &[3, 1, 2]);
        let c: Composition = "(1, 1, 1, 1)".parse().unwrap();
        assert_eq!(c.counts(), &[1, 1, 1, 1]);
        assert_eq!(format!("{}", c), "(1, 1, 1, 1)");
        assert_eq!("3,x".parse::<Composition>(), Err(NecklaceError::ParseCount("x".to_string())));
        assert_eq!("".parse::<Composition>(), Err(NecklaceError::EmptyComposition));
    }

    #[test]
    fn test_rank_translation() {
        let c = Composition::try_from([3usize, 1, 2]).unwrap();
        let ranks = c.to_ranks(&[0, 1, 2, 0, 2, 0]).unwrap();
        assert_eq!(ranks, vec![2, 0, 1, 2, 1, 2]);
        assert_eq!(c.to_labels(&ranks), vec![0, 1, 2, 0, 2, 0]);
        assert!(matches!(c.to_ranks(&[0, 1, 2]), Err(NecklaceError::ContentMismatch { .. })));
        assert!(matches!(c.to_ranks(&[0, 0, 0, 1, 2, 3]), Err(NecklaceError::ContentMismatch { .. })));
    }
}
