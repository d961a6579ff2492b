use std::convert::Infallible;
use thiserror::Error;

/// Error type for composition handling, enumeration and counting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NecklaceError {
    /// The composition has no entries at all.
    #[error("composition is empty")]
    EmptyComposition,

    /// A multiplicity was negative (binding-style integer input).
    #[error("negative count {value} for label {label}")]
    NegativeCount { label: usize, value: i64 },

    /// All multiplicities are zero: there are no beads to arrange.
    #[error("composition has no beads (all counts are zero)")]
    NoBeads,

    /// The bead total does not fit into `usize`.
    #[error("composition has more beads than fit into usize")]
    TooManyBeads,

    /// A count could not be parsed from text.
    #[error("cannot parse count '{0}'")]
    ParseCount(String),

    /// A sequence does not have the label content of the composition.
    #[error("sequence content {found:?} does not match composition {expected:?}")]
    ContentMismatch { expected: Vec<usize>, found: Vec<usize> },

    /// The reference count does not fit into `u128`.
    #[error("necklace count overflows u128")]
    CountOverflow,
}

impl From<Infallible> for NecklaceError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

impl NecklaceError {
    /// True for all errors caused by an unusable composition.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            NecklaceError::EmptyComposition
                | NecklaceError::NegativeCount { .. }
                | NecklaceError::NoBeads
                | NecklaceError::TooManyBeads
                | NecklaceError::ParseCount(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_kinds() {
        assert!(NecklaceError::EmptyComposition.is_invalid_input());
        assert!(NecklaceError::NoBeads.is_invalid_input());
        assert!(NecklaceError::NegativeCount { label: 1, value: -2 }.is_invalid_input());
        assert!(!NecklaceError::CountOverflow.is_invalid_input());
    }

    #[test]
    fn test_display() {
        let e = NecklaceError::NegativeCount { label: 2, value: -1 };
        assert_eq!(format!("{}", e), "negative count -1 for label 2");
    }
}
