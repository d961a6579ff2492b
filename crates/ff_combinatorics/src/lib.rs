//! The ff_combinatorics crate.
//!
//! Combinatorics for multi-strand nucleic acid systems:
//!  - Compositions (how many strands of each type).
//!  - Necklace enumeration: all distinct circular strand orderings.
//!  - Reference necklace counts (Burnside).
//!  - Rotational symmetry of cyclic sequences.
//!

mod error;
mod composition;
mod necklace;
mod enumeration;
mod counting;
mod symmetry;

pub use error::*;
pub use composition::*;
pub use necklace::*;
pub use enumeration::*;
pub use counting::*;
pub use symmetry::*;

/// A bead label: the index of its class in the `Composition`.
pub type Label = usize;
