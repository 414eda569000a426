//! Error types for lattice construction.

use std::error::Error;
use std::fmt;

/// Errors arising from lattice construction.
///
/// Out-of-bounds neighbours and unreachable cells are not errors: they are
/// filtered or reported as empty results. These variants cover genuine
/// misuse only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LatticeError {
    /// Attempted to construct a lattice with zero cells.
    EmptyLattice,
    /// The lattice edge exceeds what `i32` coordinates can address.
    SizeTooLarge {
        /// The requested edge length.
        size: u32,
        /// Largest accepted edge length.
        max: u32,
    },
    /// `size⁴` does not fit in `usize`.
    CellCountOverflow {
        /// The requested edge length.
        size: u32,
    },
}

impl fmt::Display for LatticeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyLattice => write!(f, "lattice must have at least one cell"),
            Self::SizeTooLarge { size, max } => {
                write!(f, "lattice size {size} exceeds maximum {max}")
            }
            Self::CellCountOverflow { size } => {
                write!(f, "lattice size {size} overflows the cell count ({size}^4)")
            }
        }
    }
}

impl Error for LatticeError {}
