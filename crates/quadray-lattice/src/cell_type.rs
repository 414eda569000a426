//! Tetra/octa classification of lattice cells.

use quadray_core::Cell;
use std::fmt;

/// The two kinds of space-filling cell in the IVM.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellType {
    /// Odd component sum.
    Tetra,
    /// Even component sum.
    Octa,
}

impl fmt::Display for CellType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tetra => write!(f, "tetra"),
            Self::Octa => write!(f, "octa"),
        }
    }
}

/// Classify `cell` by the parity of its component sum.
///
/// Adding `(1, 1, 1, 1)` changes the sum by 4, so every spelling of a point
/// gets the same type.
pub fn cell_type(cell: Cell) -> CellType {
    let sum: i64 = cell.iter().map(|&v| i64::from(v)).sum();
    if sum.rem_euclid(2) == 1 {
        CellType::Tetra
    } else {
        CellType::Octa
    }
}
