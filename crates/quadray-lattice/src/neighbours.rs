//! The three adjacency families and their fixed offset tables.
//!
//! Table order is part of the contract: index-based controls map directly
//! onto [`AXIAL_8`], and every consumer sees neighbours in the same order.

use crate::metric::manhattan_cells;
use quadray_core::Cell;
use smallvec::SmallVec;

/// ±1 along each axis: `+a, -a, +b, -b, +c, -c, +d, -d`.
pub const AXIAL_8: [Cell; 8] = [
    [1, 0, 0, 0],
    [-1, 0, 0, 0],
    [0, 1, 0, 0],
    [0, -1, 0, 0],
    [0, 0, 1, 0],
    [0, 0, -1, 0],
    [0, 0, 0, 1],
    [0, 0, 0, -1],
];

/// The twelve kissing offsets: every permutation of `(2, 1, 1, 0)`, in
/// lexicographic order.
///
/// Each names the direction `e_i - e_j` (the entry minus `(1, 1, 1, 1)`),
/// spelled with non-negative components. Opposite directions pair up as
/// `off` and `(2, 2, 2, 2) - off`.
pub const KISSING_12: [Cell; 12] = [
    [0, 1, 1, 2],
    [0, 1, 2, 1],
    [0, 2, 1, 1],
    [1, 0, 1, 2],
    [1, 0, 2, 1],
    [1, 1, 0, 2],
    [1, 1, 2, 0],
    [1, 2, 0, 1],
    [1, 2, 1, 0],
    [2, 0, 1, 1],
    [2, 1, 0, 1],
    [2, 1, 1, 0],
];

/// Every nonzero offset in `{-1, 0, 1}⁴`, in lexicographic order.
pub const DENSE_80: [Cell; 80] = dense_offsets();

const fn dense_offsets() -> [Cell; 80] {
    let mut out = [[0i32; 4]; 80];
    let mut n = 0;
    let mut i = 0;
    while i < 81 {
        let off = [
            (i / 27) as i32 - 1,
            (i / 9 % 3) as i32 - 1,
            (i / 3 % 3) as i32 - 1,
            (i % 3) as i32 - 1,
        ];
        if !(off[0] == 0 && off[1] == 0 && off[2] == 0 && off[3] == 0) {
            out[n] = off;
            n += 1;
        }
        i += 1;
    }
    out
}

/// Explicit choice of adjacency family for searches.
///
/// A search that walks the lattice carries one of these. The default is
/// [`Neighbourhood::Axial8`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Neighbourhood {
    /// [`AXIAL_8`].
    #[default]
    Axial8,
    /// [`KISSING_12`].
    Kissing12,
    /// [`DENSE_80`].
    Dense80,
}

impl Neighbourhood {
    /// The offset table of this family.
    pub fn offsets(self) -> &'static [Cell] {
        match self {
            Self::Axial8 => &AXIAL_8,
            Self::Kissing12 => &KISSING_12,
            Self::Dense80 => &DENSE_80,
        }
    }

    /// Number of neighbours of an unbounded cell.
    pub fn degree(self) -> usize {
        self.offsets().len()
    }

    /// Whether bounded steps may slide along `(1, 1, 1, 1)` to an in-bounds
    /// spelling of the same point.
    ///
    /// Only kissing adjacency is defined on points rather than tuples.
    pub fn shifts_into_bounds(self) -> bool {
        matches!(self, Self::Kissing12)
    }

    /// Whether one step of this family leads from `from` to `to`.
    ///
    /// Axial and dense steps compare raw tuples. Kissing steps compare
    /// points: `to` may be any spelling of `from + offset`.
    pub fn is_step(self, from: Cell, to: Cell) -> bool {
        let delta = diff(from, to);
        match self {
            Self::Kissing12 => {
                let min = delta.iter().copied().fold(i64::MAX, i64::min);
                let normal = delta.map(|v| v - min);
                KISSING_12.iter().any(|off| off.map(i64::from) == normal)
            }
            _ => self.offsets().iter().any(|off| off.map(i64::from) == delta),
        }
    }

    /// Lower bound on the number of steps from `from` to `to`.
    ///
    /// Axial: Manhattan distance. Dense: the largest per-axis difference.
    /// Kissing: half the Manhattan length of the shortest spelling of the
    /// difference, rounded up, since each step moves the point by one
    /// `e_i - e_j`.
    pub fn min_steps(self, from: Cell, to: Cell) -> u64 {
        let delta = diff(from, to);
        match self {
            Self::Axial8 => manhattan_cells(from, to),
            Self::Dense80 => delta.iter().map(|v| v.unsigned_abs()).max().unwrap_or(0),
            Self::Kissing12 => {
                let mut sorted = delta;
                sorted.sort_unstable();
                // L1 of `delta + k(1,1,1,1)` is smallest with k between
                // the two middle values.
                let spread = (sorted[3] - sorted[0]) + (sorted[2] - sorted[1]);
                (spread as u64).div_ceil(2)
            }
        }
    }
}

fn diff(from: Cell, to: Cell) -> [i64; 4] {
    [0, 1, 2, 3].map(|i| i64::from(to[i]) - i64::from(from[i]))
}

#[inline]
pub(crate) fn offset(cell: Cell, delta: Cell) -> Cell {
    [
        cell[0] + delta[0],
        cell[1] + delta[1],
        cell[2] + delta[2],
        cell[3] + delta[3],
    ]
}

/// The 8 axis neighbours of `cell`, unbounded, in [`AXIAL_8`] order.
pub fn neighbors8(cell: Cell) -> SmallVec<[Cell; 8]> {
    AXIAL_8.iter().map(|&d| offset(cell, d)).collect()
}

/// The 12 kissing neighbours of `cell`, unbounded, in [`KISSING_12`] order.
pub fn neighbors_ivm12(cell: Cell) -> SmallVec<[Cell; 12]> {
    KISSING_12.iter().map(|&d| offset(cell, d)).collect()
}

/// The 80 dense neighbours of `cell`, unbounded, in [`DENSE_80`] order.
pub fn neighbors80(cell: Cell) -> Vec<Cell> {
    DENSE_80.iter().map(|&d| offset(cell, d)).collect()
}
