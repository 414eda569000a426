//! Instrumented predicates and canned layouts.
//!
//! - [`CountingWalkable`]: counts how often a search consults the board.
//! - [`corridor`]: a single open line through an otherwise solid lattice.

use crate::Board;
use quadray_core::Cell;
use quadray_lattice::QuadLattice;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Wraps a board and counts predicate calls.
pub struct CountingWalkable<'a> {
    board: &'a Board,
    calls: AtomicUsize,
}

impl<'a> CountingWalkable<'a> {
    pub fn new(board: &'a Board) -> Self {
        Self {
            board,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn check(&self, cell: Cell) -> bool {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.board.is_walkable(cell)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

/// Every cell of `lattice` is a wall except the line `[0..size, 0, 0, 0]`.
pub fn corridor(lattice: &QuadLattice) -> Board {
    Board::with_walls(lattice.cells().filter(|c| c[1] != 0 || c[2] != 0 || c[3] != 0))
}
