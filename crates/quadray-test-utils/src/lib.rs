//! Test boards and walkability fixtures for quadray development.
//!
//! Searches take their board as closures. [`Board`] is a small wall set
//! that turns into those closures, and [`fixtures`] holds instrumented
//! predicates and canned layouts.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use indexmap::{IndexMap, IndexSet};
use quadray_core::Cell;
use quadray_lattice::QuadLattice;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Every cell is walkable.
pub fn open(_cell: Cell) -> bool {
    true
}

/// A board whose only obstacles are `cells`.
pub fn walls(cells: &[Cell]) -> Board {
    Board::with_walls(cells.iter().copied())
}

/// Walls keyed by raw lattice cell, plus optional per-cell entry costs.
#[derive(Clone, Debug)]
pub struct Board {
    walls: IndexSet<Cell>,
    costs: IndexMap<Cell, f64>,
    default_cost: f64,
}

impl Board {
    pub fn new() -> Self {
        Self {
            walls: IndexSet::new(),
            costs: IndexMap::new(),
            default_cost: 1.0,
        }
    }

    pub fn with_walls(cells: impl IntoIterator<Item = Cell>) -> Self {
        let mut board = Self::new();
        board.walls.extend(cells);
        board
    }

    /// Scatter walls over `lattice` with probability `density`, keeping
    /// `keep_clear` open. Deterministic per seed.
    pub fn random(lattice: &QuadLattice, density: f64, seed: u64, keep_clear: &[Cell]) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let cells = lattice
            .cells()
            .filter(|c| !keep_clear.contains(c))
            .filter(|_| rng.random_bool(density))
            .collect::<Vec<_>>();
        Self::with_walls(cells)
    }

    pub fn add_wall(&mut self, cell: Cell) -> &mut Self {
        self.walls.insert(cell);
        self
    }

    pub fn set_cost(&mut self, cell: Cell, cost: f64) -> &mut Self {
        self.costs.insert(cell, cost);
        self
    }

    pub fn is_walkable(&self, cell: Cell) -> bool {
        !self.walls.contains(&cell)
    }

    pub fn is_blocking(&self, cell: Cell) -> bool {
        self.walls.contains(&cell)
    }

    pub fn cost(&self, cell: Cell) -> f64 {
        self.costs.get(&cell).copied().unwrap_or(self.default_cost)
    }

    pub fn wall_count(&self) -> usize {
        self.walls.len()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
