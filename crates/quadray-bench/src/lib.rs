//! Benchmark boards for the quadray lattice engine.
//!
//! - [`reference_board`]: 8⁴ lattice (4096 cells) with 20% walls
//! - [`stress_board`]: 16⁴ lattice (65536 cells) with 20% walls
//! - [`scatter_walls`]: deterministic wall placement via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use indexmap::IndexSet;
use quadray_core::Cell;
use quadray_lattice::QuadLattice;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A lattice plus a wall set, with the two corners kept clear.
pub struct BenchBoard {
    /// The lattice.
    pub lattice: QuadLattice,
    /// Blocked cells.
    pub walls: IndexSet<Cell>,
}

impl BenchBoard {
    /// Walkability predicate for searches.
    pub fn is_walkable(&self, cell: Cell) -> bool {
        !self.walls.contains(&cell)
    }

    /// The all-zero corner.
    pub fn start(&self) -> Cell {
        [0, 0, 0, 0]
    }

    /// The far corner.
    pub fn goal(&self) -> Cell {
        let m = self.lattice.size() as i32 - 1;
        [m, m, m, m]
    }
}

/// Build a reference benchmark board: 8⁴ cells, 20% walls.
pub fn reference_board(seed: u64) -> BenchBoard {
    board(8, 0.2, seed)
}

/// Build a stress benchmark board: 16⁴ cells, 20% walls.
pub fn stress_board(seed: u64) -> BenchBoard {
    board(16, 0.2, seed)
}

fn board(size: u32, density: f64, seed: u64) -> BenchBoard {
    let lattice = QuadLattice::new(size).expect("benchmark sizes are valid");
    let mut walls = scatter_walls(&lattice, density, seed);
    let m = size as i32 - 1;
    walls.shift_remove(&[0, 0, 0, 0]);
    walls.shift_remove(&[m, m, m, m]);
    BenchBoard { lattice, walls }
}

/// Mark each cell of `lattice` as a wall with probability `density`.
///
/// Deterministic per seed. `density` is clamped to `[0, 1]`.
pub fn scatter_walls(lattice: &QuadLattice, density: f64, seed: u64) -> IndexSet<Cell> {
    let p = density.clamp(0.0, 1.0);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    lattice.cells().filter(|_| rng.random_bool(p)).collect()
}
