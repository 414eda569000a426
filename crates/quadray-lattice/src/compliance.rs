//! Lattice compliance test helpers.
//!
//! These functions check the invariants every bounded lattice must satisfy,
//! across all three adjacency families. Reused by the lattice tests at
//! several sizes.

use crate::lattice::QuadLattice;
use crate::neighbours::Neighbourhood;
use indexmap::IndexSet;
use quadray_core::{Cell, CellKey};

const FAMILIES: [Neighbourhood; 3] = [
    Neighbourhood::Axial8,
    Neighbourhood::Kissing12,
    Neighbourhood::Dense80,
];

/// Assert that `b in N(a)` implies `a in N(b)` for every family.
///
/// Kissing adjacency is checked on points: some neighbour of `b` must be a
/// spelling of `a`.
pub fn assert_neighbours_symmetric(lattice: &QuadLattice) {
    for family in FAMILIES {
        for cell in lattice.cells() {
            for nb in lattice.neighbours_in(family, cell) {
                let back = lattice.neighbours_in(family, nb);
                let found = if family.shifts_into_bounds() {
                    let key = CellKey::from_cell(cell);
                    back.iter().any(|&c| CellKey::from_cell(c) == key)
                } else {
                    back.contains(&cell)
                };
                assert!(
                    found,
                    "{family:?} symmetry violated: {nb:?} in N({cell:?}) but not the reverse"
                );
            }
        }
    }
}

/// Assert that no cell is its own neighbour and no neighbour repeats.
pub fn assert_neighbours_distinct(lattice: &QuadLattice) {
    for family in FAMILIES {
        for cell in lattice.cells() {
            let nbs = lattice.neighbours_in(family, cell);
            assert!(!nbs.contains(&cell), "{family:?}: {cell:?} is its own neighbour");
            let unique: IndexSet<Cell> = nbs.iter().copied().collect();
            assert_eq!(unique.len(), nbs.len(), "{family:?}: duplicate neighbours of {cell:?}");
        }
    }
}

/// Assert that every bounded neighbour is in bounds and one step away.
pub fn assert_neighbours_in_bounds(lattice: &QuadLattice) {
    for family in FAMILIES {
        for cell in lattice.cells() {
            for nb in lattice.neighbours_in(family, cell) {
                assert!(lattice.in_bounds(&nb), "{family:?}: {nb:?} out of bounds");
                assert!(
                    family.is_step(cell, nb),
                    "{family:?}: {cell:?} -> {nb:?} is not a single step"
                );
            }
        }
    }
}

/// Assert that a cell with room on every side keeps its full degree.
///
/// Kissing room is measured by spread, the gap between the largest and
/// smallest component.
pub fn assert_interior_degree(lattice: &QuadLattice) {
    let s = lattice.size() as i32;
    if s < 3 {
        return;
    }
    for cell in lattice.cells() {
        if cell.iter().all(|&v| v > 0 && v < s - 1) {
            for family in [Neighbourhood::Axial8, Neighbourhood::Dense80] {
                assert_eq!(
                    lattice.neighbours_in(family, cell).len(),
                    family.degree(),
                    "{family:?}: interior {cell:?}"
                );
            }
        }
        // A kissing step widens the spread by at most 2.
        let hi = cell.iter().copied().max().unwrap_or(0);
        let lo = cell.iter().copied().min().unwrap_or(0);
        let spread = hi - lo;
        if spread <= s - 3 {
            assert_eq!(
                lattice.bounded_neighbors_ivm12(cell).len(),
                12,
                "kissing degree of {cell:?}"
            );
        }
    }
}

/// Assert that `generate_grid` returns exactly `cell_count` unique cells.
pub fn assert_grid_complete(lattice: &QuadLattice) {
    let grid = lattice.generate_grid();
    assert_eq!(grid.len(), lattice.cell_count(), "grid length != cell_count");
    let unique: IndexSet<Cell> = grid.iter().copied().collect();
    assert_eq!(unique.len(), grid.len(), "grid contains duplicates");
    assert!(grid.iter().all(|c| lattice.in_bounds(c)), "grid escapes bounds");
}

/// Assert that two calls to `generate_grid` agree.
pub fn assert_grid_deterministic(lattice: &QuadLattice) {
    assert_eq!(
        lattice.generate_grid(),
        lattice.generate_grid(),
        "generate_grid is non-deterministic"
    );
}

/// Assert that `canonical_rank` and `cell_at` are inverse.
pub fn assert_rank_roundtrip(lattice: &QuadLattice) {
    for (i, cell) in lattice.cells().enumerate() {
        assert_eq!(lattice.canonical_rank(&cell), Some(i), "rank of {cell:?}");
        assert_eq!(lattice.cell_at(i), Some(cell), "cell at rank {i}");
    }
}

/// Run all compliance checks.
pub fn run_full_compliance(lattice: &QuadLattice) {
    assert_neighbours_symmetric(lattice);
    assert_neighbours_distinct(lattice);
    assert_neighbours_in_bounds(lattice);
    assert_interior_degree(lattice);
    assert_grid_complete(lattice);
    assert_grid_deterministic(lattice);
    assert_rank_roundtrip(lattice);
}
