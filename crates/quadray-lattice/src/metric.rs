//! Distance metrics.

use quadray_core::{Cell, Quadray};

/// Componentwise L1 distance on raw components.
///
/// Not invariant under the `(1, 1, 1, 1)` shift: two spellings of the same
/// point can be a nonzero Manhattan distance apart. Normalize first when
/// that matters.
pub fn manhattan(p: &Quadray, q: &Quadray) -> f64 {
    let (p, q) = (p.components(), q.components());
    (0..4).map(|i| (p[i] - q[i]).abs()).sum()
}

/// Manhattan distance between two integer cells.
///
/// Computed in `i64` so extreme `i32` components cannot overflow.
pub fn manhattan_cells(p: Cell, q: Cell) -> u64 {
    (0..4)
        .map(|i| (i64::from(p[i]) - i64::from(q[i])).unsigned_abs())
        .sum()
}

/// Componentwise L2 distance on raw components.
///
/// This is a cheap heuristic number, not the native distance: it is neither
/// shift invariant nor scaled like [`Quadray::distance_to`].
pub fn euclidean(p: &Quadray, q: &Quadray) -> f64 {
    let (p, q) = (p.components(), q.components());
    (0..4).map(|i| (p[i] - q[i]).powi(2)).sum::<f64>().sqrt()
}
