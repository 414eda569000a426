//! Ray stepping and range queries.

use quadray_core::Cell;
use quadray_lattice::QuadLattice;

/// Cells visible from `origin` along `direction`, origin excluded.
///
/// Walks `origin + k·direction` for `k = 1, 2, …` and stops at the first
/// step that is out of bounds or blocked (that cell is not returned), or
/// after `max_range` steps. A zero direction yields nothing.
pub fn line_of_sight<B>(
    lattice: &QuadLattice,
    origin: Cell,
    direction: Cell,
    is_blocking: B,
    max_range: Option<u32>,
) -> Vec<Cell>
where
    B: Fn(Cell) -> bool,
{
    if direction == [0, 0, 0, 0] {
        return Vec::new();
    }
    let limit = max_range.unwrap_or(u32::MAX);
    let mut out = Vec::new();
    let mut cursor = origin;
    for _ in 0..limit {
        let Some(next) = checked_step(cursor, direction) else {
            break;
        };
        if !lattice.in_bounds(&next) || is_blocking(next) {
            break;
        }
        out.push(next);
        cursor = next;
    }
    out
}

fn checked_step(cell: Cell, delta: Cell) -> Option<Cell> {
    let mut out = [0i32; 4];
    for i in 0..4 {
        out[i] = cell[i].checked_add(delta[i])?;
    }
    Some(out)
}

/// In-bounds cells whose Manhattan distance from `center` is in
/// `(0, radius]`, in lexicographic order.
///
/// `center` itself may lie outside the lattice.
pub fn cells_in_range(lattice: &QuadLattice, center: Cell, radius: u32) -> Vec<Cell> {
    let r = i64::from(radius);
    let hi_bound = i64::from(lattice.size()) - 1;
    let axis_range = |axis: usize| {
        let c = i64::from(center[axis]);
        (c - r).max(0)..=(c + r).min(hi_bound)
    };

    let mut out = Vec::new();
    for a in axis_range(0) {
        let da = (a - i64::from(center[0])).abs();
        if da > r {
            continue;
        }
        for b in axis_range(1) {
            let db = da + (b - i64::from(center[1])).abs();
            if db > r {
                continue;
            }
            for c in axis_range(2) {
                let dc = db + (c - i64::from(center[2])).abs();
                if dc > r {
                    continue;
                }
                for d in axis_range(3) {
                    let dist = dc + (d - i64::from(center[3])).abs();
                    if dist > 0 && dist <= r {
                        out.push([a as i32, b as i32, c as i32, d as i32]);
                    }
                }
            }
        }
    }
    out
}
