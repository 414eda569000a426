//! The bounded `size⁴` lattice.
//!
//! # Coordinate System
//!
//! Integer tuples `[a, b, c, d]` with every component in `[0, size)`. The
//! tuples are raw: a bounded lattice does not collapse `[0, 0, 0, 0]` and
//! `[1, 1, 1, 1]` even though both name the origin, because boards built on
//! it index every tuple separately.
//!
//! Canonical ordering is a-major lexicographic (`d` varies fastest).

use crate::error::LatticeError;
use crate::neighbours::Neighbourhood;
use quadray_core::Cell;
use rand::Rng;
use smallvec::SmallVec;

/// Whether every component of `cell` lies in `[0, size)`.
pub fn in_bounds(cell: &Cell, size: u32) -> bool {
    cell.iter().all(|&v| v >= 0 && (v as u32) < size)
}

/// A bounded four-dimensional lattice of `size⁴` cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct QuadLattice {
    size: u32,
    cell_count: usize,
}

impl QuadLattice {
    /// Maximum edge length: coordinates use `i32`, so each axis must fit.
    pub const MAX_SIZE: u32 = i32::MAX as u32;

    /// Create a lattice with edge length `size`.
    ///
    /// Returns `Err(LatticeError::EmptyLattice)` if `size` is 0,
    /// `Err(LatticeError::SizeTooLarge)` if it exceeds `i32::MAX`, or
    /// `Err(LatticeError::CellCountOverflow)` if `size⁴` overflows `usize`.
    pub fn new(size: u32) -> Result<Self, LatticeError> {
        if size == 0 {
            return Err(LatticeError::EmptyLattice);
        }
        if size > Self::MAX_SIZE {
            return Err(LatticeError::SizeTooLarge {
                size,
                max: Self::MAX_SIZE,
            });
        }
        let cell_count = (size as usize)
            .checked_pow(4)
            .ok_or(LatticeError::CellCountOverflow { size })?;
        Ok(Self { size, cell_count })
    }

    /// Edge length.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Total number of cells, `size⁴`.
    pub fn cell_count(&self) -> usize {
        self.cell_count
    }

    /// Always `false`: construction rejects empty lattices.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether `cell` lies inside this lattice.
    pub fn in_bounds(&self, cell: &Cell) -> bool {
        in_bounds(cell, self.size)
    }

    /// The spelling of `cell`'s point inside this lattice that is nearest
    /// to `cell` along `(1, 1, 1, 1)`, or `None` if the point has none.
    ///
    /// An in-bounds cell is returned unchanged. A point has an in-bounds
    /// spelling exactly when its largest and smallest components differ by
    /// less than `size`.
    pub fn in_bounds_copy(&self, cell: Cell) -> Option<Cell> {
        let wide = cell.map(i64::from);
        let min = wide.iter().copied().fold(i64::MAX, i64::min);
        let max = wide.iter().copied().fold(i64::MIN, i64::max);
        let lo = -min;
        let hi = i64::from(self.size) - 1 - max;
        if lo > hi {
            return None;
        }
        let k = 0i64.clamp(lo, hi);
        // Every shifted component lands in [0, size), which fits i32.
        Some(wide.map(|v| (v + k) as i32))
    }

    /// In-bounds neighbours of `cell` under `family`, in offset-table order.
    ///
    /// Axial and dense steps that leave the lattice are dropped. A kissing
    /// step that leaves it moves to [`in_bounds_copy`](Self::in_bounds_copy)
    /// of the stepped cell, and is dropped only when that point has no
    /// spelling inside.
    pub fn steps(&self, family: Neighbourhood, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        family.offsets().iter().filter_map(move |&delta| {
            let mut out = [0i32; 4];
            for i in 0..4 {
                out[i] = cell[i].checked_add(delta[i])?;
            }
            if family.shifts_into_bounds() {
                self.in_bounds_copy(out)
            } else {
                self.in_bounds(&out).then_some(out)
            }
        })
    }

    /// In-bounds neighbours under an explicitly chosen family.
    pub fn neighbours_in(&self, family: Neighbourhood, cell: Cell) -> Vec<Cell> {
        self.steps(family, cell).collect()
    }

    /// In-bounds axis neighbours, in [`AXIAL_8`](crate::AXIAL_8) order.
    ///
    /// A corner such as `[0, 0, 0, 0]` has 4; an interior cell has 8.
    pub fn bounded_neighbors(&self, cell: Cell) -> SmallVec<[Cell; 8]> {
        self.steps(Neighbourhood::Axial8, cell).collect()
    }

    /// In-bounds kissing neighbours, in [`KISSING_12`](crate::KISSING_12) order.
    ///
    /// The origin of a lattice of size 3 or more has all 12. A step that
    /// leaves the lattice is replaced by its nearest in-bounds spelling;
    /// see [`steps`](Self::steps).
    pub fn bounded_neighbors_ivm12(&self, cell: Cell) -> SmallVec<[Cell; 12]> {
        self.steps(Neighbourhood::Kissing12, cell).collect()
    }

    /// In-bounds dense neighbours, in [`DENSE_80`](crate::DENSE_80) order.
    pub fn bounded_neighbors80(&self, cell: Cell) -> Vec<Cell> {
        self.steps(Neighbourhood::Dense80, cell).collect()
    }

    /// Iterate over all cells in canonical order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let s = self.size as i32;
        (0..s).flat_map(move |a| {
            (0..s).flat_map(move |b| (0..s).flat_map(move |c| (0..s).map(move |d| [a, b, c, d])))
        })
    }

    /// All `size⁴` cells in canonical order.
    pub fn generate_grid(&self) -> Vec<Cell> {
        let out: Vec<Cell> = self.cells().collect();
        debug_assert_eq!(
            out.len(),
            self.cell_count,
            "generate_grid produced {} cells but cell_count is {}",
            out.len(),
            self.cell_count
        );
        out
    }

    /// Position of `cell` in the canonical ordering, or `None` if out of bounds.
    pub fn canonical_rank(&self, cell: &Cell) -> Option<usize> {
        if !self.in_bounds(cell) {
            return None;
        }
        let s = self.size as usize;
        Some(cell.iter().fold(0usize, |acc, &v| acc * s + v as usize))
    }

    /// Inverse of [`canonical_rank`](Self::canonical_rank).
    pub fn cell_at(&self, rank: usize) -> Option<Cell> {
        if rank >= self.cell_count {
            return None;
        }
        let s = self.size as usize;
        let mut rest = rank;
        let mut cell = [0i32; 4];
        for slot in cell.iter_mut().rev() {
            *slot = (rest % s) as i32;
            rest /= s;
        }
        Some(cell)
    }

    /// A uniformly random cell of this lattice.
    pub fn random_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> Cell {
        let s = self.size as i32;
        [
            rng.random_range(0..s),
            rng.random_range(0..s),
            rng.random_range(0..s),
            rng.random_range(0..s),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use indexmap::IndexSet;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    // ── Constructor tests ─────────────────────────────────────────

    #[test]
    fn new_zero_size() {
        assert_eq!(QuadLattice::new(0), Err(LatticeError::EmptyLattice));
    }

    #[test]
    fn new_size_too_large() {
        let big = i32::MAX as u32 + 1;
        assert_eq!(
            QuadLattice::new(big),
            Err(LatticeError::SizeTooLarge {
                size: big,
                max: QuadLattice::MAX_SIZE
            })
        );
    }

    #[test]
    fn new_cell_count_overflow() {
        // 2^16 ^ 4 = 2^64 overflows a 64-bit usize.
        assert!(matches!(
            QuadLattice::new(1 << 16),
            Err(LatticeError::CellCountOverflow { .. })
        ));
    }

    #[test]
    fn cell_count_is_size_to_the_fourth() {
        assert_eq!(QuadLattice::new(1).unwrap().cell_count(), 1);
        assert_eq!(QuadLattice::new(3).unwrap().cell_count(), 81);
        assert_eq!(QuadLattice::new(5).unwrap().cell_count(), 625);
    }

    // ── Bounds ────────────────────────────────────────────────────

    #[test]
    fn in_bounds_edges() {
        assert!(in_bounds(&[0, 0, 0, 0], 4));
        assert!(in_bounds(&[3, 3, 3, 3], 4));
        assert!(!in_bounds(&[4, 0, 0, 0], 4));
        assert!(!in_bounds(&[0, 0, -1, 0], 4));
    }

    // ── Neighbour tests ───────────────────────────────────────────

    #[test]
    fn bounded_neighbors_corner() {
        let l = QuadLattice::new(4).unwrap();
        let n = l.bounded_neighbors([0, 0, 0, 0]);
        assert_eq!(n.len(), 4);
        assert_eq!(
            n.as_slice(),
            &[[1, 0, 0, 0], [0, 1, 0, 0], [0, 0, 1, 0], [0, 0, 0, 1]]
        );
    }

    #[test]
    fn bounded_neighbors_interior() {
        let l = QuadLattice::new(4).unwrap();
        assert_eq!(l.bounded_neighbors([1, 2, 1, 2]).len(), 8);
    }

    #[test]
    fn bounded_neighbors_far_corner() {
        let l = QuadLattice::new(4).unwrap();
        let n = l.bounded_neighbors([3, 3, 3, 3]);
        assert_eq!(
            n.as_slice(),
            &[[2, 3, 3, 3], [3, 2, 3, 3], [3, 3, 2, 3], [3, 3, 3, 2]]
        );
    }

    #[test]
    fn bounded_neighbors_of_out_of_bounds_cell() {
        let l = QuadLattice::new(4).unwrap();
        // Only the step back inside survives.
        assert_eq!(l.bounded_neighbors([4, 1, 1, 1]).as_slice(), &[[3, 1, 1, 1]]);
        assert!(l.bounded_neighbors([i32::MAX, 0, 0, 0]).is_empty());
    }

    #[test]
    fn single_cell_lattice() {
        let l = QuadLattice::new(1).unwrap();
        assert!(l.bounded_neighbors([0, 0, 0, 0]).is_empty());
        assert!(l.bounded_neighbors_ivm12([0, 0, 0, 0]).is_empty());
        assert!(l.bounded_neighbors80([0, 0, 0, 0]).is_empty());
    }

    #[test]
    fn bounded_ivm12_origin_has_all_twelve() {
        let l = QuadLattice::new(4).unwrap();
        let n = l.bounded_neighbors_ivm12([0, 0, 0, 0]);
        assert_eq!(n.as_slice(), &crate::KISSING_12);
        assert_eq!(l.bounded_neighbors_ivm12([1, 1, 1, 1]).len(), 12);
    }

    #[test]
    fn bounded_ivm12_shifts_overflowing_steps() {
        let l = QuadLattice::new(4).unwrap();
        let n = l.bounded_neighbors_ivm12([1, 1, 2, 2]);
        assert_eq!(n.len(), 12);
        // [1, 2, 3, 4] spills over the top and slides down one.
        assert_eq!(n[0], [0, 1, 2, 3]);
        assert_eq!(n[6], [1, 1, 3, 1]);
        // [2, 3, 3, 2] already fits and is kept as stepped.
        assert_eq!(n[8], [2, 3, 3, 2]);
    }

    #[test]
    fn bounded_ivm12_drops_points_without_a_spelling() {
        let l = QuadLattice::new(3).unwrap();
        // Only offsets with no d component keep the spread within size 3.
        assert_eq!(
            l.bounded_neighbors_ivm12([0, 0, 0, 2]).as_slice(),
            &[[1, 1, 2, 2], [1, 2, 1, 2], [2, 1, 1, 2]]
        );
        // Size 2 is too narrow for any kissing spread.
        let tiny = QuadLattice::new(2).unwrap();
        assert!(tiny.bounded_neighbors_ivm12([0, 0, 0, 0]).is_empty());
    }

    #[test]
    fn in_bounds_copy_picks_nearest_spelling() {
        let l = QuadLattice::new(4).unwrap();
        assert_eq!(l.in_bounds_copy([1, 2, 3, 0]), Some([1, 2, 3, 0]));
        assert_eq!(l.in_bounds_copy([-1, 0, 0, 1]), Some([0, 1, 1, 2]));
        assert_eq!(l.in_bounds_copy([5, 4, 6, 4]), Some([2, 1, 3, 1]));
        assert_eq!(l.in_bounds_copy([0, 0, 0, 4]), None);
        assert_eq!(l.in_bounds_copy([i32::MIN, 0, 0, 0]), None);
    }

    #[test]
    fn bounded_dense_corner() {
        let l = QuadLattice::new(4).unwrap();
        // {0, 1}⁴ minus the zero offset.
        assert_eq!(l.bounded_neighbors80([0, 0, 0, 0]).len(), 15);
        assert_eq!(l.bounded_neighbors80([1, 1, 1, 1]).len(), 80);
    }

    #[test]
    fn neighbours_in_matches_named_family() {
        let l = QuadLattice::new(5).unwrap();
        let cell = [0, 2, 4, 1];
        assert_eq!(
            l.neighbours_in(Neighbourhood::Axial8, cell),
            l.bounded_neighbors(cell).into_vec()
        );
        assert_eq!(
            l.neighbours_in(Neighbourhood::Kissing12, cell),
            l.bounded_neighbors_ivm12(cell).into_vec()
        );
        assert_eq!(
            l.neighbours_in(Neighbourhood::Dense80, cell),
            l.bounded_neighbors80(cell)
        );
    }

    // ── Grid & ranks ──────────────────────────────────────────────

    #[test]
    fn generate_grid_sizes() {
        let g2 = QuadLattice::new(2).unwrap().generate_grid();
        assert_eq!(g2.len(), 16);
        assert_eq!(g2.iter().collect::<IndexSet<_>>().len(), 16);
        let g3 = QuadLattice::new(3).unwrap().generate_grid();
        assert_eq!(g3.len(), 81);
        assert_eq!(g3.iter().collect::<IndexSet<_>>().len(), 81);
    }

    #[test]
    fn generate_grid_order() {
        let g = QuadLattice::new(2).unwrap().generate_grid();
        assert_eq!(g[0], [0, 0, 0, 0]);
        assert_eq!(g[1], [0, 0, 0, 1]);
        assert_eq!(g[2], [0, 0, 1, 0]);
        assert_eq!(g[15], [1, 1, 1, 1]);
    }

    #[test]
    fn canonical_rank_roundtrip() {
        let l = QuadLattice::new(3).unwrap();
        for (i, cell) in l.generate_grid().iter().enumerate() {
            assert_eq!(l.canonical_rank(cell), Some(i), "rank({cell:?})");
            assert_eq!(l.cell_at(i), Some(*cell));
        }
        assert_eq!(l.canonical_rank(&[3, 0, 0, 0]), None);
        assert_eq!(l.cell_at(81), None);
    }

    // ── Random cells ──────────────────────────────────────────────

    #[test]
    fn random_cell_in_bounds_and_deterministic() {
        let l = QuadLattice::new(5).unwrap();
        let mut r1 = ChaCha8Rng::seed_from_u64(7);
        let mut r2 = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..200 {
            let c = l.random_cell(&mut r1);
            assert!(l.in_bounds(&c));
            assert_eq!(c, l.random_cell(&mut r2));
        }
    }

    #[test]
    fn random_cell_covers_every_value() {
        let l = QuadLattice::new(3).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut seen = [[false; 3]; 4];
        for _ in 0..500 {
            let c = l.random_cell(&mut rng);
            for axis in 0..4 {
                seen[axis][c[axis] as usize] = true;
            }
        }
        assert!(seen.iter().flatten().all(|&s| s));
    }

    // ── Compliance suites ─────────────────────────────────────────

    #[test]
    fn compliance_size_1() {
        compliance::run_full_compliance(&QuadLattice::new(1).unwrap());
    }

    #[test]
    fn compliance_size_3() {
        compliance::run_full_compliance(&QuadLattice::new(3).unwrap());
    }

    #[test]
    fn compliance_size_4() {
        compliance::run_full_compliance(&QuadLattice::new(4).unwrap());
    }

    // ── Property tests ────────────────────────────────────────────

    proptest! {
        #[test]
        fn bounded_neighbors_are_in_bounds_and_adjacent(
            size in 1u32..6,
            a in 0i32..6, b in 0i32..6, c in 0i32..6, d in 0i32..6,
        ) {
            let l = QuadLattice::new(size).unwrap();
            let s = size as i32;
            let cell = [a % s, b % s, c % s, d % s];
            let interior = cell.iter().filter(|&&v| v > 0 && v < s - 1).count();
            let n = l.bounded_neighbors(cell);
            for nb in &n {
                prop_assert!(l.in_bounds(nb));
                let l1: i32 = (0..4).map(|i| (nb[i] - cell[i]).abs()).sum();
                prop_assert_eq!(l1, 1);
            }
            // Each axis contributes 2 neighbours when interior, fewer at walls.
            prop_assert!(n.len() >= 2 * interior);
        }
    }
}
