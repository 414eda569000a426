//! Back-to-front paint ordering.
//!
//! [`depth_sort`] annotates each quadray with a caller-supplied projection
//! and sorts by projected scale, ascending and stable. Equal scales keep
//! their input order, so the result is deterministic for a given input.
//!
//! [`DepthOrderCache`] memoizes the order for a [`SparseLattice`] and
//! recomputes it only when the lattice's generation moves or the caller
//! invalidates it.

use crate::sparse::SparseLattice;
use quadray_core::Quadray;

/// Screen-space projection of one quadray.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    /// Horizontal screen coordinate.
    pub x: f64,
    /// Vertical screen coordinate.
    pub y: f64,
    /// Depth/scale used as the sort key. Smaller paints first.
    pub scale: f64,
}

/// A quadray annotated with its projection.
#[derive(Clone, Copy, Debug)]
pub struct DepthRecord {
    /// The input point, unchanged.
    pub quadray: Quadray,
    /// Projected x.
    pub px: f64,
    /// Projected y.
    pub py: f64,
    /// Projected scale.
    pub pscale: f64,
}

/// Annotate and stably sort by ascending projected scale.
///
/// The input is not modified. NaN scales sort after every finite value.
pub fn depth_sort<I, F>(points: I, mut project: F) -> Vec<DepthRecord>
where
    I: IntoIterator<Item = Quadray>,
    F: FnMut(&Quadray) -> Projection,
{
    let mut records: Vec<DepthRecord> = points
        .into_iter()
        .map(|quadray| {
            let p = project(&quadray);
            DepthRecord {
                quadray,
                px: p.x,
                py: p.y,
                pscale: p.scale,
            }
        })
        .collect();
    records.sort_by(|l, r| l.pscale.total_cmp(&r.pscale));
    records
}

/// The default projection: `x = a - b`, `y = c - d`, `scale = a + b + c + d`.
pub fn sum_projection(q: &Quadray) -> Projection {
    let [a, b, c, d] = q.components();
    Projection {
        x: a - b,
        y: c - d,
        scale: a + b + c + d,
    }
}

/// [`depth_sort`] with [`sum_projection`].
pub fn depth_sort_by_sum<I>(points: I) -> Vec<DepthRecord>
where
    I: IntoIterator<Item = Quadray>,
{
    depth_sort(points, sum_projection)
}

/// Memoized paint order for a [`SparseLattice`].
#[derive(Clone, Debug, Default)]
pub struct DepthOrderCache {
    order: Vec<DepthRecord>,
    seen_generation: Option<u64>,
}

impl DepthOrderCache {
    /// An empty, dirty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Force a recompute on the next lookup.
    pub fn invalidate(&mut self) {
        self.seen_generation = None;
    }

    /// Whether the next lookup against a lattice at `generation` recomputes.
    pub fn is_dirty(&self, generation: u64) -> bool {
        self.seen_generation != Some(generation)
    }

    /// Cached order for `generation`, computing it with `compute` if stale.
    pub fn get_or_compute<F>(&mut self, generation: u64, compute: F) -> &[DepthRecord]
    where
        F: FnOnce() -> Vec<DepthRecord>,
    {
        if self.is_dirty(generation) {
            self.order = compute();
            self.seen_generation = Some(generation);
        }
        &self.order
    }

    /// Paint order of the occupied points of `lattice` under the default
    /// projection.
    pub fn sorted_for<V>(&mut self, lattice: &SparseLattice<V>) -> &[DepthRecord] {
        self.get_or_compute(lattice.generation(), || {
            depth_sort_by_sum(lattice.quadrays())
        })
    }
}
