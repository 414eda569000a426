//! Sparse occupancy keyed by normalized cell.
//!
//! [`SparseLattice`] stores a value per occupied point. Keys are
//! [`CellKey`]s, so `[1, 2, 3, 4]` and `[0, 1, 2, 3]` land in the same slot.
//! Iteration follows insertion order.
//!
//! Every mutation bumps a generation counter. Caches derived from the
//! occupancy (see [`DepthOrderCache`](crate::DepthOrderCache)) compare
//! generations instead of listening for change events.

use indexmap::IndexMap;
use quadray_core::{Cell, CellKey, Quadray};

/// A sparse map from lattice points to values.
#[derive(Clone, Debug)]
pub struct SparseLattice<V> {
    cells: IndexMap<CellKey, V>,
    generation: u64,
}

impl<V> SparseLattice<V> {
    /// Create an empty lattice at generation 0.
    pub fn new() -> Self {
        Self {
            cells: IndexMap::new(),
            generation: 0,
        }
    }

    /// Monotonic mutation counter.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Insert a value at `at`, returning the value it replaced.
    pub fn insert(&mut self, at: impl Into<CellKey>, value: V) -> Option<V> {
        self.generation += 1;
        self.cells.insert(at.into(), value)
    }

    /// Remove the value at `at`, preserving the order of the rest.
    pub fn remove(&mut self, at: impl Into<CellKey>) -> Option<V> {
        let removed = self.cells.shift_remove(&at.into());
        if removed.is_some() {
            self.generation += 1;
        }
        removed
    }

    /// Value at `at`, if occupied.
    pub fn get(&self, at: impl Into<CellKey>) -> Option<&V> {
        self.cells.get(&at.into())
    }

    /// Mutable value at `at`. Counts as a mutation when occupied.
    pub fn get_mut(&mut self, at: impl Into<CellKey>) -> Option<&mut V> {
        let slot = self.cells.get_mut(&at.into());
        if slot.is_some() {
            self.generation += 1;
        }
        slot
    }

    /// Whether `at` is occupied.
    pub fn contains(&self, at: impl Into<CellKey>) -> bool {
        self.cells.contains_key(&at.into())
    }

    /// Number of occupied points.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether nothing is occupied.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Remove everything.
    pub fn clear(&mut self) {
        if !self.cells.is_empty() {
            self.generation += 1;
        }
        self.cells.clear();
    }

    /// Occupied keys and values, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&CellKey, &V)> {
        self.cells.iter()
    }

    /// Occupied keys, in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &CellKey> {
        self.cells.keys()
    }

    /// Occupied points as quadrays, in insertion order.
    pub fn quadrays(&self) -> impl Iterator<Item = Quadray> + '_ {
        self.cells.keys().map(CellKey::to_quadray)
    }
}

impl<V> Default for SparseLattice<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> FromIterator<(Cell, V)> for SparseLattice<V> {
    fn from_iter<I: IntoIterator<Item = (Cell, V)>>(iter: I) -> Self {
        let mut out = Self::new();
        for (cell, value) in iter {
            out.insert(cell, value);
        }
        out
    }
}
