//! Lattice adjacency for quadray cells.
//!
//! This crate turns the integer tuples of [`quadray_core`] into a navigable
//! lattice: a bounded `size⁴` index space ([`QuadLattice`]), three distinct
//! adjacency families, grid enumeration, randomisation helpers, the
//! tetra/octa cell classification, and back-to-front paint ordering.
//!
//! # Adjacency families
//!
//! - [`neighbors8`]: ±1 along each of the four axes. Cheap discrete motion.
//! - [`neighbors_ivm12`]: the twelve kissing neighbours, the true
//!   nearest-neighbour topology of the packing. Offsets are permutations of
//!   `(2, 1, 1, 0)`; on a bounded lattice a step that spills over an edge
//!   lands on the nearest in-bounds spelling of the same point.
//! - [`neighbors80`]: every nonzero offset in `{-1, 0, 1}⁴`, for dense
//!   proximity counting.
//!
//! These are separate operations on purpose. Code that needs "the
//! neighbours" of a cell names the family it means, or picks one explicitly
//! through [`Neighbourhood`].
//!
//! # Caller-owned state
//!
//! The engine owns no state between calls. [`SparseLattice`] and
//! [`DepthOrderCache`] are provided for callers that want a normalized
//! sparse map and a memoized paint order; both live wherever the caller
//! puts them.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell_type;
pub mod depth;
pub mod error;
pub mod lattice;
pub mod metric;
pub mod neighbours;
pub mod random;
pub mod sparse;

#[cfg(test)]
pub(crate) mod compliance;

pub use cell_type::{cell_type, CellType};
pub use depth::{
    depth_sort, depth_sort_by_sum, sum_projection, DepthOrderCache, DepthRecord, Projection,
};
pub use error::LatticeError;
pub use lattice::{in_bounds, QuadLattice};
pub use metric::{euclidean, manhattan, manhattan_cells};
pub use neighbours::{
    neighbors8, neighbors80, neighbors_ivm12, Neighbourhood, AXIAL_8, DENSE_80, KISSING_12,
};
pub use quadray_core::{key, parse_key, Cell, CellKey};
pub use random::shuffle;
pub use sparse::SparseLattice;
