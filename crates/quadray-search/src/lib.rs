//! Searches over a bounded quadray lattice.
//!
//! Every search is a pure function of its arguments: the lattice, a start
//! cell, and caller-supplied predicates describing the board. Nothing is
//! retained between calls.
//!
//! - [`PathFinder::bfs`]: unweighted shortest path.
//! - [`PathFinder::shortest_path`]: weighted A* with an admissible
//!   Manhattan heuristic.
//! - [`PathFinder::flood_fill`]: breadth-first reachable set, optionally capped.
//! - [`line_of_sight`] and [`cells_in_range`]: stepping and range queries.
//!
//! Visited bookkeeping is keyed by the raw lattice cell, so `[0, 0, 0, 0]`
//! and `[1, 1, 1, 1]` are distinct squares of a board even though they name
//! the same point in space.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod finder;
pub mod path;
pub mod sight;

pub use error::SearchError;
pub use finder::PathFinder;
pub use path::Path;
pub use sight::{cells_in_range, line_of_sight};
