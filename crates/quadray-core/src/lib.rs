//! Core coordinate types for the tetrahedral (IVM) lattice engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! four-component [`Quadray`] coordinate, the integer [`Cell`] tuple and
//! its normalized [`CellKey`], the Synergetics constants, and the error
//! types shared by the rest of the workspace.
//!
//! # Redundant representation
//!
//! Adding the same constant to all four components of a quadray names the
//! same point in space. Everything that compares or hashes coordinates
//! goes through the normalized form (minimum component subtracted), so
//! `Quadray` deliberately has no `PartialEq` or `Hash` impl: use
//! [`Quadray::equals`] or [`Quadray::to_key`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod error;
pub mod ivm;
pub mod jitterbug;
pub mod quadray;
pub mod synergetics;

pub use cell::{key, parse_key, Cell, CellKey};
pub use error::CoordError;
pub use ivm::IvmGrid;
pub use quadray::{angle_between, distance, Quadray, DEFAULT_EPSILON};
pub use synergetics::{tetravolume, S3};
