//! Quadray: tetrahedral coordinates and the isotropic vector matrix.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all quadray sub-crates. For most users, adding `quadray` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use quadray::prelude::*;
//!
//! // Run the startup self-check.
//! let report = verify_geometric_identities(&VerifyConfig::default());
//! assert!(report.all_passed());
//!
//! // A 4⁴ board with one wall.
//! let lattice = QuadLattice::new(4).unwrap();
//! let wall = [1, 0, 0, 0];
//! let walkable = |c: Cell| c != wall;
//!
//! let path = PathFinder::new(&lattice)
//!     .bfs([0, 0, 0, 0], [2, 0, 0, 0], walkable)
//!     .unwrap();
//! assert_eq!(path.steps(), 4);
//!
//! // Keys are raw on the lattice, normalized for sparse maps.
//! assert_eq!(key([1, 2, 3, 4]), "1,2,3,4");
//! assert_eq!(CellKey::from_cell([1, 2, 3, 4]).to_string(), "0,1,2,3");
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`coords`] | `quadray-core` | `Quadray`, `Cell`, keys, Synergetics constants |
//! | [`lattice`] | `quadray-lattice` | Bounded lattice, adjacency families, depth ordering |
//! | [`search`] | `quadray-search` | BFS, A*, flood fill, line of sight, range queries |
//! | [`verify`] | `quadray-verify` | Geometric self-check report |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Coordinates, keys and constants (`quadray-core`).
pub use quadray_core as coords;

/// Bounded lattice and adjacency (`quadray-lattice`).
///
/// The three neighbour families are separate functions:
/// [`lattice::neighbors8`], [`lattice::neighbors_ivm12`] and
/// [`lattice::neighbors80`].
pub use quadray_lattice as lattice;

/// Searches over a lattice (`quadray-search`).
pub use quadray_search as search;

/// Startup geometric self-check (`quadray-verify`).
pub use quadray_verify as verify;

/// Common imports for typical quadray usage.
///
/// ```rust
/// use quadray::prelude::*;
/// ```
pub mod prelude {
    // Coordinates
    pub use quadray_core::{key, parse_key, Cell, CellKey, CoordError, Quadray};

    // Lattice
    pub use quadray_lattice::{
        cell_type, depth_sort, CellType, DepthRecord, LatticeError, Neighbourhood, Projection,
        QuadLattice, SparseLattice,
    };

    // Search
    pub use quadray_search::{cells_in_range, line_of_sight, Path, PathFinder, SearchError};

    // Verification
    pub use quadray_verify::{
        verify_geometric_identities, CheckResult, VerificationReport, VerifyConfig,
    };
}
