//! Geometric self-check for the quadray engine.
//!
//! [`verify_geometric_identities`] runs a fixed battery of eight checks
//! against the coordinate model and returns a [`VerificationReport`].
//! Failures are data, not errors: the report is logged (one `info` summary,
//! one `warn` per failed check) and the caller decides whether a failure is
//! fatal.
//!
//! ```
//! use quadray_verify::{verify_geometric_identities, VerifyConfig};
//!
//! let report = verify_geometric_identities(&VerifyConfig::default());
//! assert!(report.all_passed());
//! assert_eq!(report.checks().len(), 8);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod checks;
pub mod config;
pub mod error;
pub mod report;
mod solids;

pub use checks::{verify_geometric_identities, verify_round_trip, ROUND_TRIP_SAMPLES};
pub use config::VerifyConfig;
pub use error::VerifyError;
pub use report::{CheckResult, VerificationReport};
