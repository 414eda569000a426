//! Error types for coordinate construction and key parsing.

use std::error::Error;
use std::fmt;

/// Errors arising from strict coordinate construction or key decoding.
///
/// Plain [`Quadray::new`](crate::Quadray::new) performs no validation and
/// lets non-finite values propagate; these errors only surface through the
/// explicit boundary checks ([`Quadray::try_new`](crate::Quadray::try_new),
/// [`parse_key`](crate::parse_key), `CellKey::from_str`,
/// [`IvmGrid::new`](crate::IvmGrid::new)).
#[derive(Clone, Debug, PartialEq)]
pub enum CoordError {
    /// A component is NaN or infinite.
    NonFinite {
        /// Component name (`"a"`, `"b"`, `"c"` or `"d"`).
        axis: &'static str,
        /// The offending value.
        value: f64,
    },
    /// A textual key could not be decoded into four integers.
    MalformedKey {
        /// The input that failed to parse.
        key: String,
        /// What went wrong.
        reason: String,
    },
    /// An IVM grid was requested with frequency 0, which has no cells.
    ZeroFrequency,
}

impl fmt::Display for CoordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite { axis, value } => {
                write!(f, "component {axis} is not finite: {value}")
            }
            Self::MalformedKey { key, reason } => {
                write!(f, "malformed cell key {key:?}: {reason}")
            }
            Self::ZeroFrequency => write!(f, "IVM grid frequency must be at least 1"),
        }
    }
}

impl Error for CoordError {}
