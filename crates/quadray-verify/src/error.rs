//! Error types for verification configuration.
//!
//! A failed check is never an error; it is a [`CheckResult`](crate::CheckResult)
//! with `passed == false`. These errors only reject nonsensical settings.

use std::error::Error;
use std::fmt;

/// Errors from [`VerifyConfig::validate`](crate::VerifyConfig::validate).
#[derive(Clone, Debug, PartialEq)]
pub enum VerifyError {
    /// A tolerance is zero, negative, or not finite.
    InvalidTolerance {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
}

impl fmt::Display for VerifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTolerance { field, value } => {
                write!(f, "{field} must be finite and positive, got {value}")
            }
        }
    }
}

impl Error for VerifyError {}
