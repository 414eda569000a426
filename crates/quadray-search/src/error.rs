//! Error types for weighted search.

use quadray_core::Cell;
use std::error::Error;
use std::fmt;

/// Errors from [`PathFinder::shortest_path`](crate::PathFinder::shortest_path).
///
/// Unreachable goals are not errors; they are `Ok(None)`.
#[derive(Clone, Debug, PartialEq)]
pub enum SearchError {
    /// The cost callback returned a value the heuristic cannot honour:
    /// NaN, infinite, negative, or below the finder's minimum step cost.
    InvalidCost {
        /// The cell whose entry cost was rejected.
        cell: Cell,
        /// The value returned by the callback.
        cost: f64,
        /// The minimum step cost in force for the search.
        min: f64,
    },
    /// The configured minimum step cost is negative or not finite.
    InvalidMinStepCost {
        /// The rejected value.
        value: f64,
    },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCost { cell, cost, min } => {
                write!(
                    f,
                    "cost {cost} for entering {cell:?} is invalid (must be finite and >= {min})"
                )
            }
            Self::InvalidMinStepCost { value } => {
                write!(f, "minimum step cost {value} must be finite and non-negative")
            }
        }
    }
}

impl Error for SearchError {}
