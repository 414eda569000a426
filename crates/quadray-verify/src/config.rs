//! Verification tolerances.

use crate::error::VerifyError;

/// Tolerances for the geometric checks.
#[derive(Clone, Debug, PartialEq)]
pub struct VerifyConfig {
    /// Absolute tolerance for lengths, conversions and volumes.
    ///
    /// Default: 0.01.
    pub tolerance: f64,
    /// Tolerance on basis pair angles, in degrees.
    ///
    /// Default: 1.0.
    pub angle_tolerance_deg: f64,
    /// Tolerance for identities that hold up to rounding: distance symmetry
    /// and the S3 constant.
    ///
    /// Default: 1e-4.
    pub symmetry_tolerance: f64,
}

impl VerifyConfig {
    /// Default length/conversion/volume tolerance.
    pub const DEFAULT_TOLERANCE: f64 = 0.01;
    /// Default angle tolerance in degrees.
    pub const DEFAULT_ANGLE_TOLERANCE_DEG: f64 = 1.0;
    /// Default tolerance for near-exact identities.
    pub const DEFAULT_SYMMETRY_TOLERANCE: f64 = 1e-4;

    /// Defaults everywhere except the main `tolerance`.
    pub fn new(tolerance: f64) -> Self {
        Self {
            tolerance,
            angle_tolerance_deg: Self::DEFAULT_ANGLE_TOLERANCE_DEG,
            symmetry_tolerance: Self::DEFAULT_SYMMETRY_TOLERANCE,
        }
    }

    /// Check that every tolerance is finite and positive.
    ///
    /// [`verify_geometric_identities`](crate::verify_geometric_identities)
    /// does not call this; a nonsensical tolerance simply fails checks.
    pub fn validate(&self) -> Result<(), VerifyError> {
        for (field, value) in [
            ("tolerance", self.tolerance),
            ("angle_tolerance_deg", self.angle_tolerance_deg),
            ("symmetry_tolerance", self.symmetry_tolerance),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(VerifyError::InvalidTolerance { field, value });
            }
        }
        Ok(())
    }
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TOLERANCE)
    }
}
