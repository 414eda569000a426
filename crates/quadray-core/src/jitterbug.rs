//! The jitterbug transformation: vector equilibrium → icosahedron → octahedron.
//!
//! Volume is modelled piecewise-linearly in the twist angle between the
//! three canonical phases and clamped outside `[0°, 30°]`.

use crate::synergetics::{CUBO_VOL, ICOSA_VOL, OCTA_VOL};

/// Twist angle of the open vector equilibrium.
pub const VE_ANGLE: f64 = 0.0;
/// Twist angle of the icosahedral intermediate.
pub const ICOSA_ANGLE: f64 = 10.8123;
/// Twist angle of the fully closed octahedron.
pub const OCTA_ANGLE: f64 = 30.0;

/// A named stage of the transformation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Phase {
    /// Human-readable phase name.
    pub name: &'static str,
    /// Twist angle in degrees.
    pub angle: f64,
    /// Volume in tetravolumes.
    pub volume: f64,
}

/// Approximate volume, in tetravolumes, at twist angle `theta_deg`.
pub fn volume_at_angle(theta_deg: f64) -> f64 {
    let ve = f64::from(CUBO_VOL);
    let octa = f64::from(OCTA_VOL);
    if theta_deg <= VE_ANGLE {
        return ve;
    }
    if theta_deg >= OCTA_ANGLE {
        return octa;
    }
    if theta_deg <= ICOSA_ANGLE {
        let t = theta_deg / ICOSA_ANGLE;
        ve + t * (ICOSA_VOL - ve)
    } else {
        let t = (theta_deg - ICOSA_ANGLE) / (OCTA_ANGLE - ICOSA_ANGLE);
        ICOSA_VOL + t * (octa - ICOSA_VOL)
    }
}

/// The three canonical phases in transformation order.
pub fn phases() -> [Phase; 3] {
    [
        Phase {
            name: "VE (Cuboctahedron)",
            angle: VE_ANGLE,
            volume: f64::from(CUBO_VOL),
        },
        Phase {
            name: "Icosahedron",
            angle: ICOSA_ANGLE,
            volume: ICOSA_VOL,
        },
        Phase {
            name: "Octahedron",
            angle: OCTA_ANGLE,
            volume: f64::from(OCTA_VOL),
        },
    ]
}
