//! Synergetics constants and tetravolume measurement.
//!
//! Volumes here are in *tetravolumes*: the regular tetrahedron spanned by
//! the four basis tips has volume 1, the octahedron 4, the cuboctahedron
//! (vector equilibrium) 20. [`S3`] converts a Cartesian (cubic) volume of
//! the same figure into tetravolumes.

use crate::quadray::Quadray;

/// `√2`, the basis scale of the Cartesian map.
pub const ROOT2: f64 = std::f64::consts::SQRT_2;

/// `√(9/8)`, the cubic-volume to tetravolume conversion factor.
pub const S3: f64 = 1.060_660_171_779_821_2;

/// Angle between any two basis vectors, `arccos(-1/3)`, in degrees.
pub const TETRAHEDRAL_ANGLE_DEG: f64 = 109.471_220_634_490_7;

/// Native length of each basis vector, `1/√2`.
pub const BASIS_LENGTH: f64 = std::f64::consts::FRAC_1_SQRT_2;

/// Regular tetrahedron volume.
pub const TETRA_VOL: u32 = 1;
/// Octahedron volume.
pub const OCTA_VOL: u32 = 4;
/// Cuboctahedron (vector equilibrium) volume.
pub const CUBO_VOL: u32 = 20;
/// Icosahedron volume reached by the jitterbug, about `5√2·φ²/2`.
pub const ICOSA_VOL: f64 = 18.512_296;
/// Rhombic dodecahedron volume, the space-filling partner of the packing.
pub const RHOMBIC_DODECA_VOL: u32 = 6;

/// Touching neighbours per sphere in the packing.
pub const KISSING_NUMBER: usize = 12;
/// Density of the face-centred sphere packing, `π / (3√2)`.
pub const SPHERE_PACKING_DENSITY: f64 = 0.740_480_489_693_061;
/// Golden ratio.
pub const PHI: f64 = 1.618_033_988_749_895;
/// Diameter over radius of the packed spheres.
pub const D_OVER_R: f64 = 2.0;

/// Convert a cubic (XYZ) volume to tetravolumes.
pub fn volume_xyz_to_ivm(xyz_volume: f64) -> f64 {
    xyz_volume * S3
}

/// Convert a tetravolume to a cubic (XYZ) volume.
pub fn volume_ivm_to_xyz(ivm_volume: f64) -> f64 {
    ivm_volume / S3
}

/// Volume, in tetravolumes, of the tetrahedron with the given vertices.
///
/// Measured on the Cartesian images, so any representative of each
/// vertex gives the same answer.
pub fn tetravolume(p0: &Quadray, p1: &Quadray, p2: &Quadray, p3: &Quadray) -> f64 {
    let o = p0.to_cartesian();
    let (u, v, w) = (
        p1.to_cartesian() - o,
        p2.to_cartesian() - o,
        p3.to_cartesian() - o,
    );
    volume_xyz_to_ivm(u.dot(v.cross(w)).abs() / 6.0)
}
