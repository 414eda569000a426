//! The four-component [`Quadray`] coordinate.
//!
//! A quadray locates a point as a non-negative combination of four basis
//! directions running from the centre of a regular tetrahedron to its
//! vertices. Because `A + B + C + D = 0`, the representation is redundant:
//! `(a, b, c, d)` and `(a + k, b + k, c + k, d + k)` are the same point.
//!
//! # Cartesian image
//!
//! ```text
//! x = (a - b - c + d) / √2
//! y = (a - b + c - d) / √2
//! z = (a + b - c - d) / √2
//! ```
//!
//! The inverse splits each Cartesian axis into positive and negative parts
//! and always returns the normalized representative, so a round trip
//! recovers `q.normalized()`, not `q`, and only within float tolerance.

use crate::cell::{Cell, CellKey};
use crate::error::CoordError;
use crate::synergetics::ROOT2;
use glam::DVec3;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// Default tolerance for [`Quadray::approx_eq`].
pub const DEFAULT_EPSILON: f64 = 1e-4;

/// A point (or direction) in tetrahedral coordinates.
///
/// Construction performs no validation: NaN and infinities propagate
/// through every operation. Use [`Quadray::try_new`] at boundaries where
/// strict input checking is wanted.
#[derive(Clone, Copy, Debug, Default)]
pub struct Quadray {
    /// Component along basis A.
    pub a: f64,
    /// Component along basis B.
    pub b: f64,
    /// Component along basis C.
    pub c: f64,
    /// Component along basis D.
    pub d: f64,
}

impl Quadray {
    /// The origin, `(0, 0, 0, 0)`.
    pub const ORIGIN: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    /// Basis vector A.
    pub const A: Self = Self::new(1.0, 0.0, 0.0, 0.0);
    /// Basis vector B.
    pub const B: Self = Self::new(0.0, 1.0, 0.0, 0.0);
    /// Basis vector C.
    pub const C: Self = Self::new(0.0, 0.0, 1.0, 0.0);
    /// Basis vector D.
    pub const D: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    /// The four basis vectors in `A, B, C, D` order.
    pub const BASIS: [Self; 4] = [Self::A, Self::B, Self::C, Self::D];

    /// Create a quadray from its four components.
    pub const fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }

    /// Create a quadray, rejecting NaN and infinite components.
    pub fn try_new(a: f64, b: f64, c: f64, d: f64) -> Result<Self, CoordError> {
        for (axis, value) in [("a", a), ("b", b), ("c", c), ("d", d)] {
            if !value.is_finite() {
                return Err(CoordError::NonFinite { axis, value });
            }
        }
        Ok(Self::new(a, b, c, d))
    }

    /// Components as an array in `a, b, c, d` order.
    pub fn components(&self) -> [f64; 4] {
        [self.a, self.b, self.c, self.d]
    }

    /// Smallest of the four components.
    pub fn min_component(&self) -> f64 {
        self.a.min(self.b).min(self.c).min(self.d)
    }

    /// Zero-minimum normalization: subtract the minimum component from all
    /// four. Idempotent; names the same point as `self`.
    pub fn normalized(&self) -> Self {
        let m = self.min_component();
        Self::new(self.a - m, self.b - m, self.c - m, self.d - m)
    }

    /// Multiply every component by `k`. The result is not normalized.
    pub fn scale(&self, k: f64) -> Self {
        Self::new(self.a * k, self.b * k, self.c * k, self.d * k)
    }

    /// Native length, `sqrt((a² + b² + c² + d²) / 2)`.
    pub fn length(&self) -> f64 {
        ((self.a * self.a + self.b * self.b + self.c * self.c + self.d * self.d) / 2.0).sqrt()
    }

    /// Native distance: the length of `self - other`.
    ///
    /// Computed on the raw difference, so it depends on the representatives
    /// passed in. Normalize both ends to compare points.
    pub fn distance_to(&self, other: &Self) -> f64 {
        (*self - *other).length()
    }

    /// Cartesian image of this quadray.
    pub fn to_cartesian(&self) -> DVec3 {
        let s = 1.0 / ROOT2;
        let Self { a, b, c, d } = *self;
        DVec3::new(
            s * (a - b - c + d),
            s * (a - b + c - d),
            s * (a + b - c - d),
        )
    }

    /// The normalized quadray whose Cartesian image is `v`.
    pub fn from_cartesian(v: DVec3) -> Self {
        let s = 1.0 / ROOT2;
        let (xp, yp, zp) = (v.x.max(0.0), v.y.max(0.0), v.z.max(0.0));
        let (xn, yn, zn) = ((-v.x).max(0.0), (-v.y).max(0.0), (-v.z).max(0.0));
        Self::new(
            s * (xp + yp + zp),
            s * (xn + yn + zp),
            s * (xn + yp + zn),
            s * (xp + yn + zn),
        )
        .normalized()
    }

    /// Compare normalized forms component-wise within `epsilon`.
    pub fn equals(&self, other: &Self, epsilon: f64) -> bool {
        let (p, q) = (self.normalized(), other.normalized());
        p.components()
            .iter()
            .zip(q.components())
            .all(|(x, y)| (x - y).abs() < epsilon)
    }

    /// [`equals`](Self::equals) with [`DEFAULT_EPSILON`].
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.equals(other, DEFAULT_EPSILON)
    }

    /// Round each raw component to the nearest integer.
    ///
    /// No normalization happens here; non-finite components saturate.
    pub fn to_cell(&self) -> Cell {
        self.components().map(|v| v.round() as i32)
    }

    /// Integer-rounded normalized key, suitable for maps and sets.
    pub fn to_key(&self) -> CellKey {
        CellKey::from_cell(self.normalized().to_cell())
    }
}

impl From<Cell> for Quadray {
    fn from(cell: Cell) -> Self {
        let [a, b, c, d] = cell.map(f64::from);
        Self::new(a, b, c, d)
    }
}

impl From<Quadray> for CellKey {
    fn from(q: Quadray) -> Self {
        q.to_key()
    }
}

impl From<[f64; 4]> for Quadray {
    fn from(v: [f64; 4]) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }
}

/// Component-wise sum, normalized.
impl Add for Quadray {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.a + rhs.a, self.b + rhs.b, self.c + rhs.c, self.d + rhs.d).normalized()
    }
}

/// Component-wise difference. Left unnormalized so it can serve as a
/// signed direction vector for distance computation.
impl Sub for Quadray {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.a - rhs.a, self.b - rhs.b, self.c - rhs.c, self.d - rhs.d)
    }
}

impl Mul<f64> for Quadray {
    type Output = Self;

    fn mul(self, k: f64) -> Self {
        self.scale(k)
    }
}

impl Neg for Quadray {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.a, -self.b, -self.c, -self.d)
    }
}

impl fmt::Display for Quadray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({:.2}, {:.2}, {:.2}, {:.2})",
            self.a, self.b, self.c, self.d
        )
    }
}

/// Native distance between two quadrays.
pub fn distance(p: &Quadray, q: &Quadray) -> f64 {
    p.distance_to(q)
}

/// Angle between two quadray vectors in degrees, measured on their
/// Cartesian images. Returns `0.0` if either is the zero vector.
pub fn angle_between(p: &Quadray, q: &Quadray) -> f64 {
    let (u, v) = (p.to_cartesian(), q.to_cartesian());
    let denom = u.length() * v.length();
    if denom == 0.0 {
        return 0.0;
    }
    (u.dot(v) / denom).clamp(-1.0, 1.0).acos().to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synergetics::{BASIS_LENGTH, TETRAHEDRAL_ANGLE_DEG};
    use proptest::prelude::*;

    const TOL: f64 = 1e-9;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-4
    }

    // ── Normalization ─────────────────────────────────────────────

    #[test]
    fn normalized_zeroes_minimum() {
        let q = Quadray::new(3.0, 5.0, 4.0, 7.0).normalized();
        assert_eq!(q.components(), [0.0, 2.0, 1.0, 4.0]);
    }

    #[test]
    fn normalized_lifts_negative_components() {
        let q = Quadray::new(1.0, -1.0, 0.0, 0.0).normalized();
        assert_eq!(q.components(), [2.0, 0.0, 1.0, 1.0]);
    }

    #[test]
    fn non_finite_propagates() {
        let q = Quadray::new(f64::NAN, 0.0, 0.0, 0.0);
        assert!(q.length().is_nan());
        assert!(q.to_cartesian().x.is_nan());
    }

    #[test]
    fn try_new_rejects_non_finite() {
        assert!(Quadray::try_new(1.0, 2.0, 3.0, 4.0).is_ok());
        assert_eq!(
            Quadray::try_new(0.0, f64::INFINITY, 0.0, 0.0).unwrap_err(),
            CoordError::NonFinite {
                axis: "b",
                value: f64::INFINITY
            }
        );
        assert!(matches!(
            Quadray::try_new(0.0, 0.0, 0.0, f64::NAN),
            Err(CoordError::NonFinite { axis: "d", .. })
        ));
    }

    // ── Arithmetic ────────────────────────────────────────────────

    #[test]
    fn add_normalizes() {
        let q = Quadray::A + Quadray::B + Quadray::C + Quadray::D;
        assert_eq!(q.components(), [0.0; 4]);
    }

    #[test]
    fn sub_keeps_sign() {
        let q = Quadray::A - Quadray::B;
        assert_eq!(q.components(), [1.0, -1.0, 0.0, 0.0]);
    }

    #[test]
    fn scale_and_neg() {
        let q = Quadray::new(1.0, 2.0, 0.0, 0.5) * 2.0;
        assert_eq!(q.components(), [2.0, 4.0, 0.0, 1.0]);
        assert_eq!((-q).components(), [-2.0, -4.0, -0.0, -1.0]);
    }

    // ── Metrics ───────────────────────────────────────────────────

    #[test]
    fn basis_lengths() {
        for b in Quadray::BASIS {
            assert!((b.length() - BASIS_LENGTH).abs() < TOL);
        }
    }

    #[test]
    fn distance_origin_to_a() {
        assert!(close(distance(&Quadray::ORIGIN, &Quadray::A), 0.7071));
    }

    #[test]
    fn basis_pair_distance_is_one() {
        assert!((Quadray::A.distance_to(&Quadray::B) - 1.0).abs() < TOL);
    }

    #[test]
    fn tetrahedral_angle_between_basis_vectors() {
        for i in 0..4 {
            for j in (i + 1)..4 {
                let angle = angle_between(&Quadray::BASIS[i], &Quadray::BASIS[j]);
                assert!(
                    (angle - TETRAHEDRAL_ANGLE_DEG).abs() < 1e-3,
                    "angle {i}-{j} = {angle}"
                );
            }
        }
    }

    #[test]
    fn angle_with_zero_vector_is_zero() {
        assert_eq!(angle_between(&Quadray::ORIGIN, &Quadray::A), 0.0);
        // (1,1,1,1) is also the origin.
        assert_eq!(angle_between(&Quadray::new(1.0, 1.0, 1.0, 1.0), &Quadray::B), 0.0);
    }

    // ── Cartesian conversion ──────────────────────────────────────

    #[test]
    fn basis_a_to_cartesian() {
        let v = Quadray::A.to_cartesian();
        assert!(close(v.x, 0.7071) && close(v.y, 0.7071) && close(v.z, 0.7071));
    }

    #[test]
    fn origin_to_cartesian() {
        assert_eq!(Quadray::ORIGIN.to_cartesian(), DVec3::ZERO);
    }

    #[test]
    fn from_cartesian_recovers_normalized() {
        let q = Quadray::new(3.0, 4.0, 2.0, 3.0);
        let back = Quadray::from_cartesian(q.to_cartesian());
        assert!(back.equals(&q, 1e-9));
        assert!(back.min_component().abs() < 1e-12);
    }

    #[test]
    fn from_cartesian_unit_axes() {
        // +z is the midpoint direction of A and B.
        let q = Quadray::from_cartesian(DVec3::new(0.0, 0.0, ROOT2));
        assert!(q.equals(&Quadray::new(1.0, 1.0, 0.0, 0.0), 1e-9));
    }

    // ── Equality & keys ───────────────────────────────────────────

    #[test]
    fn equals_uses_normalized_forms() {
        let p = Quadray::new(1.0, 0.0, 0.0, 0.0);
        let q = Quadray::new(2.0, 1.0, 1.0, 1.0);
        assert!(p.approx_eq(&q));
        assert!(!p.approx_eq(&Quadray::B));
    }

    #[test]
    fn to_key_normalizes_and_rounds() {
        let k = Quadray::new(2.2, 1.0, 1.2, 0.9).to_key();
        assert_eq!(k.components(), [1, 0, 0, 0]);
        assert_eq!(
            Quadray::new(4.0, 3.0, 3.0, 3.0).to_key(),
            Quadray::A.to_key()
        );
    }

    #[test]
    fn to_cell_does_not_normalize() {
        assert_eq!(Quadray::new(1.6, 2.0, 3.4, 4.0).to_cell(), [2, 2, 3, 4]);
    }

    #[test]
    fn display_two_decimals() {
        assert_eq!(Quadray::new(1.0, 0.5, 0.0, 2.25).to_string(), "(1.00, 0.50, 0.00, 2.25)");
    }

    // ── Property tests ────────────────────────────────────────────

    fn finite() -> impl Strategy<Value = f64> {
        -100.0f64..100.0
    }

    proptest! {
        #[test]
        fn normalized_has_zero_minimum_and_same_point(a in finite(), b in finite(), c in finite(), d in finite()) {
            let q = Quadray::new(a, b, c, d);
            let n = q.normalized();
            prop_assert!(n.min_component().abs() < 1e-9);
            prop_assert!(n.components().iter().all(|&v| v >= 0.0));
            let (u, v) = (q.to_cartesian(), n.to_cartesian());
            prop_assert!((u - v).length() < 1e-9);
        }

        #[test]
        fn normalized_is_idempotent(a in finite(), b in finite(), c in finite(), d in finite()) {
            let n = Quadray::new(a, b, c, d).normalized();
            let nn = n.normalized();
            prop_assert_eq!(n.components(), nn.components());
        }

        #[test]
        fn round_trip_integer_cells(a in 0i32..=10, b in 0i32..=10, c in 0i32..=10, d in 0i32..=10) {
            let q = Quadray::from([a, b, c, d]);
            let back = Quadray::from_cartesian(q.to_cartesian());
            prop_assert!(q.normalized().distance_to(&back) < 0.01);
        }

        #[test]
        fn distance_symmetric(p in prop::array::uniform4(finite()), q in prop::array::uniform4(finite())) {
            let (p, q) = (Quadray::from(p), Quadray::from(q));
            prop_assert!((p.distance_to(&q) - q.distance_to(&p)).abs() < 1e-12);
        }

        #[test]
        fn triangle_inequality(
            p in prop::array::uniform4(finite()),
            q in prop::array::uniform4(finite()),
            r in prop::array::uniform4(finite()),
        ) {
            let (p, q, r) = (Quadray::from(p), Quadray::from(q), Quadray::from(r));
            prop_assert!(p.distance_to(&r) <= p.distance_to(&q) + q.distance_to(&r) + 1e-9);
        }
    }
}
