//! Measured volumes of the reference solids.
//!
//! The octahedron and cuboctahedron used here are centred on the origin and
//! share the symmetry of the Cartesian cube, so their faces are found by
//! sign pattern: one face per octant, plus one per axis direction where
//! enough vertices lie on that side. Each face is fanned into tetrahedra
//! with the origin and measured with [`tetravolume`].

use glam::DVec3;
use quadray_core::{tetravolume, Quadray};

const EPS: f64 = 1e-9;

/// The reference tetrahedron: the four basis tips.
pub(crate) fn tetrahedron() -> [Quadray; 4] {
    Quadray::BASIS
}

/// The octahedron spanned by the six `(1, 1, 0, 0)` permutations.
pub(crate) fn octahedron() -> Vec<Quadray> {
    let mut out = Vec::with_capacity(6);
    for i in 0..4 {
        for j in (i + 1)..4 {
            let mut v = [0.0; 4];
            v[i] = 1.0;
            v[j] = 1.0;
            out.push(Quadray::from(v));
        }
    }
    out
}

/// The vector equilibrium: the twelve kissing directions `e_i - e_j`.
pub(crate) fn cuboctahedron() -> Vec<Quadray> {
    let mut out = Vec::with_capacity(12);
    for i in 0..4 {
        for j in 0..4 {
            if i != j {
                let mut v = [0.0; 4];
                v[i] = 1.0;
                v[j] = -1.0;
                out.push(Quadray::from(v));
            }
        }
    }
    out
}

/// Volume of the tetrahedron on `vertices`, in tetravolumes.
pub(crate) fn tetra_volume(vertices: &[Quadray; 4]) -> f64 {
    tetravolume(&vertices[0], &vertices[1], &vertices[2], &vertices[3])
}

/// Volume, in tetravolumes, of an origin-centred solid with cubic symmetry.
pub(crate) fn centred_volume(vertices: &[Quadray]) -> f64 {
    let points: Vec<(Quadray, DVec3)> = vertices.iter().map(|q| (*q, q.to_cartesian())).collect();
    let mut faces: Vec<Vec<(Quadray, DVec3)>> = Vec::new();

    for octant in 0..8 {
        let sign = DVec3::new(
            if octant & 1 == 0 { 1.0 } else { -1.0 },
            if octant & 2 == 0 { 1.0 } else { -1.0 },
            if octant & 4 == 0 { 1.0 } else { -1.0 },
        );
        faces.push(
            points
                .iter()
                .filter(|(_, p)| (*p * sign).min_element() > -EPS)
                .copied()
                .collect(),
        );
    }
    for axis in 0..3 {
        for sign in [1.0, -1.0] {
            faces.push(
                points
                    .iter()
                    .filter(|(_, p)| p[axis] * sign > EPS)
                    .copied()
                    .collect(),
            );
        }
    }

    faces
        .iter()
        .filter(|f| f.len() >= 3)
        .map(|f| fan_volume(f))
        .sum()
}

/// Fan a planar convex face into triangles and cone each to the origin.
fn fan_volume(face: &[(Quadray, DVec3)]) -> f64 {
    let centroid = face.iter().fold(DVec3::ZERO, |acc, (_, p)| acc + *p) / face.len() as f64;
    let normal = centroid.normalize_or_zero();
    let u = (face[0].1 - centroid).normalize_or_zero();
    let w = normal.cross(u);

    let mut ring: Vec<(f64, Quadray)> = face
        .iter()
        .map(|(q, p)| {
            let r = *p - centroid;
            (r.dot(w).atan2(r.dot(u)), *q)
        })
        .collect();
    ring.sort_by(|l, r| l.0.total_cmp(&r.0));

    (1..ring.len() - 1)
        .map(|i| tetravolume(&Quadray::ORIGIN, &ring[0].1, &ring[i].1, &ring[i + 1].1))
        .sum()
}
