//! Frequency-subdivided IVM tetrahedron counts.

use crate::error::CoordError;

/// An IVM tetrahedron subdivided at integer `frequency` along each edge.
///
/// Tiles with alternating tetrahedra and octahedra whose vertices sit on
/// integer quadray coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IvmGrid {
    frequency: u32,
}

impl IvmGrid {
    /// Create a grid description at the given frequency.
    ///
    /// Returns `Err(CoordError::ZeroFrequency)` for 0: cell sizes are
    /// `1/f` of the full edge.
    pub fn new(frequency: u32) -> Result<Self, CoordError> {
        if frequency == 0 {
            return Err(CoordError::ZeroFrequency);
        }
        Ok(Self { frequency })
    }

    /// Edge subdivision frequency.
    pub fn frequency(&self) -> u32 {
        self.frequency
    }

    /// Vertices in the subdivided tetrahedron, `(f+1)(f+2)(f+3)/6`.
    pub fn vertex_count(&self) -> u64 {
        let f = u64::from(self.frequency);
        (f + 1) * (f + 2) * (f + 3) / 6
    }

    /// Tetrahedra in the subdivided tetrahedron, `f³`.
    pub fn tetra_count(&self) -> u64 {
        u64::from(self.frequency).pow(3)
    }

    /// Octahedra in the subdivided tetrahedron, `f(f-1)(f-2)/6` for `f ≥ 3`.
    pub fn octa_count(&self) -> u64 {
        let f = u64::from(self.frequency);
        if f < 3 {
            return 0;
        }
        f * (f - 1) * (f - 2) / 6
    }

    /// Edge length of one cell, in units of the full edge.
    pub fn edge_length(&self) -> f64 {
        1.0 / f64::from(self.frequency)
    }

    /// Volume of one small tetrahedron in tetravolumes.
    pub fn volume_tetra(&self) -> f64 {
        self.edge_length().powi(3)
    }

    /// Volume of one small octahedron in tetravolumes.
    pub fn volume_octa(&self) -> f64 {
        4.0 * self.volume_tetra()
    }
}

impl Default for IvmGrid {
    fn default() -> Self {
        Self { frequency: 1 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_frequency() {
        let g = IvmGrid::default();
        assert_eq!(g.vertex_count(), 4);
        assert_eq!(g.tetra_count(), 1);
        assert_eq!(g.octa_count(), 0);
        assert_eq!(g.volume_tetra(), 1.0);
        assert_eq!(g.volume_octa(), 4.0);
    }

    #[test]
    fn frequency_two() {
        let g = IvmGrid::new(2).unwrap();
        assert_eq!(g.vertex_count(), 10);
        assert_eq!(g.tetra_count(), 8);
        assert_eq!(g.octa_count(), 0);
        assert_eq!(g.edge_length(), 0.5);
        assert_eq!(g.volume_tetra(), 0.125);
    }

    #[test]
    fn frequency_four() {
        let g = IvmGrid::new(4).unwrap();
        assert_eq!(g.vertex_count(), 35);
        assert_eq!(g.tetra_count(), 64);
        assert_eq!(g.octa_count(), 4);
    }

    #[test]
    fn zero_frequency_is_rejected() {
        assert_eq!(IvmGrid::new(0), Err(CoordError::ZeroFrequency));
        assert_eq!(IvmGrid::new(1), Ok(IvmGrid::default()));
    }

    #[test]
    fn every_valid_grid_has_finite_cells() {
        for f in 1..=16 {
            let g = IvmGrid::new(f).unwrap();
            assert!(g.edge_length().is_finite());
            assert!(g.volume_octa().is_finite());
        }
    }
}
