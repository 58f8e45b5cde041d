//! Rotation in a single coordinate plane
//!
//! In N dimensions rotations happen in planes spanned by two coordinate
//! axes. The animated hypercube spins in the plane of axes 2 and 3 (the
//! first axis collapsed away by projection), so the 3D shadow appears to
//! turn itself inside out.

use serde::{Deserialize, Serialize};

use crate::HypercubeError;

/// A plane spanned by two coordinate axes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RotationPlane {
    pub first: usize,
    pub second: usize,
}

impl RotationPlane {
    /// Axes 2 and 3: Z and W in 4D terms
    pub const ZW: Self = Self::new(2, 3);

    /// Create a plane from two axis indices
    pub const fn new(first: usize, second: usize) -> Self {
        Self { first, second }
    }

    /// Check that both axes exist in `dimension` and are distinct
    pub fn validate(&self, dimension: usize) -> Result<(), HypercubeError> {
        if self.first == self.second || self.first >= dimension || self.second >= dimension {
            return Err(HypercubeError::InvalidRotationPlane {
                first: self.first,
                second: self.second,
                dimension,
            });
        }
        Ok(())
    }
}

impl Default for RotationPlane {
    fn default() -> Self {
        Self::ZW
    }
}

/// Rotate every vertex of a flat coordinate buffer by `angle` radians
///
/// With `a = v[first]` and `b = v[second]`:
/// `v[first] = cos * a - sin * b`, `v[second] = sin * a + cos * b`.
/// Other coordinates are left alone.
///
/// The plane must already be valid for `dimension`.
pub fn rotate_vertices(vertices: &mut [f64], dimension: usize, plane: RotationPlane, angle: f64) {
    debug_assert!(plane.validate(dimension).is_ok());

    let (sin, cos) = angle.sin_cos();

    for vertex in vertices.chunks_exact_mut(dimension) {
        let a = vertex[plane.first];
        let b = vertex[plane.second];

        vertex[plane.first] = cos * a - sin * b;
        vertex[plane.second] = sin * a + cos * b;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Hypercube;
    use std::f64::consts::{FRAC_PI_2, PI};

    const EPSILON: f64 = 1e-12;

    fn assert_close(a: &[f64], b: &[f64]) {
        assert_eq!(a.len(), b.len());
        for (i, (x, y)) in a.iter().zip(b).enumerate() {
            assert!((x - y).abs() < EPSILON, "index {}: {} vs {}", i, x, y);
        }
    }

    #[test]
    fn test_quarter_turn() {
        let mut v = vec![0.0, 0.0, 1.0, 0.0];
        rotate_vertices(&mut v, 4, RotationPlane::ZW, FRAC_PI_2);
        assert_close(&v, &[0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_rotation_preserves_plane_norm() {
        let mut h = Hypercube::new(4).unwrap();
        let before: Vec<f64> = h.iter_vertices().map(|v| v[2] * v[2] + v[3] * v[3]).collect();

        for &angle in &[0.1, 0.7, -2.3, PI, 17.0] {
            h.rotate(RotationPlane::ZW, angle).unwrap();
            let after: Vec<f64> = h.iter_vertices().map(|v| v[2] * v[2] + v[3] * v[3]).collect();
            assert_close(&before, &after);
        }
    }

    #[test]
    fn test_rotation_composes() {
        let mut stepped = Hypercube::new(5).unwrap();
        let mut once = stepped.clone();

        stepped.rotate(RotationPlane::ZW, 0.3).unwrap();
        stepped.rotate(RotationPlane::ZW, 1.1).unwrap();
        once.rotate(RotationPlane::ZW, 1.4).unwrap();

        assert_close(stepped.vertices(), once.vertices());
    }

    #[test]
    fn test_other_coordinates_untouched() {
        let mut h = Hypercube::new(6).unwrap();
        let before = h.vertices().to_vec();
        h.rotate(RotationPlane::ZW, 0.9).unwrap();

        for (old, new) in before.chunks_exact(6).zip(h.iter_vertices()) {
            assert_eq!(old[0], new[0]);
            assert_eq!(old[1], new[1]);
            assert_eq!(&old[4..], &new[4..]);
        }
    }

    #[test]
    fn test_full_turn_is_identity() {
        let mut h = Hypercube::new(4).unwrap();
        let before = h.vertices().to_vec();
        h.rotate(RotationPlane::ZW, 2.0 * PI).unwrap();
        assert_close(&before, h.vertices());
    }

    #[test]
    fn test_arbitrary_plane() {
        let mut v = vec![1.0, 0.0, 0.0, 0.0, 0.0];
        let plane = RotationPlane::new(0, 4);
        plane.validate(5).unwrap();
        rotate_vertices(&mut v, 5, plane, FRAC_PI_2);
        assert_close(&v, &[0.0, 0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_validate() {
        assert!(RotationPlane::ZW.validate(4).is_ok());
        assert!(RotationPlane::ZW.validate(3).is_err());
        assert!(RotationPlane::new(1, 1).validate(4).is_err());
        assert!(RotationPlane::new(0, 7).validate(7).is_err());
        assert!(RotationPlane::new(6, 0).validate(7).is_ok());
    }

    #[test]
    fn test_default_plane() {
        assert_eq!(RotationPlane::default(), RotationPlane::new(2, 3));
    }
}
