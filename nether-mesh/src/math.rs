//! Small geometry helpers shared by the generators

use glam::{DVec2, Vec3};

/// Euclidean distance between `(x1, y1)` and `(x2, y2)`
pub fn distance(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    DVec2::new(x1, y1).distance(DVec2::new(x2, y2))
}

/// Unit direction from `center` to `point`
///
/// Falls back to +Y when the two points coincide so callers never emit NaN
/// normals.
pub(crate) fn radial_normal(point: Vec3, center: Vec3) -> Vec3 {
    (point - center).try_normalize().unwrap_or(Vec3::Y)
}

/// Append the components of `v` to a flat buffer
#[inline]
pub(crate) fn push_vec3(buffer: &mut Vec<f32>, v: Vec3) {
    buffer.extend_from_slice(&v.to_array());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_anchors() {
        assert!((distance(1.0, 2.0, 3.0, 4.0) - 2.8284271247461903).abs() < 1e-15);
        assert_eq!(distance(4.0, 6.0, 2.0, 6.0), 2.0);
    }

    #[test]
    fn test_distance_symmetric() {
        assert_eq!(distance(-1.5, 3.0, 2.5, 0.0), distance(2.5, 0.0, -1.5, 3.0));
        assert_eq!(distance(2.0, 2.0, 2.0, 2.0), 0.0);
    }

    #[test]
    fn test_radial_normal() {
        let n = radial_normal(Vec3::new(3.0, 4.0, 5.0), Vec3::new(3.0, 4.0, 3.0));
        assert!((n - Vec3::Z).length() < 1e-6);

        // Coincident points fall back to +Y
        assert_eq!(radial_normal(Vec3::ONE, Vec3::ONE), Vec3::Y);
    }
}
