//! Spherical interpolation of position vectors.

use glam::{Quat, Vec3};

/// Below this angle (radians) the two directions are treated as parallel.
const PARALLEL_EPSILON: f32 = 1e-5;

/// Spherically interpolate between two position vectors.
///
/// The direction rotates along the great arc from `from` to `to` while the
/// length is interpolated linearly. `t` is clamped to `[0, 1]`. Falls back
/// to a linear interpolation when either vector is zero or both point the
/// same way.
///
/// Both vectors are treated as directions from the world origin, not from
/// each other. The result only closes in on `to` monotonically when the arc
/// between them stays roughly on one side of the origin; for endpoints on
/// opposite sides of the origin an intermediate step can move away from
/// `to`.
#[must_use]
pub fn slerp_position(from: Vec3, to: Vec3, t: f32) -> Vec3 {
    let t = t.clamp(0.0, 1.0);

    let from_len = from.length();
    let to_len = to.length();
    if from_len <= f32::EPSILON || to_len <= f32::EPSILON {
        return from.lerp(to, t);
    }

    let from_dir = from / from_len;
    let to_dir = to / to_len;
    let angle = from_dir.dot(to_dir).clamp(-1.0, 1.0).acos();
    if angle < PARALLEL_EPSILON {
        return from.lerp(to, t);
    }

    // Opposite directions have no unique arc; any perpendicular axis works.
    let axis = if std::f32::consts::PI - angle < PARALLEL_EPSILON {
        from_dir.any_orthonormal_vector()
    } else {
        from_dir.cross(to_dir).normalize()
    };

    let dir = Quat::from_axis_angle(axis, angle * t) * from_dir;
    dir * (from_len + (to_len - from_len) * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn endpoints() {
        let a = Vec3::new(3.0, 4.0, 2.0);
        let b = Vec3::new(0.0, 2.7, 4.7);
        assert!(approx(slerp_position(a, b, 0.0), a));
        assert!(approx(slerp_position(a, b, 1.0), b));
        assert!(approx(slerp_position(a, b, 7.0), b));
        assert!(approx(slerp_position(a, b, -1.0), a));
    }

    #[test]
    fn quarter_arc_keeps_unit_length() {
        let mid = slerp_position(Vec3::X, Vec3::Y, 0.5);
        let expected = Vec3::new(1.0, 1.0, 0.0).normalize();
        assert!(approx(mid, expected));
    }

    #[test]
    fn parallel_vectors_interpolate_length() {
        let mid = slerp_position(Vec3::Z * 2.0, Vec3::Z * 6.0, 0.25);
        assert!(approx(mid, Vec3::Z * 3.0));
    }

    #[test]
    fn zero_vector_falls_back_to_lerp() {
        let mid = slerp_position(Vec3::ZERO, Vec3::new(0.0, 4.0, 0.0), 0.5);
        assert!(approx(mid, Vec3::new(0.0, 2.0, 0.0)));
    }

    #[test]
    fn opposite_vectors_stay_finite() {
        let mid = slerp_position(Vec3::X, Vec3::NEG_X, 0.5);
        assert!(mid.is_finite());
        assert!((mid.length() - 1.0).abs() < 1e-4);
        assert!(mid.x.abs() < 1e-4);
    }
}
