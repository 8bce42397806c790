//! 2D vector helpers
//!
//! `Vector2` is glam's `Vec2`. glam already covers add/sub/scale, equality,
//! `distance`, `length` and `normalize`; this module adds the screen-space
//! rotation the physics needs and the renderer's interpolation.

use glam::Vec2;

pub type Vector2 = Vec2;

/// Extra operations on `Vec2` used by the simulation
pub trait Vec2Ext {
    /// Rotate by `degrees` with the standard rotation matrix.
    ///
    /// With y growing downward a positive angle turns the vector clockwise
    /// on screen.
    fn rotated_degrees(self, degrees: f32) -> Self;

    /// Length of the vector. Must not be called on `Vec2::ZERO`.
    fn magnitude(self) -> f32;

    /// Unit vector in the same direction. Must not be called on `Vec2::ZERO`.
    fn normalized(self) -> Self;
}

impl Vec2Ext for Vec2 {
    #[inline]
    fn rotated_degrees(self, degrees: f32) -> Self {
        let theta = degrees.to_radians();
        let (sn, cs) = theta.sin_cos();
        Vec2::new(self.x * cs - self.y * sn, self.x * sn + self.y * cs)
    }

    #[inline]
    fn magnitude(self) -> f32 {
        self.length()
    }

    #[inline]
    fn normalized(self) -> Self {
        let magnitude = self.length();
        Vec2::new(self.x / magnitude, self.y / magnitude)
    }
}

/// Linear interpolation between two positions, `alpha` clamped to [0, 1]
#[inline]
pub fn lerp(a: Vec2, b: Vec2, alpha: f32) -> Vec2 {
    let alpha = alpha.clamp(0.0, 1.0);
    a * (1.0 - alpha) + b * alpha
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn test_rotate_quarter_turn() {
        let v = Vec2::new(1.0, 0.0).rotated_degrees(90.0);
        assert!(approx(v, Vec2::new(0.0, 1.0)));

        let v = Vec2::new(-1.0, 0.0).rotated_degrees(90.0);
        assert!(approx(v, Vec2::new(0.0, -1.0)));
    }

    #[test]
    fn test_rotate_preserves_length() {
        for degrees in [-45.0, -13.0, 0.0, 7.0, 44.0] {
            let v = Vec2::new(1.0, 0.0).rotated_degrees(degrees);
            assert!((v.magnitude() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_rotate_zero_is_identity() {
        let v = Vec2::new(3.0, -4.0);
        assert_eq!(v.rotated_degrees(0.0), v);
    }

    #[test]
    fn test_magnitude_and_normalized() {
        let v = Vec2::new(3.0, 4.0);
        assert_eq!(v.magnitude(), 5.0);
        assert!(approx(v.normalized(), Vec2::new(0.6, 0.8)));
        assert_eq!(Vec2::ZERO.distance(v), 5.0);
    }

    #[test]
    fn test_lerp_clamps_alpha() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(10.0, 20.0);
        assert!(approx(lerp(a, b, 0.5), Vec2::new(5.0, 10.0)));
        assert_eq!(lerp(a, b, -1.0), a);
        assert_eq!(lerp(a, b, 2.0), b);
    }
}
