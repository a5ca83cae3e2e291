//! 2D vector type for displacements, velocities and forces.

use num_traits::Float;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// A 2D vector.
///
/// Generic over floating-point types (`f32` or `f64`).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    /// Creates a new vector.
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    /// Creates a zero vector.
    #[inline]
    pub fn zero() -> Self {
        Self {
            x: F::zero(),
            y: F::zero(),
        }
    }

    /// Returns `true` if both components are exactly zero.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.x == F::zero() && self.y == F::zero()
    }

    /// Computes the dot product with another vector.
    #[inline]
    pub fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y
    }

    /// Computes the 2D cross product (z-component of the 3D cross product).
    ///
    /// Positive means `other` is counter-clockwise from `self`.
    #[inline]
    pub fn cross(self, other: Self) -> F {
        self.x * other.y - self.y * other.x
    }

    /// Returns the squared magnitude.
    #[inline]
    pub fn magnitude_squared(self) -> F {
        self.dot(self)
    }

    /// Returns the magnitude (length) of the vector.
    #[inline]
    pub fn magnitude(self) -> F {
        self.magnitude_squared().sqrt()
    }

    /// Returns a unit-length copy of the vector.
    ///
    /// Returns `None` if the vector is zero or too small to normalize reliably.
    /// A Bézier tangent collapses to zero on degenerate control polygons, so
    /// this is the place callers branch on it.
    #[inline]
    pub fn normalize(self) -> Option<Self> {
        let mag = self.magnitude();
        if mag > F::epsilon() {
            Some(self / mag)
        } else {
            None
        }
    }

    /// Returns the vector rotated 90 degrees counter-clockwise.
    #[inline]
    pub fn perpendicular(self) -> Self {
        Self {
            x: -self.y,
            y: self.x,
        }
    }

    /// Mirrors the vector about the line whose unit normal is `unit_normal`.
    ///
    /// Computes `v - 2 (v · n) n`. `unit_normal` must already be normalized.
    #[inline]
    pub fn reflect(self, unit_normal: Self) -> Self {
        let two = F::one() + F::one();
        self - unit_normal * (two * self.dot(unit_normal))
    }
}

impl<F: Float> Add for Vec2<F> {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl<F: Float> Sub for Vec2<F> {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl<F: Float> Mul<F> for Vec2<F> {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: F) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }
}

impl<F: Float> Div<F> for Vec2<F> {
    type Output = Self;

    #[inline]
    fn div(self, scalar: F) -> Self {
        Self::new(self.x / scalar, self.y / scalar)
    }
}

impl<F: Float> Neg for Vec2<F> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl<F: Float> AddAssign for Vec2<F> {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl<F: Float> SubAssign for Vec2<F> {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl<F: Float> Default for Vec2<F> {
    fn default() -> Self {
        Self::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_dot_and_cross() {
        let a: Vec2<f64> = Vec2::new(1.0, 0.0);
        let b = Vec2::new(0.0, 1.0);
        assert_eq!(a.dot(b), 0.0);
        assert_eq!(a.cross(b), 1.0);
        assert_eq!(b.cross(a), -1.0);
    }

    #[test]
    fn test_magnitude() {
        let v: Vec2<f64> = Vec2::new(3.0, 4.0);
        assert_eq!(v.magnitude_squared(), 25.0);
        assert_eq!(v.magnitude(), 5.0);
    }

    #[test]
    fn test_normalize() {
        let n = Vec2::new(3.0f64, 4.0).normalize().unwrap();
        assert_relative_eq!(n.magnitude(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(n.x, 0.6, epsilon = 1e-12);
    }

    #[test]
    fn test_normalize_zero() {
        assert!(Vec2::<f64>::zero().normalize().is_none());
        assert!(Vec2::<f32>::zero().is_zero());
    }

    #[test]
    fn test_perpendicular() {
        let v: Vec2<f64> = Vec2::new(2.0, 1.0);
        let p = v.perpendicular();
        assert_eq!(p, Vec2::new(-1.0, 2.0));
        assert_eq!(v.dot(p), 0.0);
    }

    #[test]
    fn test_reflect_off_floor() {
        // Falling velocity bounces off a floor with upward normal
        let v: Vec2<f64> = Vec2::new(1.0, -2.0);
        let r = v.reflect(Vec2::new(0.0, 1.0));
        assert_relative_eq!(r.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(r.y, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_reflect_preserves_speed() {
        let v: Vec2<f64> = Vec2::new(0.3, -0.7);
        let n = Vec2::new(1.0, 1.0).normalize().unwrap();
        let r = v.reflect(n);
        assert_relative_eq!(r.magnitude(), v.magnitude(), epsilon = 1e-12);
    }

    #[test]
    fn test_assign_ops() {
        let mut v: Vec2<f64> = Vec2::new(1.0, 1.0);
        v += Vec2::new(0.5, -0.5);
        assert_eq!(v, Vec2::new(1.5, 0.5));
        v -= Vec2::new(1.5, 0.5);
        assert!(v.is_zero());
        assert_eq!(-Vec2::new(1.0f64, -2.0), Vec2::new(-1.0, 2.0));
        assert_eq!(Vec2::new(2.0f64, 4.0) / 2.0, Vec2::new(1.0, 2.0));
    }
}
