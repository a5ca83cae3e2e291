//! 2D point type.

use super::Vec2;
use num_traits::Float;
use std::ops::{Add, AddAssign, Sub};

/// A 2D position.
///
/// Generic over floating-point types (`f32` or `f64`). Subtracting two points
/// gives the [`Vec2`] displacement between them; adding a `Vec2` moves a point.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point2<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Point2<F> {
    /// Creates a new point.
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    /// Creates a point at the origin (0, 0).
    #[inline]
    pub fn origin() -> Self {
        Self {
            x: F::zero(),
            y: F::zero(),
        }
    }

    /// Computes the squared distance to another point.
    #[inline]
    pub fn distance_squared(self, other: Self) -> F {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }

    /// Computes the Euclidean distance to another point.
    #[inline]
    pub fn distance(self, other: Self) -> F {
        self.distance_squared(other).sqrt()
    }

    /// Linearly interpolates between `self` and `other`.
    ///
    /// Evaluated as `(1-t)·self + t·other`, so `t = 0` returns `self` and
    /// `t = 1` returns `other` exactly.
    #[inline]
    pub fn lerp(self, other: Self, t: F) -> Self {
        let mt = F::one() - t;
        Self {
            x: mt * self.x + t * other.x,
            y: mt * self.y + t * other.y,
        }
    }

    /// Returns `true` if both coordinates are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl<F: Float> Sub for Point2<F> {
    type Output = Vec2<F>;

    #[inline]
    fn sub(self, other: Self) -> Vec2<F> {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

impl<F: Float> Add<Vec2<F>> for Point2<F> {
    type Output = Self;

    #[inline]
    fn add(self, v: Vec2<F>) -> Self {
        Self {
            x: self.x + v.x,
            y: self.y + v.y,
        }
    }
}

impl<F: Float> Sub<Vec2<F>> for Point2<F> {
    type Output = Self;

    #[inline]
    fn sub(self, v: Vec2<F>) -> Self {
        Self {
            x: self.x - v.x,
            y: self.y - v.y,
        }
    }
}

// Integrating a position by a velocity step.
impl<F: Float> AddAssign<Vec2<F>> for Point2<F> {
    #[inline]
    fn add_assign(&mut self, v: Vec2<F>) {
        self.x = self.x + v.x;
        self.y = self.y + v.y;
    }
}

impl<F: Float> From<(F, F)> for Point2<F> {
    #[inline]
    fn from((x, y): (F, F)) -> Self {
        Self::new(x, y)
    }
}

impl<F: Float> Default for Point2<F> {
    fn default() -> Self {
        Self::origin()
    }
}
