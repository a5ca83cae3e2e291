//! 2D circle type.

use super::{Point2, Segment2, Vec2};
use crate::collision::segment_circle_intersect;
use num_traits::Float;

/// A 2D circle defined by center and radius.
///
/// # Example
///
/// ```
/// use sketchfield::primitives::{Circle2, Point2, Segment2};
///
/// let circle: Circle2<f64> = Circle2::new(Point2::new(0.0, 0.0), 1.0);
/// assert!(circle.contains(Point2::new(0.5, 0.0)));
///
/// let path = Segment2::from_coords(-2.0, 0.0, 2.0, 0.0);
/// assert_eq!(circle.first_hit(path), Some(Point2::new(-1.0, 0.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Circle2<F> {
    /// Center point of the circle
    pub center: Point2<F>,
    /// Radius of the circle (must be non-negative)
    pub radius: F,
}

impl<F: Float> Circle2<F> {
    /// Creates a new circle from center and radius.
    #[inline]
    pub fn new(center: Point2<F>, radius: F) -> Self {
        Self { center, radius }
    }

    /// Checks if a point is inside the circle (including boundary).
    #[inline]
    pub fn contains(&self, point: Point2<F>) -> bool {
        self.center.distance_squared(point) <= self.radius * self.radius
    }

    /// Returns the unit normal pointing outward through `point`.
    ///
    /// Returns `None` if `point` coincides with the center.
    #[inline]
    pub fn outward_normal(&self, point: Point2<F>) -> Option<Vec2<F>> {
        (point - self.center).normalize()
    }

    /// Returns where a segment travelling from `segment.start` first meets
    /// the circle boundary.
    ///
    /// See [`segment_circle_intersect`] for root selection.
    #[inline]
    pub fn first_hit(&self, segment: Segment2<F>) -> Option<Point2<F>> {
        segment_circle_intersect(segment.start, segment.end, self.center, self.radius)
    }
}
