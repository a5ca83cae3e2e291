//! 2D line segment type.

use super::{Point2, Vec2};
use crate::collision::segment_intersect;
use num_traits::Float;

/// A 2D line segment defined by two endpoints.
///
/// Also serves as the degree-1 Bézier curve: `point_at` is the linear
/// Bernstein form and `direction` its (constant) tangent.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment2<F> {
    pub start: Point2<F>,
    pub end: Point2<F>,
}

impl<F: Float> Segment2<F> {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(start: Point2<F>, end: Point2<F>) -> Self {
        Self { start, end }
    }

    /// Creates a segment from coordinate pairs.
    #[inline]
    pub fn from_coords(x1: F, y1: F, x2: F, y2: F) -> Self {
        Self {
            start: Point2::new(x1, y1),
            end: Point2::new(x2, y2),
        }
    }

    /// Returns the direction vector from start to end.
    #[inline]
    pub fn direction(self) -> Vec2<F> {
        self.end - self.start
    }

    /// Returns the length of the segment.
    #[inline]
    pub fn length(self) -> F {
        self.start.distance(self.end)
    }

    /// Returns the point at parameter `t` along the segment.
    ///
    /// Uses the Bernstein form `(1-t)·start + t·end`, so `t = 0` and `t = 1`
    /// reproduce the endpoints exactly. Values outside `[0, 1]` extrapolate.
    #[inline]
    pub fn point_at(self, t: F) -> Point2<F> {
        self.start.lerp(self.end, t)
    }

    /// Returns a unit normal (direction rotated counter-clockwise).
    ///
    /// Returns `None` for a degenerate segment.
    #[inline]
    pub fn unit_normal(self) -> Option<Vec2<F>> {
        self.direction().perpendicular().normalize()
    }

    /// Computes the closest point on the segment to `p`.
    ///
    /// Returns `(closest_point, t)` with `t` in `[0, 1]`.
    pub fn closest_point(self, p: Point2<F>) -> (Point2<F>, F) {
        let v = self.direction();
        let len_sq = v.magnitude_squared();

        if len_sq <= F::epsilon() {
            return (self.start, F::zero());
        }

        let t = ((p - self.start).dot(v) / len_sq).max(F::zero()).min(F::one());
        (self.point_at(t), t)
    }

    /// Computes the distance from a point to this segment.
    #[inline]
    pub fn distance_to_point(self, p: Point2<F>) -> F {
        let (closest, _) = self.closest_point(p);
        p.distance(closest)
    }

    /// Returns the crossing point with another segment, if any.
    ///
    /// See [`segment_intersect`] for the exact rules.
    #[inline]
    pub fn intersect(self, other: Segment2<F>) -> Option<Point2<F>> {
        segment_intersect(self.start, self.end, other.start, other.end)
    }
}

impl<F: Float> From<(Point2<F>, Point2<F>)> for Segment2<F> {
    fn from((start, end): (Point2<F>, Point2<F>)) -> Self {
        Self::new(start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_point_at_exact_endpoints() {
        let s: Segment2<f64> = Segment2::from_coords(0.1, 0.7, -0.3, 0.9);
        assert_eq!(s.point_at(0.0), s.start);
        assert_eq!(s.point_at(1.0), s.end);

        let mid = s.point_at(0.5);
        assert_relative_eq!(mid.x, -0.1, epsilon = 1e-12);
        assert_relative_eq!(mid.y, 0.8, epsilon = 1e-12);
    }

    #[test]
    fn test_point_at_extrapolates() {
        let s: Segment2<f64> = Segment2::from_coords(0.0, 0.0, 1.0, 0.0);
        assert_relative_eq!(s.point_at(2.0).x, 2.0);
        assert_relative_eq!(s.point_at(-1.0).x, -1.0);
    }

    #[test]
    fn test_length_and_direction() {
        let s: Segment2<f64> = Segment2::from_coords(1.0, 1.0, 4.0, 5.0);
        assert_eq!(s.direction(), Vec2::new(3.0, 4.0));
        assert_eq!(s.length(), 5.0);
    }

    #[test]
    fn test_unit_normal() {
        let s: Segment2<f64> = Segment2::from_coords(0.0, 0.0, 2.0, 0.0);
        let n = s.unit_normal().unwrap();
        assert_relative_eq!(n.x, 0.0);
        assert_relative_eq!(n.y, 1.0);

        let degenerate: Segment2<f64> = Segment2::from_coords(1.0, 1.0, 1.0, 1.0);
        assert!(degenerate.unit_normal().is_none());
    }

    #[test]
    fn test_closest_point() {
        let s: Segment2<f64> = Segment2::from_coords(0.0, 0.0, 10.0, 0.0);

        let (c, t) = s.closest_point(Point2::new(5.0, 5.0));
        assert_relative_eq!(c.x, 5.0, epsilon = 1e-12);
        assert_relative_eq!(t, 0.5, epsilon = 1e-12);

        let (_, t) = s.closest_point(Point2::new(-5.0, 1.0));
        assert_eq!(t, 0.0);

        let (_, t) = s.closest_point(Point2::new(15.0, 1.0));
        assert_eq!(t, 1.0);

        assert_relative_eq!(s.distance_to_point(Point2::new(5.0, 3.0)), 3.0);
    }

    #[test]
    fn test_intersect_method() {
        let a: Segment2<f64> = Segment2::from_coords(-1.0, 0.0, 1.0, 0.0);
        let b: Segment2<f64> = Segment2::from_coords(0.0, -1.0, 0.0, 1.0);
        let hit = a.intersect(b).unwrap();
        assert_relative_eq!(hit.x, 0.0);
        assert_relative_eq!(hit.y, 0.0);
    }
}
