//! Segment/segment and segment/circle intersection.

use crate::primitives::{Point2, Segment2};
use num_traits::Float;

/// Determinant magnitude below which two segments are treated as parallel.
pub const PARALLEL_EPSILON: f64 = 1e-8;

/// Intersects segment `p1→p2` with segment `q1→q2`.
///
/// Solves `p1 + t·(p2-p1) = q1 + u·(q2-q1)` for `(t, u)` with Cramer's rule
/// and returns the crossing point when both parameters lie in `[0, 1]`.
///
/// Returns `None` when the segments miss each other, and also when they are
/// parallel or collinear (`|det| < 1e-8`): overlapping collinear segments
/// have no single crossing point and are reported as no intersection.
///
/// # Example
///
/// ```
/// use sketchfield::collision::segment_intersect;
/// use sketchfield::Point2;
///
/// let hit = segment_intersect(
///     Point2::new(-1.0, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(0.0, -1.0),
///     Point2::new(0.0, 1.0),
/// );
/// assert_eq!(hit, Some(Point2::new(0.0, 0.0)));
/// ```
pub fn segment_intersect<F: Float>(
    p1: Point2<F>,
    p2: Point2<F>,
    q1: Point2<F>,
    q2: Point2<F>,
) -> Option<Point2<F>> {
    let r = p2 - p1;
    let s = q2 - q1;
    let det = r.cross(s);

    if det.abs() < F::from(PARALLEL_EPSILON).unwrap() {
        return None;
    }

    let d = q1 - p1;
    let t = d.cross(s) / det;
    let u = d.cross(r) / det;

    let unit = F::zero()..=F::one();
    if unit.contains(&t) && unit.contains(&u) {
        Some(Segment2::new(p1, p2).point_at(t))
    } else {
        None
    }
}

/// Intersects segment `p1→p2` with the circle of `radius` around `center`.
///
/// Solves `|p1 + t·(p2-p1) - center|² = radius²`. Of the two roots the
/// smaller one is returned when it lies in `[0, 1]`, otherwise the larger
/// one; so a segment starting outside the circle reports its entry point and
/// one starting inside reports its exit point.
///
/// Returns `None` when the line misses the circle, when both roots fall
/// outside the segment, or when the segment has zero length.
///
/// # Example
///
/// ```
/// use sketchfield::collision::segment_circle_intersect;
/// use sketchfield::Point2;
///
/// let hit = segment_circle_intersect(
///     Point2::new(-2.0, 0.0),
///     Point2::new(2.0, 0.0),
///     Point2::origin(),
///     1.0,
/// );
/// assert_eq!(hit, Some(Point2::new(-1.0, 0.0)));
/// ```
pub fn segment_circle_intersect<F: Float>(
    p1: Point2<F>,
    p2: Point2<F>,
    center: Point2<F>,
    radius: F,
) -> Option<Point2<F>> {
    let d = p2 - p1;
    let f = p1 - center;

    let a = d.dot(d);
    if a <= F::epsilon() {
        return None;
    }

    let two = F::one() + F::one();
    let b = two * f.dot(d);
    let c = f.dot(f) - radius * radius;

    let discriminant = b * b - two * two * a * c;
    if discriminant < F::zero() {
        return None;
    }

    let sqrt_disc = discriminant.sqrt();
    let t1 = (-b - sqrt_disc) / (two * a);
    let t2 = (-b + sqrt_disc) / (two * a);

    let unit = F::zero()..=F::one();
    let segment = Segment2::new(p1, p2);
    if unit.contains(&t1) {
        Some(segment.point_at(t1))
    } else if unit.contains(&t2) {
        Some(segment.point_at(t2))
    } else {
        None
    }
}
