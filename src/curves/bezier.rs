//! Bézier curves of degree 1 to 3 in Bernstein form.
//!
//! Evaluation uses the closed Bernstein polynomials rather than recursive
//! de Casteljau interpolation, so each call is a fixed handful of multiplies.
//! Parameters are never clamped: `t` outside `[0, 1]` extrapolates the
//! polynomial.

use crate::error::{Result, SketchError};
use crate::primitives::{Point2, Segment2, Vec2};
use num_traits::Float;

const CONTROL_POLYGON_LENGTHS: &str = "2, 3 or 4";

/// A quadratic Bézier curve defined by 3 control points.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuadraticBezier2<F> {
    /// Start point
    pub p0: Point2<F>,
    /// Control point
    pub p1: Point2<F>,
    /// End point
    pub p2: Point2<F>,
}

impl<F: Float> QuadraticBezier2<F> {
    /// Creates a new quadratic Bézier curve.
    #[inline]
    pub fn new(p0: Point2<F>, p1: Point2<F>, p2: Point2<F>) -> Self {
        Self { p0, p1, p2 }
    }

    /// Evaluates the curve at parameter `t`.
    #[inline]
    pub fn eval(&self, t: F) -> Point2<F> {
        let one = F::one();
        let two = one + one;
        let mt = one - t;

        let b0 = mt * mt;
        let b1 = two * mt * t;
        let b2 = t * t;

        Point2::new(
            b0 * self.p0.x + b1 * self.p1.x + b2 * self.p2.x,
            b0 * self.p0.y + b1 * self.p1.y + b2 * self.p2.y,
        )
    }

    /// Returns the derivative `B'(t) = 2(1-t)(p1-p0) + 2t(p2-p1)`.
    #[inline]
    pub fn tangent(&self, t: F) -> Vec2<F> {
        let two = F::one() + F::one();
        let mt = F::one() - t;
        (self.p1 - self.p0) * (two * mt) + (self.p2 - self.p1) * (two * t)
    }
}

/// A cubic Bézier curve defined by 4 control points.
///
/// The curve starts at `p0`, is pulled towards `p1` and `p2`, and ends at `p3`.
///
/// # Example
///
/// ```
/// use sketchfield::{Point2, curves::CubicBezier2};
///
/// let curve: CubicBezier2<f64> = CubicBezier2::new(
///     Point2::new(-0.6, 0.7),
///     Point2::new(-0.2, -0.2),
///     Point2::new(0.3, 0.8),
///     Point2::new(0.8, 0.3),
/// );
///
/// assert_eq!(curve.eval(0.0), curve.p0);
/// assert_eq!(curve.eval(1.0), curve.p3);
///
/// let t = curve.closest_t(curve.eval(1.0));
/// assert!((t - 1.0).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CubicBezier2<F> {
    /// Start point
    pub p0: Point2<F>,
    /// First control point
    pub p1: Point2<F>,
    /// Second control point
    pub p2: Point2<F>,
    /// End point
    pub p3: Point2<F>,
}

impl<F: Float> CubicBezier2<F> {
    /// Creates a new cubic Bézier curve.
    #[inline]
    pub fn new(p0: Point2<F>, p1: Point2<F>, p2: Point2<F>, p3: Point2<F>) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// Builds a cubic from exactly four control points.
    pub fn from_control_points(points: &[Point2<F>]) -> Result<Self> {
        match *points {
            [p0, p1, p2, p3] => Ok(Self::new(p0, p1, p2, p3)),
            _ => Err(SketchError::InvalidControlPolygon {
                len: points.len(),
                expected: "4",
            }),
        }
    }

    /// Evaluates the curve at parameter `t`.
    #[inline]
    pub fn eval(&self, t: F) -> Point2<F> {
        let one = F::one();
        let three = one + one + one;
        let mt = one - t;

        let b0 = mt * mt * mt;
        let b1 = three * mt * mt * t;
        let b2 = three * mt * t * t;
        let b3 = t * t * t;

        Point2::new(
            b0 * self.p0.x + b1 * self.p1.x + b2 * self.p2.x + b3 * self.p3.x,
            b0 * self.p0.y + b1 * self.p1.y + b2 * self.p2.y + b3 * self.p3.y,
        )
    }

    /// Returns the derivative
    /// `B'(t) = 3(1-t)²(p1-p0) + 6(1-t)t(p2-p1) + 3t²(p3-p2)`.
    #[inline]
    pub fn tangent(&self, t: F) -> Vec2<F> {
        let one = F::one();
        let three = one + one + one;
        let six = three + three;
        let mt = one - t;

        (self.p1 - self.p0) * (three * mt * mt)
            + (self.p2 - self.p1) * (six * mt * t)
            + (self.p3 - self.p2) * (three * t * t)
    }
}

/// A Bézier curve whose degree is chosen by the length of its control polygon.
///
/// # Example
///
/// ```
/// use sketchfield::{Point2, curves::Bezier2};
///
/// let polygon = [
///     Point2::new(0.0, 0.0),
///     Point2::new(0.5, 1.0),
///     Point2::new(1.0, 0.0),
/// ];
/// let curve = Bezier2::from_control_points(&polygon).unwrap();
/// assert_eq!(curve.degree(), 2);
/// assert_eq!(curve.eval(1.0), Point2::new(1.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Bezier2<F> {
    /// Two control points: a straight segment.
    Linear(Segment2<F>),
    /// Three control points.
    Quadratic(QuadraticBezier2<F>),
    /// Four control points.
    Cubic(CubicBezier2<F>),
}

impl<F: Float> Bezier2<F> {
    /// Builds a curve from 2, 3 or 4 control points.
    ///
    /// Any other length is rejected with
    /// [`SketchError::InvalidControlPolygon`].
    pub fn from_control_points(points: &[Point2<F>]) -> Result<Self> {
        match *points {
            [p0, p1] => Ok(Bezier2::Linear(Segment2::new(p0, p1))),
            [p0, p1, p2] => Ok(Bezier2::Quadratic(QuadraticBezier2::new(p0, p1, p2))),
            [p0, p1, p2, p3] => Ok(Bezier2::Cubic(CubicBezier2::new(p0, p1, p2, p3))),
            _ => Err(SketchError::InvalidControlPolygon {
                len: points.len(),
                expected: CONTROL_POLYGON_LENGTHS,
            }),
        }
    }

    /// Polynomial degree of the curve (1, 2 or 3).
    pub fn degree(&self) -> usize {
        match self {
            Bezier2::Linear(_) => 1,
            Bezier2::Quadratic(_) => 2,
            Bezier2::Cubic(_) => 3,
        }
    }

    /// First control point, which is also `eval(0)`.
    pub fn start(&self) -> Point2<F> {
        match self {
            Bezier2::Linear(s) => s.start,
            Bezier2::Quadratic(q) => q.p0,
            Bezier2::Cubic(c) => c.p0,
        }
    }

    /// Last control point, which is also `eval(1)`.
    pub fn end(&self) -> Point2<F> {
        match self {
            Bezier2::Linear(s) => s.end,
            Bezier2::Quadratic(q) => q.p2,
            Bezier2::Cubic(c) => c.p3,
        }
    }

    /// Evaluates the curve at parameter `t`.
    #[inline]
    pub fn eval(&self, t: F) -> Point2<F> {
        match self {
            Bezier2::Linear(s) => s.point_at(t),
            Bezier2::Quadratic(q) => q.eval(t),
            Bezier2::Cubic(c) => c.eval(t),
        }
    }

    /// Returns the analytic derivative at parameter `t`.
    ///
    /// May be the zero vector when control points coincide.
    #[inline]
    pub fn tangent(&self, t: F) -> Vec2<F> {
        match self {
            Bezier2::Linear(s) => s.direction(),
            Bezier2::Quadratic(q) => q.tangent(t),
            Bezier2::Cubic(c) => c.tangent(t),
        }
    }
}

/// Evaluates the Bézier curve described by `control_points` at `t`.
///
/// Accepts 2, 3 or 4 control points (linear, quadratic, cubic).
pub fn evaluate<F: Float>(control_points: &[Point2<F>], t: F) -> Result<Point2<F>> {
    Ok(Bezier2::from_control_points(control_points)?.eval(t))
}

/// Returns the tangent of the Bézier curve described by `control_points` at `t`.
///
/// Accepts 2, 3 or 4 control points. The result is not normalized and is the
/// zero vector where the curve degenerates to a point.
pub fn tangent<F: Float>(control_points: &[Point2<F>], t: F) -> Result<Vec2<F>> {
    Ok(Bezier2::from_control_points(control_points)?.tangent(t))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn polygon() -> Vec<Point2<f64>> {
        vec![
            Point2::new(-0.6, 0.7),
            Point2::new(-0.2, -0.2),
            Point2::new(0.3, 0.8),
            Point2::new(0.8, 0.3),
        ]
    }

    #[test]
    fn test_endpoints_exact_all_degrees() {
        let cp = polygon();
        for len in 2..=4 {
            let points = &cp[..len];
            assert_eq!(evaluate(points, 0.0).unwrap(), points[0]);
            assert_eq!(evaluate(points, 1.0).unwrap(), points[len - 1]);
        }
    }

    #[test]
    fn test_endpoints_exact_f32() {
        let cp: Vec<Point2<f32>> = vec![
            Point2::new(0.1, 0.7),
            Point2::new(0.3, -0.9),
            Point2::new(0.7, 0.2),
            Point2::new(0.9, 0.6),
        ];
        for len in 2..=4 {
            assert_eq!(evaluate(&cp[..len], 0.0).unwrap(), cp[0]);
            assert_eq!(evaluate(&cp[..len], 1.0).unwrap(), cp[len - 1]);
        }
    }

    #[test]
    fn test_rejects_bad_polygon_lengths() {
        let cp = polygon();
        for len in [0, 1] {
            let err = evaluate(&cp[..len], 0.5).unwrap_err();
            assert_eq!(
                err,
                SketchError::InvalidControlPolygon {
                    len,
                    expected: "2, 3 or 4"
                }
            );
        }

        let mut five = cp.clone();
        five.push(Point2::new(1.0, 1.0));
        assert!(tangent(&five, 0.5).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_quadratic_midpoint() {
        let curve: QuadraticBezier2<f64> = QuadraticBezier2::new(
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 2.0),
            Point2::new(2.0, 0.0),
        );

        let mid = curve.eval(0.5);
        assert_relative_eq!(mid.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(mid.y, 1.0, epsilon = 1e-12);

        // Apex: tangent is horizontal
        let tan = curve.tangent(0.5);
        assert_relative_eq!(tan.x, 2.0, epsilon = 1e-12);
        assert_relative_eq!(tan.y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_cubic_symmetric_midpoint() {
        let curve: CubicBezier2<f64> = CubicBezier2::new(
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 2.0),
            Point2::new(4.0, 2.0),
            Point2::new(4.0, 0.0),
        );

        let mid = curve.eval(0.5);
        assert_relative_eq!(mid.x, 2.0, epsilon = 1e-12);
        assert_relative_eq!(mid.y, 1.5, epsilon = 1e-12);
    }

    #[test]
    fn test_cubic_tangent_at_ends() {
        let curve: CubicBezier2<f64> = CubicBezier2::new(
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(2.0, 1.0),
            Point2::new(3.0, 0.0),
        );

        // B'(0) = 3(p1 - p0), B'(1) = 3(p3 - p2)
        assert_eq!(curve.tangent(0.0), Vec2::new(3.0, 3.0));
        assert_eq!(curve.tangent(1.0), Vec2::new(3.0, -3.0));
    }

    #[test]
    fn test_tangent_matches_finite_difference() {
        let curve = Bezier2::from_control_points(&polygon()).unwrap();
        let h = 1e-6;
        for &t in &[0.1, 0.37, 0.5, 0.82] {
            let fd = (curve.eval(t + h) - curve.eval(t - h)) / (2.0 * h);
            let tan = curve.tangent(t);
            assert_relative_eq!(tan.x, fd.x, epsilon = 1e-6);
            assert_relative_eq!(tan.y, fd.y, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_linear_tangent_is_direction() {
        let t = tangent(&[Point2::new(1.0, 1.0), Point2::new(3.0, 2.0)], 0.25).unwrap();
        assert_eq!(t, Vec2::new(2.0, 1.0));
    }

    #[test]
    fn test_degenerate_tangent_is_zero() {
        let p = Point2::new(0.5, 0.5);
        let cubic: CubicBezier2<f64> = CubicBezier2::new(p, p, p, p);
        let tan = cubic.tangent(0.3);
        assert!(tan.is_zero());
        assert!(tan.normalize().is_none());
    }

    #[test]
    fn test_extrapolation_is_not_clamped() {
        // Evenly spaced collinear cubic is the line B(t) = (t, 0)
        let cp = [
            Point2::new(0.0, 0.0),
            Point2::new(1.0 / 3.0, 0.0),
            Point2::new(2.0 / 3.0, 0.0),
            Point2::new(1.0, 0.0),
        ];
        let p = evaluate(&cp, 1.5).unwrap();
        assert_relative_eq!(p.x, 1.5, epsilon = 1e-12);
        let p = evaluate(&cp, -0.5).unwrap();
        assert_relative_eq!(p.x, -0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_bezier2_accessors() {
        let curve = Bezier2::from_control_points(&polygon()).unwrap();
        assert_eq!(curve.degree(), 3);
        assert_eq!(curve.start(), Point2::new(-0.6, 0.7));
        assert_eq!(curve.end(), Point2::new(0.8, 0.3));

        let line = Bezier2::from_control_points(&polygon()[..2]).unwrap();
        assert_eq!(line.degree(), 1);
        assert!(matches!(line, Bezier2::Linear(_)));
    }

    #[test]
    fn test_cubic_from_control_points() {
        assert!(CubicBezier2::from_control_points(&polygon()).is_ok());
        let err = CubicBezier2::from_control_points(&polygon()[..3]).unwrap_err();
        assert_eq!(
            err,
            SketchError::InvalidControlPolygon {
                len: 3,
                expected: "4"
            }
        );
    }
}
