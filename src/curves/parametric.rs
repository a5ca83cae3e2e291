//! Curves as a capability: anything that maps `t ∈ [0, 1]` to a point.

use super::bezier::{Bezier2, CubicBezier2, QuadraticBezier2};
use crate::primitives::{Point2, Segment2};
use num_traits::Float;

/// A curve that can be evaluated at a parameter.
///
/// Implemented by every curve type in this crate. Arbitrary closures can be
/// used through [`FnCurve`].
pub trait Parametric<F: Float> {
    /// Returns the point at parameter `t`, nominally in `[0, 1]`.
    fn point_at(&self, t: F) -> Point2<F>;

    /// Samples the curve at `segments + 1` evenly spaced parameters.
    ///
    /// The result is a polyline from `point_at(0)` to `point_at(1)` ready to
    /// be stroked by a renderer. `segments` is raised to at least 1.
    fn sample(&self, segments: usize) -> Vec<Point2<F>> {
        let n = segments.max(1);
        let denom = F::from(n).unwrap();
        (0..=n)
            .map(|i| self.point_at(F::from(i).unwrap() / denom))
            .collect()
    }
}

/// Adapts a closure `Fn(t) -> Point2` into a [`Parametric`] curve.
///
/// # Example
///
/// ```
/// use sketchfield::curves::{FnCurve, Parametric};
/// use sketchfield::Point2;
///
/// let circle = FnCurve(|t: f64| {
///     let a = t * std::f64::consts::TAU;
///     Point2::new(a.cos(), a.sin())
/// });
/// let polyline = circle.sample(64);
/// assert_eq!(polyline.len(), 65);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FnCurve<G>(pub G);

impl<F, G> Parametric<F> for FnCurve<G>
where
    F: Float,
    G: Fn(F) -> Point2<F>,
{
    #[inline]
    fn point_at(&self, t: F) -> Point2<F> {
        (self.0)(t)
    }
}

impl<F: Float> Parametric<F> for Segment2<F> {
    #[inline]
    fn point_at(&self, t: F) -> Point2<F> {
        Segment2::point_at(*self, t)
    }
}

impl<F: Float> Parametric<F> for QuadraticBezier2<F> {
    #[inline]
    fn point_at(&self, t: F) -> Point2<F> {
        self.eval(t)
    }
}

impl<F: Float> Parametric<F> for CubicBezier2<F> {
    #[inline]
    fn point_at(&self, t: F) -> Point2<F> {
        self.eval(t)
    }
}

impl<F: Float> Parametric<F> for Bezier2<F> {
    #[inline]
    fn point_at(&self, t: F) -> Point2<F> {
        self.eval(t)
    }
}
