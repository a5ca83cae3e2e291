//! Closest-point projection onto a cubic Bézier curve.
//!
//! The projection runs in two stages: a coarse scan of the curve at evenly
//! spaced parameters to pick a seed, then a fixed number of gradient-descent
//! steps on the squared distance `f(t) = |B(t) - P|²`, whose derivative is
//! `2 (B(t) - P) · B'(t)`. `t` is clamped to `[0, 1]` after every step.
//!
//! There is no convergence test: the cost of a call is fixed, which keeps
//! per-particle, per-frame force evaluation predictable. The result is a
//! local minimum near the coarse seed, so on curves with several comparably
//! close branches (loops, tight bends) it may not be the global one.
//!
//! The step is stable only while `step_size · 2|B'(t)|² < 2`. With the
//! default step of 0.2 that means `|B'|² < 5` near the answer; past that the
//! iterate overshoots and oscillates, and the returned `t` need not be a
//! local minimum. Even unit-window curves exceed this easily: a cubic whose
//! first control leg is `(0.4, -0.9)` starts with `|B'|² ≈ 8.7`. For such
//! curves pass a smaller step (and more iterations) through
//! [`ClosestPointSolver::with_step_size`].

use super::bezier::CubicBezier2;
use crate::error::Result;
use crate::primitives::Point2;
use num_traits::Float;

/// Tuning knobs of the closest-point projection.
///
/// # Example
///
/// ```
/// use sketchfield::curves::{ClosestPointSolver, CubicBezier2};
/// use sketchfield::Point2;
///
/// let line: CubicBezier2<f64> = CubicBezier2::new(
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0 / 3.0, 0.0),
///     Point2::new(2.0 / 3.0, 0.0),
///     Point2::new(1.0, 0.0),
/// );
///
/// let solver = ClosestPointSolver::new().with_iterations(50);
/// let t = solver.find_closest_t(&line, Point2::new(0.37, 0.5));
/// assert!((t - 0.37).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClosestPointSolver {
    /// Number of intervals in the coarse scan (`coarse_samples + 1` evaluations).
    pub coarse_samples: usize,
    /// Number of gradient steps after the scan.
    pub iterations: usize,
    /// Gradient step size.
    pub step_size: f64,
}

impl ClosestPointSolver {
    /// Coarse scan intervals used by default.
    pub const DEFAULT_COARSE_SAMPLES: usize = 20;
    /// Gradient steps used by default.
    pub const DEFAULT_ITERATIONS: usize = 30;
    /// Gradient step size used by default.
    pub const DEFAULT_STEP_SIZE: f64 = 0.2;

    /// Creates a solver with the default settings.
    pub fn new() -> Self {
        Self {
            coarse_samples: Self::DEFAULT_COARSE_SAMPLES,
            iterations: Self::DEFAULT_ITERATIONS,
            step_size: Self::DEFAULT_STEP_SIZE,
        }
    }

    /// Sets the number of coarse scan intervals (at least 1 is used).
    pub fn with_coarse_samples(mut self, coarse_samples: usize) -> Self {
        self.coarse_samples = coarse_samples;
        self
    }

    /// Sets the number of gradient steps.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Sets the gradient step size.
    pub fn with_step_size(mut self, step_size: f64) -> Self {
        self.step_size = step_size;
        self
    }

    /// Returns the parameter `t ∈ [0, 1]` of the point on `curve` closest to
    /// `query`.
    pub fn find_closest_t<F: Float>(&self, curve: &CubicBezier2<F>, query: Point2<F>) -> F {
        let seed = self.coarse_seed(curve, query);
        self.refine(curve, query, seed)
    }

    /// Like [`find_closest_t`](Self::find_closest_t), also returning the
    /// projected point.
    pub fn closest_point<F: Float>(
        &self,
        curve: &CubicBezier2<F>,
        query: Point2<F>,
    ) -> (F, Point2<F>) {
        let t = self.find_closest_t(curve, query);
        (t, curve.eval(t))
    }

    fn coarse_seed<F: Float>(&self, curve: &CubicBezier2<F>, query: Point2<F>) -> F {
        let n = self.coarse_samples.max(1);
        let denom = F::from(n).unwrap();

        let mut best_t = F::zero();
        let mut best_dist_sq = F::infinity();

        for i in 0..=n {
            let t = F::from(i).unwrap() / denom;
            let dist_sq = curve.eval(t).distance_squared(query);
            if dist_sq < best_dist_sq {
                best_dist_sq = dist_sq;
                best_t = t;
            }
        }

        best_t
    }

    fn refine<F: Float>(&self, curve: &CubicBezier2<F>, query: Point2<F>, mut t: F) -> F {
        let two = F::one() + F::one();
        let alpha = F::from(self.step_size).unwrap_or_else(F::zero);

        for _ in 0..self.iterations {
            let offset = curve.eval(t) - query;
            let grad = two * offset.dot(curve.tangent(t));
            t = (t - alpha * grad).max(F::zero()).min(F::one());
        }

        t
    }
}

impl Default for ClosestPointSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Float> CubicBezier2<F> {
    /// Parameter of the point on the curve closest to `query`, using the
    /// default [`ClosestPointSolver`].
    #[inline]
    pub fn closest_t(&self, query: Point2<F>) -> F {
        ClosestPointSolver::new().find_closest_t(self, query)
    }
}

/// Returns the parameter `t ∈ [0, 1]` of the point on `curve` closest to
/// `query`, with default solver settings.
#[inline]
pub fn find_closest_t<F: Float>(curve: &CubicBezier2<F>, query: Point2<F>) -> F {
    ClosestPointSolver::new().find_closest_t(curve, query)
}

/// Like [`find_closest_t`], taking the cubic as a slice of four control points.
///
/// Fails with [`SketchError::InvalidControlPolygon`](crate::SketchError::InvalidControlPolygon)
/// unless exactly four points are given.
pub fn find_closest_t_from_points<F: Float>(
    control_points: &[Point2<F>],
    query: Point2<F>,
) -> Result<F> {
    let curve = CubicBezier2::from_control_points(control_points)?;
    Ok(find_closest_t(&curve, query))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// The control polygon the force-field sketch starts with.
    fn sketch_curve() -> CubicBezier2<f64> {
        CubicBezier2::new(
            Point2::new(-0.6, 0.7),
            Point2::new(-0.2, -0.2),
            Point2::new(0.3, 0.8),
            Point2::new(0.8, 0.3),
        )
    }

    /// Evenly spaced collinear control points: `B(t) = (t, 0)`.
    fn unit_line() -> CubicBezier2<f64> {
        CubicBezier2::new(
            Point2::new(0.0, 0.0),
            Point2::new(1.0 / 3.0, 0.0),
            Point2::new(2.0 / 3.0, 0.0),
            Point2::new(1.0, 0.0),
        )
    }

    #[test]
    fn test_endpoints_project_to_parameter_bounds() {
        let curve = sketch_curve();
        assert_relative_eq!(find_closest_t(&curve, curve.eval(0.0)), 0.0, epsilon = 1e-6);
        assert_relative_eq!(find_closest_t(&curve, curve.eval(1.0)), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_point_on_curve_between_samples() {
        let curve = sketch_curve();
        let t = find_closest_t(&curve, curve.eval(0.43));
        assert_relative_eq!(t, 0.43, epsilon = 1e-3);
    }

    #[test]
    fn test_projection_onto_line() {
        let line = unit_line();

        let t = find_closest_t(&line, Point2::new(0.37, 0.5));
        assert_relative_eq!(t, 0.37, epsilon = 1e-5);

        let t = find_closest_t(&line, Point2::new(0.81, -0.2));
        assert_relative_eq!(t, 0.81, epsilon = 1e-5);
    }

    #[test]
    fn test_clamps_beyond_ends() {
        let line = unit_line();
        assert_eq!(find_closest_t(&line, Point2::new(-0.5, 0.2)), 0.0);
        assert_eq!(find_closest_t(&line, Point2::new(1.5, -0.3)), 1.0);
    }

    #[test]
    fn test_always_within_unit_interval() {
        let curve = sketch_curve();
        for i in 0..20 {
            for j in 0..20 {
                let q = Point2::new(-1.5 + 0.15 * i as f64, -1.5 + 0.15 * j as f64);
                let t = find_closest_t(&curve, q);
                assert!((0.0..=1.0).contains(&t), "t = {} for {:?}", t, q);
            }
        }
    }

    #[test]
    fn test_zero_iterations_returns_coarse_seed() {
        let solver = ClosestPointSolver::new().with_iterations(0);
        let t = solver.find_closest_t(&unit_line(), Point2::new(0.37, 1.0));
        assert_relative_eq!(t, 0.35, epsilon = 1e-12);
    }

    #[test]
    fn test_closest_point_returns_curve_point() {
        let curve = sketch_curve();
        let (t, p) = ClosestPointSolver::default().closest_point(&curve, Point2::new(0.0, 0.0));
        assert_eq!(p, curve.eval(t));
    }

    #[test]
    fn test_from_points() {
        let line = unit_line();
        let points = [line.p0, line.p1, line.p2, line.p3];
        let t = find_closest_t_from_points(&points, Point2::new(0.5, 1.0)).unwrap();
        assert_relative_eq!(t, 0.5, epsilon = 1e-6);

        assert!(find_closest_t_from_points(&points[..3], Point2::new(0.5, 1.0)).is_err());
    }

    #[test]
    fn test_closest_t_method_matches_free_fn() {
        let curve = sketch_curve();
        let q = Point2::new(0.1, 0.2);
        assert_eq!(curve.closest_t(q), find_closest_t(&curve, q));
    }

    #[test]
    fn test_f32() {
        let curve: CubicBezier2<f32> = CubicBezier2::new(
            Point2::new(0.0, 0.0),
            Point2::new(0.25, 0.5),
            Point2::new(0.75, 0.5),
            Point2::new(1.0, 0.0),
        );
        let t = find_closest_t(&curve, curve.eval(1.0));
        assert!((t - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_smaller_step_settles_on_steep_curve() {
        let curve = CubicBezier2::new(
            Point2::new(-0.6, 0.7),
            Point2::new(-0.2, -0.2),
            Point2::new(0.3, 0.8),
            Point2::new(0.8, 0.3),
        );
        let query = Point2::new(-0.55, 0.55);

        let (_, fixed) = ClosestPointSolver::new().closest_point(&curve, query);
        let (_, tuned) = ClosestPointSolver::new()
            .with_step_size(0.1)
            .with_iterations(50)
            .closest_point(&curve, query);

        // True distance is about 0.0238
        assert_relative_eq!(tuned.distance(query), 0.023785, epsilon = 1e-4);
        assert!(tuned.distance(query) < fixed.distance(query));
    }
}
