//! Repulsion from a Bézier curve.
//!
//! Each particle is projected onto the curve; inside the influence radius it
//! is pushed straight away from its closest curve point with a strength that
//! falls off linearly to zero at the radius.

use crate::curves::{ClosestPointSolver, CubicBezier2};
use crate::primitives::{Point2, Vec2};
use num_traits::Float;

/// Parameters of the curve repulsion field.
///
/// # Example
///
/// ```
/// use sketchfield::curves::CubicBezier2;
/// use sketchfield::field::CurveForceField;
/// use sketchfield::{Point2, Vec2};
///
/// let curve: CubicBezier2<f64> = CubicBezier2::new(
///     Point2::new(-0.6, 0.7),
///     Point2::new(-0.2, -0.2),
///     Point2::new(0.3, 0.8),
///     Point2::new(0.8, 0.3),
/// );
/// let field = CurveForceField::default();
///
/// // Far from the curve nothing happens
/// assert_eq!(field.force_at(&curve, Point2::new(0.0, -0.9)), Vec2::zero());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurveForceField {
    /// Distance from the curve beyond which the force vanishes.
    pub influence_radius: f64,
    /// Force magnitude right at the curve.
    pub strength: f64,
    /// Below this distance the push direction is undefined and no force applies.
    pub min_distance: f64,
    /// Projection settings used to find the closest curve point.
    pub solver: ClosestPointSolver,
}

impl CurveForceField {
    pub const DEFAULT_INFLUENCE_RADIUS: f64 = 0.1;
    pub const DEFAULT_STRENGTH: f64 = 25.0;
    pub const DEFAULT_MIN_DISTANCE: f64 = 1e-4;

    /// Creates a field with the default parameters.
    pub fn new() -> Self {
        Self {
            influence_radius: Self::DEFAULT_INFLUENCE_RADIUS,
            strength: Self::DEFAULT_STRENGTH,
            min_distance: Self::DEFAULT_MIN_DISTANCE,
            solver: ClosestPointSolver::new(),
        }
    }

    pub fn with_influence_radius(mut self, influence_radius: f64) -> Self {
        self.influence_radius = influence_radius;
        self
    }

    pub fn with_strength(mut self, strength: f64) -> Self {
        self.strength = strength;
        self
    }

    pub fn with_min_distance(mut self, min_distance: f64) -> Self {
        self.min_distance = min_distance;
        self
    }

    pub fn with_solver(mut self, solver: ClosestPointSolver) -> Self {
        self.solver = solver;
        self
    }

    /// Returns the force the curve exerts on a particle at `position`.
    ///
    /// The zero vector is returned outside the influence radius and when the
    /// particle sits on the curve (closer than `min_distance`).
    pub fn force_at<F: Float>(&self, curve: &CubicBezier2<F>, position: Point2<F>) -> Vec2<F> {
        let (_, closest) = self.solver.closest_point(curve, position);
        let diff = position - closest;
        let d = diff.magnitude();

        let radius = F::from(self.influence_radius).unwrap_or_else(F::zero);
        let min_distance = F::from(self.min_distance).unwrap_or_else(F::zero);
        if d >= radius || d <= min_distance {
            return Vec2::zero();
        }

        let strength = F::from(self.strength).unwrap_or_else(F::zero);
        diff / d * (strength * (F::one() - d / radius))
    }
}

impl Default for CurveForceField {
    fn default() -> Self {
        Self::new()
    }
}
