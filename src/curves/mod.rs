//! Bézier evaluation, parametric sampling and closest-point projection.

mod bezier;
mod closest;
mod parametric;

pub use bezier::{evaluate, tangent, Bezier2, CubicBezier2, QuadraticBezier2};
pub use closest::{find_closest_t, find_closest_t_from_points, ClosestPointSolver};
pub use parametric::{FnCurve, Parametric};
