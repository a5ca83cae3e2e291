//! Curve-following force fields for particle simulations.

mod force;

pub use force::CurveForceField;
