//! Intersection tests and reflection physics for particle collisions.
//!
//! "No intersection" is an ordinary outcome and is always reported as `None`.

mod intersect;
mod reflect;

pub use intersect::{segment_circle_intersect, segment_intersect, PARALLEL_EPSILON};
pub use reflect::{bounce_circle, bounce_segment, reflect, Bounce};
