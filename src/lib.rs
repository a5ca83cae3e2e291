//! sketchfield - Geometry helpers for generative sketches
//!
//! Blue-noise point placement, low-degree Bézier curves with a closest-point
//! solver, segment and circle intersection tests, and the bounce and repulsion
//! helpers particle systems build on top of them.
//!
//! ```
//! use sketchfield::curves::{find_closest_t, CubicBezier2};
//! use sketchfield::sampling::generate_points_seeded;
//! use sketchfield::Point2;
//!
//! let curve = CubicBezier2::new(
//!     Point2::new(0.1, 0.8),
//!     Point2::new(0.3, 0.1),
//!     Point2::new(0.7, 0.9),
//!     Point2::new(0.9, 0.2),
//! );
//!
//! let points = generate_points_seeded(0.1, (1.0, 1.0), 30, 42).unwrap();
//! for p in points {
//!     let t = find_closest_t(&curve, p);
//!     assert!((0.0..=1.0).contains(&t));
//! }
//! ```

pub mod collision;
pub mod curves;
pub mod error;
pub mod field;
pub mod primitives;
pub mod sampling;

pub use error::{Result, SketchError};
pub use primitives::{Circle2, Point2, Segment2, Vec2};
