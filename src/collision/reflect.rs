//! Reflection of particle velocities off walls and round obstacles.
//!
//! A particle moving from `from` to `to` during one simulation step collides
//! with an obstacle when that motion segment intersects it. The helpers here
//! find the contact, orient the surface normal towards the side the particle
//! came from, and mirror its velocity.

use super::intersect::{segment_circle_intersect, segment_intersect};
use crate::primitives::{Circle2, Point2, Segment2, Vec2};
use num_traits::Float;

/// Outcome of a collision during one motion step.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounce<F> {
    /// Where the motion segment meets the obstacle.
    pub point: Point2<F>,
    /// Unit surface normal at `point`, facing the side the particle came from.
    pub normal: Vec2<F>,
    /// Reflected velocity, scaled by the restitution factor.
    pub velocity: Vec2<F>,
}

/// Mirrors `velocity` about a surface with the given normal.
///
/// `normal` need not be unit length. A zero normal leaves the velocity
/// unchanged.
///
/// # Example
///
/// ```
/// use sketchfield::collision::reflect;
/// use sketchfield::Vec2;
///
/// let v = reflect(Vec2::new(1.0, -1.0), Vec2::new(0.0, 2.0));
/// assert_eq!(v, Vec2::new(1.0, 1.0));
/// ```
pub fn reflect<F: Float>(velocity: Vec2<F>, normal: Vec2<F>) -> Vec2<F> {
    match normal.normalize() {
        Some(n) => velocity.reflect(n),
        None => velocity,
    }
}

/// Bounces a particle moving `from → to` off a straight wall.
///
/// Returns `None` when the step does not cross the wall, when the motion is
/// parallel to it, or when the wall has zero length.
pub fn bounce_segment<F: Float>(
    from: Point2<F>,
    to: Point2<F>,
    velocity: Vec2<F>,
    wall: Segment2<F>,
    restitution: F,
) -> Option<Bounce<F>> {
    let point = segment_intersect(from, to, wall.start, wall.end)?;
    let mut normal = wall.unit_normal()?;
    if normal.dot(from - point) < F::zero() {
        normal = -normal;
    }

    Some(Bounce {
        point,
        normal,
        velocity: velocity.reflect(normal) * restitution,
    })
}

/// Bounces a particle moving `from → to` off the boundary of a disk.
///
/// A particle arriving from outside gets the outward normal; one leaving
/// from inside gets the inward normal, so it stays contained.
pub fn bounce_circle<F: Float>(
    from: Point2<F>,
    to: Point2<F>,
    velocity: Vec2<F>,
    obstacle: Circle2<F>,
    restitution: F,
) -> Option<Bounce<F>> {
    let point = segment_circle_intersect(from, to, obstacle.center, obstacle.radius)?;
    let mut normal = obstacle.outward_normal(point)?;
    if normal.dot(from - point) < F::zero() {
        normal = -normal;
    }

    Some(Bounce {
        point,
        normal,
        velocity: velocity.reflect(normal) * restitution,
    })
}
