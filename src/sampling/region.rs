//! Rectangular sampling domain.

use crate::error::{Result, SketchError};
use crate::primitives::Point2;
use num_traits::Float;

/// The half-open rectangle `[0, width) × [0, height)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "RegionFields<F>",
        bound(deserialize = "F: Float + serde::Deserialize<'de>")
    )
)]
pub struct Region<F> {
    width: F,
    height: F,
}

impl<F: Float> Region<F> {
    /// Creates a region, rejecting non-positive or non-finite dimensions.
    pub fn new(width: F, height: F) -> Result<Self> {
        let valid = |v: F| v > F::zero() && v.is_finite();
        if !valid(width) || !valid(height) {
            return Err(SketchError::InvalidRegion {
                width: width.to_f64().unwrap_or(f64::NAN),
                height: height.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(Self { width, height })
    }

    #[inline]
    pub fn width(&self) -> F {
        self.width
    }

    #[inline]
    pub fn height(&self) -> F {
        self.height
    }

    /// Returns the center of the region.
    #[inline]
    pub fn center(&self) -> Point2<F> {
        let two = F::one() + F::one();
        Point2::new(self.width / two, self.height / two)
    }

    #[inline]
    pub fn area(&self) -> F {
        self.width * self.height
    }

    /// Tests membership in the half-open bounds.
    #[inline]
    pub fn contains(&self, p: Point2<F>) -> bool {
        p.x >= F::zero() && p.x < self.width && p.y >= F::zero() && p.y < self.height
    }
}

impl<F: Float> TryFrom<(F, F)> for Region<F> {
    type Error = SketchError;

    fn try_from((width, height): (F, F)) -> Result<Self> {
        Self::new(width, height)
    }
}

/// Unchecked wire form of [`Region`]; deserialization goes through
/// [`Region::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RegionFields<F> {
    width: F,
    height: F,
}

#[cfg(feature = "serde")]
impl<F: Float> TryFrom<RegionFields<F>> for Region<F> {
    type Error = SketchError;

    fn try_from(fields: RegionFields<F>) -> Result<Self> {
        Self::new(fields.width, fields.height)
    }
}
