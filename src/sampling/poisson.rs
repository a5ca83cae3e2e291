//! Poisson disc sampling.
//!
//! Generates blue noise point distributions where no two points are closer
//! than a specified minimum distance, using Bridson's dart-throwing algorithm
//! accelerated by a [`SpatialGrid`].
//!
//! The sampler performs no seeding of its own. Randomness comes from the
//! [`rand::Rng`] handed to [`PoissonDiscSampler::generate`], so a seeded
//! generator gives reproducible output.

use super::{Region, SpatialGrid};
use crate::error::{Result, SketchError};
use crate::primitives::{Point2, Vec2};
use num_traits::Float;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

/// Generates a Poisson disc sample of `region_size` with minimum separation
/// `radius`, drawing randomness from `rng`.
///
/// `rejection_limit` is the number of candidates tried around an active point
/// before it is retired (30 is the customary value).
///
/// # Errors
///
/// Fails with [`SketchError::InvalidRadius`] or [`SketchError::InvalidRegion`]
/// when `radius` or a region dimension is not positive, and with
/// [`SketchError::InvalidCellSize`] when the radius is too small for the
/// acceleration grid to be allocated.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand_pcg::Pcg64;
/// use sketchfield::sampling::generate_points;
///
/// let mut rng = Pcg64::seed_from_u64(7);
/// let points = generate_points(0.1, (1.0, 1.0), 30, &mut rng).unwrap();
///
/// for i in 0..points.len() {
///     for j in (i + 1)..points.len() {
///         assert!(points[i].distance(points[j]) >= 0.1 - 1e-9);
///     }
/// }
/// ```
pub fn generate_points<F, R>(
    radius: F,
    region_size: (F, F),
    rejection_limit: usize,
    rng: &mut R,
) -> Result<Vec<Point2<F>>>
where
    F: Float,
    R: Rng + ?Sized,
{
    PoissonDiscSampler::new(radius, Region::try_from(region_size)?)?
        .with_rejection_limit(rejection_limit)
        .generate(rng)
}

/// Like [`generate_points`], seeding a PCG generator with `seed`.
///
/// The same arguments always produce the same points.
pub fn generate_points_seeded<F: Float>(
    radius: F,
    region_size: (F, F),
    rejection_limit: usize,
    seed: u64,
) -> Result<Vec<Point2<F>>> {
    let mut rng = Pcg64::seed_from_u64(seed);
    generate_points(radius, region_size, rejection_limit, &mut rng)
}

/// A validated Poisson disc sampling configuration.
///
/// Holds no working state: every call to [`generate`](Self::generate) builds
/// and discards its own grid and active list.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "SamplerFields<F>",
        bound(deserialize = "F: Float + serde::Deserialize<'de>")
    )
)]
pub struct PoissonDiscSampler<F> {
    radius: F,
    region: Region<F>,
    rejection_limit: usize,
}

impl<F: Float> PoissonDiscSampler<F> {
    /// Candidates tried per active point unless configured otherwise.
    pub const DEFAULT_REJECTION_LIMIT: usize = 30;

    /// Creates a sampler for `region` with minimum separation `radius`.
    pub fn new(radius: F, region: Region<F>) -> Result<Self> {
        if !(radius > F::zero() && radius.is_finite()) {
            return Err(SketchError::InvalidRadius {
                radius: radius.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(Self {
            radius,
            region,
            rejection_limit: Self::DEFAULT_REJECTION_LIMIT,
        })
    }

    /// Sets the number of candidates tried around an active point.
    pub fn with_rejection_limit(mut self, rejection_limit: usize) -> Self {
        self.rejection_limit = rejection_limit;
        self
    }

    #[inline]
    pub fn radius(&self) -> F {
        self.radius
    }

    #[inline]
    pub fn region(&self) -> Region<F> {
        self.region
    }

    #[inline]
    pub fn rejection_limit(&self) -> usize {
        self.rejection_limit
    }

    /// Runs Bridson's algorithm and returns the accepted points in the order
    /// they were generated.
    ///
    /// The region center is always the first point.
    ///
    /// # Errors
    ///
    /// Fails with [`SketchError::InvalidCellSize`] when the radius is so small
    /// relative to the region that the grid cannot be allocated.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<Point2<F>>> {
        let mut grid = SpatialGrid::for_radius(self.radius, self.region)?;

        let first = self.region.center();
        let mut points = vec![first];
        let mut active = vec![0usize];
        grid.insert(first, 0);

        while !active.is_empty() {
            let active_idx = rng.gen_range(0..active.len());
            let center = points[active[active_idx]];

            let accepted = (0..self.rejection_limit).find_map(|_| {
                let candidate = self.candidate_around(center, rng);
                grid.is_valid(candidate, &points, self.radius)
                    .then_some(candidate)
            });

            match accepted {
                Some(candidate) => {
                    let idx = points.len();
                    points.push(candidate);
                    active.push(idx);
                    grid.insert(candidate, idx);
                }
                None => {
                    log::trace!("retiring spawn point {}", active[active_idx]);
                    active.swap_remove(active_idx);
                }
            }
        }

        let (cols, rows) = grid.dimensions();
        log::debug!(
            "poisson disc sampling accepted {} points on a {}x{} grid (rejection limit {})",
            points.len(),
            cols,
            rows,
            self.rejection_limit
        );

        Ok(points)
    }

    /// Draws a point in the annulus `[radius, 2·radius)` around `center`.
    fn candidate_around<R: Rng + ?Sized>(&self, center: Point2<F>, rng: &mut R) -> Point2<F> {
        let angle: F = F::from(rng.gen_range(0.0..std::f64::consts::TAU)).unwrap_or_else(F::zero);
        let scale: F = F::from(rng.gen::<f64>()).unwrap_or_else(F::zero);
        let distance = self.radius * (F::one() + scale);

        center + Vec2::new(angle.cos(), angle.sin()) * distance
    }
}

/// Unchecked wire form of [`PoissonDiscSampler`]; deserialization goes
/// through [`PoissonDiscSampler::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(bound(deserialize = "F: Float + serde::Deserialize<'de>"))]
struct SamplerFields<F> {
    radius: F,
    region: Region<F>,
    #[serde(default = "default_rejection_limit")]
    rejection_limit: usize,
}

#[cfg(feature = "serde")]
fn default_rejection_limit() -> usize {
    PoissonDiscSampler::<f64>::DEFAULT_REJECTION_LIMIT
}

#[cfg(feature = "serde")]
impl<F: Float> TryFrom<SamplerFields<F>> for PoissonDiscSampler<F> {
    type Error = SketchError;

    fn try_from(fields: SamplerFields<F>) -> Result<Self> {
        Ok(Self::new(fields.radius, fields.region)?.with_rejection_limit(fields.rejection_limit))
    }
}
