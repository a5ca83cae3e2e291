//! Uniform acceleration grid for minimum-distance queries.
//!
//! With a cell size of `radius / √2` a cell's diagonal equals `radius`, so two
//! points at least `radius` apart can never share a cell. Each cell therefore
//! stores at most one index into the caller's point array, and a candidate
//! only needs to be compared against the 5×5 block of cells around its own.

use super::Region;
use crate::error::{Result, SketchError};
use crate::primitives::Point2;
use num_traits::Float;

/// Cells scanned on each side of the candidate's cell.
const NEIGHBOURHOOD: usize = 2;

/// Dense grid of optional point indices covering a [`Region`].
#[derive(Debug, Clone)]
pub struct SpatialGrid<F> {
    region: Region<F>,
    cell_size: F,
    cols: usize,
    rows: usize,
    cells: Vec<Option<usize>>,
}

impl<F: Float> SpatialGrid<F> {
    /// Creates an empty grid with the given cell size.
    ///
    /// Fails with [`SketchError::InvalidCellSize`] when the size is not
    /// positive, or so small that the cell count overflows `usize`.
    pub fn new(cell_size: F, region: Region<F>) -> Result<Self> {
        if !(cell_size > F::zero() && cell_size.is_finite()) {
            return Err(SketchError::InvalidCellSize {
                cell_size: cell_size.to_f64().unwrap_or(f64::NAN),
            });
        }

        let too_fine = || SketchError::InvalidCellSize {
            cell_size: cell_size.to_f64().unwrap_or(f64::NAN),
        };
        let cols = (region.width() / cell_size)
            .ceil()
            .to_usize()
            .ok_or_else(too_fine)?
            .max(1);
        let rows = (region.height() / cell_size)
            .ceil()
            .to_usize()
            .ok_or_else(too_fine)?
            .max(1);
        let len = cols.checked_mul(rows).ok_or_else(too_fine)?;

        Ok(Self {
            region,
            cell_size,
            cols,
            rows,
            cells: vec![None; len],
        })
    }

    /// Creates an empty grid sized for samples separated by `radius`.
    pub fn for_radius(radius: F, region: Region<F>) -> Result<Self> {
        if !(radius > F::zero() && radius.is_finite()) {
            return Err(SketchError::InvalidRadius {
                radius: radius.to_f64().unwrap_or(f64::NAN),
            });
        }
        let sqrt2 = F::from(std::f64::consts::SQRT_2).unwrap();
        Self::new(radius / sqrt2, region)
    }

    #[inline]
    pub fn cell_size(&self) -> F {
        self.cell_size
    }

    /// Number of columns and rows.
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.cols, self.rows)
    }

    /// Returns the `(column, row)` of the cell containing `p`.
    ///
    /// Points outside the region are clamped onto the border cells.
    pub fn cell_index_of(&self, p: Point2<F>) -> (usize, usize) {
        let gx = (p.x / self.cell_size).floor().to_usize().unwrap_or(0);
        let gy = (p.y / self.cell_size).floor().to_usize().unwrap_or(0);
        (gx.min(self.cols - 1), gy.min(self.rows - 1))
    }

    /// Returns the point index stored in a cell, if any.
    #[inline]
    pub fn get(&self, gx: usize, gy: usize) -> Option<usize> {
        if gx < self.cols && gy < self.rows {
            self.cells[gy * self.cols + gx]
        } else {
            None
        }
    }

    /// Records that `points[index] == p`.
    pub fn insert(&mut self, p: Point2<F>, index: usize) {
        let (gx, gy) = self.cell_index_of(p);
        self.cells[gy * self.cols + gx] = Some(index);
    }

    /// Checks whether `candidate` may join the sample.
    ///
    /// The candidate must lie inside the region and no point referenced from
    /// the surrounding 5×5 cells may be strictly closer than `accept_radius`.
    /// `points` is the array the stored indices refer to.
    pub fn is_valid(&self, candidate: Point2<F>, points: &[Point2<F>], accept_radius: F) -> bool {
        if !self.region.contains(candidate) {
            return false;
        }

        let (gx, gy) = self.cell_index_of(candidate);
        let min_gx = gx.saturating_sub(NEIGHBOURHOOD);
        let max_gx = (gx + NEIGHBOURHOOD + 1).min(self.cols);
        let min_gy = gy.saturating_sub(NEIGHBOURHOOD);
        let max_gy = (gy + NEIGHBOURHOOD + 1).min(self.rows);

        let min_dist_sq = accept_radius * accept_radius;

        for cy in min_gy..max_gy {
            let row = &self.cells[cy * self.cols..(cy + 1) * self.cols];
            for idx in row[min_gx..max_gx].iter().flatten() {
                if candidate.distance_squared(points[*idx]) < min_dist_sq {
                    return false;
                }
            }
        }

        true
    }
}
