//! Error types for sketchfield operations.

use thiserror::Error;

/// Errors returned when a call receives arguments it cannot work with.
///
/// Every variant is an *invalid argument*: the call fails immediately and
/// produces no partial result. "No intersection" and similar expected
/// outcomes are reported through `Option`, not through this type.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SketchError {
    /// Sampling radius is zero, negative, or not finite.
    #[error("invalid radius {radius}: must be positive and finite")]
    InvalidRadius {
        /// The rejected radius.
        radius: f64,
    },

    /// A region dimension is zero, negative, or not finite.
    #[error("invalid region {width} x {height}: both dimensions must be positive and finite")]
    InvalidRegion {
        /// The rejected width.
        width: f64,
        /// The rejected height.
        height: f64,
    },

    /// Control polygon does not describe a Bézier curve of a supported degree.
    #[error("control polygon has {len} points, expected {expected}")]
    InvalidControlPolygon {
        /// Number of points supplied.
        len: usize,
        /// Human-readable description of the accepted lengths.
        expected: &'static str,
    },

    /// Grid cell size is zero, negative, or not finite.
    #[error("invalid grid cell size {cell_size}")]
    InvalidCellSize {
        /// The rejected cell size.
        cell_size: f64,
    },
}

impl SketchError {
    /// Returns `true` for errors caused by an invalid caller-supplied argument.
    ///
    /// All current variants fall in this category.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            SketchError::InvalidRadius { .. }
                | SketchError::InvalidRegion { .. }
                | SketchError::InvalidControlPolygon { .. }
                | SketchError::InvalidCellSize { .. }
        )
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SketchError>;
