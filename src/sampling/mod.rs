//! Blue-noise point generation.

mod grid;
mod poisson;
mod region;

pub use grid::SpatialGrid;
pub use poisson::{generate_points, generate_points_seeded, PoissonDiscSampler};
pub use region::Region;
