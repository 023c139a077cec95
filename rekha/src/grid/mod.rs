//! Occupancy grid produced from a vector scene.
//!
//! - [`OccupancyGrid`]: owned cell buffer with coordinate conversion
//! - [`rasterize`]: scene to grid conversion
//! - [`CellCounts`] and [`RasterStats`]: summaries for logging and tests

mod rasterizer;
mod storage;

pub use rasterizer::{RasterStats, rasterize, rasterize_shape, rasterize_with_stats};
pub use storage::{CellCounts, OccupancyGrid};
