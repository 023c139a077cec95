//! Core types for the rekha rasterizer.
//!
//! - [`WorldPoint`] and [`GridCoord`]: coordinate types
//! - [`Bounds`]: axis-aligned search windows
//! - [`CellState`] and the raw cell values written into the grid

mod bounds;
pub mod cell;
mod point;

pub use bounds::Bounds;
pub use cell::CellState;
pub use point::{GridCoord, WorldPoint};
