//! # Rekha: Vector Scene to Occupancy Grid Exporter
//!
//! Turns a drawn 2D scene (circles, rectangles, polygons, triangles) into
//! the three files a ROS-style navigation stack loads:
//!
//! - `{name}.pgm`: 8-bit grayscale occupancy image
//! - `{name}.yaml`: map_server metadata (resolution, origin, thresholds)
//! - `{name}_planner.npy`: 0/1 obstacle array for path planners
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rekha::{ExportConfig, MapExport, MapInfo, MapObject, ObjectType, Shape};
//! use rekha::core::WorldPoint;
//! use rekha::io::DirectorySink;
//!
//! let info = MapInfo::new("office", 10.0, 8.0, 0.05);
//! let objects = vec![MapObject::new(
//!     "desk",
//!     ObjectType::Obstacle,
//!     Shape::rectangle(WorldPoint::new(2.0, 2.0), 1.6, 0.8, 0.0),
//! )];
//!
//! let export = MapExport::build(&info, &objects, &ExportConfig::default())?;
//! let mut sink = DirectorySink::create("./output")?;
//! export.deliver(&mut sink)?;
//! # Ok::<(), rekha::ExportError>(())
//! ```
//!
//! ## Coordinate Frame
//!
//! - World: meters, Y-up, `origin` is the bottom-left corner of the map
//! - Grid: cell `(0, 0)` is bottom-left, index `y * width + x`
//! - PGM: row 0 is the top of the image, so rows are written in reverse
//! - NPY: same orientation as the grid (no flip)
//!
//! ## Cell Values
//!
//! | Value | Meaning  |
//! |-------|----------|
//! | 0     | occupied |
//! | 205   | unknown  |
//! | 254   | free     |
//!
//! ## Data Flow
//!
//! ```text
//!          ┌──────────────────────┐
//!          │    SceneDocument     │
//!          │ (MapInfo + objects)  │
//!          └──────────┬───────────┘
//!                     │ rasterize()
//!                     ▼
//!          ┌──────────────────────┐
//!          │    OccupancyGrid     │
//!          │  (row-major u8 cells)│
//!          └──────────┬───────────┘
//!                     │
//!        ┌────────────┼────────────┐
//!        ▼            ▼            ▼
//!   encode_pgm  encode_ros_yaml  encode_planner_npy
//!        └────────────┼────────────┘
//!                     ▼
//!              ArtifactSink
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod grid;
pub mod io;
pub mod scene;

pub use config::ExportConfig;
pub use error::{ConfigLoadError, DecodeError, EncodeError, ExportError, ValidationError};
pub use grid::{OccupancyGrid, RasterStats, rasterize, rasterize_with_stats};
pub use io::{ArtifactSink, MapExport};
pub use scene::{MapInfo, MapObject, ObjectType, SceneDocument, Shape};
