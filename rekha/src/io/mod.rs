//! Output encoders and the export pipeline.
//!
//! - [`pgm`]: binary PGM image, top row first
//! - [`ros_yaml`]: map_server metadata document
//! - [`npy`]: NumPy array in raw and planner flavors
//! - [`export`]: runs all of the above and delivers to an [`ArtifactSink`]

pub mod export;
pub mod npy;
pub mod pgm;
pub mod ros_yaml;

pub use export::{Artifact, ArtifactSink, DirectorySink, MapExport, MemorySink};
pub use npy::{encode_npy, encode_planner_npy, encode_raw_npy};
pub use pgm::{decode_pgm, encode_pgm, write_pgm};
pub use ros_yaml::{RosMapMetadata, encode_ros_yaml, parse_ros_yaml};
