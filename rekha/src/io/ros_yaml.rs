//! ROS map_server metadata (`<name>.yaml`).
//!
//! The document is written from a fixed template so the threshold literals
//! come out exactly as map_server consumers expect:
//!
//! ```yaml
//! image: office.pgm
//! resolution: 0.05
//! origin: [-5, -5, 0.0]
//! negate: 0
//! occupied_thresh: 0.65
//! free_thresh: 0.196
//! ```

use serde::{Deserialize, Serialize};

use crate::error::DecodeError;
use crate::scene::MapInfo;

/// Occupancy threshold written to every metadata file
pub const OCCUPIED_THRESH: f64 = 0.65;

/// Free threshold written to every metadata file
pub const FREE_THRESH: f64 = 0.196;

/// Parsed form of a map_server metadata document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosMapMetadata {
    /// PGM image filename (relative to the YAML file)
    pub image: String,

    /// Map resolution in meters per pixel
    pub resolution: f64,

    /// Origin of map [x, y, yaw] - world coordinates of bottom-left pixel
    pub origin: [f64; 3],

    /// 1 if white means occupied
    #[serde(default)]
    pub negate: u8,

    /// Pixels darker than this probability are occupied
    #[serde(default = "default_occupied_thresh")]
    pub occupied_thresh: f64,

    /// Pixels lighter than this probability are free
    #[serde(default = "default_free_thresh")]
    pub free_thresh: f64,
}

fn default_occupied_thresh() -> f64 {
    OCCUPIED_THRESH
}

fn default_free_thresh() -> f64 {
    FREE_THRESH
}

/// Render the metadata document for `info`.
pub fn encode_ros_yaml(info: &MapInfo) -> String {
    format!(
        "image: {}.pgm\n\
         resolution: {}\n\
         origin: [{}, {}, 0.0]\n\
         negate: 0\n\
         occupied_thresh: 0.65\n\
         free_thresh: 0.196\n",
        info.name, info.resolution, info.origin.x, info.origin.y
    )
}

/// Parse a metadata document
pub fn parse_ros_yaml(yaml: &str) -> Result<RosMapMetadata, DecodeError> {
    Ok(serde_yaml::from_str(yaml)?)
}
