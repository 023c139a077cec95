//! Scene documents: map metadata plus the object list.
//!
//! The editor saves scenes as JSON; hand-written scenes are usually YAML.
//! Both are read with `serde_yaml`, which accepts JSON documents as well.
//!
//! ```yaml
//! map_info:
//!   name: office
//!   resolution: 0.05
//!   width: 10
//!   height: 8
//!   origin: [0.0, 0.0]
//! objects:
//!   - id: desk
//!     type: obstacle
//!     shape: { type: rectangle, center: [2, 2], width: 1.6, height: 0.8 }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::map_info::MapInfo;
use super::object::MapObject;
use crate::error::ConfigLoadError;

/// Everything the rasterizer consumes in one call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneDocument {
    /// Map extent and resolution
    #[serde(alias = "mapInfo")]
    pub map_info: MapInfo,

    /// Drawn objects in editor order
    #[serde(default)]
    pub objects: Vec<MapObject>,
}

impl SceneDocument {
    /// Load a scene from a YAML or JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Parse from a YAML (or JSON) string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String, ConfigLoadError> {
        serde_yaml::to_string(self).map_err(|e| ConfigLoadError::Parse(e.to_string()))
    }
}
