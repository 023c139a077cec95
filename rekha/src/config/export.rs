//! Export settings.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::error::ConfigLoadError;

/// Where and what to export.
///
/// ```yaml
/// output_dir: ./output
/// write_raw_array: false
/// planner_suffix: _planner
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory receiving the artifacts
    #[serde(default = "defaults::output_dir")]
    pub output_dir: String,

    /// Also write `{name}_raw.npy` with unmodified cell values
    #[serde(default)]
    pub write_raw_array: bool,

    /// Suffix between the map name and `.npy` for the planner array
    #[serde(default = "defaults::planner_suffix")]
    pub planner_suffix: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: defaults::output_dir(),
            write_raw_array: false,
            planner_suffix: defaults::planner_suffix(),
        }
    }
}

impl ExportConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Load from default config path (configs/export.yaml)
    pub fn load_default() -> Result<Self, ConfigLoadError> {
        let path = Path::new("configs/export.yaml");
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String, ConfigLoadError> {
        serde_yaml::to_string(self).map_err(|e| ConfigLoadError::Parse(e.to_string()))
    }

    /// Filename of the planner array for map `name`
    pub fn planner_file_name(&self, name: &str) -> String {
        format!("{}{}.npy", name, self.planner_suffix)
    }
}
