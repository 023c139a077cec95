//! Map metadata supplied by the editor.

use std::path::{Component, Path};

use serde::{Deserialize, Serialize};

use crate::core::WorldPoint;
use crate::error::ValidationError;

/// Largest grid [`MapInfo::validate`] accepts (1 GiB per exported image)
pub const MAX_GRID_CELLS: usize = 1 << 30;

/// Physical extent and discretization of a map.
///
/// `origin` is the world coordinate of the outer corner of cell (0, 0).
/// The grid uses a bottom-left origin: row index grows with world Y.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapInfo {
    /// Map name, used for output filenames
    pub name: String,

    /// Meters per cell edge
    pub resolution: f64,

    /// Map width in meters
    pub width: f64,

    /// Map height in meters
    pub height: f64,

    /// World coordinates of cell (0, 0) corner
    #[serde(default)]
    pub origin: WorldPoint,
}

impl MapInfo {
    /// Create map metadata with the origin at (0, 0)
    pub fn new(name: impl Into<String>, width: f64, height: f64, resolution: f64) -> Self {
        Self {
            name: name.into(),
            resolution,
            width,
            height,
            origin: WorldPoint::ZERO,
        }
    }

    /// Builder-style origin override
    pub fn with_origin(mut self, origin: WorldPoint) -> Self {
        self.origin = origin;
        self
    }

    /// Grid width in cells: `ceil(width / resolution)`
    #[inline]
    pub fn grid_width(&self) -> usize {
        (self.width / self.resolution).ceil() as usize
    }

    /// Grid height in cells: `ceil(height / resolution)`
    #[inline]
    pub fn grid_height(&self) -> usize {
        (self.height / self.resolution).ceil() as usize
    }

    /// Check the invariants the rasterizer relies on.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if !is_plain_file_name(&self.name) {
            return Err(ValidationError::InvalidName(self.name.clone()));
        }
        if !(self.resolution.is_finite() && self.resolution > 0.0) {
            return Err(ValidationError::InvalidResolution(self.resolution));
        }
        for (axis, value) in [("width", self.width), ("height", self.height)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ValidationError::InvalidExtent { axis, value });
            }
        }
        if !self.origin.is_finite() {
            return Err(ValidationError::InvalidOrigin(self.origin.x, self.origin.y));
        }

        let width = (self.width / self.resolution).ceil();
        let height = (self.height / self.resolution).ceil();
        let too_large = || ValidationError::GridTooLarge { width, height };
        if !(width.is_finite() && height.is_finite()) || width.max(height) > MAX_GRID_CELLS as f64 {
            return Err(too_large());
        }
        match self.grid_width().checked_mul(self.grid_height()) {
            Some(cells) if cells <= MAX_GRID_CELLS => Ok(()),
            _ => Err(too_large()),
        }
    }
}

/// A single normal path component without separators.
pub(crate) fn is_plain_file_name(name: &str) -> bool {
    if name.contains(['/', '\\']) {
        return false;
    }
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}
