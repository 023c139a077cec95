//! Point and coordinate types shared by the scene and the grid.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// Grid coordinates (integer cell indices)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct GridCoord {
    /// X coordinate (column index)
    pub x: i32,
    /// Y coordinate (row index, grows with world Y)
    pub y: i32,
}

impl GridCoord {
    /// Create a new grid coordinate
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// World coordinates (meters, f64)
///
/// Serialized as a two element array `[x, y]`, which is how the editor
/// writes centers, vertices and origins.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct WorldPoint {
    /// X coordinate in meters
    pub x: f64,
    /// Y coordinate in meters (up)
    pub y: f64,
}

impl WorldPoint {
    /// Create a new world point
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Zero point (origin)
    pub const ZERO: WorldPoint = WorldPoint { x: 0.0, y: 0.0 };

    /// Euclidean distance to another point
    #[inline]
    pub fn distance(&self, other: &WorldPoint) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Rotate about the origin by `angle` radians (standard rotation matrix)
    #[inline]
    pub fn rotate(&self, angle: f64) -> WorldPoint {
        let (sin, cos) = angle.sin_cos();
        WorldPoint::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    /// Component-wise minimum
    #[inline]
    pub fn min(self, other: WorldPoint) -> WorldPoint {
        WorldPoint::new(self.x.min(other.x), self.y.min(other.y))
    }

    /// Component-wise maximum
    #[inline]
    pub fn max(self, other: WorldPoint) -> WorldPoint {
        WorldPoint::new(self.x.max(other.x), self.y.max(other.y))
    }

    /// Both components are finite
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<[f64; 2]> for WorldPoint {
    fn from([x, y]: [f64; 2]) -> Self {
        WorldPoint::new(x, y)
    }
}

impl From<WorldPoint> for [f64; 2] {
    fn from(p: WorldPoint) -> Self {
        [p.x, p.y]
    }
}

impl Add for WorldPoint {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        WorldPoint::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for WorldPoint {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        WorldPoint::new(self.x - other.x, self.y - other.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_distance() {
        let a = WorldPoint::new(0.0, 0.0);
        let b = WorldPoint::new(3.0, 4.0);
        assert_relative_eq!(a.distance(&b), 5.0);
    }

    #[test]
    fn test_rotate_quarter_turn() {
        let p = WorldPoint::new(1.0, 0.0).rotate(FRAC_PI_2);
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(p.y, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_array_serde() {
        let p: WorldPoint = serde_yaml::from_str("[1.5, -2.0]").unwrap();
        assert_eq!(p, WorldPoint::new(1.5, -2.0));

        let yaml = serde_yaml::to_string(&p).unwrap();
        let back: WorldPoint = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back, p);
    }
}
