//! Axis-aligned bounding box in world coordinates.
//!
//! [`Bounds`] limits the cells the rasterizer visits for a shape. It is a
//! search window only: a cell inside the box is still tested against the
//! exact shape before it is marked.
//!
//! ```rust
//! use rekha::core::{Bounds, WorldPoint};
//!
//! let mut bounds = Bounds::empty();
//! bounds.expand_to_include(WorldPoint::new(1.0, 1.0));
//! bounds.expand_to_include(WorldPoint::new(-2.0, 3.0));
//! assert_eq!(bounds.min, WorldPoint::new(-2.0, 1.0));
//! assert_eq!(bounds.max, WorldPoint::new(1.0, 3.0));
//! ```

use super::point::WorldPoint;

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    /// Minimum corner (smallest x and y values).
    pub min: WorldPoint,
    /// Maximum corner (largest x and y values).
    pub max: WorldPoint,
}

impl Bounds {
    /// Create a new bounding box from min and max corners.
    #[inline]
    pub const fn new(min: WorldPoint, max: WorldPoint) -> Self {
        Self { min, max }
    }

    /// Create an empty (invalid) bounding box.
    ///
    /// The empty bounds has min > max, so it will expand to fit any point.
    #[inline]
    pub fn empty() -> Self {
        Self {
            min: WorldPoint::new(f64::INFINITY, f64::INFINITY),
            max: WorldPoint::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    /// Build the smallest box containing every point.
    ///
    /// Returns empty bounds for an empty iterator.
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = WorldPoint>,
    {
        let mut bounds = Self::empty();
        for point in points {
            bounds.expand_to_include(point);
        }
        bounds
    }

    /// Check if the bounds are empty (invalid).
    ///
    /// NaN corners also count as empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        !(self.min.x <= self.max.x && self.min.y <= self.max.y)
    }

    /// Width of the bounding box (x extent).
    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Height of the bounding box (y extent).
    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Check if a point is inside the bounding box (inclusive).
    #[inline]
    pub fn contains(&self, point: WorldPoint) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Expand bounds to include a point.
    #[inline]
    pub fn expand_to_include(&mut self, point: WorldPoint) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let bounds = Bounds::empty();
        assert!(bounds.is_empty());
        assert!(!bounds.contains(WorldPoint::ZERO));
        assert!(Bounds::from_points(std::iter::empty()).is_empty());
    }

    #[test]
    fn test_from_points() {
        let bounds = Bounds::from_points([
            WorldPoint::new(1.0, -1.0),
            WorldPoint::new(-3.0, 2.0),
            WorldPoint::new(0.5, 0.5),
        ]);

        assert!(!bounds.is_empty());
        assert_eq!(bounds.min, WorldPoint::new(-3.0, -1.0));
        assert_eq!(bounds.max, WorldPoint::new(1.0, 2.0));
        assert_eq!(bounds.width(), 4.0);
        assert_eq!(bounds.height(), 3.0);
    }

    #[test]
    fn test_contains_inclusive() {
        let bounds = Bounds::new(WorldPoint::new(0.0, 0.0), WorldPoint::new(2.0, 1.0));
        assert!(bounds.contains(WorldPoint::new(2.0, 1.0)));
        assert!(bounds.contains(WorldPoint::new(0.0, 0.0)));
        assert!(!bounds.contains(WorldPoint::new(2.01, 0.5)));
    }

    #[test]
    fn test_nan_is_empty() {
        let bounds = Bounds::new(WorldPoint::new(f64::NAN, 0.0), WorldPoint::new(1.0, 1.0));
        assert!(bounds.is_empty());
    }
}
