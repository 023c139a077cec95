//! Drawn shapes and their geometry.
//!
//! Two queries drive rasterization:
//!
//! - [`Shape::contains`]: exact point-in-shape test
//! - [`Shape::bounds`]: axis-aligned search window
//!
//! ## Rectangle rotation
//!
//! The editor stores rotation in screen convention (Y down, clockwise
//! positive). Both queries therefore rotate by `-rotation` with the standard
//! rotation matrix; the predicate and the bounds must use the same sign.

use serde::{Deserialize, Serialize};

use crate::core::{Bounds, WorldPoint};

/// Geometry of a map object.
///
/// Decoded from the editor's `{"type": "...", ...}` objects. A tag this
/// crate does not know becomes [`Shape::Unsupported`], which contains no
/// points.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Shape {
    /// Disc around `center`
    Circle {
        /// Center in world coordinates
        center: WorldPoint,
        /// Radius in meters
        radius: f64,
    },

    /// Rectangle rotated about its center
    Rectangle {
        /// Center in world coordinates
        center: WorldPoint,
        /// Extent along the local X axis (meters)
        width: f64,
        /// Extent along the local Y axis (meters)
        height: f64,
        /// Rotation in radians, screen convention
        #[serde(default)]
        rotation: f64,
    },

    /// Simple polygon, even-odd filled
    Polygon {
        /// Informational center (usually the centroid)
        #[serde(default)]
        center: WorldPoint,
        /// Ordered vertices in world coordinates
        vertices: Vec<WorldPoint>,
    },

    /// Three vertex polygon
    Triangle {
        /// Informational center (usually the centroid)
        #[serde(default)]
        center: WorldPoint,
        /// Ordered vertices in world coordinates
        vertices: Vec<WorldPoint>,
    },

    /// Shape tag not understood by this crate
    #[serde(other)]
    Unsupported,
}

impl Shape {
    /// Create a circle
    pub fn circle(center: WorldPoint, radius: f64) -> Self {
        Shape::Circle { center, radius }
    }

    /// Create a rectangle
    pub fn rectangle(center: WorldPoint, width: f64, height: f64, rotation: f64) -> Self {
        Shape::Rectangle {
            center,
            width,
            height,
            rotation,
        }
    }

    /// Create a polygon, using the vertex average as its center
    pub fn polygon(vertices: Vec<WorldPoint>) -> Self {
        Shape::Polygon {
            center: centroid(&vertices),
            vertices,
        }
    }

    /// Create a triangle, using the vertex average as its center
    pub fn triangle(a: WorldPoint, b: WorldPoint, c: WorldPoint) -> Self {
        let vertices = vec![a, b, c];
        Shape::Triangle {
            center: centroid(&vertices),
            vertices,
        }
    }

    /// Lowercase tag, as written in scene files
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Circle { .. } => "circle",
            Shape::Rectangle { .. } => "rectangle",
            Shape::Polygon { .. } => "polygon",
            Shape::Triangle { .. } => "triangle",
            Shape::Unsupported => "unsupported",
        }
    }

    /// Whether this shape is unable to mark any cell.
    ///
    /// True for unsupported tags, polygons with fewer than three vertices
    /// and non-positive sizes.
    pub fn is_degenerate(&self) -> bool {
        match self {
            Shape::Circle { radius, .. } => !is_positive(*radius),
            Shape::Rectangle { width, height, .. } => {
                !(is_positive(*width) && is_positive(*height))
            }
            Shape::Polygon { vertices, .. } | Shape::Triangle { vertices, .. } => {
                vertices.len() < 3
            }
            Shape::Unsupported => true,
        }
    }

    /// Point-in-shape test. Boundaries count as inside for circles and
    /// rectangles; polygons follow the even-odd rule.
    pub fn contains(&self, point: WorldPoint) -> bool {
        match self {
            Shape::Circle { center, radius } => point.distance(center) <= *radius,
            Shape::Rectangle {
                center,
                width,
                height,
                rotation,
            } => {
                let local = (point - *center).rotate(-rotation);
                local.x.abs() <= width / 2.0 && local.y.abs() <= height / 2.0
            }
            Shape::Polygon { vertices, .. } | Shape::Triangle { vertices, .. } => {
                polygon_contains(vertices, point)
            }
            Shape::Unsupported => false,
        }
    }

    /// Axis-aligned box enclosing the shape.
    ///
    /// Empty for [`Shape::Unsupported`] and vertex-less polygons.
    pub fn bounds(&self) -> Bounds {
        match self {
            Shape::Circle { center, radius } => Bounds::new(
                WorldPoint::new(center.x - radius, center.y - radius),
                WorldPoint::new(center.x + radius, center.y + radius),
            ),
            Shape::Rectangle {
                center,
                width,
                height,
                rotation,
            } => {
                let hw = width / 2.0;
                let hh = height / 2.0;
                let corners = [
                    WorldPoint::new(-hw, -hh),
                    WorldPoint::new(hw, -hh),
                    WorldPoint::new(hw, hh),
                    WorldPoint::new(-hw, hh),
                ];
                Bounds::from_points(
                    corners
                        .into_iter()
                        .map(|corner| *center + corner.rotate(-rotation)),
                )
            }
            Shape::Polygon { vertices, .. } | Shape::Triangle { vertices, .. } => {
                Bounds::from_points(vertices.iter().copied())
            }
            Shape::Unsupported => Bounds::empty(),
        }
    }
}

/// NaN is not positive.
fn is_positive(value: f64) -> bool {
    value > 0.0
}

/// Even-odd ray casting along +X from `point`.
///
/// Vertices at exactly `point.y` count as lying below the ray, so a ray
/// through a vertex where the boundary passes crosses it once. The crossing
/// must lie strictly right of `point`: points on a left edge are inside,
/// points on a right edge are not.
fn polygon_contains(vertices: &[WorldPoint], point: WorldPoint) -> bool {
    if vertices.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = vertices.len() - 1;
    for (i, vi) in vertices.iter().enumerate() {
        let vj = vertices[j];
        if (vi.y > point.y) != (vj.y > point.y) {
            let x_cross = (vj.x - vi.x) * (point.y - vi.y) / (vj.y - vi.y) + vi.x;
            if point.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

fn centroid(vertices: &[WorldPoint]) -> WorldPoint {
    if vertices.is_empty() {
        return WorldPoint::ZERO;
    }
    let n = vertices.len() as f64;
    let (sx, sy) = vertices
        .iter()
        .fold((0.0, 0.0), |(sx, sy), v| (sx + v.x, sy + v.y));
    WorldPoint::new(sx / n, sy / n)
}
