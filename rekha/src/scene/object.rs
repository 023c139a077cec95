//! Map objects as produced by the editor.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use super::shape::Shape;

/// What an object represents on the map.
///
/// Unrecognized type strings decode to [`ObjectType::Other`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectType {
    /// Generic obstacle
    #[default]
    Obstacle,
    /// Wall segment
    Wall,
    /// Navigation landmark (not an obstacle)
    Landmark,
    /// Robot placement (not an obstacle)
    Robot,
    /// Named zone
    Zone,
    /// Door
    Door,
    /// Anything else the editor emits
    #[serde(other)]
    Other,
}

impl ObjectType {
    /// Whether objects of this type mark cells as occupied.
    ///
    /// Robots and landmarks are annotations; every other type occupies space.
    #[inline]
    pub fn is_occupying(self) -> bool {
        !matches!(self, ObjectType::Robot | ObjectType::Landmark)
    }
}

/// Robot placement attached to an object
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Pose {
    /// X position in meters
    pub x: f64,
    /// Y position in meters
    pub y: f64,
    /// Orientation in radians
    #[serde(default)]
    pub theta: f64,
}

/// Navigation goal attached to an object
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Goal {
    /// X position in meters
    pub x: f64,
    /// Y position in meters
    pub y: f64,
}

/// A single drawn object.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapObject {
    /// Editor identifier (numbers are accepted and kept as text)
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,

    /// Display name
    #[serde(default)]
    pub name: String,

    /// Object category
    #[serde(rename = "type", default)]
    pub object_type: ObjectType,

    /// Geometry
    pub shape: Shape,

    /// Free-form editor properties
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, serde_yaml::Value>,

    /// Robot pose, for robot objects
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pose: Option<Pose>,

    /// Navigation goal, for robot objects
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal: Option<Goal>,
}

impl MapObject {
    /// Create an object with no properties, pose or goal
    pub fn new(id: impl Into<String>, object_type: ObjectType, shape: Shape) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            object_type,
            shape,
            properties: BTreeMap::new(),
            pose: None,
            goal: None,
        }
    }

    /// Whether the rasterizer should mark this object's cells.
    #[inline]
    pub fn is_occupying(&self) -> bool {
        self.object_type.is_occupying()
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(s) => s,
        Id::Int(n) => n.to_string(),
        Id::Float(n) => n.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WorldPoint;

    #[test]
    fn test_occupying_types() {
        assert!(ObjectType::Obstacle.is_occupying());
        assert!(ObjectType::Wall.is_occupying());
        assert!(ObjectType::Zone.is_occupying());
        assert!(ObjectType::Door.is_occupying());
        assert!(ObjectType::Other.is_occupying());
        assert!(!ObjectType::Robot.is_occupying());
        assert!(!ObjectType::Landmark.is_occupying());
    }

    #[test]
    fn test_deserialize_object() {
        let yaml = r##"
id: 1717000000123
name: Robot 1
type: robot
shape:
  type: circle
  center: [1.0, 1.0]
  radius: 0.2
pose: { x: 1.0, y: 1.0, theta: 1.57 }
goal: { x: 4.0, y: 2.0 }
properties:
  color: "#ff0000"
"##;
        let obj: MapObject = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(obj.id, "1717000000123");
        assert_eq!(obj.object_type, ObjectType::Robot);
        assert!(!obj.is_occupying());
        assert_eq!(obj.goal, Some(Goal { x: 4.0, y: 2.0 }));
        assert!(obj.properties.contains_key("color"));
    }

    #[test]
    fn test_unknown_type_is_other() {
        let yaml = r#"
id: shelf-3
type: furniture
shape: { type: rectangle, center: [0, 0], width: 1, height: 0.4 }
"#;
        let obj: MapObject = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(obj.object_type, ObjectType::Other);
        assert!(obj.is_occupying());
        assert_eq!(
            obj.shape,
            Shape::rectangle(WorldPoint::ZERO, 1.0, 0.4, 0.0)
        );
    }
}
