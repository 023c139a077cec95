//! Vector scene handed over by the map editor.
//!
//! - [`MapInfo`]: physical size, resolution and origin of the map
//! - [`MapObject`] / [`ObjectType`]: drawn objects and their category
//! - [`Shape`]: closed set of supported geometries with containment and
//!   bounding-box queries
//! - [`SceneDocument`]: file form of a complete scene

mod document;
mod map_info;
mod object;
mod shape;

pub use document::SceneDocument;
pub use map_info::{MAX_GRID_CELLS, MapInfo};
pub(crate) use map_info::is_plain_file_name;
pub use object::{Goal, MapObject, ObjectType, Pose};
pub use shape::Shape;
