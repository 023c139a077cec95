//! Shared scenes for integration tests.

#![allow(dead_code)]

use std::f64::consts::FRAC_PI_4;

use rekha::core::WorldPoint;
use rekha::{MapInfo, MapObject, ObjectType, Shape};

/// 10 m x 10 m at 5 cm: 200 x 200 cells.
pub fn office_info() -> MapInfo {
    MapInfo::new("office", 10.0, 10.0, 0.05)
}

fn p(x: f64, y: f64) -> WorldPoint {
    WorldPoint::new(x, y)
}

fn wall(id: &str, center: WorldPoint, width: f64, height: f64) -> MapObject {
    MapObject::new(id, ObjectType::Wall, Shape::rectangle(center, width, height, 0.0))
}

fn obstacle(id: &str, shape: Shape) -> MapObject {
    MapObject::new(id, ObjectType::Obstacle, shape)
}

/// Four walls, some furniture, a robot and a charging landmark.
pub fn office_objects() -> Vec<MapObject> {
    vec![
        wall("wall_s", p(5.0, 0.1), 10.0, 0.2),
        wall("wall_n", p(5.0, 9.9), 10.0, 0.2),
        wall("wall_w", p(0.1, 5.0), 0.2, 10.0),
        wall("wall_e", p(9.9, 5.0), 0.2, 10.0),
        obstacle("table", Shape::circle(p(3.0, 3.0), 0.6)),
        obstacle("sofa", Shape::rectangle(p(7.0, 6.5), 2.0, 0.8, FRAC_PI_4)),
        obstacle(
            "counter",
            Shape::polygon(vec![
                p(1.0, 6.0),
                p(3.0, 6.0),
                p(3.0, 6.6),
                p(1.6, 6.6),
                p(1.6, 8.5),
                p(1.0, 8.5),
            ]),
        ),
        obstacle("plant", Shape::triangle(p(8.0, 1.0), p(9.0, 1.0), p(8.5, 2.0))),
        MapObject::new("robot", ObjectType::Robot, Shape::circle(p(5.0, 5.0), 0.17)),
        MapObject::new("dock", ObjectType::Landmark, Shape::circle(p(0.5, 5.0), 0.2)),
    ]
}

/// Only the objects that never occupy cells.
pub fn non_occupying_objects() -> Vec<MapObject> {
    office_objects()
        .into_iter()
        .filter(|o| matches!(o.object_type, ObjectType::Robot | ObjectType::Landmark))
        .collect()
}

/// Byte offset of pixel data in a PGM produced for `width x height`.
pub fn pgm_data_offset(width: usize, height: usize) -> usize {
    format!("P5\n{} {}\n255\n", width, height).len()
}

/// Header dict of an NPY file.
pub fn npy_header(bytes: &[u8]) -> &str {
    let len = u16::from_le_bytes([bytes[8], bytes[9]]) as usize;
    std::str::from_utf8(&bytes[10..10 + len]).unwrap()
}

/// Data section of an NPY file.
pub fn npy_data(bytes: &[u8]) -> &[u8] {
    let len = u16::from_le_bytes([bytes[8], bytes[9]]) as usize;
    &bytes[10 + len..]
}
