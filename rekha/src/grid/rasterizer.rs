//! Vector-to-raster conversion of a scene.
//!
//! Each occupying object is visited once:
//!
//! ```text
//! shape.bounds() ──► cell range (floor, clamped to grid)
//!                          │
//!                          ▼
//!        for each cell: center = origin + (g + 0.5) * resolution
//!                          │ shape.contains(center)?
//!                          ▼
//!                    mark_occupied(cell)
//! ```
//!
//! Marking only moves cells from free to occupied, so the result is the
//! union of all occupying shapes and does not depend on object order.

use crate::core::GridCoord;
use crate::error::ValidationError;
use crate::scene::{MapInfo, MapObject, Shape};

use super::storage::OccupancyGrid;

/// Summary of one rasterization call
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RasterStats {
    /// Objects whose shapes were rasterized
    pub objects_rasterized: usize,
    /// Robot and landmark objects left out
    pub objects_excluded: usize,
    /// Occupying objects whose shape cannot mark any cell
    pub objects_degenerate: usize,
    /// Cell-center containment tests performed
    pub cells_tested: usize,
    /// Cells that went from free to occupied
    pub cells_marked: usize,
}

/// Rasterize a scene into a fresh grid.
///
/// Fails only if `info` is invalid; malformed shapes contribute nothing.
pub fn rasterize(info: &MapInfo, objects: &[MapObject]) -> Result<OccupancyGrid, ValidationError> {
    rasterize_with_stats(info, objects).map(|(grid, _)| grid)
}

/// [`rasterize`], also returning what was done.
pub fn rasterize_with_stats(
    info: &MapInfo,
    objects: &[MapObject],
) -> Result<(OccupancyGrid, RasterStats), ValidationError> {
    info.validate()?;

    let mut grid = OccupancyGrid::for_map(info);
    let mut stats = RasterStats::default();

    for object in objects {
        if !object.is_occupying() {
            stats.objects_excluded += 1;
            continue;
        }
        if object.shape.is_degenerate() {
            log::warn!(
                "Object {} ({}) has a degenerate {} shape, skipping",
                object.id,
                object.name,
                object.shape.kind()
            );
            stats.objects_degenerate += 1;
            continue;
        }

        let (tested, marked) = rasterize_shape(&mut grid, &object.shape);
        log::debug!(
            "Rasterized {} {}: {} cells tested, {} newly occupied",
            object.shape.kind(),
            object.id,
            tested,
            marked
        );
        stats.objects_rasterized += 1;
        stats.cells_tested += tested;
        stats.cells_marked += marked;
    }

    log::debug!(
        "Rasterized {} objects into {}x{} grid ({} excluded, {} degenerate, {} cells occupied)",
        stats.objects_rasterized,
        grid.width(),
        grid.height(),
        stats.objects_excluded,
        stats.objects_degenerate,
        stats.cells_marked
    );

    Ok((grid, stats))
}

/// Mark every cell whose center lies inside `shape`.
///
/// Returns `(cells_tested, cells_newly_marked)`. Cells outside the grid are
/// never visited.
pub fn rasterize_shape(grid: &mut OccupancyGrid, shape: &Shape) -> (usize, usize) {
    let bounds = shape.bounds();
    if bounds.is_empty() || grid.cell_count() == 0 {
        return (0, 0);
    }

    let lo = grid.world_to_grid(bounds.min);
    let hi = grid.world_to_grid(bounds.max);

    let min_x = lo.x.max(0);
    let min_y = lo.y.max(0);
    let max_x = hi.x.min(grid.width() as i32 - 1);
    let max_y = hi.y.min(grid.height() as i32 - 1);
    if min_x > max_x || min_y > max_y {
        return (0, 0);
    }

    let mut tested = 0;
    let mut marked = 0;
    for gy in min_y..=max_y {
        for gx in min_x..=max_x {
            let coord = GridCoord::new(gx, gy);
            tested += 1;
            if shape.contains(grid.grid_to_world(coord)) && grid.mark_occupied(coord) {
                marked += 1;
            }
        }
    }
    (tested, marked)
}
