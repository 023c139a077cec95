//! Grid storage for the exported occupancy grid.

use crate::core::{CellState, GridCoord, WorldPoint, cell};
use crate::scene::MapInfo;

/// Flat occupancy buffer with its georeference.
///
/// The grid uses a coordinate system where:
/// - (0, 0) is at `origin` in world coordinates
/// - Positive X is to the right
/// - Positive Y is up
/// - Cell (x, y) covers the area from (origin + x*resolution) to (origin + (x+1)*resolution)
///
/// Cells are stored row-major, `index = y * width + x`, so row 0 is the
/// bottom of the map. Image encoders flip rows; array encoders do not.
#[derive(Clone, Debug, PartialEq)]
pub struct OccupancyGrid {
    /// Raw cell values (see [`crate::core::cell`])
    cells: Vec<u8>,
    /// Grid width in cells
    width: usize,
    /// Grid height in cells
    height: usize,
    /// Resolution in meters per cell
    resolution: f64,
    /// World coordinates of cell (0, 0) corner
    origin: WorldPoint,
}

impl OccupancyGrid {
    /// Create an all-free grid with the given dimensions
    ///
    /// # Panics
    ///
    /// If `width * height` overflows or cannot be allocated. Grids built
    /// from a validated [`MapInfo`] never exceed
    /// [`MAX_GRID_CELLS`](crate::scene::MAX_GRID_CELLS).
    pub fn new(width: usize, height: usize, resolution: f64, origin: WorldPoint) -> Self {
        // usize::MAX makes vec! fail with a capacity overflow instead of wrapping
        let len = width.checked_mul(height).unwrap_or(usize::MAX);
        Self {
            cells: vec![cell::FREE; len],
            width,
            height,
            resolution,
            origin,
        }
    }

    /// Create an all-free grid sized for `info`
    pub fn for_map(info: &MapInfo) -> Self {
        Self::new(
            info.grid_width(),
            info.grid_height(),
            info.resolution,
            info.origin,
        )
    }

    /// Wrap an existing buffer.
    ///
    /// Returns `None` when `cells.len() != width * height`.
    pub fn from_cells(
        cells: Vec<u8>,
        width: usize,
        height: usize,
        resolution: f64,
        origin: WorldPoint,
    ) -> Option<Self> {
        (width.checked_mul(height) == Some(cells.len())).then_some(Self {
            cells,
            width,
            height,
            resolution,
            origin,
        })
    }

    /// Grid width in cells
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Resolution in meters per cell
    #[inline]
    pub fn resolution(&self) -> f64 {
        self.resolution
    }

    /// World coordinates of cell (0, 0) corner
    #[inline]
    pub fn origin(&self) -> WorldPoint {
        self.origin
    }

    /// Total number of cells
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Raw cell values, bottom row first
    #[inline]
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Consume the grid, returning the raw buffer
    pub fn into_cells(self) -> Vec<u8> {
        self.cells
    }

    /// One grid row (row 0 is the bottom of the map)
    #[inline]
    pub fn row(&self, y: usize) -> &[u8] {
        &self.cells[y * self.width..(y + 1) * self.width]
    }

    /// Convert world coordinates to grid coordinates
    #[inline]
    pub fn world_to_grid(&self, point: WorldPoint) -> GridCoord {
        let x = ((point.x - self.origin.x) / self.resolution).floor() as i32;
        let y = ((point.y - self.origin.y) / self.resolution).floor() as i32;
        GridCoord::new(x, y)
    }

    /// Convert grid coordinates to world coordinates (cell center)
    #[inline]
    pub fn grid_to_world(&self, coord: GridCoord) -> WorldPoint {
        WorldPoint::new(
            self.origin.x + (coord.x as f64 + 0.5) * self.resolution,
            self.origin.y + (coord.y as f64 + 0.5) * self.resolution,
        )
    }

    /// Check if grid coordinates are within bounds
    #[inline]
    pub fn is_valid_coord(&self, coord: GridCoord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as usize) < self.width
            && (coord.y as usize) < self.height
    }

    /// Convert grid coordinates to flat array index
    #[inline]
    pub fn coord_to_index(&self, coord: GridCoord) -> Option<usize> {
        if self.is_valid_coord(coord) {
            Some(coord.y as usize * self.width + coord.x as usize)
        } else {
            None
        }
    }

    /// Raw value at grid coordinates
    #[inline]
    pub fn get(&self, coord: GridCoord) -> Option<u8> {
        self.coord_to_index(coord).map(|i| self.cells[i])
    }

    /// State at grid coordinates (out of bounds reads as Unknown)
    #[inline]
    pub fn state(&self, coord: GridCoord) -> CellState {
        self.get(coord)
            .map(CellState::from_value)
            .unwrap_or(CellState::Unknown)
    }

    /// Mark a cell occupied.
    ///
    /// Out-of-bounds coordinates are ignored. Returns true if the cell was
    /// not occupied before.
    #[inline]
    pub fn mark_occupied(&mut self, coord: GridCoord) -> bool {
        match self.coord_to_index(coord) {
            Some(i) if self.cells[i] != cell::OCCUPIED => {
                self.cells[i] = cell::OCCUPIED;
                true
            }
            _ => false,
        }
    }

    /// Count cells by state
    pub fn count_by_state(&self) -> CellCounts {
        let mut counts = CellCounts::default();
        for &value in &self.cells {
            match CellState::from_value(value) {
                CellState::Free => counts.free += 1,
                CellState::Occupied => counts.occupied += 1,
                CellState::Unknown => counts.unknown += 1,
            }
        }
        counts
    }

    /// ASCII rendering, top row first (for debugging small grids)
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for y in (0..self.height).rev() {
            out.extend(
                self.row(y)
                    .iter()
                    .map(|&v| CellState::from_value(v).as_char()),
            );
            out.push('\n');
        }
        out
    }
}

/// Cell counts by state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CellCounts {
    /// Free cells (254)
    pub free: usize,
    /// Occupied cells (0)
    pub occupied: usize,
    /// Any other value
    pub unknown: usize,
}

impl CellCounts {
    /// Total cells counted
    pub fn total(&self) -> usize {
        self.free + self.occupied + self.unknown
    }
}
