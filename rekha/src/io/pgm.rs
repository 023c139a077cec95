//! Binary PGM (P5) encoding of an occupancy grid.
//!
//! Layout, byte-exact:
//!
//! ```text
//! "P5\n{width} {height}\n255\n"   ASCII header
//! width * height bytes           pixels, top row first
//! ```
//!
//! Grid row 0 is the bottom of the map, image row 0 is the top, so rows are
//! emitted in reverse. Values are copied unchanged (0 occupied, 254 free),
//! which is what map_server expects with `negate: 0`.

use std::io::{self, Write};

use image::ImageFormat;

use crate::core::{WorldPoint, cell};
use crate::error::DecodeError;
use crate::grid::OccupancyGrid;

/// PGM header for the given dimensions
pub fn pgm_header(width: usize, height: usize) -> String {
    format!("P5\n{} {}\n255\n", width, height)
}

/// Encode the grid as a complete PGM file
pub fn encode_pgm(grid: &OccupancyGrid) -> Vec<u8> {
    let header = pgm_header(grid.width(), grid.height());
    let mut out = Vec::with_capacity(header.len() + grid.cell_count());
    out.extend_from_slice(header.as_bytes());
    for y in (0..grid.height()).rev() {
        out.extend_from_slice(grid.row(y));
    }
    out
}

/// Stream the PGM encoding into `writer`
pub fn write_pgm<W: Write>(grid: &OccupancyGrid, writer: &mut W) -> io::Result<()> {
    writer.write_all(pgm_header(grid.width(), grid.height()).as_bytes())?;
    for y in (0..grid.height()).rev() {
        writer.write_all(grid.row(y))?;
    }
    Ok(())
}

/// Read a PGM image back into a grid.
///
/// Undoes the row flip. Pure white (255) is read as free (254); every other
/// value is kept as is.
pub fn decode_pgm(
    bytes: &[u8],
    resolution: f64,
    origin: WorldPoint,
) -> Result<OccupancyGrid, DecodeError> {
    let img = image::load_from_memory_with_format(bytes, ImageFormat::Pnm)?.into_luma8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    let pixels = img.into_raw();

    let mut cells = Vec::with_capacity(width * height);
    for row in pixels.chunks_exact(width.max(1)).rev() {
        cells.extend(row.iter().map(|&v| if v == 255 { cell::FREE } else { v }));
    }

    let actual = cells.len();
    OccupancyGrid::from_cells(cells, width, height, resolution, origin).ok_or(
        DecodeError::Truncated {
            width,
            height,
            actual,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GridCoord;

    #[test]
    fn test_header() {
        assert_eq!(pgm_header(200, 200), "P5\n200 200\n255\n");
        assert_eq!(pgm_header(3, 2), "P5\n3 2\n255\n");
    }

    #[test]
    fn test_rows_flipped() {
        let mut grid = OccupancyGrid::new(3, 2, 0.1, WorldPoint::ZERO);
        grid.mark_occupied(GridCoord::new(0, 0));

        let bytes = encode_pgm(&grid);
        let header_len = "P5\n3 2\n255\n".len();
        assert_eq!(bytes.len(), header_len + 6);

        let pixels = &bytes[header_len..];
        // Top image row is grid row 1 (all free)
        assert_eq!(&pixels[0..3], &[254, 254, 254]);
        // Bottom image row is grid row 0
        assert_eq!(&pixels[3..6], &[0, 254, 254]);
    }

    #[test]
    fn test_write_matches_encode() {
        let mut grid = OccupancyGrid::new(4, 3, 0.1, WorldPoint::ZERO);
        grid.mark_occupied(GridCoord::new(3, 2));
        grid.mark_occupied(GridCoord::new(1, 0));

        let mut streamed = Vec::new();
        write_pgm(&grid, &mut streamed).unwrap();
        assert_eq!(streamed, encode_pgm(&grid));
    }

    #[test]
    fn test_decode_restores_grid() {
        let mut grid = OccupancyGrid::new(5, 4, 0.05, WorldPoint::new(-1.0, 2.0));
        grid.mark_occupied(GridCoord::new(0, 0));
        grid.mark_occupied(GridCoord::new(4, 3));
        grid.mark_occupied(GridCoord::new(2, 1));

        let decoded = decode_pgm(&encode_pgm(&grid), 0.05, WorldPoint::new(-1.0, 2.0)).unwrap();
        assert_eq!(decoded, grid);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let result = decode_pgm(b"not an image", 0.05, WorldPoint::ZERO);
        assert!(matches!(result, Err(DecodeError::Image(_))));
    }
}
