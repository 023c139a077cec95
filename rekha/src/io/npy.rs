//! NPY (NumPy array, format 1.0) encoding of grid buffers.
//!
//! Format:
//! - Magic: `\x93NUMPY` (6 bytes)
//! - Version: `01 00` (2 bytes)
//! - Header length: u16 (2 bytes, little-endian)
//! - Header: `{'descr': '<u1', 'fortran_order': False, 'shape': (H, W), }`
//!   padded with spaces and terminated by `\n` so the whole preamble is a
//!   multiple of 64 bytes
//! - Data: `H * W` bytes, row-major
//!
//! No row flip is applied: array row 0 is the bottom of the map, matching the
//! `origin` in the metadata file.

use crate::core::cell;
use crate::error::EncodeError;
use crate::grid::OccupancyGrid;

/// Magic bytes for .npy files
pub const MAGIC: &[u8; 6] = b"\x93NUMPY";

/// Format version written (major, minor)
pub const VERSION: [u8; 2] = [1, 0];

/// Single unsigned byte dtype
pub const DTYPE_U8: &str = "<u1";

/// Preamble alignment in bytes
const ALIGNMENT: usize = 64;

/// Magic + version + header length field
const FIXED_PREFIX: usize = 10;

/// Build the padded header text for a 2D array of `height` rows.
fn array_header(dtype: &str, width: usize, height: usize) -> String {
    let dict = format!(
        "{{'descr': '{}', 'fortran_order': False, 'shape': ({}, {}), }}",
        dtype, height, width
    );
    // +1 for the terminating newline
    let unpadded = FIXED_PREFIX + dict.len() + 1;
    let padding = (ALIGNMENT - unpadded % ALIGNMENT) % ALIGNMENT;

    let mut header = dict;
    header.extend(std::iter::repeat_n(' ', padding));
    header.push('\n');
    header
}

/// Encode a row-major `u8` buffer of `height x width` as NPY.
///
/// `data.len()` must equal `width * height`.
pub fn encode_npy(data: &[u8], width: usize, height: usize) -> Result<Vec<u8>, EncodeError> {
    let expected = width
        .checked_mul(height)
        .ok_or(EncodeError::DimensionsOverflow { width, height })?;
    if data.len() != expected {
        return Err(EncodeError::SizeMismatch {
            width,
            height,
            expected,
            actual: data.len(),
        });
    }

    Ok(assemble(data, width, height))
}

/// Raw flavor: grid values unchanged (0 occupied, 254 free).
pub fn encode_raw_npy(grid: &OccupancyGrid) -> Vec<u8> {
    assemble(grid.cells(), grid.width(), grid.height())
}

/// Planner flavor: 1 for occupied cells, 0 for everything else.
pub fn encode_planner_npy(grid: &OccupancyGrid) -> Vec<u8> {
    assemble(&planner_cells(grid.cells()), grid.width(), grid.height())
}

/// Remap raw cell values to the planner's 0/1 convention.
pub fn planner_cells(cells: &[u8]) -> Vec<u8> {
    cells
        .iter()
        .map(|&v| u8::from(v == cell::OCCUPIED))
        .collect()
}

/// Caller guarantees `data.len() == width * height`.
fn assemble(data: &[u8], width: usize, height: usize) -> Vec<u8> {
    let header = array_header(DTYPE_U8, width, height);
    // Two usize dimensions keep the header well under 128 bytes.
    let header_len = header.len() as u16;

    let mut out = Vec::with_capacity(FIXED_PREFIX + header.len() + data.len());
    out.extend_from_slice(MAGIC);
    out.extend_from_slice(&VERSION);
    out.extend_from_slice(&header_len.to_le_bytes());
    out.extend_from_slice(header.as_bytes());
    out.extend_from_slice(data);
    out
}
