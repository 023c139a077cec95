//! Error types for rekha

/// Rejected map metadata.
///
/// Raised by [`MapInfo::validate`](crate::scene::MapInfo::validate) before any
/// grid is allocated. Shapes are never validated: a malformed shape simply
/// marks no cells.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// Map name is empty (it is used for every output filename)
    #[error("map name is empty")]
    EmptyName,

    /// Resolution is zero, negative or not finite
    #[error("resolution must be a positive finite number, got {0}")]
    InvalidResolution(f64),

    /// Width or height is zero, negative or not finite
    #[error("map {axis} must be a positive finite number, got {value}")]
    InvalidExtent {
        /// "width" or "height"
        axis: &'static str,
        /// Offending value in meters
        value: f64,
    },

    /// Map name is not a plain file stem (path separators, `.` or `..`)
    #[error("map name {0:?} must not contain path components")]
    InvalidName(String),

    /// Origin has a NaN or infinite component
    #[error("origin must be finite, got [{0}, {1}]")]
    InvalidOrigin(f64, f64),

    /// Cell count overflows or exceeds [`MAX_GRID_CELLS`](crate::scene::MAX_GRID_CELLS)
    #[error("grid of {width}x{height} cells is too large")]
    GridTooLarge {
        /// Requested width in cells
        width: f64,
        /// Requested height in cells
        height: f64,
    },
}

/// Encoder precondition violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    /// `width * height` does not fit in `usize`
    #[error("array dimensions {width}x{height} overflow")]
    DimensionsOverflow {
        /// Declared width in cells
        width: usize,
        /// Declared height in cells
        height: usize,
    },

    /// Buffer length does not equal `width * height`
    #[error("buffer holds {actual} bytes, expected {expected} ({width}x{height})")]
    SizeMismatch {
        /// Declared width in cells
        width: usize,
        /// Declared height in cells
        height: usize,
        /// `width * height`
        expected: usize,
        /// Actual buffer length
        actual: usize,
    },
}

/// Decoding a previously exported artifact failed.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The image could not be parsed
    #[error("invalid image: {0}")]
    Image(#[from] image::ImageError),

    /// Pixel data does not cover the declared dimensions
    #[error("image data holds {actual} pixels, expected {width}x{height}")]
    Truncated {
        /// Declared width
        width: usize,
        /// Declared height
        height: usize,
        /// Pixels present
        actual: usize,
    },

    /// The metadata document could not be parsed
    #[error("invalid metadata: {0}")]
    Metadata(#[from] serde_yaml::Error),
}

/// Config or scene file load error
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigLoadError {
    /// I/O error
    #[error("IO error: {0}")]
    Io(String),
    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Export pipeline error
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// Map metadata rejected
    #[error("invalid map: {0}")]
    Validation(#[from] ValidationError),

    /// Encoder precondition violated
    #[error("encoding failed: {0}")]
    Encode(#[from] EncodeError),

    /// Writing an artifact failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
