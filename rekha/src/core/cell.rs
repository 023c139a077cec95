//! Cell values of the exported occupancy grid.
//!
//! The grid stores raw `u8` values using the ROS map_server grayscale
//! vocabulary, so the PGM encoder can copy cells without remapping:
//!
//! | State    | Value | Produced by the rasterizer |
//! |----------|-------|----------------------------|
//! | Free     | 254   | yes (initial fill)         |
//! | Occupied | 0     | yes                        |
//! | Unknown  | 205   | no (reserved)              |

/// Cell value for free space.
pub const FREE: u8 = 254;

/// Cell value for an occupied cell.
pub const OCCUPIED: u8 = 0;

/// Cell value for unobserved space.
///
/// Part of the map_server vocabulary; the rasterizer never writes it.
pub const UNKNOWN: u8 = 205;

/// Semantic state of a grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CellState {
    /// Traversable space
    Free = FREE,
    /// Covered by an obstacle
    Occupied = OCCUPIED,
    /// Not known either way
    Unknown = UNKNOWN,
}

impl CellState {
    /// Raw grid value for this state
    #[inline]
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Classify a raw value.
    ///
    /// Anything that is neither [`FREE`] nor [`OCCUPIED`] is `Unknown`.
    #[inline]
    pub fn from_value(value: u8) -> Self {
        match value {
            FREE => CellState::Free,
            OCCUPIED => CellState::Occupied,
            _ => CellState::Unknown,
        }
    }

    /// Single character representation for debugging
    pub fn as_char(self) -> char {
        match self {
            CellState::Free => '.',
            CellState::Occupied => '#',
            CellState::Unknown => '?',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values() {
        assert_eq!(CellState::Free.value(), 254);
        assert_eq!(CellState::Occupied.value(), 0);
        assert_eq!(CellState::Unknown.value(), 205);
    }

    #[test]
    fn test_from_value() {
        assert_eq!(CellState::from_value(254), CellState::Free);
        assert_eq!(CellState::from_value(0), CellState::Occupied);
        assert_eq!(CellState::from_value(205), CellState::Unknown);
        assert_eq!(CellState::from_value(255), CellState::Unknown);
    }
}
