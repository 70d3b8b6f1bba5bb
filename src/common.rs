//! Common types for the board engine: errors and strike outcomes.

use crate::grid::Coord;

/// Result of striking a cell on a board that holds ships.
///
/// Strikes that cannot be applied (off the grid, or a cell already resolved)
/// are reported as a [`BoardError`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Shot {
    /// Strike found open water.
    Miss,
    /// Strike found an intact ship segment.
    Hit,
}

/// Errors returned by board operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Grid dimensions must both be non-zero.
    InvalidDimensions { width: usize, height: usize },
    /// Coordinate is outside the grid.
    OutOfBounds(Coord),
    /// Ships must be at least one cell long.
    InvalidLength(usize),
    /// A ship cell would land on a cell that is not empty.
    AlreadyOccupied(Coord),
    /// A ship cell would touch another ship, diagonals included.
    AdjacencyViolation(Coord),
    /// The cell was already struck or deduced empty.
    AlreadyTargeted(Coord),
    /// Redundancy deduction was requested for a cell that was never struck.
    NotHit(Coord),
    /// No ship occupies the cell.
    NotAShip(Coord),
    /// The ship has been struck and can no longer be moved or rotated.
    ShipDamaged(Coord),
    /// Random placement gave up on a ship of this length.
    UnableToPlaceShip { length: usize },
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::InvalidDimensions { width, height } => {
                write!(f, "Invalid board dimensions {}x{}", width, height)
            }
            BoardError::OutOfBounds(c) => write!(f, "Coordinate {} is out of bounds", c),
            BoardError::InvalidLength(len) => write!(f, "Invalid ship length {}", len),
            BoardError::AlreadyOccupied(c) => write!(f, "Cell {} is already occupied", c),
            BoardError::AdjacencyViolation(c) => {
                write!(f, "Cell {} is adjacent to another ship", c)
            }
            BoardError::AlreadyTargeted(c) => write!(f, "Cell {} was already targeted", c),
            BoardError::NotHit(c) => write!(f, "Cell {} has not been hit", c),
            BoardError::NotAShip(c) => write!(f, "No ship at {}", c),
            BoardError::ShipDamaged(c) => write!(f, "Ship at {} has been hit", c),
            BoardError::UnableToPlaceShip { length } => {
                write!(f, "Unable to place ship of length {}", length)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
