//! Attack outcomes and board errors.

use crate::bitboard::BitBoardError;

/// Outcome of an attack on a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackResult {
    /// Open water. The cell is still recorded as attacked.
    Miss,
    /// The cell holds a ship. Also reported when a ship cell is attacked again.
    Hit,
    /// This attack took the ship's last point, carrying its name.
    Sunk(&'static str),
}

impl AttackResult {
    /// `true` for [`AttackResult::Hit`] and [`AttackResult::Sunk`].
    pub fn is_hit(&self) -> bool {
        !matches!(self, AttackResult::Miss)
    }
}

/// Errors returned by board operations. None of them leave partial changes behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinate outside the grid.
    BitBoardError(BitBoardError),
    /// Ships must be at least one cell long.
    InvalidLength,
    /// The ship is already on a board.
    ShipAlreadyPlaced,
    /// Ship placement overlaps another ship.
    ShipOverlaps,
    /// Ship would stick out past the edge of the board.
    ShipOutOfBounds,
    /// No free spot found for a random placement.
    UnableToPlaceShip,
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::BitBoardError(err)
    }
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::BitBoardError(e) => write!(f, "BitBoard error: {}", e),
            BoardError::InvalidLength => write!(f, "Ship length must be at least 1"),
            BoardError::ShipAlreadyPlaced => write!(f, "Ship is already placed on a board"),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::UnableToPlaceShip => write!(f, "Unable to find room for ship"),
        }
    }
}
