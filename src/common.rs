//! Common types for the engine: attack outcomes and board errors.

/// Outcome of resolving an attack against a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackResult {
    /// Target cell was already hit; nothing changed. Whether the turn is
    /// consumed is the caller's policy, not the resolver's.
    AlreadyHit,
    /// Attack landed on open water.
    Miss,
    /// Attack struck a ship segment, carrying the ship's name.
    Hit(&'static str),
    /// Attack struck the last unhit segment of the named ship.
    Sunk(&'static str),
}

/// Errors returned by coordinate and board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinate text is not a letter A–J followed by a number 1–10.
    InvalidFormat,
    /// Row or column index lies outside the 10×10 board.
    OutOfBounds { col: usize, row: usize },
    /// Ship placement would run off the board.
    ShipOutOfBounds,
    /// Ship placement overlaps an already placed ship.
    ShipOverlaps,
    /// Random placement failed to converge within the retry cap.
    FatalPlacement { ship: &'static str },
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::InvalidFormat => {
                write!(f, "Coordinate must be a letter A-J followed by a number 1-10")
            }
            BoardError::OutOfBounds { col, row } => {
                write!(f, "Position (col={}, row={}) is outside the board", col, row)
            }
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::FatalPlacement { ship } => {
                write!(f, "Unable to place {} after exhausting placement attempts", ship)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
