//! Board coordinates: parsing and formatting of labels like "A1" or "j10".

use core::fmt;
use core::str::FromStr;

use crate::common::BoardError;
use crate::config::BOARD_SIZE;

/// A validated board position. Column and row are both 0-based indices
/// below [`BOARD_SIZE`], so any `Coord` resolves to a real cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    col: usize,
    row: usize,
}

impl Coord {
    /// Build a coordinate from 0-based indices, rejecting out-of-range
    /// values.
    pub fn new(col: usize, row: usize) -> Result<Self, BoardError> {
        if col >= BOARD_SIZE || row >= BOARD_SIZE {
            return Err(BoardError::OutOfBounds { col, row });
        }
        Ok(Coord { col, row })
    }

    /// Parse a label: one letter A–J (case-insensitive) followed by a
    /// number 1–10, with no separator. Anything else is `InvalidFormat`.
    pub fn parse(s: &str) -> Result<Self, BoardError> {
        // One leading letter plus one or two digits, nothing more.
        if s.len() < 2 || s.len() > 3 {
            return Err(BoardError::InvalidFormat);
        }
        let mut chars = s.chars();
        let letter = chars.next().ok_or(BoardError::InvalidFormat)?;
        if !letter.is_ascii_alphabetic() {
            return Err(BoardError::InvalidFormat);
        }
        let col = (letter.to_ascii_uppercase() as u8 - b'A') as usize;
        if col >= BOARD_SIZE {
            return Err(BoardError::InvalidFormat);
        }
        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(BoardError::InvalidFormat);
        }
        let number: usize = digits.parse().map_err(|_| BoardError::InvalidFormat)?;
        if number < 1 || number > BOARD_SIZE {
            return Err(BoardError::InvalidFormat);
        }
        Ok(Coord {
            col,
            row: number - 1,
        })
    }

    /// 0-based column index (A → 0 … J → 9).
    pub fn col(&self) -> usize {
        self.col
    }

    /// 0-based row index (1 → 0 … 10 → 9).
    pub fn row(&self) -> usize {
        self.row
    }

    /// Flat cell index in row-major order.
    pub(crate) fn index(&self) -> usize {
        self.row * BOARD_SIZE + self.col
    }

    /// Inverse of [`Coord::index`]. Caller guarantees `index < 100`.
    pub(crate) fn from_index(index: usize) -> Self {
        debug_assert!(index < BOARD_SIZE * BOARD_SIZE);
        Coord {
            col: index % BOARD_SIZE,
            row: index / BOARD_SIZE,
        }
    }
}

/// Canonical label form: uppercase letter plus 1-based row number.
impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = (b'A' + self.col as u8) as char;
        write!(f, "{}{}", letter, self.row + 1)
    }
}

impl FromStr for Coord {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Coord::parse(s)
    }
}
