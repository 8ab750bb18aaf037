//! Grid state: a fully populated 10×10 field of cells, ship placement and
//! attack resolution.

use crate::common::{AttackResult, BoardError};
use crate::config::BOARD_SIZE;
use crate::coord::Coord;
use crate::ship::Orientation;

/// A single board position. Water until a ship segment is placed on it;
/// `hit` only ever goes from false to true.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    coord: Coord,
    occupant: Option<&'static str>,
    hit: bool,
}

impl Cell {
    /// The cell's own position, fixed at grid creation.
    pub fn coord(&self) -> Coord {
        self.coord
    }

    /// Name of the ship occupying this cell, or `None` for water.
    pub fn occupant(&self) -> Option<&'static str> {
        self.occupant
    }

    /// Whether this cell has been attacked.
    pub fn is_hit(&self) -> bool {
        self.hit
    }
}

/// A 10×10 field of cells, row-major. Every coordinate resolves to a cell
/// from creation onward; placement retags cells in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [Cell; BOARD_SIZE * BOARD_SIZE],
}

impl Grid {
    /// Create a grid of 100 water cells, each tagged with its coordinate.
    pub fn new() -> Self {
        let cells = core::array::from_fn(|i| Cell {
            coord: Coord::from_index(i),
            occupant: None,
            hit: false,
        });
        Grid { cells }
    }

    /// Look up the cell at a validated coordinate.
    pub fn cell_at(&self, coord: Coord) -> &Cell {
        &self.cells[coord.index()]
    }

    /// Bounds-checked lookup from raw indices, for callers that have not
    /// gone through [`Coord`] validation.
    pub fn cell(&self, col: usize, row: usize) -> Result<&Cell, BoardError> {
        let coord = Coord::new(col, row)?;
        Ok(self.cell_at(coord))
    }

    /// Iterate over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Iterate over the cells occupied by the named ship.
    pub fn ship_cells<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Cell> + 'a {
        self.cells
            .iter()
            .filter(move |c| c.occupant.is_some_and(|n| n == name))
    }

    /// Occupy `length` contiguous cells starting at `origin`, extending
    /// right when horizontal and down when vertical. Rejection is
    /// all-or-nothing: no cell changes unless every target is in bounds
    /// and unoccupied.
    pub fn place_ship(
        &mut self,
        origin: Coord,
        length: usize,
        orientation: Orientation,
        name: &'static str,
    ) -> Result<(), BoardError> {
        let (col, row) = (origin.col(), origin.row());
        match orientation {
            Orientation::Horizontal if col + length > BOARD_SIZE => {
                return Err(BoardError::ShipOutOfBounds)
            }
            Orientation::Vertical if row + length > BOARD_SIZE => {
                return Err(BoardError::ShipOutOfBounds)
            }
            _ => {}
        }
        let segment = |i: usize| match orientation {
            Orientation::Horizontal => row * BOARD_SIZE + col + i,
            Orientation::Vertical => (row + i) * BOARD_SIZE + col,
        };
        if (0..length).any(|i| self.cells[segment(i)].occupant.is_some()) {
            return Err(BoardError::ShipOverlaps);
        }
        for i in 0..length {
            self.cells[segment(i)].occupant = Some(name);
        }
        Ok(())
    }

    /// Resolve an attack on `target`, marking the cell hit and reporting
    /// what happened. Repeat attacks leave the grid untouched.
    pub fn attack(&mut self, target: Coord) -> AttackResult {
        let idx = target.index();
        if self.cells[idx].hit {
            return AttackResult::AlreadyHit;
        }
        self.cells[idx].hit = true;
        match self.cells[idx].occupant {
            None => AttackResult::Miss,
            Some(name) => {
                if self.is_ship_sunk(name) {
                    AttackResult::Sunk(name)
                } else {
                    AttackResult::Hit(name)
                }
            }
        }
    }

    /// A ship is sunk when every cell carrying its name has been hit.
    /// Recomputed from the cells each time rather than cached.
    pub fn is_ship_sunk(&self, name: &str) -> bool {
        let mut segments = self
            .cells
            .iter()
            .filter(|c| c.occupant.is_some_and(|n| n == name));
        segments.all(|c| c.hit)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
