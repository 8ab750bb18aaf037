//! Random fleet placement: rejection sampling over uniform origins.

use rand::Rng;

use crate::common::BoardError;
use crate::config::{BOARD_SIZE, MAX_PLACEMENT_ATTEMPTS};
use crate::coord::Coord;
use crate::grid::Grid;
use crate::ship::{Orientation, ShipType};

/// Place a catalog of ships onto `grid` in order (the standard catalog
/// runs longest first). Each ship draws uniform-random origins until one
/// sticks; a draw tries horizontal when the run fits the row, falls back
/// to vertical when it fits the column, and is otherwise discarded.
pub fn populate_fleet<R: Rng + ?Sized>(
    grid: &mut Grid,
    rng: &mut R,
    catalog: &[ShipType],
) -> Result<(), BoardError> {
    for def in catalog {
        place_one(grid, rng, def)?;
    }
    Ok(())
}

fn place_one<R: Rng + ?Sized>(
    grid: &mut Grid,
    rng: &mut R,
    def: &ShipType,
) -> Result<(), BoardError> {
    let len = def.length();
    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let col = rng.random_range(0..BOARD_SIZE);
        let row = rng.random_range(0..BOARD_SIZE);
        // Coord::new cannot fail for draws below BOARD_SIZE.
        let origin = Coord::new(col, row)?;
        // Horizontal whenever col + len stays short of column J's edge;
        // vertical only as the fallback, under the matching row check.
        // Both checks are one column/row stricter than the board bound,
        // so randomly placed ships never run their far end onto J or 10.
        // The asymmetry and the strict bound match the classic behavior.
        let orientation = if col + len < BOARD_SIZE {
            Orientation::Horizontal
        } else if row + len < BOARD_SIZE {
            Orientation::Vertical
        } else {
            continue;
        };
        match grid.place_ship(origin, len, orientation, def.name()) {
            Ok(()) => return Ok(()),
            Err(BoardError::ShipOverlaps) | Err(BoardError::ShipOutOfBounds) => continue,
            Err(e) => return Err(e),
        }
    }
    Err(BoardError::FatalPlacement { ship: def.name() })
}
