use crate::ship::ShipType;

pub const BOARD_SIZE: usize = 10;
pub const NUM_SHIPS: usize = 5;
pub const SHIPS: [ShipType; NUM_SHIPS] = [
    ShipType::new("Carrier", 5),
    ShipType::new("Battleship", 4),
    ShipType::new("Cruiser", 3),
    ShipType::new("Submarine", 3),
    ShipType::new("Destroyer", 2),
];

/// Ships a side must lose before the game ends. The classic console rules
/// say "sink the whole fleet", but the observed behavior ends the game on
/// the first sinking; the threshold stays a parameter so callers pick.
pub const DEFAULT_SHIPS_TO_LOSE: usize = 1;

/// Retry cap per ship during random placement. Rejection sampling on a
/// 10×10 board converges within a handful of draws; exhausting this many
/// attempts means setup must abort instead of spinning.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 5000;
