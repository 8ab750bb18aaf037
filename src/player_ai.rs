use rand::rngs::SmallRng;
use rand::Rng;

use crate::config::BOARD_SIZE;
use crate::coord::Coord;
use crate::game::Game;
use crate::player::Player;

/// Automated player that fires at a uniform-random cell each turn. It
/// keeps no memory of past shots, so it can re-target an already hit cell
/// and waste the turn.
pub struct AiPlayer;

impl AiPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AiPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for AiPlayer {
    fn select_target(&mut self, rng: &mut SmallRng, _game: &Game) -> Coord {
        let col = rng.random_range(0..BOARD_SIZE);
        let row = rng.random_range(0..BOARD_SIZE);
        Coord::from_index(row * BOARD_SIZE + col)
    }
}
