use rand::rngs::SmallRng;

use crate::coord::Coord;
use crate::game::Game;

/// Interface implemented by different player types.
pub trait Player {
    /// Choose the next target on the opponent's grid. `game` is read-only:
    /// implementations may inspect state to drive prompts or displays, but
    /// never mutate it.
    fn select_target(&mut self, rng: &mut SmallRng, game: &Game) -> Coord;
}
