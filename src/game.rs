//! Match state: both grids, destroyed-ship counters and the win condition.

use rand::Rng;

use crate::common::{AttackResult, BoardError};
use crate::config::SHIPS;
use crate::coord::Coord;
use crate::fleet::populate_fleet;
use crate::grid::Grid;

/// The two sides of a match. `Player` is the human seat, `Enemy` the
/// automated one; the engine itself treats them symmetrically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Player,
    Enemy,
}

impl Side {
    /// The side whose grid this side attacks.
    pub fn opponent(&self) -> Side {
        match self {
            Side::Player => Side::Enemy,
            Side::Enemy => Side::Player,
        }
    }
}

/// Game status from the player's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Core match state. Owns both grids; mutated only through attacks.
pub struct Game {
    player_grid: Grid,
    enemy_grid: Grid,
    player_destroyed: usize,
    enemy_destroyed: usize,
    ships_to_lose: usize,
}

impl Game {
    /// Start a match: both fleets placed randomly, counters zeroed. The
    /// game ends once a side has lost `ships_to_lose` ships.
    pub fn new<R: Rng + ?Sized>(rng: &mut R, ships_to_lose: usize) -> Result<Self, BoardError> {
        let mut player_grid = Grid::new();
        let mut enemy_grid = Grid::new();
        populate_fleet(&mut player_grid, rng, &SHIPS)?;
        populate_fleet(&mut enemy_grid, rng, &SHIPS)?;
        Ok(Game {
            player_grid,
            enemy_grid,
            player_destroyed: 0,
            enemy_destroyed: 0,
            ships_to_lose,
        })
    }

    /// The grid owned by `side`.
    pub fn grid(&self, side: Side) -> &Grid {
        match side {
            Side::Player => &self.player_grid,
            Side::Enemy => &self.enemy_grid,
        }
    }

    /// Resolve an attack by `attacker` against the opposing grid and
    /// record the outcome.
    pub fn attack_from(&mut self, attacker: Side, target: Coord) -> AttackResult {
        let result = match attacker {
            Side::Player => self.enemy_grid.attack(target),
            Side::Enemy => self.player_grid.attack(target),
        };
        self.record_outcome(attacker, result);
        result
    }

    /// Bump the defender's destroyed counter when an attack sank a ship.
    pub fn record_outcome(&mut self, attacker: Side, result: AttackResult) {
        if matches!(result, AttackResult::Sunk(_)) {
            match attacker {
                Side::Player => self.enemy_destroyed += 1,
                Side::Enemy => self.player_destroyed += 1,
            }
        }
    }

    /// Ships destroyed so far on `side`'s grid.
    pub fn destroyed(&self, side: Side) -> usize {
        match side {
            Side::Player => self.player_destroyed,
            Side::Enemy => self.enemy_destroyed,
        }
    }

    /// The winning side, once one side's losses reach the threshold.
    /// Attacks resolve one at a time, so both counters can never reach it
    /// in the same instant.
    pub fn winner(&self) -> Option<Side> {
        if self.enemy_destroyed >= self.ships_to_lose {
            Some(Side::Player)
        } else if self.player_destroyed >= self.ships_to_lose {
            Some(Side::Enemy)
        } else {
            None
        }
    }

    /// Evaluate the current status from the player's perspective.
    pub fn status(&self) -> GameStatus {
        match self.winner() {
            Some(Side::Player) => GameStatus::Won,
            Some(Side::Enemy) => GameStatus::Lost,
            None => GameStatus::InProgress,
        }
    }
}
