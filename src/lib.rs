#![cfg_attr(not(feature = "std"), no_std)]

mod common;
mod config;
mod coord;
mod fleet;
mod game;
mod grid;
#[cfg(feature = "std")]
mod logging;
mod player;
mod player_ai;
#[cfg(feature = "std")]
mod player_cli;
mod ship;

pub use common::*;
pub use config::*;
pub use coord::*;
pub use fleet::*;
pub use game::*;
pub use grid::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use player::*;
pub use player_ai::*;
#[cfg(feature = "std")]
pub use player_cli::*;
pub use ship::*;
