//! Rules engine for a grid-based naval combat game for two or more players.
//!
//! Boards own their ships, players own their boards, and a [`Game`] drives
//! turns until one player has sunk everybody else's fleet.

mod board;
mod common;
mod config;
pub mod console;
mod coordinate;
pub mod factory;
mod game;
mod logging;
mod placement;
mod player;
mod player_ai;
pub mod prelude;
mod ship;

pub use board::*;
pub use common::*;
pub use config::*;
pub use coordinate::*;
pub use game::*;
pub use logging::init_logging;
pub use placement::*;
pub use player::*;
pub use player_ai::*;
pub use ship::*;
