//! Commonly used types and utilities for ease of import.

pub use crate::console::ConsoleIo;
pub use crate::factory::{create_board, create_fleet, create_game, create_players};
pub use crate::{
    Board, ComputerPlayer, Coordinate, Game, GameConfig, GameControl, GameEvent, GameObserver, GameState,
    GuessResult, Orientation, Player, PlayerKind, RandomShipPlacement, Ship,
    ShipPlacementStrategy, ShipType, TurnHandler, TurnRequest,
};
