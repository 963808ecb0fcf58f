//! Common types for Battleships: error enums and guess results.

use core::fmt;

use crate::coordinate::Coordinate;

/// Result of responding to a single guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessResult {
    /// Guess missed every ship.
    Miss,
    /// Guess hit a ship that is still afloat.
    Hit,
    /// Guess hit a ship and sank it, carrying its name.
    Sink(String),
}

impl GuessResult {
    /// `true` for both [`GuessResult::Hit`] and [`GuessResult::Sink`].
    pub fn is_hit(&self) -> bool {
        !matches!(self, GuessResult::Miss)
    }
}

/// Errors returned when parsing coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoordinateError {
    /// Text is not a letter followed by a positive row number.
    InvalidFormat(String),
}

impl fmt::Display for CoordinateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordinateError::InvalidFormat(s) => write!(f, "'{}' is not a valid coordinate", s),
        }
    }
}

impl std::error::Error for CoordinateError {}

/// Errors returned by Ship operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShipError {
    /// Coordinates have the wrong length or are not a contiguous run.
    InvalidPlacement,
    /// Ship has not been placed on a board yet.
    NotPlaced,
    /// Ship does not currently occupy the coordinate.
    CoordinateNotOccupied(Coordinate),
}

impl fmt::Display for ShipError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShipError::InvalidPlacement => write!(
                f,
                "coordinates must match the ship length and run contiguously along its orientation"
            ),
            ShipError::NotPlaced => write!(f, "ship has not been placed"),
            ShipError::CoordinateNotOccupied(c) => write!(f, "ship does not occupy {}", c),
        }
    }
}

impl std::error::Error for ShipError {}

/// Errors returned by Board operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Attempted to place a ship that is already on this board.
    AlreadyPlaced,
    /// Placement leaves the board or overlaps another ship.
    IllegalPosition,
    /// Ship rejected the derived coordinates.
    Ship(ShipError),
}

impl From<ShipError> for BoardError {
    fn from(err: ShipError) -> Self {
        BoardError::Ship(err)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::AlreadyPlaced => write!(f, "ship has already been placed on this board"),
            BoardError::IllegalPosition => write!(
                f,
                "one or more coordinates are already occupied or out of bounds"
            ),
            BoardError::Ship(e) => write!(f, "ship error: {}", e),
        }
    }
}

impl std::error::Error for BoardError {}

/// Errors returned by placement strategies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    /// No legal position remains for the named ship.
    NoLegalPosition { ship: String },
    /// Committing the chosen position failed.
    Board(BoardError),
}

impl From<BoardError> for PlacementError {
    fn from(err: BoardError) -> Self {
        PlacementError::Board(err)
    }
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::NoLegalPosition { ship } => {
                write!(f, "no remaining legal position for {}", ship)
            }
            PlacementError::Board(e) => write!(f, "board error: {}", e),
        }
    }
}

impl std::error::Error for PlacementError {}

/// Errors returned by Player operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerError {
    /// Player has no board to be targeted.
    NoBoard,
    /// Registering the hit failed.
    Ship(ShipError),
}

impl From<ShipError> for PlayerError {
    fn from(err: ShipError) -> Self {
        PlayerError::Ship(err)
    }
}

impl fmt::Display for PlayerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerError::NoBoard => write!(f, "player does not have a board"),
            PlayerError::Ship(e) => write!(f, "ship error: {}", e),
        }
    }
}

impl std::error::Error for PlayerError {}

/// Errors returned while creating or running a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Fewer than two players were supplied; carries the count.
    TooFewPlayers(usize),
    /// A human player needs a guess but no turn handler is registered.
    NoHandlerWired,
    /// The game has already finished and cannot be restarted.
    AlreadyOver,
    /// A full round passed without any player able to target anyone.
    NoTargets,
    /// Responding to a guess failed.
    Player(PlayerError),
}

impl From<PlayerError> for GameError {
    fn from(err: PlayerError) -> Self {
        GameError::Player(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::TooFewPlayers(n) => {
                write!(f, "at least two players are required, got {}", n)
            }
            GameError::NoHandlerWired => write!(
                f,
                "unable to request human player input; no turn handler has been registered"
            ),
            GameError::AlreadyOver => write!(f, "game is already over"),
            GameError::NoTargets => write!(f, "no player has an opponent that can be targeted"),
            GameError::Player(e) => write!(f, "player error: {}", e),
        }
    }
}

impl std::error::Error for GameError {}

/// Errors returned while building a game from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Configuration declares no players at all.
    NoPlayers,
    /// Player slot has no declared type.
    MissingPlayerType(u32),
    /// Player slot has board dimensions but no ship types.
    MissingShipTypes(u32),
    /// Unknown player type tag.
    UnsupportedPlayerType(String),
    /// Unknown ship type tag.
    UnsupportedShipType(String),
    /// Board dimensions must be 1..=26 columns and at least one row.
    InvalidBoardSize { width: u32, height: u32 },
    /// Fleet could not be placed.
    Placement(PlacementError),
    /// Game could not be created.
    Game(GameError),
}

impl From<PlacementError> for ConfigError {
    fn from(err: PlacementError) -> Self {
        ConfigError::Placement(err)
    }
}

impl From<GameError> for ConfigError {
    fn from(err: GameError) -> Self {
        ConfigError::Game(err)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NoPlayers => write!(f, "configuration declares no players"),
            ConfigError::MissingPlayerType(n) => {
                write!(f, "no player type was specified for player {}", n)
            }
            ConfigError::MissingShipTypes(n) => write!(
                f,
                "a board was specified for player {} but no ships were specified",
                n
            ),
            ConfigError::UnsupportedPlayerType(t) => write!(f, "unsupported player type '{}'", t),
            ConfigError::UnsupportedShipType(t) => write!(f, "unsupported ship type '{}'", t),
            ConfigError::InvalidBoardSize { width, height } => {
                write!(f, "invalid board size {}x{}", width, height)
            }
            ConfigError::Placement(e) => write!(f, "placement error: {}", e),
            ConfigError::Game(e) => write!(f, "game error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}
