//! Game setup: who plays, on what boards, with which fleets.

use core::fmt;
use core::str::FromStr;
use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::common::ConfigError;
use crate::ship::ShipType;

pub const DEFAULT_BOARD_WIDTH: u32 = 10;
pub const DEFAULT_BOARD_HEIGHT: u32 = 10;
pub const DEFAULT_FLEET: [ShipType; 3] = [
    ShipType::Battleship,
    ShipType::Destroyer,
    ShipType::Destroyer,
];

/// Widest board addressable with single-letter columns.
pub const MAX_BOARD_WIDTH: u32 = 26;

/// Whether a player slot is driven by a person or by the computer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerType {
    Human,
    Computer,
}

impl PlayerType {
    pub const fn tag(self) -> &'static str {
        match self {
            PlayerType::Human => "human",
            PlayerType::Computer => "computer",
        }
    }
}

impl FromStr for PlayerType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(PlayerType::Human),
            "computer" => Ok(PlayerType::Computer),
            _ => Err(ConfigError::UnsupportedPlayerType(s.to_string())),
        }
    }
}

impl fmt::Display for PlayerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSize {
    pub width: u32,
    pub height: u32,
}

impl BoardSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// At least one row, and 1 to 26 columns.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.width == 0 || self.width > MAX_BOARD_WIDTH || self.height == 0 {
            return Err(ConfigError::InvalidBoardSize {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }
}

/// Per-slot game configuration. Slots are numbered from 1.
///
/// Tags are kept as strings so unknown values surface as [`ConfigError`]s when
/// the game is built rather than as deserialization failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub number_of_players: u32,
    pub player_types: BTreeMap<u32, String>,
    pub board_sizes: BTreeMap<u32, BoardSize>,
    pub ship_types: BTreeMap<u32, Vec<String>>,
}

impl Default for GameConfig {
    /// Player 1 is a human without a board, hunting player 2, a computer with
    /// the default fleet on a 10x10 board.
    fn default() -> Self {
        let mut config = Self::empty(2);
        config.set_player(1, PlayerType::Human, None, &[]);
        config.set_player(
            2,
            PlayerType::Computer,
            Some(BoardSize::new(DEFAULT_BOARD_WIDTH, DEFAULT_BOARD_HEIGHT)),
            &DEFAULT_FLEET,
        );
        config
    }
}

impl GameConfig {
    /// A configuration with `number_of_players` slots and nothing else declared.
    pub fn empty(number_of_players: u32) -> Self {
        Self {
            number_of_players,
            player_types: BTreeMap::new(),
            board_sizes: BTreeMap::new(),
            ship_types: BTreeMap::new(),
        }
    }

    /// Human player 1 against computer player 2, both with the default fleet.
    pub fn versus_computer(width: u32, height: u32) -> Self {
        Self::symmetric([PlayerType::Human, PlayerType::Computer], width, height)
    }

    /// Two computer players with the default fleet.
    pub fn computer_vs_computer(width: u32, height: u32) -> Self {
        Self::symmetric([PlayerType::Computer, PlayerType::Computer], width, height)
    }

    fn symmetric(types: [PlayerType; 2], width: u32, height: u32) -> Self {
        let mut config = Self::empty(2);
        for (number, player_type) in (1..).zip(types) {
            config.set_player(
                number,
                player_type,
                Some(BoardSize::new(width, height)),
                &DEFAULT_FLEET,
            );
        }
        config
    }

    /// Declare slot `number`. An empty fleet leaves the ship list undeclared.
    pub fn set_player(
        &mut self,
        number: u32,
        player_type: PlayerType,
        board: Option<BoardSize>,
        fleet: &[ShipType],
    ) -> &mut Self {
        self.player_types.insert(number, player_type.tag().to_string());
        if let Some(size) = board {
            self.board_sizes.insert(number, size);
        }
        if !fleet.is_empty() {
            self.ship_types
                .insert(number, fleet.iter().map(|t| t.name().to_string()).collect());
        }
        self
    }

    /// Parsed player type for slot `number`.
    pub fn player_type(&self, number: u32) -> Result<PlayerType, ConfigError> {
        self.player_types
            .get(&number)
            .ok_or(ConfigError::MissingPlayerType(number))?
            .parse()
    }

    /// Parsed fleet for slot `number`, `None` if the slot declares no ships.
    pub fn fleet(&self, number: u32) -> Result<Option<Vec<ShipType>>, ConfigError> {
        self.ship_types
            .get(&number)
            .map(|tags| tags.iter().map(|t| t.parse()).collect())
            .transpose()
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Read a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_json(&text)?;
        log::info!("loaded configuration from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_type_tags_are_case_insensitive() {
        assert_eq!("Computer".parse::<PlayerType>().unwrap(), PlayerType::Computer);
        assert_eq!(" HUMAN ".parse::<PlayerType>().unwrap(), PlayerType::Human);
    }

    #[test]
    fn board_size_rejects_wide_boards() {
        assert!(BoardSize::new(26, 1).validate().is_ok());
        assert_eq!(
            BoardSize::new(27, 10).validate(),
            Err(ConfigError::InvalidBoardSize {
                width: 27,
                height: 10
            })
        );
    }
}
