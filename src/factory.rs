//! Builds fleets, boards, players and games from a [`GameConfig`].

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::board::Board;
use crate::common::{ConfigError, PlacementError};
use crate::config::{BoardSize, GameConfig, PlayerType};
use crate::game::Game;
use crate::placement::ShipPlacementStrategy;
use crate::player::Player;
use crate::player_ai::ComputerPlayer;
use crate::ship::{Ship, ShipType};

/// Fresh, unplaced ships in the order given.
pub fn create_fleet(types: &[ShipType]) -> Vec<Ship> {
    types.iter().map(|t| t.create()).collect()
}

/// A `width` x `height` board with the fleet placed by `strategy`.
pub fn create_board(
    width: u32,
    height: u32,
    types: &[ShipType],
    strategy: &mut dyn ShipPlacementStrategy,
) -> Result<Board, PlacementError> {
    let mut board = Board::new(width, height);
    strategy.place_ships(&mut board, create_fleet(types))?;
    Ok(board)
}

/// Players for every configured slot, numbered from 1.
///
/// A slot's board is built before its player type is checked. Computer players
/// get their own generator seeded from `rng`.
pub fn create_players<R: Rng + ?Sized>(
    config: &GameConfig,
    strategy: &mut dyn ShipPlacementStrategy,
    rng: &mut R,
) -> Result<Vec<Player>, ConfigError> {
    if config.number_of_players == 0 {
        return Err(ConfigError::NoPlayers);
    }

    let mut players = Vec::with_capacity(config.number_of_players as usize);
    for number in 1..=config.number_of_players {
        let board = match config.board_sizes.get(&number) {
            Some(&size) => {
                let BoardSize { width, height } = size.validate()?;
                let fleet = config
                    .fleet(number)?
                    .ok_or(ConfigError::MissingShipTypes(number))?;
                Some(create_board(width, height, &fleet, strategy)?)
            }
            None => None,
        };

        let player = match config.player_type(number)? {
            PlayerType::Human => Player::human(number, board),
            PlayerType::Computer => {
                let brain = ComputerPlayer::new(SmallRng::seed_from_u64(rng.random()));
                Player::computer(number, board, brain)
            }
        };
        log::debug!(
            "created {} ({}, board: {})",
            player,
            if player.is_human() { "human" } else { "computer" },
            player.has_board()
        );
        players.push(player);
    }
    Ok(players)
}

/// A ready-to-start game for `config`.
pub fn create_game<R: Rng + ?Sized>(
    config: &GameConfig,
    strategy: &mut dyn ShipPlacementStrategy,
    rng: &mut R,
) -> Result<Game, ConfigError> {
    let players = create_players(config, strategy, rng)?;
    Ok(Game::new(players)?)
}
