//! Game participants: a numbered player with an optional board and a kind
//! that decides how guesses are produced.

use core::fmt;

use crate::board::Board;
use crate::common::{GameError, GuessResult, PlayerError};
use crate::coordinate::Coordinate;
use crate::player_ai::ComputerPlayer;

/// How a player produces guesses.
#[derive(Debug, Clone)]
pub enum PlayerKind {
    /// Guesses come from outside the engine through a turn handler.
    Human,
    /// Guesses are chosen internally.
    Computer(ComputerPlayer),
}

/// A participant in a game.
///
/// A player without a board can still fire at others but can never be targeted.
#[derive(Debug, Clone)]
pub struct Player {
    number: u32,
    board: Option<Board>,
    kind: PlayerKind,
}

impl Player {
    pub fn new(number: u32, board: Option<Board>, kind: PlayerKind) -> Self {
        Self {
            number,
            board,
            kind,
        }
    }

    pub fn human(number: u32, board: Option<Board>) -> Self {
        Self::new(number, board, PlayerKind::Human)
    }

    pub fn computer(number: u32, board: Option<Board>, brain: ComputerPlayer) -> Self {
        Self::new(number, board, PlayerKind::Computer(brain))
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    pub fn kind(&self) -> &PlayerKind {
        &self.kind
    }

    pub fn has_board(&self) -> bool {
        self.board.is_some()
    }

    pub fn is_human(&self) -> bool {
        matches!(self.kind, PlayerKind::Human)
    }

    /// Produce this player's next guess against `opponent`.
    ///
    /// Human players defer to `ask_human`, which receives this player and the
    /// opponent. Computer players decide on their own. `Ok(None)` means no guess
    /// is forthcoming and the game should stop.
    pub fn make_guess<F>(
        &mut self,
        opponent: &Player,
        ask_human: F,
    ) -> Result<Option<Coordinate>, GameError>
    where
        F: FnOnce(&Player, &Player) -> Result<Option<Coordinate>, GameError>,
    {
        if let PlayerKind::Computer(brain) = &mut self.kind {
            return Ok(brain.choose_guess(opponent));
        }
        ask_human(&*self, opponent)
    }

    /// Resolve an incoming guess against this player's board.
    ///
    /// A guess on a cell that was already hit reports [`GuessResult::Hit`]
    /// again without registering more damage.
    pub fn respond_to_guess(&mut self, guess: Coordinate) -> Result<GuessResult, PlayerError> {
        let board = self.board.as_mut().ok_or(PlayerError::NoBoard)?;
        let Some(ship) = board.get_ship_at_mut(guess) else {
            return Ok(GuessResult::Miss);
        };
        if ship.hits().contains(&guess) {
            log::debug!("{} re-guessed hit cell {}", ship.name(), guess);
            return Ok(GuessResult::Hit);
        }
        ship.register_hit(guess)?;
        if ship.is_sunk() {
            Ok(GuessResult::Sink(ship.name().to_string()))
        } else {
            Ok(GuessResult::Hit)
        }
    }

    /// Unsunk ships left; zero without a board.
    pub fn count_ships_remaining(&self) -> usize {
        self.board.as_ref().map_or(0, Board::ships_remaining)
    }

    /// Owns a board and has nothing left afloat on it.
    pub fn is_eliminated(&self) -> bool {
        self.has_board() && self.count_ships_remaining() == 0
    }

    /// Tell the player how its guess against player `opponent` turned out.
    pub fn handle_guess_result(&mut self, opponent: u32, guess: Coordinate, result: &GuessResult) {
        if let PlayerKind::Computer(brain) = &mut self.kind {
            brain.handle_guess_result(opponent, guess, result);
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.number)
    }
}
