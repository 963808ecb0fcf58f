//! Turn sequencing, win detection and outcome notification.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::mpsc::Sender;

use crate::common::{GameError, GuessResult};
use crate::coordinate::Coordinate;
use crate::player::Player;

/// Lifecycle of a game. `Over` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    NotStarted,
    Running,
    Over,
}

/// Outcome notifications, in the order the turn loop produces them.
///
/// Player fields carry player numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A human guess fell outside the opponent's board; the player is asked again.
    GuessOutOfBounds { player: u32, guess: Coordinate },
    Miss {
        player: u32,
        target: u32,
        guess: Coordinate,
    },
    Hit {
        player: u32,
        target: u32,
        guess: Coordinate,
    },
    /// Always follows the `Hit` that sank the ship.
    ShipSunk {
        player: u32,
        target: u32,
        ship: String,
    },
    PlayerWon { player: u32 },
    /// Sent once when [`Game::start`] finishes.
    GameOver,
}

/// Receives game notifications.
pub trait GameObserver {
    fn on_event(&mut self, event: &GameEvent);
}

impl<F: FnMut(&GameEvent)> GameObserver for F {
    fn on_event(&mut self, event: &GameEvent) {
        self(event)
    }
}

/// Forwards every event down a channel. A dropped receiver is ignored.
impl GameObserver for Sender<GameEvent> {
    fn on_event(&mut self, event: &GameEvent) {
        let _ = self.send(event.clone());
    }
}

impl<T: GameObserver> GameObserver for Rc<RefCell<T>> {
    fn on_event(&mut self, event: &GameEvent) {
        self.borrow_mut().on_event(event)
    }
}

/// Shared stop switch for a running game.
///
/// Obtained from [`Game::control`] and usually moved into an observer, so a host
/// can stop a game that has no human turns. The request takes effect once the
/// current turn has been resolved.
#[derive(Debug, Clone, Default)]
pub struct GameControl {
    stop: Rc<Cell<bool>>,
}

impl GameControl {
    pub fn end_game(&self) {
        self.stop.set(true);
    }

    pub fn end_requested(&self) -> bool {
        self.stop.get()
    }
}

/// A human player's turn, handed to the [`TurnHandler`].
pub struct TurnRequest<'a> {
    player: &'a Player,
    opponent: &'a Player,
    end_requested: bool,
}

impl<'a> TurnRequest<'a> {
    /// The human player whose guess is wanted.
    pub fn player(&self) -> &'a Player {
        self.player
    }

    /// The player being fired at.
    pub fn opponent(&self) -> &'a Player {
        self.opponent
    }

    /// Stop the game once this turn's guess has been resolved.
    pub fn end_game(&mut self) {
        self.end_requested = true;
    }
}

/// Supplies guesses for human players.
pub trait TurnHandler {
    /// Return the guess, or `None` when no more input will come. The engine
    /// keeps asking while the guess is outside the opponent's board.
    fn request_guess(&mut self, request: &mut TurnRequest<'_>) -> Option<Coordinate>;
}

impl<F> TurnHandler for F
where
    F: FnMut(&mut TurnRequest<'_>) -> Option<Coordinate>,
{
    fn request_guess(&mut self, request: &mut TurnRequest<'_>) -> Option<Coordinate> {
        self(request)
    }
}

impl<T: TurnHandler> TurnHandler for Rc<RefCell<T>> {
    fn request_guess(&mut self, request: &mut TurnRequest<'_>) -> Option<Coordinate> {
        self.borrow_mut().request_guess(request)
    }
}

/// A game between two or more players.
pub struct Game {
    players: Vec<Player>,
    current: Option<usize>,
    state: GameState,
    winner: Option<usize>,
    turns: usize,
    turn_handler: Option<Box<dyn TurnHandler>>,
    observers: Vec<Box<dyn GameObserver>>,
    control: GameControl,
}

impl Game {
    /// Create a game. Fails with [`GameError::TooFewPlayers`] for fewer than two players.
    pub fn new(players: Vec<Player>) -> Result<Self, GameError> {
        if players.len() < 2 {
            return Err(GameError::TooFewPlayers(players.len()));
        }
        Ok(Self {
            players,
            current: None,
            state: GameState::NotStarted,
            winner: None,
            turns: 0,
            turn_handler: None,
            observers: Vec::new(),
            control: GameControl::default(),
        })
    }

    /// Set the source of human guesses, replacing any previous one.
    pub fn set_turn_handler(&mut self, handler: impl TurnHandler + 'static) {
        self.turn_handler = Some(Box::new(handler));
    }

    pub fn add_observer(&mut self, observer: impl GameObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Look a player up by number.
    pub fn player(&self, number: u32) -> Option<&Player> {
        self.players.iter().find(|p| p.number() == number)
    }

    /// Player whose turn it is, or was when the game stopped.
    pub fn current_player(&self) -> Option<&Player> {
        self.current.map(|idx| &self.players[idx])
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_over(&self) -> bool {
        self.state == GameState::Over
    }

    pub fn winner(&self) -> Option<&Player> {
        self.winner.map(|idx| &self.players[idx])
    }

    /// Guesses resolved so far.
    pub fn turns(&self) -> usize {
        self.turns
    }

    /// Handle for stopping the game from inside an observer while [`Game::start`] runs.
    pub fn control(&self) -> GameControl {
        self.control.clone()
    }

    /// Force the game over.
    pub fn end_game(&mut self) {
        log::info!("game ended externally");
        self.state = GameState::Over;
    }

    /// Run whole rounds until a player wins, the game is ended, or human input runs dry.
    ///
    /// Errors leave the game `Running`, so a missing turn handler can be wired
    /// and the game started again. A restart resumes with the interrupted turn.
    pub fn start(&mut self) -> Result<(), GameError> {
        if self.state == GameState::Over {
            return Err(GameError::AlreadyOver);
        }
        let mut first = match (self.state, self.current) {
            (GameState::Running, Some(idx)) => {
                log::info!("resuming game at {}", self.players[idx]);
                idx
            }
            _ => {
                log::info!("starting game with {} players", self.players.len());
                0
            }
        };
        self.state = GameState::Running;

        while self.state != GameState::Over {
            let mut guessed = false;
            let partial_round = first > 0;
            for idx in first..self.players.len() {
                self.current = Some(idx);
                if self.players[idx].is_eliminated() {
                    log::debug!("{} is eliminated, skipping", self.players[idx]);
                    continue;
                }
                let Some(opponent) = self.next_opponent(idx) else {
                    continue;
                };
                if !self.players[opponent].has_board() {
                    log::debug!(
                        "{} has no board to target, skipping {}",
                        self.players[opponent],
                        self.players[idx]
                    );
                    continue;
                }
                guessed = true;
                self.take_turn(idx, opponent)?;
                if self.state == GameState::Over {
                    break;
                }
            }
            first = 0;
            if !guessed && !partial_round && self.state != GameState::Over {
                log::warn!("a full round passed without any guess");
                return Err(GameError::NoTargets);
            }
        }

        log::info!("game over after {} guesses", self.turns);
        self.notify(GameEvent::GameOver);
        Ok(())
    }

    /// Next player after `idx` in cyclic order that is still in the game.
    fn next_opponent(&self, idx: usize) -> Option<usize> {
        let n = self.players.len();
        (1..n)
            .map(|offset| (idx + offset) % n)
            .find(|&i| !self.players[i].is_eliminated())
    }

    fn take_turn(&mut self, idx: usize, opponent: usize) -> Result<(), GameError> {
        let mut end_requested = false;
        let guess = {
            let (current, target) = pair_mut(&mut self.players, idx, opponent);
            let handler = &mut self.turn_handler;
            let observers = &mut self.observers;
            current.make_guess(target, |human, target| {
                request_human_guess(handler, observers, human, target, &mut end_requested)
            })?
        };

        let Some(guess) = guess else {
            log::info!("{} produced no guess, stopping", self.players[idx]);
            self.state = GameState::Over;
            return Ok(());
        };

        let player = self.players[idx].number();
        let target = self.players[opponent].number();
        let result = self.players[opponent].respond_to_guess(guess)?;
        self.turns += 1;
        log::debug!("{} fired at {} {}: {:?}", self.players[idx], self.players[opponent], guess, result);
        self.players[idx].handle_guess_result(target, guess, &result);

        match result {
            GuessResult::Miss => self.notify(GameEvent::Miss {
                player,
                target,
                guess,
            }),
            GuessResult::Hit => self.notify(GameEvent::Hit {
                player,
                target,
                guess,
            }),
            GuessResult::Sink(ship) => {
                self.notify(GameEvent::Hit {
                    player,
                    target,
                    guess,
                });
                self.notify(GameEvent::ShipSunk {
                    player,
                    target,
                    ship,
                });
                self.check_winner(idx);
            }
        }

        if self.state != GameState::Over && (end_requested || self.control.end_requested()) {
            log::info!("stop requested after {} guesses", self.turns);
            self.state = GameState::Over;
        }
        Ok(())
    }

    /// After a sinking, the current player wins once nobody else has ships left.
    fn check_winner(&mut self, idx: usize) {
        let others_sunk = self
            .players
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != idx)
            .all(|(_, p)| p.count_ships_remaining() == 0);
        if others_sunk {
            log::info!("{} wins", self.players[idx]);
            self.state = GameState::Over;
            self.winner = Some(idx);
            let player = self.players[idx].number();
            self.notify(GameEvent::PlayerWon { player });
        }
    }

    fn notify(&mut self, event: GameEvent) {
        notify_all(&mut self.observers, &event);
    }
}

fn notify_all(observers: &mut [Box<dyn GameObserver>], event: &GameEvent) {
    for observer in observers.iter_mut() {
        (**observer).on_event(event);
    }
}

/// Ask the turn handler until it returns a guess inside the target's board.
fn request_human_guess(
    handler: &mut Option<Box<dyn TurnHandler>>,
    observers: &mut [Box<dyn GameObserver>],
    human: &Player,
    target: &Player,
    end_requested: &mut bool,
) -> Result<Option<Coordinate>, GameError> {
    let handler = handler.as_deref_mut().ok_or(GameError::NoHandlerWired)?;
    loop {
        let mut request = TurnRequest {
            player: human,
            opponent: target,
            end_requested: false,
        };
        let guess = handler.request_guess(&mut request);
        *end_requested |= request.end_requested;

        let Some(guess) = guess else {
            return Ok(None);
        };
        if target.board().is_some_and(|b| b.is_coordinate_in_bounds(guess)) {
            return Ok(Some(guess));
        }
        log::warn!("{} guessed {} outside {}'s board", human, guess, target);
        notify_all(
            observers,
            &GameEvent::GuessOutOfBounds {
                player: human.number(),
                guess,
            },
        );
    }
}

/// Mutable access to `players[a]` alongside shared access to `players[b]`.
fn pair_mut(players: &mut [Player], a: usize, b: usize) -> (&mut Player, &Player) {
    debug_assert_ne!(a, b);
    if a < b {
        let (left, right) = players.split_at_mut(b);
        (&mut left[a], &right[0])
    } else {
        let (left, right) = players.split_at_mut(a);
        (&mut right[0], &left[b])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    #[test]
    fn pair_mut_either_order() {
        let mut players = vec![
            Player::human(1, None),
            Player::human(2, Some(Board::new(1, 1))),
            Player::human(3, None),
        ];
        let (a, b) = pair_mut(&mut players, 2, 1);
        assert_eq!((a.number(), b.number()), (3, 2));
        let (a, b) = pair_mut(&mut players, 0, 2);
        assert_eq!((a.number(), b.number()), (1, 3));
    }

    #[test]
    fn next_opponent_skips_eliminated() {
        let mut sunk_board = Board::new(2, 1);
        sunk_board
            .place_ship(
                crate::ship::Ship::new("Buoy", 1),
                Coordinate::new('A', 1),
                crate::ship::Orientation::Horizontal,
            )
            .unwrap();
        let mut sunk = Player::human(2, Some(sunk_board));
        sunk.respond_to_guess(Coordinate::new('A', 1)).unwrap();
        let game = Game::new(vec![
            Player::human(1, None),
            sunk,
            Player::human(3, Some(Board::new(2, 2))),
        ])
        .unwrap();
        assert_eq!(game.next_opponent(0), Some(2));
        assert_eq!(game.next_opponent(2), Some(0));
    }
}
