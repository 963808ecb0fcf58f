//! Text front end: reads guesses from a line-based input and reports outcomes.

use std::io::{self, BufRead, Write};

use crate::coordinate::Coordinate;
use crate::game::{GameEvent, GameObserver, TurnHandler, TurnRequest};

/// Console I/O for human players, usable as both turn handler and observer.
///
/// Share one instance between both roles through `Rc<RefCell<_>>`.
pub struct ConsoleIo<R, W> {
    input: R,
    output: W,
    show_own_board: bool,
}

impl ConsoleIo<io::StdinLock<'static>, io::Stdout> {
    /// Console bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleIo<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            show_own_board: false,
        }
    }

    /// Print the human player's own board before each prompt.
    pub fn show_own_board(mut self, show: bool) -> Self {
        self.show_own_board = show;
        self
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Prompt until a line parses as a coordinate. `None` on end of input.
    ///
    /// Lines that are not valid UTF-8 count as unparseable, not as an I/O failure.
    fn prompt_for_guess(&mut self) -> io::Result<Option<Coordinate>> {
        let mut buf = Vec::new();
        loop {
            write!(self.output, "Enter coordinate: ")?;
            self.output.flush()?;
            buf.clear();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                return Ok(None);
            }
            let line = String::from_utf8_lossy(&buf);
            match Coordinate::try_parse(&line) {
                Some(coordinate) => return Ok(Some(coordinate)),
                None => writeln!(self.output, "Invalid coordinate")?,
            }
        }
    }

    fn report(&mut self, event: &GameEvent) -> io::Result<()> {
        match event {
            GameEvent::GuessOutOfBounds { .. } => writeln!(self.output, "Invalid coordinate"),
            GameEvent::Miss { .. } => writeln!(self.output, "Miss"),
            GameEvent::Hit { .. } => writeln!(self.output, "Hit"),
            GameEvent::ShipSunk { ship, .. } => writeln!(self.output, "Sunk {}", ship),
            GameEvent::PlayerWon { player } => writeln!(self.output, "Player {} wins", player),
            GameEvent::GameOver => writeln!(self.output, "Game over"),
        }
    }
}

impl<R: BufRead, W: Write> TurnHandler for ConsoleIo<R, W> {
    fn request_guess(&mut self, request: &mut TurnRequest<'_>) -> Option<Coordinate> {
        if self.show_own_board {
            if let Some(board) = request.player().board() {
                if let Err(err) = write!(self.output, "{}", board) {
                    log::warn!("failed to draw board: {}", err);
                }
            }
        }
        match self.prompt_for_guess() {
            Ok(guess) => guess,
            Err(err) => {
                log::warn!("console input failed: {}", err);
                None
            }
        }
    }
}

impl<R: BufRead, W: Write> GameObserver for ConsoleIo<R, W> {
    fn on_event(&mut self, event: &GameEvent) {
        if let Err(err) = self.report(event) {
            log::warn!("console output failed: {}", err);
        }
    }
}
