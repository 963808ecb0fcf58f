use std::cell::RefCell;
use std::io::Cursor;
use std::rc::Rc;

use battleships::console::ConsoleIo;
use battleships::{
    Board, Coordinate, Game, GameEvent, GameObserver, Orientation, Player, ShipType, TurnHandler,
};

type TestConsole = ConsoleIo<Cursor<Vec<u8>>, Vec<u8>>;

fn console(input: &str) -> TestConsole {
    ConsoleIo::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

fn output(console: &TestConsole) -> String {
    String::from_utf8(console.output().clone()).unwrap()
}

fn destroyer_board() -> Board {
    let mut board = Board::new(10, 10);
    board
        .place_ship(ShipType::Destroyer.create(), Coordinate::new('B', 2), Orientation::Horizontal)
        .unwrap();
    board
}

#[test]
fn test_reports_events() {
    let mut io = console("");
    for event in [
        GameEvent::GuessOutOfBounds { player: 1, guess: Coordinate::new('Z', 1) },
        GameEvent::Miss { player: 1, target: 2, guess: Coordinate::new('A', 1) },
        GameEvent::Hit { player: 1, target: 2, guess: Coordinate::new('B', 2) },
        GameEvent::ShipSunk { player: 1, target: 2, ship: "Destroyer".into() },
        GameEvent::PlayerWon { player: 1 },
        GameEvent::GameOver,
    ] {
        io.on_event(&event);
    }
    assert_eq!(
        output(&io),
        "Invalid coordinate\nMiss\nHit\nSunk Destroyer\nPlayer 1 wins\nGame over\n"
    );
}

#[test]
fn test_reprompts_until_input_parses() {
    let io = Rc::new(RefCell::new(console("nonsense\n\nA0\n c2 \n")));
    let mut game = Game::new(vec![
        Player::human(1, None),
        Player::human(2, Some(destroyer_board())),
    ])
    .unwrap();
    game.set_turn_handler(Rc::clone(&io));
    game.add_observer(Rc::clone(&io));

    // Input runs out on the second turn, which ends the game.
    game.start().unwrap();

    assert_eq!(game.turns(), 1);
    let text = output(&io.borrow());
    assert_eq!(
        text,
        "Enter coordinate: Invalid coordinate\n\
         Enter coordinate: Invalid coordinate\n\
         Enter coordinate: Invalid coordinate\n\
         Enter coordinate: Hit\n\
         Enter coordinate: Game over\n"
    );
}

#[test]
fn test_non_utf8_line_is_reprompted() {
    let io = Rc::new(RefCell::new(ConsoleIo::new(
        Cursor::new(b"\xff\nA1\n".to_vec()),
        Vec::new(),
    )));
    let mut game = Game::new(vec![
        Player::human(1, None),
        Player::human(2, Some(destroyer_board())),
    ])
    .unwrap();
    game.set_turn_handler(Rc::clone(&io));
    game.add_observer(Rc::clone(&io));
    game.start().unwrap();

    assert_eq!(game.turns(), 1);
    assert!(output(&io.borrow()).starts_with(
        "Enter coordinate: Invalid coordinate\nEnter coordinate: Miss\n"
    ));
}

#[test]
fn test_full_console_game() {
    let io = Rc::new(RefCell::new(console("A1\nK1\nB2\nC2\nD2\nE2\n")));
    let mut game = Game::new(vec![
        Player::human(1, None),
        Player::human(2, Some(destroyer_board())),
    ])
    .unwrap();
    game.set_turn_handler(Rc::clone(&io));
    game.add_observer(Rc::clone(&io));
    game.start().unwrap();

    assert_eq!(game.winner().map(Player::number), Some(1));
    let text = output(&io.borrow());
    assert!(text.ends_with("Hit\nSunk Destroyer\nPlayer 1 wins\nGame over\n"), "{text}");
    assert!(text.contains("Enter coordinate: Miss\n"));
    assert!(text.contains("Enter coordinate: Invalid coordinate\nEnter coordinate: Hit\n"));
}

#[test]
fn test_eof_yields_no_guess() {
    let mut io = console("");
    let mut game = Game::new(vec![
        Player::human(1, None),
        Player::human(2, Some(destroyer_board())),
    ])
    .unwrap();
    // Drive the handler directly through a game turn.
    let answered = Rc::new(RefCell::new(Vec::new()));
    let seen = Rc::clone(&answered);
    game.set_turn_handler(move |req: &mut battleships::TurnRequest<'_>| {
        let guess = io.request_guess(req);
        seen.borrow_mut().push(guess);
        guess
    });
    game.start().unwrap();
    assert_eq!(*answered.borrow(), vec![None]);
}

#[test]
fn test_shows_own_board_when_asked() {
    let io = Rc::new(RefCell::new(console("J10\n").show_own_board(true)));
    let mut game = Game::new(vec![
        Player::human(1, Some(destroyer_board())),
        Player::human(2, Some(destroyer_board())),
    ])
    .unwrap();
    game.set_turn_handler(Rc::clone(&io));
    game.start().unwrap();
    let text = output(&io.borrow());
    assert!(text.starts_with("    A B C D E F G H I J\n"), "{text}");
    assert!(text.contains("  2 . D D D D . . . . .\n"), "{text}");
}
