use battleships::{Board, BoardError, Coordinate, Orientation, Ship, ShipType};

fn at(text: &str) -> Coordinate {
    Coordinate::parse(text).unwrap()
}

#[test]
fn test_place_ship_vertical_occupies_run() -> Result<(), BoardError> {
    let mut board = Board::new(10, 10);
    board.place_ship(ShipType::Destroyer.create(), at("A1"), Orientation::Vertical)?;
    for text in ["A1", "A2", "A3", "A4"] {
        assert!(board.is_coordinate_occupied(at(text)), "{text} should be occupied");
    }
    assert!(!board.is_coordinate_occupied(at("A5")));
    assert!(!board.is_coordinate_occupied(at("B1")));
    assert_eq!(board.ships().len(), 1);
    assert!(board.ships()[0].has_been_placed());
    Ok(())
}

#[test]
fn test_place_ship_out_of_bounds() {
    for (start, orientation) in [
        ("J10", Orientation::Horizontal),
        ("J10", Orientation::Vertical),
        ("G1", Orientation::Horizontal),
        ("A7", Orientation::Vertical),
        ("K1", Orientation::Vertical),
    ] {
        let mut board = Board::new(10, 10);
        let ship = ShipType::Battleship.create();
        assert!(!board.can_place_ship(&ship, at(start), orientation));
        assert_eq!(
            board.place_ship(ship, at(start), orientation),
            Err(BoardError::IllegalPosition)
        );
        assert!(board.ships().is_empty());
    }
}

#[test]
fn test_zero_length_ship_has_no_legal_position() {
    let mut board = Board::new(3, 3);
    let ship = Ship::new("Ghost", 0);
    assert!(!board.can_place_ship(&ship, at("A1"), Orientation::Horizontal));
    assert_eq!(
        board.place_ship(ship, at("A1"), Orientation::Horizontal),
        Err(BoardError::IllegalPosition)
    );
    assert!(board.ships().is_empty());
}

#[test]
fn test_ships_cannot_overlap() {
    for (first, first_o, second, second_o) in [
        ("A1", Orientation::Vertical, "A1", Orientation::Vertical),
        ("A1", Orientation::Vertical, "A1", Orientation::Horizontal),
        ("A1", Orientation::Vertical, "A2", Orientation::Vertical),
        ("E8", Orientation::Horizontal, "I4", Orientation::Vertical),
        ("E3", Orientation::Vertical, "A5", Orientation::Horizontal),
    ] {
        let mut board = Board::new(10, 10);
        board
            .place_ship(ShipType::Battleship.create(), at(first), first_o)
            .unwrap();
        let ship = ShipType::Battleship.create();
        assert!(!board.can_place_ship(&ship, at(second), second_o));
        assert_eq!(
            board.place_ship(ship, at(second), second_o),
            Err(BoardError::IllegalPosition)
        );
        assert_eq!(board.ships().len(), 1);
    }
}

#[test]
fn test_placed_ship_cannot_be_placed_again() -> Result<(), BoardError> {
    let mut other = Board::new(10, 10);
    other.place_ship(Ship::new("Tug", 2), at("A1"), Orientation::Horizontal)?;
    let placed = other.ships()[0].clone();

    let mut board = Board::new(10, 10);
    assert_eq!(
        board.place_ship(placed, at("C3"), Orientation::Horizontal),
        Err(BoardError::AlreadyPlaced)
    );
    assert!(board.ships().is_empty());
    Ok(())
}

#[test]
fn test_adjacent_ships_are_allowed() -> Result<(), BoardError> {
    let mut board = Board::new(10, 10);
    board.place_ship(ShipType::Destroyer.create(), at("A1"), Orientation::Horizontal)?;
    board.place_ship(ShipType::Destroyer.create(), at("A2"), Orientation::Horizontal)?;
    board.place_ship(ShipType::Destroyer.create(), at("E1"), Orientation::Vertical)?;
    assert_eq!(board.ships().len(), 3);
    assert_eq!(board.ships_remaining(), 3);
    Ok(())
}

#[test]
fn test_coordinate_bounds() {
    let board = Board::new(10, 10);
    for (text, expected) in [("A1", true), ("J10", true), ("K1", false), ("A11", false), ("Z1", false)] {
        assert_eq!(board.is_coordinate_in_bounds(at(text)), expected, "{text}");
    }
    assert!(!board.is_coordinate_in_bounds(Coordinate::new('A', 0)));
    assert!(!board.is_coordinate_in_bounds(Coordinate::new('@', 1)));
}

#[test]
fn test_rectangular_board_bounds() {
    let board = Board::new(3, 7);
    assert!(board.is_coordinate_in_bounds(at("C7")));
    assert!(!board.is_coordinate_in_bounds(at("D1")));
    assert!(!board.is_coordinate_in_bounds(at("A8")));
    assert_eq!(board.cells().count(), 21);
    assert_eq!(board.cells().next(), Some(at("A1")));
    assert_eq!(board.cells().nth(1), Some(at("A2")));
}

#[test]
fn test_get_ship_at_finds_owning_ship() -> Result<(), BoardError> {
    let mut board = Board::new(10, 10);
    board.place_ship(Ship::new("Tug", 2), at("B2"), Orientation::Horizontal)?;
    board.place_ship(Ship::new("Barge", 2), at("B3"), Orientation::Horizontal)?;
    assert_eq!(board.get_ship_at(at("C3")).map(|s| s.name()), Some("Barge"));
    assert!(board.get_ship_at(at("D2")).is_none());
    Ok(())
}

#[test]
fn test_display_renders_grid() -> Result<(), BoardError> {
    let mut board = Board::new(3, 2);
    board.place_ship(Ship::new("Tug", 2), at("A1"), Orientation::Horizontal)?;
    let text = board.to_string();
    assert_eq!(text, "    A B C\n  1 T T .\n  2 . . .\n");
    Ok(())
}
