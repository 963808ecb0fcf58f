use battleships::{Coordinate, CoordinateError};

#[test]
fn test_parse_and_format() -> Result<(), CoordinateError> {
    let c = Coordinate::parse("J10")?;
    assert_eq!(c.column(), 'J');
    assert_eq!(c.row(), 10);
    assert_eq!(c.to_string(), "J10");
    assert_eq!(Coordinate::parse(&c.to_string())?, c);
    Ok(())
}

#[test]
fn test_parse_is_lenient_about_case_and_whitespace() {
    assert_eq!(Coordinate::parse(" b7\n").unwrap(), Coordinate::new('B', 7));
    let c: Coordinate = "z99".parse().unwrap();
    assert_eq!(c, Coordinate::new('Z', 99));
}

#[test]
fn test_parse_rejects_malformed_text() {
    for text in ["", "   ", "A", "A0", "A00", "1A", "AA", "A-1", "A+1", "A1000", "J100 x", "É1"] {
        assert_eq!(
            Coordinate::parse(text),
            Err(CoordinateError::InvalidFormat(text.to_string())),
            "{text:?} should be rejected"
        );
        assert_eq!(Coordinate::try_parse(text), None);
    }
}

#[test]
fn test_parser_does_not_check_board_bounds() {
    assert!(Coordinate::try_parse("Z1").is_some());
    assert!(Coordinate::try_parse("A99").is_some());
}

#[test]
fn test_round_trip_over_every_short_coordinate() {
    for col in 'A'..='Z' {
        for row in 1..=99 {
            let c = Coordinate::new(col, row);
            assert_eq!(Coordinate::parse(&c.to_string()), Ok(c));
        }
    }
}
