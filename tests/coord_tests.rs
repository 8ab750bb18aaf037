use broadside::{BoardError, Coord};

#[test]
fn test_parse_corners() {
    let a1 = Coord::parse("A1").unwrap();
    assert_eq!((a1.col(), a1.row()), (0, 0));

    let j10 = Coord::parse("j10").unwrap();
    assert_eq!((j10.col(), j10.row()), (9, 9));
}

#[test]
fn test_parse_is_case_insensitive() {
    assert_eq!(Coord::parse("b7").unwrap(), Coord::parse("B7").unwrap());
}

#[test]
fn test_parse_rejects_out_of_range() {
    assert_eq!(Coord::parse("K1"), Err(BoardError::InvalidFormat));
    assert_eq!(Coord::parse("A11"), Err(BoardError::InvalidFormat));
    assert_eq!(Coord::parse("A0"), Err(BoardError::InvalidFormat));
}

#[test]
fn test_parse_rejects_malformed_shapes() {
    for s in ["", "A", "11", "AA1", "1A", "A1B", "A+1", "A 1", "A1 ", "💥1"] {
        assert_eq!(Coord::parse(s), Err(BoardError::InvalidFormat), "input {:?}", s);
    }
}

#[test]
fn test_format_is_canonical() {
    assert_eq!(Coord::parse("a1").unwrap().to_string(), "A1");
    assert_eq!(Coord::parse("J10").unwrap().to_string(), "J10");
    assert_eq!(Coord::new(3, 6).unwrap().to_string(), "D7");
}

#[test]
fn test_new_checks_bounds() {
    assert!(Coord::new(9, 9).is_ok());
    assert_eq!(
        Coord::new(10, 0),
        Err(BoardError::OutOfBounds { col: 10, row: 0 })
    );
    assert_eq!(
        Coord::new(0, 12),
        Err(BoardError::OutOfBounds { col: 0, row: 12 })
    );
}

#[test]
fn test_from_str_round_trip() {
    let coord: Coord = "e5".parse().unwrap();
    assert_eq!(coord.to_string(), "E5");
    assert_eq!(coord.to_string().parse::<Coord>().unwrap(), coord);
}
