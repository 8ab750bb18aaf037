use broadside::{AttackResult, BoardError, Coord, Grid, Orientation};

fn coord(label: &str) -> Coord {
    Coord::parse(label).unwrap()
}

#[test]
fn test_new_grid_is_all_water() {
    let grid = Grid::new();
    assert_eq!(grid.cells().count(), 100);
    assert!(grid.cells().all(|c| c.occupant().is_none() && !c.is_hit()));
    // every cell knows its own position
    let e5 = grid.cell_at(coord("E5"));
    assert_eq!(e5.coord(), coord("E5"));
}

#[test]
fn test_cell_lookup_is_bounds_checked() {
    let grid = Grid::new();
    assert!(grid.cell(9, 9).is_ok());
    assert_eq!(
        grid.cell(10, 3).unwrap_err(),
        BoardError::OutOfBounds { col: 10, row: 3 }
    );
}

#[test]
fn test_place_ship_marks_cells() {
    let mut grid = Grid::new();
    grid.place_ship(coord("A1"), 5, Orientation::Horizontal, "Carrier")
        .unwrap();
    for label in ["A1", "B1", "C1", "D1", "E1"] {
        assert_eq!(grid.cell_at(coord(label)).occupant(), Some("Carrier"));
    }
    assert_eq!(grid.cell_at(coord("F1")).occupant(), None);
}

#[test]
fn test_place_ship_rejects_overlap() {
    let mut grid = Grid::new();
    grid.place_ship(coord("A1"), 5, Orientation::Horizontal, "Carrier")
        .unwrap();
    let err = grid
        .place_ship(coord("C1"), 4, Orientation::Horizontal, "Battleship")
        .unwrap_err();
    assert_eq!(err, BoardError::ShipOverlaps);
    // rejection must not leave partial segments behind
    for label in ["F1", "C2"] {
        assert_eq!(grid.cell_at(coord(label)).occupant(), None);
    }
}

#[test]
fn test_place_ship_rejects_out_of_bounds_without_mutation() {
    let mut grid = Grid::new();
    let err = grid
        .place_ship(coord("H1"), 5, Orientation::Horizontal, "Carrier")
        .unwrap_err();
    assert_eq!(err, BoardError::ShipOutOfBounds);
    assert!(grid.cells().all(|c| c.occupant().is_none()));

    let err = grid
        .place_ship(coord("A8"), 4, Orientation::Vertical, "Battleship")
        .unwrap_err();
    assert_eq!(err, BoardError::ShipOutOfBounds);
    assert!(grid.cells().all(|c| c.occupant().is_none()));
}

#[test]
fn test_attack_hit_then_sink() {
    let mut grid = Grid::new();
    grid.place_ship(coord("A1"), 5, Orientation::Horizontal, "Carrier")
        .unwrap();

    assert_eq!(grid.attack(coord("A1")), AttackResult::Hit("Carrier"));
    for label in ["B1", "C1", "D1"] {
        assert_eq!(grid.attack(coord(label)), AttackResult::Hit("Carrier"));
    }
    assert_eq!(grid.attack(coord("E1")), AttackResult::Sunk("Carrier"));
    assert!(grid.is_ship_sunk("Carrier"));
}

#[test]
fn test_attack_miss_marks_water() {
    let mut grid = Grid::new();
    grid.place_ship(coord("A1"), 2, Orientation::Vertical, "Destroyer")
        .unwrap();
    assert_eq!(grid.attack(coord("J10")), AttackResult::Miss);
    assert!(grid.cell_at(coord("J10")).is_hit());
    assert!(!grid.is_ship_sunk("Destroyer"));
}

#[test]
fn test_repeat_attack_is_already_hit_and_mutates_nothing() {
    let mut grid = Grid::new();
    grid.place_ship(coord("C3"), 3, Orientation::Horizontal, "Cruiser")
        .unwrap();
    assert_eq!(grid.attack(coord("C3")), AttackResult::Hit("Cruiser"));
    let snapshot = grid.clone();
    assert_eq!(grid.attack(coord("C3")), AttackResult::AlreadyHit);
    assert_eq!(grid, snapshot);
    // also for water cells
    assert_eq!(grid.attack(coord("A1")), AttackResult::Miss);
    assert_eq!(grid.attack(coord("A1")), AttackResult::AlreadyHit);
}

#[test]
fn test_same_length_ships_sink_independently() {
    let mut grid = Grid::new();
    grid.place_ship(coord("A1"), 3, Orientation::Horizontal, "Cruiser")
        .unwrap();
    grid.place_ship(coord("A3"), 3, Orientation::Horizontal, "Submarine")
        .unwrap();

    assert_eq!(grid.attack(coord("A1")), AttackResult::Hit("Cruiser"));
    assert_eq!(grid.attack(coord("B1")), AttackResult::Hit("Cruiser"));
    assert_eq!(grid.attack(coord("C1")), AttackResult::Sunk("Cruiser"));
    assert!(!grid.is_ship_sunk("Submarine"));
    assert_eq!(grid.attack(coord("A3")), AttackResult::Hit("Submarine"));
}
