use gridfleet::{BoardError, Coord, Direction, Ship};

#[test]
fn test_end_and_cells() -> Result<(), BoardError> {
    let ship = Ship::new(Coord::new(2, 1), 3, Direction::East)?;
    assert_eq!(ship.end(), Coord::new(4, 1));
    let cells: Vec<_> = ship.cells().collect();
    assert_eq!(cells, vec![Coord::new(2, 1), Coord::new(3, 1), Coord::new(4, 1)]);
    assert!(ship.contains(Coord::new(3, 1)));
    assert!(!ship.contains(Coord::new(3, 2)));

    let north = Ship::new(Coord::new(0, 3), 4, Direction::North)?;
    assert_eq!(north.end(), Coord::new(0, 0));
    Ok(())
}

#[test]
fn test_zero_length_rejected() {
    assert_eq!(
        Ship::new(Coord::new(0, 0), 0, Direction::South).unwrap_err(),
        BoardError::InvalidLength(0)
    );
}

#[test]
fn test_from_ends() -> Result<(), BoardError> {
    let ship = Ship::from_ends(Coord::new(1, 1), Coord::new(1, 4))?;
    assert_eq!(ship.length(), 4);
    assert_eq!(ship.direction(), Direction::South);

    let single = Ship::from_ends(Coord::new(3, 3), Coord::new(3, 3))?;
    assert_eq!(single.length(), 1);
    assert_eq!(single.direction(), Direction::South);

    assert!(Ship::from_ends(Coord::new(0, 0), Coord::new(2, 2)).is_err());
    Ok(())
}

#[test]
fn test_moved_turned_and_alive() -> Result<(), BoardError> {
    let mut ship = Ship::new(Coord::new(0, 0), 2, Direction::East)?;
    assert_eq!(ship.moved_to(Coord::new(3, 3))?.end(), Coord::new(4, 3));
    assert_eq!(ship.turned(Direction::South)?.end(), Coord::new(0, 1));
    assert_eq!(
        ship.turned(Direction::North)?.moved_to(Coord::new(0, i32::MIN)).unwrap_err(),
        BoardError::OutOfBounds(Coord::new(0, i32::MIN))
    );
    assert!(ship.is_alive());
    ship.kill();
    assert!(!ship.is_alive());
    Ok(())
}

#[test]
fn test_direction_helpers() {
    for d in Direction::ALL {
        let (dx, dy) = d.delta();
        let (ox, oy) = d.opposite().delta();
        assert_eq!((dx + ox, dy + oy), (0, 0));
        assert_eq!(Direction::between(Coord::new(0, 0), d.step(Coord::new(0, 0), 3)), Some(d));
    }
    assert!(Direction::West.is_horizontal());
    assert!(!Direction::North.is_horizontal());
}

#[test]
fn test_unrepresentable_end_rejected() {
    assert_eq!(
        Ship::new(Coord::new(i32::MAX, 0), 2, Direction::East).unwrap_err(),
        BoardError::OutOfBounds(Coord::new(i32::MAX, 0))
    );
    assert_eq!(
        Ship::new(Coord::new(0, i32::MIN), 3, Direction::North).unwrap_err(),
        BoardError::OutOfBounds(Coord::new(0, i32::MIN))
    );
    assert_eq!(
        Ship::new(Coord::new(0, 0), i32::MAX as usize + 1, Direction::South).unwrap_err(),
        BoardError::InvalidLength(i32::MAX as usize + 1)
    );
    let edge = Ship::new(Coord::new(i32::MAX - 1, 0), 2, Direction::East).unwrap();
    assert_eq!(edge.end(), Coord::new(i32::MAX, 0));
}

#[test]
fn test_extreme_coordinates() {
    assert_eq!(
        Direction::between(Coord::new(i32::MIN, 0), Coord::new(i32::MAX, 0)),
        Some(Direction::East)
    );
    assert_eq!(
        Direction::West.checked_step(Coord::new(i32::MIN, 0), 1),
        None
    );
    assert_eq!(
        Direction::West.step(Coord::new(i32::MIN, 0), 1),
        Coord::new(i32::MIN, 0)
    );
    assert!(Ship::from_ends(Coord::new(0, i32::MIN), Coord::new(0, i32::MAX)).is_err());
}
