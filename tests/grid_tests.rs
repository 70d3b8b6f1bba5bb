use gridfleet::{BoardError, CellState, Coord, Grid};

#[test]
fn test_new_rejects_zero_dimensions() {
    assert_eq!(
        Grid::new(0, 4).unwrap_err(),
        BoardError::InvalidDimensions { width: 0, height: 4 }
    );
    assert!(Grid::new(4, 0).is_err());
    let grid = Grid::new(3, 2).unwrap();
    assert_eq!((grid.width(), grid.height(), grid.area()), (3, 2, 6));
    assert_eq!(grid.count(CellState::Empty), 6);
}

#[test]
fn test_bounds() {
    let grid = Grid::new(5, 3).unwrap();
    assert!(grid.within_bounds(Coord::new(0, 0)));
    assert!(grid.within_bounds(Coord::new(4, 2)));
    assert!(!grid.within_bounds(Coord::new(5, 0)));
    assert!(!grid.within_bounds(Coord::new(0, 3)));
    assert!(!grid.within_bounds(Coord::new(-1, 1)));
    assert_eq!(
        grid.get(Coord::new(2, 3)).unwrap_err(),
        BoardError::OutOfBounds(Coord::new(2, 3))
    );
    assert_eq!(grid.peek(Coord::new(0, -1)), None);
}

#[test]
fn test_set_get_clear() {
    let mut grid = Grid::new(4, 4).unwrap();
    grid.set(Coord::new(1, 2), CellState::ShipHit).unwrap();
    grid.set(Coord::new(3, 3), CellState::Redundant).unwrap();
    assert_eq!(grid.get(Coord::new(1, 2)).unwrap(), CellState::ShipHit);
    assert!(grid.contains(CellState::Redundant));
    assert!(!grid.contains(CellState::Ship));
    assert!(grid.set(Coord::new(4, 0), CellState::Ship).is_err());

    grid.clear();
    assert_eq!(grid.count(CellState::Empty), 16);
}

#[test]
fn test_iter_is_row_major() {
    let mut grid = Grid::new(3, 2).unwrap();
    grid.set(Coord::new(2, 0), CellState::Ship).unwrap();
    let coords: Vec<_> = grid.iter().map(|(c, _)| (c.x, c.y)).collect();
    assert_eq!(coords, vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]);
    let ships: Vec<_> = grid
        .iter()
        .filter(|&(_, s)| s == CellState::Ship)
        .map(|(c, _)| c)
        .collect();
    assert_eq!(ships, vec![Coord::new(2, 0)]);
}

#[test]
fn test_display() {
    let mut grid = Grid::new(3, 2).unwrap();
    grid.set(Coord::new(0, 0), CellState::Ship).unwrap();
    grid.set(Coord::new(1, 0), CellState::ShipHit).unwrap();
    grid.set(Coord::new(2, 1), CellState::EmptyHit).unwrap();
    grid.set(Coord::new(0, 1), CellState::Redundant).unwrap();
    assert_eq!(grid.to_string(), "# X . \n~ . o ");
}

#[test]
fn test_oversized_dimensions_rejected() {
    let wide = i32::MAX as usize + 1;
    assert_eq!(
        Grid::new(wide, 1).unwrap_err(),
        BoardError::InvalidDimensions { width: wide, height: 1 }
    );
    assert!(Grid::new(usize::MAX, usize::MAX).is_err());
}

#[test]
fn test_offset_clamps_off_the_grid() {
    let grid = Grid::new(4, 4).unwrap();
    let edge = Coord::new(i32::MAX, i32::MIN).offset(1, -1);
    assert_eq!(edge, Coord::new(i32::MAX, i32::MIN));
    assert!(!grid.within_bounds(edge));
    assert_eq!(grid.peek(edge), None);
}
