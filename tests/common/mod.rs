#![allow(dead_code)]

use std::collections::BTreeSet;

use gridfleet::{Board, CellState, Coord};

/// Ends of every distinct ship on the board.
pub fn ship_ends(board: &Board) -> BTreeSet<(Coord, Coord)> {
    board
        .grid()
        .iter()
        .filter(|(_, state)| state.is_ship())
        .map(|(c, _)| board.find_ship_ends(c).unwrap())
        .collect()
}

/// Asserts that ships are straight and that no two ships touch, diagonals
/// included.
pub fn assert_well_formed(board: &Board) {
    for (coord, _) in board.grid().iter().filter(|(_, s)| s.is_ship()) {
        let ends = board.find_ship_ends(coord).unwrap();
        assert!(
            ends.0.x == ends.1.x || ends.0.y == ends.1.y,
            "ship through {} is not straight",
            coord
        );
        for dx in -1..=1 {
            for dy in -1..=1 {
                let n = coord.offset(dx, dy);
                if board.grid().peek(n).is_some_and(CellState::is_ship) {
                    assert_eq!(
                        board.find_ship_ends(n).unwrap(),
                        ends,
                        "ship cells {} and {} belong to different ships\n{}",
                        coord,
                        n,
                        board
                    );
                }
            }
        }
    }
}

/// Lengths of every ship on the board, longest first.
pub fn ship_lengths(board: &Board) -> Vec<usize> {
    let mut lengths: Vec<usize> = ship_ends(board)
        .into_iter()
        .map(|(a, b)| ((b.x - a.x) + (b.y - a.y)) as usize + 1)
        .collect();
    lengths.sort_unstable_by(|a, b| b.cmp(a));
    lengths
}
