//! Deduction of cells that cannot hold a ship.
//!
//! Ships never touch, not even diagonally. Every struck segment therefore
//! rules out its four diagonal neighbours, and a sunk ship rules out its whole
//! perimeter. Marking these cells [`Redundant`](CellState::Redundant) on a
//! knowledge board keeps them from being targeted.

use log::debug;

use crate::board::{Board, NEIGHBOURS};
use crate::common::BoardError;
use crate::grid::{CellState, Coord};

const DIAGONALS: [(i32, i32); 4] = [(-1, -1), (1, -1), (-1, 1), (1, 1)];

impl Board {
    /// Mark the cells ruled out by the strike at `coord`.
    ///
    /// `was_sunk` states whether that strike sank its ship. Misses deduce
    /// nothing. Only [`Empty`](CellState::Empty) cells are ever marked.
    /// Returns the number of cells newly marked.
    pub fn update_redundant_squares(
        &mut self,
        coord: Coord,
        was_sunk: bool,
    ) -> Result<usize, BoardError> {
        match self.grid.get(coord)? {
            CellState::Empty | CellState::Ship => Err(BoardError::NotHit(coord)),
            CellState::ShipHit => {
                let mut marked = self.mark_redundant_around(coord, &DIAGONALS);
                if was_sunk {
                    let (start, end) = self.find_ship_ends(coord)?;
                    marked += self.mark_redundant_around(start, &NEIGHBOURS);
                    marked += self.mark_redundant_around(end, &NEIGHBOURS);
                    debug!("sunk ship {}..{}: {} cells ruled out", start, end, marked);
                }
                Ok(marked)
            }
            CellState::EmptyHit | CellState::Redundant => Ok(0),
        }
    }

    fn mark_redundant_around(&mut self, coord: Coord, offsets: &[(i32, i32)]) -> usize {
        let mut marked = 0;
        for &(dx, dy) in offsets {
            let cell = coord.offset(dx, dy);
            if self.grid.peek(cell) == Some(CellState::Empty) {
                let written = self.grid.set_within(cell, CellState::Redundant);
                debug_assert!(written, "redundant cell {} off the grid", cell);
                marked += 1;
            }
        }
        marked
    }
}
