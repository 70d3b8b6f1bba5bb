//! Strike resolution: applying hits, finding ship ends, and detecting sunk
//! ships and defeat.

use log::trace;

use crate::board::Board;
use crate::common::{BoardError, Shot};
use crate::grid::{CellState, Coord};
use crate::ship::{Direction, Ship};

impl Board {
    /// Strike `coord` on a board holding ships.
    ///
    /// Empty water becomes [`EmptyHit`](CellState::EmptyHit) and an intact
    /// segment becomes [`ShipHit`](CellState::ShipHit). A cell that was
    /// already struck or deduced empty cannot be struck again.
    pub fn hit(&mut self, coord: Coord) -> Result<Shot, BoardError> {
        let shot = match self.grid.get(coord)? {
            CellState::Empty => {
                self.grid.set(coord, CellState::EmptyHit)?;
                Shot::Miss
            }
            CellState::Ship => {
                self.grid.set(coord, CellState::ShipHit)?;
                Shot::Hit
            }
            _ => return Err(BoardError::AlreadyTargeted(coord)),
        };
        trace!("strike at {} -> {:?}", coord, shot);
        Ok(shot)
    }

    /// Record a hit reported by the opponent on a knowledge board.
    pub fn mark_hit(&mut self, coord: Coord) -> Result<(), BoardError> {
        self.mark_untargeted(coord, CellState::ShipHit)
    }

    /// Record a miss reported by the opponent on a knowledge board.
    pub fn mark_miss(&mut self, coord: Coord) -> Result<(), BoardError> {
        self.mark_untargeted(coord, CellState::EmptyHit)
    }

    fn mark_untargeted(&mut self, coord: Coord, state: CellState) -> Result<(), BoardError> {
        match self.grid.get(coord)? {
            CellState::Empty => self.grid.set(coord, state),
            _ => Err(BoardError::AlreadyTargeted(coord)),
        }
    }

    /// Returns `true` when the ship containing the struck cell `coord` has
    /// been hit along its whole length.
    ///
    /// Walks outward from `coord` in each axis direction over struck
    /// segments; meeting an intact segment means the ship still floats.
    /// Off-grid coordinates and cells that are not struck segments are never
    /// destroyed.
    pub fn ship_destroyed(&self, coord: Coord) -> bool {
        if self.grid.peek(coord) != Some(CellState::ShipHit) {
            return false;
        }
        let limit = self.width().max(self.height()) as i32;
        for direction in Direction::ALL {
            for n in 1..limit {
                match self.grid.peek(direction.step(coord, n)) {
                    Some(CellState::ShipHit) => continue,
                    Some(CellState::Ship) => return false,
                    _ => break,
                }
            }
        }
        true
    }

    /// The two end cells of the ship through `coord`, smaller first.
    ///
    /// The axis is decided by probing the cells either side along x; the run
    /// is then followed in both directions over hit and intact segments.
    pub fn find_ship_ends(&self, coord: Coord) -> Result<(Coord, Coord), BoardError> {
        if !self.grid.get(coord)?.is_ship() {
            return Err(BoardError::NotAShip(coord));
        }
        let is_ship = |c: Coord| self.grid.peek(c).is_some_and(CellState::is_ship);
        let forward = if is_ship(Direction::East.step(coord, 1))
            || is_ship(Direction::West.step(coord, 1))
        {
            Direction::East
        } else {
            Direction::South
        };

        let walk = |direction: Direction| {
            let mut end = coord;
            while is_ship(direction.step(end, 1)) {
                end = direction.step(end, 1);
            }
            end
        };
        let (a, b) = (walk(forward.opposite()), walk(forward));
        Ok(if a <= b { (a, b) } else { (b, a) })
    }

    /// Rebuild the ship passing through `coord` from its ends.
    pub fn ship_at(&self, coord: Coord) -> Result<Ship, BoardError> {
        let (start, end) = self.find_ship_ends(coord)?;
        Ship::from_ends(start, end)
    }

    /// Returns `true` when no intact ship segment remains.
    pub fn all_ships_destroyed(&self) -> bool {
        !self.grid.contains(CellState::Ship)
    }
}
