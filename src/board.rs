//! Board state and ship placement.
//!
//! A [`Board`] wraps a [`Grid`] and enforces the placement rules: ships lie
//! fully on the grid, only on empty cells, and never within one cell
//! (diagonals included) of another ship. Strike resolution, redundancy
//! deduction and random fleets are implemented on `Board` in their own
//! modules.

use log::{debug, trace};

use crate::common::BoardError;
use crate::grid::{CellState, Coord, Grid};
use crate::ship::{Direction, Ship};

/// Offsets of the eight cells surrounding a cell.
pub(crate) const NEIGHBOURS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// One player's view of a grid: either their own ships, or what they have
/// learned about the opponent's.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    pub(crate) grid: Grid,
}

impl Board {
    /// Create an empty `width × height` board.
    pub fn new(width: usize, height: usize) -> Result<Self, BoardError> {
        Ok(Board {
            grid: Grid::new(width, height)?,
        })
    }

    /// Read-only access to the underlying cells.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// State of the cell at `(x, y)`, for rendering.
    pub fn cell_state(&self, x: i32, y: i32) -> Result<CellState, BoardError> {
        self.grid.get(Coord::new(x, y))
    }

    /// Remove everything from the board.
    pub fn clear(&mut self) {
        self.grid.clear();
    }

    /// Place `ship`, marking each of its cells [`Ship`](CellState::Ship).
    ///
    /// Nothing is written unless every cell passes validation.
    pub fn add_ship(&mut self, ship: &Ship) -> Result<(), BoardError> {
        self.check_placement(ship)?;
        self.mark_ship(ship);
        trace!("placed {:?}", ship);
        Ok(())
    }

    /// Clear the intact cells of `ship` back to empty. Struck cells stay.
    pub fn remove_ship(&mut self, ship: &Ship) -> Result<(), BoardError> {
        self.check_bounds(ship)?;
        for cell in ship.cells() {
            if self.grid.peek(cell) == Some(CellState::Ship) {
                self.grid.set(cell, CellState::Empty)?;
            }
        }
        Ok(())
    }

    /// Move the ship occupying `from` so that it starts at `to`, keeping its
    /// length and direction. On failure the ship is left where it was.
    pub fn move_ship(&mut self, from: Coord, to: Coord) -> Result<(), BoardError> {
        if !self.grid.within_bounds(to) {
            return Err(BoardError::OutOfBounds(to));
        }
        let original = self.intact_ship_at(from)?;
        let moved = original.moved_to(to)?;
        self.replace_ship(&original, &moved)
    }

    /// Turn the ship occupying `loc` to point along `direction`, pivoting on
    /// its smaller end. Ships already facing `direction` and single-cell
    /// ships are left as they are.
    pub fn rotate_ship(&mut self, loc: Coord, direction: Direction) -> Result<(), BoardError> {
        let original = self.intact_ship_at(loc)?;
        if original.direction() == direction || original.length() <= 1 {
            return Ok(());
        }
        let turned = original.turned(direction)?;
        self.replace_ship(&original, &turned)
    }

    /// Swap `original` for `replacement`, restoring `original` if the
    /// replacement does not fit.
    fn replace_ship(&mut self, original: &Ship, replacement: &Ship) -> Result<(), BoardError> {
        self.remove_ship(original)?;
        match self.add_ship(replacement) {
            Ok(()) => Ok(()),
            Err(e) => {
                debug!("rejected {:?}: {}; restoring {:?}", replacement, e, original);
                // The cells were intact and unobstructed a moment ago.
                self.mark_ship(original);
                Err(e)
            }
        }
    }

    /// The ship through `loc`, provided none of its cells has been struck.
    fn intact_ship_at(&self, loc: Coord) -> Result<Ship, BoardError> {
        match self.grid.get(loc)? {
            CellState::Ship => {}
            CellState::ShipHit => return Err(BoardError::ShipDamaged(loc)),
            _ => return Err(BoardError::NotAShip(loc)),
        }
        let ship = self.ship_at(loc)?;
        if ship
            .cells()
            .all(|c| self.grid.peek(c) == Some(CellState::Ship))
        {
            Ok(ship)
        } else {
            Err(BoardError::ShipDamaged(loc))
        }
    }

    fn check_bounds(&self, ship: &Ship) -> Result<(), BoardError> {
        for cell in [ship.start(), ship.end()] {
            if !self.grid.within_bounds(cell) {
                return Err(BoardError::OutOfBounds(cell));
            }
        }
        Ok(())
    }

    fn check_placement(&self, ship: &Ship) -> Result<(), BoardError> {
        self.check_bounds(ship)?;
        for cell in ship.cells() {
            if self.grid.get(cell)? != CellState::Empty {
                return Err(BoardError::AlreadyOccupied(cell));
            }
        }
        for cell in ship.cells() {
            if self.touches_ship(cell) {
                return Err(BoardError::AdjacencyViolation(cell));
            }
        }
        Ok(())
    }

    /// `true` if any of the eight cells around `coord` holds a ship.
    pub(crate) fn touches_ship(&self, coord: Coord) -> bool {
        NEIGHBOURS.iter().any(|&(dx, dy)| {
            self.grid
                .peek(coord.offset(dx, dy))
                .is_some_and(CellState::is_ship)
        })
    }

    fn mark_ship(&mut self, ship: &Ship) {
        for cell in ship.cells() {
            let written = self.grid.set_within(cell, CellState::Ship);
            debug_assert!(written, "ship cell {} off the grid", cell);
        }
    }
}

impl core::fmt::Debug for Board {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Board {{\n{}\n}}", self.grid)
    }
}

impl core::fmt::Display for Board {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.grid, f)
    }
}
