//! A fixed-size grid of cell states.
//!
//! The grid is the storage primitive underneath a [`Board`](crate::Board): it
//! knows its dimensions and bounds-checks every access, but performs no game
//! validation of its own. Cells are stored row-major (`y * width + x`).

use alloc::vec::Vec;
use core::fmt;

use crate::common::BoardError;

/// A position on the grid. Coordinates are signed so that neighbour and
/// walking arithmetic can step off the edge and be rejected by a bounds check.
///
/// Ordering is lexicographic on `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The coordinate shifted by `(dx, dy)`.
    ///
    /// Saturates at the edge of the `i32` range. Grid dimensions never exceed
    /// `i32::MAX`, so a clamped coordinate is always off the grid.
    #[inline]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    /// Nothing known or nothing placed.
    #[default]
    Empty,
    /// An intact ship segment.
    Ship,
    /// A ship segment that has been struck.
    ShipHit,
    /// A strike that found open water.
    EmptyHit,
    /// Deduced empty: no ship can occupy this cell.
    Redundant,
}

impl CellState {
    /// `true` for cells that belong to a ship, hit or not.
    #[inline]
    pub fn is_ship(self) -> bool {
        matches!(self, CellState::Ship | CellState::ShipHit)
    }

    /// `true` once a cell can no longer be targeted: struck or deduced empty.
    #[inline]
    pub fn is_resolved(self) -> bool {
        matches!(
            self,
            CellState::ShipHit | CellState::EmptyHit | CellState::Redundant
        )
    }

    fn glyph(self) -> char {
        match self {
            CellState::Empty => '.',
            CellState::Ship => '#',
            CellState::ShipHit => 'X',
            CellState::EmptyHit => 'o',
            CellState::Redundant => '~',
        }
    }
}

/// A `width × height` array of [`CellState`]s with fixed dimensions.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// Create an all-[`Empty`](CellState::Empty) grid.
    ///
    /// Both dimensions must be non-zero and representable as an `i32`
    /// coordinate, and the cells must be allocatable.
    pub fn new(width: usize, height: usize) -> Result<Self, BoardError> {
        let area = match width.checked_mul(height) {
            Some(area) if area > 0 && width <= i32::MAX as usize && height <= i32::MAX as usize => {
                area
            }
            _ => return Err(BoardError::InvalidDimensions { width, height }),
        };
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(area)
            .map_err(|_| BoardError::InvalidDimensions { width, height })?;
        cells.resize(area, CellState::Empty);
        Ok(Grid {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells on the grid.
    pub fn area(&self) -> usize {
        self.width * self.height
    }

    /// Returns `true` when `coord` lies on the grid.
    #[inline]
    pub fn within_bounds(&self, coord: Coord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as usize) < self.width
            && (coord.y as usize) < self.height
    }

    /// State at `coord`.
    pub fn get(&self, coord: Coord) -> Result<CellState, BoardError> {
        let idx = self.index(coord)?;
        Ok(self.cells[idx])
    }

    /// Overwrite the state at `coord`. Only bounds are checked.
    pub fn set(&mut self, coord: Coord, state: CellState) -> Result<(), BoardError> {
        let idx = self.index(coord)?;
        self.cells[idx] = state;
        Ok(())
    }

    /// Overwrite `coord` if it is on the grid. Returns whether it was written.
    ///
    /// For callers that have already bounds-checked `coord`.
    pub(crate) fn set_within(&mut self, coord: Coord, state: CellState) -> bool {
        match self.index(coord) {
            Ok(idx) => {
                self.cells[idx] = state;
                true
            }
            Err(_) => false,
        }
    }

    /// State at `coord`, or `None` when off the grid.
    #[inline]
    pub fn peek(&self, coord: Coord) -> Option<CellState> {
        self.index(coord).ok().map(|idx| self.cells[idx])
    }

    /// Reset every cell to [`Empty`](CellState::Empty).
    pub fn clear(&mut self) {
        self.cells.fill(CellState::Empty);
    }

    /// Number of cells currently in `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&c| c == state).count()
    }

    pub fn contains(&self, state: CellState) -> bool {
        self.cells.contains(&state)
    }

    /// Iterator over every `(coord, state)` pair in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, CellState)> + '_ {
        let width = self.width;
        self.cells.iter().enumerate().map(move |(idx, &state)| {
            let coord = Coord::new((idx % width) as i32, (idx / width) as i32);
            (coord, state)
        })
    }

    #[inline]
    fn index(&self, coord: Coord) -> Result<usize, BoardError> {
        if self.within_bounds(coord) {
            Ok(coord.y as usize * self.width + coord.x as usize)
        } else {
            Err(BoardError::OutOfBounds(coord))
        }
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid<{}x{}>:", self.width, self.height)?;
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.chunks(self.width).enumerate() {
            for state in cells {
                write!(f, "{} ", state.glyph())?;
            }
            if row + 1 < self.height {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
