//! Ship geometry: axis directions and straight runs of cells.

use crate::common::BoardError;
use crate::grid::Coord;

/// One of the four axis-aligned unit directions.
///
/// `x` grows to the east and `y` grows to the south.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    East,
    South,
    West,
    North,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::East,
        Direction::South,
        Direction::West,
        Direction::North,
    ];

    /// Unit vector `(dx, dy)`.
    #[inline]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
            Direction::North => (0, -1),
        }
    }

    pub const fn opposite(self) -> Self {
        match self {
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
            Direction::North => Direction::South,
        }
    }

    /// `true` for the two directions along the x axis.
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Direction::East | Direction::West)
    }

    /// Direction from `from` towards `to` when both lie on one axis.
    pub fn between(from: Coord, to: Coord) -> Option<Self> {
        use core::cmp::Ordering::*;
        match (to.x.cmp(&from.x), to.y.cmp(&from.y)) {
            (Greater, Equal) => Some(Direction::East),
            (Equal, Greater) => Some(Direction::South),
            (Less, Equal) => Some(Direction::West),
            (Equal, Less) => Some(Direction::North),
            _ => None,
        }
    }

    /// Step `coord` by `n` cells in this direction, clamping at the edge of
    /// the `i32` range.
    #[inline]
    pub fn step(self, coord: Coord, n: i32) -> Coord {
        let (dx, dy) = self.delta();
        coord.offset(dx.saturating_mul(n), dy.saturating_mul(n))
    }

    /// Step `coord` by `n` cells, or `None` if the result leaves the `i32`
    /// range.
    pub fn checked_step(self, coord: Coord, n: i32) -> Option<Coord> {
        let (dx, dy) = self.delta();
        Some(Coord::new(
            coord.x.checked_add(dx.checked_mul(n)?)?,
            coord.y.checked_add(dy.checked_mul(n)?)?,
        ))
    }
}

/// A straight ship of `length` cells extending from `start` in `direction`.
///
/// Ships are transient: a board only stores cell states, and a `Ship` is
/// rebuilt from a run of ship cells whenever one is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Ship {
    start: Coord,
    length: usize,
    direction: Direction,
    alive: bool,
}

impl Ship {
    /// Create a ship. The length must be at least one and fit an `i32` offset,
    /// and the far end must be a representable coordinate (`OutOfBounds`
    /// otherwise).
    pub fn new(start: Coord, length: usize, direction: Direction) -> Result<Self, BoardError> {
        let span = match i32::try_from(length) {
            Ok(n) if n > 0 => n - 1,
            _ => return Err(BoardError::InvalidLength(length)),
        };
        if direction.checked_step(start, span).is_none() {
            return Err(BoardError::OutOfBounds(start));
        }
        Ok(Ship {
            start,
            length,
            direction,
            alive: true,
        })
    }

    /// Build the ship spanning the two ends of a run. Single-cell ships point
    /// south.
    pub fn from_ends(a: Coord, b: Coord) -> Result<Self, BoardError> {
        if a == b {
            return Ship::new(a, 1, Direction::South);
        }
        let direction = Direction::between(a, b).ok_or(BoardError::NotAShip(b))?;
        let span = (i64::from(b.x) - i64::from(a.x)).unsigned_abs()
            + (i64::from(b.y) - i64::from(a.y)).unsigned_abs();
        let length = usize::try_from(span + 1).map_err(|_| BoardError::NotAShip(b))?;
        Ship::new(a, length, direction)
    }

    pub fn start(&self) -> Coord {
        self.start
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Last cell of the ship: `start + (length - 1) * direction`.
    pub fn end(&self) -> Coord {
        self.direction.step(self.start, self.length as i32 - 1)
    }

    /// Every cell of the ship from `start` to `end`.
    pub fn cells(&self) -> impl Iterator<Item = Coord> {
        let (start, direction) = (self.start, self.direction);
        (0..self.length as i32).map(move |i| direction.step(start, i))
    }

    /// `true` if `coord` is one of the ship's cells.
    pub fn contains(&self, coord: Coord) -> bool {
        self.cells().any(|c| c == coord)
    }

    /// The same ship re-anchored at `start`.
    pub fn moved_to(&self, start: Coord) -> Result<Self, BoardError> {
        Ship::new(start, self.length, self.direction)
    }

    /// The same ship pointing in `direction` from its current start.
    pub fn turned(&self, direction: Direction) -> Result<Self, BoardError> {
        Ship::new(self.start, self.length, direction)
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn kill(&mut self) {
        self.alive = false;
    }
}
