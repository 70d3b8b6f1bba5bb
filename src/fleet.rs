//! Fleet compositions and random, rule-abiding fleet layouts.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use log::{debug, trace};
use rand::Rng;

use crate::board::Board;
use crate::common::BoardError;
use crate::config::{DEFAULT_FLEET, MAX_GENERATION_RESTARTS, MAX_PLACEMENT_ATTEMPTS};
use crate::grid::Coord;
use crate::ship::{Direction, Ship};

/// How many ships of each length make up one side's fleet.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct FleetComposition {
    counts: BTreeMap<usize, usize>,
}

impl FleetComposition {
    /// A fleet with no ships.
    pub fn empty() -> Self {
        Self {
            counts: BTreeMap::new(),
        }
    }

    /// Build a fleet from `(length, count)` pairs. Repeated lengths add up.
    pub fn from_counts<I>(pairs: I) -> Result<Self, BoardError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut fleet = Self::empty();
        for (length, count) in pairs {
            fleet.add(length, count)?;
        }
        Ok(fleet)
    }

    /// Add `count` ships of `length`.
    ///
    /// A total that no longer fits a `usize` can never be placed and is
    /// rejected with [`BoardError::UnableToPlaceShip`].
    pub fn add(&mut self, length: usize, count: usize) -> Result<(), BoardError> {
        if length == 0 {
            return Err(BoardError::InvalidLength(length));
        }
        if count > 0 {
            let total = self.counts.entry(length).or_insert(0);
            *total = total
                .checked_add(count)
                .ok_or(BoardError::UnableToPlaceShip { length })?;
        }
        Ok(())
    }

    /// Take one ship of `length` out of the fleet. Returns `false` if there
    /// was none left.
    pub fn remove_one(&mut self, length: usize) -> bool {
        match self.counts.get_mut(&length) {
            Some(n) if *n > 1 => {
                *n -= 1;
                true
            }
            Some(_) => {
                self.counts.remove(&length);
                true
            }
            None => false,
        }
    }

    /// Ships of `length` in the fleet.
    pub fn count(&self, length: usize) -> usize {
        self.counts.get(&length).copied().unwrap_or(0)
    }

    /// Total number of ships, saturating at `usize::MAX`.
    pub fn ship_count(&self) -> usize {
        self.counts.values().fold(0, |acc, &n| acc.saturating_add(n))
    }

    /// Cells covered by the whole fleet, or `None` if that overflows a `usize`.
    pub fn cell_count(&self) -> Option<usize> {
        self.counts
            .iter()
            .try_fold(0usize, |acc, (&len, &n)| acc.checked_add(len.checked_mul(n)?))
    }

    /// Length of the longest ship.
    pub fn longest(&self) -> Option<usize> {
        self.counts.keys().next_back().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// `(length, count)` pairs in ascending length order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.counts.iter().map(|(&len, &n)| (len, n))
    }

    /// One entry per ship, longest first.
    pub fn lengths_descending(&self) -> Vec<usize> {
        self.counts
            .iter()
            .rev()
            .flat_map(|(&len, &n)| core::iter::repeat(len).take(n))
            .collect()
    }
}

impl Default for FleetComposition {
    /// One 4-ship, two 3-ships, three 2-ships and four 1-ships.
    fn default() -> Self {
        let mut counts = BTreeMap::new();
        for (length, count) in DEFAULT_FLEET {
            counts.insert(length, count);
        }
        Self { counts }
    }
}

impl Board {
    /// Clear the board and lay out `fleet` at random.
    ///
    /// Longer ships are placed first. Each ship gets a bounded number of
    /// random origin/direction attempts; when those run out the layout starts
    /// over, and after too many restarts generation fails with
    /// [`BoardError::UnableToPlaceShip`], leaving the board empty.
    pub fn generate_random_board<R: Rng + ?Sized>(
        &mut self,
        fleet: &FleetComposition,
        rng: &mut R,
    ) -> Result<(), BoardError> {
        self.clear();
        if let Some(longest) = fleet.longest() {
            let fits_area = fleet
                .cell_count()
                .is_some_and(|cells| cells <= self.grid.area());
            if !fits_area || (longest > self.width() && longest > self.height()) {
                return Err(BoardError::UnableToPlaceShip { length: longest });
            }
        }
        let lengths = fleet.lengths_descending();

        let mut failed = 0;
        for restart in 0..MAX_GENERATION_RESTARTS {
            match self.try_layout(&lengths, rng) {
                Ok(()) => {
                    debug!(
                        "generated {} ships after {} restart(s)",
                        lengths.len(),
                        restart
                    );
                    return Ok(());
                }
                Err(length) => {
                    trace!("layout attempt {} stuck on length {}", restart, length);
                    failed = length;
                    self.clear();
                }
            }
        }
        debug!("giving up on random layout");
        Err(BoardError::UnableToPlaceShip { length: failed })
    }

    /// One pass over `lengths`; on failure returns the length that did not fit.
    fn try_layout<R: Rng + ?Sized>(&mut self, lengths: &[usize], rng: &mut R) -> Result<(), usize> {
        let (width, height) = (self.width(), self.height());
        for &length in lengths {
            let placed = (0..MAX_PLACEMENT_ATTEMPTS).any(|_| {
                let origin = Coord::new(
                    rng.random_range(0..width) as i32,
                    rng.random_range(0..height) as i32,
                );
                let direction = Direction::ALL[rng.random_range(0..Direction::ALL.len())];
                Ship::new(origin, length, direction)
                    .and_then(|ship| self.add_ship(&ship))
                    .is_ok()
            });
            if !placed {
                return Err(length);
            }
        }
        Ok(())
    }
}
