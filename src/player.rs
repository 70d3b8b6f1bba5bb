//! A player's side of the game: their own fleet and what they know about the
//! opponent's.

use alloc::string::String;

use log::debug;
use rand::Rng;

use crate::board::Board;
use crate::common::{BoardError, Shot};
use crate::config::GameConfig;
use crate::fleet::FleetComposition;
use crate::grid::Coord;
use crate::protocol::Response;
use crate::ship::Ship;

/// Owns two independent boards: one with the player's ships, and one
/// recording strikes against the opponent.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    own: Board,
    knowledge: Board,
    own_fleet: FleetComposition,
    opponent_fleet: FleetComposition,
    opponent_sunk: FleetComposition,
}

impl Player {
    /// New player with empty boards sized by `config`. The opponent is
    /// assumed to field `config.fleet`.
    pub fn new(name: impl Into<String>, config: &GameConfig) -> Result<Self, BoardError> {
        Ok(Self {
            name: name.into(),
            own: Board::new(config.width, config.height)?,
            knowledge: Board::new(config.width, config.height)?,
            own_fleet: FleetComposition::empty(),
            opponent_fleet: config.fleet.clone(),
            opponent_sunk: FleetComposition::empty(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Board holding this player's ships.
    pub fn own_board(&self) -> &Board {
        &self.own
    }

    /// Mutable own board, for moving and rotating ships during setup.
    pub fn own_board_mut(&mut self) -> &mut Board {
        &mut self.own
    }

    /// Board recording strikes against the opponent.
    pub fn knowledge_board(&self) -> &Board {
        &self.knowledge
    }

    /// Ships this player has placed, by length.
    pub fn own_fleet(&self) -> &FleetComposition {
        &self.own_fleet
    }

    /// Place a ship on the own board.
    pub fn add_ship(&mut self, ship: &Ship) -> Result<(), BoardError> {
        self.own.add_ship(ship)?;
        self.own_fleet.add(ship.length(), 1)
    }

    /// Replace the own board with a random layout of `fleet`.
    pub fn randomize<R: Rng + ?Sized>(
        &mut self,
        fleet: &FleetComposition,
        rng: &mut R,
    ) -> Result<(), BoardError> {
        self.own_fleet = FleetComposition::empty();
        self.own.generate_random_board(fleet, rng)?;
        self.own_fleet = fleet.clone();
        Ok(())
    }

    /// Clear both boards and forget all sunk ships.
    pub fn reset(&mut self) {
        self.own.clear();
        self.knowledge.clear();
        self.own_fleet = FleetComposition::empty();
        self.opponent_sunk = FleetComposition::empty();
    }

    /// Resolve the opponent's strike at `coord` against the own board.
    pub fn respond_to_strike(&mut self, coord: Coord) -> Result<Response, BoardError> {
        let response = match self.own.hit(coord)? {
            Shot::Miss => Response::Miss,
            Shot::Hit if !self.own.ship_destroyed(coord) => Response::Hit,
            Shot::Hit if self.own.all_ships_destroyed() => Response::GameOver,
            Shot::Hit => Response::Sunk,
        };
        debug!("{}: strike at {} -> {:?}", self.name, coord, response);
        Ok(response)
    }

    /// Record the opponent's `response` to this player's strike at `coord`.
    ///
    /// Returns the length of the ship sunk by the strike, if any.
    pub fn record_response(
        &mut self,
        coord: Coord,
        response: Response,
    ) -> Result<Option<usize>, BoardError> {
        if !response.is_hit() {
            self.knowledge.mark_miss(coord)?;
            return Ok(None);
        }
        self.knowledge.mark_hit(coord)?;
        self.knowledge
            .update_redundant_squares(coord, response.is_sunk())?;
        if !response.is_sunk() {
            return Ok(None);
        }
        let length = self.knowledge.ship_at(coord)?.length();
        self.opponent_sunk.add(length, 1)?;
        debug!("{}: sank a ship of length {}", self.name, length);
        Ok(Some(length))
    }

    /// Opponent ships still afloat, by length.
    pub fn opponent_remaining(&self) -> FleetComposition {
        let mut remaining = self.opponent_fleet.clone();
        for (length, count) in self.opponent_sunk.iter() {
            for _ in 0..count {
                remaining.remove_one(length);
            }
        }
        remaining
    }

    /// `true` once every own ship segment has been struck.
    pub fn has_lost(&self) -> bool {
        self.own.all_ships_destroyed()
    }
}
