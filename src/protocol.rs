//! Move/response wire contract between two peers.
//!
//! A move is two integers `"x,y"`. A response is one integer:
//!
//! | code | meaning                    |
//! |------|----------------------------|
//! | `0`  | miss                       |
//! | `1`  | hit                        |
//! | `2`  | hit, ship sunk             |
//! | `3`  | hit, ship sunk, game over  |
//!
//! A peer that forfeits sends the single integer [`END_TOKEN`] in place of a
//! move.

use alloc::format;
use alloc::string::{String, ToString};
use core::fmt;

use crate::grid::Coord;

/// Token sent on the move channel to end the game.
pub const END_TOKEN: i32 = 3;

/// Answer to a strike, in wire order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Response {
    Miss = 0,
    Hit = 1,
    Sunk = 2,
    GameOver = 3,
}

impl Response {
    /// Integer code on the wire.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// `true` for every response except [`Miss`](Response::Miss).
    pub fn is_hit(self) -> bool {
        self != Response::Miss
    }

    /// `true` when the strike sank a ship.
    pub fn is_sunk(self) -> bool {
        matches!(self, Response::Sunk | Response::GameOver)
    }

    pub fn is_game_over(self) -> bool {
        self == Response::GameOver
    }

    /// Only a miss hands the turn to the other player.
    pub fn ends_turn(self) -> bool {
        self == Response::Miss
    }
}

impl TryFrom<u8> for Response {
    type Error = ProtocolError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Response::Miss),
            1 => Ok(Response::Hit),
            2 => Ok(Response::Sunk),
            3 => Ok(Response::GameOver),
            other => Err(ProtocolError::UnknownResponse(other as i64)),
        }
    }
}

/// Errors decoding a wire token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// Token is not one or two comma-separated integers.
    Malformed(String),
    /// Integer is not a response code.
    UnknownResponse(i64),
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtocolError::Malformed(token) => write!(f, "Malformed token {:?}", token),
            ProtocolError::UnknownResponse(code) => write!(f, "Unknown response code {}", code),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ProtocolError {}

/// A single frame exchanged between peers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Message {
    /// Strike the given cell.
    Strike(Coord),
    /// Answer to the peer's last strike.
    Respond(Response),
    /// Forfeit; the receiver wins.
    End,
}

impl Message {
    /// Text form of the frame.
    pub fn encode(&self) -> String {
        match self {
            Message::Strike(c) => format!("{},{}", c.x, c.y),
            Message::Respond(r) => r.code().to_string(),
            Message::End => END_TOKEN.to_string(),
        }
    }

    /// Decode a token read from the move channel: a strike or the end token.
    pub fn decode_move(token: &str) -> Result<Self, ProtocolError> {
        let malformed = || ProtocolError::Malformed(token.to_string());
        let mut parts = token.trim().split(',');
        let first = parse_int(parts.next(), token)?;
        match (parts.next(), parts.next()) {
            (None, _) if first == END_TOKEN => Ok(Message::End),
            (Some(second), None) => {
                let y = parse_int(Some(second), token)?;
                Ok(Message::Strike(Coord::new(first, y)))
            }
            _ => Err(malformed()),
        }
    }

    /// Decode a token read from the response channel.
    pub fn decode_response(token: &str) -> Result<Self, ProtocolError> {
        let code: i64 = token
            .trim()
            .parse()
            .map_err(|_| ProtocolError::Malformed(token.to_string()))?;
        let code = u8::try_from(code).map_err(|_| ProtocolError::UnknownResponse(code))?;
        Response::try_from(code).map(Message::Respond)
    }
}

fn parse_int(part: Option<&str>, token: &str) -> Result<i32, ProtocolError> {
    part.and_then(|p| p.trim().parse().ok())
        .ok_or_else(|| ProtocolError::Malformed(token.to_string()))
}
