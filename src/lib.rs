#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod board;
mod combat;
mod common;
mod config;
mod fleet;
mod grid;
#[cfg(feature = "std")]
mod logging;
mod player;
pub mod protocol;
mod redundancy;
mod ship;
#[cfg(feature = "std")]
pub mod transport;

pub use board::*;
pub use common::*;
pub use config::*;
pub use fleet::*;
pub use grid::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
pub use player::*;
pub use protocol::{Message, ProtocolError, Response, END_TOKEN};
pub use ship::*;
#[cfg(feature = "std")]
pub use transport::{in_memory::InMemoryTransport, Transport};
