//! Carrying [`Message`]s between two peers.
//!
//! Concrete network channels live outside this crate; anything that can move
//! a frame each way can drive a game by implementing [`Transport`].

use crate::protocol::Message;

#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    async fn send(&mut self, msg: Message) -> anyhow::Result<()>;
    async fn recv(&mut self) -> anyhow::Result<Message>;
}

pub mod in_memory;
