//! In-process [`Transport`] for tests and the simulation binary.
//!
//! Both ends share a pair of queues. Dropping one end closes the channel: the
//! survivor can still drain frames already queued, after which `recv` fails,
//! and `send` fails at once.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

use tokio::task::yield_now;

use crate::protocol::Message;
use crate::transport::Transport;

type Queue = Arc<Mutex<VecDeque<Message>>>;

/// One end of a pair of in-process queues. Frames sent on one end are
/// received, in order, on the other.
pub struct InMemoryTransport {
    inbox: Queue,
    outbox: Queue,
}

impl InMemoryTransport {
    pub fn pair() -> (Self, Self) {
        let (a_to_b, b_to_a) = (Queue::default(), Queue::default());
        let a = Self {
            inbox: Arc::clone(&b_to_a),
            outbox: Arc::clone(&a_to_b),
        };
        let b = Self {
            inbox: a_to_b,
            outbox: b_to_a,
        };
        (a, b)
    }
}

fn lock(queue: &Queue) -> anyhow::Result<MutexGuard<'_, VecDeque<Message>>> {
    queue
        .lock()
        .map_err(|_| anyhow::anyhow!("Message queue poisoned"))
}

fn peer_gone(queue: &Queue) -> bool {
    Arc::strong_count(queue) == 1
}

#[async_trait::async_trait]
impl Transport for InMemoryTransport {
    async fn send(&mut self, msg: Message) -> anyhow::Result<()> {
        if peer_gone(&self.outbox) {
            anyhow::bail!("Peer closed");
        }
        lock(&self.outbox)?.push_back(msg);
        Ok(())
    }

    async fn recv(&mut self) -> anyhow::Result<Message> {
        loop {
            let next = lock(&self.inbox)?.pop_front();
            match next {
                Some(msg) => return Ok(msg),
                None if peer_gone(&self.inbox) => anyhow::bail!("Channel closed"),
                None => yield_now().await,
            }
        }
    }
}
