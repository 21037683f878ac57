//! Change feed: the "state changed, re-derive view" notification channel.
//!
//! Services publish a [`DomainEvent`] after every successful mutation;
//! subscribers (the WebSocket endpoint, tests) receive them and re-fetch
//! whatever view state they care about. Lagging subscribers drop events
//! rather than blocking publishers.

use tokio::sync::broadcast;
use tracing::debug;

use clubforge_core::events::DomainEvent;

/// Broadcast bus for domain events.
#[derive(Debug, Clone)]
pub struct ChangeFeed {
    tx: broadcast::Sender<DomainEvent>,
}

impl ChangeFeed {
    /// Creates a new feed with the given per-subscriber buffer capacity.
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Publishes an event to all current subscribers.
    ///
    /// Publishing with no subscribers is not an error; the event is
    /// simply dropped.
    pub fn publish(&self, event: DomainEvent) {
        match self.tx.send(event) {
            Ok(receivers) => debug!(receivers, "Domain event published"),
            Err(_) => debug!("Domain event dropped (no subscribers)"),
        }
    }

    /// Opens a new subscription to the feed.
    pub fn subscribe(&self) -> broadcast::Receiver<DomainEvent> {
        self.tx.subscribe()
    }
}

impl Default for ChangeFeed {
    fn default() -> Self {
        Self::new(256)
    }
}
