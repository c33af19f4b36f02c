//! # Broadcast Event Sink
//!
//! Publishes registry change notifications on a `tokio::sync::broadcast`
//! channel. Multi-consumer; publishing with no subscribers drops the event.

use crate::domain::entities::RegistryEvent;
use crate::ports::outbound::RegistryEventSink;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::broadcast;
use tracing::{debug, warn};

/// Maximum events to buffer per subscriber before lagging.
pub const DEFAULT_EVENT_CAPACITY: usize = 256;

/// In-memory registry event bus.
pub struct BroadcastEventSink {
    sender: broadcast::Sender<RegistryEvent>,
    events_published: AtomicU64,
}

impl BroadcastEventSink {
    /// Create a sink with default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_EVENT_CAPACITY)
    }

    /// Create a sink with the given per-subscriber buffer.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self {
            sender,
            events_published: AtomicU64::new(0),
        }
    }

    /// Receive every event published from now on.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<RegistryEvent> {
        self.sender.subscribe()
    }

    /// Number of active subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    /// Total events published, delivered or not.
    pub fn events_published(&self) -> u64 {
        self.events_published.load(Ordering::Relaxed)
    }
}

impl Default for BroadcastEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistryEventSink for BroadcastEventSink {
    fn publish(&self, event: RegistryEvent) -> usize {
        self.events_published.fetch_add(1, Ordering::Relaxed);

        match self.sender.send(event) {
            Ok(receivers) => {
                debug!(receivers, "registry event published");
                receivers
            }
            Err(e) => {
                warn!(event = ?e.0, "registry event dropped (no receivers)");
                0
            }
        }
    }
}
