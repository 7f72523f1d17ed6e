//! Broadcast-based distribution of adapter status events.
//!
//! Replaces the event-emitter inheritance of the original platform with an
//! explicit subscription interface: observers call [`StatusBus::subscribe`]
//! and receive every [`StatusEvent`] published after that point. Publishing
//! never blocks and never fails from the publisher's point of view; events
//! sent while nobody is subscribed are dropped.

use tokio::sync::broadcast;

use crate::domain::models::{AdapterStatus, StatusEvent};

/// Default capacity of the broadcast channel.
///
/// Status events are low-rate (one per health probe), so a small buffer is
/// plenty; a lagging subscriber loses the oldest events, not the newest.
const DEFAULT_CAPACITY: usize = 16;

/// Publish/subscribe channel for adapter status changes.
#[derive(Debug, Clone)]
pub struct StatusBus {
    sender: broadcast::Sender<StatusEvent>,
}

impl StatusBus {
    /// Create a bus with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a bus with an explicit channel capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Subscribe to status events published after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<StatusEvent> {
        self.sender.subscribe()
    }

    /// Publish a status event for the given adapter id.
    ///
    /// Returns the event that was published. A send error only means no
    /// subscriber is currently listening, which is not a failure here.
    pub fn publish(&self, adapter_id: &str, status: AdapterStatus) -> StatusEvent {
        let event = StatusEvent::now(adapter_id, status);
        let receivers = self.sender.send(event.clone()).unwrap_or(0);
        tracing::debug!(
            adapter_id = adapter_id,
            status = %status,
            receivers = receivers,
            "published status event"
        );
        event
    }

    /// Number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for StatusBus {
    fn default() -> Self {
        Self::new()
    }
}
