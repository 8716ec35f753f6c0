//! In-process event publisher over `tokio::sync::broadcast`

use async_trait::async_trait;
use tokio::sync::broadcast;
use tracing::debug;

use quill_core::traits::{EventPublisher, RepoResult};
use quill_core::DomainEvent;

/// Fans domain events out to every subscriber
#[derive(Debug, Clone)]
pub struct BroadcastPublisher {
    sender: broadcast::Sender<DomainEvent>,
}

impl BroadcastPublisher {
    /// Create a publisher buffering up to `capacity` events per subscriber
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Subscribe to events published from now on
    pub fn subscribe(&self) -> broadcast::Receiver<DomainEvent> {
        self.sender.subscribe()
    }

    /// Number of active subscribers
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

#[async_trait]
impl EventPublisher for BroadcastPublisher {
    async fn publish(&self, event: &DomainEvent) -> RepoResult<()> {
        // Sending with no subscribers is not an error
        match self.sender.send(event.clone()) {
            Ok(receivers) => debug!(event_type = event.event_type(), receivers, "Event broadcast"),
            Err(_) => debug!(event_type = event.event_type(), "No event subscribers"),
        }
        Ok(())
    }
}
