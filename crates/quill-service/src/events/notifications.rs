//! Author notifications for reactions on their content

use tokio::sync::broadcast::{self, error::RecvError};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use quill_core::DomainEvent;

/// Consume reaction events and emit a notification for the target's author
///
/// Runs until every publisher handle is dropped.
pub fn spawn_notification_listener(mut rx: broadcast::Receiver<DomainEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            match rx.recv().await {
                Ok(event) => notify(&event),
                Err(RecvError::Lagged(skipped)) => {
                    warn!(skipped, "Notification listener lagged, events dropped");
                }
                Err(RecvError::Closed) => {
                    debug!("Event channel closed, stopping notification listener");
                    break;
                }
            }
        }
    })
}

fn notify(event: &DomainEvent) {
    let DomainEvent::ReactionApplied(applied) = event else {
        return;
    };

    match event.recipient() {
        Some(recipient) => info!(
            recipient = %recipient,
            kind = %applied.kind,
            target_id = %applied.target_id,
            user_id = %applied.user_id,
            value = %applied.value,
            "Notifying author of new reaction"
        ),
        None => debug!(
            target_id = %applied.target_id,
            self_reaction = event.is_self_reaction(),
            "Reaction has no notification recipient"
        ),
    }
}
