//! Domain event publishing
//!
//! Reaction events are fanned out over a tokio broadcast channel. The
//! notification listener is one subscriber; tests and future consumers can
//! subscribe independently.

mod broadcast;
mod notifications;

pub use broadcast::BroadcastPublisher;
pub use notifications::spawn_notification_listener;
