//! Domain events - emitted when a reaction changes state
//!
//! Consumed by the notification pipeline (authors hear about likes on their
//! articles and comments) and by audit logging.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::{ReactionValue, TargetKind};
use crate::value_objects::Snowflake;

/// All possible domain events
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DomainEvent {
    ReactionApplied(ReactionAppliedEvent),
    ReactionReverted(ReactionRevertedEvent),
}

impl DomainEvent {
    /// Get the event type name
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::ReactionApplied(_) => "REACTION_APPLIED",
            Self::ReactionReverted(_) => "REACTION_REVERTED",
        }
    }

    /// Get the timestamp of the event
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            Self::ReactionApplied(e) => e.timestamp,
            Self::ReactionReverted(e) => e.timestamp,
        }
    }

    /// Whether the reacting user authored the target
    pub fn is_self_reaction(&self) -> bool {
        let (owner, user) = match self {
            Self::ReactionApplied(e) => (e.owner_id, e.user_id),
            Self::ReactionReverted(e) => (e.owner_id, e.user_id),
        };
        owner == Some(user)
    }

    /// User the event should be delivered to, if anyone
    ///
    /// Reactions on your own content produce no notification.
    pub fn recipient(&self) -> Option<Snowflake> {
        match self {
            Self::ReactionApplied(e) if e.owner_id != Some(e.user_id) => e.owner_id,
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReactionAppliedEvent {
    pub kind: TargetKind,
    pub target_id: Snowflake,
    pub owner_id: Option<Snowflake>,
    pub user_id: Snowflake,
    pub value: ReactionValue,
    /// Set when the reaction replaced one of the opposite polarity
    pub replaced: Option<ReactionValue>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReactionRevertedEvent {
    pub kind: TargetKind,
    pub target_id: Snowflake,
    pub owner_id: Option<Snowflake>,
    pub user_id: Snowflake,
    pub value: ReactionValue,
    pub timestamp: DateTime<Utc>,
}
