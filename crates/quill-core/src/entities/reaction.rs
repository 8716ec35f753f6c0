//! Reaction entity - a user's like or dislike on an article or comment

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Polarity of a stored reaction
///
/// The neutral state has no variant: it is the absence of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionValue {
    Like,
    Dislike,
}

impl ReactionValue {
    /// Storage representation (`1` = like, `-1` = dislike)
    #[inline]
    pub const fn as_i16(self) -> i16 {
        match self {
            Self::Like => 1,
            Self::Dislike => -1,
        }
    }

    /// Decode the storage representation
    pub fn from_i16(value: i16) -> Result<Self, DomainError> {
        match value {
            1 => Ok(Self::Like),
            -1 => Ok(Self::Dislike),
            other => Err(DomainError::InternalError(format!(
                "invalid stored reaction value: {other}"
            ))),
        }
    }

    /// Lowercase name, as used on the wire
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Dislike => "dislike",
        }
    }
}

impl fmt::Display for ReactionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reaction entity
///
/// At most one exists per `(user_id, target_id)` pair within a target kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reaction {
    pub target_id: Snowflake,
    pub user_id: Snowflake,
    pub value: ReactionValue,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Reaction {
    /// Create a new Reaction stamped with the current time
    pub fn new(target_id: Snowflake, user_id: Snowflake, value: ReactionValue) -> Self {
        let now = Utc::now();
        Self {
            target_id,
            user_id,
            value,
            created_at: now,
            updated_at: now,
        }
    }

    #[inline]
    pub fn is_like(&self) -> bool {
        self.value == ReactionValue::Like
    }
}

/// Like/dislike totals for a single target
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionCounts {
    pub likes: i64,
    pub dislikes: i64,
}

impl ReactionCounts {
    pub fn new(likes: i64, dislikes: i64) -> Self {
        Self { likes, dislikes }
    }

    /// Total number of reactions of either polarity
    pub fn total(&self) -> i64 {
        self.likes + self.dislikes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_storage_codes() {
        assert_eq!(ReactionValue::Like.as_i16(), 1);
        assert_eq!(ReactionValue::Dislike.as_i16(), -1);
        assert_eq!(ReactionValue::from_i16(1).unwrap(), ReactionValue::Like);
        assert_eq!(ReactionValue::from_i16(-1).unwrap(), ReactionValue::Dislike);
        assert!(ReactionValue::from_i16(0).is_err());
    }

    #[test]
    fn test_value_serde() {
        assert_eq!(serde_json::to_string(&ReactionValue::Dislike).unwrap(), "\"dislike\"");
        let v: ReactionValue = serde_json::from_str("\"like\"").unwrap();
        assert_eq!(v, ReactionValue::Like);
    }

    #[test]
    fn test_reaction_creation() {
        let reaction = Reaction::new(Snowflake::new(1), Snowflake::new(100), ReactionValue::Like);
        assert_eq!(reaction.target_id, Snowflake::new(1));
        assert_eq!(reaction.user_id, Snowflake::new(100));
        assert!(reaction.is_like());
        assert_eq!(reaction.created_at, reaction.updated_at);
    }

    #[test]
    fn test_counts_total() {
        assert_eq!(ReactionCounts::new(3, 2).total(), 5);
        assert_eq!(ReactionCounts::default().total(), 0);
    }
}
