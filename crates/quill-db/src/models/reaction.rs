//! Reaction database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Row of `article_reactions` / `comment_reactions`
///
/// The per-kind key column is aliased to `target_id` in every query.
#[derive(Debug, Clone, FromRow)]
pub struct ReactionModel {
    pub target_id: i64,
    pub user_id: i64,
    pub value: i16,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Aggregated like count (from query)
#[derive(Debug, Clone, FromRow)]
pub struct TargetLikesModel {
    pub target_id: i64,
    pub likes: i64,
}
