//! Repository traits - abstractions over data access
//!
//! These traits define the contract for data access without specifying
//! the implementation (PostgreSQL, in-memory, etc.). Reaction repositories
//! are scoped to one `TargetKind` at construction.

use async_trait::async_trait;

use crate::entities::{Reaction, ReactionValue, TargetKind};
use crate::error::DomainError;
use crate::events::DomainEvent;
use crate::value_objects::Snowflake;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Reaction Repository
// ============================================================================

#[async_trait]
pub trait ReactionRepository: Send + Sync {
    /// Target kind this repository stores reactions for
    fn kind(&self) -> TargetKind;

    /// Find the reaction of a user on a target
    async fn find(&self, user_id: Snowflake, target_id: Snowflake) -> RepoResult<Option<Reaction>>;

    /// Check whether the user has any reaction on the target
    async fn exists(&self, user_id: Snowflake, target_id: Snowflake) -> RepoResult<bool>;

    /// Create or overwrite the reaction, refreshing `updated_at`
    async fn put(
        &self,
        user_id: Snowflake,
        target_id: Snowflake,
        value: ReactionValue,
    ) -> RepoResult<Reaction>;

    /// Remove the reaction; returns whether a row was deleted
    async fn delete(&self, user_id: Snowflake, target_id: Snowflake) -> RepoResult<bool>;

    /// Insert a new reaction
    ///
    /// Fails with `DomainError::WriteConflict` if the pair already has one.
    async fn insert(&self, reaction: &Reaction) -> RepoResult<()>;

    /// Overwrite the value only if it currently equals `expected`
    async fn compare_and_set(
        &self,
        user_id: Snowflake,
        target_id: Snowflake,
        expected: ReactionValue,
        value: ReactionValue,
    ) -> RepoResult<bool>;

    /// Delete only if the stored value equals `expected`
    async fn compare_and_delete(
        &self,
        user_id: Snowflake,
        target_id: Snowflake,
        expected: ReactionValue,
    ) -> RepoResult<bool>;

    /// Count reactions of one polarity on a target
    async fn count_by_target(&self, target_id: Snowflake, value: ReactionValue) -> RepoResult<i64>;

    /// Targets ordered by like count (descending), ties by id ascending
    async fn top_by_likes(&self, limit: i64) -> RepoResult<Vec<(Snowflake, i64)>>;

    /// Remove every reaction left by a user
    async fn delete_by_user(&self, user_id: Snowflake) -> RepoResult<u64>;
}

// ============================================================================
// Target Lookup
// ============================================================================

/// Existence and ownership checks supplied by the articles/comments modules
#[async_trait]
pub trait TargetLookup: Send + Sync {
    /// Target kind this lookup resolves
    fn kind(&self) -> TargetKind;

    /// Check if the target exists
    async fn exists(&self, target_id: Snowflake) -> RepoResult<bool>;

    /// Author of the target, if it exists
    async fn owner(&self, target_id: Snowflake) -> RepoResult<Option<Snowflake>>;
}

// ============================================================================
// Event Publisher
// ============================================================================

#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publish an event to downstream consumers
    async fn publish(&self, event: &DomainEvent) -> RepoResult<()>;
}
