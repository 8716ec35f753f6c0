//! Reaction service
//!
//! Toggles likes/dislikes on articles and comments and answers count queries.

use chrono::Utc;
use tracing::{debug, info, instrument, warn};

use quill_core::events::{ReactionAppliedEvent, ReactionRevertedEvent};
use quill_core::{
    DomainError, DomainEvent, Reaction, ReactionCounts, ReactionTransition, ReactionValue,
    Snowflake, TargetKind, ToggleOutcome,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Number of entries returned by `top_targets_by_likes` when no limit is given
pub const DEFAULT_TOP_LIMIT: u32 = 10;

/// Upper bound on `top_targets_by_likes` results
pub const MAX_TOP_LIMIT: u32 = 100;

/// Result of a toggle, ready to be rendered into a response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleResult {
    pub kind: TargetKind,
    pub transition: ReactionTransition,
    pub counts: ReactionCounts,
}

impl ToggleResult {
    pub fn outcome(&self) -> ToggleOutcome {
        self.transition.outcome()
    }

    /// Value stored for the user after the toggle
    pub fn value(&self) -> Option<ReactionValue> {
        self.transition.resulting_value()
    }

    /// Human-readable acknowledgement
    pub fn message(&self) -> String {
        let noun = self.kind.noun();
        match (self.outcome(), self.transition.intent()) {
            (ToggleOutcome::Applied, ReactionValue::Like) => format!("You liked this {noun}"),
            (ToggleOutcome::Applied, ReactionValue::Dislike) => format!("You disliked this {noun}"),
            (ToggleOutcome::Reverted, ReactionValue::Like) => {
                format!("You removed your like from this {noun}")
            }
            (ToggleOutcome::Reverted, ReactionValue::Dislike) => {
                format!("You removed your dislike from this {noun}")
            }
        }
    }
}

/// Reaction service bound to one target kind
pub struct ReactionService<'a> {
    ctx: &'a ServiceContext,
    kind: TargetKind,
}

impl<'a> ReactionService<'a> {
    /// Create a new ReactionService
    pub fn new(ctx: &'a ServiceContext, kind: TargetKind) -> Self {
        Self { ctx, kind }
    }

    /// Apply a like/dislike intent
    ///
    /// Creates, flips, or removes the user's reaction. A lost race on the
    /// same (user, target) pair is retried once; a second loss is returned
    /// as `DomainError::WriteConflict`.
    #[instrument(skip(self), fields(kind = %self.kind))]
    pub async fn toggle(
        &self,
        user_id: Snowflake,
        target_id: Snowflake,
        intent: ReactionValue,
    ) -> ServiceResult<ToggleResult> {
        self.require_target(target_id).await?;

        let transition = match self.apply(user_id, target_id, intent).await {
            Err(DomainError::WriteConflict) => {
                warn!(
                    user_id = %user_id,
                    target_id = %target_id,
                    "Concurrent reaction write detected, retrying"
                );
                self.apply(user_id, target_id, intent).await?
            }
            result => result?,
        };

        let counts = self.load_counts(target_id).await?;

        info!(
            user_id = %user_id,
            target_id = %target_id,
            intent = %intent,
            outcome = ?transition.outcome(),
            likes = counts.likes,
            dislikes = counts.dislikes,
            "Reaction toggled"
        );

        self.publish(user_id, target_id, transition).await;

        Ok(ToggleResult {
            kind: self.kind,
            transition,
            counts,
        })
    }

    /// Like and dislike totals for a target
    #[instrument(skip(self), fields(kind = %self.kind))]
    pub async fn counts(&self, target_id: Snowflake) -> ServiceResult<ReactionCounts> {
        self.require_target(target_id).await?;
        self.load_counts(target_id).await
    }

    /// Whether the user has any reaction on the target
    #[instrument(skip(self), fields(kind = %self.kind))]
    pub async fn has_reacted(&self, user_id: Snowflake, target_id: Snowflake) -> ServiceResult<bool> {
        self.require_target(target_id).await?;
        Ok(self.ctx.reaction_repo(self.kind).exists(user_id, target_id).await?)
    }

    /// The user's current reaction on the target, if any
    #[instrument(skip(self), fields(kind = %self.kind))]
    pub async fn reaction_of(
        &self,
        user_id: Snowflake,
        target_id: Snowflake,
    ) -> ServiceResult<Option<ReactionValue>> {
        self.require_target(target_id).await?;
        let reaction = self.ctx.reaction_repo(self.kind).find(user_id, target_id).await?;
        Ok(reaction.map(|r| r.value))
    }

    /// Most-liked targets, descending by like count, ties by id ascending
    ///
    /// `limit` defaults to `DEFAULT_TOP_LIMIT` and is clamped to
    /// `1..=MAX_TOP_LIMIT`.
    #[instrument(skip(self), fields(kind = %self.kind))]
    pub async fn top_targets_by_likes(
        &self,
        limit: Option<u32>,
    ) -> ServiceResult<Vec<(Snowflake, i64)>> {
        let limit = limit.unwrap_or(DEFAULT_TOP_LIMIT).clamp(1, MAX_TOP_LIMIT);
        Ok(self
            .ctx
            .reaction_repo(self.kind)
            .top_by_likes(i64::from(limit))
            .await?)
    }

    // ========================================================================
    // Helper methods
    // ========================================================================

    async fn require_target(&self, target_id: Snowflake) -> ServiceResult<()> {
        if self.ctx.target_lookup(self.kind).exists(target_id).await? {
            Ok(())
        } else {
            Err(DomainError::target_not_found(self.kind, target_id).into())
        }
    }

    /// One read-decide-write pass using conditional writes
    async fn apply(
        &self,
        user_id: Snowflake,
        target_id: Snowflake,
        intent: ReactionValue,
    ) -> Result<ReactionTransition, DomainError> {
        let repo = self.ctx.reaction_repo(self.kind);
        let current = repo.find(user_id, target_id).await?.map(|r| r.value);
        let transition = ReactionTransition::decide(current, intent);

        let written = match transition {
            ReactionTransition::Create(value) => {
                repo.insert(&Reaction::new(target_id, user_id, value)).await?;
                true
            }
            ReactionTransition::Flip { from, to } => {
                repo.compare_and_set(user_id, target_id, from, to).await?
            }
            ReactionTransition::Remove(value) => {
                repo.compare_and_delete(user_id, target_id, value).await?
            }
        };

        if written {
            Ok(transition)
        } else {
            Err(DomainError::WriteConflict)
        }
    }

    async fn load_counts(&self, target_id: Snowflake) -> ServiceResult<ReactionCounts> {
        let repo = self.ctx.reaction_repo(self.kind);
        let likes = repo.count_by_target(target_id, ReactionValue::Like).await?;
        let dislikes = repo.count_by_target(target_id, ReactionValue::Dislike).await?;
        Ok(ReactionCounts::new(likes, dislikes))
    }

    /// Publish the toggle as a domain event; failures are logged only
    async fn publish(&self, user_id: Snowflake, target_id: Snowflake, transition: ReactionTransition) {
        let owner_id = match self.ctx.target_lookup(self.kind).owner(target_id).await {
            Ok(owner) => owner,
            Err(e) => {
                warn!(target_id = %target_id, error = %e, "Failed to resolve target owner");
                None
            }
        };

        let timestamp = Utc::now();
        let event = match transition {
            ReactionTransition::Create(value) => DomainEvent::ReactionApplied(ReactionAppliedEvent {
                kind: self.kind,
                target_id,
                owner_id,
                user_id,
                value,
                replaced: None,
                timestamp,
            }),
            ReactionTransition::Flip { from, to } => {
                DomainEvent::ReactionApplied(ReactionAppliedEvent {
                    kind: self.kind,
                    target_id,
                    owner_id,
                    user_id,
                    value: to,
                    replaced: Some(from),
                    timestamp,
                })
            }
            ReactionTransition::Remove(value) => {
                DomainEvent::ReactionReverted(ReactionRevertedEvent {
                    kind: self.kind,
                    target_id,
                    owner_id,
                    user_id,
                    value,
                    timestamp,
                })
            }
        };

        match self.ctx.publisher().publish(&event).await {
            Ok(()) => debug!(event_type = event.event_type(), "Reaction event published"),
            Err(e) => warn!(
                event_type = event.event_type(),
                error = %e,
                "Failed to publish reaction event"
            ),
        }
    }
}
