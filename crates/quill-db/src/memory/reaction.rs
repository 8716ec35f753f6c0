//! In-memory implementation of ReactionRepository

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tracing::instrument;

use quill_core::traits::{ReactionRepository, RepoResult};
use quill_core::{DomainError, Reaction, ReactionValue, Snowflake, TargetKind};

/// Reactions keyed by `(user_id, target_id)`
#[derive(Debug)]
pub struct InMemoryReactionRepository {
    kind: TargetKind,
    reactions: DashMap<(Snowflake, Snowflake), Reaction>,
}

impl InMemoryReactionRepository {
    pub fn new(kind: TargetKind) -> Self {
        Self {
            kind,
            reactions: DashMap::new(),
        }
    }

    /// Number of stored reactions across all targets
    pub fn len(&self) -> usize {
        self.reactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reactions.is_empty()
    }

    /// Drop every reaction on a target (mirrors the cascade on target deletion)
    pub fn remove_target(&self, target_id: Snowflake) -> usize {
        let before = self.reactions.len();
        self.reactions.retain(|(_, target), _| *target != target_id);
        before - self.reactions.len()
    }
}

#[async_trait]
impl ReactionRepository for InMemoryReactionRepository {
    fn kind(&self) -> TargetKind {
        self.kind
    }

    async fn find(&self, user_id: Snowflake, target_id: Snowflake) -> RepoResult<Option<Reaction>> {
        Ok(self
            .reactions
            .get(&(user_id, target_id))
            .map(|r| r.value().clone()))
    }

    async fn exists(&self, user_id: Snowflake, target_id: Snowflake) -> RepoResult<bool> {
        Ok(self.reactions.contains_key(&(user_id, target_id)))
    }

    #[instrument(skip(self), fields(kind = %self.kind))]
    async fn put(
        &self,
        user_id: Snowflake,
        target_id: Snowflake,
        value: ReactionValue,
    ) -> RepoResult<Reaction> {
        let reaction = match self.reactions.entry((user_id, target_id)) {
            Entry::Occupied(mut entry) => {
                let existing = entry.get_mut();
                existing.value = value;
                existing.updated_at = Utc::now();
                existing.clone()
            }
            Entry::Vacant(entry) => entry
                .insert(Reaction::new(target_id, user_id, value))
                .clone(),
        };
        Ok(reaction)
    }

    #[instrument(skip(self), fields(kind = %self.kind))]
    async fn delete(&self, user_id: Snowflake, target_id: Snowflake) -> RepoResult<bool> {
        Ok(self.reactions.remove(&(user_id, target_id)).is_some())
    }

    #[instrument(skip(self, reaction), fields(kind = %self.kind, user_id = %reaction.user_id, target_id = %reaction.target_id))]
    async fn insert(&self, reaction: &Reaction) -> RepoResult<()> {
        match self.reactions.entry((reaction.user_id, reaction.target_id)) {
            Entry::Occupied(_) => Err(DomainError::WriteConflict),
            Entry::Vacant(entry) => {
                entry.insert(reaction.clone());
                Ok(())
            }
        }
    }

    #[instrument(skip(self), fields(kind = %self.kind))]
    async fn compare_and_set(
        &self,
        user_id: Snowflake,
        target_id: Snowflake,
        expected: ReactionValue,
        value: ReactionValue,
    ) -> RepoResult<bool> {
        let Some(mut reaction) = self.reactions.get_mut(&(user_id, target_id)) else {
            return Ok(false);
        };
        if reaction.value != expected {
            return Ok(false);
        }
        reaction.value = value;
        reaction.updated_at = Utc::now();
        Ok(true)
    }

    #[instrument(skip(self), fields(kind = %self.kind))]
    async fn compare_and_delete(
        &self,
        user_id: Snowflake,
        target_id: Snowflake,
        expected: ReactionValue,
    ) -> RepoResult<bool> {
        Ok(self
            .reactions
            .remove_if(&(user_id, target_id), |_, r| r.value == expected)
            .is_some())
    }

    async fn count_by_target(&self, target_id: Snowflake, value: ReactionValue) -> RepoResult<i64> {
        let count = self
            .reactions
            .iter()
            .filter(|r| r.target_id == target_id && r.value == value)
            .count();
        Ok(count as i64)
    }

    async fn top_by_likes(&self, limit: i64) -> RepoResult<Vec<(Snowflake, i64)>> {
        let mut likes: HashMap<Snowflake, i64> = HashMap::new();
        for r in self.reactions.iter().filter(|r| r.is_like()) {
            *likes.entry(r.target_id).or_default() += 1;
        }

        let mut ranked: Vec<(Snowflake, i64)> = likes.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        ranked.truncate(usize::try_from(limit.max(0)).unwrap_or(usize::MAX));
        Ok(ranked)
    }

    #[instrument(skip(self), fields(kind = %self.kind))]
    async fn delete_by_user(&self, user_id: Snowflake) -> RepoResult<u64> {
        let before = self.reactions.len();
        self.reactions.retain(|(user, _), _| *user != user_id);
        Ok((before - self.reactions.len()) as u64)
    }
}
