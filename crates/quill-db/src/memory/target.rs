//! In-memory implementation of TargetLookup

use async_trait::async_trait;
use dashmap::DashMap;

use quill_core::traits::{RepoResult, TargetLookup};
use quill_core::{Snowflake, TargetKind};

/// Known targets mapped to their author
#[derive(Debug)]
pub struct InMemoryTargetLookup {
    kind: TargetKind,
    owners: DashMap<Snowflake, Snowflake>,
}

impl InMemoryTargetLookup {
    pub fn new(kind: TargetKind) -> Self {
        Self {
            kind,
            owners: DashMap::new(),
        }
    }

    /// Register a target authored by `owner_id`
    pub fn add(&self, target_id: Snowflake, owner_id: Snowflake) {
        self.owners.insert(target_id, owner_id);
    }

    /// Forget a target; returns whether it was known
    pub fn remove(&self, target_id: Snowflake) -> bool {
        self.owners.remove(&target_id).is_some()
    }
}

#[async_trait]
impl TargetLookup for InMemoryTargetLookup {
    fn kind(&self) -> TargetKind {
        self.kind
    }

    async fn exists(&self, target_id: Snowflake) -> RepoResult<bool> {
        Ok(self.owners.contains_key(&target_id))
    }

    async fn owner(&self, target_id: Snowflake) -> RepoResult<Option<Snowflake>> {
        Ok(self.owners.get(&target_id).map(|owner| *owner))
    }
}
