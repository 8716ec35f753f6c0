//! Service context - dependency container for services
//!
//! Holds the reaction stores and target lookups for each target kind, the
//! event publisher, and the JWT service.

use std::sync::Arc;

use quill_common::auth::JwtService;
use quill_core::traits::{EventPublisher, ReactionRepository, TargetLookup};
use quill_core::TargetKind;
use quill_db::PgPool;

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Passed by reference to every service. Stores are selected by
/// `TargetKind`; both kinds share the same reaction semantics.
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool (absent for the in-memory backend)
    pool: Option<PgPool>,

    // Repositories
    article_reactions: Arc<dyn ReactionRepository>,
    comment_reactions: Arc<dyn ReactionRepository>,

    // Target lookups
    articles: Arc<dyn TargetLookup>,
    comments: Arc<dyn TargetLookup>,

    // Events
    publisher: Arc<dyn EventPublisher>,

    // Services
    jwt_service: Arc<JwtService>,
}

impl ServiceContext {
    // === Database Pool ===

    /// Get the PostgreSQL connection pool, if the store is database-backed
    pub fn pool(&self) -> Option<&PgPool> {
        self.pool.as_ref()
    }

    // === Repositories ===

    /// Get the reaction repository for a target kind
    pub fn reaction_repo(&self, kind: TargetKind) -> &dyn ReactionRepository {
        match kind {
            TargetKind::Article => self.article_reactions.as_ref(),
            TargetKind::Comment => self.comment_reactions.as_ref(),
        }
    }

    /// Get the target lookup for a target kind
    pub fn target_lookup(&self, kind: TargetKind) -> &dyn TargetLookup {
        match kind {
            TargetKind::Article => self.articles.as_ref(),
            TargetKind::Comment => self.comments.as_ref(),
        }
    }

    // === Events ===

    /// Get the domain event publisher
    pub fn publisher(&self) -> &dyn EventPublisher {
        self.publisher.as_ref()
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &self.pool.as_ref().map(|_| "PgPool"))
            .field("repositories", &"...")
            .field("lookups", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    article_reactions: Option<Arc<dyn ReactionRepository>>,
    comment_reactions: Option<Arc<dyn ReactionRepository>>,
    articles: Option<Arc<dyn TargetLookup>>,
    comments: Option<Arc<dyn TargetLookup>>,
    publisher: Option<Arc<dyn EventPublisher>>,
    jwt_service: Option<Arc<JwtService>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn article_reactions(mut self, repo: Arc<dyn ReactionRepository>) -> Self {
        self.article_reactions = Some(repo);
        self
    }

    pub fn comment_reactions(mut self, repo: Arc<dyn ReactionRepository>) -> Self {
        self.comment_reactions = Some(repo);
        self
    }

    pub fn articles(mut self, lookup: Arc<dyn TargetLookup>) -> Self {
        self.articles = Some(lookup);
        self
    }

    pub fn comments(mut self, lookup: Arc<dyn TargetLookup>) -> Self {
        self.comments = Some(lookup);
        self
    }

    pub fn publisher(mut self, publisher: Arc<dyn EventPublisher>) -> Self {
        self.publisher = Some(publisher);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if a required dependency is missing
    /// or a store/lookup is bound to the wrong target kind
    pub fn build(self) -> ServiceResult<ServiceContext> {
        let required = |name: &str| ServiceError::validation(format!("{name} is required"));

        let context = ServiceContext {
            pool: self.pool,
            article_reactions: self.article_reactions.ok_or_else(|| required("article_reactions"))?,
            comment_reactions: self.comment_reactions.ok_or_else(|| required("comment_reactions"))?,
            articles: self.articles.ok_or_else(|| required("articles"))?,
            comments: self.comments.ok_or_else(|| required("comments"))?,
            publisher: self.publisher.ok_or_else(|| required("publisher"))?,
            jwt_service: self.jwt_service.ok_or_else(|| required("jwt_service"))?,
        };

        for kind in [TargetKind::Article, TargetKind::Comment] {
            if context.reaction_repo(kind).kind() != kind {
                return Err(ServiceError::validation(format!(
                    "{} reaction store is bound to the wrong target kind",
                    kind.noun()
                )));
            }
            if context.target_lookup(kind).kind() != kind {
                return Err(ServiceError::validation(format!(
                    "{} lookup is bound to the wrong target kind",
                    kind.noun()
                )));
            }
        }

        Ok(context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::BroadcastPublisher;
    use quill_db::{InMemoryReactionRepository, InMemoryTargetLookup};

    fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::new()
            .article_reactions(Arc::new(InMemoryReactionRepository::new(TargetKind::Article)))
            .comment_reactions(Arc::new(InMemoryReactionRepository::new(TargetKind::Comment)))
            .articles(Arc::new(InMemoryTargetLookup::new(TargetKind::Article)))
            .comments(Arc::new(InMemoryTargetLookup::new(TargetKind::Comment)))
            .publisher(Arc::new(BroadcastPublisher::new(16)))
            .jwt_service(Arc::new(JwtService::new("secret", 900)))
    }

    #[test]
    fn test_build_in_memory_context() {
        let ctx = builder().build().unwrap();
        assert!(ctx.pool().is_none());
        assert_eq!(ctx.reaction_repo(TargetKind::Comment).kind(), TargetKind::Comment);
        assert_eq!(ctx.target_lookup(TargetKind::Article).kind(), TargetKind::Article);
    }

    #[test]
    fn test_missing_dependency() {
        let err = ServiceContextBuilder::new().build().unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert!(err.to_string().contains("article_reactions is required"));
    }

    #[test]
    fn test_mismatched_kind_is_rejected() {
        let err = builder()
            .comment_reactions(Arc::new(InMemoryReactionRepository::new(TargetKind::Article)))
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("comment reaction store"));
    }
}
