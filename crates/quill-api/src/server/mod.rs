//! Server setup and initialization
//!
//! Provides the application builder, state construction for each storage
//! backend, and the server runner.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use quill_common::{AppConfig, AppError, JwtService, StoreBackend};
use quill_core::{Snowflake, TargetKind};
use quill_db::{
    create_pool, run_migrations, InMemoryReactionRepository, InMemoryTargetLookup,
    PgReactionRepository, PgTargetLookup,
};
use quill_service::{spawn_notification_listener, BroadcastPublisher, ServiceContextBuilder};
use tokio::net::TcpListener;
use tracing::{debug, info, warn};

use crate::middleware::{apply_middleware, apply_middleware_with_config};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Events buffered per subscriber before slow consumers start lagging
const EVENT_CHANNEL_CAPACITY: usize = 1024;

/// Handles to the in-memory target registries and reaction stores
///
/// Articles and comments are owned by another module; with the in-memory
/// backend they are registered here instead. Removing a target also drops
/// its reactions, as the foreign-key cascade does in PostgreSQL.
#[derive(Debug, Clone)]
pub struct InMemoryTargets {
    articles: Arc<InMemoryTargetLookup>,
    comments: Arc<InMemoryTargetLookup>,
    article_reactions: Arc<InMemoryReactionRepository>,
    comment_reactions: Arc<InMemoryReactionRepository>,
}

impl InMemoryTargets {
    fn new() -> Self {
        Self {
            articles: Arc::new(InMemoryTargetLookup::new(TargetKind::Article)),
            comments: Arc::new(InMemoryTargetLookup::new(TargetKind::Comment)),
            article_reactions: Arc::new(InMemoryReactionRepository::new(TargetKind::Article)),
            comment_reactions: Arc::new(InMemoryReactionRepository::new(TargetKind::Comment)),
        }
    }

    fn parts(&self, kind: TargetKind) -> (&InMemoryTargetLookup, &InMemoryReactionRepository) {
        match kind {
            TargetKind::Article => (&self.articles, &self.article_reactions),
            TargetKind::Comment => (&self.comments, &self.comment_reactions),
        }
    }

    /// Register a target authored by `owner_id`
    pub fn add(&self, kind: TargetKind, target_id: Snowflake, owner_id: Snowflake) {
        self.parts(kind).0.add(target_id, owner_id);
    }

    /// Forget a target and every reaction on it
    ///
    /// Returns whether the target was registered.
    pub fn remove(&self, kind: TargetKind, target_id: Snowflake) -> bool {
        let (lookup, reactions) = self.parts(kind);
        let known = lookup.remove(target_id);
        let dropped = reactions.remove_target(target_id);
        debug!(%kind, %target_id, dropped, "In-memory target removed");
        known
    }
}

/// Build the Axum application with default middleware (no rate limiting)
pub fn create_app(state: AppState) -> Router {
    let timeout = Duration::from_secs(state.config().app.request_timeout_secs);
    let router = create_router().merge(health_routes());
    apply_middleware(router, timeout).with_state(state)
}

/// Build the Axum application with rate limiting and CORS from configuration
///
/// Health routes are mounted outside the rate limiter.
pub fn create_app_with_config(state: AppState) -> Result<Router, AppError> {
    let api = apply_middleware_with_config(create_router(), state.config())?;
    let timeout = Duration::from_secs(state.config().app.request_timeout_secs);
    let health = apply_middleware(health_routes(), timeout);
    Ok(api.merge(health).with_state(state))
}

/// Create the event publisher and start the notification listener
fn create_publisher() -> Arc<BroadcastPublisher> {
    let publisher = Arc::new(BroadcastPublisher::new(EVENT_CHANNEL_CAPACITY));
    spawn_notification_listener(publisher.subscribe());
    publisher
}

/// Initialize all dependencies and create AppState for the configured backend
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    match config.database.backend {
        StoreBackend::Postgres => create_postgres_state(config).await,
        StoreBackend::Memory => {
            warn!("Using in-memory store; reactions are lost on restart and no targets are registered");
            let (state, _) = create_in_memory_state(config)?;
            Ok(state)
        }
    }
}

async fn create_postgres_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let pool = create_pool(&config.database)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    if config.database.run_migrations {
        run_migrations(&pool)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
    }

    let jwt_service = Arc::new(JwtService::new(
        &config.jwt.secret,
        config.jwt.access_token_expiry,
    ));

    let service_context = ServiceContextBuilder::new()
        .pool(pool.clone())
        .article_reactions(Arc::new(PgReactionRepository::new(pool.clone(), TargetKind::Article)))
        .comment_reactions(Arc::new(PgReactionRepository::new(pool.clone(), TargetKind::Comment)))
        .articles(Arc::new(PgTargetLookup::new(pool.clone(), TargetKind::Article)))
        .comments(Arc::new(PgTargetLookup::new(pool, TargetKind::Comment)))
        .publisher(create_publisher())
        .jwt_service(jwt_service)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Create AppState over the in-memory store
///
/// Must be called within a Tokio runtime (the notification listener is spawned).
pub fn create_in_memory_state(config: AppConfig) -> Result<(AppState, InMemoryTargets), AppError> {
    let targets = InMemoryTargets::new();

    let jwt_service = Arc::new(JwtService::new(
        &config.jwt.secret,
        config.jwt.access_token_expiry,
    ));

    let service_context = ServiceContextBuilder::new()
        .article_reactions(targets.article_reactions.clone())
        .comment_reactions(targets.comment_reactions.clone())
        .articles(targets.articles.clone())
        .comments(targets.comments.clone())
        .publisher(create_publisher())
        .jwt_service(jwt_service)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok((AppState::new(service_context, config), targets))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .api
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid API_HOST/API_PORT: {e}")))?;

    // Create app state
    let state = create_app_state(config).await?;

    // Build application
    let app = create_app_with_config(state)?;

    // Run server
    run_server(app, addr).await
}
