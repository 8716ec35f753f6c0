//! Route definitions
//!
//! All API routes organized by target kind and mounted under /api/v1.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{articles, comments, health};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new()
        // API v1 endpoints
        .nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(article_routes())
        .merge(comment_routes())
}

/// Article reaction routes
fn article_routes() -> Router<AppState> {
    Router::new()
        .route("/articles/top-liked", get(articles::get_top_liked_articles))
        .route("/articles/:id/like", post(articles::like_article))
        .route("/articles/:id/dislike", post(articles::dislike_article))
        .route("/articles/:id/reactions", get(articles::get_article_reactions))
        .route("/articles/:id/reactions/@me", get(articles::get_my_article_reaction))
}

/// Comment reaction routes
fn comment_routes() -> Router<AppState> {
    Router::new()
        .route("/comments/top-liked", get(comments::get_top_liked_comments))
        .route("/comments/:id/like", post(comments::like_comment))
        .route("/comments/:id/dislike", post(comments::dislike_comment))
        .route("/comments/:id/reactions", get(comments::get_comment_reactions))
        .route("/comments/:id/reactions/@me", get(comments::get_my_comment_reaction))
}
