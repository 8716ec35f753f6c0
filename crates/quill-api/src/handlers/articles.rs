//! Article reaction handlers

use axum::{extract::State, response::Response, Json};
use quill_core::{ReactionValue, TargetKind};
use quill_service::{
    MyReactionResponse, ReactionCountsResponse, TopTargetResponse, TopTargetsQuery,
};

use crate::extractors::{AuthUser, SnowflakePath, TargetIdPath, ValidatedQuery};
use crate::handlers::reactions;
use crate::response::ApiResult;
use crate::state::AppState;

const KIND: TargetKind = TargetKind::Article;

/// Like article (repeat to remove the like)
///
/// POST /articles/{id}/like
pub async fn like_article(
    State(state): State<AppState>,
    auth: AuthUser,
    SnowflakePath(path): SnowflakePath<TargetIdPath>,
) -> ApiResult<Response> {
    reactions::toggle(&state, KIND, &auth, &path, ReactionValue::Like).await
}

/// Dislike article (repeat to remove the dislike)
///
/// POST /articles/{id}/dislike
pub async fn dislike_article(
    State(state): State<AppState>,
    auth: AuthUser,
    SnowflakePath(path): SnowflakePath<TargetIdPath>,
) -> ApiResult<Response> {
    reactions::toggle(&state, KIND, &auth, &path, ReactionValue::Dislike).await
}

/// Get article reaction counts
///
/// GET /articles/{id}/reactions
pub async fn get_article_reactions(
    State(state): State<AppState>,
    SnowflakePath(path): SnowflakePath<TargetIdPath>,
) -> ApiResult<Json<ReactionCountsResponse>> {
    reactions::counts(&state, KIND, &path).await
}

/// Get the current user's reaction on article
///
/// GET /articles/{id}/reactions/@me
pub async fn get_my_article_reaction(
    State(state): State<AppState>,
    auth: AuthUser,
    SnowflakePath(path): SnowflakePath<TargetIdPath>,
) -> ApiResult<Json<MyReactionResponse>> {
    reactions::my_reaction(&state, KIND, &auth, &path).await
}

/// Most-liked articles
///
/// GET /articles/top-liked?limit={n}
pub async fn get_top_liked_articles(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<TopTargetsQuery>,
) -> ApiResult<Json<Vec<TopTargetResponse>>> {
    reactions::top_liked(&state, KIND, query).await
}
