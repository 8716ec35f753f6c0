//! Comment reaction handlers

use axum::{extract::State, response::Response, Json};
use quill_core::{ReactionValue, TargetKind};
use quill_service::{
    MyReactionResponse, ReactionCountsResponse, TopTargetResponse, TopTargetsQuery,
};

use crate::extractors::{AuthUser, SnowflakePath, TargetIdPath, ValidatedQuery};
use crate::handlers::reactions;
use crate::response::ApiResult;
use crate::state::AppState;

const KIND: TargetKind = TargetKind::Comment;

/// Like comment (repeat to remove the like)
///
/// POST /comments/{id}/like
pub async fn like_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    SnowflakePath(path): SnowflakePath<TargetIdPath>,
) -> ApiResult<Response> {
    reactions::toggle(&state, KIND, &auth, &path, ReactionValue::Like).await
}

/// Dislike comment (repeat to remove the dislike)
///
/// POST /comments/{id}/dislike
pub async fn dislike_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    SnowflakePath(path): SnowflakePath<TargetIdPath>,
) -> ApiResult<Response> {
    reactions::toggle(&state, KIND, &auth, &path, ReactionValue::Dislike).await
}

/// Get comment reaction counts
///
/// GET /comments/{id}/reactions
pub async fn get_comment_reactions(
    State(state): State<AppState>,
    SnowflakePath(path): SnowflakePath<TargetIdPath>,
) -> ApiResult<Json<ReactionCountsResponse>> {
    reactions::counts(&state, KIND, &path).await
}

/// Get the current user's reaction on comment
///
/// GET /comments/{id}/reactions/@me
pub async fn get_my_comment_reaction(
    State(state): State<AppState>,
    auth: AuthUser,
    SnowflakePath(path): SnowflakePath<TargetIdPath>,
) -> ApiResult<Json<MyReactionResponse>> {
    reactions::my_reaction(&state, KIND, &auth, &path).await
}

/// Most-liked comments
///
/// GET /comments/top-liked?limit={n}
pub async fn get_top_liked_comments(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<TopTargetsQuery>,
) -> ApiResult<Json<Vec<TopTargetResponse>>> {
    reactions::top_liked(&state, KIND, query).await
}
