//! Shared reaction handlers
//!
//! Kind-agnostic request handling for like/dislike toggles and reaction
//! queries.

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use quill_core::{ReactionValue, TargetKind, ToggleOutcome};
use quill_service::{
    MyReactionResponse, ReactionCountsResponse, ReactionService, ReactionToggleResponse,
    TopTargetResponse, TopTargetsQuery,
};

use crate::extractors::{AuthUser, TargetIdPath};
use crate::response::{Accepted, ApiResult, Created};
use crate::state::AppState;

/// Toggle a reaction: 201 when applied, 202 when reverted
pub async fn toggle(
    state: &AppState,
    kind: TargetKind,
    auth: &AuthUser,
    path: &TargetIdPath,
    intent: ReactionValue,
) -> ApiResult<Response> {
    let target_id = path.id(kind)?;

    let result = ReactionService::new(state.service_context(), kind)
        .toggle(auth.user_id, target_id, intent)
        .await?;

    let body = Json(ReactionToggleResponse::from(result));
    Ok(match result.outcome() {
        ToggleOutcome::Applied => Created(body).into_response(),
        ToggleOutcome::Reverted => Accepted(body).into_response(),
    })
}

/// Like/dislike totals for a target
pub async fn counts(
    state: &AppState,
    kind: TargetKind,
    path: &TargetIdPath,
) -> ApiResult<Json<ReactionCountsResponse>> {
    let target_id = path.id(kind)?;

    let counts = ReactionService::new(state.service_context(), kind)
        .counts(target_id)
        .await?;
    Ok(Json(counts.into()))
}

/// The caller's own reaction on a target
pub async fn my_reaction(
    state: &AppState,
    kind: TargetKind,
    auth: &AuthUser,
    path: &TargetIdPath,
) -> ApiResult<Json<MyReactionResponse>> {
    let target_id = path.id(kind)?;

    let value = ReactionService::new(state.service_context(), kind)
        .reaction_of(auth.user_id, target_id)
        .await?;
    Ok(Json(value.into()))
}

/// Most-liked targets of a kind
pub async fn top_liked(
    state: &AppState,
    kind: TargetKind,
    query: TopTargetsQuery,
) -> ApiResult<Json<Vec<TopTargetResponse>>> {
    let top = ReactionService::new(state.service_context(), kind)
        .top_targets_by_likes(query.limit)
        .await?;
    Ok(Json(top.into_iter().map(TopTargetResponse::from).collect()))
}
