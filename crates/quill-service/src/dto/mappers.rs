//! Service result to DTO conversions

use quill_core::{ReactionCounts, ReactionValue, Snowflake};

use crate::services::ToggleResult;

use super::responses::{
    MyReactionResponse, ReactionCountsResponse, ReactionToggleResponse, TopTargetResponse,
};

impl From<ToggleResult> for ReactionToggleResponse {
    fn from(result: ToggleResult) -> Self {
        Self {
            message: result.message(),
            likes: result.counts.likes,
            dislikes: result.counts.dislikes,
        }
    }
}

impl From<ReactionCounts> for ReactionCountsResponse {
    fn from(counts: ReactionCounts) -> Self {
        Self {
            likes: counts.likes,
            dislikes: counts.dislikes,
        }
    }
}

impl From<Option<ReactionValue>> for MyReactionResponse {
    fn from(value: Option<ReactionValue>) -> Self {
        Self {
            reacted: value.is_some(),
            value,
        }
    }
}

impl From<(Snowflake, i64)> for TopTargetResponse {
    fn from((target_id, likes): (Snowflake, i64)) -> Self {
        Self {
            target_id: target_id.to_string(),
            likes,
        }
    }
}
