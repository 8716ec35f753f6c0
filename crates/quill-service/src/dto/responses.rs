//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Snowflake IDs are serialized as strings for JavaScript compatibility.

use chrono::{DateTime, Utc};
use quill_core::ReactionValue;
use serde::Serialize;

// ============================================================================
// Reaction Responses
// ============================================================================

/// Body returned by like/dislike endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReactionToggleResponse {
    pub message: String,
    pub likes: i64,
    pub dislikes: i64,
}

/// Like/dislike totals for a target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReactionCountsResponse {
    pub likes: i64,
    pub dislikes: i64,
}

/// The caller's own reaction on a target
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MyReactionResponse {
    pub reacted: bool,
    pub value: Option<ReactionValue>,
}

/// Entry in a most-liked listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopTargetResponse {
    pub target_id: String,
    pub likes: i64,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    /// `database_healthy` is `None` when no database is configured
    pub fn ready(database_healthy: Option<bool>) -> Self {
        let (ready, database) = match database_healthy {
            Some(true) => (true, "healthy"),
            Some(false) => (false, "unhealthy"),
            None => (true, "not_configured"),
        };
        Self {
            status: if ready { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: database.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
