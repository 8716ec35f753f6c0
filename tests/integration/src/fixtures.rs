//! Test fixtures and response shapes
//!
//! Provides reusable ids and deserializable response bodies for
//! integration tests.

use serde::Deserialize;
use std::sync::atomic::{AtomicI64, Ordering};

/// Counter for unique target ids
static COUNTER: AtomicI64 = AtomicI64::new(1_000);

/// Get a unique id for test data
pub fn unique_id() -> i64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Author of every seeded target
pub const AUTHOR_ID: i64 = 1;

/// Reader reacting to seeded targets
pub const READER_ID: i64 = 2;

/// Toggle response body
#[derive(Debug, Deserialize)]
pub struct ToggleResponse {
    pub message: String,
    pub likes: i64,
    pub dislikes: i64,
}

/// Counts response body
#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct CountsResponse {
    pub likes: i64,
    pub dislikes: i64,
}

/// Caller's own reaction
#[derive(Debug, Deserialize)]
pub struct MyReaction {
    pub reacted: bool,
    pub value: Option<String>,
}

/// Entry in a top-liked listing
#[derive(Debug, Deserialize)]
pub struct TopTarget {
    pub target_id: String,
    pub likes: i64,
}

/// Error response body
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

/// Health response body
#[derive(Debug, Deserialize)]
pub struct Health {
    pub status: String,
}

/// Readiness response body
#[derive(Debug, Deserialize)]
pub struct Readiness {
    pub status: String,
    pub checks: ReadinessChecks,
}

/// Per-dependency readiness
#[derive(Debug, Deserialize)]
pub struct ReadinessChecks {
    pub database: String,
}
