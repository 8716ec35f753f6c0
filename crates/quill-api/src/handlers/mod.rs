//! Route handlers
//!
//! Article and comment endpoints are thin wrappers that bind a `TargetKind`
//! and delegate to the shared reaction handlers.

pub mod articles;
pub mod comments;
pub mod health;
pub mod reactions;
