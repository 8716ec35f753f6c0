//! Axum extractors for request handling
//!
//! Custom extractors for authentication, path ids, and validated queries.

mod auth;
mod path;
mod validated;

pub use auth::AuthUser;
pub use path::{SnowflakePath, TargetIdPath};
pub use validated::ValidatedQuery;
