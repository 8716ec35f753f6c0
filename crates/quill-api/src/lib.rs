//! # quill-api
//!
//! REST API server for article and comment reactions, built with Axum.

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{create_app, create_app_state, create_in_memory_state, run, InMemoryTargets};
pub use state::AppState;
