//! Integration test utilities for the reaction API
//!
//! This crate provides helpers for running end-to-end tests against
//! the REST API on the in-memory store.

pub mod helpers;
pub mod fixtures;

pub use helpers::*;
pub use fixtures::*;
