//! Database models - SQLx-compatible structs for PostgreSQL tables

mod reaction;

pub use reaction::{ReactionModel, TargetLikesModel};
