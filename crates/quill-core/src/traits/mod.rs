//! Repository and port traits implemented by infrastructure crates

mod repositories;

pub use repositories::{EventPublisher, ReactionRepository, RepoResult, TargetLookup};
