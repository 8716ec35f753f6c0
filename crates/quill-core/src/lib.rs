//! # quill-core
//!
//! Domain layer for the reaction engine: entities, the like/dislike transition
//! function, domain events, and the repository traits implemented by `quill-db`.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod events;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Reaction, ReactionCounts, ReactionTransition, ReactionValue, TargetKind, ToggleOutcome,
};
pub use error::DomainError;
pub use events::DomainEvent;
pub use traits::{EventPublisher, ReactionRepository, RepoResult, TargetLookup};
pub use value_objects::{Snowflake, SnowflakeParseError};
