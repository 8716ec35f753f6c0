//! # quill-db
//!
//! Storage layer implementing the `quill-core` repository traits.
//!
//! ## Overview
//!
//! Two backends are provided:
//!
//! - PostgreSQL via SQLx (`PgReactionRepository`, `PgTargetLookup`), with
//!   connection pool management and runtime migrations
//! - An in-memory store backed by `DashMap` (`InMemoryReactionRepository`,
//!   `InMemoryTargetLookup`) for tests and single-process deployments
//!
//! ## Usage
//!
//! ```rust,ignore
//! use quill_core::TargetKind;
//! use quill_db::{create_pool, run_migrations, PgReactionRepository};
//!
//! async fn example(config: &quill_common::DatabaseConfig) -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(config).await?;
//!     run_migrations(&pool).await?;
//!     let article_reactions = PgReactionRepository::new(pool, TargetKind::Article);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod memory;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use memory::{InMemoryReactionRepository, InMemoryTargetLookup};
pub use pool::{create_pool, run_migrations, PgPool};
pub use repositories::{PgReactionRepository, PgTargetLookup};
