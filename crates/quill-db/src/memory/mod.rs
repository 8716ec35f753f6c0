//! In-memory storage backed by `DashMap`
//!
//! Every conditional write holds the shard lock for its key while it compares
//! and mutates, so the one-reaction-per-user-and-target rule holds under
//! concurrent tasks.

mod reaction;
mod target;

pub use reaction::InMemoryReactionRepository;
pub use target::InMemoryTargetLookup;
