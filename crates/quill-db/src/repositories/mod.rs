//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in quill-core.
//! Articles and comments keep their reactions in separate tables; each
//! repository is bound to one `TargetKind` when constructed.

mod error;
mod reaction;
mod target;

pub use reaction::PgReactionRepository;
pub use target::PgTargetLookup;
