//! Business logic services
//!
//! Services borrow a `ServiceContext` for their dependencies and are cheap to
//! construct per request.

pub mod context;
pub mod error;
pub mod reaction;

pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use reaction::{ReactionService, ToggleResult, DEFAULT_TOP_LIMIT, MAX_TOP_LIMIT};
