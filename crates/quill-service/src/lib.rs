//! # quill-service
//!
//! Application layer containing the reaction services, DTOs, and event publishers.

pub mod dto;
pub mod events;
pub mod services;

pub use dto::{
    HealthResponse, MyReactionResponse, ReactionCountsResponse, ReactionToggleResponse,
    ReadinessResponse, TopTargetResponse, TopTargetsQuery,
};
pub use events::{spawn_notification_listener, BroadcastPublisher};
pub use services::{
    ReactionService, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult,
    ToggleResult,
};
