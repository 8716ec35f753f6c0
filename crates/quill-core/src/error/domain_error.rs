//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::entities::TargetKind;
use crate::value_objects::Snowflake;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("{kind} requested does not exist")]
    TargetNotFound { kind: TargetKind, id: Snowflake },

    // =========================================================================
    // Authentication Errors
    // =========================================================================
    #[error("Authentication required")]
    Unauthenticated,

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    /// A concurrent write on the same (user, target) pair won the race
    #[error("Reaction was modified concurrently")]
    WriteConflict,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Shorthand for a missing target
    pub fn target_not_found(kind: TargetKind, id: Snowflake) -> Self {
        Self::TargetNotFound { kind, id }
    }

    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::TargetNotFound { kind, .. } => match kind {
                TargetKind::Article => "UNKNOWN_ARTICLE",
                TargetKind::Comment => "UNKNOWN_COMMENT",
            },
            Self::Unauthenticated => "UNAUTHENTICATED",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::WriteConflict => "WRITE_CONFLICT",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::TargetNotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_))
    }

    /// Check if this is an authentication error
    pub fn is_authentication(&self) -> bool {
        matches!(self, Self::Unauthenticated)
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::WriteConflict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = DomainError::target_not_found(TargetKind::Article, Snowflake::new(1));
        assert_eq!(err.code(), "UNKNOWN_ARTICLE");
        let err = DomainError::target_not_found(TargetKind::Comment, Snowflake::new(1));
        assert_eq!(err.code(), "UNKNOWN_COMMENT");
        assert_eq!(DomainError::WriteConflict.code(), "WRITE_CONFLICT");
    }

    #[test]
    fn test_not_found_message() {
        let err = DomainError::target_not_found(TargetKind::Article, Snowflake::new(9));
        assert_eq!(err.to_string(), "Article requested does not exist");
        let err = DomainError::target_not_found(TargetKind::Comment, Snowflake::new(9));
        assert_eq!(err.to_string(), "Comment requested does not exist");
    }

    #[test]
    fn test_classification() {
        assert!(DomainError::target_not_found(TargetKind::Article, Snowflake::new(1)).is_not_found());
        assert!(DomainError::WriteConflict.is_conflict());
        assert!(!DomainError::WriteConflict.is_not_found());
        assert!(DomainError::Unauthenticated.is_authentication());
        assert!(DomainError::ValidationError("x".into()).is_validation());
    }
}
