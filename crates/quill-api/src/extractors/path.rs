//! Path parameter extractors
//!
//! Type-safe extraction of Snowflake IDs from path parameters.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use quill_core::{Snowflake, TargetKind};
use serde::de::DeserializeOwned;

use crate::response::ApiError;

/// Extract path parameters, rejecting with `ApiError::InvalidPath`
#[derive(Debug, Clone)]
pub struct SnowflakePath<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for SnowflakePath<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(inner) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.to_string()))?;

        Ok(SnowflakePath(inner))
    }
}

/// Path parameters with the target id
#[derive(Debug, serde::Deserialize)]
pub struct TargetIdPath {
    pub id: String,
}

impl TargetIdPath {
    /// Parse id as Snowflake
    pub fn id(&self, kind: TargetKind) -> Result<Snowflake, ApiError> {
        self.id
            .parse()
            .map_err(|_| ApiError::invalid_path(format!("Invalid {} id format", kind.noun())))
    }
}
