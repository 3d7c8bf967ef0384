//! Path parameter extractors
//!
//! Typed extraction of row ids and job ids from path parameters.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use uuid::Uuid;

use crate::response::ApiError;

/// Integer id of a row, from `/:id`
#[derive(Debug, Clone, Copy)]
pub struct IdPath(pub i32);

#[async_trait]
impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.to_string()))?;

        parse_id(&id).map(IdPath)
    }
}

/// Job id of a Tarea, from `/:id`
#[derive(Debug, Clone, Copy)]
pub struct TareaIdPath(pub Uuid);

#[async_trait]
impl<S> FromRequestParts<S> for TareaIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.to_string()))?;

        id.parse()
            .map(TareaIdPath)
            .map_err(|_| ApiError::invalid_path("Invalid tarea id format"))
    }
}

fn parse_id(raw: &str) -> Result<i32, ApiError> {
    match raw.parse::<i32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ApiError::invalid_path("Invalid id format")),
    }
}
