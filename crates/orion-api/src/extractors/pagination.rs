//! Pagination extractor
//!
//! Turns `?estatus=A|B&start&length&persona_id` into a [`Listado`].

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use orion_core::value_objects::DEFAULT_LIMIT;
use orion_core::{Estatus, Listado};
use orion_service::dto::ListQuery;

use crate::response::ApiError;

/// Validated listing window and status filter
#[derive(Debug, Clone)]
pub struct Pagination(pub Listado);

impl TryFrom<ListQuery> for Pagination {
    type Error = ApiError;

    fn try_from(query: ListQuery) -> Result<Self, Self::Error> {
        query
            .listado()
            .map(Pagination)
            .map_err(|e| ApiError::invalid_query(e.to_string()))
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Pagination
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<ListQuery>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.to_string()))?;

        Pagination::try_from(query)
    }
}

/// Window over active rows, for searches and logs
pub fn ventana(start: Option<i64>, length: Option<i64>) -> Listado {
    Listado::new(
        Estatus::Activo,
        start.unwrap_or(0).max(0),
        length.unwrap_or(DEFAULT_LIMIT),
    )
}
