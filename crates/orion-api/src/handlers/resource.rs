//! Generic resource handlers
//!
//! List, detail, create, edit, delete and recover for any [`Resource`].
//! Routes instantiate them per entity, e.g. `list::<Banco>`.

use axum::{extract::State, Json};
use orion_service::dto::PaginaResponse;
use orion_service::{CrudService, Resource};
use serde::Serialize;

use crate::extractors::{AuthUser, IdPath, Pagination, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// List rows of one status
///
/// GET /{recurso}?estatus=A|B&start&length
pub async fn list<T>(
    State(state): State<AppState>,
    auth: AuthUser,
    Pagination(listado): Pagination,
) -> ApiResult<Json<PaginaResponse<T>>>
where
    T: Resource + Serialize,
{
    let service = CrudService::<T>::new(state.service_context());
    let pagina = service.list(&auth.0, &listado).await?;
    Ok(Json(PaginaResponse::new(pagina, &listado)))
}

/// Get one row
///
/// GET /{recurso}/{id}
pub async fn get<T>(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
) -> ApiResult<Json<T>>
where
    T: Resource + Serialize,
{
    let service = CrudService::<T>::new(state.service_context());
    let row = service.get(&auth.0, id).await?;
    Ok(Json(row))
}

/// Create a row
///
/// POST /{recurso}
pub async fn create<T>(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<T::Request>,
) -> ApiResult<Created<Json<T>>>
where
    T: Resource + Serialize,
{
    let service = CrudService::<T>::new(state.service_context());
    let row = service.create(&auth.0, request).await?;
    Ok(Created(Json(row)))
}

/// Edit a row with the full body
///
/// PATCH /{recurso}/{id}
pub async fn update<T>(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
    ValidatedJson(request): ValidatedJson<T::Request>,
) -> ApiResult<Json<T>>
where
    T: Resource + Serialize,
{
    let service = CrudService::<T>::new(state.service_context());
    let row = service.update(&auth.0, id, request).await?;
    Ok(Json(row))
}

/// Soft delete a row
///
/// DELETE /{recurso}/{id}
pub async fn delete<T>(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
) -> ApiResult<Json<T>>
where
    T: Resource + Serialize,
{
    let service = CrudService::<T>::new(state.service_context());
    let row = service.delete(&auth.0, id).await?;
    Ok(Json(row))
}

/// Recover a deleted row
///
/// POST /{recurso}/{id}/recover
pub async fn recover<T>(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
) -> ApiResult<Json<T>>
where
    T: Resource + Serialize,
{
    let service = CrudService::<T>::new(state.service_context());
    let row = service.recover(&auth.0, id).await?;
    Ok(Json(row))
}
