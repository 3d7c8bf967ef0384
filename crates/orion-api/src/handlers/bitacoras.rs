//! Log handlers
//!
//! Read side of the audit log and of the login/logout log.

use axum::{
    extract::{Query, State},
    Json,
};
use orion_core::entities::{Bitacora, EntradaSalida};
use orion_service::dto::{BitacoraQuery, PaginaResponse};
use orion_service::{BitacoraService, EntradaSalidaService};
use serde::Deserialize;

use crate::extractors::{ventana, AuthUser, IdPath};
use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// Entrada-Salida filters
#[derive(Debug, Deserialize, Default)]
pub struct EntradaSalidaQuery {
    pub usuario_id: Option<i32>,
    pub start: Option<i64>,
    pub length: Option<i64>,
}

/// Audit entries, newest first
///
/// GET /bitacoras?modulo&usuario_id&start&length
pub async fn list_bitacoras(
    State(state): State<AppState>,
    auth: AuthUser,
    query: Result<Query<BitacoraQuery>, axum::extract::rejection::QueryRejection>,
) -> ApiResult<Json<PaginaResponse<Bitacora>>> {
    let Query(query) = query.map_err(|e| ApiError::invalid_query(e.to_string()))?;
    let listado = ventana(query.start, query.length);

    let service = BitacoraService::new(state.service_context());
    let pagina = service
        .list(&auth.0, query.modulo.as_deref(), query.usuario_id, &listado)
        .await?;
    Ok(Json(PaginaResponse::new(pagina, &listado)))
}

/// One audit entry
///
/// GET /bitacoras/{id}
pub async fn get_bitacora(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
) -> ApiResult<Json<Bitacora>> {
    let service = BitacoraService::new(state.service_context());
    let bitacora = service.get(&auth.0, id).await?;
    Ok(Json(bitacora))
}

/// Logins and logouts, newest first
///
/// GET /entradas_salidas?usuario_id&start&length
pub async fn list_entradas_salidas(
    State(state): State<AppState>,
    auth: AuthUser,
    query: Result<Query<EntradaSalidaQuery>, axum::extract::rejection::QueryRejection>,
) -> ApiResult<Json<PaginaResponse<EntradaSalida>>> {
    let Query(query) = query.map_err(|e| ApiError::invalid_query(e.to_string()))?;
    let listado = ventana(query.start, query.length);

    let service = EntradaSalidaService::new(state.service_context());
    let pagina = service.list(&auth.0, query.usuario_id, &listado).await?;
    Ok(Json(PaginaResponse::new(pagina, &listado)))
}
