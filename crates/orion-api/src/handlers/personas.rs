//! Persona handlers
//!
//! Search, plus the absence details that carry their length in days.

use axum::{
    extract::{Query, State},
    Json,
};
use orion_core::entities::{Incapacidad, Licencia, Persona};
use orion_service::dto::{IncapacidadResponse, LicenciaResponse, PaginaResponse, PersonaSearchQuery};
use orion_service::{IncapacidadService, LicenciaService, PersonaService};

use crate::extractors::{ventana, AuthUser, IdPath};
use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// Search active personas by name and CURP fragments
///
/// GET /personas/search?nombre&curp&start&length
pub async fn search(
    State(state): State<AppState>,
    auth: AuthUser,
    query: Result<Query<PersonaSearchQuery>, axum::extract::rejection::QueryRejection>,
) -> ApiResult<Json<PaginaResponse<Persona>>> {
    let Query(query) = query.map_err(|e| ApiError::invalid_query(e.to_string()))?;
    let listado = ventana(query.start, query.length);

    let service = PersonaService::new(state.service_context());
    let pagina = service
        .search(&auth.0, query.nombre.as_deref(), query.curp.as_deref(), &listado)
        .await?;
    Ok(Json(PaginaResponse::new(pagina, &listado)))
}

/// Get a licencia with its length in days
///
/// GET /licencias/{id}
pub async fn get_licencia(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
) -> ApiResult<Json<LicenciaResponse>> {
    let service = LicenciaService::new(state.service_context());
    let licencia: Licencia = service.get(&auth.0, id).await?;
    Ok(Json(LicenciaResponse {
        dias: licencia.dias(),
        licencia,
    }))
}

/// Get an incapacidad with its length in days
///
/// GET /incapacidades/{id}
pub async fn get_incapacidad(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
) -> ApiResult<Json<IncapacidadResponse>> {
    let service = IncapacidadService::new(state.service_context());
    let incapacidad: Incapacidad = service.get(&auth.0, id).await?;
    Ok(Json(IncapacidadResponse {
        dias: incapacidad.dias(),
        incapacidad,
    }))
}
