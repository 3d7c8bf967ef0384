//! Usuario account handlers
//!
//! API keys and passwords; require Administrar on USUARIOS.

use axum::{extract::State, Json};
use orion_service::dto::{ApiKeyResponse, PasswordRequest};
use orion_service::AuthService;

use crate::extractors::{AuthUser, IdPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Generate a new API key, replacing the previous one
///
/// POST /usuarios/{id}/api_key
pub async fn create_api_key(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(usuario_id): IdPath,
) -> ApiResult<Created<Json<ApiKeyResponse>>> {
    let service = AuthService::new(state.service_context());
    let response = service.api_key(&auth.0, usuario_id).await?;
    Ok(Created(Json(response)))
}

/// Revoke the API key
///
/// DELETE /usuarios/{id}/api_key
pub async fn clear_api_key(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(usuario_id): IdPath,
) -> ApiResult<NoContent> {
    let service = AuthService::new(state.service_context());
    service.clear_api_key(&auth.0, usuario_id).await?;
    Ok(NoContent)
}

/// Replace the password
///
/// PUT /usuarios/{id}/password
pub async fn set_password(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(usuario_id): IdPath,
    ValidatedJson(request): ValidatedJson<PasswordRequest>,
) -> ApiResult<NoContent> {
    let service = AuthService::new(state.service_context());
    service.set_password(&auth.0, usuario_id, request).await?;
    Ok(NoContent)
}
