//! Authentication handlers
//!
//! Endpoints for login, logout, token refresh and the current user.

use axum::{extract::State, Json};
use orion_service::dto::{AuthResponse, LoginRequest, LogoutRequest, MeResponse, RefreshTokenRequest};
use orion_service::AuthService;

use crate::extractors::{AuthUser, ClientIp, ValidatedJson};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// Login with email and password
///
/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    ClientIp(ip): ClientIp,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.login(request, &ip).await?;
    Ok(Json(response))
}

/// Refresh access token
///
/// POST /auth/refresh
pub async fn refresh_token(
    State(state): State<AppState>,
    Json(request): Json<RefreshTokenRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.refresh(request).await?;
    Ok(Json(response))
}

/// Logout; without a refresh token every session of the user is revoked
///
/// POST /auth/logout
pub async fn logout(
    State(state): State<AppState>,
    auth: AuthUser,
    ClientIp(ip): ClientIp,
    body: Option<Json<LogoutRequest>>,
) -> ApiResult<NoContent> {
    let service = AuthService::new(state.service_context());
    let refresh_token = body.and_then(|b| b.0.refresh_token);
    service.logout(&auth.0, refresh_token, &ip).await?;
    Ok(NoContent)
}

/// The current user with their permission map and menu
///
/// GET /auth/me
pub async fn me(State(state): State<AppState>, auth: AuthUser) -> ApiResult<Json<MeResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.me(&auth.0).await?;
    Ok(Json(response))
}
