//! Authentication extractor
//!
//! Resolves the current user from a bearer token or an API key.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use orion_service::{AuthService, CurrentUser};

use crate::response::ApiError;
use crate::state::AppState;

/// Header carrying an API key
pub const API_KEY_HEADER: &str = "x-api-key";

/// Authenticated user, loaded with a fresh permission cache
///
/// An `X-Api-Key` header takes precedence over `Authorization: Bearer`.
#[derive(Debug)]
pub struct AuthUser(pub CurrentUser);

impl AuthUser {
    pub fn id(&self) -> i32 {
        self.0.id()
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        let service = AuthService::new(app_state.service_context());

        if let Some(value) = parts.headers.get(API_KEY_HEADER) {
            let api_key = value.to_str().map_err(|_| ApiError::InvalidAuthFormat)?;
            let user = service.authenticate_api_key(api_key).await.map_err(|e| {
                tracing::warn!(error = %e, "Invalid API key");
                ApiError::Service(e)
            })?;
            return Ok(AuthUser(user));
        }

        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingAuth)?;

        let user = service
            .authenticate_token(bearer.token())
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "Invalid access token");
                ApiError::Service(e)
            })?;

        Ok(AuthUser(user))
    }
}
