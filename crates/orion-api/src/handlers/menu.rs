//! Menu handler

use axum::{extract::State, Json};
use orion_core::MenuItem;
use orion_service::MenuService;

use crate::extractors::AuthUser;
use crate::response::ApiResult;
use crate::state::AppState;

/// Navigation entries of the current user
///
/// GET /menu
pub async fn menu(State(state): State<AppState>, auth: AuthUser) -> ApiResult<Json<Vec<MenuItem>>> {
    let service = MenuService::new(state.service_context());
    let menu = service.menu(&auth.0).await?;
    Ok(Json(menu))
}
