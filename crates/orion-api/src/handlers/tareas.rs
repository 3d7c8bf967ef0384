//! Tarea handlers
//!
//! Launch background jobs and follow their progress. Workers report back
//! through the PUT routes.

use axum::{extract::State, Json};
use orion_core::entities::Tarea;
use orion_service::dto::{ProgressResponse, TaskErrorRequest, TaskProgressRequest, TaskRequest};
use orion_service::TareaService;

use crate::extractors::{AuthUser, TareaIdPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Enqueue a job for the current user
///
/// POST /tareas
pub async fn launch(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<TaskRequest>,
) -> ApiResult<Created<Json<Tarea>>> {
    let service = TareaService::new(state.service_context());
    let tarea = service.launch_task(&auth.0, request).await?;
    Ok(Created(Json(tarea)))
}

/// Unfinished jobs of the current user
///
/// GET /tareas/in_progress
pub async fn in_progress(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<Tarea>>> {
    let service = TareaService::new(state.service_context());
    let tareas = service.tasks_in_progress(&auth.0).await?;
    Ok(Json(tareas))
}

/// Progress reported by the worker
///
/// GET /tareas/{id}/progress
pub async fn progress(
    State(state): State<AppState>,
    auth: AuthUser,
    TareaIdPath(id): TareaIdPath,
) -> ApiResult<Json<ProgressResponse>> {
    let service = TareaService::new(state.service_context());
    let response = service.progress(&auth.0, id).await?;
    Ok(Json(response))
}

/// Worker reports progress
///
/// PUT /tareas/{id}/progress
pub async fn report_progress(
    State(state): State<AppState>,
    auth: AuthUser,
    TareaIdPath(id): TareaIdPath,
    ValidatedJson(request): ValidatedJson<TaskProgressRequest>,
) -> ApiResult<NoContent> {
    let service = TareaService::new(state.service_context());
    service.set_task_progress(&auth.0, id, request).await?;
    Ok(NoContent)
}

/// Worker reports a failure, finishing the job
///
/// PUT /tareas/{id}/error
pub async fn report_error(
    State(state): State<AppState>,
    auth: AuthUser,
    TareaIdPath(id): TareaIdPath,
    ValidatedJson(request): ValidatedJson<TaskErrorRequest>,
) -> ApiResult<NoContent> {
    let service = TareaService::new(state.service_context());
    service.set_task_error(&auth.0, id, request).await?;
    Ok(NoContent)
}
