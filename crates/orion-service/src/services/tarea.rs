//! Tarea service - background jobs launched by users
//!
//! The queue assigns the job id, which becomes the Tarea primary key.
//! Workers report progress through `set_task_progress` and `set_task_error`,
//! authenticated as an account with Administrar on TAREAS.

use orion_common::text::{safe_message, MAX_MESSAGE_LEN};
use orion_core::entities::{Tarea, PROGRESO_TERMINADO};
use orion_core::{Nivel, Tabla};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;
use validator::Validate;

use crate::dto::{ProgressResponse, TaskErrorRequest, TaskProgressRequest, TaskRequest};

use super::context::ServiceContext;
use super::current_user::CurrentUser;
use super::error::ServiceResult;
use super::permission::PermissionService;

/// Tarea service
pub struct TareaService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> TareaService<'a> {
    /// Create a new TareaService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    async fn require(&self, user: &CurrentUser, nivel: Nivel) -> ServiceResult<()> {
        PermissionService::new(self.ctx)
            .require(user, Tabla::Tareas.modulo(), nivel)
            .await
    }

    /// Enqueue a command and record it as a Tarea of the user
    #[instrument(skip(self, user, request), fields(usuario_id = user.id(), comando = %request.comando))]
    pub async fn launch_task(&self, user: &CurrentUser, request: TaskRequest) -> ServiceResult<Tarea> {
        self.require(user, Nivel::Crear).await?;
        request.validate()?;

        let id = self
            .ctx
            .task_queue()
            .enqueue(&request.comando, request.args)
            .await?;

        let tarea = Tarea::new(
            id,
            user.id(),
            request.comando,
            safe_message(&request.mensaje, MAX_MESSAGE_LEN),
        );
        let creada = self.ctx.tarea_repo().create(&tarea).await?;

        info!(tarea_id = %id, "Task launched");
        Ok(creada)
    }

    /// Unfinished tasks of the current user
    pub async fn tasks_in_progress(&self, user: &CurrentUser) -> ServiceResult<Vec<Tarea>> {
        self.require(user, Nivel::Ver).await?;
        Ok(self.ctx.tarea_repo().in_progress(user.id()).await?)
    }

    /// Progress of a job; a job the queue no longer knows counts as finished
    pub async fn progress(&self, user: &CurrentUser, id: Uuid) -> ServiceResult<ProgressResponse> {
        self.require(user, Nivel::Ver).await?;

        let progreso = self
            .ctx
            .task_queue()
            .progress(id)
            .await?
            .unwrap_or(PROGRESO_TERMINADO);
        Ok(ProgressResponse {
            id,
            progreso,
            ha_terminado: Tarea::terminado_con(progreso),
        })
    }

    /// Record a worker's progress on the queue and on the Tarea
    ///
    /// Empty `mensaje`, `archivo` and `url` leave the stored values alone.
    /// Returns whether the Tarea row changed.
    #[instrument(skip(self, user, request), fields(usuario_id = user.id()))]
    pub async fn set_task_progress(
        &self,
        user: &CurrentUser,
        id: Uuid,
        request: TaskProgressRequest,
    ) -> ServiceResult<bool> {
        self.require(user, Nivel::Administrar).await?;
        request.validate()?;
        self.record_progress(id, request.progreso, &request.mensaje, &request.archivo, &request.url)
            .await
    }

    /// Finish a failed job with its error message
    #[instrument(skip(self, user, request), fields(usuario_id = user.id()))]
    pub async fn set_task_error(
        &self,
        user: &CurrentUser,
        id: Uuid,
        request: TaskErrorRequest,
    ) -> ServiceResult<String> {
        self.require(user, Nivel::Administrar).await?;
        request.validate()?;

        let mensaje = safe_message(&request.mensaje, MAX_MESSAGE_LEN);
        warn!(tarea_id = %id, mensaje = %mensaje, "Task failed");
        self.record_progress(id, PROGRESO_TERMINADO, &mensaje, "", "")
            .await?;
        Ok(mensaje)
    }

    async fn record_progress(
        &self,
        id: Uuid,
        progreso: i32,
        mensaje: &str,
        archivo: &str,
        url: &str,
    ) -> ServiceResult<bool> {
        let progreso = progreso.clamp(0, PROGRESO_TERMINADO);
        let mensaje = (!mensaje.trim().is_empty()).then(|| safe_message(mensaje, MAX_MESSAGE_LEN));

        let cambiado = self
            .ctx
            .tarea_repo()
            .update_progress(
                id,
                progreso,
                mensaje.as_deref(),
                Some(archivo).filter(|s| !s.is_empty()),
                Some(url).filter(|s| !s.is_empty()),
            )
            .await?;
        self.ctx.task_queue().set_progress(id, progreso).await?;

        debug!(progreso, cambiado, "Task progress recorded");
        Ok(cambiado)
    }
}
