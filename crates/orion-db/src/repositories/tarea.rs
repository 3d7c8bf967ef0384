//! Tarea repository - background jobs and their progress

use async_trait::async_trait;
use orion_core::entities::{Tarea, PROGRESO_TERMINADO};
use orion_core::traits::{RepoResult, TareaRepository};
use orion_core::value_objects::Tabla;
use sqlx::PgPool;
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::models::TareaModel;

use super::error::{already_exists, map_db_error, map_unique_violation, row_not_found};

const TAREA_COLUMNS: &str =
    "id, usuario_id, comando, mensaje, archivo, url, ha_terminado, creado, modificado, estatus";

/// PostgreSQL implementation of [`TareaRepository`]
#[derive(Clone)]
pub struct PgTareaRepository {
    pool: PgPool,
}

impl PgTareaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TareaRepository for PgTareaRepository {
    #[instrument(skip(self, tarea), fields(id = %tarea.id))]
    async fn create(&self, tarea: &Tarea) -> RepoResult<Tarea> {
        let model = sqlx::query_as::<_, TareaModel>(&format!(
            r#"
            INSERT INTO tareas (id, usuario_id, comando, mensaje, archivo, url, ha_terminado, estatus)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {TAREA_COLUMNS}
            "#
        ))
        .bind(tarea.id)
        .bind(tarea.usuario_id)
        .bind(&tarea.comando)
        .bind(&tarea.mensaje)
        .bind(&tarea.archivo)
        .bind(&tarea.url)
        .bind(tarea.ha_terminado)
        .bind(tarea.estatus.code())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || already_exists(Tabla::Tareas)))?;

        Tarea::try_from(model)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Tarea>> {
        let result = sqlx::query_as::<_, TareaModel>(&format!(
            "SELECT {TAREA_COLUMNS} FROM tareas WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Tarea::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn in_progress(&self, usuario_id: i32) -> RepoResult<Vec<Tarea>> {
        let rows = sqlx::query_as::<_, TareaModel>(&format!(
            r#"
            SELECT {TAREA_COLUMNS} FROM tareas
            WHERE usuario_id = $1 AND ha_terminado = FALSE AND estatus = 'A'
            ORDER BY creado DESC
            "#
        ))
        .bind(usuario_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(Tarea::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn update_progress(
        &self,
        id: Uuid,
        progreso: i32,
        mensaje: Option<&str>,
        archivo: Option<&str>,
        url: Option<&str>,
    ) -> RepoResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE tareas
            SET ha_terminado = $2,
                mensaje = COALESCE($3, mensaje),
                archivo = COALESCE($4, archivo),
                url = COALESCE($5, url),
                modificado = NOW()
            WHERE id = $1
              AND (ha_terminado IS DISTINCT FROM $2
                   OR mensaje IS DISTINCT FROM COALESCE($3, mensaje)
                   OR archivo IS DISTINCT FROM COALESCE($4, archivo)
                   OR url IS DISTINCT FROM COALESCE($5, url))
            "#,
        )
        .bind(id)
        .bind(progreso >= PROGRESO_TERMINADO)
        .bind(mensaje)
        .bind(archivo)
        .bind(url)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() > 0 {
            debug!(progreso, "Task progress recorded");
            return Ok(true);
        }

        let exists = sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM tareas WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;
        if !exists {
            return Err(row_not_found(Tabla::Tareas, id));
        }

        Ok(false)
    }
}
