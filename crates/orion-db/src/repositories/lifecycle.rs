//! Status flips on any table

use async_trait::async_trait;
use orion_core::traits::{LifecycleRepository, RepoResult};
use orion_core::value_objects::{Auditoria, Estatus, Tabla};
use sqlx::PgPool;
use tracing::{debug, instrument};

use super::auditoria::write_auditoria;
use super::error::{map_db_error, row_not_found};

/// Tables whose rows may carry a cascade marker
pub(crate) fn has_cascade_marker(tabla: Tabla) -> bool {
    matches!(tabla, Tabla::Permisos | Tabla::UsuariosRoles)
}

/// PostgreSQL implementation of [`LifecycleRepository`]
#[derive(Clone)]
pub struct PgLifecycleRepository {
    pool: PgPool,
}

impl PgLifecycleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LifecycleRepository for PgLifecycleRepository {
    #[instrument(skip(self, auditoria), fields(tabla = tabla.nombre()))]
    async fn set_estatus(
        &self,
        tabla: Tabla,
        id: i32,
        estatus: Estatus,
        auditoria: &Auditoria,
    ) -> RepoResult<bool> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let actual: String = sqlx::query_scalar(&format!(
            "SELECT estatus FROM {} WHERE id = $1 FOR UPDATE",
            tabla.nombre()
        ))
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?
        .ok_or_else(|| row_not_found(tabla, id))?;

        let actual: Estatus = actual.trim().parse()?;
        if actual == estatus {
            debug!(id, "Status unchanged");
            return Ok(false);
        }

        let marker = if has_cascade_marker(tabla) {
            ", cascada_origen = NULL"
        } else {
            ""
        };
        sqlx::query(&format!(
            "UPDATE {} SET estatus = $2, modificado = NOW(){marker} WHERE id = $1",
            tabla.nombre()
        ))
        .bind(id)
        .bind(estatus.code())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        write_auditoria(&mut tx, auditoria, id).await?;

        tx.commit().await.map_err(map_db_error)?;
        Ok(true)
    }
}
