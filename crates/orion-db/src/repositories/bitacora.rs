//! Read side of the audit log, and the login/logout record

use async_trait::async_trait;
use orion_core::entities::{Bitacora, EntradaSalida};
use orion_core::traits::{BitacoraRepository, EntradaSalidaRepository, RepoResult};
use orion_core::value_objects::{Listado, Pagina};
use sqlx::PgPool;
use tracing::instrument;

use crate::models::{BitacoraModel, EntradaSalidaModel};

use super::error::map_db_error;

/// PostgreSQL implementation of [`BitacoraRepository`]
#[derive(Clone)]
pub struct PgBitacoraRepository {
    pool: PgPool,
}

impl PgBitacoraRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const BITACORA_FILTER: &str = r#"
    FROM bitacoras b
    JOIN modulos m ON m.id = b.modulo_id
    WHERE b.estatus = $1
      AND ($2::TEXT IS NULL OR m.nombre = $2)
      AND ($3::INTEGER IS NULL OR b.usuario_id = $3)
"#;

#[async_trait]
impl BitacoraRepository for PgBitacoraRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i32) -> RepoResult<Option<Bitacora>> {
        let result = sqlx::query_as::<_, BitacoraModel>(
            r#"
            SELECT id, modulo_id, usuario_id, descripcion, url, creado, modificado, estatus
            FROM bitacoras
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Bitacora::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn list(
        &self,
        modulo: Option<&str>,
        usuario_id: Option<i32>,
        listado: &Listado,
    ) -> RepoResult<Pagina<Bitacora>> {
        let total = sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) {BITACORA_FILTER}"))
            .bind(listado.estatus.code())
            .bind(modulo)
            .bind(usuario_id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        let rows = sqlx::query_as::<_, BitacoraModel>(&format!(
            "SELECT b.id, b.modulo_id, b.usuario_id, b.descripcion, b.url, \
             b.creado, b.modificado, b.estatus {BITACORA_FILTER} \
             ORDER BY b.id DESC LIMIT $4 OFFSET $5"
        ))
        .bind(listado.estatus.code())
        .bind(modulo)
        .bind(usuario_id)
        .bind(listado.limit)
        .bind(listado.offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let items = rows
            .into_iter()
            .map(Bitacora::try_from)
            .collect::<RepoResult<Vec<_>>>()?;
        Ok(Pagina::new(items, total))
    }
}

/// PostgreSQL implementation of [`EntradaSalidaRepository`]
#[derive(Clone)]
pub struct PgEntradaSalidaRepository {
    pool: PgPool,
}

impl PgEntradaSalidaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EntradaSalidaRepository for PgEntradaSalidaRepository {
    #[instrument(skip(self), fields(usuario_id = entrada_salida.usuario_id))]
    async fn record(&self, entrada_salida: &EntradaSalida) -> RepoResult<EntradaSalida> {
        let model = sqlx::query_as::<_, EntradaSalidaModel>(
            r#"
            INSERT INTO entradas_salidas (usuario_id, tipo, direccion_ip, estatus)
            VALUES ($1, $2, $3, $4)
            RETURNING id, usuario_id, tipo, direccion_ip, creado, modificado, estatus
            "#,
        )
        .bind(entrada_salida.usuario_id)
        .bind(entrada_salida.tipo.code())
        .bind(&entrada_salida.direccion_ip)
        .bind(entrada_salida.estatus.code())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        EntradaSalida::try_from(model)
    }

    #[instrument(skip(self))]
    async fn list(
        &self,
        usuario_id: Option<i32>,
        listado: &Listado,
    ) -> RepoResult<Pagina<EntradaSalida>> {
        let total = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM entradas_salidas
            WHERE estatus = $1 AND ($2::INTEGER IS NULL OR usuario_id = $2)
            "#,
        )
        .bind(listado.estatus.code())
        .bind(usuario_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        let rows = sqlx::query_as::<_, EntradaSalidaModel>(
            r#"
            SELECT id, usuario_id, tipo, direccion_ip, creado, modificado, estatus
            FROM entradas_salidas
            WHERE estatus = $1 AND ($2::INTEGER IS NULL OR usuario_id = $2)
            ORDER BY id DESC
            LIMIT $3 OFFSET $4
            "#,
        )
        .bind(listado.estatus.code())
        .bind(usuario_id)
        .bind(listado.limit)
        .bind(listado.offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let items = rows
            .into_iter()
            .map(EntradaSalida::try_from)
            .collect::<RepoResult<Vec<_>>>()?;
        Ok(Pagina::new(items, total))
    }
}
