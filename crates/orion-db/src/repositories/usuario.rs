//! Usuario repository - credentials, API keys and permission lookup

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use orion_core::entities::Usuario;
use orion_core::traits::{RepoResult, UsuarioRepository};
use orion_core::value_objects::{Auditoria, Concesion, Tabla};
use sqlx::{Postgres, Transaction};
use tracing::instrument;

use crate::models::{ConcesionModel, UsuarioModel};

use super::auditoria::write_auditoria;
use super::entity::PgEntityRepository;
use super::error::{map_db_error, row_not_found};

/// PostgreSQL implementation of [`UsuarioRepository`]
pub type PgUsuarioRepository = PgEntityRepository<UsuarioModel>;

impl PgEntityRepository<UsuarioModel> {
    async fn find_one(&self, tail: &str, valor: &str) -> RepoResult<Option<Usuario>> {
        let sql = Self::select(tail);
        let result = sqlx::query_as::<_, UsuarioModel>(&sql)
            .bind(valor)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        result.map(Usuario::try_from).transpose()
    }

    /// Audit and commit a single-row update of a user
    async fn commit_audited(
        mut tx: Transaction<'_, Postgres>,
        rows_affected: u64,
        usuario_id: i32,
        auditoria: &Auditoria,
    ) -> RepoResult<()> {
        if rows_affected == 0 {
            return Err(row_not_found(Tabla::Usuarios, usuario_id));
        }

        write_auditoria(&mut tx, auditoria, usuario_id).await?;

        tx.commit().await.map_err(map_db_error)?;
        Ok(())
    }
}

#[async_trait]
impl UsuarioRepository for PgEntityRepository<UsuarioModel> {
    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Usuario>> {
        self.find_one("WHERE email = $1", email).await
    }

    #[instrument(skip(self, api_key))]
    async fn find_by_api_key(&self, api_key: &str) -> RepoResult<Option<Usuario>> {
        self.find_one("WHERE api_key = $1 AND api_key <> ''", api_key)
            .await
    }

    #[instrument(skip(self))]
    async fn concesiones(&self, usuario_id: i32) -> RepoResult<Vec<Concesion>> {
        let rows = sqlx::query_as::<_, ConcesionModel>(
            r#"
            SELECT ur.estatus AS usuario_rol_estatus,
                   r.estatus AS rol_estatus,
                   p.estatus AS permiso_estatus,
                   m.estatus AS modulo_estatus,
                   p.nivel,
                   m.nombre AS modulo,
                   m.nombre_corto,
                   m.icono,
                   m.ruta,
                   m.en_navegacion,
                   m.en_plataforma
            FROM usuarios_roles ur
            JOIN roles r ON r.id = ur.rol_id
            JOIN permisos p ON p.rol_id = r.id
            JOIN modulos m ON m.id = p.modulo_id
            WHERE ur.usuario_id = $1
            "#,
        )
        .bind(usuario_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(Concesion::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn roles_activos(&self, usuario_id: i32) -> RepoResult<Vec<String>> {
        sqlx::query_scalar::<_, String>(
            r#"
            SELECT r.nombre
            FROM usuarios_roles ur
            JOIN roles r ON r.id = ur.rol_id
            WHERE ur.usuario_id = $1 AND ur.estatus = 'A' AND r.estatus = 'A'
            ORDER BY r.nombre
            "#,
        )
        .bind(usuario_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn password_hash(&self, usuario_id: i32) -> RepoResult<Option<String>> {
        let hash = sqlx::query_scalar::<_, String>("SELECT contrasena FROM usuarios WHERE id = $1")
            .bind(usuario_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(hash.filter(|h| !h.is_empty()))
    }

    #[instrument(skip(self, password_hash, auditoria))]
    async fn set_password(
        &self,
        usuario_id: i32,
        password_hash: &str,
        auditoria: &Auditoria,
    ) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let result =
            sqlx::query("UPDATE usuarios SET contrasena = $2, modificado = NOW() WHERE id = $1")
                .bind(usuario_id)
                .bind(password_hash)
                .execute(&mut *tx)
                .await
                .map_err(map_db_error)?;

        Self::commit_audited(tx, result.rows_affected(), usuario_id, auditoria).await
    }

    #[instrument(skip(self, api_key, auditoria))]
    async fn set_api_key(
        &self,
        usuario_id: i32,
        api_key: &str,
        expiracion: DateTime<Utc>,
        auditoria: &Auditoria,
    ) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let result = sqlx::query(
            r#"
            UPDATE usuarios
            SET api_key = $2, api_key_expiracion = $3, modificado = NOW()
            WHERE id = $1
            "#,
        )
        .bind(usuario_id)
        .bind(api_key)
        .bind(expiracion)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        Self::commit_audited(tx, result.rows_affected(), usuario_id, auditoria).await
    }
}
