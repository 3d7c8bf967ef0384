//! Role links - permisos and usuarios_roles, unique per pair

use async_trait::async_trait;
use orion_core::entities::{Permiso, UsuarioRol};
use orion_core::traits::{PermisoRepository, RepoResult, UsuarioRolRepository};
use tracing::instrument;

use crate::models::{PermisoModel, UsuarioRolModel};

use super::entity::PgEntityRepository;
use super::error::map_db_error;

pub type PgPermisoRepository = PgEntityRepository<PermisoModel>;

pub type PgUsuarioRolRepository = PgEntityRepository<UsuarioRolModel>;

#[async_trait]
impl PermisoRepository for PgEntityRepository<PermisoModel> {
    #[instrument(skip(self))]
    async fn find_pair(&self, rol_id: i32, modulo_id: i32) -> RepoResult<Option<Permiso>> {
        let sql = Self::select("WHERE rol_id = $1 AND modulo_id = $2");
        let result = sqlx::query_as::<_, PermisoModel>(&sql)
            .bind(rol_id)
            .bind(modulo_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        result.map(Permiso::try_from).transpose()
    }
}

#[async_trait]
impl UsuarioRolRepository for PgEntityRepository<UsuarioRolModel> {
    #[instrument(skip(self))]
    async fn find_pair(&self, usuario_id: i32, rol_id: i32) -> RepoResult<Option<UsuarioRol>> {
        let sql = Self::select("WHERE usuario_id = $1 AND rol_id = $2");
        let result = sqlx::query_as::<_, UsuarioRolModel>(&sql)
            .bind(usuario_id)
            .bind(rol_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        result.map(UsuarioRol::try_from).transpose()
    }
}
