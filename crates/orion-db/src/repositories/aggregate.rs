//! Cascading delete and recover of aggregate roots
//!
//! Children flipped by a cascade are tagged with `cascada_origen`, so a
//! recover only brings back what the matching delete removed.

use async_trait::async_trait;
use orion_core::entities::Entity;
use orion_core::traits::{AggregateRepository, ModuloRepository, RepoResult, RolRepository};
use orion_core::value_objects::{Auditoria, Estatus, Tabla};
use sqlx::PgConnection;
use tracing::{debug, instrument};

use crate::mappers::PgRecord;
use crate::models::{ModuloModel, RolModel, UsuarioModel};

use super::auditoria::write_auditoria;
use super::entity::PgEntityRepository;
use super::error::{map_db_error, row_not_found};

/// A root whose status change reaches into child tables
pub trait CascadeRecord: PgRecord {
    /// Child table and its foreign key to the root
    const HIJOS: &'static [(Tabla, &'static str)];
}

impl CascadeRecord for ModuloModel {
    const HIJOS: &'static [(Tabla, &'static str)] = &[(Tabla::Permisos, "modulo_id")];
}

impl CascadeRecord for RolModel {
    const HIJOS: &'static [(Tabla, &'static str)] = &[
        (Tabla::Permisos, "rol_id"),
        (Tabla::UsuariosRoles, "rol_id"),
    ];
}

impl CascadeRecord for UsuarioModel {
    const HIJOS: &'static [(Tabla, &'static str)] = &[(Tabla::UsuariosRoles, "usuario_id")];
}

/// Marker written on the children of the root `id`
pub(crate) fn cascade_origin(tabla: Tabla, id: i32) -> String {
    format!("{}/{}", tabla.nombre(), id)
}

impl<M: CascadeRecord> PgEntityRepository<M> {
    async fn cascade(
        &self,
        id: i32,
        estatus: Estatus,
        auditoria: &Auditoria,
    ) -> RepoResult<Option<M::Entity>> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let root = Self::lock_on(&mut tx, id).await?;
        if root.estatus() == estatus {
            debug!(id, "Aggregate already in requested status");
            return Ok(None);
        }

        let sql = format!(
            "UPDATE {} SET estatus = $2, modificado = NOW() WHERE id = $1 RETURNING {}",
            Self::table(),
            M::select_list(),
        );
        let model = sqlx::query_as::<_, M>(&sql)
            .bind(id)
            .bind(estatus.code())
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_db_error)?
            .ok_or_else(|| row_not_found(M::tabla(), id))?;
        let root = <M::Entity as TryFrom<M>>::try_from(model)?;

        let origen = cascade_origin(M::tabla(), id);
        let mut afectados = 0;
        for (hijo, columna) in M::HIJOS {
            afectados += flip_children(&mut tx, *hijo, columna, id, estatus, &origen).await?;
        }

        write_auditoria(&mut tx, auditoria, id).await?;

        tx.commit().await.map_err(map_db_error)?;
        debug!(id, afectados, estatus = estatus.code(), "Cascade applied");
        Ok(Some(root))
    }
}

async fn flip_children(
    conn: &mut PgConnection,
    hijo: Tabla,
    columna: &str,
    id: i32,
    estatus: Estatus,
    origen: &str,
) -> RepoResult<u64> {
    let sql = match estatus {
        Estatus::Baja => format!(
            "UPDATE {} SET estatus = 'B', cascada_origen = $2, modificado = NOW() \
             WHERE {columna} = $1 AND estatus = 'A'",
            hijo.nombre()
        ),
        Estatus::Activo => format!(
            "UPDATE {} SET estatus = 'A', cascada_origen = NULL, modificado = NOW() \
             WHERE {columna} = $1 AND estatus = 'B' AND cascada_origen = $2",
            hijo.nombre()
        ),
    };

    let result = sqlx::query(&sql)
        .bind(id)
        .bind(origen)
        .execute(&mut *conn)
        .await
        .map_err(map_db_error)?;

    Ok(result.rows_affected())
}

#[async_trait]
impl<M: CascadeRecord> AggregateRepository<M::Entity> for PgEntityRepository<M> {
    #[instrument(skip(self, auditoria), fields(tabla = M::tabla().nombre()))]
    async fn cascade_delete(&self, id: i32, auditoria: &Auditoria) -> RepoResult<Option<M::Entity>> {
        self.cascade(id, Estatus::Baja, auditoria).await
    }

    #[instrument(skip(self, auditoria), fields(tabla = M::tabla().nombre()))]
    async fn cascade_recover(
        &self,
        id: i32,
        auditoria: &Auditoria,
    ) -> RepoResult<Option<M::Entity>> {
        self.cascade(id, Estatus::Activo, auditoria).await
    }
}

impl ModuloRepository for PgEntityRepository<ModuloModel> {}

impl RolRepository for PgEntityRepository<RolModel> {}
