//! File-backed persona records - replace, stamp and roll back

use async_trait::async_trait;
use orion_core::error::DomainError;
use orion_core::traits::{AdjuntoRepository, RepoResult};
use orion_core::value_objects::Auditoria;
use tracing::{info, instrument, warn};

use crate::mappers::PgRecord;
use crate::models::{PersonaAdjuntoModel, PersonaFotografiaModel, PersonaNombramientoModel};

use super::auditoria::write_auditoria;
use super::entity::PgEntityRepository;
use super::error::{map_db_error, row_not_found};

/// A table with `archivo` and `url` columns filled after upload
pub trait ArchivoRecord: PgRecord {}

impl ArchivoRecord for PersonaAdjuntoModel {}
impl ArchivoRecord for PersonaFotografiaModel {}
impl ArchivoRecord for PersonaNombramientoModel {}

pub type PgPersonaAdjuntoRepository = PgEntityRepository<PersonaAdjuntoModel>;
pub type PgPersonaFotografiaRepository = PgEntityRepository<PersonaFotografiaModel>;
pub type PgPersonaNombramientoRepository = PgEntityRepository<PersonaNombramientoModel>;

#[async_trait]
impl<M: ArchivoRecord> AdjuntoRepository<M::Entity> for PgEntityRepository<M> {
    #[instrument(skip(self, nuevo), fields(tabla = M::tabla().nombre()))]
    async fn create_replacing(
        &self,
        nuevo: &M::Entity,
        anterior_id: Option<i32>,
    ) -> RepoResult<M::Entity> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        if let Some(anterior_id) = anterior_id {
            let result = sqlx::query(&format!(
                "UPDATE {} SET estatus = 'B', modificado = NOW() WHERE id = $1 AND estatus = 'A'",
                Self::table()
            ))
            .bind(anterior_id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

            if result.rows_affected() == 0 {
                return Err(row_not_found(M::tabla(), anterior_id));
            }
        }

        let created = Self::insert_on(&mut tx, nuevo).await?;

        tx.commit().await.map_err(map_db_error)?;
        Ok(created)
    }

    #[instrument(skip(self, auditoria), fields(tabla = M::tabla().nombre()))]
    async fn stamp_file(
        &self,
        id: i32,
        archivo: &str,
        url: &str,
        auditoria: &Auditoria,
    ) -> RepoResult<M::Entity> {
        let sql = format!(
            "UPDATE {} SET archivo = $2, url = $3, modificado = NOW() WHERE id = $1 RETURNING {}",
            Self::table(),
            M::select_list(),
        );

        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let model = sqlx::query_as::<_, M>(&sql)
            .bind(id)
            .bind(archivo)
            .bind(url)
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_db_error)?
            .ok_or_else(|| row_not_found(M::tabla(), id))?;
        let stamped = <M::Entity as TryFrom<M>>::try_from(model)?;

        write_auditoria(&mut tx, auditoria, id).await?;

        tx.commit().await.map_err(map_db_error)?;
        info!(id, archivo, "File recorded");
        Ok(stamped)
    }

    #[instrument(skip(self), fields(tabla = M::tabla().nombre()))]
    async fn rollback_replacement(
        &self,
        nuevo_id: i32,
        anterior_id: Option<i32>,
    ) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let deleted = sqlx::query(&format!("DELETE FROM {} WHERE id = $1", Self::table()))
            .bind(nuevo_id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;
        if deleted.rows_affected() == 0 {
            return Err(DomainError::InternalError(format!(
                "Replacement {nuevo_id} vanished before rollback"
            )));
        }

        if let Some(anterior_id) = anterior_id {
            sqlx::query(&format!(
                "UPDATE {} SET estatus = 'A', modificado = NOW() WHERE id = $1",
                Self::table()
            ))
            .bind(anterior_id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;
        }

        tx.commit().await.map_err(map_db_error)?;
        warn!(nuevo_id, ?anterior_id, "Replacement rolled back");
        Ok(())
    }
}
