//! Generic PostgreSQL repository for every table described by a [`PgRecord`]

use std::marker::PhantomData;

use async_trait::async_trait;
use orion_core::entities::Entity;
use orion_core::traits::{EntityRepository, RepoResult};
use orion_core::value_objects::{Auditoria, Listado, Pagina};
use sqlx::{PgConnection, PgPool};
use tracing::instrument;

use crate::mappers::{into_entities, PgRecord};

use super::auditoria::write_auditoria;
use super::error::{already_exists, map_db_error, map_unique_violation, row_not_found};

/// PostgreSQL implementation of [`EntityRepository`] over the model `M`
///
/// Specialised traits (`UsuarioRepository`, `PermisoRepository`, ...) are
/// implemented on concrete instantiations of this type.
pub struct PgEntityRepository<M> {
    pub(crate) pool: PgPool,
    _model: PhantomData<fn() -> M>,
}

impl<M> Clone for PgEntityRepository<M> {
    fn clone(&self) -> Self {
        Self::new(self.pool.clone())
    }
}

impl<M> PgEntityRepository<M> {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _model: PhantomData,
        }
    }
}

impl<M: PgRecord> PgEntityRepository<M> {
    pub(crate) fn table() -> &'static str {
        M::tabla().nombre()
    }

    /// `SELECT <columns> FROM <table>` followed by `tail`
    pub(crate) fn select(tail: &str) -> String {
        format!("SELECT {} FROM {} {tail}", M::select_list(), Self::table())
    }

    /// Insert a row on an open connection or transaction
    pub(crate) async fn insert_on(
        conn: &mut PgConnection,
        entity: &M::Entity,
    ) -> RepoResult<M::Entity> {
        let n = M::COLUMNS.len();
        let placeholders: Vec<String> = (1..=n).map(|i| format!("${i}")).collect();
        let sql = format!(
            "INSERT INTO {} ({}, estatus) VALUES ({}, ${}) RETURNING {}",
            Self::table(),
            M::COLUMNS.join(", "),
            placeholders.join(", "),
            n + 1,
            M::select_list(),
        );

        let model = M::bind_columns(entity, sqlx::query_as::<_, M>(&sql))
            .bind(entity.estatus().code())
            .fetch_one(&mut *conn)
            .await
            .map_err(|e| map_unique_violation(e, || already_exists(M::tabla())))?;

        <M::Entity as TryFrom<M>>::try_from(model)
    }

    /// Fetch one row locking it until the transaction ends
    pub(crate) async fn lock_on(conn: &mut PgConnection, id: i32) -> RepoResult<M::Entity> {
        let sql = Self::select("WHERE id = $1 FOR UPDATE");
        let model = sqlx::query_as::<_, M>(&sql)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(map_db_error)?
            .ok_or_else(|| row_not_found(M::tabla(), id))?;

        <M::Entity as TryFrom<M>>::try_from(model)
    }
}

#[async_trait]
impl<M: PgRecord> EntityRepository<M::Entity> for PgEntityRepository<M> {
    #[instrument(skip(self), fields(tabla = M::tabla().nombre()))]
    async fn find_by_id(&self, id: i32) -> RepoResult<Option<M::Entity>> {
        let sql = Self::select("WHERE id = $1");
        let result = sqlx::query_as::<_, M>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        result.map(<M::Entity as TryFrom<M>>::try_from).transpose()
    }

    #[instrument(skip(self), fields(tabla = M::tabla().nombre()))]
    async fn list(&self, listado: &Listado) -> RepoResult<Pagina<M::Entity>> {
        let padre = M::PADRE.zip(listado.padre_id);
        let filtro = match padre {
            Some((columna, _)) => format!("WHERE estatus = $1 AND {columna} = $2"),
            None => "WHERE estatus = $1".to_string(),
        };
        let next = if padre.is_some() { 3 } else { 2 };

        let count_sql = format!("SELECT COUNT(*) FROM {} {filtro}", Self::table());
        let mut count = sqlx::query_scalar::<_, i64>(&count_sql).bind(listado.estatus.code());
        if let Some((_, padre_id)) = padre {
            count = count.bind(padre_id);
        }
        let total = count.fetch_one(&self.pool).await.map_err(map_db_error)?;

        let sql = Self::select(&format!(
            "{filtro} ORDER BY id DESC LIMIT ${next} OFFSET ${}",
            next + 1
        ));
        let mut query = sqlx::query_as::<_, M>(&sql).bind(listado.estatus.code());
        if let Some((_, padre_id)) = padre {
            query = query.bind(padre_id);
        }
        let rows = query
            .bind(listado.limit)
            .bind(listado.offset)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(Pagina::new(into_entities(rows)?, total))
    }

    #[instrument(skip(self, entity, auditoria), fields(tabla = M::tabla().nombre()))]
    async fn create(&self, entity: &M::Entity, auditoria: &Auditoria) -> RepoResult<M::Entity> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let created = Self::insert_on(&mut tx, entity).await?;
        write_auditoria(&mut tx, auditoria, created.id()).await?;

        tx.commit().await.map_err(map_db_error)?;
        Ok(created)
    }

    #[instrument(skip(self, entity, auditoria), fields(tabla = M::tabla().nombre(), id = entity.id()))]
    async fn update(&self, entity: &M::Entity, auditoria: &Auditoria) -> RepoResult<M::Entity> {
        let assignments: Vec<String> = M::COLUMNS
            .iter()
            .enumerate()
            .map(|(i, columna)| format!("{columna} = ${}", i + 2))
            .collect();
        let sql = format!(
            "UPDATE {} SET {}, modificado = NOW() WHERE id = $1 RETURNING {}",
            Self::table(),
            assignments.join(", "),
            M::select_list(),
        );

        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let model = M::bind_columns(entity, sqlx::query_as::<_, M>(&sql).bind(entity.id()))
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| map_unique_violation(e, || already_exists(M::tabla())))?
            .ok_or_else(|| row_not_found(M::tabla(), entity.id()))?;
        let updated = <M::Entity as TryFrom<M>>::try_from(model)?;

        write_auditoria(&mut tx, auditoria, updated.id()).await?;

        tx.commit().await.map_err(map_db_error)?;
        Ok(updated)
    }
}
