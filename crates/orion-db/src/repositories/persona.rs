//! Persona search and the job history lookup used by leave snapshots

use async_trait::async_trait;
use chrono::NaiveDate;
use orion_core::entities::Persona;
use orion_core::traits::{HistorialPuestoRepository, PersonaRepository, RepoResult};
use orion_core::value_objects::{Listado, Pagina};
use tracing::instrument;

use crate::mappers::into_entities;
use crate::models::{HistorialPuestoModel, PersonaModel};

use super::entity::PgEntityRepository;
use super::error::map_db_error;

pub type PgPersonaRepository = PgEntityRepository<PersonaModel>;

pub type PgHistorialPuestoRepository = PgEntityRepository<HistorialPuestoModel>;

const PERSONA_FILTER: &str = r#"
    WHERE estatus = $1
      AND ($2::TEXT IS NULL
           OR CONCAT_WS(' ', nombres, apellido_primero, apellido_segundo) ILIKE '%' || $2 || '%')
      AND ($3::TEXT IS NULL OR curp LIKE $3 || '%')
"#;

#[async_trait]
impl PersonaRepository for PgEntityRepository<PersonaModel> {
    #[instrument(skip(self))]
    async fn search(
        &self,
        nombre: Option<&str>,
        curp: Option<&str>,
        listado: &Listado,
    ) -> RepoResult<Pagina<Persona>> {
        let total = sqlx::query_scalar::<_, i64>(&format!(
            "SELECT COUNT(*) FROM personas {PERSONA_FILTER}"
        ))
        .bind(listado.estatus.code())
        .bind(nombre)
        .bind(curp)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        let sql = Self::select(&format!(
            "{PERSONA_FILTER} ORDER BY apellido_primero, apellido_segundo, nombres, id \
             LIMIT $4 OFFSET $5"
        ));
        let rows = sqlx::query_as::<_, PersonaModel>(&sql)
            .bind(listado.estatus.code())
            .bind(nombre)
            .bind(curp)
            .bind(listado.limit)
            .bind(listado.offset)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(Pagina::new(into_entities(rows)?, total))
    }
}

#[async_trait]
impl HistorialPuestoRepository for PgEntityRepository<HistorialPuestoModel> {
    #[instrument(skip(self))]
    async fn puesto_vigente(
        &self,
        persona_id: i32,
        fecha: NaiveDate,
    ) -> RepoResult<Option<String>> {
        sqlx::query_scalar::<_, String>(
            r#"
            SELECT pf.nombre
            FROM historial_puestos hp
            JOIN puestos_funciones pf ON pf.id = hp.puesto_funcion_id
            WHERE hp.persona_id = $1 AND hp.estatus = 'A' AND hp.fecha_inicio <= $2
            ORDER BY hp.fecha_inicio DESC, hp.id DESC
            LIMIT 1
            "#,
        )
        .bind(persona_id)
        .bind(fecha)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)
    }
}
