//! Lookup of natural-key holders across every status

use async_trait::async_trait;
use orion_core::traits::{RepoResult, UniqueFieldRepository};
use orion_core::value_objects::CampoUnico;
use sqlx::PgPool;
use tracing::instrument;

use super::error::map_db_error;

/// PostgreSQL implementation of [`UniqueFieldRepository`]
#[derive(Clone)]
pub struct PgUniqueFieldRepository {
    pool: PgPool,
}

impl PgUniqueFieldRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Numeric columns are compared through their text form
fn holder_query(campo: CampoUnico) -> String {
    format!(
        "SELECT id FROM {} WHERE {}::TEXT = $1 LIMIT 1",
        campo.tabla().nombre(),
        campo.columna()
    )
}

#[async_trait]
impl UniqueFieldRepository for PgUniqueFieldRepository {
    #[instrument(skip(self))]
    async fn find_holder(&self, campo: CampoUnico, valor: &str) -> RepoResult<Option<i32>> {
        sqlx::query_scalar::<_, i32>(&holder_query(campo))
            .bind(valor)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holder_query() {
        assert_eq!(
            holder_query(CampoUnico::PersonaCurp),
            "SELECT id FROM personas WHERE curp::TEXT = $1 LIMIT 1"
        );
        assert_eq!(
            holder_query(CampoUnico::PersonaNumeroEmpleado),
            "SELECT id FROM personas WHERE numero_empleado::TEXT = $1 LIMIT 1"
        );
    }
}
