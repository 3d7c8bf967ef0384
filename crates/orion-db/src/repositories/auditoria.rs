//! Bitácora writer shared by every mutating repository
//!
//! Always called on the transaction of the mutation it records.

use std::fmt::Display;

use orion_core::error::DomainError;
use orion_core::traits::RepoResult;
use orion_core::value_objects::Auditoria;
use sqlx::PgConnection;
use tracing::debug;

use super::error::map_db_error;

/// Insert the audit row for the mutation of row `id`
///
/// Fails with `ModuloNotFound` when the module is not registered, which
/// aborts the surrounding transaction.
pub(crate) async fn write_auditoria(
    conn: &mut PgConnection,
    auditoria: &Auditoria,
    id: impl Display,
) -> RepoResult<()> {
    let url = auditoria.url(id);

    let result = sqlx::query(
        r#"
        INSERT INTO bitacoras (modulo_id, usuario_id, descripcion, url)
        SELECT m.id, $2, $3, $4
        FROM modulos m
        WHERE m.nombre = $1
        "#,
    )
    .bind(&auditoria.modulo)
    .bind(auditoria.usuario_id)
    .bind(&auditoria.descripcion)
    .bind(&url)
    .execute(&mut *conn)
    .await
    .map_err(map_db_error)?;

    if result.rows_affected() == 0 {
        return Err(DomainError::ModuloNotFound(auditoria.modulo.clone()));
    }

    debug!(modulo = %auditoria.modulo, url = %url, "Audit entry written");
    Ok(())
}
