//! Error handling utilities for repositories

use orion_core::error::DomainError;
use orion_core::value_objects::Tabla;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Unique violation raised while writing a row of `tabla`
pub fn already_exists(tabla: Tabla) -> DomainError {
    DomainError::AlreadyExists(format!("{} ya existe", tabla.entidad()))
}

/// Create a "not found" error for a row of `tabla`
pub fn row_not_found(tabla: Tabla, id: impl ToString) -> DomainError {
    DomainError::not_found(tabla.entidad(), id)
}
