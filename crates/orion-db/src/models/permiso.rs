//! Permiso database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct PermisoModel {
    pub id: i32,
    pub rol_id: i32,
    pub modulo_id: i32,
    pub nombre: String,
    pub nivel: i32,
    pub creado: DateTime<Utc>,
    pub modificado: DateTime<Utc>,
    pub estatus: String,
}
