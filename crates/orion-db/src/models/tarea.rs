//! Tarea database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for tareas table; the id comes from the task queue
#[derive(Debug, Clone, FromRow)]
pub struct TareaModel {
    pub id: Uuid,
    pub usuario_id: i32,
    pub comando: String,
    pub mensaje: String,
    pub archivo: String,
    pub url: String,
    pub ha_terminado: bool,
    pub creado: DateTime<Utc>,
    pub modificado: DateTime<Utc>,
    pub estatus: String,
}
