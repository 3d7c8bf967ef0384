//! Domicilio database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct DomicilioModel {
    pub id: i32,
    pub estado: String,
    pub municipio: String,
    pub pais: String,
    pub calle: String,
    pub num_ext: String,
    pub num_int: String,
    pub colonia: String,
    pub cp: String,
    pub completo: String,
    pub creado: DateTime<Utc>,
    pub modificado: DateTime<Utc>,
    pub estatus: String,
}

#[derive(Debug, Clone, FromRow)]
pub struct PersonaDomicilioModel {
    pub id: i32,
    pub persona_id: i32,
    pub domicilio_id: i32,
    pub creado: DateTime<Utc>,
    pub modificado: DateTime<Utc>,
    pub estatus: String,
}
