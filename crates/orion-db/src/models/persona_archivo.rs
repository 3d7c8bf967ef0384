//! File-backed persona record models

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct PersonaAdjuntoModel {
    pub id: i32,
    pub persona_id: i32,
    pub tipo: String,
    pub descripcion: Option<String>,
    pub archivo: Option<String>,
    pub url: Option<String>,
    pub creado: DateTime<Utc>,
    pub modificado: DateTime<Utc>,
    pub estatus: String,
}

#[derive(Debug, Clone, FromRow)]
pub struct PersonaFotografiaModel {
    pub id: i32,
    pub persona_id: i32,
    pub archivo: Option<String>,
    pub url: Option<String>,
    pub creado: DateTime<Utc>,
    pub modificado: DateTime<Utc>,
    pub estatus: String,
}

#[derive(Debug, Clone, FromRow)]
pub struct PersonaNombramientoModel {
    pub id: i32,
    pub persona_id: i32,
    pub cargo: Option<String>,
    pub centro_trabajo: Option<String>,
    pub tipo: Option<String>,
    pub fecha_inicio: Option<NaiveDate>,
    pub fecha_fin: Option<NaiveDate>,
    pub archivo: Option<String>,
    pub url: Option<String>,
    pub creado: DateTime<Utc>,
    pub modificado: DateTime<Utc>,
    pub estatus: String,
}
