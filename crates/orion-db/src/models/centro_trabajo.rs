//! Work center, area and area attribution models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct CentroTrabajoModel {
    pub id: i32,
    pub distrito_id: i32,
    pub organo_id: i32,
    pub clave: String,
    pub nombre: String,
    pub telefono: Option<String>,
    pub num_ext: Option<String>,
    pub activo: bool,
    pub creado: DateTime<Utc>,
    pub modificado: DateTime<Utc>,
    pub estatus: String,
}

#[derive(Debug, Clone, FromRow)]
pub struct AreaModel {
    pub id: i32,
    pub centro_trabajo_id: i32,
    pub nombre: String,
    pub creado: DateTime<Utc>,
    pub modificado: DateTime<Utc>,
    pub estatus: String,
}

#[derive(Debug, Clone, FromRow)]
pub struct AtribucionCtModel {
    pub id: i32,
    pub area_id: i32,
    pub norma: String,
    pub fundamento: String,
    pub fragmento: String,
    pub creado: DateTime<Utc>,
    pub modificado: DateTime<Utc>,
    pub estatus: String,
}
