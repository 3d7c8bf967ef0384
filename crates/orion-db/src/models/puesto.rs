//! Position database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct PuestoModel {
    pub id: i32,
    pub clave: String,
    pub nombre: String,
    pub tipo_cargo: String,
    pub tipo_empleado: String,
    pub creado: DateTime<Utc>,
    pub modificado: DateTime<Utc>,
    pub estatus: String,
}

#[derive(Debug, Clone, FromRow)]
pub struct PuestoFuncionModel {
    pub id: i32,
    pub puesto_id: i32,
    pub nombre: String,
    pub creado: DateTime<Utc>,
    pub modificado: DateTime<Utc>,
    pub estatus: String,
}

#[derive(Debug, Clone, FromRow)]
pub struct AtribucionModel {
    pub id: i32,
    pub puesto_funcion_id: i32,
    pub centro_trabajo_id: i32,
    pub norma: String,
    pub fundamento: String,
    pub fragmento: String,
    pub tipo_cargo: Option<String>,
    pub creado: DateTime<Utc>,
    pub modificado: DateTime<Utc>,
    pub estatus: String,
}
