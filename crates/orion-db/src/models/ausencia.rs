//! Leave and disability models

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct LicenciaModel {
    pub id: i32,
    pub persona_id: i32,
    pub tipo: String,
    pub fecha_inicio: NaiveDate,
    pub fecha_termino: NaiveDate,
    pub con_goce: bool,
    pub motivo: String,
    pub puesto_nombre: Option<String>,
    pub creado: DateTime<Utc>,
    pub modificado: DateTime<Utc>,
    pub estatus: String,
}

#[derive(Debug, Clone, FromRow)]
pub struct IncapacidadModel {
    pub id: i32,
    pub persona_id: i32,
    pub fecha_inicio: NaiveDate,
    pub fecha_termino: NaiveDate,
    pub clave: String,
    pub region: String,
    pub motivo: String,
    pub puesto_nombre: String,
    pub creado: DateTime<Utc>,
    pub modificado: DateTime<Utc>,
    pub estatus: String,
}
