//! Job and academic history models

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct HistorialPuestoModel {
    pub id: i32,
    pub persona_id: i32,
    pub puesto_funcion_id: i32,
    pub turno_id: i32,
    pub area: String,
    pub centro_trabajo: Option<String>,
    pub fecha_inicio: NaiveDate,
    pub fecha_termino: Option<NaiveDate>,
    pub nivel: Option<i32>,
    pub quinquenio: Option<i32>,
    pub nombramiento: Option<String>,
    pub tipo_nombramiento: Option<String>,
    pub observaciones: Option<String>,
    pub creado: DateTime<Utc>,
    pub modificado: DateTime<Utc>,
    pub estatus: String,
}

#[derive(Debug, Clone, FromRow)]
pub struct HistorialAcademicoModel {
    pub id: i32,
    pub persona_id: i32,
    pub nivel_academico_id: i32,
    pub escuela: Option<String>,
    pub ciudad: Option<String>,
    pub ano_inicio: Option<i32>,
    pub ano_termino: Option<i32>,
    pub creado: DateTime<Utc>,
    pub modificado: DateTime<Utc>,
    pub estatus: String,
}
