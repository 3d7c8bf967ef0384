//! Modulo database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct ModuloModel {
    pub id: i32,
    pub nombre: String,
    pub nombre_corto: String,
    pub icono: String,
    pub ruta: String,
    pub en_navegacion: bool,
    pub en_plataforma: bool,
    pub creado: DateTime<Utc>,
    pub modificado: DateTime<Utc>,
    pub estatus: String,
}
