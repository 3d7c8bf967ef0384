//! Audit log and login/logout models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct BitacoraModel {
    pub id: i32,
    pub modulo_id: i32,
    pub usuario_id: i32,
    pub descripcion: String,
    pub url: String,
    pub creado: DateTime<Utc>,
    pub modificado: DateTime<Utc>,
    pub estatus: String,
}

#[derive(Debug, Clone, FromRow)]
pub struct EntradaSalidaModel {
    pub id: i32,
    pub usuario_id: i32,
    pub tipo: String,
    pub direccion_ip: String,
    pub creado: DateTime<Utc>,
    pub modificado: DateTime<Utc>,
    pub estatus: String,
}
