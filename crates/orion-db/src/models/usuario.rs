//! Usuario database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct UsuarioModel {
    pub id: i32,
    pub email: String,
    pub nombres: String,
    pub apellido_paterno: String,
    pub apellido_materno: String,
    pub curp: String,
    pub puesto: String,
    pub api_key: Option<String>,
    pub api_key_expiracion: Option<DateTime<Utc>>,
    pub creado: DateTime<Utc>,
    pub modificado: DateTime<Utc>,
    pub estatus: String,
}

/// One row of the usuario → rol → permiso → modulo join
#[derive(Debug, Clone, FromRow)]
pub struct ConcesionModel {
    pub usuario_rol_estatus: String,
    pub rol_estatus: String,
    pub permiso_estatus: String,
    pub modulo_estatus: String,
    pub nivel: i32,
    pub modulo: String,
    pub nombre_corto: String,
    pub icono: String,
    pub ruta: String,
    pub en_navegacion: bool,
    pub en_plataforma: bool,
}
