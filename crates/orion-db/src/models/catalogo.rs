//! Catalog database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct DistritoModel {
    pub id: i32,
    pub clave: String,
    pub nombre: String,
    pub creado: DateTime<Utc>,
    pub modificado: DateTime<Utc>,
    pub estatus: String,
}

#[derive(Debug, Clone, FromRow)]
pub struct OrganoModel {
    pub id: i32,
    pub clave: String,
    pub nombre: String,
    pub creado: DateTime<Utc>,
    pub modificado: DateTime<Utc>,
    pub estatus: String,
}

#[derive(Debug, Clone, FromRow)]
pub struct NivelAcademicoModel {
    pub id: i32,
    pub clave: String,
    pub nombre: String,
    pub creado: DateTime<Utc>,
    pub modificado: DateTime<Utc>,
    pub estatus: String,
}

#[derive(Debug, Clone, FromRow)]
pub struct BancoModel {
    pub id: i32,
    pub nombre: String,
    pub creado: DateTime<Utc>,
    pub modificado: DateTime<Utc>,
    pub estatus: String,
}

#[derive(Debug, Clone, FromRow)]
pub struct CarreraModel {
    pub id: i32,
    pub nombre: String,
    pub creado: DateTime<Utc>,
    pub modificado: DateTime<Utc>,
    pub estatus: String,
}

#[derive(Debug, Clone, FromRow)]
pub struct TurnoModel {
    pub id: i32,
    pub nombre: String,
    pub descripcion: Option<String>,
    pub creado: DateTime<Utc>,
    pub modificado: DateTime<Utc>,
    pub estatus: String,
}
