//! Work centers and their areas

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::describir;
use crate::value_objects::{Estatus, Tabla};

/// Work center, belonging to a district and a jurisdictional body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CentroTrabajo {
    pub id: i32,
    pub distrito_id: i32,
    pub organo_id: i32,
    pub clave: String,
    pub nombre: String,
    pub telefono: Option<String>,
    pub num_ext: Option<String>,
    /// Operational flag, independent of the logical status
    pub activo: bool,
    pub creado: DateTime<Utc>,
    pub modificado: DateTime<Utc>,
    pub estatus: Estatus,
}

impl CentroTrabajo {
    pub fn new(
        distrito_id: i32,
        organo_id: i32,
        clave: impl Into<String>,
        nombre: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            distrito_id,
            organo_id,
            clave: clave.into(),
            nombre: nombre.into(),
            telefono: None,
            num_ext: None,
            activo: true,
            creado: now,
            modificado: now,
            estatus: Estatus::Activo,
        }
    }

    pub fn descripcion(&self) -> String {
        describir(&self.clave, &self.nombre)
    }
}

impl_entity!(CentroTrabajo, Tabla::CentrosTrabajos);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Area {
    pub id: i32,
    pub centro_trabajo_id: i32,
    pub nombre: String,
    pub creado: DateTime<Utc>,
    pub modificado: DateTime<Utc>,
    pub estatus: Estatus,
}

impl Area {
    pub fn new(centro_trabajo_id: i32, nombre: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            centro_trabajo_id,
            nombre: nombre.into(),
            creado: now,
            modificado: now,
            estatus: Estatus::Activo,
        }
    }
}

impl_entity!(Area, Tabla::Areas);

/// Legal attribution of an area
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtribucionCt {
    pub id: i32,
    pub area_id: i32,
    pub norma: String,
    pub fundamento: String,
    pub fragmento: String,
    pub creado: DateTime<Utc>,
    pub modificado: DateTime<Utc>,
    pub estatus: Estatus,
}

impl_entity!(AtribucionCt, Tabla::AtribucionesCt);
