//! Catalog entities - small reference tables

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::describir;
use crate::value_objects::{Estatus, Tabla};

/// Judicial district
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Distrito {
    pub id: i32,
    pub clave: String,
    pub nombre: String,
    pub creado: DateTime<Utc>,
    pub modificado: DateTime<Utc>,
    pub estatus: Estatus,
}

impl Distrito {
    pub fn new(clave: impl Into<String>, nombre: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            clave: clave.into(),
            nombre: nombre.into(),
            creado: now,
            modificado: now,
            estatus: Estatus::Activo,
        }
    }

    pub fn descripcion(&self) -> String {
        describir(&self.clave, &self.nombre)
    }
}

impl_entity!(Distrito, Tabla::Distritos);

/// Jurisdictional body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organo {
    pub id: i32,
    pub clave: String,
    pub nombre: String,
    pub creado: DateTime<Utc>,
    pub modificado: DateTime<Utc>,
    pub estatus: Estatus,
}

impl Organo {
    pub fn new(clave: impl Into<String>, nombre: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            clave: clave.into(),
            nombre: nombre.into(),
            creado: now,
            modificado: now,
            estatus: Estatus::Activo,
        }
    }

    pub fn descripcion(&self) -> String {
        describir(&self.clave, &self.nombre)
    }
}

impl_entity!(Organo, Tabla::Organos);

/// Academic level
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NivelAcademico {
    pub id: i32,
    pub clave: String,
    pub nombre: String,
    pub creado: DateTime<Utc>,
    pub modificado: DateTime<Utc>,
    pub estatus: Estatus,
}

impl NivelAcademico {
    pub fn new(clave: impl Into<String>, nombre: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            clave: clave.into(),
            nombre: nombre.into(),
            creado: now,
            modificado: now,
            estatus: Estatus::Activo,
        }
    }

    pub fn descripcion(&self) -> String {
        describir(&self.clave, &self.nombre)
    }
}

impl_entity!(NivelAcademico, Tabla::NivelesAcademicos);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Banco {
    pub id: i32,
    pub nombre: String,
    pub creado: DateTime<Utc>,
    pub modificado: DateTime<Utc>,
    pub estatus: Estatus,
}

impl Banco {
    pub fn new(nombre: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            nombre: nombre.into(),
            creado: now,
            modificado: now,
            estatus: Estatus::Activo,
        }
    }
}

impl_entity!(Banco, Tabla::Bancos);

/// Professional career
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Carrera {
    pub id: i32,
    pub nombre: String,
    pub creado: DateTime<Utc>,
    pub modificado: DateTime<Utc>,
    pub estatus: Estatus,
}

impl Carrera {
    pub fn new(nombre: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            nombre: nombre.into(),
            creado: now,
            modificado: now,
            estatus: Estatus::Activo,
        }
    }
}

impl_entity!(Carrera, Tabla::Carreras);

/// Work shift
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turno {
    pub id: i32,
    pub nombre: String,
    pub descripcion: Option<String>,
    pub creado: DateTime<Utc>,
    pub modificado: DateTime<Utc>,
    pub estatus: Estatus,
}

impl Turno {
    pub fn new(nombre: impl Into<String>, descripcion: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            nombre: nombre.into(),
            descripcion,
            creado: now,
            modificado: now,
            estatus: Estatus::Activo,
        }
    }
}

impl_entity!(Turno, Tabla::Turnos);
