//! Modulo entity - a functional area gating a set of permissions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{Estatus, Tabla};

/// Functional area of the application
///
/// Deleting a module cascades to its permissions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modulo {
    pub id: i32,
    pub nombre: String,
    pub nombre_corto: String,
    pub icono: String,
    pub ruta: String,
    pub en_navegacion: bool,
    pub en_plataforma: bool,
    pub creado: DateTime<Utc>,
    pub modificado: DateTime<Utc>,
    pub estatus: Estatus,
}

impl Modulo {
    pub fn new(nombre: impl Into<String>, nombre_corto: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            nombre: nombre.into(),
            nombre_corto: nombre_corto.into(),
            icono: String::new(),
            ruta: String::new(),
            en_navegacion: false,
            en_plataforma: false,
            creado: now,
            modificado: now,
            estatus: Estatus::Activo,
        }
    }

    /// Check whether the module shows up in the navigation menu
    pub fn es_navegable(&self) -> bool {
        self.estatus.is_activo() && self.en_navegacion && self.en_plataforma
    }
}

impl_entity!(Modulo, Tabla::Modulos);
