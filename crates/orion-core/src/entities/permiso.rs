//! Permiso entity - the level a role holds over a module

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{Estatus, Nivel, Tabla};

/// (Rol, Modulo, Nivel) triple; at most one per (rol, modulo) pair
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permiso {
    pub id: i32,
    pub rol_id: i32,
    pub modulo_id: i32,
    pub nombre: String,
    pub nivel: Nivel,
    pub creado: DateTime<Utc>,
    pub modificado: DateTime<Utc>,
    pub estatus: Estatus,
}

impl Permiso {
    pub fn new(rol_id: i32, modulo_id: i32, nombre: impl Into<String>, nivel: Nivel) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            rol_id,
            modulo_id,
            nombre: nombre.into(),
            nivel,
            creado: now,
            modificado: now,
            estatus: Estatus::Activo,
        }
    }

    /// "{ROL} puede {NIVEL} en {MODULO}"
    pub fn nombrar(rol: &str, nivel: Nivel, modulo: &str) -> String {
        format!("{rol} puede {} en {modulo}", nivel.label())
    }

    pub fn nivel_descrito(&self) -> &'static str {
        self.nivel.label()
    }
}

impl_entity!(Permiso, Tabla::Permisos);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nombrar() {
        assert_eq!(
            Permiso::nombrar("CAPTURISTA", Nivel::Modificar, "AREAS"),
            "CAPTURISTA puede VER y MODIFICAR en AREAS"
        );
    }

    #[test]
    fn test_nivel_descrito() {
        let permiso = Permiso::new(1, 1, "X", Nivel::Administrar);
        assert_eq!(permiso.nivel_descrito(), "ADMINISTRAR");
    }
}
