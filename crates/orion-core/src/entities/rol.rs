//! Rol entity and the UsuarioRol join

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{Estatus, Tabla};

/// Named bundle of per-module permission levels
///
/// Deleting a role cascades to its permissions and its user assignments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rol {
    pub id: i32,
    pub nombre: String,
    pub creado: DateTime<Utc>,
    pub modificado: DateTime<Utc>,
    pub estatus: Estatus,
}

impl Rol {
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

impl_entity!(Rol, Tabla::Roles);

/// Assignment of a role to a user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsuarioRol {
    pub id: i32,
    pub usuario_id: i32,
    pub rol_id: i32,
    pub descripcion: String,
    pub creado: DateTime<Utc>,
    pub modificado: DateTime<Utc>,
    pub estatus: Estatus,
}

impl UsuarioRol {
    pub fn new(usuario_id: i32, rol_id: i32, descripcion: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            usuario_id,
            rol_id,
            descripcion: descripcion.into(),
            creado: now,
            modificado: now,
            estatus: Estatus::Activo,
        }
    }

    /// "{email} en {rol}"
    pub fn describir(email: &str, rol: &str) -> String {
        format!("{email} en {rol}")
    }
}

impl_entity!(UsuarioRol, Tabla::UsuariosRoles);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usuario_rol_descripcion() {
        let descripcion = UsuarioRol::describir("ana@pjecz.gob.mx", "CAPTURISTA");
        assert_eq!(descripcion, "ana@pjecz.gob.mx en CAPTURISTA");

        let usuario_rol = UsuarioRol::new(1, 2, descripcion);
        assert_eq!(usuario_rol.estatus, Estatus::Activo);
    }
}
