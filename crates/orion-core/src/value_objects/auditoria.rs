//! Auditoria - a pending Bitácora entry
//!
//! Built by the service layer and handed to the repository, which writes it
//! in the same transaction as the mutation it describes.

use serde::{Deserialize, Serialize};

use super::Tabla;

/// Audit entry waiting to be written
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Auditoria {
    /// Module name, resolved to its row when the entry is written
    pub modulo: String,
    pub usuario_id: i32,
    /// Already sanitized description
    pub descripcion: String,
    /// Detail route without the id, e.g. `/roles`
    pub ruta: String,
}

impl Auditoria {
    pub fn new(
        tabla: Tabla,
        usuario_id: i32,
        descripcion: impl Into<String>,
    ) -> Self {
        Self {
            modulo: tabla.modulo().to_string(),
            usuario_id,
            descripcion: descripcion.into(),
            ruta: tabla.ruta(),
        }
    }

    /// URL recorded for the affected row
    pub fn url(&self, id: impl std::fmt::Display) -> String {
        format!("{}/{}", self.ruta, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_points_at_detail_view() {
        let auditoria = Auditoria::new(Tabla::Roles, 1, "Nuevo Rol ADMIN");
        assert_eq!(auditoria.modulo, "ROLES");
        assert_eq!(auditoria.url(5), "/roles/5");
    }
}
