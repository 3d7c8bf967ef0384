//! Audit builder - the pending Bitácora entry of a mutation

use orion_common::text::{safe_message, MAX_MESSAGE_LEN};
use orion_core::{Auditoria, Tabla};

use super::current_user::CurrentUser;

/// Builds the [`Auditoria`] handed to a mutating repository call
#[derive(Debug, Clone)]
pub struct AuditoriaBuilder {
    tabla: Tabla,
    usuario_id: i32,
    descripcion: String,
}

impl AuditoriaBuilder {
    pub fn new(tabla: Tabla, usuario: &CurrentUser) -> Self {
        Self {
            tabla,
            usuario_id: usuario.id(),
            descripcion: String::new(),
        }
    }

    pub fn descripcion(mut self, descripcion: impl Into<String>) -> Self {
        self.descripcion = descripcion.into();
        self
    }

    /// Sanitize the description and produce the entry
    pub fn build(self) -> Auditoria {
        Auditoria::new(
            self.tabla,
            self.usuario_id,
            safe_message(&self.descripcion, MAX_MESSAGE_LEN),
        )
    }
}
