//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use orion_core::entities::{Incapacidad, Licencia, Usuario};
use orion_core::PermissionMap;
use std::collections::BTreeMap;

use super::responses::{CurrentUserResponse, IncapacidadResponse, LicenciaResponse};

// ============================================================================
// Usuario Mappers
// ============================================================================

impl From<&Usuario> for CurrentUserResponse {
    fn from(usuario: &Usuario) -> Self {
        Self {
            id: usuario.id,
            email: usuario.email.clone(),
            nombre: usuario.nombre(),
            puesto: usuario.puesto.clone(),
            api_key_expiracion: usuario.api_key_expiracion,
        }
    }
}

impl From<Usuario> for CurrentUserResponse {
    fn from(usuario: Usuario) -> Self {
        Self::from(&usuario)
    }
}

/// Module name to level, ordered by module
pub fn permisos_por_modulo(permisos: &PermissionMap) -> BTreeMap<String, orion_core::Nivel> {
    permisos
        .iter()
        .map(|(modulo, nivel)| (modulo.to_string(), nivel))
        .collect()
}

// ============================================================================
// Persona Mappers
// ============================================================================

impl From<Licencia> for LicenciaResponse {
    fn from(licencia: Licencia) -> Self {
        Self {
            dias: licencia.dias(),
            licencia,
        }
    }
}

impl From<Incapacidad> for IncapacidadResponse {
    fn from(incapacidad: Incapacidad) -> Self {
        Self {
            dias: incapacidad.dias(),
            incapacidad,
        }
    }
}
