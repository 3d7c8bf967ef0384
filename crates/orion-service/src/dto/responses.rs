//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. Entities are
//! serialized as they are; the types here add derived fields or hide
//! secrets.

use chrono::{DateTime, Utc};
use orion_core::entities::{Incapacidad, Licencia};
use orion_core::{Listado, MenuItem, Nivel, Pagina};
use serde::Serialize;
use std::collections::BTreeMap;
use uuid::Uuid;

// ============================================================================
// Common Response Types
// ============================================================================

/// Generic API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// One page of a listing, with the window that produced it
#[derive(Debug, Serialize)]
pub struct PaginaResponse<T> {
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
}

impl<T> PaginaResponse<T> {
    pub fn new(pagina: Pagina<T>, listado: &Listado) -> Self {
        Self {
            pagination: PaginationMeta {
                total: pagina.total,
                start: listado.offset,
                length: listado.limit,
                has_more: listado.offset + (pagina.items.len() as i64) < pagina.total,
            },
            data: pagina.items,
        }
    }
}

/// Pagination metadata
#[derive(Debug, Serialize)]
pub struct PaginationMeta {
    /// Rows matching the filter
    pub total: i64,
    pub start: i64,
    pub length: i64,
    /// Whether rows exist past this page
    pub has_more: bool,
}

// ============================================================================
// Auth Responses
// ============================================================================

/// Authentication response with tokens
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub usuario: CurrentUserResponse,
}

impl AuthResponse {
    pub fn new(
        access_token: String,
        refresh_token: String,
        expires_in: i64,
        usuario: CurrentUserResponse,
    ) -> Self {
        Self {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_in,
            usuario,
        }
    }
}

/// The authenticated user, without secrets
#[derive(Debug, Clone, Serialize)]
pub struct CurrentUserResponse {
    pub id: i32,
    pub email: String,
    pub nombre: String,
    pub puesto: String,
    pub api_key_expiracion: Option<DateTime<Utc>>,
}

/// `GET /auth/me`: the user, their levels per module and their menu
#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub usuario: CurrentUserResponse,
    pub permisos: BTreeMap<String, Nivel>,
    pub menu: Vec<MenuItem>,
}

/// A freshly generated API key; shown only once
#[derive(Debug, Serialize)]
pub struct ApiKeyResponse {
    pub api_key: String,
    pub api_key_expiracion: DateTime<Utc>,
}

// ============================================================================
// Persona Responses
// ============================================================================

/// Licencia with its inclusive length in days
#[derive(Debug, Serialize)]
pub struct LicenciaResponse {
    #[serde(flatten)]
    pub licencia: Licencia,
    pub dias: i64,
}

/// Incapacidad with its inclusive length in days
#[derive(Debug, Serialize)]
pub struct IncapacidadResponse {
    #[serde(flatten)]
    pub incapacidad: Incapacidad,
    pub dias: i64,
}

// ============================================================================
// Tarea Responses
// ============================================================================

#[derive(Debug, Serialize)]
pub struct ProgressResponse {
    pub id: Uuid,
    pub progreso: i32,
    pub ha_terminado: bool,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Readiness response with the state of every backing service
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub database: bool,
    pub redis: bool,
}

impl ReadinessResponse {
    pub fn new(database: bool, redis: bool) -> Self {
        let status = if database && redis { "ready" } else { "degraded" };
        Self {
            status: status.to_string(),
            database,
            redis,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.database && self.redis
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orion_core::Estatus;

    #[test]
    fn test_pagination_has_more() {
        let pagina = Pagina::new(vec![1, 2], 5);
        let response = PaginaResponse::new(pagina, &Listado::new(Estatus::Activo, 0, 2));
        assert!(response.pagination.has_more);

        let pagina = Pagina::new(vec![5], 5);
        let response = PaginaResponse::new(pagina, &Listado::new(Estatus::Activo, 4, 2));
        assert!(!response.pagination.has_more);
    }

    #[test]
    fn test_licencia_response_flattens_entity() {
        let licencia = Licencia {
            id: 7,
            fecha_inicio: chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            fecha_termino: chrono::NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
            ..Licencia::default()
        };
        let json = serde_json::to_value(LicenciaResponse {
            dias: licencia.dias(),
            licencia,
        })
        .unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["dias"], 3);
    }

    #[test]
    fn test_readiness() {
        assert!(ReadinessResponse::new(true, true).is_ready());
        assert_eq!(ReadinessResponse::new(true, false).status, "degraded");
    }
}
