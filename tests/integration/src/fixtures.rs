//! Test fixtures and data generators
//!
//! Provides reusable request bodies and response shapes for integration tests.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Short random tag, unique across test runs against the same database
pub fn unique_tag() -> String {
    uuid::Uuid::new_v4().simple().to_string()[..12].to_string()
}

/// Letters only, derived from a fresh random value
fn random_letters(n: usize) -> String {
    uuid::Uuid::new_v4()
        .as_bytes()
        .iter()
        .take(n)
        .map(|b| char::from(b'A' + b % 26))
        .collect()
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Refresh request
#[derive(Debug, Serialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Auth response
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub usuario: UsuarioResponse,
}

/// The authenticated user
#[derive(Debug, Deserialize)]
pub struct UsuarioResponse {
    pub id: i32,
    pub email: String,
    pub nombre: String,
}

/// `GET /auth/me`
#[derive(Debug, Deserialize)]
pub struct MeResponse {
    pub usuario: UsuarioResponse,
    pub permisos: serde_json::Map<String, Value>,
    pub menu: Vec<Value>,
}

/// One page of any listing
#[derive(Debug, Deserialize)]
pub struct PaginaResponse<T> {
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
}

#[derive(Debug, Deserialize)]
pub struct PaginationMeta {
    pub total: i64,
    pub start: i64,
    pub length: i64,
    pub has_more: bool,
}

/// Error response body
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

/// Catalog entry with just a name
#[derive(Debug, Serialize)]
pub struct NombreRequest {
    pub nombre: String,
}

impl NombreRequest {
    pub fn unique(prefijo: &str) -> Self {
        Self {
            nombre: format!("{} {}", prefijo, unique_tag()),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Banco {
    pub id: i32,
    pub nombre: String,
    pub estatus: String,
}

#[derive(Debug, Deserialize)]
pub struct Bitacora {
    pub id: i32,
    pub modulo_id: i32,
    pub usuario_id: i32,
    pub descripcion: String,
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct Persona {
    pub id: i32,
    pub nombres: String,
    pub rfc: String,
    pub curp: String,
}

/// A persona body with a fresh RFC and CURP
pub fn persona_request(nombres: &str) -> Value {
    let letras = random_letters(10);
    json!({
        "nombres": nombres,
        "apellido_primero": "PRUEBA",
        "rfc": format!("{}900101AB1", &letras[..4]),
        "curp": format!("{}900101H{}A1", &letras[..4], &letras[4..9]),
    })
}

#[derive(Debug, Deserialize)]
pub struct PersonaAdjunto {
    pub id: i32,
    pub persona_id: i32,
    pub archivo: Option<String>,
    pub url: Option<String>,
}

/// File upload body
#[derive(Debug, Serialize)]
pub struct FileRequest {
    pub nombre_archivo: String,
    pub contenido_base64: String,
}

#[derive(Debug, Deserialize)]
pub struct ApiKeyResponse {
    pub api_key: String,
    pub api_key_expiracion: String,
}

#[derive(Debug, Serialize)]
pub struct PasswordRequest {
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct TaskRequest {
    pub comando: String,
    pub mensaje: String,
    pub args: Value,
}

#[derive(Debug, Deserialize)]
pub struct Tarea {
    pub id: uuid::Uuid,
    pub usuario_id: i32,
    pub comando: String,
    pub ha_terminado: bool,
}

#[derive(Debug, Deserialize)]
pub struct ProgressResponse {
    pub id: uuid::Uuid,
    pub progreso: i32,
    pub ha_terminado: bool,
}
