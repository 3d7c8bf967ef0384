//! File upload handlers
//!
//! One handler for the three attachment kinds; the body carries the file
//! as base64.

use axum::{extract::State, Json};
use base64::{engine::general_purpose::STANDARD, Engine};
use orion_service::dto::FileRequest;
use orion_service::{Archivo, FileService};
use serde::Serialize;

use crate::extractors::{AuthUser, IdPath, ValidatedJson};
use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// Upload the file of a row
///
/// POST /{personas_adjuntos|personas_fotografias|personas_nombramientos}/{id}/file
pub async fn upload<T>(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
    ValidatedJson(request): ValidatedJson<FileRequest>,
) -> ApiResult<Json<T>>
where
    T: Archivo + Serialize,
{
    let service = FileService::<T>::new(state.service_context());
    service.authorize(&auth.0).await?;

    let bytes = decode(&request.contenido_base64, state.config().storage.max_file_size_bytes())?;
    let row = service
        .replace_file(&auth.0, id, &request.nombre_archivo, bytes)
        .await?;
    Ok(Json(row))
}

fn decode(contenido: &str, max_bytes: usize) -> Result<Vec<u8>, ApiError> {
    let contenido = contenido.trim();
    if contenido.len() / 4 * 3 > max_bytes.saturating_add(3) {
        return Err(too_large(max_bytes));
    }

    let bytes = STANDARD
        .decode(contenido)
        .map_err(|_| ApiError::invalid_body("El archivo no está codificado en base64."))?;

    if bytes.is_empty() {
        return Err(ApiError::invalid_body("El archivo está vacío."));
    }
    if bytes.len() > max_bytes {
        return Err(too_large(max_bytes));
    }
    Ok(bytes)
}

fn too_large(max_bytes: usize) -> ApiError {
    ApiError::invalid_body(format!("El archivo excede el máximo de {max_bytes} bytes."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode() {
        assert_eq!(decode("JVBERi0=", 1024).unwrap(), b"%PDF-");
        assert_eq!(decode(" JVBERi0= \n", 1024).unwrap(), b"%PDF-");
    }

    #[test]
    fn test_decode_rejects_bad_input() {
        assert_eq!(decode("no es base64!", 1024).unwrap_err().error_code(), "INVALID_BODY");
        assert!(decode("", 1024).is_err());
        assert!(decode("JVBERi0=", 4).is_err());
    }

    #[test]
    fn test_decode_rejects_oversized_before_decoding() {
        let grande = "A".repeat(4096);
        assert_eq!(decode(&grande, 3072).unwrap().len(), 3072);
        assert!(decode(&grande, 1024).is_err());
        // Not valid base64, yet rejected on size alone
        assert!(decode(&"!".repeat(4096), 1024)
            .unwrap_err()
            .to_string()
            .contains("excede"));
    }
}
