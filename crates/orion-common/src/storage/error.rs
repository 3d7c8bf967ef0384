//! Storage errors

/// Closed set of upload failures; `Unknown` is the fallback
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Tipo de archivo no permitido: {0}")]
    NotAllowedExtension(String),

    #[error("Tipo de archivo desconocido: {0}")]
    UnknownExtension(String),

    #[error("Falta la configuración del almacenamiento: {0}")]
    MissingConfiguration(String),

    #[error("Error al subir el archivo: {0}")]
    Upload(String),

    #[error("Tiempo de espera agotado al subir el archivo")]
    Timeout,

    #[error("Error desconocido al subir el archivo: {0}")]
    Unknown(String),
}

impl StorageError {
    /// Extension problems are the caller's fault; everything else is upstream
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::NotAllowedExtension(_) | Self::UnknownExtension(_))
    }

    #[must_use]
    pub fn status_code(&self) -> u16 {
        if self.is_client_error() {
            400
        } else {
            502
        }
    }

    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotAllowedExtension(_) => "NOT_ALLOWED_EXTENSION",
            Self::UnknownExtension(_) => "UNKNOWN_EXTENSION",
            Self::MissingConfiguration(_) => "STORAGE_MISSING_CONFIGURATION",
            Self::Upload(_) => "STORAGE_UPLOAD_FAILED",
            Self::Timeout => "STORAGE_TIMEOUT",
            Self::Unknown(_) => "STORAGE_UNKNOWN_ERROR",
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        Self::Upload(err.to_string())
    }
}
