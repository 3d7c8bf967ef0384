//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("{entidad} not found: {id}")]
    NotFound { entidad: &'static str, id: String },

    #[error("Module not registered: {0}")]
    ModuloNotFound(String),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid value for {campo}: {valor}")]
    InvalidCode { campo: &'static str, valor: String },

    #[error("Invalid status: {0}")]
    InvalidEstatus(String),

    #[error("Invalid permission level: {0}")]
    InvalidNivel(i32),

    #[error("La fecha de inicio no puede ser mayor a la fecha de termino.")]
    InvalidPeriodo,

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Missing permission {nivel} on {modulo}")]
    MissingPermission { modulo: String, nivel: String },

    #[error("User is not active")]
    InactiveUser,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Already exists: {0}")]
    AlreadyExists(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Cache error: {0}")]
    CacheError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Create a "not found" error for an entity kind
    pub fn not_found(entidad: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entidad,
            id: id.to_string(),
        }
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }

    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::NotFound { .. } => "NOT_FOUND",
            Self::ModuloNotFound(_) => "UNKNOWN_MODULE",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidCode { .. } => "INVALID_CODE",
            Self::InvalidEstatus(_) => "INVALID_STATUS",
            Self::InvalidNivel(_) => "INVALID_LEVEL",
            Self::InvalidPeriodo => "INVALID_PERIOD",

            // Authorization
            Self::MissingPermission { .. } => "MISSING_PERMISSIONS",
            Self::InactiveUser => "INACTIVE_USER",

            // Conflict
            Self::AlreadyExists(_) => "ALREADY_EXISTS",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::CacheError(_) => "CACHE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidCode { .. }
                | Self::InvalidEstatus(_)
                | Self::InvalidNivel(_)
                | Self::InvalidPeriodo
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::MissingPermission { .. } | Self::InactiveUser)
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::AlreadyExists(_))
    }
}
