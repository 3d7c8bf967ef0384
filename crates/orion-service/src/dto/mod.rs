//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

// Re-export commonly used request types
pub use requests::{
    AreaRequest, AtribucionCtRequest, AtribucionRequest, BancoRequest, BitacoraQuery,
    CarreraRequest, CentroTrabajoRequest, DistritoRequest, DomicilioRequest, FileRequest,
    HistorialAcademicoRequest, HistorialPuestoRequest, IncapacidadRequest, LicenciaRequest,
    ListQuery, LoginRequest, LogoutRequest, ModuloRequest, NivelAcademicoRequest,
    OrganoRequest, PasswordRequest, PermisoRequest, PersonaAdjuntoRequest,
    PersonaDomicilioRequest, PersonaFotografiaRequest, PersonaNombramientoRequest,
    PersonaRequest, PersonaSearchQuery, PuestoFuncionRequest, PuestoRequest,
    RefreshTokenRequest, RolRequest, TaskErrorRequest, TaskProgressRequest, TaskRequest,
    TurnoRequest, UsuarioRequest, UsuarioRolRequest,
};

// Re-export commonly used response types
pub use responses::{
    ApiKeyResponse, ApiResponse, AuthResponse, CurrentUserResponse, HealthResponse,
    IncapacidadResponse, LicenciaResponse, MeResponse, PaginaResponse, PaginationMeta,
    ProgressResponse, ReadinessResponse,
};

pub use mappers::permisos_por_modulo;
