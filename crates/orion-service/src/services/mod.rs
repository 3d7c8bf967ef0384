//! Business logic services
//!
//! This module contains all service layer implementations: the permission
//! guard, the audit builder, the lifecycle and uniqueness helpers, and the
//! use cases of every entity.

pub mod adjunto;
pub mod auditoria;
pub mod auth;
pub mod authorization;
pub mod bitacora;
pub mod catalog;
pub mod context;
pub mod current_user;
pub mod error;
pub mod historial;
pub mod lifecycle;
pub mod menu;
pub mod permission;
pub mod persona;
pub mod resource;
pub mod tarea;
pub mod unique;

#[cfg(test)]
pub(crate) mod testing;

// Re-export all services for convenience
pub use adjunto::{
    AdjuntoService, Archivo, FileService, FotografiaService, NombramientoService,
    PersonaAdjuntoService, PersonaFotografiaService, PersonaNombramientoService,
};
pub use auditoria::AuditoriaBuilder;
pub use auth::AuthService;
pub use authorization::{
    ModuloService, PermisoService, RolService, UsuarioRolService, UsuarioService,
};
pub use bitacora::{BitacoraService, EntradaSalidaService};
pub use catalog::{
    AreaService, AtribucionCtService, AtribucionService, BancoService, CarreraService,
    CentroTrabajoService, DistritoService, NivelAcademicoService, OrganoService,
    PuestoFuncionService, PuestoService, TurnoService,
};
pub use context::{ServiceContext, ServiceContextBuilder};
pub use current_user::CurrentUser;
pub use error::{ServiceError, ServiceResult};
pub use historial::{
    HistorialAcademicoService, HistorialPuestoService, IncapacidadService, LicenciaService,
};
pub use lifecycle::LifecycleService;
pub use menu::MenuService;
pub use permission::PermissionService;
pub use persona::{DomicilioService, PersonaDomicilioService, PersonaService};
pub use resource::{CrudService, Resource};
pub use tarea::TareaService;
pub use unique::ensure_unique;
