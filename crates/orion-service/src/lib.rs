//! # orion-service
//!
//! Application layer containing the permission guard, the audit builder,
//! the lifecycle and uniqueness rules, the use cases and the DTOs.

pub mod dto;
pub mod services;

pub use services::{
    Archivo, AuthService, BitacoraService, CrudService, CurrentUser, EntradaSalidaService,
    FileService, IncapacidadService, LicenciaService, MenuService, PersonaService, Resource,
    ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult, TareaService,
};
