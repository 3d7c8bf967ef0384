//! Database models - SQLx-compatible structs for PostgreSQL tables
//!
//! Coded columns (estatus, tipos, situaciones) are read as plain strings
//! and parsed by the mappers.

mod ausencia;
mod bitacora;
mod catalogo;
mod centro_trabajo;
mod domicilio;
mod historial;
mod modulo;
mod permiso;
mod persona;
mod persona_archivo;
mod puesto;
mod rol;
mod tarea;
mod usuario;

pub use ausencia::{IncapacidadModel, LicenciaModel};
pub use bitacora::{BitacoraModel, EntradaSalidaModel};
pub use catalogo::{
    BancoModel, CarreraModel, DistritoModel, NivelAcademicoModel, OrganoModel, TurnoModel,
};
pub use centro_trabajo::{AreaModel, AtribucionCtModel, CentroTrabajoModel};
pub use domicilio::{DomicilioModel, PersonaDomicilioModel};
pub use historial::{HistorialAcademicoModel, HistorialPuestoModel};
pub use modulo::ModuloModel;
pub use permiso::PermisoModel;
pub use persona::PersonaModel;
pub use persona_archivo::{PersonaAdjuntoModel, PersonaFotografiaModel, PersonaNombramientoModel};
pub use puesto::{AtribucionModel, PuestoFuncionModel, PuestoModel};
pub use rol::{RolModel, UsuarioRolModel};
pub use tarea::TareaModel;
pub use usuario::{ConcesionModel, UsuarioModel};
