//! # orion-core
//!
//! Domain layer containing entities, value objects and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Area, Atribucion, AtribucionCt, Banco, Bitacora, Carrera, CentroTrabajo, Distrito, Domicilio,
    EntradaSalida, Entity, EstadoCivil, HistorialAcademico, HistorialPuesto, Incapacidad,
    Licencia, Modulo, NivelAcademico, NivelEstudios, Organo, Permiso, Persona, PersonaAdjunto,
    PersonaDomicilio, PersonaFotografia, PersonaNombramiento, Puesto, PuestoFuncion, Region, Rol,
    Sexo, Situacion, Tarea, TipoAdjunto, TipoCargo, TipoEmpleado, TipoEntradaSalida,
    TipoLicencia, Turno, Usuario, UsuarioRol,
};
pub use error::DomainError;
pub use traits::{
    AdjuntoRepository, AggregateRepository, BitacoraRepository, EntityRepository,
    EntradaSalidaRepository, HistorialPuestoRepository, LifecycleRepository, ModuloRepository,
    PermisoRepository, PersonaRepository, RepoResult, RolRepository, TareaRepository, TaskQueue,
    UniqueFieldRepository, UsuarioRepository, UsuarioRolRepository,
};
pub use value_objects::{
    menu_principal, Auditoria, CampoUnico, Concesion, Estatus, IdCodec, Listado, MenuItem, Nivel,
    Pagina, Periodo, PermissionMap, Tabla,
};
