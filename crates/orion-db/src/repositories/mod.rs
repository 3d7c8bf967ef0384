//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in orion-core.
//! Plain CRUD goes through [`PgEntityRepository`]; the traits with extra
//! queries are implemented on its concrete instantiations.

mod adjunto;
mod aggregate;
mod auditoria;
mod bitacora;
mod entity;
mod error;
mod lifecycle;
mod permiso;
mod persona;
mod tarea;
mod unique;
mod usuario;

use crate::models::{
    AreaModel, AtribucionCtModel, AtribucionModel, BancoModel, CarreraModel, CentroTrabajoModel,
    DistritoModel, DomicilioModel, HistorialAcademicoModel, IncapacidadModel, LicenciaModel,
    ModuloModel, NivelAcademicoModel, OrganoModel, PersonaDomicilioModel, PuestoFuncionModel,
    PuestoModel, RolModel, TurnoModel,
};

pub use adjunto::{
    ArchivoRecord, PgPersonaAdjuntoRepository, PgPersonaFotografiaRepository,
    PgPersonaNombramientoRepository,
};
pub use aggregate::CascadeRecord;
pub use bitacora::{PgBitacoraRepository, PgEntradaSalidaRepository};
pub use entity::PgEntityRepository;
pub use lifecycle::PgLifecycleRepository;
pub use permiso::{PgPermisoRepository, PgUsuarioRolRepository};
pub use persona::{PgHistorialPuestoRepository, PgPersonaRepository};
pub use tarea::PgTareaRepository;
pub use unique::PgUniqueFieldRepository;
pub use usuario::PgUsuarioRepository;

pub type PgModuloRepository = PgEntityRepository<ModuloModel>;
pub type PgRolRepository = PgEntityRepository<RolModel>;

pub type PgDistritoRepository = PgEntityRepository<DistritoModel>;
pub type PgOrganoRepository = PgEntityRepository<OrganoModel>;
pub type PgCentroTrabajoRepository = PgEntityRepository<CentroTrabajoModel>;
pub type PgAreaRepository = PgEntityRepository<AreaModel>;
pub type PgAtribucionCtRepository = PgEntityRepository<AtribucionCtModel>;
pub type PgPuestoRepository = PgEntityRepository<PuestoModel>;
pub type PgPuestoFuncionRepository = PgEntityRepository<PuestoFuncionModel>;
pub type PgAtribucionRepository = PgEntityRepository<AtribucionModel>;
pub type PgNivelAcademicoRepository = PgEntityRepository<NivelAcademicoModel>;
pub type PgBancoRepository = PgEntityRepository<BancoModel>;
pub type PgCarreraRepository = PgEntityRepository<CarreraModel>;
pub type PgTurnoRepository = PgEntityRepository<TurnoModel>;

pub type PgDomicilioRepository = PgEntityRepository<DomicilioModel>;
pub type PgPersonaDomicilioRepository = PgEntityRepository<PersonaDomicilioModel>;
pub type PgHistorialAcademicoRepository = PgEntityRepository<HistorialAcademicoModel>;
pub type PgLicenciaRepository = PgEntityRepository<LicenciaModel>;
pub type PgIncapacidadRepository = PgEntityRepository<IncapacidadModel>;
