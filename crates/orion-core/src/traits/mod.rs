//! Traits (ports) implemented by the infrastructure crates

mod repositories;
mod task_queue;

pub use repositories::{
    AdjuntoRepository, AggregateRepository, BitacoraRepository, EntityRepository,
    EntradaSalidaRepository, HistorialPuestoRepository, LifecycleRepository, ModuloRepository,
    PermisoRepository, PersonaRepository, RepoResult, RolRepository, TareaRepository,
    UniqueFieldRepository, UsuarioRepository, UsuarioRolRepository,
};
pub use task_queue::TaskQueue;
