//! Repository traits (ports) - define the interface for data access
//!
//! Every mutating call takes the [`Auditoria`] describing it; the
//! implementation writes the Bitácora row in the same transaction, so a
//! mutation is never committed without its audit entry.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::entities::{
    Bitacora, EntradaSalida, Entity, HistorialPuesto, Modulo, Permiso, Persona, Rol, Tarea,
    Usuario, UsuarioRol,
};
use crate::error::DomainError;
use crate::value_objects::{Auditoria, CampoUnico, Concesion, Estatus, Listado, Pagina, Tabla};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Generic Entity Repository
// ============================================================================

#[async_trait]
pub trait EntityRepository<T>: Send + Sync
where
    T: Entity + Send + Sync + 'static,
{
    /// Find by id, whatever its status
    async fn find_by_id(&self, id: T::Id) -> RepoResult<Option<T>>;

    /// List rows matching the filter, newest first
    async fn list(&self, listado: &Listado) -> RepoResult<Pagina<T>>;

    /// Insert a new row and its audit entry
    async fn create(&self, entity: &T, auditoria: &Auditoria) -> RepoResult<T>;

    /// Update an existing row and write its audit entry
    ///
    /// Fails with `NotFound` when the row does not exist.
    async fn update(&self, entity: &T, auditoria: &Auditoria) -> RepoResult<T>;
}

// ============================================================================
// Lifecycle Repository
// ============================================================================

#[async_trait]
pub trait LifecycleRepository: Send + Sync {
    /// Flip the status of one row and write its audit entry
    ///
    /// Returns `false` without writing anything when the row already has
    /// the requested status. Clears any cascade marker on the row.
    async fn set_estatus(
        &self,
        tabla: Tabla,
        id: i32,
        estatus: Estatus,
        auditoria: &Auditoria,
    ) -> RepoResult<bool>;
}

/// Repository of an aggregate root whose delete and recover cascade
#[async_trait]
pub trait AggregateRepository<T>: EntityRepository<T>
where
    T: Entity + Send + Sync + 'static,
{
    /// Delete the root and its active children in one locked transaction
    ///
    /// Returns `None` when the root was already deleted.
    async fn cascade_delete(&self, id: T::Id, auditoria: &Auditoria) -> RepoResult<Option<T>>;

    /// Recover the root and only the children its delete flipped
    ///
    /// Returns `None` when the root was already active.
    async fn cascade_recover(&self, id: T::Id, auditoria: &Auditoria) -> RepoResult<Option<T>>;
}

// ============================================================================
// Authorization Repositories
// ============================================================================

/// Cascades to permisos
pub trait ModuloRepository: AggregateRepository<Modulo> {}

/// Cascades to permisos and usuarios_roles
pub trait RolRepository: AggregateRepository<Rol> {}

/// Cascades to usuarios_roles
#[async_trait]
pub trait UsuarioRepository: AggregateRepository<Usuario> {
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Usuario>>;

    async fn find_by_api_key(&self, api_key: &str) -> RepoResult<Option<Usuario>>;

    /// Every role → permission → module chain of the user, with the status of each hop
    async fn concesiones(&self, usuario_id: i32) -> RepoResult<Vec<Concesion>>;

    /// Names of the roles assigned through active links
    async fn roles_activos(&self, usuario_id: i32) -> RepoResult<Vec<String>>;

    async fn password_hash(&self, usuario_id: i32) -> RepoResult<Option<String>>;

    async fn set_password(
        &self,
        usuario_id: i32,
        password_hash: &str,
        auditoria: &Auditoria,
    ) -> RepoResult<()>;

    async fn set_api_key(
        &self,
        usuario_id: i32,
        api_key: &str,
        expiracion: DateTime<Utc>,
        auditoria: &Auditoria,
    ) -> RepoResult<()>;
}

#[async_trait]
pub trait PermisoRepository: EntityRepository<Permiso> {
    /// Permission of a role over a module, whatever its status
    async fn find_pair(&self, rol_id: i32, modulo_id: i32) -> RepoResult<Option<Permiso>>;
}

#[async_trait]
pub trait UsuarioRolRepository: EntityRepository<UsuarioRol> {
    /// Assignment of a role to a user, whatever its status
    async fn find_pair(&self, usuario_id: i32, rol_id: i32) -> RepoResult<Option<UsuarioRol>>;
}

// ============================================================================
// Uniqueness
// ============================================================================

#[async_trait]
pub trait UniqueFieldRepository: Send + Sync {
    /// Id of the row holding the value, searching rows of any status
    async fn find_holder(&self, campo: CampoUnico, valor: &str) -> RepoResult<Option<i32>>;
}

// ============================================================================
// Persona Repositories
// ============================================================================

#[async_trait]
pub trait PersonaRepository: EntityRepository<Persona> {
    /// Filter by name fragment and CURP prefix
    async fn search(
        &self,
        nombre: Option<&str>,
        curp: Option<&str>,
        listado: &Listado,
    ) -> RepoResult<Pagina<Persona>>;
}

#[async_trait]
pub trait HistorialPuestoRepository: EntityRepository<HistorialPuesto> {
    /// Function name of the newest active record starting on or before `fecha`
    async fn puesto_vigente(&self, persona_id: i32, fecha: NaiveDate)
        -> RepoResult<Option<String>>;
}

/// Rows backed by an uploaded file
#[async_trait]
pub trait AdjuntoRepository<T>: EntityRepository<T>
where
    T: Entity<Id = i32> + Send + Sync + 'static,
{
    /// Insert the new row and delete the previous one in one transaction
    ///
    /// No audit entry is written; it follows once the file is stored.
    async fn create_replacing(&self, nuevo: &T, anterior_id: Option<i32>) -> RepoResult<T>;

    /// Record the stored file on the row and write the audit entry
    async fn stamp_file(
        &self,
        id: i32,
        archivo: &str,
        url: &str,
        auditoria: &Auditoria,
    ) -> RepoResult<T>;

    /// Remove the new row and recover the previous one
    async fn rollback_replacement(&self, nuevo_id: i32, anterior_id: Option<i32>)
        -> RepoResult<()>;
}

// ============================================================================
// Log Repositories
// ============================================================================

/// Read side of the audit log; writes only happen inside mutations
#[async_trait]
pub trait BitacoraRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> RepoResult<Option<Bitacora>>;

    async fn list(
        &self,
        modulo: Option<&str>,
        usuario_id: Option<i32>,
        listado: &Listado,
    ) -> RepoResult<Pagina<Bitacora>>;
}

#[async_trait]
pub trait EntradaSalidaRepository: Send + Sync {
    async fn record(&self, entrada_salida: &EntradaSalida) -> RepoResult<EntradaSalida>;

    async fn list(
        &self,
        usuario_id: Option<i32>,
        listado: &Listado,
    ) -> RepoResult<Pagina<EntradaSalida>>;
}

// ============================================================================
// Tarea Repository
// ============================================================================

#[async_trait]
pub trait TareaRepository: Send + Sync {
    async fn create(&self, tarea: &Tarea) -> RepoResult<Tarea>;

    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Tarea>>;

    /// Unfinished tasks of a user
    async fn in_progress(&self, usuario_id: i32) -> RepoResult<Vec<Tarea>>;

    /// Apply a progress report; `ha_terminado` follows `progreso >= 100`
    ///
    /// Returns `true` when something changed.
    async fn update_progress(
        &self,
        id: Uuid,
        progreso: i32,
        mensaje: Option<&str>,
        archivo: Option<&str>,
        url: Option<&str>,
    ) -> RepoResult<bool>;
}
