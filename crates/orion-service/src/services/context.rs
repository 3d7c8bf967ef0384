//! Service context - dependency container for services
//!
//! Holds all repositories, the session store, the task queue, the object
//! storage and the secrets needed by services.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use orion_cache::RefreshTokenStore;
use orion_common::auth::JwtService;
use orion_common::storage::ObjectStorage;
use orion_core::entities::{
    Entity, HistorialPuesto, Modulo, Permiso, Persona, PersonaAdjunto, PersonaFotografia,
    PersonaNombramiento, Rol, Usuario, UsuarioRol,
};
use orion_core::traits::{
    AdjuntoRepository, BitacoraRepository, EntityRepository, EntradaSalidaRepository,
    HistorialPuestoRepository, LifecycleRepository, ModuloRepository, PermisoRepository,
    PersonaRepository, RolRepository, TareaRepository, TaskQueue, UniqueFieldRepository,
    UsuarioRepository, UsuarioRolRepository,
};
use orion_core::IdCodec;

use super::error::{ServiceError, ServiceResult};

/// Plain CRUD repositories keyed by the entity they store
#[derive(Clone, Default)]
struct EntityRepositories(HashMap<TypeId, Arc<dyn Any + Send + Sync>>);

impl EntityRepositories {
    fn insert<T>(&mut self, repo: Arc<dyn EntityRepository<T>>)
    where
        T: Entity + Send + Sync + 'static,
    {
        self.0.insert(TypeId::of::<T>(), Arc::new(repo));
    }

    fn get<T>(&self) -> Option<&dyn EntityRepository<T>>
    where
        T: Entity + Send + Sync + 'static,
    {
        self.0
            .get(&TypeId::of::<T>())?
            .downcast_ref::<Arc<dyn EntityRepository<T>>>()
            .map(|repo| repo.as_ref())
    }
}

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - The CRUD repository of every entity, plus the specialized ones
/// - The refresh-token store and the task queue
/// - JWT service and the id codec
/// - Object storage and its timeout
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    entities: EntityRepositories,
    lifecycle_repo: Arc<dyn LifecycleRepository>,
    unique_repo: Arc<dyn UniqueFieldRepository>,
    modulo_repo: Arc<dyn ModuloRepository>,
    rol_repo: Arc<dyn RolRepository>,
    usuario_repo: Arc<dyn UsuarioRepository>,
    permiso_repo: Arc<dyn PermisoRepository>,
    usuario_rol_repo: Arc<dyn UsuarioRolRepository>,
    persona_repo: Arc<dyn PersonaRepository>,
    historial_puesto_repo: Arc<dyn HistorialPuestoRepository>,
    persona_adjunto_repo: Arc<dyn AdjuntoRepository<PersonaAdjunto>>,
    persona_fotografia_repo: Arc<dyn AdjuntoRepository<PersonaFotografia>>,
    persona_nombramiento_repo: Arc<dyn AdjuntoRepository<PersonaNombramiento>>,
    bitacora_repo: Arc<dyn BitacoraRepository>,
    entrada_salida_repo: Arc<dyn EntradaSalidaRepository>,
    tarea_repo: Arc<dyn TareaRepository>,

    // Redis
    refresh_token_store: RefreshTokenStore,
    task_queue: Arc<dyn TaskQueue>,

    // Storage
    storage: Arc<dyn ObjectStorage>,
    storage_timeout: Duration,

    // Security
    jwt_service: Arc<JwtService>,
    salt: String,
    id_codec: IdCodec,
    api_key_days: i64,
}

impl ServiceContext {
    // === Repositories ===

    /// Get the CRUD repository of an entity
    pub fn entity_repo<T>(&self) -> ServiceResult<&dyn EntityRepository<T>>
    where
        T: Entity + Send + Sync + 'static,
    {
        self.entities.get::<T>().ok_or_else(|| {
            ServiceError::internal(format!(
                "no repository registered for {}",
                T::TABLA.nombre()
            ))
        })
    }

    /// Get the status flip repository
    pub fn lifecycle_repo(&self) -> &dyn LifecycleRepository {
        self.lifecycle_repo.as_ref()
    }

    /// Get the natural key lookup
    pub fn unique_repo(&self) -> &dyn UniqueFieldRepository {
        self.unique_repo.as_ref()
    }

    pub fn modulo_repo(&self) -> &dyn ModuloRepository {
        self.modulo_repo.as_ref()
    }

    pub fn rol_repo(&self) -> &dyn RolRepository {
        self.rol_repo.as_ref()
    }

    pub fn usuario_repo(&self) -> &dyn UsuarioRepository {
        self.usuario_repo.as_ref()
    }

    pub fn permiso_repo(&self) -> &dyn PermisoRepository {
        self.permiso_repo.as_ref()
    }

    pub fn usuario_rol_repo(&self) -> &dyn UsuarioRolRepository {
        self.usuario_rol_repo.as_ref()
    }

    pub fn persona_repo(&self) -> &dyn PersonaRepository {
        self.persona_repo.as_ref()
    }

    pub fn historial_puesto_repo(&self) -> &dyn HistorialPuestoRepository {
        self.historial_puesto_repo.as_ref()
    }

    pub fn persona_adjunto_repo(&self) -> &dyn AdjuntoRepository<PersonaAdjunto> {
        self.persona_adjunto_repo.as_ref()
    }

    pub fn persona_fotografia_repo(&self) -> &dyn AdjuntoRepository<PersonaFotografia> {
        self.persona_fotografia_repo.as_ref()
    }

    pub fn persona_nombramiento_repo(&self) -> &dyn AdjuntoRepository<PersonaNombramiento> {
        self.persona_nombramiento_repo.as_ref()
    }

    /// Get the audit log reader
    pub fn bitacora_repo(&self) -> &dyn BitacoraRepository {
        self.bitacora_repo.as_ref()
    }

    pub fn entrada_salida_repo(&self) -> &dyn EntradaSalidaRepository {
        self.entrada_salida_repo.as_ref()
    }

    pub fn tarea_repo(&self) -> &dyn TareaRepository {
        self.tarea_repo.as_ref()
    }

    // === Redis ===

    /// Get the refresh token store
    pub fn refresh_token_store(&self) -> &RefreshTokenStore {
        &self.refresh_token_store
    }

    /// Get the background job queue
    pub fn task_queue(&self) -> &dyn TaskQueue {
        self.task_queue.as_ref()
    }

    // === Storage ===

    pub fn storage(&self) -> &dyn ObjectStorage {
        self.storage.as_ref()
    }

    /// Upper bound for a single upload
    pub fn storage_timeout(&self) -> Duration {
        self.storage_timeout
    }

    // === Security ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Secret salt behind ids and API keys
    pub fn salt(&self) -> &str {
        &self.salt
    }

    /// Codec for ids exposed in file names and keys
    pub fn id_codec(&self) -> &IdCodec {
        &self.id_codec
    }

    /// Lifetime of a generated API key
    pub fn api_key_days(&self) -> i64 {
        self.api_key_days
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("entities", &self.entities.0.len())
            .field("repositories", &"...")
            .field("storage_timeout", &self.storage_timeout)
            .field("api_key_days", &self.api_key_days)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
///
/// The specialized repositories are also registered as the CRUD repository
/// of their entity.
#[derive(Default)]
pub struct ServiceContextBuilder {
    entities: EntityRepositories,
    lifecycle_repo: Option<Arc<dyn LifecycleRepository>>,
    unique_repo: Option<Arc<dyn UniqueFieldRepository>>,
    modulo_repo: Option<Arc<dyn ModuloRepository>>,
    rol_repo: Option<Arc<dyn RolRepository>>,
    usuario_repo: Option<Arc<dyn UsuarioRepository>>,
    permiso_repo: Option<Arc<dyn PermisoRepository>>,
    usuario_rol_repo: Option<Arc<dyn UsuarioRolRepository>>,
    persona_repo: Option<Arc<dyn PersonaRepository>>,
    historial_puesto_repo: Option<Arc<dyn HistorialPuestoRepository>>,
    persona_adjunto_repo: Option<Arc<dyn AdjuntoRepository<PersonaAdjunto>>>,
    persona_fotografia_repo: Option<Arc<dyn AdjuntoRepository<PersonaFotografia>>>,
    persona_nombramiento_repo: Option<Arc<dyn AdjuntoRepository<PersonaNombramiento>>>,
    bitacora_repo: Option<Arc<dyn BitacoraRepository>>,
    entrada_salida_repo: Option<Arc<dyn EntradaSalidaRepository>>,
    tarea_repo: Option<Arc<dyn TareaRepository>>,
    refresh_token_store: Option<RefreshTokenStore>,
    task_queue: Option<Arc<dyn TaskQueue>>,
    storage: Option<Arc<dyn ObjectStorage>>,
    storage_timeout: Option<Duration>,
    jwt_service: Option<Arc<JwtService>>,
    salt: Option<String>,
    api_key_days: Option<i64>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the CRUD repository of a plain entity
    pub fn entity_repo<T, R>(mut self, repo: Arc<R>) -> Self
    where
        T: Entity + Send + Sync + 'static,
        R: EntityRepository<T> + 'static,
    {
        self.entities.insert::<T>(repo);
        self
    }

    pub fn lifecycle_repo(mut self, repo: Arc<dyn LifecycleRepository>) -> Self {
        self.lifecycle_repo = Some(repo);
        self
    }

    pub fn unique_repo(mut self, repo: Arc<dyn UniqueFieldRepository>) -> Self {
        self.unique_repo = Some(repo);
        self
    }

    pub fn modulo_repo<R: ModuloRepository + 'static>(mut self, repo: Arc<R>) -> Self {
        self.entities.insert::<Modulo>(repo.clone());
        self.modulo_repo = Some(repo);
        self
    }

    pub fn rol_repo<R: RolRepository + 'static>(mut self, repo: Arc<R>) -> Self {
        self.entities.insert::<Rol>(repo.clone());
        self.rol_repo = Some(repo);
        self
    }

    pub fn usuario_repo<R: UsuarioRepository + 'static>(mut self, repo: Arc<R>) -> Self {
        self.entities.insert::<Usuario>(repo.clone());
        self.usuario_repo = Some(repo);
        self
    }

    pub fn permiso_repo<R: PermisoRepository + 'static>(mut self, repo: Arc<R>) -> Self {
        self.entities.insert::<Permiso>(repo.clone());
        self.permiso_repo = Some(repo);
        self
    }

    pub fn usuario_rol_repo<R: UsuarioRolRepository + 'static>(mut self, repo: Arc<R>) -> Self {
        self.entities.insert::<UsuarioRol>(repo.clone());
        self.usuario_rol_repo = Some(repo);
        self
    }

    pub fn persona_repo<R: PersonaRepository + 'static>(mut self, repo: Arc<R>) -> Self {
        self.entities.insert::<Persona>(repo.clone());
        self.persona_repo = Some(repo);
        self
    }

    pub fn historial_puesto_repo<R: HistorialPuestoRepository + 'static>(
        mut self,
        repo: Arc<R>,
    ) -> Self {
        self.entities.insert::<HistorialPuesto>(repo.clone());
        self.historial_puesto_repo = Some(repo);
        self
    }

    pub fn persona_adjunto_repo<R>(mut self, repo: Arc<R>) -> Self
    where
        R: AdjuntoRepository<PersonaAdjunto> + 'static,
    {
        self.entities.insert::<PersonaAdjunto>(repo.clone());
        self.persona_adjunto_repo = Some(repo);
        self
    }

    pub fn persona_fotografia_repo<R>(mut self, repo: Arc<R>) -> Self
    where
        R: AdjuntoRepository<PersonaFotografia> + 'static,
    {
        self.entities.insert::<PersonaFotografia>(repo.clone());
        self.persona_fotografia_repo = Some(repo);
        self
    }

    pub fn persona_nombramiento_repo<R>(mut self, repo: Arc<R>) -> Self
    where
        R: AdjuntoRepository<PersonaNombramiento> + 'static,
    {
        self.entities.insert::<PersonaNombramiento>(repo.clone());
        self.persona_nombramiento_repo = Some(repo);
        self
    }

    pub fn bitacora_repo(mut self, repo: Arc<dyn BitacoraRepository>) -> Self {
        self.bitacora_repo = Some(repo);
        self
    }

    pub fn entrada_salida_repo(mut self, repo: Arc<dyn EntradaSalidaRepository>) -> Self {
        self.entrada_salida_repo = Some(repo);
        self
    }

    pub fn tarea_repo(mut self, repo: Arc<dyn TareaRepository>) -> Self {
        self.tarea_repo = Some(repo);
        self
    }

    pub fn refresh_token_store(mut self, store: RefreshTokenStore) -> Self {
        self.refresh_token_store = Some(store);
        self
    }

    pub fn task_queue(mut self, queue: Arc<dyn TaskQueue>) -> Self {
        self.task_queue = Some(queue);
        self
    }

    pub fn storage(mut self, storage: Arc<dyn ObjectStorage>, timeout: Duration) -> Self {
        self.storage = Some(storage);
        self.storage_timeout = Some(timeout);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    /// Salt of the id codec and lifetime of generated API keys
    pub fn security(mut self, salt: impl Into<String>, api_key_days: i64) -> Self {
        self.salt = Some(salt.into());
        self.api_key_days = Some(api_key_days);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        let salt = required(self.salt, "salt")?;
        Ok(ServiceContext {
            entities: self.entities,
            lifecycle_repo: required(self.lifecycle_repo, "lifecycle_repo")?,
            unique_repo: required(self.unique_repo, "unique_repo")?,
            modulo_repo: required(self.modulo_repo, "modulo_repo")?,
            rol_repo: required(self.rol_repo, "rol_repo")?,
            usuario_repo: required(self.usuario_repo, "usuario_repo")?,
            permiso_repo: required(self.permiso_repo, "permiso_repo")?,
            usuario_rol_repo: required(self.usuario_rol_repo, "usuario_rol_repo")?,
            persona_repo: required(self.persona_repo, "persona_repo")?,
            historial_puesto_repo: required(self.historial_puesto_repo, "historial_puesto_repo")?,
            persona_adjunto_repo: required(self.persona_adjunto_repo, "persona_adjunto_repo")?,
            persona_fotografia_repo: required(
                self.persona_fotografia_repo,
                "persona_fotografia_repo",
            )?,
            persona_nombramiento_repo: required(
                self.persona_nombramiento_repo,
                "persona_nombramiento_repo",
            )?,
            bitacora_repo: required(self.bitacora_repo, "bitacora_repo")?,
            entrada_salida_repo: required(self.entrada_salida_repo, "entrada_salida_repo")?,
            tarea_repo: required(self.tarea_repo, "tarea_repo")?,
            refresh_token_store: required(self.refresh_token_store, "refresh_token_store")?,
            task_queue: required(self.task_queue, "task_queue")?,
            storage: required(self.storage, "storage")?,
            storage_timeout: required(self.storage_timeout, "storage_timeout")?,
            jwt_service: required(self.jwt_service, "jwt_service")?,
            id_codec: IdCodec::new(&salt),
            salt,
            api_key_days: required(self.api_key_days, "api_key_days")?,
        })
    }
}

fn required<T>(value: Option<T>, name: &str) -> ServiceResult<T> {
    value.ok_or_else(|| ServiceError::validation(format!("{name} is required")))
}
