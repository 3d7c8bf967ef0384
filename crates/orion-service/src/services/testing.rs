//! In-memory doubles of every port, shared by the service tests

use std::any::Any;
use std::sync::atomic::{AtomicBool, AtomicI32, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use dashmap::DashMap;
use orion_cache::{RedisPool, RedisPoolConfig, RefreshTokenStore};
use orion_common::auth::{hash_password, JwtService};
use orion_common::storage::{MemoryStorage, ObjectStorage, StorageError};
use orion_core::entities::*;
use orion_core::traits::*;
use orion_core::{
    Auditoria, CampoUnico, Concesion, DomainError, Estatus, Listado, Nivel, Pagina, Tabla,
};
use serde::Serialize;
use uuid::Uuid;

use super::context::{ServiceContext, ServiceContextBuilder};
use super::current_user::CurrentUser;

// ============================================================================
// Rows
// ============================================================================

/// Entity kept in a [`Store`] table
pub(crate) trait Fila: Entity<Id = i32> + Clone + Serialize + Send + Sync + 'static {
    fn set_id(&mut self, id: i32);
}

/// Row backed by an uploaded file
pub(crate) trait ConArchivo: Fila {
    fn stamp(&mut self, archivo: &str, url: &str);
}

macro_rules! filas {
    ($($tipo:ty),+ $(,)?) => {
        $(impl Fila for $tipo {
            fn set_id(&mut self, id: i32) {
                self.id = id;
            }
        })+
    };
}

filas!(
    Modulo, Rol, Permiso, Usuario, UsuarioRol, Distrito, Organo, CentroTrabajo, Area, Puesto,
    PuestoFuncion, NivelAcademico, Banco, Carrera, Turno, Atribucion, AtribucionCt, Persona,
    Domicilio, PersonaDomicilio, HistorialPuesto, HistorialAcademico, Licencia, Incapacidad,
    PersonaAdjunto, PersonaFotografia, PersonaNombramiento,
);

macro_rules! con_archivo {
    ($($tipo:ty),+) => {
        $(impl ConArchivo for $tipo {
            fn stamp(&mut self, archivo: &str, url: &str) {
                self.archivo = Some(archivo.to_string());
                self.url = Some(url.to_string());
            }
        })+
    };
}

con_archivo!(PersonaAdjunto, PersonaFotografia, PersonaNombramiento);

/// Type-erased view of one table
trait Filas: Send + Sync {
    /// `None` when the row is missing, `Some(false)` when nothing changed
    fn set_estatus(&self, id: i32, estatus: Estatus) -> Option<bool>;

    /// Value of a column on every row, as text
    fn columna(&self, columna: &str) -> Vec<(i32, String)>;

    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync>;
}

struct Rows<T>(DashMap<i32, T>);

impl<T: Fila> Filas for Rows<T> {
    fn set_estatus(&self, id: i32, estatus: Estatus) -> Option<bool> {
        let mut row = self.0.get_mut(&id)?;
        if row.estatus() == estatus {
            return Some(false);
        }
        row.set_estatus(estatus);
        Some(true)
    }

    fn columna(&self, columna: &str) -> Vec<(i32, String)> {
        self.0
            .iter()
            .filter_map(|row| {
                let valor = serde_json::to_value(row.value()).ok()?;
                let texto = match valor.get(columna)? {
                    serde_json::Value::String(s) => s.clone(),
                    serde_json::Value::Number(n) => n.to_string(),
                    _ => return None,
                };
                Some((*row.key(), texto))
            })
            .collect()
    }

    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync> {
        self
    }
}

// ============================================================================
// Store
// ============================================================================

#[derive(Default)]
pub(crate) struct Store {
    tablas: DashMap<Tabla, Arc<dyn Filas>>,
    secuencia: AtomicI32,
    bitacoras: Mutex<Vec<(Auditoria, Bitacora)>>,
    cascadas: Mutex<Vec<(Tabla, i32, Estatus)>>,
    grants: DashMap<i32, Vec<Concesion>>,
    concesion_reads: AtomicUsize,
    passwords: DashMap<i32, String>,
    entradas_salidas: Mutex<Vec<EntradaSalida>>,
    tareas: DashMap<Uuid, Tarea>,
    progresos: DashMap<Uuid, i32>,
    encolados: Mutex<Vec<(Uuid, String)>>,
    stamp_falla: AtomicBool,
    rollback_falla: AtomicBool,
}

impl Store {
    fn rows<T: Fila>(&self) -> Arc<Rows<T>> {
        let filas = self
            .tablas
            .entry(T::TABLA)
            .or_insert_with(|| Arc::new(Rows::<T>(DashMap::new())) as Arc<dyn Filas>)
            .clone();
        filas
            .into_any()
            .downcast::<Rows<T>>()
            .expect("one row type per table")
    }

    fn next_id(&self) -> i32 {
        self.secuencia.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Insert with a fresh id when the row has none, otherwise upsert
    fn insert<T: Fila>(&self, mut row: T) -> T {
        if row.id() == 0 {
            row.set_id(self.next_id());
        }
        self.rows::<T>().0.insert(row.id(), row.clone());
        row
    }

    fn get<T: Fila>(&self, id: i32) -> Option<T> {
        self.rows::<T>().0.get(&id).map(|row| row.clone())
    }

    /// Every row, newest first
    fn all<T: Fila>(&self) -> Vec<T> {
        let mut rows: Vec<T> = self.rows::<T>().0.iter().map(|r| r.value().clone()).collect();
        rows.sort_by_key(|row| std::cmp::Reverse(row.id()));
        rows
    }

    fn audit(&self, auditoria: &Auditoria, id: impl std::fmt::Display) {
        let now = Utc::now();
        let mut bitacoras = self.bitacoras.lock().unwrap();
        let bitacora = Bitacora {
            id: bitacoras.len() as i32 + 1,
            modulo_id: 0,
            usuario_id: auditoria.usuario_id,
            descripcion: auditoria.descripcion.clone(),
            url: auditoria.url(id),
            creado: now,
            modificado: now,
            estatus: Estatus::Activo,
        };
        bitacoras.push((auditoria.clone(), bitacora));
    }

    fn concesiones(&self, usuario_id: i32) -> Vec<Concesion> {
        let mut concesiones = self
            .grants
            .get(&usuario_id)
            .map(|g| g.clone())
            .unwrap_or_default();

        for asignacion in self.all::<UsuarioRol>() {
            if asignacion.usuario_id != usuario_id {
                continue;
            }
            let Some(rol) = self.get::<Rol>(asignacion.rol_id) else {
                continue;
            };
            for permiso in self.all::<Permiso>().into_iter().filter(|p| p.rol_id == rol.id) {
                let Some(modulo) = self.get::<Modulo>(permiso.modulo_id) else {
                    continue;
                };
                concesiones.push(Concesion {
                    usuario_rol_estatus: asignacion.estatus,
                    rol_estatus: rol.estatus,
                    permiso_estatus: permiso.estatus,
                    modulo_estatus: modulo.estatus,
                    nivel: permiso.nivel,
                    modulo: modulo.nombre,
                    nombre_corto: modulo.nombre_corto,
                    icono: modulo.icono,
                    ruta: modulo.ruta,
                    en_navegacion: modulo.en_navegacion,
                    en_plataforma: modulo.en_plataforma,
                });
            }
        }
        concesiones
    }
}

fn paginar<T>(rows: Vec<T>, listado: &Listado) -> Pagina<T> {
    let total = rows.len() as i64;
    let items = rows
        .into_iter()
        .skip(listado.offset as usize)
        .take(listado.limit as usize)
        .collect();
    Pagina::new(items, total)
}

fn filtrar<T: Fila>(rows: Vec<T>, listado: &Listado) -> Vec<T> {
    rows.into_iter()
        .filter(|row| row.estatus() == listado.estatus)
        .filter(|row| match listado.padre_id {
            Some(padre_id) => serde_json::to_value(row)
                .ok()
                .and_then(|v| v.get("persona_id").and_then(|p| p.as_i64()))
                == Some(i64::from(padre_id)),
            None => true,
        })
        .collect()
}

// ============================================================================
// Repositories
// ============================================================================

/// Every repository port over one [`Store`]
#[derive(Clone)]
pub(crate) struct Memoria(Arc<Store>);

#[async_trait]
impl<T: Fila> EntityRepository<T> for Memoria {
    async fn find_by_id(&self, id: T::Id) -> RepoResult<Option<T>> {
        Ok(self.0.get(id))
    }

    async fn list(&self, listado: &Listado) -> RepoResult<Pagina<T>> {
        Ok(paginar(filtrar(self.0.all(), listado), listado))
    }

    async fn create(&self, entity: &T, auditoria: &Auditoria) -> RepoResult<T> {
        let mut nuevo = entity.clone();
        nuevo.set_id(0);
        let creado = self.0.insert(nuevo);
        self.0.audit(auditoria, creado.id());
        Ok(creado)
    }

    async fn update(&self, entity: &T, auditoria: &Auditoria) -> RepoResult<T> {
        if self.0.get::<T>(entity.id()).is_none() {
            return Err(DomainError::not_found(T::TABLA.entidad(), entity.id()));
        }
        let actualizado = self.0.insert(entity.clone());
        self.0.audit(auditoria, actualizado.id());
        Ok(actualizado)
    }
}

#[async_trait]
impl<T: Fila> AggregateRepository<T> for Memoria {
    async fn cascade_delete(&self, id: T::Id, auditoria: &Auditoria) -> RepoResult<Option<T>> {
        self.cascade(id, Estatus::Baja, auditoria)
    }

    async fn cascade_recover(&self, id: T::Id, auditoria: &Auditoria) -> RepoResult<Option<T>> {
        self.cascade(id, Estatus::Activo, auditoria)
    }
}

impl Memoria {
    fn cascade<T: Fila>(&self, id: i32, estatus: Estatus, auditoria: &Auditoria) -> RepoResult<Option<T>> {
        match self.0.rows::<T>().set_estatus(id, estatus) {
            None => Err(DomainError::not_found(T::TABLA.entidad(), id)),
            Some(false) => Ok(None),
            Some(true) => {
                self.0.audit(auditoria, id);
                self.0.cascadas.lock().unwrap().push((T::TABLA, id, estatus));
                Ok(self.0.get(id))
            }
        }
    }
}

impl ModuloRepository for Memoria {}

impl RolRepository for Memoria {}

#[async_trait]
impl UsuarioRepository for Memoria {
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Usuario>> {
        Ok(self.0.all::<Usuario>().into_iter().find(|u| u.email == email))
    }

    async fn find_by_api_key(&self, api_key: &str) -> RepoResult<Option<Usuario>> {
        Ok(self
            .0
            .all::<Usuario>()
            .into_iter()
            .find(|u| u.api_key.as_deref() == Some(api_key)))
    }

    async fn concesiones(&self, usuario_id: i32) -> RepoResult<Vec<Concesion>> {
        self.0.concesion_reads.fetch_add(1, Ordering::SeqCst);
        Ok(self.0.concesiones(usuario_id))
    }

    async fn roles_activos(&self, usuario_id: i32) -> RepoResult<Vec<String>> {
        Ok(self
            .0
            .all::<UsuarioRol>()
            .into_iter()
            .filter(|ur| ur.usuario_id == usuario_id && ur.is_active())
            .filter_map(|ur| self.0.get::<Rol>(ur.rol_id))
            .filter(|rol| rol.is_active())
            .map(|rol| rol.nombre)
            .collect())
    }

    async fn password_hash(&self, usuario_id: i32) -> RepoResult<Option<String>> {
        Ok(self.0.passwords.get(&usuario_id).map(|h| h.clone()))
    }

    async fn set_password(
        &self,
        usuario_id: i32,
        password_hash: &str,
        auditoria: &Auditoria,
    ) -> RepoResult<()> {
        self.0.passwords.insert(usuario_id, password_hash.to_string());
        self.0.audit(auditoria, usuario_id);
        Ok(())
    }

    async fn set_api_key(
        &self,
        usuario_id: i32,
        api_key: &str,
        expiracion: DateTime<Utc>,
        auditoria: &Auditoria,
    ) -> RepoResult<()> {
        let mut usuario = self
            .0
            .get::<Usuario>(usuario_id)
            .ok_or_else(|| DomainError::not_found("Usuario", usuario_id))?;
        usuario.api_key = Some(api_key.to_string());
        usuario.api_key_expiracion = Some(expiracion);
        self.0.insert(usuario);
        self.0.audit(auditoria, usuario_id);
        Ok(())
    }
}

#[async_trait]
impl PermisoRepository for Memoria {
    async fn find_pair(&self, rol_id: i32, modulo_id: i32) -> RepoResult<Option<Permiso>> {
        Ok(self
            .0
            .all::<Permiso>()
            .into_iter()
            .find(|p| p.rol_id == rol_id && p.modulo_id == modulo_id))
    }
}

#[async_trait]
impl UsuarioRolRepository for Memoria {
    async fn find_pair(&self, usuario_id: i32, rol_id: i32) -> RepoResult<Option<UsuarioRol>> {
        Ok(self
            .0
            .all::<UsuarioRol>()
            .into_iter()
            .find(|ur| ur.usuario_id == usuario_id && ur.rol_id == rol_id))
    }
}

#[async_trait]
impl PersonaRepository for Memoria {
    async fn search(
        &self,
        nombre: Option<&str>,
        curp: Option<&str>,
        listado: &Listado,
    ) -> RepoResult<Pagina<Persona>> {
        let nombre = nombre.map(str::to_lowercase);
        let rows = filtrar(self.0.all::<Persona>(), listado)
            .into_iter()
            .filter(|p| match &nombre {
                Some(fragmento) => {
                    let completo = [
                        p.nombres.as_str(),
                        p.apellido_primero.as_str(),
                        p.apellido_segundo.as_deref().unwrap_or(""),
                    ]
                    .join(" ")
                    .to_lowercase();
                    completo.contains(fragmento.as_str())
                }
                None => true,
            })
            .filter(|p| curp.map_or(true, |prefijo| p.curp.starts_with(prefijo)))
            .collect();
        Ok(paginar(rows, listado))
    }
}

#[async_trait]
impl HistorialPuestoRepository for Memoria {
    async fn puesto_vigente(&self, persona_id: i32, fecha: NaiveDate) -> RepoResult<Option<String>> {
        let vigente = self
            .0
            .all::<HistorialPuesto>()
            .into_iter()
            .filter(|h| h.persona_id == persona_id && h.is_active() && h.fecha_inicio <= fecha)
            .max_by_key(|h| h.fecha_inicio);
        Ok(vigente
            .and_then(|h| self.0.get::<PuestoFuncion>(h.puesto_funcion_id))
            .map(|funcion| funcion.nombre))
    }
}

#[async_trait]
impl<T: ConArchivo> AdjuntoRepository<T> for Memoria {
    async fn create_replacing(&self, nuevo: &T, anterior_id: Option<i32>) -> RepoResult<T> {
        if let Some(anterior_id) = anterior_id {
            if self.0.rows::<T>().set_estatus(anterior_id, Estatus::Baja) != Some(true) {
                return Err(DomainError::not_found(T::TABLA.entidad(), anterior_id));
            }
        }
        let mut fila = nuevo.clone();
        fila.set_id(0);
        Ok(self.0.insert(fila))
    }

    async fn stamp_file(
        &self,
        id: i32,
        archivo: &str,
        url: &str,
        auditoria: &Auditoria,
    ) -> RepoResult<T> {
        if self.0.stamp_falla.load(Ordering::SeqCst) {
            return Err(DomainError::InternalError("modulo not found".to_string()));
        }
        let mut fila = self
            .0
            .get::<T>(id)
            .ok_or_else(|| DomainError::not_found(T::TABLA.entidad(), id))?;
        fila.stamp(archivo, url);
        let fila = self.0.insert(fila);
        self.0.audit(auditoria, id);
        Ok(fila)
    }

    async fn rollback_replacement(&self, nuevo_id: i32, anterior_id: Option<i32>) -> RepoResult<()> {
        if self.0.rollback_falla.load(Ordering::SeqCst) {
            return Err(DomainError::DatabaseError("connection reset".to_string()));
        }
        let rows = self.0.rows::<T>();
        rows.0.remove(&nuevo_id);
        if let Some(anterior_id) = anterior_id {
            rows.set_estatus(anterior_id, Estatus::Activo);
        }
        Ok(())
    }
}

#[async_trait]
impl LifecycleRepository for Memoria {
    async fn set_estatus(
        &self,
        tabla: Tabla,
        id: i32,
        estatus: Estatus,
        auditoria: &Auditoria,
    ) -> RepoResult<bool> {
        let filas = self.0.tablas.get(&tabla).map(|f| f.clone());
        match filas.and_then(|f| f.set_estatus(id, estatus)) {
            None => Err(DomainError::not_found(tabla.entidad(), id)),
            Some(cambiado) => {
                if cambiado {
                    self.0.audit(auditoria, id);
                }
                Ok(cambiado)
            }
        }
    }
}

#[async_trait]
impl UniqueFieldRepository for Memoria {
    async fn find_holder(&self, campo: CampoUnico, valor: &str) -> RepoResult<Option<i32>> {
        let filas = self.0.tablas.get(&campo.tabla()).map(|f| f.clone());
        Ok(filas.and_then(|f| {
            f.columna(campo.columna())
                .into_iter()
                .find(|(_, texto)| texto == valor)
                .map(|(id, _)| id)
        }))
    }
}

#[async_trait]
impl BitacoraRepository for Memoria {
    async fn find_by_id(&self, id: i32) -> RepoResult<Option<Bitacora>> {
        let bitacoras = self.0.bitacoras.lock().unwrap();
        Ok(bitacoras.iter().map(|(_, b)| b).find(|b| b.id == id).cloned())
    }

    async fn list(
        &self,
        modulo: Option<&str>,
        usuario_id: Option<i32>,
        listado: &Listado,
    ) -> RepoResult<Pagina<Bitacora>> {
        let rows: Vec<Bitacora> = self
            .0
            .bitacoras
            .lock()
            .unwrap()
            .iter()
            .rev()
            .filter(|(a, _)| modulo.map_or(true, |m| a.modulo == m))
            .filter(|(a, _)| usuario_id.map_or(true, |u| a.usuario_id == u))
            .map(|(_, b)| b.clone())
            .collect();
        Ok(paginar(rows, listado))
    }
}

#[async_trait]
impl EntradaSalidaRepository for Memoria {
    async fn record(&self, entrada_salida: &EntradaSalida) -> RepoResult<EntradaSalida> {
        let mut registro = entrada_salida.clone();
        let mut registros = self.0.entradas_salidas.lock().unwrap();
        registro.id = registros.len() as i32 + 1;
        registros.push(registro.clone());
        Ok(registro)
    }

    async fn list(
        &self,
        usuario_id: Option<i32>,
        listado: &Listado,
    ) -> RepoResult<Pagina<EntradaSalida>> {
        let rows: Vec<EntradaSalida> = self
            .0
            .entradas_salidas
            .lock()
            .unwrap()
            .iter()
            .rev()
            .filter(|es| usuario_id.map_or(true, |u| es.usuario_id == u))
            .cloned()
            .collect();
        Ok(paginar(rows, listado))
    }
}

#[async_trait]
impl TareaRepository for Memoria {
    async fn create(&self, tarea: &Tarea) -> RepoResult<Tarea> {
        self.0.tareas.insert(tarea.id, tarea.clone());
        Ok(tarea.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Tarea>> {
        Ok(self.0.tareas.get(&id).map(|t| t.clone()))
    }

    async fn in_progress(&self, usuario_id: i32) -> RepoResult<Vec<Tarea>> {
        Ok(self
            .0
            .tareas
            .iter()
            .filter(|t| t.usuario_id == usuario_id && !t.ha_terminado && t.is_active())
            .map(|t| t.clone())
            .collect())
    }

    async fn update_progress(
        &self,
        id: Uuid,
        progreso: i32,
        mensaje: Option<&str>,
        archivo: Option<&str>,
        url: Option<&str>,
    ) -> RepoResult<bool> {
        let mut guard = self
            .0
            .tareas
            .get_mut(&id)
            .ok_or_else(|| DomainError::not_found("Tarea", id))?;
        let tarea = &mut *guard;
        let mut cambiado = false;
        if let Some(archivo) = archivo.filter(|a| !a.is_empty() && tarea.archivo != *a) {
            tarea.archivo = archivo.to_string();
            cambiado = true;
        }
        if let Some(url) = url.filter(|u| !u.is_empty() && tarea.url != *u) {
            tarea.url = url.to_string();
            cambiado = true;
        }
        let terminado = Tarea::terminado_con(progreso);
        if tarea.ha_terminado != terminado {
            tarea.ha_terminado = terminado;
            cambiado = true;
        }
        if let Some(mensaje) = mensaje.filter(|m| tarea.mensaje != *m) {
            tarea.mensaje = mensaje.to_string();
            cambiado = true;
        }
        if cambiado {
            tarea.modificado = Utc::now();
        }
        Ok(cambiado)
    }
}

#[async_trait]
impl TaskQueue for Memoria {
    async fn enqueue(&self, comando: &str, _args: serde_json::Value) -> RepoResult<Uuid> {
        let id = Uuid::new_v4();
        self.0.progresos.insert(id, 0);
        self.0.encolados.lock().unwrap().push((id, comando.to_string()));
        Ok(id)
    }

    async fn progress(&self, id: Uuid) -> RepoResult<Option<i32>> {
        Ok(self.0.progresos.get(&id).map(|p| *p))
    }

    async fn set_progress(&self, id: Uuid, progreso: i32) -> RepoResult<()> {
        self.0.progresos.insert(id, progreso);
        Ok(())
    }
}

// ============================================================================
// Storage doubles
// ============================================================================

/// Backend that refuses every upload
pub(crate) struct FailingStorage;

#[async_trait]
impl ObjectStorage for FailingStorage {
    async fn put(&self, _path: &str, _content_type: &str, _bytes: Vec<u8>) -> Result<String, StorageError> {
        Err(StorageError::Upload("bucket unavailable".to_string()))
    }

    async fn get(&self, _path: &str) -> Result<Option<Vec<u8>>, StorageError> {
        Ok(None)
    }

    async fn delete(&self, _path: &str) -> Result<(), StorageError> {
        Ok(())
    }
}

/// Backend slower than any test timeout
pub(crate) struct SlowStorage;

#[async_trait]
impl ObjectStorage for SlowStorage {
    async fn put(&self, path: &str, _content_type: &str, _bytes: Vec<u8>) -> Result<String, StorageError> {
        tokio::time::sleep(Duration::from_secs(1)).await;
        Ok(format!("/uploads/{path}"))
    }

    async fn get(&self, _path: &str) -> Result<Option<Vec<u8>>, StorageError> {
        Ok(None)
    }

    async fn delete(&self, _path: &str) -> Result<(), StorageError> {
        Ok(())
    }
}

// ============================================================================
// Test context
// ============================================================================

pub(crate) fn usuario(id: i32, email: &str) -> Usuario {
    Usuario {
        id,
        ..Usuario::new(email, "ANA", "LOPEZ", "GARCIA")
    }
}

/// Chain with every hop active and shown in the menu
pub(crate) fn concesion(modulo: &str, nivel: Nivel) -> Concesion {
    Concesion {
        usuario_rol_estatus: Estatus::Activo,
        rol_estatus: Estatus::Activo,
        permiso_estatus: Estatus::Activo,
        modulo_estatus: Estatus::Activo,
        nivel,
        modulo: modulo.to_string(),
        nombre_corto: modulo.to_lowercase(),
        icono: "icon".to_string(),
        ruta: format!("/{}", modulo.to_lowercase().replace(' ', "_")),
        en_navegacion: true,
        en_plataforma: true,
    }
}

pub(crate) struct TestContext {
    pub ctx: ServiceContext,
    pub storage: Arc<MemoryStorage>,
    store: Arc<Store>,
}

impl TestContext {
    pub fn new() -> Self {
        let storage = Arc::new(MemoryStorage::new("/uploads"));
        Self::build(storage.clone(), storage, Duration::from_secs(5))
    }

    pub fn with_storage(backend: Arc<dyn ObjectStorage>, timeout: Duration) -> Self {
        Self::build(Arc::new(MemoryStorage::new("/uploads")), backend, timeout)
    }

    fn build(storage: Arc<MemoryStorage>, backend: Arc<dyn ObjectStorage>, timeout: Duration) -> Self {
        let store = Arc::new(Store::default());
        let memoria = Arc::new(Memoria(store.clone()));
        let pool = RedisPool::new(RedisPoolConfig::default()).unwrap();

        let ctx = ServiceContextBuilder::new()
            .lifecycle_repo(memoria.clone())
            .unique_repo(memoria.clone())
            .modulo_repo(memoria.clone())
            .rol_repo(memoria.clone())
            .usuario_repo(memoria.clone())
            .permiso_repo(memoria.clone())
            .usuario_rol_repo(memoria.clone())
            .persona_repo(memoria.clone())
            .historial_puesto_repo(memoria.clone())
            .persona_adjunto_repo(memoria.clone())
            .persona_fotografia_repo(memoria.clone())
            .persona_nombramiento_repo(memoria.clone())
            .entity_repo::<Distrito, _>(memoria.clone())
            .entity_repo::<Organo, _>(memoria.clone())
            .entity_repo::<CentroTrabajo, _>(memoria.clone())
            .entity_repo::<Area, _>(memoria.clone())
            .entity_repo::<Puesto, _>(memoria.clone())
            .entity_repo::<PuestoFuncion, _>(memoria.clone())
            .entity_repo::<NivelAcademico, _>(memoria.clone())
            .entity_repo::<Banco, _>(memoria.clone())
            .entity_repo::<Carrera, _>(memoria.clone())
            .entity_repo::<Turno, _>(memoria.clone())
            .entity_repo::<Atribucion, _>(memoria.clone())
            .entity_repo::<AtribucionCt, _>(memoria.clone())
            .entity_repo::<Domicilio, _>(memoria.clone())
            .entity_repo::<PersonaDomicilio, _>(memoria.clone())
            .entity_repo::<HistorialAcademico, _>(memoria.clone())
            .entity_repo::<Licencia, _>(memoria.clone())
            .entity_repo::<Incapacidad, _>(memoria.clone())
            .bitacora_repo(memoria.clone())
            .entrada_salida_repo(memoria.clone())
            .tarea_repo(memoria.clone())
            .task_queue(memoria)
            .refresh_token_store(RefreshTokenStore::new(pool))
            .storage(backend, timeout)
            .jwt_service(Arc::new(JwtService::new("secreto-de-pruebas", 900, 604_800)))
            .security("sal-de-prueba", 90)
            .build()
            .unwrap();

        Self { ctx, storage, store }
    }

    // === Seeding ===

    pub fn insert<T: Fila>(&self, row: T) -> T {
        self.store.insert(row)
    }

    pub fn seed_usuario(&self, email: &str) -> Usuario {
        self.insert(Usuario::new(email, "PRUEBA", "USUARIO", ""))
    }

    pub fn seed_password(&self, usuario_id: i32, password: &str) {
        self.store
            .passwords
            .insert(usuario_id, hash_password(password).unwrap());
    }

    /// Make every later `stamp_file` fail
    pub fn fail_stamps(&self) {
        self.store.stamp_falla.store(true, Ordering::SeqCst);
    }

    /// Make every later `rollback_replacement` fail
    pub fn fail_rollbacks(&self) {
        self.store.rollback_falla.store(true, Ordering::SeqCst);
    }

    /// Give the user a level on a module without any role rows
    pub fn grant(&self, usuario_id: i32, modulo: &str, nivel: Nivel) {
        self.store
            .grants
            .entry(usuario_id)
            .or_default()
            .push(concesion(modulo, nivel));
    }

    pub fn user_with(&self, modulo: &str, nivel: Nivel) -> CurrentUser {
        let usuario = self.seed_usuario(&format!("{}@prueba.gob.mx", Uuid::new_v4().simple()));
        self.grant(usuario.id, modulo, nivel);
        CurrentUser::new(usuario)
    }

    pub fn user_with_all(&self, nivel: Nivel) -> CurrentUser {
        let usuario = self.seed_usuario(&format!("{}@prueba.gob.mx", Uuid::new_v4().simple()));
        for tabla in Tabla::ALL {
            self.grant(usuario.id, tabla.modulo(), nivel);
        }
        CurrentUser::new(usuario)
    }

    // === Inspection ===

    pub fn get<T: Fila>(&self, id: i32) -> T {
        self.store.get(id).unwrap()
    }

    /// Rows of any status
    pub fn count<T: Fila>(&self) -> usize {
        self.store.rows::<T>().0.len()
    }

    pub fn auditorias(&self) -> Vec<Auditoria> {
        let bitacoras = self.store.bitacoras.lock().unwrap();
        bitacoras.iter().map(|(a, _)| a.clone()).collect()
    }

    pub fn cascadas(&self) -> Vec<(Tabla, i32, Estatus)> {
        self.store.cascadas.lock().unwrap().clone()
    }

    pub fn concesion_reads(&self) -> usize {
        self.store.concesion_reads.load(Ordering::SeqCst)
    }

    pub fn entradas_salidas(&self) -> Vec<EntradaSalida> {
        self.store.entradas_salidas.lock().unwrap().clone()
    }

    pub fn encolados(&self) -> Vec<(Uuid, String)> {
        self.store.encolados.lock().unwrap().clone()
    }

    pub fn tarea(&self, id: Uuid) -> Tarea {
        self.store.tareas.get(&id).map(|t| t.clone()).unwrap()
    }
}
