//! Resource services
//!
//! Every entity edited through a form implements [`Resource`]; the generic
//! [`CrudService`] then gives it list, detail, create, edit, delete and
//! recover with the permission guard, the uniqueness checks and the audit
//! entry in place.

use std::marker::PhantomData;

use async_trait::async_trait;
use orion_common::text::{safe_clave, safe_string};
use orion_core::{CampoUnico, Entity, EntityRepository, Estatus, Listado, Nivel, Pagina};
use serde::de::DeserializeOwned;
use tracing::{info, instrument};
use validator::Validate;

use super::auditoria::AuditoriaBuilder;
use super::context::ServiceContext;
use super::current_user::CurrentUser;
use super::error::{ServiceError, ServiceResult};
use super::lifecycle::LifecycleService;
use super::permission::PermissionService;
use super::unique::ensure_unique;

/// An entity created and edited from a request body
#[async_trait]
pub trait Resource: Entity<Id = i32> + Default + Clone + Send + Sync + 'static {
    /// Body accepted by create and edit
    type Request: DeserializeOwned + Validate + Send + Sync + 'static;

    /// A deleted duplicate is recovered on create instead of rejected
    const RECOVERS_DUPLICATE: bool = false;

    /// Copy the editable fields from a validated request, sanitized
    fn fill(&mut self, request: Self::Request) -> ServiceResult<()>;

    /// Text used in audit descriptions
    fn describe(&self) -> String;

    /// Natural keys that no other row may hold
    fn unique_fields(&self) -> Vec<(CampoUnico, String)> {
        Vec::new()
    }

    /// Derived fields and cross-field rules, run after `fill`
    async fn prepare(&mut self, _ctx: &ServiceContext) -> ServiceResult<()> {
        Ok(())
    }

    /// Existing row with the same pair key, for join entities
    async fn find_duplicate(&self, _ctx: &ServiceContext) -> ServiceResult<Option<Self>> {
        Ok(None)
    }

    /// Delete or recover; aggregate roots override this to cascade
    async fn set_status(
        ctx: &ServiceContext,
        user: &CurrentUser,
        id: i32,
        estatus: Estatus,
    ) -> ServiceResult<bool> {
        LifecycleService::new(ctx)
            .set_estatus(Self::TABLA, id, user, estatus)
            .await
    }
}

// ============================================================================
// Field helpers
// ============================================================================

/// Sanitized free text that must not end up empty
pub(crate) fn required_text(input: &str, max_len: usize, mensaje: &str) -> ServiceResult<String> {
    let valor = safe_string(input, max_len, true);
    if valor.is_empty() {
        return Err(ServiceError::validation(mensaje));
    }
    Ok(valor)
}

/// Sanitized catalog key that must not end up empty
pub(crate) fn required_clave(input: &str, max_len: usize) -> ServiceResult<String> {
    let clave = safe_clave(input, max_len);
    if clave.is_empty() {
        return Err(ServiceError::validation("La clave es obligatoria."));
    }
    Ok(clave)
}

/// Sanitized optional text; blank becomes `None`
pub(crate) fn optional_text(input: Option<String>, max_len: usize) -> Option<String> {
    input
        .map(|texto| safe_string(&texto, max_len, true))
        .filter(|texto| !texto.is_empty())
}

/// Load the row a foreign key points to, rejecting dangling references
pub(crate) async fn referenced<P>(ctx: &ServiceContext, id: i32) -> ServiceResult<P>
where
    P: Entity<Id = i32> + Send + Sync + 'static,
{
    ctx.entity_repo::<P>()?
        .find_by_id(id)
        .await?
        .ok_or_else(|| ServiceError::validation(format!("No existe {} {id}", P::TABLA.entidad())))
}

/// Generic service over one [`Resource`]
pub struct CrudService<'a, T> {
    pub(super) ctx: &'a ServiceContext,
    _resource: PhantomData<fn() -> T>,
}

impl<'a, T: Resource> CrudService<'a, T> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self {
            ctx,
            _resource: PhantomData,
        }
    }

    fn repo(&self) -> ServiceResult<&'a dyn EntityRepository<T>> {
        self.ctx.entity_repo::<T>()
    }

    pub(super) async fn require(&self, user: &CurrentUser, nivel: Nivel) -> ServiceResult<()> {
        PermissionService::new(self.ctx)
            .require(user, T::TABLA.modulo(), nivel)
            .await
    }

    /// Fetch one row whatever its status
    pub async fn find(&self, id: i32) -> ServiceResult<T> {
        self.repo()?
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(T::TABLA.entidad(), id))
    }

    /// List rows; deleted rows need Administrar
    #[instrument(skip(self, user), fields(tabla = %T::TABLA, usuario_id = user.id()))]
    pub async fn list(&self, user: &CurrentUser, listado: &Listado) -> ServiceResult<Pagina<T>> {
        let nivel = if listado.estatus.is_activo() {
            Nivel::Ver
        } else {
            Nivel::Administrar
        };
        self.require(user, nivel).await?;

        Ok(self.repo()?.list(listado).await?)
    }

    #[instrument(skip(self, user), fields(tabla = %T::TABLA, usuario_id = user.id()))]
    pub async fn get(&self, user: &CurrentUser, id: i32) -> ServiceResult<T> {
        self.require(user, Nivel::Ver).await?;
        self.find(id).await
    }

    #[instrument(skip(self, user, request), fields(tabla = %T::TABLA, usuario_id = user.id()))]
    pub async fn create(&self, user: &CurrentUser, request: T::Request) -> ServiceResult<T> {
        self.require(user, Nivel::Crear).await?;
        request.validate()?;

        let mut entidad = T::default();
        entidad.fill(request)?;
        entidad.prepare(self.ctx).await?;

        if let Some(existente) = entidad.find_duplicate(self.ctx).await? {
            if T::RECOVERS_DUPLICATE && !existente.is_active() {
                return self.recover_duplicate(user, existente).await;
            }
            return Err(ServiceError::validation(format!(
                "Ya existe {}",
                existente.describe()
            )));
        }
        self.ensure_unique_fields(&entidad, None).await?;

        let auditoria = AuditoriaBuilder::new(T::TABLA, user)
            .descripcion(format!("Nuevo {} {}", T::TABLA.entidad(), entidad.describe()))
            .build();
        let creado = self.repo()?.create(&entidad, &auditoria).await?;

        info!(id = creado.id(), "Created");
        Ok(creado)
    }

    #[instrument(skip(self, user, request), fields(tabla = %T::TABLA, usuario_id = user.id()))]
    pub async fn update(&self, user: &CurrentUser, id: i32, request: T::Request) -> ServiceResult<T> {
        self.require(user, Nivel::Modificar).await?;
        request.validate()?;

        let mut entidad = self.find(id).await?;
        entidad.fill(request)?;
        entidad.prepare(self.ctx).await?;

        if let Some(existente) = entidad.find_duplicate(self.ctx).await? {
            if existente.id() != id {
                return Err(ServiceError::validation(format!(
                    "Ya existe {}",
                    existente.describe()
                )));
            }
        }
        self.ensure_unique_fields(&entidad, Some(id)).await?;

        let auditoria = AuditoriaBuilder::new(T::TABLA, user)
            .descripcion(format!("Editado {} {}", T::TABLA.entidad(), entidad.describe()))
            .build();
        let actualizado = self.repo()?.update(&entidad, &auditoria).await?;

        info!(id, "Updated");
        Ok(actualizado)
    }

    /// Delete and return the row as it is afterwards
    pub async fn delete(&self, user: &CurrentUser, id: i32) -> ServiceResult<T> {
        T::set_status(self.ctx, user, id, Estatus::Baja).await?;
        self.find(id).await
    }

    /// Recover and return the row as it is afterwards
    pub async fn recover(&self, user: &CurrentUser, id: i32) -> ServiceResult<T> {
        T::set_status(self.ctx, user, id, Estatus::Activo).await?;
        self.find(id).await
    }

    async fn ensure_unique_fields(&self, entidad: &T, propio_id: Option<i32>) -> ServiceResult<()> {
        for (campo, valor) in entidad.unique_fields() {
            ensure_unique(self.ctx, campo, &valor, propio_id).await?;
        }
        Ok(())
    }

    /// Bring back a deleted pair instead of inserting a second one
    async fn recover_duplicate(&self, user: &CurrentUser, existente: T) -> ServiceResult<T> {
        let auditoria = AuditoriaBuilder::new(T::TABLA, user)
            .descripcion(format!(
                "Recuperado {} {}",
                T::TABLA.entidad(),
                existente.describe()
            ))
            .build();
        self.ctx
            .lifecycle_repo()
            .set_estatus(T::TABLA, existente.id(), Estatus::Activo, &auditoria)
            .await?;

        info!(id = existente.id(), "Recovered duplicate");
        self.find(existente.id()).await
    }
}
