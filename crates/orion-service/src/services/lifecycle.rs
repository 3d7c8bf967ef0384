//! Lifecycle service
//!
//! Logical delete and recover. Leaf entities flip one row; aggregate roots
//! (Modulo, Rol, Usuario) cascade through their repository.

use orion_core::{AggregateRepository, Entity, Estatus, Nivel, Tabla};
use tracing::{info, instrument};

use super::auditoria::AuditoriaBuilder;
use super::context::ServiceContext;
use super::current_user::CurrentUser;
use super::error::ServiceResult;
use super::permission::PermissionService;

/// Lifecycle service
pub struct LifecycleService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> LifecycleService<'a> {
    /// Create a new LifecycleService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Delete one row; `false` when it was already deleted
    pub async fn delete(&self, tabla: Tabla, id: i32, user: &CurrentUser) -> ServiceResult<bool> {
        self.set_estatus(tabla, id, user, Estatus::Baja).await
    }

    /// Recover one row; `false` when it was already active
    pub async fn recover(&self, tabla: Tabla, id: i32, user: &CurrentUser) -> ServiceResult<bool> {
        self.set_estatus(tabla, id, user, Estatus::Activo).await
    }

    #[instrument(skip(self, user), fields(tabla = %tabla, usuario_id = user.id()))]
    pub async fn set_estatus(
        &self,
        tabla: Tabla,
        id: i32,
        user: &CurrentUser,
        estatus: Estatus,
    ) -> ServiceResult<bool> {
        PermissionService::new(self.ctx)
            .require(user, tabla.modulo(), Nivel::Administrar)
            .await?;

        let auditoria = AuditoriaBuilder::new(tabla, user)
            .descripcion(format!("{} {} {id}", accion(estatus), tabla.entidad()))
            .build();
        let cambiado = self
            .ctx
            .lifecycle_repo()
            .set_estatus(tabla, id, estatus, &auditoria)
            .await?;

        if cambiado {
            info!(id, %estatus, "Status changed");
        }
        Ok(cambiado)
    }

    /// Delete or recover an aggregate root together with its children
    #[instrument(skip(self, repo, user), fields(tabla = %T::TABLA, usuario_id = user.id()))]
    pub async fn cascade<T, R>(
        &self,
        repo: &R,
        user: &CurrentUser,
        id: i32,
        estatus: Estatus,
    ) -> ServiceResult<bool>
    where
        T: Entity<Id = i32> + Send + Sync + 'static,
        R: AggregateRepository<T> + ?Sized,
    {
        PermissionService::new(self.ctx)
            .require(user, T::TABLA.modulo(), Nivel::Administrar)
            .await?;

        let auditoria = AuditoriaBuilder::new(T::TABLA, user)
            .descripcion(format!("{} {} {id}", accion(estatus), T::TABLA.entidad()))
            .build();
        let raiz = match estatus {
            Estatus::Baja => repo.cascade_delete(id, &auditoria).await?,
            Estatus::Activo => repo.cascade_recover(id, &auditoria).await?,
        };

        if raiz.is_some() {
            info!(id, %estatus, "Status changed with cascade");
        }
        Ok(raiz.is_some())
    }
}

fn accion(estatus: Estatus) -> &'static str {
    match estatus {
        Estatus::Baja => "Eliminado",
        Estatus::Activo => "Recuperado",
    }
}
