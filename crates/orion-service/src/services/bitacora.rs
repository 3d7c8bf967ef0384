//! Bitácora and Entrada-Salida services - read side of the logs

use orion_core::entities::{Bitacora, EntradaSalida};
use orion_core::{Listado, Nivel, Pagina, Tabla};
use tracing::instrument;

use super::context::ServiceContext;
use super::current_user::CurrentUser;
use super::error::{ServiceError, ServiceResult};
use super::permission::PermissionService;

/// Bitácora service
pub struct BitacoraService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> BitacoraService<'a> {
    /// Create a new BitacoraService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Audit entries, newest first, optionally of one module or user
    #[instrument(skip(self, user), fields(usuario_id = user.id()))]
    pub async fn list(
        &self,
        user: &CurrentUser,
        modulo: Option<&str>,
        usuario_id: Option<i32>,
        listado: &Listado,
    ) -> ServiceResult<Pagina<Bitacora>> {
        PermissionService::new(self.ctx)
            .require(user, Tabla::Bitacoras.modulo(), Nivel::Ver)
            .await?;

        let modulo = modulo.map(str::trim).filter(|m| !m.is_empty());
        Ok(self
            .ctx
            .bitacora_repo()
            .list(modulo, usuario_id, listado)
            .await?)
    }

    pub async fn get(&self, user: &CurrentUser, id: i32) -> ServiceResult<Bitacora> {
        PermissionService::new(self.ctx)
            .require(user, Tabla::Bitacoras.modulo(), Nivel::Ver)
            .await?;

        self.ctx
            .bitacora_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(Tabla::Bitacoras.entidad(), id))
    }
}

/// Entrada-Salida service
pub struct EntradaSalidaService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> EntradaSalidaService<'a> {
    /// Create a new EntradaSalidaService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Logins and logouts, newest first
    #[instrument(skip(self, user), fields(usuario_id = user.id()))]
    pub async fn list(
        &self,
        user: &CurrentUser,
        usuario_id: Option<i32>,
        listado: &Listado,
    ) -> ServiceResult<Pagina<EntradaSalida>> {
        PermissionService::new(self.ctx)
            .require(user, Tabla::EntradasSalidas.modulo(), Nivel::Ver)
            .await?;

        Ok(self
            .ctx
            .entrada_salida_repo()
            .list(usuario_id, listado)
            .await?)
    }
}
