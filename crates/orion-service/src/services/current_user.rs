//! CurrentUser - the authenticated user of one request
//!
//! Chains, permission map and menu are loaded on first use and kept for the
//! lifetime of the value. A new value is built for every request, so role
//! changes are seen by the next request.

use orion_core::entities::Usuario;
use orion_core::{menu_principal, Concesion, MenuItem, PermissionMap};
use tokio::sync::OnceCell;

use super::context::ServiceContext;
use super::error::ServiceResult;

#[derive(Debug)]
pub struct CurrentUser {
    usuario: Usuario,
    concesiones: OnceCell<Vec<Concesion>>,
    permisos: OnceCell<PermissionMap>,
}

impl CurrentUser {
    pub fn new(usuario: Usuario) -> Self {
        Self {
            usuario,
            concesiones: OnceCell::new(),
            permisos: OnceCell::new(),
        }
    }

    /// User whose chains are already known
    pub fn with_concesiones(usuario: Usuario, concesiones: Vec<Concesion>) -> Self {
        Self {
            usuario,
            concesiones: OnceCell::new_with(Some(concesiones)),
            permisos: OnceCell::new(),
        }
    }

    pub fn usuario(&self) -> &Usuario {
        &self.usuario
    }

    pub fn id(&self) -> i32 {
        self.usuario.id
    }

    /// Every role chain of the user, read once
    pub async fn concesiones(&self, ctx: &ServiceContext) -> ServiceResult<&[Concesion]> {
        let concesiones = self
            .concesiones
            .get_or_try_init(|| async {
                ctx.usuario_repo().concesiones(self.usuario.id).await
            })
            .await?;
        Ok(concesiones.as_slice())
    }

    /// Highest level per module through active chains
    pub async fn permisos(&self, ctx: &ServiceContext) -> ServiceResult<&PermissionMap> {
        if let Some(permisos) = self.permisos.get() {
            return Ok(permisos);
        }
        let concesiones = self.concesiones(ctx).await?;
        Ok(self
            .permisos
            .get_or_init(|| async { PermissionMap::from_concesiones(concesiones) })
            .await)
    }

    /// Navigation menu through active chains
    pub async fn menu(&self, ctx: &ServiceContext) -> ServiceResult<Vec<MenuItem>> {
        Ok(menu_principal(self.concesiones(ctx).await?))
    }
}
