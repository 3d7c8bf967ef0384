//! Permission service
//!
//! Guards every operation with a required (module, level) pair.

use orion_core::Nivel;
use tracing::{instrument, warn};

use super::context::ServiceContext;
use super::current_user::CurrentUser;
use super::error::{ServiceError, ServiceResult};

/// Permission service
pub struct PermissionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PermissionService<'a> {
    /// Create a new PermissionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Check whether the user holds at least `nivel` on `modulo`
    pub async fn check(
        &self,
        user: &CurrentUser,
        modulo: &str,
        nivel: Nivel,
    ) -> ServiceResult<bool> {
        Ok(user.permisos(self.ctx).await?.can(modulo, nivel))
    }

    /// Require at least `nivel` on `modulo`
    ///
    /// # Errors
    /// `PermissionDenied` when the user lacks it
    #[instrument(skip(self, user), fields(usuario_id = user.id()))]
    pub async fn require(&self, user: &CurrentUser, modulo: &str, nivel: Nivel) -> ServiceResult<()> {
        if self.check(user, modulo, nivel).await? {
            Ok(())
        } else {
            warn!(modulo, nivel = nivel.name(), "Permission denied");
            Err(ServiceError::permission_denied(format!(
                "{} en {modulo}",
                nivel.name()
            )))
        }
    }
}
