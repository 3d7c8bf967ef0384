//! Menu service - navigation entries of the current user

use orion_core::MenuItem;
use tracing::{debug, instrument};

use super::context::ServiceContext;
use super::current_user::CurrentUser;
use super::error::ServiceResult;

/// Menu service
pub struct MenuService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MenuService<'a> {
    /// Create a new MenuService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Modules the user can reach, sorted by short name
    #[instrument(skip(self, user), fields(usuario_id = user.id()))]
    pub async fn menu(&self, user: &CurrentUser) -> ServiceResult<Vec<MenuItem>> {
        let menu = user.menu(self.ctx).await?;
        debug!(entradas = menu.len(), "Menu built");
        Ok(menu)
    }
}
