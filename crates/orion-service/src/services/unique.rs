//! Natural key check shared by every entity with a unique field

use orion_core::CampoUnico;
use tracing::debug;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Reject `valor` when a row other than `propio_id` already holds it
///
/// Rows of any status count. Empty values are optional keys and pass.
pub async fn ensure_unique(
    ctx: &ServiceContext,
    campo: CampoUnico,
    valor: &str,
    propio_id: Option<i32>,
) -> ServiceResult<()> {
    if valor.is_empty() {
        return Ok(());
    }
    match ctx.unique_repo().find_holder(campo, valor).await? {
        Some(holder) if Some(holder) != propio_id => {
            debug!(?campo, holder, "Unique value already taken");
            Err(ServiceError::validation(campo.mensaje()))
        }
        _ => Ok(()),
    }
}
