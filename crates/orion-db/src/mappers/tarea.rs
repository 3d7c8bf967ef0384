//! Tarea entity <-> model mapper

use orion_core::entities::Tarea;
use orion_core::error::DomainError;

use crate::models::TareaModel;

impl TryFrom<TareaModel> for Tarea {
    type Error = DomainError;

    fn try_from(model: TareaModel) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            usuario_id: model.usuario_id,
            comando: model.comando,
            mensaje: model.mensaje,
            archivo: model.archivo,
            url: model.url,
            ha_terminado: model.ha_terminado,
            creado: model.creado,
            modificado: model.modificado,
            estatus: model.estatus.parse()?,
        })
    }
}
