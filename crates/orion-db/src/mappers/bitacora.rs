//! Bitacora and EntradaSalida entity <-> model mappers

use orion_core::entities::{Bitacora, EntradaSalida};
use orion_core::error::DomainError;

use crate::models::{BitacoraModel, EntradaSalidaModel};

impl TryFrom<BitacoraModel> for Bitacora {
    type Error = DomainError;

    fn try_from(model: BitacoraModel) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            modulo_id: model.modulo_id,
            usuario_id: model.usuario_id,
            descripcion: model.descripcion,
            url: model.url,
            creado: model.creado,
            modificado: model.modificado,
            estatus: model.estatus.parse()?,
        })
    }
}

impl TryFrom<EntradaSalidaModel> for EntradaSalida {
    type Error = DomainError;

    fn try_from(model: EntradaSalidaModel) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            usuario_id: model.usuario_id,
            tipo: model.tipo.parse()?,
            direccion_ip: model.direccion_ip,
            creado: model.creado,
            modificado: model.modificado,
            estatus: model.estatus.parse()?,
        })
    }
}
