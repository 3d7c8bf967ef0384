//! Usuario entity <-> model mappers

use orion_core::entities::Usuario;
use orion_core::error::DomainError;
use orion_core::value_objects::{Concesion, Nivel};

use super::{PgQueryAs, PgRecord};
use crate::models::{ConcesionModel, UsuarioModel};

impl TryFrom<UsuarioModel> for Usuario {
    type Error = DomainError;

    fn try_from(model: UsuarioModel) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            email: model.email,
            nombres: model.nombres,
            apellido_paterno: model.apellido_paterno,
            apellido_materno: model.apellido_materno,
            curp: model.curp,
            puesto: model.puesto,
            api_key: model.api_key,
            api_key_expiracion: model.api_key_expiracion,
            creado: model.creado,
            modificado: model.modificado,
            estatus: model.estatus.parse()?,
        })
    }
}

impl PgRecord for UsuarioModel {
    type Entity = Usuario;
    const COLUMNS: &'static [&'static str] = &[
        "email",
        "nombres",
        "apellido_paterno",
        "apellido_materno",
        "curp",
        "puesto",
        "api_key",
        "api_key_expiracion",
    ];

    fn bind_columns<'q>(entity: &'q Usuario, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query
            .bind(&entity.email)
            .bind(&entity.nombres)
            .bind(&entity.apellido_paterno)
            .bind(&entity.apellido_materno)
            .bind(&entity.curp)
            .bind(&entity.puesto)
            .bind(&entity.api_key)
            .bind(entity.api_key_expiracion)
    }
}

impl TryFrom<ConcesionModel> for Concesion {
    type Error = DomainError;

    fn try_from(model: ConcesionModel) -> Result<Self, Self::Error> {
        Ok(Self {
            usuario_rol_estatus: model.usuario_rol_estatus.parse()?,
            rol_estatus: model.rol_estatus.parse()?,
            permiso_estatus: model.permiso_estatus.parse()?,
            modulo_estatus: model.modulo_estatus.parse()?,
            nivel: Nivel::try_from(model.nivel)?,
            modulo: model.modulo,
            nombre_corto: model.nombre_corto,
            icono: model.icono,
            ruta: model.ruta,
            en_navegacion: model.en_navegacion,
            en_plataforma: model.en_plataforma,
        })
    }
}
