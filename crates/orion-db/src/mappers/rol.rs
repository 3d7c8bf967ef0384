//! Rol, UsuarioRol entity <-> model mappers

use orion_core::entities::{Rol, UsuarioRol};
use orion_core::error::DomainError;

use super::{PgQueryAs, PgRecord};
use crate::models::{RolModel, UsuarioRolModel};

impl TryFrom<RolModel> for Rol {
    type Error = DomainError;

    fn try_from(model: RolModel) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            nombre: model.nombre,
            creado: model.creado,
            modificado: model.modificado,
            estatus: model.estatus.parse()?,
        })
    }
}

impl PgRecord for RolModel {
    type Entity = Rol;
    const COLUMNS: &'static [&'static str] = &["nombre"];

    fn bind_columns<'q>(entity: &'q Rol, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query
            .bind(&entity.nombre)
    }
}

impl TryFrom<UsuarioRolModel> for UsuarioRol {
    type Error = DomainError;

    fn try_from(model: UsuarioRolModel) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            usuario_id: model.usuario_id,
            rol_id: model.rol_id,
            descripcion: model.descripcion,
            creado: model.creado,
            modificado: model.modificado,
            estatus: model.estatus.parse()?,
        })
    }
}

impl PgRecord for UsuarioRolModel {
    type Entity = UsuarioRol;
    const COLUMNS: &'static [&'static str] = &["usuario_id", "rol_id", "descripcion"];
    const PADRE: Option<&'static str> = Some("usuario_id");

    fn bind_columns<'q>(entity: &'q UsuarioRol, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query
            .bind(entity.usuario_id)
            .bind(entity.rol_id)
            .bind(&entity.descripcion)
    }
}
