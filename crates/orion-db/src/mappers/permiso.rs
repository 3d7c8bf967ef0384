//! Permiso entity <-> model mappers

use orion_core::entities::Permiso;
use orion_core::error::DomainError;
use orion_core::value_objects::Nivel;

use super::{PgQueryAs, PgRecord};
use crate::models::PermisoModel;

impl TryFrom<PermisoModel> for Permiso {
    type Error = DomainError;

    fn try_from(model: PermisoModel) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            rol_id: model.rol_id,
            modulo_id: model.modulo_id,
            nombre: model.nombre,
            nivel: Nivel::try_from(model.nivel)?,
            creado: model.creado,
            modificado: model.modificado,
            estatus: model.estatus.parse()?,
        })
    }
}

impl PgRecord for PermisoModel {
    type Entity = Permiso;
    const COLUMNS: &'static [&'static str] = &["rol_id", "modulo_id", "nombre", "nivel"];
    const PADRE: Option<&'static str> = Some("rol_id");

    fn bind_columns<'q>(entity: &'q Permiso, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query
            .bind(entity.rol_id)
            .bind(entity.modulo_id)
            .bind(&entity.nombre)
            .bind(i32::from(entity.nivel))
    }
}
