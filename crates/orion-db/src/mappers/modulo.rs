//! Modulo entity <-> model mappers

use orion_core::entities::Modulo;
use orion_core::error::DomainError;

use super::{PgQueryAs, PgRecord};
use crate::models::ModuloModel;

impl TryFrom<ModuloModel> for Modulo {
    type Error = DomainError;

    fn try_from(model: ModuloModel) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            nombre: model.nombre,
            nombre_corto: model.nombre_corto,
            icono: model.icono,
            ruta: model.ruta,
            en_navegacion: model.en_navegacion,
            en_plataforma: model.en_plataforma,
            creado: model.creado,
            modificado: model.modificado,
            estatus: model.estatus.parse()?,
        })
    }
}

impl PgRecord for ModuloModel {
    type Entity = Modulo;
    const COLUMNS: &'static [&'static str] = &[
        "nombre",
        "nombre_corto",
        "icono",
        "ruta",
        "en_navegacion",
        "en_plataforma",
    ];

    fn bind_columns<'q>(entity: &'q Modulo, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query
            .bind(&entity.nombre)
            .bind(&entity.nombre_corto)
            .bind(&entity.icono)
            .bind(&entity.ruta)
            .bind(entity.en_navegacion)
            .bind(entity.en_plataforma)
    }
}
