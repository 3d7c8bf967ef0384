//! Licencia, Incapacidad entity <-> model mappers

use orion_core::entities::{Incapacidad, Licencia};
use orion_core::error::DomainError;

use super::{PgQueryAs, PgRecord};
use crate::models::{IncapacidadModel, LicenciaModel};

impl TryFrom<LicenciaModel> for Licencia {
    type Error = DomainError;

    fn try_from(model: LicenciaModel) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            persona_id: model.persona_id,
            tipo: model.tipo.parse()?,
            fecha_inicio: model.fecha_inicio,
            fecha_termino: model.fecha_termino,
            con_goce: model.con_goce,
            motivo: model.motivo,
            puesto_nombre: model.puesto_nombre,
            creado: model.creado,
            modificado: model.modificado,
            estatus: model.estatus.parse()?,
        })
    }
}

impl PgRecord for LicenciaModel {
    type Entity = Licencia;
    const COLUMNS: &'static [&'static str] = &[
        "persona_id",
        "tipo",
        "fecha_inicio",
        "fecha_termino",
        "con_goce",
        "motivo",
        "puesto_nombre",
    ];
    const PADRE: Option<&'static str> = Some("persona_id");

    fn bind_columns<'q>(entity: &'q Licencia, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query
            .bind(entity.persona_id)
            .bind(entity.tipo.code())
            .bind(entity.fecha_inicio)
            .bind(entity.fecha_termino)
            .bind(entity.con_goce)
            .bind(&entity.motivo)
            .bind(&entity.puesto_nombre)
    }
}

impl TryFrom<IncapacidadModel> for Incapacidad {
    type Error = DomainError;

    fn try_from(model: IncapacidadModel) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            persona_id: model.persona_id,
            fecha_inicio: model.fecha_inicio,
            fecha_termino: model.fecha_termino,
            clave: model.clave,
            region: model.region.parse()?,
            motivo: model.motivo,
            puesto_nombre: model.puesto_nombre,
            creado: model.creado,
            modificado: model.modificado,
            estatus: model.estatus.parse()?,
        })
    }
}

impl PgRecord for IncapacidadModel {
    type Entity = Incapacidad;
    const COLUMNS: &'static [&'static str] = &[
        "persona_id",
        "fecha_inicio",
        "fecha_termino",
        "clave",
        "region",
        "motivo",
        "puesto_nombre",
    ];
    const PADRE: Option<&'static str> = Some("persona_id");

    fn bind_columns<'q>(
        entity: &'q Incapacidad,
        query: PgQueryAs<'q, Self>,
    ) -> PgQueryAs<'q, Self> {
        query
            .bind(entity.persona_id)
            .bind(entity.fecha_inicio)
            .bind(entity.fecha_termino)
            .bind(&entity.clave)
            .bind(entity.region.code())
            .bind(&entity.motivo)
            .bind(&entity.puesto_nombre)
    }
}
