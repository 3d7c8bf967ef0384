//! Domicilio, PersonaDomicilio entity <-> model mappers

use orion_core::entities::{Domicilio, PersonaDomicilio};
use orion_core::error::DomainError;

use super::{PgQueryAs, PgRecord};
use crate::models::{DomicilioModel, PersonaDomicilioModel};

impl TryFrom<DomicilioModel> for Domicilio {
    type Error = DomainError;

    fn try_from(model: DomicilioModel) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            estado: model.estado,
            municipio: model.municipio,
            pais: model.pais,
            calle: model.calle,
            num_ext: model.num_ext,
            num_int: model.num_int,
            colonia: model.colonia,
            cp: model.cp,
            completo: model.completo,
            creado: model.creado,
            modificado: model.modificado,
            estatus: model.estatus.parse()?,
        })
    }
}

impl PgRecord for DomicilioModel {
    type Entity = Domicilio;
    const COLUMNS: &'static [&'static str] = &[
        "estado",
        "municipio",
        "pais",
        "calle",
        "num_ext",
        "num_int",
        "colonia",
        "cp",
        "completo",
    ];

    fn bind_columns<'q>(entity: &'q Domicilio, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query
            .bind(&entity.estado)
            .bind(&entity.municipio)
            .bind(&entity.pais)
            .bind(&entity.calle)
            .bind(&entity.num_ext)
            .bind(&entity.num_int)
            .bind(&entity.colonia)
            .bind(&entity.cp)
            .bind(&entity.completo)
    }
}

impl TryFrom<PersonaDomicilioModel> for PersonaDomicilio {
    type Error = DomainError;

    fn try_from(model: PersonaDomicilioModel) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            persona_id: model.persona_id,
            domicilio_id: model.domicilio_id,
            creado: model.creado,
            modificado: model.modificado,
            estatus: model.estatus.parse()?,
        })
    }
}

impl PgRecord for PersonaDomicilioModel {
    type Entity = PersonaDomicilio;
    const COLUMNS: &'static [&'static str] = &["persona_id", "domicilio_id"];
    const PADRE: Option<&'static str> = Some("persona_id");

    fn bind_columns<'q>(
        entity: &'q PersonaDomicilio,
        query: PgQueryAs<'q, Self>,
    ) -> PgQueryAs<'q, Self> {
        query
            .bind(entity.persona_id)
            .bind(entity.domicilio_id)
    }
}
