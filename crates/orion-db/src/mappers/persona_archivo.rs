//! PersonaAdjunto, PersonaFotografia, PersonaNombramiento entity <-> model mappers

use orion_core::entities::{PersonaAdjunto, PersonaFotografia, PersonaNombramiento};
use orion_core::error::DomainError;

use super::{PgQueryAs, PgRecord};
use crate::models::{PersonaAdjuntoModel, PersonaFotografiaModel, PersonaNombramientoModel};

impl TryFrom<PersonaAdjuntoModel> for PersonaAdjunto {
    type Error = DomainError;

    fn try_from(model: PersonaAdjuntoModel) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            persona_id: model.persona_id,
            tipo: model.tipo.parse()?,
            descripcion: model.descripcion,
            archivo: model.archivo,
            url: model.url,
            creado: model.creado,
            modificado: model.modificado,
            estatus: model.estatus.parse()?,
        })
    }
}

impl PgRecord for PersonaAdjuntoModel {
    type Entity = PersonaAdjunto;
    const COLUMNS: &'static [&'static str] = &[
        "persona_id",
        "tipo",
        "descripcion",
        "archivo",
        "url",
    ];
    const PADRE: Option<&'static str> = Some("persona_id");

    fn bind_columns<'q>(
        entity: &'q PersonaAdjunto,
        query: PgQueryAs<'q, Self>,
    ) -> PgQueryAs<'q, Self> {
        query
            .bind(entity.persona_id)
            .bind(entity.tipo.code())
            .bind(&entity.descripcion)
            .bind(&entity.archivo)
            .bind(&entity.url)
    }
}

impl TryFrom<PersonaFotografiaModel> for PersonaFotografia {
    type Error = DomainError;

    fn try_from(model: PersonaFotografiaModel) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            persona_id: model.persona_id,
            archivo: model.archivo,
            url: model.url,
            creado: model.creado,
            modificado: model.modificado,
            estatus: model.estatus.parse()?,
        })
    }
}

impl PgRecord for PersonaFotografiaModel {
    type Entity = PersonaFotografia;
    const COLUMNS: &'static [&'static str] = &["persona_id", "archivo", "url"];
    const PADRE: Option<&'static str> = Some("persona_id");

    fn bind_columns<'q>(
        entity: &'q PersonaFotografia,
        query: PgQueryAs<'q, Self>,
    ) -> PgQueryAs<'q, Self> {
        query
            .bind(entity.persona_id)
            .bind(&entity.archivo)
            .bind(&entity.url)
    }
}

impl TryFrom<PersonaNombramientoModel> for PersonaNombramiento {
    type Error = DomainError;

    fn try_from(model: PersonaNombramientoModel) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            persona_id: model.persona_id,
            cargo: model.cargo,
            centro_trabajo: model.centro_trabajo,
            tipo: model.tipo,
            fecha_inicio: model.fecha_inicio,
            fecha_fin: model.fecha_fin,
            archivo: model.archivo,
            url: model.url,
            creado: model.creado,
            modificado: model.modificado,
            estatus: model.estatus.parse()?,
        })
    }
}

impl PgRecord for PersonaNombramientoModel {
    type Entity = PersonaNombramiento;
    const COLUMNS: &'static [&'static str] = &[
        "persona_id",
        "cargo",
        "centro_trabajo",
        "tipo",
        "fecha_inicio",
        "fecha_fin",
        "archivo",
        "url",
    ];
    const PADRE: Option<&'static str> = Some("persona_id");

    fn bind_columns<'q>(
        entity: &'q PersonaNombramiento,
        query: PgQueryAs<'q, Self>,
    ) -> PgQueryAs<'q, Self> {
        query
            .bind(entity.persona_id)
            .bind(&entity.cargo)
            .bind(&entity.centro_trabajo)
            .bind(&entity.tipo)
            .bind(entity.fecha_inicio)
            .bind(entity.fecha_fin)
            .bind(&entity.archivo)
            .bind(&entity.url)
    }
}
