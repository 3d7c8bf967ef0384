//! HistorialPuesto, HistorialAcademico entity <-> model mappers

use orion_core::entities::{HistorialAcademico, HistorialPuesto};
use orion_core::error::DomainError;

use super::{PgQueryAs, PgRecord};
use crate::models::{HistorialAcademicoModel, HistorialPuestoModel};

impl TryFrom<HistorialPuestoModel> for HistorialPuesto {
    type Error = DomainError;

    fn try_from(model: HistorialPuestoModel) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            persona_id: model.persona_id,
            puesto_funcion_id: model.puesto_funcion_id,
            turno_id: model.turno_id,
            area: model.area,
            centro_trabajo: model.centro_trabajo,
            fecha_inicio: model.fecha_inicio,
            fecha_termino: model.fecha_termino,
            nivel: model.nivel,
            quinquenio: model.quinquenio,
            nombramiento: model.nombramiento,
            tipo_nombramiento: model.tipo_nombramiento,
            observaciones: model.observaciones,
            creado: model.creado,
            modificado: model.modificado,
            estatus: model.estatus.parse()?,
        })
    }
}

impl PgRecord for HistorialPuestoModel {
    type Entity = HistorialPuesto;
    const COLUMNS: &'static [&'static str] = &[
        "persona_id",
        "puesto_funcion_id",
        "turno_id",
        "area",
        "centro_trabajo",
        "fecha_inicio",
        "fecha_termino",
        "nivel",
        "quinquenio",
        "nombramiento",
        "tipo_nombramiento",
        "observaciones",
    ];
    const PADRE: Option<&'static str> = Some("persona_id");

    fn bind_columns<'q>(
        entity: &'q HistorialPuesto,
        query: PgQueryAs<'q, Self>,
    ) -> PgQueryAs<'q, Self> {
        query
            .bind(entity.persona_id)
            .bind(entity.puesto_funcion_id)
            .bind(entity.turno_id)
            .bind(&entity.area)
            .bind(&entity.centro_trabajo)
            .bind(entity.fecha_inicio)
            .bind(entity.fecha_termino)
            .bind(entity.nivel)
            .bind(entity.quinquenio)
            .bind(&entity.nombramiento)
            .bind(&entity.tipo_nombramiento)
            .bind(&entity.observaciones)
    }
}

impl TryFrom<HistorialAcademicoModel> for HistorialAcademico {
    type Error = DomainError;

    fn try_from(model: HistorialAcademicoModel) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            persona_id: model.persona_id,
            nivel_academico_id: model.nivel_academico_id,
            escuela: model.escuela,
            ciudad: model.ciudad,
            ano_inicio: model.ano_inicio,
            ano_termino: model.ano_termino,
            creado: model.creado,
            modificado: model.modificado,
            estatus: model.estatus.parse()?,
        })
    }
}

impl PgRecord for HistorialAcademicoModel {
    type Entity = HistorialAcademico;
    const COLUMNS: &'static [&'static str] = &[
        "persona_id",
        "nivel_academico_id",
        "escuela",
        "ciudad",
        "ano_inicio",
        "ano_termino",
    ];
    const PADRE: Option<&'static str> = Some("persona_id");

    fn bind_columns<'q>(
        entity: &'q HistorialAcademico,
        query: PgQueryAs<'q, Self>,
    ) -> PgQueryAs<'q, Self> {
        query
            .bind(entity.persona_id)
            .bind(entity.nivel_academico_id)
            .bind(&entity.escuela)
            .bind(&entity.ciudad)
            .bind(entity.ano_inicio)
            .bind(entity.ano_termino)
    }
}
