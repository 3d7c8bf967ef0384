//! Puesto, PuestoFuncion, Atribucion entity <-> model mappers

use orion_core::entities::{Atribucion, Puesto, PuestoFuncion};
use orion_core::error::DomainError;

use super::{PgQueryAs, PgRecord};
use crate::models::{AtribucionModel, PuestoFuncionModel, PuestoModel};

impl TryFrom<PuestoModel> for Puesto {
    type Error = DomainError;

    fn try_from(model: PuestoModel) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            clave: model.clave,
            nombre: model.nombre,
            tipo_cargo: model.tipo_cargo.parse()?,
            tipo_empleado: model.tipo_empleado.parse()?,
            creado: model.creado,
            modificado: model.modificado,
            estatus: model.estatus.parse()?,
        })
    }
}

impl PgRecord for PuestoModel {
    type Entity = Puesto;
    const COLUMNS: &'static [&'static str] = &["clave", "nombre", "tipo_cargo", "tipo_empleado"];

    fn bind_columns<'q>(entity: &'q Puesto, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query
            .bind(&entity.clave)
            .bind(&entity.nombre)
            .bind(entity.tipo_cargo.code())
            .bind(entity.tipo_empleado.code())
    }
}

impl TryFrom<PuestoFuncionModel> for PuestoFuncion {
    type Error = DomainError;

    fn try_from(model: PuestoFuncionModel) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            puesto_id: model.puesto_id,
            nombre: model.nombre,
            creado: model.creado,
            modificado: model.modificado,
            estatus: model.estatus.parse()?,
        })
    }
}

impl PgRecord for PuestoFuncionModel {
    type Entity = PuestoFuncion;
    const COLUMNS: &'static [&'static str] = &["puesto_id", "nombre"];
    const PADRE: Option<&'static str> = Some("puesto_id");

    fn bind_columns<'q>(
        entity: &'q PuestoFuncion,
        query: PgQueryAs<'q, Self>,
    ) -> PgQueryAs<'q, Self> {
        query
            .bind(entity.puesto_id)
            .bind(&entity.nombre)
    }
}

impl TryFrom<AtribucionModel> for Atribucion {
    type Error = DomainError;

    fn try_from(model: AtribucionModel) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            puesto_funcion_id: model.puesto_funcion_id,
            centro_trabajo_id: model.centro_trabajo_id,
            norma: model.norma,
            fundamento: model.fundamento,
            fragmento: model.fragmento,
            tipo_cargo: model.tipo_cargo.as_deref().map(str::parse).transpose()?,
            creado: model.creado,
            modificado: model.modificado,
            estatus: model.estatus.parse()?,
        })
    }
}

impl PgRecord for AtribucionModel {
    type Entity = Atribucion;
    const COLUMNS: &'static [&'static str] = &[
        "puesto_funcion_id",
        "centro_trabajo_id",
        "norma",
        "fundamento",
        "fragmento",
        "tipo_cargo",
    ];
    const PADRE: Option<&'static str> = Some("puesto_funcion_id");

    fn bind_columns<'q>(entity: &'q Atribucion, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query
            .bind(entity.puesto_funcion_id)
            .bind(entity.centro_trabajo_id)
            .bind(&entity.norma)
            .bind(&entity.fundamento)
            .bind(&entity.fragmento)
            .bind(entity.tipo_cargo.map(|v| v.code()))
    }
}
