//! CentroTrabajo, Area, AtribucionCt entity <-> model mappers

use orion_core::entities::{Area, AtribucionCt, CentroTrabajo};
use orion_core::error::DomainError;

use super::{PgQueryAs, PgRecord};
use crate::models::{AreaModel, AtribucionCtModel, CentroTrabajoModel};

impl TryFrom<CentroTrabajoModel> for CentroTrabajo {
    type Error = DomainError;

    fn try_from(model: CentroTrabajoModel) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            distrito_id: model.distrito_id,
            organo_id: model.organo_id,
            clave: model.clave,
            nombre: model.nombre,
            telefono: model.telefono,
            num_ext: model.num_ext,
            activo: model.activo,
            creado: model.creado,
            modificado: model.modificado,
            estatus: model.estatus.parse()?,
        })
    }
}

impl PgRecord for CentroTrabajoModel {
    type Entity = CentroTrabajo;
    const COLUMNS: &'static [&'static str] = &[
        "distrito_id",
        "organo_id",
        "clave",
        "nombre",
        "telefono",
        "num_ext",
        "activo",
    ];
    const PADRE: Option<&'static str> = Some("distrito_id");

    fn bind_columns<'q>(
        entity: &'q CentroTrabajo,
        query: PgQueryAs<'q, Self>,
    ) -> PgQueryAs<'q, Self> {
        query
            .bind(entity.distrito_id)
            .bind(entity.organo_id)
            .bind(&entity.clave)
            .bind(&entity.nombre)
            .bind(&entity.telefono)
            .bind(&entity.num_ext)
            .bind(entity.activo)
    }
}

impl TryFrom<AreaModel> for Area {
    type Error = DomainError;

    fn try_from(model: AreaModel) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            centro_trabajo_id: model.centro_trabajo_id,
            nombre: model.nombre,
            creado: model.creado,
            modificado: model.modificado,
            estatus: model.estatus.parse()?,
        })
    }
}

impl PgRecord for AreaModel {
    type Entity = Area;
    const COLUMNS: &'static [&'static str] = &["centro_trabajo_id", "nombre"];
    const PADRE: Option<&'static str> = Some("centro_trabajo_id");

    fn bind_columns<'q>(entity: &'q Area, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query
            .bind(entity.centro_trabajo_id)
            .bind(&entity.nombre)
    }
}

impl TryFrom<AtribucionCtModel> for AtribucionCt {
    type Error = DomainError;

    fn try_from(model: AtribucionCtModel) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            area_id: model.area_id,
            norma: model.norma,
            fundamento: model.fundamento,
            fragmento: model.fragmento,
            creado: model.creado,
            modificado: model.modificado,
            estatus: model.estatus.parse()?,
        })
    }
}

impl PgRecord for AtribucionCtModel {
    type Entity = AtribucionCt;
    const COLUMNS: &'static [&'static str] = &["area_id", "norma", "fundamento", "fragmento"];
    const PADRE: Option<&'static str> = Some("area_id");

    fn bind_columns<'q>(
        entity: &'q AtribucionCt,
        query: PgQueryAs<'q, Self>,
    ) -> PgQueryAs<'q, Self> {
        query
            .bind(entity.area_id)
            .bind(&entity.norma)
            .bind(&entity.fundamento)
            .bind(&entity.fragmento)
    }
}
