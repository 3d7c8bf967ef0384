//! Distrito, Organo, NivelAcademico, Banco, Carrera, Turno entity <-> model mappers

use orion_core::entities::{Banco, Carrera, Distrito, NivelAcademico, Organo, Turno};
use orion_core::error::DomainError;

use super::{PgQueryAs, PgRecord};
use crate::models::{BancoModel, CarreraModel, DistritoModel, NivelAcademicoModel, OrganoModel, TurnoModel};

impl TryFrom<DistritoModel> for Distrito {
    type Error = DomainError;

    fn try_from(model: DistritoModel) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            clave: model.clave,
            nombre: model.nombre,
            creado: model.creado,
            modificado: model.modificado,
            estatus: model.estatus.parse()?,
        })
    }
}

impl PgRecord for DistritoModel {
    type Entity = Distrito;
    const COLUMNS: &'static [&'static str] = &["clave", "nombre"];

    fn bind_columns<'q>(entity: &'q Distrito, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query
            .bind(&entity.clave)
            .bind(&entity.nombre)
    }
}

impl TryFrom<OrganoModel> for Organo {
    type Error = DomainError;

    fn try_from(model: OrganoModel) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            clave: model.clave,
            nombre: model.nombre,
            creado: model.creado,
            modificado: model.modificado,
            estatus: model.estatus.parse()?,
        })
    }
}

impl PgRecord for OrganoModel {
    type Entity = Organo;
    const COLUMNS: &'static [&'static str] = &["clave", "nombre"];

    fn bind_columns<'q>(entity: &'q Organo, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query
            .bind(&entity.clave)
            .bind(&entity.nombre)
    }
}

impl TryFrom<NivelAcademicoModel> for NivelAcademico {
    type Error = DomainError;

    fn try_from(model: NivelAcademicoModel) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            clave: model.clave,
            nombre: model.nombre,
            creado: model.creado,
            modificado: model.modificado,
            estatus: model.estatus.parse()?,
        })
    }
}

impl PgRecord for NivelAcademicoModel {
    type Entity = NivelAcademico;
    const COLUMNS: &'static [&'static str] = &["clave", "nombre"];

    fn bind_columns<'q>(
        entity: &'q NivelAcademico,
        query: PgQueryAs<'q, Self>,
    ) -> PgQueryAs<'q, Self> {
        query
            .bind(&entity.clave)
            .bind(&entity.nombre)
    }
}

impl TryFrom<BancoModel> for Banco {
    type Error = DomainError;

    fn try_from(model: BancoModel) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            nombre: model.nombre,
            creado: model.creado,
            modificado: model.modificado,
            estatus: model.estatus.parse()?,
        })
    }
}

impl PgRecord for BancoModel {
    type Entity = Banco;
    const COLUMNS: &'static [&'static str] = &["nombre"];

    fn bind_columns<'q>(entity: &'q Banco, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query
            .bind(&entity.nombre)
    }
}

impl TryFrom<CarreraModel> for Carrera {
    type Error = DomainError;

    fn try_from(model: CarreraModel) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            nombre: model.nombre,
            creado: model.creado,
            modificado: model.modificado,
            estatus: model.estatus.parse()?,
        })
    }
}

impl PgRecord for CarreraModel {
    type Entity = Carrera;
    const COLUMNS: &'static [&'static str] = &["nombre"];

    fn bind_columns<'q>(entity: &'q Carrera, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query
            .bind(&entity.nombre)
    }
}

impl TryFrom<TurnoModel> for Turno {
    type Error = DomainError;

    fn try_from(model: TurnoModel) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            nombre: model.nombre,
            descripcion: model.descripcion,
            creado: model.creado,
            modificado: model.modificado,
            estatus: model.estatus.parse()?,
        })
    }
}

impl PgRecord for TurnoModel {
    type Entity = Turno;
    const COLUMNS: &'static [&'static str] = &["nombre", "descripcion"];

    fn bind_columns<'q>(entity: &'q Turno, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query
            .bind(&entity.nombre)
            .bind(&entity.descripcion)
    }
}
