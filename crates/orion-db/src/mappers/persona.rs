//! Persona entity <-> model mappers

use orion_core::entities::Persona;
use orion_core::error::DomainError;

use super::{PgQueryAs, PgRecord};
use crate::models::PersonaModel;

impl TryFrom<PersonaModel> for Persona {
    type Error = DomainError;

    fn try_from(model: PersonaModel) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            carrera_id: model.carrera_id,
            nivel_estudios_max_id: model.nivel_estudios_max_id,
            nombres: model.nombres,
            apellido_primero: model.apellido_primero,
            apellido_segundo: model.apellido_segundo,
            numero_empleado: model.numero_empleado,
            rfc: model.rfc,
            curp: model.curp,
            email: model.email,
            email_secundario: model.email_secundario,
            telefono_personal: model.telefono_personal,
            telefono_trabajo: model.telefono_trabajo,
            fecha_ingreso_gobierno: model.fecha_ingreso_gobierno,
            fecha_ingreso_pj: model.fecha_ingreso_pj,
            fecha_nacimiento: model.fecha_nacimiento,
            num_seguridad_social: model.num_seguridad_social,
            situacion: model.situacion.parse()?,
            sexo: model.sexo.parse()?,
            estado_civil: model.estado_civil.parse()?,
            madre: model.madre,
            nivel_estudios: model.nivel_estudios.as_deref().map(str::parse).transpose()?,
            cedula_profesional: model.cedula_profesional,
            observaciones: model.observaciones,
            domicilio_fiscal_calle: model.domicilio_fiscal_calle,
            domicilio_fiscal_numero_exterior: model.domicilio_fiscal_numero_exterior,
            domicilio_fiscal_numero_interior: model.domicilio_fiscal_numero_interior,
            domicilio_fiscal_colonia: model.domicilio_fiscal_colonia,
            domicilio_fiscal_municipio: model.domicilio_fiscal_municipio,
            domicilio_fiscal_estado: model.domicilio_fiscal_estado,
            domicilio_fiscal_cp: model.domicilio_fiscal_cp,
            fecha_baja: model.fecha_baja,
            falta_papeleria: model.falta_papeleria,
            creado: model.creado,
            modificado: model.modificado,
            estatus: model.estatus.parse()?,
        })
    }
}

impl PgRecord for PersonaModel {
    type Entity = Persona;
    const COLUMNS: &'static [&'static str] = &[
        "carrera_id",
        "nivel_estudios_max_id",
        "nombres",
        "apellido_primero",
        "apellido_segundo",
        "numero_empleado",
        "rfc",
        "curp",
        "email",
        "email_secundario",
        "telefono_personal",
        "telefono_trabajo",
        "fecha_ingreso_gobierno",
        "fecha_ingreso_pj",
        "fecha_nacimiento",
        "num_seguridad_social",
        "situacion",
        "sexo",
        "estado_civil",
        "madre",
        "nivel_estudios",
        "cedula_profesional",
        "observaciones",
        "domicilio_fiscal_calle",
        "domicilio_fiscal_numero_exterior",
        "domicilio_fiscal_numero_interior",
        "domicilio_fiscal_colonia",
        "domicilio_fiscal_municipio",
        "domicilio_fiscal_estado",
        "domicilio_fiscal_cp",
        "fecha_baja",
        "falta_papeleria",
    ];

    fn bind_columns<'q>(entity: &'q Persona, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query
            .bind(entity.carrera_id)
            .bind(entity.nivel_estudios_max_id)
            .bind(&entity.nombres)
            .bind(&entity.apellido_primero)
            .bind(&entity.apellido_segundo)
            .bind(entity.numero_empleado)
            .bind(&entity.rfc)
            .bind(&entity.curp)
            .bind(&entity.email)
            .bind(&entity.email_secundario)
            .bind(&entity.telefono_personal)
            .bind(&entity.telefono_trabajo)
            .bind(entity.fecha_ingreso_gobierno)
            .bind(entity.fecha_ingreso_pj)
            .bind(entity.fecha_nacimiento)
            .bind(&entity.num_seguridad_social)
            .bind(entity.situacion.code())
            .bind(entity.sexo.code())
            .bind(entity.estado_civil.code())
            .bind(entity.madre)
            .bind(entity.nivel_estudios.map(|v| v.code()))
            .bind(&entity.cedula_profesional)
            .bind(&entity.observaciones)
            .bind(&entity.domicilio_fiscal_calle)
            .bind(&entity.domicilio_fiscal_numero_exterior)
            .bind(&entity.domicilio_fiscal_numero_interior)
            .bind(&entity.domicilio_fiscal_colonia)
            .bind(&entity.domicilio_fiscal_municipio)
            .bind(&entity.domicilio_fiscal_estado)
            .bind(entity.domicilio_fiscal_cp)
            .bind(entity.fecha_baja)
            .bind(entity.falta_papeleria)
    }
}
