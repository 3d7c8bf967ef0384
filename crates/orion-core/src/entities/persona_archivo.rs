//! File-backed records of a persona: attachments, photos and appointments
//!
//! Rows are never replaced in place: a new row is created and the previous
//! one is logically deleted, so at most one row of each kind is active.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{Estatus, Tabla};

coded_enum! {
    /// Kind of attached document
    TipoAdjunto, "tipo" {
        Ine => ("INE", "INE"),
        ActaNacimiento => ("ACTA_NAC", "Acta de Nacimiento"),
        CedulaProfesional => ("CEDULA_PROF", "Cédula Profesional"),
        ConstanciaSituacionFiscal => ("CONST_SIT_FIS", "Constancia de Situación Fiscal"),
        CredencialPj => ("CREDENCIAL_PJ", "Credencial del Poder Judicial"),
        Curp => ("CURP", "CURP"),
        Nombramiento => ("NOMBRAMIENTO", "Nombramiento"),
        Titulo => ("TITULO", "Título"),
        Otro => ("OTRO", "Otro"),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonaAdjunto {
    pub id: i32,
    pub persona_id: i32,
    pub tipo: TipoAdjunto,
    pub descripcion: Option<String>,
    pub archivo: Option<String>,
    pub url: Option<String>,
    pub creado: DateTime<Utc>,
    pub modificado: DateTime<Utc>,
    pub estatus: Estatus,
}

impl_entity!(PersonaAdjunto, Tabla::PersonasAdjuntos);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonaFotografia {
    pub id: i32,
    pub persona_id: i32,
    pub archivo: Option<String>,
    pub url: Option<String>,
    pub creado: DateTime<Utc>,
    pub modificado: DateTime<Utc>,
    pub estatus: Estatus,
}

impl_entity!(PersonaFotografia, Tabla::PersonasFotografias);

/// Appointment document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonaNombramiento {
    pub id: i32,
    pub persona_id: i32,
    pub cargo: Option<String>,
    pub centro_trabajo: Option<String>,
    pub tipo: Option<String>,
    pub fecha_inicio: Option<NaiveDate>,
    pub fecha_fin: Option<NaiveDate>,
    pub archivo: Option<String>,
    pub url: Option<String>,
    pub creado: DateTime<Utc>,
    pub modificado: DateTime<Utc>,
    pub estatus: Estatus,
}

impl_entity!(PersonaNombramiento, Tabla::PersonasNombramientos);
