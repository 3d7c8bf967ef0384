//! Leaves and disabilities of a persona

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::{Estatus, Periodo, Tabla};

coded_enum! {
    TipoLicencia, "tipo" {
        SinEspecificar => ("SIN ESPECIFICAR", "Sin especificar"),
        Enfermedad => ("ENFERMEDAD", "Enfermedad"),
        Permiso => ("PERMISO", "Permiso"),
        Vacaciones => ("VACACIONES", "Vacaciones"),
        Otro => ("OTRO", "Otro"),
    }
}

coded_enum! {
    Region, "region" {
        SinDefinir => ("SIN DEFINIR", "Sin Definir"),
        Carbonifera => ("CARBONIFERA", "Carbonífera"),
        Sureste => ("SURESTE", "Sureste"),
        Centro => ("CENTRO", "Centro"),
        Norte => ("NORTE", "Norte"),
        Laguna => ("LAGUNA", "Laguna"),
    }
}

/// Leave of absence
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Licencia {
    pub id: i32,
    pub persona_id: i32,
    pub tipo: TipoLicencia,
    pub fecha_inicio: NaiveDate,
    pub fecha_termino: NaiveDate,
    pub con_goce: bool,
    pub motivo: String,
    /// Position title held when the leave started
    pub puesto_nombre: Option<String>,
    pub creado: DateTime<Utc>,
    pub modificado: DateTime<Utc>,
    pub estatus: Estatus,
}

impl Licencia {
    pub fn periodo(&self) -> Result<Periodo, DomainError> {
        Periodo::new(self.fecha_inicio, Some(self.fecha_termino))
    }

    /// Inclusive length in days
    pub fn dias(&self) -> i64 {
        (self.fecha_termino - self.fecha_inicio).num_days() + 1
    }
}

impl_entity!(Licencia, Tabla::Licencias);

/// Medical disability
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Incapacidad {
    pub id: i32,
    pub persona_id: i32,
    pub fecha_inicio: NaiveDate,
    pub fecha_termino: NaiveDate,
    pub clave: String,
    pub region: Region,
    pub motivo: String,
    pub puesto_nombre: String,
    pub creado: DateTime<Utc>,
    pub modificado: DateTime<Utc>,
    pub estatus: Estatus,
}

impl Incapacidad {
    pub fn periodo(&self) -> Result<Periodo, DomainError> {
        Periodo::new(self.fecha_inicio, Some(self.fecha_termino))
    }

    /// Inclusive length in days
    pub fn dias(&self) -> i64 {
        (self.fecha_termino - self.fecha_inicio).num_days() + 1
    }
}

impl_entity!(Incapacidad, Tabla::Incapacidades);
