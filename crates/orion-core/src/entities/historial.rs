//! Time-sliced history records of a persona

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::{validar_anos, Estatus, Periodo, Tabla};

/// Position held by a persona over a period
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistorialPuesto {
    pub id: i32,
    pub persona_id: i32,
    pub puesto_funcion_id: i32,
    pub turno_id: i32,
    pub area: String,
    pub centro_trabajo: Option<String>,
    pub fecha_inicio: NaiveDate,
    pub fecha_termino: Option<NaiveDate>,
    pub nivel: Option<i32>,
    pub quinquenio: Option<i32>,
    pub nombramiento: Option<String>,
    pub tipo_nombramiento: Option<String>,
    pub observaciones: Option<String>,
    pub creado: DateTime<Utc>,
    pub modificado: DateTime<Utc>,
    pub estatus: Estatus,
}

impl HistorialPuesto {
    pub fn periodo(&self) -> Result<Periodo, DomainError> {
        Periodo::new(self.fecha_inicio, self.fecha_termino)
    }
}

impl_entity!(HistorialPuesto, Tabla::HistorialPuestos);

/// Schooling record of a persona
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistorialAcademico {
    pub id: i32,
    pub persona_id: i32,
    pub nivel_academico_id: i32,
    pub escuela: Option<String>,
    pub ciudad: Option<String>,
    pub ano_inicio: Option<i32>,
    pub ano_termino: Option<i32>,
    pub creado: DateTime<Utc>,
    pub modificado: DateTime<Utc>,
    pub estatus: Estatus,
}

impl HistorialAcademico {
    pub fn validar(&self) -> Result<(), DomainError> {
        validar_anos(self.ano_inicio, self.ano_termino)
    }
}

impl_entity!(HistorialAcademico, Tabla::HistorialAcademicos);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_periodo_rejects_inverted_dates() {
        let historial = HistorialPuesto {
            fecha_inicio: NaiveDate::from_ymd_opt(2020, 5, 1).unwrap(),
            fecha_termino: NaiveDate::from_ymd_opt(2020, 4, 1),
            ..HistorialPuesto::default()
        };
        assert!(historial.periodo().is_err());
    }

    #[test]
    fn test_academico_years() {
        let mut historial = HistorialAcademico {
            ano_inicio: Some(2005),
            ano_termino: Some(2010),
            ..HistorialAcademico::default()
        };
        assert!(historial.validar().is_ok());

        historial.ano_termino = Some(2001);
        assert!(historial.validar().is_err());
    }
}
