//! Positions, their functions and legal attributions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::describir;
use crate::value_objects::{Estatus, Tabla};

coded_enum! {
    /// Kind of office held
    TipoCargo, "tipo_cargo" {
        Administrativo => ("A", "A: Administrativo"),
        Actuario => ("AC", "AC: Actuario"),
        Defensor => ("D", "D: Defensor"),
        JuezPrimeraInstancia => ("JPI", "JPI: Juez Primera Instancia"),
        MagistradoAdolescentes => ("MTAA", "MTAA: Magistrado del Tribunal de Apelación de Adolecentes"),
        MagistradoConciliacion => ("MTCA", "MTCA: Magistrado del Tribunal de Concilación y Arbitraje"),
        MagistradoDistrital => ("MTD", "MTD: Magistrado Distrital"),
        MagistradoTsj => ("MTSJ", "MTSJ: Magistrado TSJ"),
        Secretario => ("S", "S: Secretario"),
    }
}

coded_enum! {
    /// Employment regime
    TipoEmpleado, "tipo_empleado" {
        Confianza => ("CONF", "CONF: Confianza"),
        Base => ("BASE", "BASE: Base"),
        Sindicalizado => ("SIND", "SIND: Sindicalizado"),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puesto {
    pub id: i32,
    pub clave: String,
    pub nombre: String,
    pub tipo_cargo: TipoCargo,
    pub tipo_empleado: TipoEmpleado,
    pub creado: DateTime<Utc>,
    pub modificado: DateTime<Utc>,
    pub estatus: Estatus,
}

impl Puesto {
    pub fn new(
        clave: impl Into<String>,
        nombre: impl Into<String>,
        tipo_cargo: TipoCargo,
        tipo_empleado: TipoEmpleado,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            clave: clave.into(),
            nombre: nombre.into(),
            tipo_cargo,
            tipo_empleado,
            creado: now,
            modificado: now,
            estatus: Estatus::Activo,
        }
    }

    pub fn descripcion(&self) -> String {
        describir(&self.clave, &self.nombre)
    }
}

impl_entity!(Puesto, Tabla::Puestos);

/// Concrete function performed under a position
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuestoFuncion {
    pub id: i32,
    pub puesto_id: i32,
    pub nombre: String,
    pub creado: DateTime<Utc>,
    pub modificado: DateTime<Utc>,
    pub estatus: Estatus,
}

impl_entity!(PuestoFuncion, Tabla::PuestosFunciones);

/// Legal attribution of a function at a work center
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Atribucion {
    pub id: i32,
    pub puesto_funcion_id: i32,
    pub centro_trabajo_id: i32,
    pub norma: String,
    pub fundamento: String,
    pub fragmento: String,
    pub tipo_cargo: Option<TipoCargo>,
    pub creado: DateTime<Utc>,
    pub modificado: DateTime<Utc>,
    pub estatus: Estatus,
}

impl_entity!(Atribucion, Tabla::Atribuciones);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DomainError;

    #[test]
    fn test_coded_enums_parse_codes() {
        assert_eq!("JPI".parse::<TipoCargo>().unwrap(), TipoCargo::JuezPrimeraInstancia);
        assert_eq!("SIND".parse::<TipoEmpleado>().unwrap(), TipoEmpleado::Sindicalizado);
        assert_eq!(TipoEmpleado::Confianza.label(), "CONF: Confianza");
    }

    #[test]
    fn test_coded_enum_rejects_unknown() {
        let err = "XX".parse::<TipoCargo>().unwrap_err();
        assert!(matches!(err, DomainError::InvalidCode { campo: "tipo_cargo", .. }));
        assert!(serde_json::from_str::<TipoEmpleado>("\"TEMP\"").is_err());
    }

    #[test]
    fn test_coded_enum_serializes_as_code() {
        assert_eq!(serde_json::to_string(&TipoCargo::Secretario).unwrap(), "\"S\"");
        let puesto = Puesto::new("P-01", "SECRETARIO", TipoCargo::Secretario, TipoEmpleado::Base);
        assert_eq!(puesto.descripcion(), "P-01: SECRETARIO");
    }
}
