//! Addresses and their link to personas

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{Estatus, Tabla};

/// Postal address, shared through [`PersonaDomicilio`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domicilio {
    pub id: i32,
    pub estado: String,
    pub municipio: String,
    pub pais: String,
    pub calle: String,
    pub num_ext: String,
    pub num_int: String,
    pub colonia: String,
    pub cp: String,
    /// Full address, rebuilt on every save
    pub completo: String,
    pub creado: DateTime<Utc>,
    pub modificado: DateTime<Utc>,
    pub estatus: Estatus,
}

impl Domicilio {
    /// "calle #ext-int, colonia, municipio, estado, C.P. cp", skipping empty parts
    pub fn elaborar_completo(&self) -> String {
        let mut numero = String::new();
        if !self.num_ext.is_empty() {
            numero.push('#');
            numero.push_str(&self.num_ext);
            if !self.num_int.is_empty() {
                numero.push('-');
                numero.push_str(&self.num_int);
            }
        } else if !self.num_int.is_empty() {
            numero.push('#');
            numero.push_str(&self.num_int);
        }

        let calle = [self.calle.as_str(), numero.as_str()]
            .into_iter()
            .filter(|parte| !parte.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        let cp = if self.cp.is_empty() {
            String::new()
        } else {
            format!("C.P. {}", self.cp)
        };

        [
            calle.as_str(),
            self.colonia.as_str(),
            self.municipio.as_str(),
            self.estado.as_str(),
            cp.as_str(),
        ]
        .into_iter()
        .filter(|parte| !parte.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
    }

    /// Recompute `completo` from the parts
    pub fn actualizar_completo(&mut self) {
        self.completo = self.elaborar_completo();
    }
}

impl_entity!(Domicilio, Tabla::Domicilios);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonaDomicilio {
    pub id: i32,
    pub persona_id: i32,
    pub domicilio_id: i32,
    pub creado: DateTime<Utc>,
    pub modificado: DateTime<Utc>,
    pub estatus: Estatus,
}

impl_entity!(PersonaDomicilio, Tabla::PersonasDomicilios);

#[cfg(test)]
mod tests {
    use super::*;

    fn domicilio() -> Domicilio {
        Domicilio {
            estado: "COAHUILA".to_string(),
            municipio: "SALTILLO".to_string(),
            pais: "MEXICO".to_string(),
            calle: "HIDALGO".to_string(),
            num_ext: "100".to_string(),
            num_int: "B".to_string(),
            colonia: "CENTRO".to_string(),
            cp: "25000".to_string(),
            ..Domicilio::default()
        }
    }

    #[test]
    fn test_completo() {
        assert_eq!(
            domicilio().elaborar_completo(),
            "HIDALGO #100-B, CENTRO, SALTILLO, COAHUILA, C.P. 25000"
        );
    }

    #[test]
    fn test_completo_skips_empty_parts() {
        let mut d = domicilio();
        d.num_int.clear();
        d.colonia.clear();
        d.cp.clear();
        d.actualizar_completo();
        assert_eq!(d.completo, "HIDALGO #100, SALTILLO, COAHUILA");
    }
}
