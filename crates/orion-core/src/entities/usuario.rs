//! Usuario entity - an authenticated identity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{Estatus, Tabla};

/// User account
///
/// The password hash is never loaded into this struct; it is read and
/// written through dedicated repository calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usuario {
    pub id: i32,
    pub email: String,
    pub nombres: String,
    pub apellido_paterno: String,
    pub apellido_materno: String,
    pub curp: String,
    pub puesto: String,
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    pub api_key_expiracion: Option<DateTime<Utc>>,
    pub creado: DateTime<Utc>,
    pub modificado: DateTime<Utc>,
    pub estatus: Estatus,
}

impl Usuario {
    pub fn new(
        email: impl Into<String>,
        nombres: impl Into<String>,
        apellido_paterno: impl Into<String>,
        apellido_materno: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            email: email.into(),
            nombres: nombres.into(),
            apellido_paterno: apellido_paterno.into(),
            apellido_materno: apellido_materno.into(),
            curp: String::new(),
            puesto: String::new(),
            api_key: None,
            api_key_expiracion: None,
            creado: now,
            modificado: now,
            estatus: Estatus::Activo,
        }
    }

    /// Given names followed by both surnames
    pub fn nombre(&self) -> String {
        [
            self.nombres.as_str(),
            self.apellido_paterno.as_str(),
            self.apellido_materno.as_str(),
        ]
        .iter()
        .filter(|parte| !parte.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
    }

    /// Check whether the API key is set and not expired at `ahora`
    pub fn api_key_vigente(&self, ahora: DateTime<Utc>) -> bool {
        match (&self.api_key, self.api_key_expiracion) {
            (Some(key), Some(expiracion)) => !key.is_empty() && expiracion > ahora,
            _ => false,
        }
    }
}

impl_entity!(Usuario, Tabla::Usuarios);

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_nombre_completo() {
        let usuario = Usuario::new("ana@pjecz.gob.mx", "ANA MARIA", "LOPEZ", "");
        assert_eq!(usuario.nombre(), "ANA MARIA LOPEZ");
    }

    #[test]
    fn test_api_key_vigente() {
        let ahora = Utc::now();
        let mut usuario = Usuario::new("a@b.mx", "A", "B", "C");
        assert!(!usuario.api_key_vigente(ahora));

        usuario.api_key = Some("abc".to_string());
        usuario.api_key_expiracion = Some(ahora + Duration::days(1));
        assert!(usuario.api_key_vigente(ahora));

        usuario.api_key_expiracion = Some(ahora - Duration::days(1));
        assert!(!usuario.api_key_vigente(ahora));
    }

    #[test]
    fn test_api_key_not_serialized() {
        let mut usuario = Usuario::new("a@b.mx", "A", "B", "C");
        usuario.api_key = Some("secret".to_string());
        let json = serde_json::to_string(&usuario).unwrap();
        assert!(!json.contains("secret"));
    }
}
