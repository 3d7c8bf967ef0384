//! Audit log entries and login/logout records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{Estatus, Tabla};

/// Append-only audit entry
///
/// Written in the same transaction as the mutation it describes and
/// never updated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bitacora {
    pub id: i32,
    pub modulo_id: i32,
    pub usuario_id: i32,
    pub descripcion: String,
    pub url: String,
    pub creado: DateTime<Utc>,
    pub modificado: DateTime<Utc>,
    pub estatus: Estatus,
}

impl_entity!(Bitacora, Tabla::Bitacoras);

coded_enum! {
    TipoEntradaSalida, "tipo" {
        Ingreso => ("INGRESO", "Ingresó"),
        Salio => ("SALIO", "Salió"),
    }
}

/// Login or logout of a user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntradaSalida {
    pub id: i32,
    pub usuario_id: i32,
    pub tipo: TipoEntradaSalida,
    pub direccion_ip: String,
    pub creado: DateTime<Utc>,
    pub modificado: DateTime<Utc>,
    pub estatus: Estatus,
}

impl EntradaSalida {
    pub fn new(usuario_id: i32, tipo: TipoEntradaSalida, direccion_ip: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            usuario_id,
            tipo,
            direccion_ip: direccion_ip.into(),
            creado: now,
            modificado: now,
            estatus: Estatus::Activo,
        }
    }
}

impl_entity!(EntradaSalida, Tabla::EntradasSalidas);
