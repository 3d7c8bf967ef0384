//! Domain entities - core business objects
//!
//! Every entity carries `id`, `creado`, `modificado` and `estatus`, and
//! shares the logical lifecycle defined by [`Entity`]. Nothing is ever
//! removed physically; `delete` and `recover` only flip the status.

use std::fmt;

use crate::value_objects::{Estatus, Tabla};

/// Implements [`Entity`] for a struct with the common lifecycle fields
macro_rules! impl_entity {
    ($tipo:ty, $tabla:expr) => {
        impl_entity!($tipo, $tabla, i32);
    };
    ($tipo:ty, $tabla:expr, $id:ty) => {
        impl $crate::entities::Entity for $tipo {
            type Id = $id;
            const TABLA: $crate::value_objects::Tabla = $tabla;

            fn id(&self) -> $id {
                self.id
            }

            fn estatus(&self) -> $crate::value_objects::Estatus {
                self.estatus
            }

            fn set_estatus(&mut self, estatus: $crate::value_objects::Estatus) {
                self.estatus = estatus;
                self.modificado = ::chrono::Utc::now();
            }
        }
    };
}

/// Declares an enum persisted as a short string code
macro_rules! coded_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $campo:literal {
            $($variant:ident => ($code:literal, $label:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Persisted code
            pub const fn code(self) -> &'static str {
                match self {
                    $(Self::$variant => $code),+
                }
            }

            /// Human readable label
            pub const fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::ALL[0]
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.code())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($code => Ok(Self::$variant),)+
                    other => Err($crate::error::DomainError::InvalidCode {
                        campo: $campo,
                        valor: other.to_string(),
                    }),
                }
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_str(self.code())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let code = String::deserialize(deserializer)?;
                code.parse().map_err(::serde::de::Error::custom)
            }
        }
    };
}

mod ausencia;
mod bitacora;
mod catalogo;
mod centro_trabajo;
mod domicilio;
mod historial;
mod modulo;
mod permiso;
mod persona;
mod persona_archivo;
mod puesto;
mod rol;
mod tarea;
mod usuario;

pub use ausencia::{Incapacidad, Licencia, Region, TipoLicencia};
pub use bitacora::{Bitacora, EntradaSalida, TipoEntradaSalida};
pub use catalogo::{Banco, Carrera, Distrito, NivelAcademico, Organo, Turno};
pub use centro_trabajo::{Area, AtribucionCt, CentroTrabajo};
pub use domicilio::{Domicilio, PersonaDomicilio};
pub use historial::{HistorialAcademico, HistorialPuesto};
pub use modulo::Modulo;
pub use permiso::Permiso;
pub use persona::{EstadoCivil, NivelEstudios, Persona, Sexo, Situacion};
pub use persona_archivo::{PersonaAdjunto, PersonaFotografia, PersonaNombramiento, TipoAdjunto};
pub use puesto::{Atribucion, Puesto, PuestoFuncion, TipoCargo, TipoEmpleado};
pub use rol::{Rol, UsuarioRol};
pub use tarea::{Tarea, PROGRESO_TERMINADO};
pub use usuario::Usuario;

/// Shared lifecycle of every persistent entity
pub trait Entity {
    type Id: Copy + fmt::Display + fmt::Debug + Send + Sync;

    /// Table this entity lives in
    const TABLA: Tabla;

    fn id(&self) -> Self::Id;

    fn estatus(&self) -> Estatus;

    /// Set the status and bump `modificado`
    fn set_estatus(&mut self, estatus: Estatus);

    #[inline]
    fn is_active(&self) -> bool {
        self.estatus().is_activo()
    }

    /// Flip Activo to Baja; `None` when already deleted
    fn delete(&mut self) -> Option<&mut Self>
    where
        Self: Sized,
    {
        if self.estatus().is_activo() {
            self.set_estatus(Estatus::Baja);
            Some(self)
        } else {
            None
        }
    }

    /// Flip Baja to Activo; `None` when already active
    fn recover(&mut self) -> Option<&mut Self>
    where
        Self: Sized,
    {
        if self.estatus().is_activo() {
            None
        } else {
            self.set_estatus(Estatus::Activo);
            Some(self)
        }
    }
}

/// "clave: nombre" for catalogs keyed by a clave
pub(crate) fn describir(clave: &str, nombre: &str) -> String {
    format!("{clave}: {nombre}")
}
