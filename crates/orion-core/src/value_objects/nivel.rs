//! Nivel - totally ordered permission level
//!
//! Level N implies every capability of the levels below it, so a single
//! integer comparison answers any access question.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::error::DomainError;

/// Permission level held by a role over a module
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Nivel {
    /// Read only
    #[default]
    Ver = 1,
    /// Read and edit
    Modificar = 2,
    /// Read, edit and create
    Crear = 3,
    /// Everything, including delete and recover
    Administrar = 4,
}

impl Nivel {
    /// Deleting is granted together with creating
    pub const BORRAR: Nivel = Nivel::Crear;

    /// Every level, lowest first
    pub const ALL: [Nivel; 4] = [
        Nivel::Ver,
        Nivel::Modificar,
        Nivel::Crear,
        Nivel::Administrar,
    ];

    /// Persisted integer value
    #[inline]
    pub const fn value(self) -> i32 {
        self as i32
    }

    /// Human readable label
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ver => "VER",
            Self::Modificar => "VER y MODIFICAR",
            Self::Crear => "VER, MODIFICAR y CREAR",
            Self::Administrar => "ADMINISTRAR",
        }
    }

    /// Short upper-case name used in error messages
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ver => "VER",
            Self::Modificar => "MODIFICAR",
            Self::Crear => "CREAR",
            Self::Administrar => "ADMINISTRAR",
        }
    }

    /// Check whether this level covers the required one
    #[inline]
    pub fn satisfies(self, requerido: Nivel) -> bool {
        self >= requerido
    }
}

impl TryFrom<i32> for Nivel {
    type Error = DomainError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Ver),
            2 => Ok(Self::Modificar),
            3 => Ok(Self::Crear),
            4 => Ok(Self::Administrar),
            other => Err(DomainError::InvalidNivel(other)),
        }
    }
}

impl From<Nivel> for i32 {
    fn from(nivel: Nivel) -> Self {
        nivel.value()
    }
}

impl fmt::Display for Nivel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// Serialized as the integer level
impl Serialize for Nivel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i32(self.value())
    }
}

impl<'de> Deserialize<'de> for Nivel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = i32::deserialize(deserializer)?;
        Nivel::try_from(value).map_err(serde::de::Error::custom)
    }
}
