//! Estatus - logical lifecycle flag shared by every persistent entity

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Active or logically deleted
///
/// Persisted as a single character: `A` for active, `B` for deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Estatus {
    #[default]
    #[serde(rename = "A")]
    Activo,
    #[serde(rename = "B")]
    Baja,
}

impl Estatus {
    /// Persisted one-character code
    #[inline]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Activo => "A",
            Self::Baja => "B",
        }
    }

    #[inline]
    pub const fn is_activo(self) -> bool {
        matches!(self, Self::Activo)
    }

    /// The other state
    #[inline]
    pub const fn opuesto(self) -> Self {
        match self {
            Self::Activo => Self::Baja,
            Self::Baja => Self::Activo,
        }
    }
}

impl fmt::Display for Estatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Estatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(Self::Activo),
            "B" => Ok(Self::Baja),
            other => Err(DomainError::InvalidEstatus(other.to_string())),
        }
    }
}
