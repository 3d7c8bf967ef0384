//! Listado - list filter and result page

use serde::{Deserialize, Serialize};

use super::Estatus;

/// Default page size
pub const DEFAULT_LIMIT: i64 = 10;

/// Maximum page size
pub const MAX_LIMIT: i64 = 100;

/// Filter shared by every list operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listado {
    pub estatus: Estatus,
    pub offset: i64,
    pub limit: i64,
    /// Restrict to rows owned by this parent (e.g. the Persona of a Licencia)
    pub padre_id: Option<i32>,
}

impl Listado {
    pub fn new(estatus: Estatus, offset: i64, limit: i64) -> Self {
        Self {
            estatus,
            offset: offset.max(0),
            limit: limit.clamp(1, MAX_LIMIT),
            padre_id: None,
        }
    }

    pub fn activos() -> Self {
        Self::default()
    }

    pub fn with_padre(mut self, padre_id: i32) -> Self {
        self.padre_id = Some(padre_id);
        self
    }
}

impl Default for Listado {
    fn default() -> Self {
        Self::new(Estatus::Activo, 0, DEFAULT_LIMIT)
    }
}

/// One page of results plus the total row count for the filter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagina<T> {
    pub items: Vec<T>,
    pub total: i64,
}

impl<T> Pagina<T> {
    pub fn new(items: Vec<T>, total: i64) -> Self {
        Self { items, total }
    }

    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
        }
    }

    /// Convert every item, keeping the total
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Pagina<U> {
        Pagina {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
        }
    }
}
