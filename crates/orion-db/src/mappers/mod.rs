//! Entity to model mappers
//!
//! - `TryFrom<Model> for Entity`: rows to domain objects, parsing coded columns
//! - [`PgRecord`]: the column list and bind order a model writes with

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

use orion_core::entities::Entity;
use orion_core::error::DomainError;
use orion_core::value_objects::Tabla;
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::QueryAs;
use sqlx::{FromRow, Postgres};

/// Typed query over a model
pub type PgQueryAs<'q, O> = QueryAs<'q, Postgres, O, PgArguments>;

/// A model backed by one table with the common lifecycle columns
///
/// `id`, `creado`, `modificado` and `estatus` are implied; `COLUMNS` lists
/// the remaining writable columns in the order `bind_columns` binds them.
pub trait PgRecord: for<'r> FromRow<'r, PgRow> + Send + Unpin + 'static {
    type Entity: Entity<Id = i32> + TryFrom<Self, Error = DomainError> + Send + Sync + 'static;

    const COLUMNS: &'static [&'static str];

    /// Foreign key matched by `Listado::padre_id`
    const PADRE: Option<&'static str> = None;

    fn bind_columns<'q>(entity: &'q Self::Entity, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self>;

    fn tabla() -> Tabla {
        <Self::Entity as Entity>::TABLA
    }

    /// Column list for SELECT and RETURNING
    fn select_list() -> String {
        let mut columns = Vec::with_capacity(Self::COLUMNS.len() + 4);
        columns.push("id");
        columns.extend_from_slice(Self::COLUMNS);
        columns.extend_from_slice(&["creado", "modificado", "estatus"]);
        columns.join(", ")
    }
}

/// Convert a batch of rows, failing on the first undecodable one
pub fn into_entities<M>(models: Vec<M>) -> Result<Vec<M::Entity>, DomainError>
where
    M: PgRecord,
{
    models
        .into_iter()
        .map(<M::Entity as TryFrom<M>>::try_from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DistritoModel, PermisoModel, UsuarioModel};

    #[test]
    fn test_select_list() {
        assert_eq!(
            DistritoModel::select_list(),
            "id, clave, nombre, creado, modificado, estatus"
        );
        assert_eq!(PermisoModel::tabla(), Tabla::Permisos);
        assert_eq!(PermisoModel::PADRE, Some("rol_id"));
        assert_eq!(DistritoModel::PADRE, None);
    }

    #[test]
    fn test_usuario_never_selects_password() {
        assert!(!UsuarioModel::select_list().contains("contrasena"));
    }
}
