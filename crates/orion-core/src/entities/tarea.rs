//! Tarea entity - a background job launched by a user
//!
//! The id is the job id assigned by the external queue, not a local sequence.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::value_objects::{Estatus, Tabla};

/// Progress at which a task counts as finished
pub const PROGRESO_TERMINADO: i32 = 100;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tarea {
    pub id: Uuid,
    pub usuario_id: i32,
    pub comando: String,
    pub mensaje: String,
    pub archivo: String,
    pub url: String,
    pub ha_terminado: bool,
    pub creado: DateTime<Utc>,
    pub modificado: DateTime<Utc>,
    pub estatus: Estatus,
}

impl Tarea {
    pub fn new(id: Uuid, usuario_id: i32, comando: impl Into<String>, mensaje: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            usuario_id,
            comando: comando.into(),
            mensaje: mensaje.into(),
            archivo: String::new(),
            url: String::new(),
            ha_terminado: false,
            creado: now,
            modificado: now,
            estatus: Estatus::Activo,
        }
    }

    pub fn terminado_con(progreso: i32) -> bool {
        progreso >= PROGRESO_TERMINADO
    }
}

impl_entity!(Tarea, Tabla::Tareas, Uuid);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Entity;

    #[test]
    fn test_id_comes_from_queue() {
        let id = Uuid::new_v4();
        let tarea = Tarea::new(id, 1, "personas.tasks.exportar", "Exportando");
        assert_eq!(tarea.id(), id);
        assert!(!tarea.ha_terminado);
    }

    #[test]
    fn test_terminado() {
        assert!(!Tarea::terminado_con(99));
        assert!(Tarea::terminado_con(100));
    }
}
