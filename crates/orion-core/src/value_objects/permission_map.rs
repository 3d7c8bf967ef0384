//! Permission map - effective per-module levels derived from role assignments
//!
//! A grant counts only when every hop of the chain is active:
//! usuario_rol → rol → permiso → modulo.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

use super::{Estatus, Nivel};

/// One user → role → permission → module chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Concesion {
    pub usuario_rol_estatus: Estatus,
    pub rol_estatus: Estatus,
    pub permiso_estatus: Estatus,
    pub modulo_estatus: Estatus,
    pub nivel: Nivel,
    pub modulo: String,
    pub nombre_corto: String,
    pub icono: String,
    pub ruta: String,
    pub en_navegacion: bool,
    pub en_plataforma: bool,
}

impl Concesion {
    /// Check whether every hop of the chain is active
    pub fn is_vigente(&self) -> bool {
        self.usuario_rol_estatus.is_activo()
            && self.rol_estatus.is_activo()
            && self.permiso_estatus.is_activo()
            && self.modulo_estatus.is_activo()
    }
}

/// Highest level per module name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionMap(BTreeMap<String, Nivel>);

impl PermissionMap {
    /// Fold the chains of a user into the map
    pub fn from_concesiones<'a, I>(concesiones: I) -> Self
    where
        I: IntoIterator<Item = &'a Concesion>,
    {
        let mut map: BTreeMap<String, Nivel> = BTreeMap::new();
        for concesion in concesiones.into_iter().filter(|c| c.is_vigente()) {
            map.entry(concesion.modulo.clone())
                .and_modify(|nivel| *nivel = (*nivel).max(concesion.nivel))
                .or_insert(concesion.nivel);
        }
        Self(map)
    }

    /// Level held on a module, if any
    pub fn nivel(&self, modulo: &str) -> Option<Nivel> {
        self.0.get(modulo).copied()
    }

    /// Check whether the user holds at least the required level
    #[inline]
    pub fn can(&self, modulo: &str, requerido: Nivel) -> bool {
        self.nivel(modulo)
            .is_some_and(|nivel| nivel.satisfies(requerido))
    }

    pub fn can_view(&self, modulo: &str) -> bool {
        self.can(modulo, Nivel::Ver)
    }

    pub fn can_edit(&self, modulo: &str) -> bool {
        self.can(modulo, Nivel::Modificar)
    }

    pub fn can_insert(&self, modulo: &str) -> bool {
        self.can(modulo, Nivel::Crear)
    }

    pub fn can_admin(&self, modulo: &str) -> bool {
        self.can(modulo, Nivel::Administrar)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Nivel)> {
        self.0.iter().map(|(modulo, nivel)| (modulo.as_str(), *nivel))
    }
}

/// Navigation menu entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub nombre: String,
    pub nombre_corto: String,
    pub icono: String,
    pub ruta: String,
}

/// Distinct navigable modules reachable through active chains, sorted by short name
pub fn menu_principal(concesiones: &[Concesion]) -> Vec<MenuItem> {
    let mut vistos = HashSet::new();
    let mut menu: Vec<MenuItem> = concesiones
        .iter()
        .filter(|c| c.is_vigente() && c.en_navegacion && c.en_plataforma)
        .filter(|c| vistos.insert(c.modulo.as_str()))
        .map(|c| MenuItem {
            nombre: c.modulo.clone(),
            nombre_corto: c.nombre_corto.clone(),
            icono: c.icono.clone(),
            ruta: c.ruta.clone(),
        })
        .collect();
    menu.sort_by(|a, b| a.nombre_corto.cmp(&b.nombre_corto));
    menu
}

#[cfg(test)]
mod tests {
    use super::*;

    fn concesion(modulo: &str, nivel: Nivel) -> Concesion {
        Concesion {
            usuario_rol_estatus: Estatus::Activo,
            rol_estatus: Estatus::Activo,
            permiso_estatus: Estatus::Activo,
            modulo_estatus: Estatus::Activo,
            nivel,
            modulo: modulo.to_string(),
            nombre_corto: modulo.to_lowercase(),
            icono: "icon".to_string(),
            ruta: format!("/{}", modulo.to_lowercase()),
            en_navegacion: true,
            en_plataforma: true,
        }
    }

    #[test]
    fn test_no_roles_means_no_access() {
        let map = PermissionMap::from_concesiones(&[]);
        assert!(map.is_empty());
        assert!(!map.can("AREAS", Nivel::Ver));
        assert!(!map.can_view("USUARIOS"));
    }

    #[test]
    fn test_level_three_can_create_but_not_admin() {
        let map = PermissionMap::from_concesiones(&[concesion("PERSONAS", Nivel::Crear)]);
        assert!(map.can_view("PERSONAS"));
        assert!(map.can_edit("PERSONAS"));
        assert!(map.can_insert("PERSONAS"));
        assert!(!map.can_admin("PERSONAS"));
    }

    #[test]
    fn test_capturista_on_areas() {
        let map = PermissionMap::from_concesiones(&[concesion("AREAS", Nivel::Modificar)]);
        assert!(map.can("AREAS", Nivel::Modificar));
        assert!(!map.can("AREAS", Nivel::Crear));
    }

    #[test]
    fn test_keeps_highest_level_across_roles() {
        let concesiones = vec![
            concesion("ROLES", Nivel::Ver),
            concesion("ROLES", Nivel::Administrar),
            concesion("ROLES", Nivel::Modificar),
        ];
        let map = PermissionMap::from_concesiones(&concesiones);
        assert_eq!(map.nivel("ROLES"), Some(Nivel::Administrar));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_deleted_hop_excludes_grant() {
        let hops: [fn(&mut Concesion); 4] = [
            |c| c.usuario_rol_estatus = Estatus::Baja,
            |c| c.rol_estatus = Estatus::Baja,
            |c| c.permiso_estatus = Estatus::Baja,
            |c| c.modulo_estatus = Estatus::Baja,
        ];
        for apagar in hops {
            let mut c = concesion("BANCOS", Nivel::Administrar);
            apagar(&mut c);
            let map = PermissionMap::from_concesiones(&[c.clone()]);
            assert!(!map.can_view("BANCOS"));
            assert!(menu_principal(&[c]).is_empty());
        }
    }

    #[test]
    fn test_menu_is_distinct_filtered_and_sorted() {
        let mut oculto = concesion("BITACORAS", Nivel::Ver);
        oculto.en_navegacion = false;
        let mut otra_plataforma = concesion("TAREAS", Nivel::Ver);
        otra_plataforma.en_plataforma = false;

        let concesiones = vec![
            concesion("USUARIOS", Nivel::Ver),
            concesion("AREAS", Nivel::Crear),
            concesion("USUARIOS", Nivel::Administrar),
            oculto,
            otra_plataforma,
        ];
        let menu = menu_principal(&concesiones);
        let nombres: Vec<_> = menu.iter().map(|m| m.nombre.as_str()).collect();
        assert_eq!(nombres, vec!["AREAS", "USUARIOS"]);
    }
}
