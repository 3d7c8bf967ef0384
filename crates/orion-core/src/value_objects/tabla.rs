//! Tabla - every persistent entity kind, with its table, module and route

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Persistent entity kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tabla {
    // Authorization
    Modulos,
    Roles,
    Permisos,
    Usuarios,
    UsuariosRoles,
    Bitacoras,
    EntradasSalidas,
    Tareas,

    // Catalogs
    Distritos,
    Organos,
    CentrosTrabajos,
    Areas,
    Puestos,
    PuestosFunciones,
    NivelesAcademicos,
    Bancos,
    Carreras,
    Turnos,
    Atribuciones,
    AtribucionesCt,

    // Persona and satellites
    Personas,
    Domicilios,
    PersonasDomicilios,
    HistorialPuestos,
    HistorialAcademicos,
    Licencias,
    Incapacidades,
    PersonasAdjuntos,
    PersonasFotografias,
    PersonasNombramientos,
}

impl Tabla {
    pub const ALL: [Tabla; 30] = [
        Tabla::Modulos,
        Tabla::Roles,
        Tabla::Permisos,
        Tabla::Usuarios,
        Tabla::UsuariosRoles,
        Tabla::Bitacoras,
        Tabla::EntradasSalidas,
        Tabla::Tareas,
        Tabla::Distritos,
        Tabla::Organos,
        Tabla::CentrosTrabajos,
        Tabla::Areas,
        Tabla::Puestos,
        Tabla::PuestosFunciones,
        Tabla::NivelesAcademicos,
        Tabla::Bancos,
        Tabla::Carreras,
        Tabla::Turnos,
        Tabla::Atribuciones,
        Tabla::AtribucionesCt,
        Tabla::Personas,
        Tabla::Domicilios,
        Tabla::PersonasDomicilios,
        Tabla::HistorialPuestos,
        Tabla::HistorialAcademicos,
        Tabla::Licencias,
        Tabla::Incapacidades,
        Tabla::PersonasAdjuntos,
        Tabla::PersonasFotografias,
        Tabla::PersonasNombramientos,
    ];

    /// SQL table name
    pub const fn nombre(self) -> &'static str {
        match self {
            Self::Modulos => "modulos",
            Self::Roles => "roles",
            Self::Permisos => "permisos",
            Self::Usuarios => "usuarios",
            Self::UsuariosRoles => "usuarios_roles",
            Self::Bitacoras => "bitacoras",
            Self::EntradasSalidas => "entradas_salidas",
            Self::Tareas => "tareas",
            Self::Distritos => "distritos",
            Self::Organos => "organos",
            Self::CentrosTrabajos => "centros_trabajos",
            Self::Areas => "areas",
            Self::Puestos => "puestos",
            Self::PuestosFunciones => "puestos_funciones",
            Self::NivelesAcademicos => "niveles_academicos",
            Self::Bancos => "bancos",
            Self::Carreras => "carreras",
            Self::Turnos => "turnos",
            Self::Atribuciones => "atribuciones",
            Self::AtribucionesCt => "atribuciones_ct",
            Self::Personas => "personas",
            Self::Domicilios => "domicilios",
            Self::PersonasDomicilios => "personas_domicilios",
            Self::HistorialPuestos => "historial_puestos",
            Self::HistorialAcademicos => "historial_academicos",
            Self::Licencias => "licencias",
            Self::Incapacidades => "incapacidades",
            Self::PersonasAdjuntos => "personas_adjuntos",
            Self::PersonasFotografias => "personas_fotografias",
            Self::PersonasNombramientos => "personas_nombramientos",
        }
    }

    /// Name of the module that gates this table
    pub const fn modulo(self) -> &'static str {
        match self {
            Self::Modulos => "MODULOS",
            Self::Roles => "ROLES",
            Self::Permisos => "PERMISOS",
            Self::Usuarios => "USUARIOS",
            Self::UsuariosRoles => "USUARIOS ROLES",
            Self::Bitacoras => "BITACORAS",
            Self::EntradasSalidas => "ENTRADAS SALIDAS",
            Self::Tareas => "TAREAS",
            Self::Distritos => "DISTRITOS",
            Self::Organos => "ORGANOS",
            Self::CentrosTrabajos => "CENTROS TRABAJOS",
            Self::Areas => "AREAS",
            Self::Puestos => "PUESTOS",
            Self::PuestosFunciones => "PUESTOS FUNCIONES",
            Self::NivelesAcademicos => "NIVELES ACADEMICOS",
            Self::Bancos => "BANCOS",
            Self::Carreras => "CARRERAS",
            Self::Turnos => "TURNOS",
            Self::Atribuciones => "ATRIBUCIONES",
            Self::AtribucionesCt => "ATRIBUCIONES CT",
            Self::Personas => "PERSONAS",
            Self::Domicilios => "DOMICILIOS",
            Self::PersonasDomicilios => "PERSONAS DOMICILIOS",
            Self::HistorialPuestos => "HISTORIAL PUESTOS",
            Self::HistorialAcademicos => "HISTORIAL ACADEMICOS",
            Self::Licencias => "LICENCIAS",
            Self::Incapacidades => "INCAPACIDADES",
            Self::PersonasAdjuntos => "PERSONAS ADJUNTOS",
            Self::PersonasFotografias => "PERSONAS FOTOGRAFIAS",
            Self::PersonasNombramientos => "PERSONAS NOMBRAMIENTOS",
        }
    }

    /// Singular entity name used in audit descriptions
    pub const fn entidad(self) -> &'static str {
        match self {
            Self::Modulos => "Modulo",
            Self::Roles => "Rol",
            Self::Permisos => "Permiso",
            Self::Usuarios => "Usuario",
            Self::UsuariosRoles => "Usuario-Rol",
            Self::Bitacoras => "Bitacora",
            Self::EntradasSalidas => "Entrada-Salida",
            Self::Tareas => "Tarea",
            Self::Distritos => "Distrito",
            Self::Organos => "Organo",
            Self::CentrosTrabajos => "Centro de Trabajo",
            Self::Areas => "Area",
            Self::Puestos => "Puesto",
            Self::PuestosFunciones => "Puesto Funcion",
            Self::NivelesAcademicos => "Nivel Academico",
            Self::Bancos => "Banco",
            Self::Carreras => "Carrera",
            Self::Turnos => "Turno",
            Self::Atribuciones => "Atribucion",
            Self::AtribucionesCt => "Atribucion CT",
            Self::Personas => "Persona",
            Self::Domicilios => "Domicilio",
            Self::PersonasDomicilios => "Persona-Domicilio",
            Self::HistorialPuestos => "Historial de Puesto",
            Self::HistorialAcademicos => "Historial Academico",
            Self::Licencias => "Licencia",
            Self::Incapacidades => "Incapacidad",
            Self::PersonasAdjuntos => "Archivo Adjunto",
            Self::PersonasFotografias => "Fotografia",
            Self::PersonasNombramientos => "Nombramiento",
        }
    }

    /// Route of the detail view, without the id
    pub fn ruta(self) -> String {
        format!("/{}", self.nombre())
    }

    /// Detail URL of one row
    pub fn url(self, id: impl fmt::Display) -> String {
        format!("/{}/{}", self.nombre(), id)
    }
}

impl fmt::Display for Tabla {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.nombre())
    }
}

impl FromStr for Tabla {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tabla| tabla.nombre() == s)
            .ok_or_else(|| DomainError::validation(format!("Unknown table: {s}")))
    }
}

/// Natural keys that must be unique across rows of any status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CampoUnico {
    AreaNombre,
    BancoNombre,
    CarreraNombre,
    CentroTrabajoClave,
    DistritoClave,
    ModuloNombre,
    NivelAcademicoClave,
    OrganoClave,
    PersonaCurp,
    PersonaNumeroEmpleado,
    PuestoClave,
    RolNombre,
    TurnoNombre,
    UsuarioEmail,
}

impl CampoUnico {
    pub const fn tabla(self) -> Tabla {
        match self {
            Self::AreaNombre => Tabla::Areas,
            Self::BancoNombre => Tabla::Bancos,
            Self::CarreraNombre => Tabla::Carreras,
            Self::CentroTrabajoClave => Tabla::CentrosTrabajos,
            Self::DistritoClave => Tabla::Distritos,
            Self::ModuloNombre => Tabla::Modulos,
            Self::NivelAcademicoClave => Tabla::NivelesAcademicos,
            Self::OrganoClave => Tabla::Organos,
            Self::PersonaCurp | Self::PersonaNumeroEmpleado => Tabla::Personas,
            Self::PuestoClave => Tabla::Puestos,
            Self::RolNombre => Tabla::Roles,
            Self::TurnoNombre => Tabla::Turnos,
            Self::UsuarioEmail => Tabla::Usuarios,
        }
    }

    /// SQL column holding the key
    pub const fn columna(self) -> &'static str {
        match self {
            Self::AreaNombre
            | Self::BancoNombre
            | Self::CarreraNombre
            | Self::ModuloNombre
            | Self::RolNombre
            | Self::TurnoNombre => "nombre",
            Self::CentroTrabajoClave
            | Self::DistritoClave
            | Self::NivelAcademicoClave
            | Self::OrganoClave
            | Self::PuestoClave => "clave",
            Self::PersonaCurp => "curp",
            Self::PersonaNumeroEmpleado => "numero_empleado",
            Self::UsuarioEmail => "email",
        }
    }

    /// User-facing rejection message
    pub fn mensaje(self) -> &'static str {
        match self.columna() {
            "nombre" => "El nombre ya está en uso. Debe de ser único.",
            "clave" => "La clave ya está en uso. Debe de ser única.",
            "email" => "El e-mail ya está en uso. Debe de ser único.",
            "curp" => "El CURP ya está en uso. Debe de ser único.",
            _ => "El número de empleado ya está en uso. Debe de ser único.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_are_distinct() {
        let tablas: HashSet<_> = Tabla::ALL.iter().map(|t| t.nombre()).collect();
        let modulos: HashSet<_> = Tabla::ALL.iter().map(|t| t.modulo()).collect();
        assert_eq!(tablas.len(), Tabla::ALL.len());
        assert_eq!(modulos.len(), Tabla::ALL.len());
    }

    #[test]
    fn test_module_name_follows_table_name() {
        for tabla in Tabla::ALL {
            assert_eq!(tabla.modulo(), tabla.nombre().to_uppercase().replace('_', " "));
        }
    }

    #[test]
    fn test_routes() {
        assert_eq!(Tabla::PersonasAdjuntos.ruta(), "/personas_adjuntos");
        assert_eq!(Tabla::Roles.url(5), "/roles/5");
        assert_eq!("centros_trabajos".parse::<Tabla>().unwrap(), Tabla::CentrosTrabajos);
        assert!("nope".parse::<Tabla>().is_err());
    }

    #[test]
    fn test_unique_fields() {
        assert_eq!(CampoUnico::RolNombre.tabla(), Tabla::Roles);
        assert_eq!(CampoUnico::DistritoClave.columna(), "clave");
        assert_eq!(
            CampoUnico::RolNombre.mensaje(),
            "El nombre ya está en uso. Debe de ser único."
        );
        assert_eq!(
            CampoUnico::PuestoClave.mensaje(),
            "La clave ya está en uso. Debe de ser única."
        );
        assert!(CampoUnico::PersonaCurp.mensaje().starts_with("El CURP"));
    }
}
