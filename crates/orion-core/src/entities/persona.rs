//! Persona entity - the employee record

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{Estatus, Tabla};

coded_enum! {
    Sexo, "sexo" {
        Hombre => ("H", "Hombre"),
        Mujer => ("M", "Mujer"),
    }
}

coded_enum! {
    EstadoCivil, "estado_civil" {
        Soltero => ("S", "S: Soltero"),
        Casado => ("C", "C: Casado"),
        Divorciado => ("D", "D: Divorciado"),
        UnionLibre => ("UL", "UL: Unión Libre"),
        Viudo => ("V", "V: Viudo"),
    }
}

coded_enum! {
    /// Employment situation
    Situacion, "situacion" {
        AltaDefinitiva => ("A.D.", "A.D: Alta Definitiva"),
        AltaInterina => ("A.I.", "A.I: Alta Interina"),
        AltaDefinitivaBeneficiarios => ("A.D.(B)", "A.D.(B): Alta Definitiva con Beneficiarios"),
        AltaDefinitivaSindicato => ("A.D.C.S.", "A.D.C.S: Alta Definitiva Comisionada al Sindicato"),
        AltaDefinitivaSuspendida => ("A.D.SUS", "A.D.SUS: Alta Definitiva Suspendida"),
        Asimilado => ("A.S.", "A.S. Asimilado"),
        Baja => ("B", "B: Baja"),
        ComisionEspecial => ("C.E.", "C.E: Comisión Especial"),
        LicenciaGravidez => ("L.G.", "L.G: Licencia por Gravidez"),
        LicenciaSinGoce => ("L.S.G.S.", "L.S.G.S: Licencia Sin Goce de Sueldo"),
        LicenciaPuestoConfianza => ("L.P.O.P.C.", "L.P.O.P.C: Licencia Para Ocupar Puesto de Confianza"),
        Vacante => ("V", "V: Vacante"),
        Pensionado => ("P", "P: Pensionado"),
    }
}

coded_enum! {
    /// Highest schooling level, payroll codes
    NivelEstudios, "nivel_estudios" {
        SinEstudios => ("00", "00: Sin Estudios"),
        Primaria => ("A0", "A0: Primaria"),
        CarreraComercial => ("B0", "B0: Carrera Comercial"),
        CarreraTecnica => ("C0", "C0: Carrera Técnica"),
        Secundaria => ("D0", "D0: Secundaria"),
        Bachillerato => ("E0", "E0: Bachillerato"),
        Normal => ("F0", "F0: Normal"),
        NormalSuperior => ("G0", "G0: Normal Superior"),
        Pasante => ("H0", "H0: Pasante Carrera Profesional"),
        Profesional => ("I0", "I0: Profesional"),
        Postgrado => ("J0", "J0: Postgrado"),
        Maestria => ("K0", "K0: Maestría"),
        Diplomado => ("L0", "L0: Diplomado/Especialidad"),
        Licenciatura => ("Z0", "Z0: Licenciatura"),
        Tecnico => ("Z1", "Z1: Técnico"),
        Doctorado => ("Z3", "Z3: Doctorado"),
    }
}

/// Employee record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Persona {
    pub id: i32,
    pub carrera_id: Option<i32>,
    pub nivel_estudios_max_id: Option<i32>,

    pub nombres: String,
    pub apellido_primero: String,
    pub apellido_segundo: Option<String>,
    pub numero_empleado: Option<i32>,
    pub rfc: String,
    pub curp: String,
    pub email: Option<String>,
    pub email_secundario: Option<String>,
    pub telefono_personal: Option<String>,
    pub telefono_trabajo: Option<String>,
    pub fecha_ingreso_gobierno: Option<NaiveDate>,
    pub fecha_ingreso_pj: Option<NaiveDate>,
    pub fecha_nacimiento: Option<NaiveDate>,
    pub num_seguridad_social: Option<String>,
    pub situacion: Situacion,
    pub sexo: Sexo,
    pub estado_civil: EstadoCivil,
    pub madre: bool,
    pub nivel_estudios: Option<NivelEstudios>,
    pub cedula_profesional: Option<String>,
    pub observaciones: Option<String>,

    // Domicilio fiscal
    pub domicilio_fiscal_calle: Option<String>,
    pub domicilio_fiscal_numero_exterior: Option<String>,
    pub domicilio_fiscal_numero_interior: Option<String>,
    pub domicilio_fiscal_colonia: Option<String>,
    pub domicilio_fiscal_municipio: Option<String>,
    pub domicilio_fiscal_estado: Option<String>,
    pub domicilio_fiscal_cp: Option<i32>,

    pub fecha_baja: Option<NaiveDate>,
    pub falta_papeleria: bool,

    pub creado: DateTime<Utc>,
    pub modificado: DateTime<Utc>,
    pub estatus: Estatus,
}

impl Persona {
    pub fn new(
        nombres: impl Into<String>,
        apellido_primero: impl Into<String>,
        rfc: impl Into<String>,
        curp: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            nombres: nombres.into(),
            apellido_primero: apellido_primero.into(),
            rfc: rfc.into(),
            curp: curp.into(),
            creado: now,
            modificado: now,
            ..Self::default()
        }
    }

    /// Given names followed by both surnames
    pub fn nombre_completo(&self) -> String {
        let mut nombre = format!("{} {}", self.nombres, self.apellido_primero);
        if let Some(segundo) = self.apellido_segundo.as_deref().filter(|s| !s.is_empty()) {
            nombre.push(' ');
            nombre.push_str(segundo);
        }
        nombre
    }
}

impl_entity!(Persona, Tabla::Personas);
