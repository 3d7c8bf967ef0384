//! Persona database model

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct PersonaModel {
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
    pub situacion: String,
    pub sexo: String,
    pub estado_civil: String,
    pub madre: bool,
    pub nivel_estudios: Option<String>,
    pub cedula_profesional: Option<String>,
    pub observaciones: Option<String>,
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
    pub estatus: String,
}
