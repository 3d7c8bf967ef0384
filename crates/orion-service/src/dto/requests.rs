//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.
//! Create and edit share one body per entity; text is sanitized afterwards
//! when the request fills the entity.

use chrono::NaiveDate;
use orion_core::entities::{Region, TipoAdjunto, TipoCargo, TipoEmpleado, TipoLicencia};
use orion_core::{Estatus, EstadoCivil, Listado, Nivel, NivelEstudios, Sexo, Situacion};
use serde::Deserialize;
use validator::Validate;

fn verdadero() -> bool {
    true
}

// ============================================================================
// Auth Requests
// ============================================================================

/// Login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "E-mail inválido"))]
    pub email: String,

    #[validate(length(min = 1, message = "La contraseña es obligatoria."))]
    pub password: String,
}

/// Token refresh request
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Logout request (optional refresh token to revoke)
#[derive(Debug, Clone, Deserialize, Default)]
pub struct LogoutRequest {
    pub refresh_token: Option<String>,
}

/// New password for a user
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PasswordRequest {
    #[validate(length(min = 8, max = 72, message = "La contraseña debe tener de 8 a 72 caracteres."))]
    pub password: String,
}

// ============================================================================
// Listing
// ============================================================================

/// Query string of every list endpoint
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ListQuery {
    pub estatus: Option<String>,
    pub start: Option<i64>,
    pub length: Option<i64>,
    /// Owner of satellite rows (e.g. the Persona of a Licencia)
    pub persona_id: Option<i32>,
}

impl ListQuery {
    /// Build the filter; an unknown status is a validation error
    pub fn listado(&self) -> Result<Listado, orion_core::DomainError> {
        let estatus = match self.estatus.as_deref() {
            Some(code) => code.parse()?,
            None => Estatus::Activo,
        };
        let listado = Listado::new(
            estatus,
            self.start.unwrap_or(0),
            self.length.unwrap_or(orion_core::value_objects::DEFAULT_LIMIT),
        );
        Ok(match self.persona_id {
            Some(padre_id) => listado.with_padre(padre_id),
            None => listado,
        })
    }
}

/// Persona search filters
#[derive(Debug, Clone, Deserialize, Default)]
pub struct PersonaSearchQuery {
    pub nombre: Option<String>,
    pub curp: Option<String>,
    pub start: Option<i64>,
    pub length: Option<i64>,
}

/// Audit log filters
#[derive(Debug, Clone, Deserialize, Default)]
pub struct BitacoraQuery {
    pub modulo: Option<String>,
    pub usuario_id: Option<i32>,
    pub start: Option<i64>,
    pub length: Option<i64>,
}

// ============================================================================
// Authorization Requests
// ============================================================================

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ModuloRequest {
    #[validate(length(min = 1, max = 256, message = "El nombre es obligatorio."))]
    pub nombre: String,

    #[validate(length(min = 1, max = 64, message = "El nombre corto es obligatorio."))]
    pub nombre_corto: String,

    #[validate(length(max = 48, message = "El icono no debe exceder 48 caracteres."))]
    #[serde(default)]
    pub icono: String,

    #[validate(length(max = 64, message = "La ruta no debe exceder 64 caracteres."))]
    #[serde(default)]
    pub ruta: String,

    #[serde(default)]
    pub en_navegacion: bool,

    #[serde(default)]
    pub en_plataforma: bool,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RolRequest {
    #[validate(length(min = 1, max = 256, message = "El nombre es obligatorio."))]
    pub nombre: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PermisoRequest {
    #[validate(range(min = 1, message = "El rol es obligatorio."))]
    pub rol_id: i32,

    #[validate(range(min = 1, message = "El módulo es obligatorio."))]
    pub modulo_id: i32,

    pub nivel: Nivel,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UsuarioRequest {
    #[validate(email(message = "E-mail inválido"))]
    pub email: String,

    #[validate(length(min = 1, max = 256, message = "Los nombres son obligatorios."))]
    pub nombres: String,

    #[validate(length(min = 1, max = 256, message = "El apellido paterno es obligatorio."))]
    pub apellido_paterno: String,

    #[validate(length(max = 256, message = "El apellido materno no debe exceder 256 caracteres."))]
    #[serde(default)]
    pub apellido_materno: String,

    #[serde(default)]
    pub curp: String,

    #[validate(length(max = 256, message = "El puesto no debe exceder 256 caracteres."))]
    #[serde(default)]
    pub puesto: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UsuarioRolRequest {
    #[validate(range(min = 1, message = "El usuario es obligatorio."))]
    pub usuario_id: i32,

    #[validate(range(min = 1, message = "El rol es obligatorio."))]
    pub rol_id: i32,
}

// ============================================================================
// Catalog Requests
// ============================================================================

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct DistritoRequest {
    #[validate(length(min = 1, max = 16, message = "La clave debe tener de 1 a 16 caracteres."))]
    pub clave: String,

    #[validate(length(min = 1, max = 256, message = "El nombre es obligatorio."))]
    pub nombre: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct OrganoRequest {
    #[validate(length(min = 1, max = 16, message = "La clave debe tener de 1 a 16 caracteres."))]
    pub clave: String,

    #[validate(length(min = 1, max = 256, message = "El nombre es obligatorio."))]
    pub nombre: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NivelAcademicoRequest {
    #[validate(length(min = 1, max = 8, message = "La clave debe tener de 1 a 8 caracteres."))]
    pub clave: String,

    #[validate(length(min = 1, max = 256, message = "El nombre es obligatorio."))]
    pub nombre: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct BancoRequest {
    #[validate(length(min = 1, max = 256, message = "El nombre es obligatorio."))]
    pub nombre: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CarreraRequest {
    #[validate(length(min = 1, max = 256, message = "El nombre es obligatorio."))]
    pub nombre: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TurnoRequest {
    #[validate(length(min = 1, max = 256, message = "El nombre es obligatorio."))]
    pub nombre: String,

    #[validate(length(max = 256, message = "La descripción no debe exceder 256 caracteres."))]
    pub descripcion: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CentroTrabajoRequest {
    #[validate(range(min = 1, message = "El distrito es obligatorio."))]
    pub distrito_id: i32,

    #[validate(range(min = 1, message = "El órgano es obligatorio."))]
    pub organo_id: i32,

    #[validate(length(min = 1, max = 16, message = "La clave debe tener de 1 a 16 caracteres."))]
    pub clave: String,

    #[validate(length(min = 1, max = 256, message = "El nombre es obligatorio."))]
    pub nombre: String,

    #[validate(length(max = 48, message = "El teléfono no debe exceder 48 caracteres."))]
    pub telefono: Option<String>,

    #[validate(length(max = 24, message = "La extensión no debe exceder 24 caracteres."))]
    pub num_ext: Option<String>,

    #[serde(default = "verdadero")]
    pub activo: bool,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AreaRequest {
    #[validate(range(min = 1, message = "El centro de trabajo es obligatorio."))]
    pub centro_trabajo_id: i32,

    #[validate(length(min = 1, max = 256, message = "El nombre es obligatorio."))]
    pub nombre: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AtribucionCtRequest {
    #[validate(range(min = 1, message = "El área es obligatoria."))]
    pub area_id: i32,

    #[validate(length(min = 1, max = 256, message = "La norma es obligatoria."))]
    pub norma: String,

    #[validate(length(min = 1, max = 256, message = "El fundamento es obligatorio."))]
    pub fundamento: String,

    #[validate(length(min = 1, message = "El fragmento es obligatorio."))]
    pub fragmento: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PuestoRequest {
    #[validate(length(min = 1, max = 32, message = "La clave debe tener de 1 a 32 caracteres."))]
    pub clave: String,

    #[validate(length(min = 1, max = 256, message = "El nombre es obligatorio."))]
    pub nombre: String,

    pub tipo_cargo: TipoCargo,

    pub tipo_empleado: TipoEmpleado,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PuestoFuncionRequest {
    #[validate(range(min = 1, message = "El puesto es obligatorio."))]
    pub puesto_id: i32,

    #[validate(length(min = 1, max = 256, message = "El nombre es obligatorio."))]
    pub nombre: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AtribucionRequest {
    #[validate(range(min = 1, message = "La función del puesto es obligatoria."))]
    pub puesto_funcion_id: i32,

    #[validate(range(min = 1, message = "El centro de trabajo es obligatorio."))]
    pub centro_trabajo_id: i32,

    #[validate(length(min = 1, max = 256, message = "La norma es obligatoria."))]
    pub norma: String,

    #[validate(length(min = 1, max = 256, message = "El fundamento es obligatorio."))]
    pub fundamento: String,

    #[validate(length(min = 1, message = "El fragmento es obligatorio."))]
    pub fragmento: String,

    pub tipo_cargo: Option<TipoCargo>,
}

// ============================================================================
// Persona Requests
// ============================================================================

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PersonaRequest {
    pub carrera_id: Option<i32>,
    pub nivel_estudios_max_id: Option<i32>,

    #[validate(length(min = 1, max = 256, message = "Los nombres son obligatorios."))]
    pub nombres: String,

    #[validate(length(min = 1, max = 256, message = "El primer apellido es obligatorio."))]
    pub apellido_primero: String,

    #[validate(length(max = 256, message = "El segundo apellido no debe exceder 256 caracteres."))]
    pub apellido_segundo: Option<String>,

    #[validate(range(min = 1, message = "El número de empleado debe ser positivo."))]
    pub numero_empleado: Option<i32>,

    pub rfc: String,
    pub curp: String,

    #[validate(email(message = "E-mail inválido"))]
    pub email: Option<String>,

    #[validate(email(message = "E-mail secundario inválido"))]
    pub email_secundario: Option<String>,

    #[validate(length(max = 64, message = "El teléfono no debe exceder 64 caracteres."))]
    pub telefono_personal: Option<String>,

    #[validate(length(max = 64, message = "El teléfono no debe exceder 64 caracteres."))]
    pub telefono_trabajo: Option<String>,

    pub fecha_ingreso_gobierno: Option<NaiveDate>,
    pub fecha_ingreso_pj: Option<NaiveDate>,
    pub fecha_nacimiento: Option<NaiveDate>,

    #[validate(length(max = 24, message = "El número de seguridad social no debe exceder 24 caracteres."))]
    pub num_seguridad_social: Option<String>,

    #[serde(default)]
    pub situacion: Situacion,
    #[serde(default)]
    pub sexo: Sexo,
    #[serde(default)]
    pub estado_civil: EstadoCivil,
    #[serde(default)]
    pub madre: bool,
    pub nivel_estudios: Option<NivelEstudios>,

    #[validate(length(max = 16, message = "La cédula profesional no debe exceder 16 caracteres."))]
    pub cedula_profesional: Option<String>,

    pub observaciones: Option<String>,

    pub domicilio_fiscal_calle: Option<String>,
    pub domicilio_fiscal_numero_exterior: Option<String>,
    pub domicilio_fiscal_numero_interior: Option<String>,
    pub domicilio_fiscal_colonia: Option<String>,
    pub domicilio_fiscal_municipio: Option<String>,
    pub domicilio_fiscal_estado: Option<String>,

    #[validate(range(min = 0, max = 99999, message = "Código postal inválido"))]
    pub domicilio_fiscal_cp: Option<i32>,

    pub fecha_baja: Option<NaiveDate>,
    #[serde(default)]
    pub falta_papeleria: bool,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct DomicilioRequest {
    #[validate(length(min = 1, max = 64, message = "El estado es obligatorio."))]
    pub estado: String,

    #[validate(length(min = 1, max = 64, message = "El municipio es obligatorio."))]
    pub municipio: String,

    #[validate(length(max = 64, message = "El país no debe exceder 64 caracteres."))]
    #[serde(default)]
    pub pais: String,

    #[validate(length(min = 1, max = 256, message = "La calle es obligatoria."))]
    pub calle: String,

    #[validate(length(max = 24, message = "El número exterior no debe exceder 24 caracteres."))]
    #[serde(default)]
    pub num_ext: String,

    #[validate(length(max = 24, message = "El número interior no debe exceder 24 caracteres."))]
    #[serde(default)]
    pub num_int: String,

    #[validate(length(max = 256, message = "La colonia no debe exceder 256 caracteres."))]
    #[serde(default)]
    pub colonia: String,

    #[validate(length(max = 5, message = "El código postal no debe exceder 5 caracteres."))]
    #[serde(default)]
    pub cp: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PersonaDomicilioRequest {
    #[validate(range(min = 1, message = "La persona es obligatoria."))]
    pub persona_id: i32,

    #[validate(range(min = 1, message = "El domicilio es obligatorio."))]
    pub domicilio_id: i32,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct HistorialPuestoRequest {
    #[validate(range(min = 1, message = "La persona es obligatoria."))]
    pub persona_id: i32,

    #[validate(range(min = 1, message = "La función del puesto es obligatoria."))]
    pub puesto_funcion_id: i32,

    #[validate(range(min = 1, message = "El turno es obligatorio."))]
    pub turno_id: i32,

    #[validate(length(min = 1, max = 256, message = "El área es obligatoria."))]
    pub area: String,

    #[validate(length(max = 256, message = "El centro de trabajo no debe exceder 256 caracteres."))]
    pub centro_trabajo: Option<String>,

    pub fecha_inicio: NaiveDate,
    pub fecha_termino: Option<NaiveDate>,
    pub nivel: Option<i32>,
    pub quinquenio: Option<i32>,

    #[validate(length(max = 256, message = "El nombramiento no debe exceder 256 caracteres."))]
    pub nombramiento: Option<String>,

    #[validate(length(max = 256, message = "El tipo de nombramiento no debe exceder 256 caracteres."))]
    pub tipo_nombramiento: Option<String>,

    pub observaciones: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct HistorialAcademicoRequest {
    #[validate(range(min = 1, message = "La persona es obligatoria."))]
    pub persona_id: i32,

    #[validate(range(min = 1, message = "El nivel académico es obligatorio."))]
    pub nivel_academico_id: i32,

    #[validate(length(max = 256, message = "La escuela no debe exceder 256 caracteres."))]
    pub escuela: Option<String>,

    #[validate(length(max = 256, message = "La ciudad no debe exceder 256 caracteres."))]
    pub ciudad: Option<String>,

    #[validate(range(min = 1900, max = 2100, message = "Año inválido"))]
    pub ano_inicio: Option<i32>,

    #[validate(range(min = 1900, max = 2100, message = "Año inválido"))]
    pub ano_termino: Option<i32>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LicenciaRequest {
    #[validate(range(min = 1, message = "La persona es obligatoria."))]
    pub persona_id: i32,

    #[serde(default)]
    pub tipo: TipoLicencia,

    pub fecha_inicio: NaiveDate,
    pub fecha_termino: NaiveDate,

    #[serde(default)]
    pub con_goce: bool,

    #[validate(length(min = 1, max = 512, message = "El motivo es obligatorio."))]
    pub motivo: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct IncapacidadRequest {
    #[validate(range(min = 1, message = "La persona es obligatoria."))]
    pub persona_id: i32,

    pub fecha_inicio: NaiveDate,
    pub fecha_termino: NaiveDate,

    #[validate(length(min = 1, max = 16, message = "La clave debe tener de 1 a 16 caracteres."))]
    pub clave: String,

    #[serde(default)]
    pub region: Region,

    #[validate(length(min = 1, max = 512, message = "El motivo es obligatorio."))]
    pub motivo: String,

    #[validate(length(min = 1, max = 256, message = "El puesto es obligatorio."))]
    pub puesto_nombre: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PersonaAdjuntoRequest {
    #[validate(range(min = 1, message = "La persona es obligatoria."))]
    pub persona_id: i32,

    #[serde(default)]
    pub tipo: TipoAdjunto,

    #[validate(length(max = 256, message = "La descripción no debe exceder 256 caracteres."))]
    pub descripcion: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PersonaFotografiaRequest {
    #[validate(range(min = 1, message = "La persona es obligatoria."))]
    pub persona_id: i32,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PersonaNombramientoRequest {
    #[validate(range(min = 1, message = "La persona es obligatoria."))]
    pub persona_id: i32,

    #[validate(length(max = 256, message = "El cargo no debe exceder 256 caracteres."))]
    pub cargo: Option<String>,

    #[validate(length(max = 256, message = "El centro de trabajo no debe exceder 256 caracteres."))]
    pub centro_trabajo: Option<String>,

    #[validate(length(max = 64, message = "El tipo no debe exceder 64 caracteres."))]
    pub tipo: Option<String>,

    pub fecha_inicio: Option<NaiveDate>,
    pub fecha_fin: Option<NaiveDate>,
}

/// Uploaded file as JSON
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct FileRequest {
    #[validate(length(min = 1, max = 256, message = "El nombre del archivo es obligatorio."))]
    pub nombre_archivo: String,

    #[validate(length(min = 1, message = "El archivo está vacío."))]
    pub contenido_base64: String,
}

// ============================================================================
// Tarea Requests
// ============================================================================

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TaskRequest {
    #[validate(length(min = 1, max = 256, message = "El comando es obligatorio."))]
    pub comando: String,

    #[validate(length(max = 256, message = "El mensaje no debe exceder 256 caracteres."))]
    #[serde(default)]
    pub mensaje: String,

    #[serde(default)]
    pub args: serde_json::Value,
}

/// Progress reported by a worker
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct TaskProgressRequest {
    pub progreso: i32,

    #[validate(length(max = 256, message = "El mensaje no debe exceder 256 caracteres."))]
    #[serde(default)]
    pub mensaje: String,

    #[validate(length(max = 256))]
    #[serde(default)]
    pub archivo: String,

    #[validate(length(max = 512))]
    #[serde(default)]
    pub url: String,
}

/// Failure reported by a worker
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TaskErrorRequest {
    #[validate(length(min = 1, max = 256, message = "El mensaje es obligatorio."))]
    pub mensaje: String,
}
