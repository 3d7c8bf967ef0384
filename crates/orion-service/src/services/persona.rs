//! Persona resources - the employee record and its addresses

use async_trait::async_trait;
use orion_common::text::{safe_curp, safe_email, safe_rfc, safe_string};
use orion_core::entities::{Carrera, Domicilio, NivelAcademico, Persona, PersonaDomicilio};
use orion_core::{CampoUnico, Listado, Nivel, Pagina};
use tracing::instrument;

use crate::dto::{DomicilioRequest, PersonaDomicilioRequest, PersonaRequest};

use super::context::ServiceContext;
use super::current_user::CurrentUser;
use super::error::ServiceResult;
use super::resource::{optional_text, referenced, required_text, CrudService, Resource};

pub type PersonaService<'a> = CrudService<'a, Persona>;
pub type DomicilioService<'a> = CrudService<'a, Domicilio>;
pub type PersonaDomicilioService<'a> = CrudService<'a, PersonaDomicilio>;

fn optional_email(input: Option<String>) -> ServiceResult<Option<String>> {
    match input.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        Some(email) => Ok(Some(safe_email(email, false)?)),
        None => Ok(None),
    }
}

fn optional_phone(input: Option<String>) -> Option<String> {
    input
        .map(|telefono| telefono.trim().to_string())
        .filter(|telefono| !telefono.is_empty())
}

#[async_trait]
impl Resource for Persona {
    type Request = PersonaRequest;

    fn fill(&mut self, r: PersonaRequest) -> ServiceResult<()> {
        self.carrera_id = r.carrera_id;
        self.nivel_estudios_max_id = r.nivel_estudios_max_id;
        self.nombres = required_text(&r.nombres, 256, "Los nombres son obligatorios.")?;
        self.apellido_primero =
            required_text(&r.apellido_primero, 256, "El primer apellido es obligatorio.")?;
        self.apellido_segundo = optional_text(r.apellido_segundo, 256);
        self.numero_empleado = r.numero_empleado;
        self.rfc = safe_rfc(&r.rfc, false, false)?;
        self.curp = safe_curp(&r.curp, false, false)?;
        self.email = optional_email(r.email)?;
        self.email_secundario = optional_email(r.email_secundario)?;
        self.telefono_personal = optional_phone(r.telefono_personal);
        self.telefono_trabajo = optional_phone(r.telefono_trabajo);
        self.fecha_ingreso_gobierno = r.fecha_ingreso_gobierno;
        self.fecha_ingreso_pj = r.fecha_ingreso_pj;
        self.fecha_nacimiento = r.fecha_nacimiento;
        self.num_seguridad_social = optional_text(r.num_seguridad_social, 24);
        self.situacion = r.situacion;
        self.sexo = r.sexo;
        self.estado_civil = r.estado_civil;
        self.madre = r.madre;
        self.nivel_estudios = r.nivel_estudios;
        self.cedula_profesional = optional_text(r.cedula_profesional, 16);
        self.observaciones = r
            .observaciones
            .map(|texto| texto.trim().to_string())
            .filter(|texto| !texto.is_empty());
        self.domicilio_fiscal_calle = optional_text(r.domicilio_fiscal_calle, 256);
        self.domicilio_fiscal_numero_exterior = optional_text(r.domicilio_fiscal_numero_exterior, 24);
        self.domicilio_fiscal_numero_interior = optional_text(r.domicilio_fiscal_numero_interior, 24);
        self.domicilio_fiscal_colonia = optional_text(r.domicilio_fiscal_colonia, 256);
        self.domicilio_fiscal_municipio = optional_text(r.domicilio_fiscal_municipio, 256);
        self.domicilio_fiscal_estado = optional_text(r.domicilio_fiscal_estado, 256);
        self.domicilio_fiscal_cp = r.domicilio_fiscal_cp;
        self.fecha_baja = r.fecha_baja;
        self.falta_papeleria = r.falta_papeleria;
        Ok(())
    }

    fn describe(&self) -> String {
        format!("{} {}", self.curp, self.nombre_completo())
    }

    fn unique_fields(&self) -> Vec<(CampoUnico, String)> {
        vec![
            (CampoUnico::PersonaCurp, self.curp.clone()),
            (
                CampoUnico::PersonaNumeroEmpleado,
                self.numero_empleado
                    .map(|numero| numero.to_string())
                    .unwrap_or_default(),
            ),
        ]
    }

    async fn prepare(&mut self, ctx: &ServiceContext) -> ServiceResult<()> {
        if let Some(carrera_id) = self.carrera_id {
            referenced::<Carrera>(ctx, carrera_id).await?;
        }
        if let Some(nivel_id) = self.nivel_estudios_max_id {
            referenced::<NivelAcademico>(ctx, nivel_id).await?;
        }
        Ok(())
    }
}

impl<'a> CrudService<'a, Persona> {
    /// Search by name and CURP fragments; blank fragments are ignored
    #[instrument(skip(self, user), fields(usuario_id = user.id()))]
    pub async fn search(
        &self,
        user: &CurrentUser,
        nombre: Option<&str>,
        curp: Option<&str>,
        listado: &Listado,
    ) -> ServiceResult<Pagina<Persona>> {
        self.require(user, Nivel::Ver).await?;

        let nombre = nombre
            .map(|fragmento| safe_string(fragmento, 256, true))
            .filter(|fragmento| !fragmento.is_empty());
        let curp = match curp {
            Some(fragmento) => Some(safe_curp(fragmento, true, true)?),
            None => None,
        }
        .filter(|fragmento| !fragmento.is_empty());

        Ok(self
            .ctx
            .persona_repo()
            .search(nombre.as_deref(), curp.as_deref(), listado)
            .await?)
    }
}

#[async_trait]
impl Resource for Domicilio {
    type Request = DomicilioRequest;

    fn fill(&mut self, r: DomicilioRequest) -> ServiceResult<()> {
        self.estado = required_text(&r.estado, 64, "El estado es obligatorio.")?;
        self.municipio = required_text(&r.municipio, 64, "El municipio es obligatorio.")?;
        self.pais = safe_string(&r.pais, 64, true);
        self.calle = required_text(&r.calle, 256, "La calle es obligatoria.")?;
        self.num_ext = safe_string(&r.num_ext, 24, true);
        self.num_int = safe_string(&r.num_int, 24, true);
        self.colonia = safe_string(&r.colonia, 256, true);
        self.cp = r.cp.trim().chars().filter(char::is_ascii_digit).collect();
        Ok(())
    }

    fn describe(&self) -> String {
        self.completo.clone()
    }

    async fn prepare(&mut self, _ctx: &ServiceContext) -> ServiceResult<()> {
        self.actualizar_completo();
        Ok(())
    }
}

#[async_trait]
impl Resource for PersonaDomicilio {
    type Request = PersonaDomicilioRequest;

    fn fill(&mut self, r: PersonaDomicilioRequest) -> ServiceResult<()> {
        self.persona_id = r.persona_id;
        self.domicilio_id = r.domicilio_id;
        Ok(())
    }

    fn describe(&self) -> String {
        format!("de Persona {} en Domicilio {}", self.persona_id, self.domicilio_id)
    }

    async fn prepare(&mut self, ctx: &ServiceContext) -> ServiceResult<()> {
        referenced::<Persona>(ctx, self.persona_id).await?;
        referenced::<Domicilio>(ctx, self.domicilio_id).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::TestContext;
    use orion_core::Estatus;

    const CURP: &str = "PEGJ800101HCLRRN09";
    const RFC: &str = "PEGJ800101AB1";

    fn persona(curp: &str, numero_empleado: Option<i32>) -> PersonaRequest {
        PersonaRequest {
            carrera_id: None,
            nivel_estudios_max_id: None,
            nombres: "Juan José".to_string(),
            apellido_primero: "Pérez".to_string(),
            apellido_segundo: Some("  ".to_string()),
            numero_empleado,
            rfc: RFC.to_lowercase(),
            curp: curp.to_string(),
            email: Some("Juan.Perez@PJECZ.gob.mx".to_string()),
            email_secundario: None,
            telefono_personal: None,
            telefono_trabajo: None,
            fecha_ingreso_gobierno: None,
            fecha_ingreso_pj: None,
            fecha_nacimiento: None,
            num_seguridad_social: None,
            situacion: Default::default(),
            sexo: Default::default(),
            estado_civil: Default::default(),
            madre: false,
            nivel_estudios: None,
            cedula_profesional: None,
            observaciones: None,
            domicilio_fiscal_calle: None,
            domicilio_fiscal_numero_exterior: None,
            domicilio_fiscal_numero_interior: None,
            domicilio_fiscal_colonia: None,
            domicilio_fiscal_municipio: None,
            domicilio_fiscal_estado: None,
            domicilio_fiscal_cp: None,
            fecha_baja: None,
            falta_papeleria: false,
        }
    }

    #[tokio::test]
    async fn test_create_sanitizes_fields() {
        let test = TestContext::new();
        let user = test.user_with("PERSONAS", Nivel::Crear);

        let creada = PersonaService::new(&test.ctx)
            .create(&user, persona(&CURP.to_lowercase(), Some(1001)))
            .await
            .unwrap();

        assert_eq!(creada.nombres, "JUAN JOSE");
        assert_eq!(creada.apellido_primero, "PEREZ");
        assert_eq!(creada.apellido_segundo, None);
        assert_eq!(creada.rfc, RFC);
        assert_eq!(creada.curp, CURP);
        assert_eq!(creada.email.as_deref(), Some("juan.perez@pjecz.gob.mx"));
        assert_eq!(
            test.auditorias()[0].descripcion,
            format!("Nuevo Persona {CURP} JUAN JOSE PEREZ")
        );
    }

    #[tokio::test]
    async fn test_invalid_curp_is_rejected() {
        let test = TestContext::new();
        let user = test.user_with("PERSONAS", Nivel::Crear);

        let err = PersonaService::new(&test.ctx)
            .create(&user, persona("XXXX", None))
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), 400);
        assert_eq!(test.count::<Persona>(), 0);
    }

    #[tokio::test]
    async fn test_curp_and_numero_empleado_are_unique() {
        let test = TestContext::new();
        let user = test.user_with("PERSONAS", Nivel::Crear);
        let service = PersonaService::new(&test.ctx);

        service.create(&user, persona(CURP, Some(1001))).await.unwrap();

        let err = service.create(&user, persona(CURP, Some(1002))).await.unwrap_err();
        assert_eq!(err.to_string(), "El CURP ya está en uso. Debe de ser único.");

        let err = service
            .create(&user, persona("LOMA900215MCLPRR01", Some(1001)))
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "El número de empleado ya está en uso. Debe de ser único."
        );
        assert_eq!(test.count::<Persona>(), 1);
    }

    #[tokio::test]
    async fn test_unknown_carrera_is_rejected() {
        let test = TestContext::new();
        let user = test.user_with("PERSONAS", Nivel::Crear);
        let mut request = persona(CURP, None);
        request.carrera_id = Some(7);

        let err = PersonaService::new(&test.ctx)
            .create(&user, request)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "No existe Carrera 7");
    }

    #[tokio::test]
    async fn test_search_needs_ver_and_sanitizes_fragments() {
        let test = TestContext::new();
        test.insert(Persona::new("JUAN", "PEREZ", RFC, CURP));
        test.insert(Persona::new("MARIA", "LOPEZ", "LOMA900215AB1", "LOMA900215MCLPRR01"));
        let service = PersonaService::new(&test.ctx);

        let sin_permiso = test.user_with("BANCOS", Nivel::Administrar);
        let err = service
            .search(&sin_permiso, Some("juan"), None, &Listado::activos())
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 403);

        let user = test.user_with("PERSONAS", Nivel::Ver);
        let pagina = service
            .search(&user, Some(" pérez "), None, &Listado::activos())
            .await
            .unwrap();
        assert_eq!(pagina.total, 1);
        assert_eq!(pagina.items[0].nombres, "JUAN");

        let pagina = service
            .search(&user, None, Some("loma-90"), &Listado::activos())
            .await
            .unwrap();
        assert_eq!(pagina.items[0].nombres, "MARIA");

        let pagina = service
            .search(&user, Some("  "), None, &Listado::activos())
            .await
            .unwrap();
        assert_eq!(pagina.total, 2);
    }

    #[tokio::test]
    async fn test_domicilio_completo_is_rebuilt_on_every_save() {
        let test = TestContext::new();
        let user = test.user_with("DOMICILIOS", Nivel::Crear);
        let service = DomicilioService::new(&test.ctx);
        let mut request = DomicilioRequest {
            estado: "Coahuila".to_string(),
            municipio: "Saltillo".to_string(),
            pais: "México".to_string(),
            calle: "Hidalgo".to_string(),
            num_ext: "120".to_string(),
            num_int: String::new(),
            colonia: "Centro".to_string(),
            cp: "25000".to_string(),
        };

        let creado = service.create(&user, request.clone()).await.unwrap();
        assert_eq!(
            creado.completo,
            "HIDALGO #120, CENTRO, SALTILLO, COAHUILA, C.P. 25000"
        );

        request.num_int = "B".to_string();
        let editado = service.update(&user, creado.id, request).await.unwrap();
        assert_eq!(
            editado.completo,
            "HIDALGO #120-B, CENTRO, SALTILLO, COAHUILA, C.P. 25000"
        );
        assert_eq!(editado.estatus, Estatus::Activo);
    }
}
