//! Catalog resources
//!
//! Reference data with no cross-entity logic beyond foreign keys. Keys and
//! names are sanitized on every save and checked for uniqueness.

use async_trait::async_trait;
use orion_core::entities::{
    Area, Atribucion, AtribucionCt, Banco, Carrera, CentroTrabajo, Distrito, NivelAcademico,
    Organo, Puesto, PuestoFuncion, Turno,
};
use orion_core::CampoUnico;

use crate::dto::{
    AreaRequest, AtribucionCtRequest, AtribucionRequest, BancoRequest, CarreraRequest,
    CentroTrabajoRequest, DistritoRequest, NivelAcademicoRequest, OrganoRequest, PuestoFuncionRequest,
    PuestoRequest, TurnoRequest,
};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::resource::{
    optional_text, referenced, required_clave, required_text, CrudService, Resource,
};

pub type DistritoService<'a> = CrudService<'a, Distrito>;
pub type OrganoService<'a> = CrudService<'a, Organo>;
pub type CentroTrabajoService<'a> = CrudService<'a, CentroTrabajo>;
pub type AreaService<'a> = CrudService<'a, Area>;
pub type PuestoService<'a> = CrudService<'a, Puesto>;
pub type PuestoFuncionService<'a> = CrudService<'a, PuestoFuncion>;
pub type NivelAcademicoService<'a> = CrudService<'a, NivelAcademico>;
pub type BancoService<'a> = CrudService<'a, Banco>;
pub type CarreraService<'a> = CrudService<'a, Carrera>;
pub type TurnoService<'a> = CrudService<'a, Turno>;
pub type AtribucionService<'a> = CrudService<'a, Atribucion>;
pub type AtribucionCtService<'a> = CrudService<'a, AtribucionCt>;

const NOMBRE_LEN: usize = 256;

const NOMBRE_OBLIGATORIO: &str = "El nombre es obligatorio.";

// ============================================================================
// Keyed catalogs
// ============================================================================

#[async_trait]
impl Resource for Distrito {
    type Request = DistritoRequest;

    fn fill(&mut self, request: DistritoRequest) -> ServiceResult<()> {
        self.clave = required_clave(&request.clave, 16)?;
        self.nombre = required_text(&request.nombre, NOMBRE_LEN, NOMBRE_OBLIGATORIO)?;
        Ok(())
    }

    fn describe(&self) -> String {
        self.descripcion()
    }

    fn unique_fields(&self) -> Vec<(CampoUnico, String)> {
        vec![(CampoUnico::DistritoClave, self.clave.clone())]
    }
}

#[async_trait]
impl Resource for Organo {
    type Request = OrganoRequest;

    fn fill(&mut self, request: OrganoRequest) -> ServiceResult<()> {
        self.clave = required_clave(&request.clave, 16)?;
        self.nombre = required_text(&request.nombre, NOMBRE_LEN, NOMBRE_OBLIGATORIO)?;
        Ok(())
    }

    fn describe(&self) -> String {
        self.descripcion()
    }

    fn unique_fields(&self) -> Vec<(CampoUnico, String)> {
        vec![(CampoUnico::OrganoClave, self.clave.clone())]
    }
}

#[async_trait]
impl Resource for NivelAcademico {
    type Request = NivelAcademicoRequest;

    fn fill(&mut self, request: NivelAcademicoRequest) -> ServiceResult<()> {
        self.clave = required_clave(&request.clave, 8)?;
        self.nombre = required_text(&request.nombre, NOMBRE_LEN, NOMBRE_OBLIGATORIO)?;
        Ok(())
    }

    fn describe(&self) -> String {
        self.descripcion()
    }

    fn unique_fields(&self) -> Vec<(CampoUnico, String)> {
        vec![(CampoUnico::NivelAcademicoClave, self.clave.clone())]
    }
}

#[async_trait]
impl Resource for CentroTrabajo {
    type Request = CentroTrabajoRequest;

    fn fill(&mut self, request: CentroTrabajoRequest) -> ServiceResult<()> {
        self.distrito_id = request.distrito_id;
        self.organo_id = request.organo_id;
        self.clave = required_clave(&request.clave, 16)?;
        self.nombre = required_text(&request.nombre, NOMBRE_LEN, NOMBRE_OBLIGATORIO)?;
        self.telefono = optional_text(request.telefono, 48);
        self.num_ext = optional_text(request.num_ext, 24);
        self.activo = request.activo;
        Ok(())
    }

    fn describe(&self) -> String {
        self.descripcion()
    }

    fn unique_fields(&self) -> Vec<(CampoUnico, String)> {
        vec![(CampoUnico::CentroTrabajoClave, self.clave.clone())]
    }

    async fn prepare(&mut self, ctx: &ServiceContext) -> ServiceResult<()> {
        referenced::<Distrito>(ctx, self.distrito_id).await?;
        referenced::<Organo>(ctx, self.organo_id).await?;
        Ok(())
    }
}

#[async_trait]
impl Resource for Puesto {
    type Request = PuestoRequest;

    fn fill(&mut self, request: PuestoRequest) -> ServiceResult<()> {
        self.clave = required_clave(&request.clave, 32)?;
        self.nombre = required_text(&request.nombre, NOMBRE_LEN, NOMBRE_OBLIGATORIO)?;
        self.tipo_cargo = request.tipo_cargo;
        self.tipo_empleado = request.tipo_empleado;
        Ok(())
    }

    fn describe(&self) -> String {
        self.descripcion()
    }

    fn unique_fields(&self) -> Vec<(CampoUnico, String)> {
        vec![(CampoUnico::PuestoClave, self.clave.clone())]
    }
}

// ============================================================================
// Named catalogs
// ============================================================================

#[async_trait]
impl Resource for Banco {
    type Request = BancoRequest;

    fn fill(&mut self, request: BancoRequest) -> ServiceResult<()> {
        self.nombre = required_text(&request.nombre, NOMBRE_LEN, NOMBRE_OBLIGATORIO)?;
        Ok(())
    }

    fn describe(&self) -> String {
        self.nombre.clone()
    }

    fn unique_fields(&self) -> Vec<(CampoUnico, String)> {
        vec![(CampoUnico::BancoNombre, self.nombre.clone())]
    }
}

#[async_trait]
impl Resource for Carrera {
    type Request = CarreraRequest;

    fn fill(&mut self, request: CarreraRequest) -> ServiceResult<()> {
        self.nombre = required_text(&request.nombre, NOMBRE_LEN, NOMBRE_OBLIGATORIO)?;
        Ok(())
    }

    fn describe(&self) -> String {
        self.nombre.clone()
    }

    fn unique_fields(&self) -> Vec<(CampoUnico, String)> {
        vec![(CampoUnico::CarreraNombre, self.nombre.clone())]
    }
}

#[async_trait]
impl Resource for Turno {
    type Request = TurnoRequest;

    fn fill(&mut self, request: TurnoRequest) -> ServiceResult<()> {
        self.nombre = required_text(&request.nombre, NOMBRE_LEN, NOMBRE_OBLIGATORIO)?;
        self.descripcion = optional_text(request.descripcion, NOMBRE_LEN);
        Ok(())
    }

    fn describe(&self) -> String {
        self.nombre.clone()
    }

    fn unique_fields(&self) -> Vec<(CampoUnico, String)> {
        vec![(CampoUnico::TurnoNombre, self.nombre.clone())]
    }
}

#[async_trait]
impl Resource for Area {
    type Request = AreaRequest;

    fn fill(&mut self, request: AreaRequest) -> ServiceResult<()> {
        self.centro_trabajo_id = request.centro_trabajo_id;
        self.nombre = required_text(&request.nombre, NOMBRE_LEN, NOMBRE_OBLIGATORIO)?;
        Ok(())
    }

    fn describe(&self) -> String {
        self.nombre.clone()
    }

    fn unique_fields(&self) -> Vec<(CampoUnico, String)> {
        vec![(CampoUnico::AreaNombre, self.nombre.clone())]
    }

    async fn prepare(&mut self, ctx: &ServiceContext) -> ServiceResult<()> {
        referenced::<CentroTrabajo>(ctx, self.centro_trabajo_id).await?;
        Ok(())
    }
}

#[async_trait]
impl Resource for PuestoFuncion {
    type Request = PuestoFuncionRequest;

    fn fill(&mut self, request: PuestoFuncionRequest) -> ServiceResult<()> {
        self.puesto_id = request.puesto_id;
        self.nombre = required_text(&request.nombre, NOMBRE_LEN, NOMBRE_OBLIGATORIO)?;
        Ok(())
    }

    fn describe(&self) -> String {
        self.nombre.clone()
    }

    async fn prepare(&mut self, ctx: &ServiceContext) -> ServiceResult<()> {
        referenced::<Puesto>(ctx, self.puesto_id).await?;
        Ok(())
    }
}

// ============================================================================
// Attributions
// ============================================================================

#[async_trait]
impl Resource for Atribucion {
    type Request = AtribucionRequest;

    fn fill(&mut self, request: AtribucionRequest) -> ServiceResult<()> {
        self.puesto_funcion_id = request.puesto_funcion_id;
        self.centro_trabajo_id = request.centro_trabajo_id;
        self.norma = required_text(&request.norma, NOMBRE_LEN, "La norma es obligatoria.")?;
        self.fundamento =
            required_text(&request.fundamento, NOMBRE_LEN, "El fundamento es obligatorio.")?;
        self.fragmento = request.fragmento.trim().to_string();
        self.tipo_cargo = request.tipo_cargo;
        Ok(())
    }

    fn describe(&self) -> String {
        format!("{} {}", self.norma, self.fundamento)
    }

    async fn prepare(&mut self, ctx: &ServiceContext) -> ServiceResult<()> {
        referenced::<PuestoFuncion>(ctx, self.puesto_funcion_id).await?;
        referenced::<CentroTrabajo>(ctx, self.centro_trabajo_id).await?;
        Ok(())
    }
}

#[async_trait]
impl Resource for AtribucionCt {
    type Request = AtribucionCtRequest;

    fn fill(&mut self, request: AtribucionCtRequest) -> ServiceResult<()> {
        self.area_id = request.area_id;
        self.norma = required_text(&request.norma, NOMBRE_LEN, "La norma es obligatoria.")?;
        self.fundamento =
            required_text(&request.fundamento, NOMBRE_LEN, "El fundamento es obligatorio.")?;
        self.fragmento = request.fragmento.trim().to_string();
        Ok(())
    }

    fn describe(&self) -> String {
        format!("{} {}", self.norma, self.fundamento)
    }

    async fn prepare(&mut self, ctx: &ServiceContext) -> ServiceResult<()> {
        referenced::<Area>(ctx, self.area_id).await?;
        Ok(())
    }
}
