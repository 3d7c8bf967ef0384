//! Time-sliced records of a persona: job and school history, leaves and
//! disabilities
//!
//! Every record validates its period before it is written. A licencia also
//! snapshots the position held on its start date.

use async_trait::async_trait;
use orion_core::entities::{
    HistorialAcademico, HistorialPuesto, Incapacidad, Licencia, NivelAcademico, Persona,
    PuestoFuncion, Turno,
};
use tracing::debug;

use crate::dto::{
    HistorialAcademicoRequest, HistorialPuestoRequest, IncapacidadRequest, LicenciaRequest,
};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::resource::{
    optional_text, referenced, required_clave, required_text, CrudService, Resource,
};

pub type HistorialPuestoService<'a> = CrudService<'a, HistorialPuesto>;
pub type HistorialAcademicoService<'a> = CrudService<'a, HistorialAcademico>;
pub type LicenciaService<'a> = CrudService<'a, Licencia>;
pub type IncapacidadService<'a> = CrudService<'a, Incapacidad>;

#[async_trait]
impl Resource for HistorialPuesto {
    type Request = HistorialPuestoRequest;

    fn fill(&mut self, r: HistorialPuestoRequest) -> ServiceResult<()> {
        self.persona_id = r.persona_id;
        self.puesto_funcion_id = r.puesto_funcion_id;
        self.turno_id = r.turno_id;
        self.area = required_text(&r.area, 256, "El área es obligatoria.")?;
        self.centro_trabajo = optional_text(r.centro_trabajo, 256);
        self.fecha_inicio = r.fecha_inicio;
        self.fecha_termino = r.fecha_termino;
        self.nivel = r.nivel;
        self.quinquenio = r.quinquenio;
        self.nombramiento = optional_text(r.nombramiento, 256);
        self.tipo_nombramiento = optional_text(r.tipo_nombramiento, 256);
        self.observaciones = r
            .observaciones
            .map(|texto| texto.trim().to_string())
            .filter(|texto| !texto.is_empty());
        Ok(())
    }

    fn describe(&self) -> String {
        format!("de Persona {} desde {}", self.persona_id, self.fecha_inicio)
    }

    async fn prepare(&mut self, ctx: &ServiceContext) -> ServiceResult<()> {
        self.periodo()?;
        referenced::<Persona>(ctx, self.persona_id).await?;
        referenced::<PuestoFuncion>(ctx, self.puesto_funcion_id).await?;
        referenced::<Turno>(ctx, self.turno_id).await?;
        Ok(())
    }
}

#[async_trait]
impl Resource for HistorialAcademico {
    type Request = HistorialAcademicoRequest;

    fn fill(&mut self, r: HistorialAcademicoRequest) -> ServiceResult<()> {
        self.persona_id = r.persona_id;
        self.nivel_academico_id = r.nivel_academico_id;
        self.escuela = optional_text(r.escuela, 256);
        self.ciudad = optional_text(r.ciudad, 256);
        self.ano_inicio = r.ano_inicio;
        self.ano_termino = r.ano_termino;
        Ok(())
    }

    fn describe(&self) -> String {
        format!(
            "de Persona {} en {}",
            self.persona_id,
            self.escuela.as_deref().unwrap_or("ESCUELA SIN NOMBRE")
        )
    }

    async fn prepare(&mut self, ctx: &ServiceContext) -> ServiceResult<()> {
        self.validar()?;
        referenced::<Persona>(ctx, self.persona_id).await?;
        referenced::<NivelAcademico>(ctx, self.nivel_academico_id).await?;
        Ok(())
    }
}

#[async_trait]
impl Resource for Licencia {
    type Request = LicenciaRequest;

    fn fill(&mut self, r: LicenciaRequest) -> ServiceResult<()> {
        self.persona_id = r.persona_id;
        self.tipo = r.tipo;
        self.fecha_inicio = r.fecha_inicio;
        self.fecha_termino = r.fecha_termino;
        self.con_goce = r.con_goce;
        self.motivo = required_text(&r.motivo, 512, "El motivo es obligatorio.")?;
        Ok(())
    }

    fn describe(&self) -> String {
        format!(
            "de Persona {} del {} al {}",
            self.persona_id, self.fecha_inicio, self.fecha_termino
        )
    }

    async fn prepare(&mut self, ctx: &ServiceContext) -> ServiceResult<()> {
        self.periodo()?;
        referenced::<Persona>(ctx, self.persona_id).await?;

        self.puesto_nombre = ctx
            .historial_puesto_repo()
            .puesto_vigente(self.persona_id, self.fecha_inicio)
            .await?;
        debug!(
            persona_id = self.persona_id,
            puesto = ?self.puesto_nombre,
            "Position snapshot"
        );
        Ok(())
    }
}

#[async_trait]
impl Resource for Incapacidad {
    type Request = IncapacidadRequest;

    fn fill(&mut self, r: IncapacidadRequest) -> ServiceResult<()> {
        self.persona_id = r.persona_id;
        self.fecha_inicio = r.fecha_inicio;
        self.fecha_termino = r.fecha_termino;
        self.clave = required_clave(&r.clave, 16)?;
        self.region = r.region;
        self.motivo = required_text(&r.motivo, 512, "El motivo es obligatorio.")?;
        self.puesto_nombre = required_text(&r.puesto_nombre, 256, "El puesto es obligatorio.")?;
        Ok(())
    }

    fn describe(&self) -> String {
        format!("{} de Persona {}", self.clave, self.persona_id)
    }

    async fn prepare(&mut self, ctx: &ServiceContext) -> ServiceResult<()> {
        self.periodo()?;
        referenced::<Persona>(ctx, self.persona_id).await?;
        Ok(())
    }
}
