//! File-backed persona records
//!
//! Metadata rows are created like any other resource. Uploading a file for a
//! row that already holds one never overwrites it: a replacement row is
//! created, the old one is deleted, and both steps are undone if the upload
//! or the final stamp fails.

use std::marker::PhantomData;

use async_trait::async_trait;
use orion_common::storage::{
    FileUpload, StorageError, EXTENSIONES_DOCUMENTOS, EXTENSIONES_NOMBRAMIENTOS,
};
use orion_core::entities::{Persona, PersonaAdjunto, PersonaFotografia, PersonaNombramiento};
use orion_core::{AdjuntoRepository, Entity, Estatus, Nivel};
use tracing::{error, info, instrument, warn};

use crate::dto::{PersonaAdjuntoRequest, PersonaFotografiaRequest, PersonaNombramientoRequest};

use super::auditoria::AuditoriaBuilder;
use super::context::ServiceContext;
use super::current_user::CurrentUser;
use super::error::{ServiceError, ServiceResult};
use super::permission::PermissionService;
use super::resource::{optional_text, referenced, CrudService, Resource};

pub type PersonaAdjuntoService<'a> = CrudService<'a, PersonaAdjunto>;
pub type PersonaFotografiaService<'a> = CrudService<'a, PersonaFotografia>;
pub type PersonaNombramientoService<'a> = CrudService<'a, PersonaNombramiento>;

pub type AdjuntoService<'a> = FileService<'a, PersonaAdjunto>;
pub type FotografiaService<'a> = FileService<'a, PersonaFotografia>;
pub type NombramientoService<'a> = FileService<'a, PersonaNombramiento>;

/// A resource whose row points at one stored file
pub trait Archivo: Resource {
    /// Extensions accepted for upload
    const EXTENSIONES: &'static [&'static str];

    /// Prefix of the stored file name
    fn label(&self) -> String;

    /// Object path of the stored file, if any
    fn archivo(&self) -> Option<&str>;

    /// Copy of this row without id nor file, ready to insert
    fn replacement(&self) -> Self;

    fn repo(ctx: &ServiceContext) -> &dyn AdjuntoRepository<Self>;
}

// ============================================================================
// Resources
// ============================================================================

#[async_trait]
impl Resource for PersonaAdjunto {
    type Request = PersonaAdjuntoRequest;

    fn fill(&mut self, r: PersonaAdjuntoRequest) -> ServiceResult<()> {
        self.persona_id = r.persona_id;
        self.tipo = r.tipo;
        self.descripcion = optional_text(r.descripcion, 256);
        Ok(())
    }

    fn describe(&self) -> String {
        format!("{} de Persona {}", self.tipo.label(), self.persona_id)
    }

    async fn prepare(&mut self, ctx: &ServiceContext) -> ServiceResult<()> {
        referenced::<Persona>(ctx, self.persona_id).await?;
        Ok(())
    }
}

impl Archivo for PersonaAdjunto {
    const EXTENSIONES: &'static [&'static str] = EXTENSIONES_DOCUMENTOS;

    fn label(&self) -> String {
        self.tipo.code().to_string()
    }

    fn archivo(&self) -> Option<&str> {
        self.archivo.as_deref()
    }

    fn replacement(&self) -> Self {
        Self {
            id: 0,
            archivo: None,
            url: None,
            estatus: Estatus::Activo,
            ..self.clone()
        }
    }

    fn repo(ctx: &ServiceContext) -> &dyn AdjuntoRepository<Self> {
        ctx.persona_adjunto_repo()
    }
}

#[async_trait]
impl Resource for PersonaFotografia {
    type Request = PersonaFotografiaRequest;

    fn fill(&mut self, r: PersonaFotografiaRequest) -> ServiceResult<()> {
        self.persona_id = r.persona_id;
        Ok(())
    }

    fn describe(&self) -> String {
        format!("de Persona {}", self.persona_id)
    }

    async fn prepare(&mut self, ctx: &ServiceContext) -> ServiceResult<()> {
        referenced::<Persona>(ctx, self.persona_id).await?;
        Ok(())
    }
}

impl Archivo for PersonaFotografia {
    const EXTENSIONES: &'static [&'static str] = EXTENSIONES_DOCUMENTOS;

    fn label(&self) -> String {
        "fotografia".to_string()
    }

    fn archivo(&self) -> Option<&str> {
        self.archivo.as_deref()
    }

    fn replacement(&self) -> Self {
        Self {
            id: 0,
            archivo: None,
            url: None,
            estatus: Estatus::Activo,
            ..self.clone()
        }
    }

    fn repo(ctx: &ServiceContext) -> &dyn AdjuntoRepository<Self> {
        ctx.persona_fotografia_repo()
    }
}

#[async_trait]
impl Resource for PersonaNombramiento {
    type Request = PersonaNombramientoRequest;

    fn fill(&mut self, r: PersonaNombramientoRequest) -> ServiceResult<()> {
        self.persona_id = r.persona_id;
        self.cargo = optional_text(r.cargo, 256);
        self.centro_trabajo = optional_text(r.centro_trabajo, 256);
        self.tipo = optional_text(r.tipo, 64);
        self.fecha_inicio = r.fecha_inicio;
        self.fecha_fin = r.fecha_fin;
        if let (Some(inicio), Some(fin)) = (self.fecha_inicio, self.fecha_fin) {
            orion_core::Periodo::new(inicio, Some(fin))?;
        }
        Ok(())
    }

    fn describe(&self) -> String {
        format!(
            "{} de Persona {}",
            self.cargo.as_deref().unwrap_or("SIN CARGO"),
            self.persona_id
        )
    }

    async fn prepare(&mut self, ctx: &ServiceContext) -> ServiceResult<()> {
        referenced::<Persona>(ctx, self.persona_id).await?;
        Ok(())
    }
}

impl Archivo for PersonaNombramiento {
    const EXTENSIONES: &'static [&'static str] = EXTENSIONES_NOMBRAMIENTOS;

    fn label(&self) -> String {
        "nombramiento".to_string()
    }

    fn archivo(&self) -> Option<&str> {
        self.archivo.as_deref()
    }

    fn replacement(&self) -> Self {
        Self {
            id: 0,
            archivo: None,
            url: None,
            estatus: Estatus::Activo,
            ..self.clone()
        }
    }

    fn repo(ctx: &ServiceContext) -> &dyn AdjuntoRepository<Self> {
        ctx.persona_nombramiento_repo()
    }
}

// ============================================================================
// Upload
// ============================================================================

/// Stores the file of an [`Archivo`] row
pub struct FileService<'a, T> {
    ctx: &'a ServiceContext,
    _archivo: PhantomData<fn() -> T>,
}

impl<'a, T: Archivo> FileService<'a, T> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self {
            ctx,
            _archivo: PhantomData,
        }
    }

    /// Uploading needs Modificar on the module of `T`
    pub async fn authorize(&self, user: &CurrentUser) -> ServiceResult<()> {
        PermissionService::new(self.ctx)
            .require(user, T::TABLA.modulo(), Nivel::Modificar)
            .await
    }

    /// Upload the file of row `id`
    ///
    /// A row without a file is stamped in place. A row that already has one
    /// is replaced by a new row, and the old one is deleted.
    #[instrument(skip(self, user, bytes), fields(tabla = %T::TABLA, usuario_id = user.id(), size = bytes.len()))]
    pub async fn replace_file(
        &self,
        user: &CurrentUser,
        id: i32,
        nombre_archivo: &str,
        bytes: Vec<u8>,
    ) -> ServiceResult<T> {
        self.authorize(user).await?;

        let repo = T::repo(self.ctx);
        let anterior = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(T::TABLA.entidad(), id))?;
        if !anterior.is_active() {
            return Err(ServiceError::validation(format!(
                "{} {id} está eliminado",
                T::TABLA.entidad()
            )));
        }

        let mut upload = FileUpload::new(T::TABLA.nombre(), T::EXTENSIONES);
        upload.set_content_type(nombre_archivo)?;

        let (destino, anterior_id) = if anterior.archivo().is_some() {
            let nuevo = repo
                .create_replacing(&anterior.replacement(), Some(id))
                .await?;
            (nuevo, Some(id))
        } else {
            (anterior, None)
        };

        let (archivo, url) = match self.store(&mut upload, &destino, bytes).await {
            Ok(stored) => stored,
            Err(e) => {
                error!(id = destino.id(), error = %e, "Upload failed");
                self.compensate(destino.id(), anterior_id, None).await;
                return Err(e.into());
            }
        };

        let descripcion = match anterior_id {
            Some(anterior_id) => format!(
                "Editado {} {}, se dio de baja {anterior_id}",
                T::TABLA.entidad(),
                destino.id()
            ),
            None => format!("Editado {} {}", T::TABLA.entidad(), destino.id()),
        };
        let auditoria = AuditoriaBuilder::new(T::TABLA, user)
            .descripcion(descripcion)
            .build();
        let stamped = match repo
            .stamp_file(destino.id(), &archivo, &url, &auditoria)
            .await
        {
            Ok(stamped) => stamped,
            Err(e) => {
                error!(id = destino.id(), error = %e, "Recording the stored file failed");
                self.compensate(destino.id(), anterior_id, Some(&archivo)).await;
                return Err(e.into());
            }
        };

        info!(id = stamped.id(), archivo = %archivo, "File stored");
        Ok(stamped)
    }

    /// Undo a replacement that could not finish
    ///
    /// Runs after the cause was logged; its own failures are only logged so
    /// the caller still sees the original error.
    async fn compensate(&self, destino_id: i32, anterior_id: Option<i32>, archivo: Option<&str>) {
        if anterior_id.is_some() {
            if let Err(e) = T::repo(self.ctx)
                .rollback_replacement(destino_id, anterior_id)
                .await
            {
                error!(id = destino_id, ?anterior_id, error = %e, "Rollback of replacement failed");
            }
        }
        if let Some(archivo) = archivo {
            if let Err(e) = self.ctx.storage().delete(archivo).await {
                warn!(archivo, error = %e, "Stored object left behind");
            }
        }
    }

    /// Name and upload the bytes under the storage timeout
    async fn store(
        &self,
        upload: &mut FileUpload,
        destino: &T,
        bytes: Vec<u8>,
    ) -> Result<(String, String), StorageError> {
        let hashed_id = self.ctx.id_codec().encode_id(destino.id());
        let archivo = upload.set_filename(&hashed_id, &destino.label())?.to_string();

        let url = tokio::time::timeout(
            self.ctx.storage_timeout(),
            upload.upload(self.ctx.storage(), bytes),
        )
        .await
        .map_err(|_| StorageError::Timeout)??
        .to_string();

        Ok((archivo, url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::{FailingStorage, SlowStorage, TestContext};
    use orion_core::entities::TipoAdjunto;
    use std::sync::Arc;
    use std::time::Duration;

    fn seed_adjunto(test: &TestContext, archivo: Option<&str>) -> PersonaAdjunto {
        let persona = test.insert(Persona::new(
            "JUAN",
            "PEREZ",
            "PEGJ800101AB1",
            "PEGJ800101HCLRRN09",
        ));
        test.insert(PersonaAdjunto {
            persona_id: persona.id,
            tipo: TipoAdjunto::Ine,
            archivo: archivo.map(str::to_string),
            url: archivo.map(|a| format!("/uploads/{a}")),
            ..PersonaAdjunto::default()
        })
    }

    #[tokio::test]
    async fn test_first_upload_stamps_row_in_place() {
        let test = TestContext::new();
        let adjunto = seed_adjunto(&test, None);
        let user = test.user_with("PERSONAS ADJUNTOS", Nivel::Modificar);

        let stamped = AdjuntoService::new(&test.ctx)
            .replace_file(&user, adjunto.id, "ine.PDF", b"%PDF".to_vec())
            .await
            .unwrap();

        assert_eq!(stamped.id, adjunto.id);
        let archivo = stamped.archivo.clone().unwrap();
        assert!(archivo.starts_with("personas_adjuntos/"));
        assert!(archivo.contains("/ine-"));
        assert!(archivo.ends_with(".pdf"));
        assert!(test.storage.contains(&archivo));
        assert_eq!(stamped.url, Some(format!("/uploads/{archivo}")));
        assert_eq!(
            test.auditorias()[0].descripcion,
            format!("Editado Archivo Adjunto {}", adjunto.id)
        );
    }

    #[tokio::test]
    async fn test_upload_replaces_row_holding_a_file() {
        let test = TestContext::new();
        let anterior = seed_adjunto(&test, Some("personas_adjuntos/viejo.pdf"));
        let user = test.user_with("PERSONAS ADJUNTOS", Nivel::Modificar);

        let nuevo = AdjuntoService::new(&test.ctx)
            .replace_file(&user, anterior.id, "ine.jpg", vec![1, 2, 3])
            .await
            .unwrap();

        assert_ne!(nuevo.id, anterior.id);
        assert!(nuevo.is_active());
        assert_eq!(nuevo.tipo, TipoAdjunto::Ine);
        assert_eq!(test.get::<PersonaAdjunto>(anterior.id).estatus, Estatus::Baja);
        assert_eq!(
            test.auditorias()[0].descripcion,
            format!(
                "Editado Archivo Adjunto {}, se dio de baja {}",
                nuevo.id, anterior.id
            )
        );
    }

    #[tokio::test]
    async fn test_failed_upload_rolls_back_replacement() {
        let test = TestContext::with_storage(Arc::new(FailingStorage), Duration::from_secs(5));
        let anterior = seed_adjunto(&test, Some("personas_adjuntos/viejo.pdf"));
        let user = test.user_with("PERSONAS ADJUNTOS", Nivel::Modificar);

        let err = AdjuntoService::new(&test.ctx)
            .replace_file(&user, anterior.id, "ine.pdf", b"%PDF".to_vec())
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), 502);
        assert_eq!(test.count::<PersonaAdjunto>(), 1);
        let restaurado = test.get::<PersonaAdjunto>(anterior.id);
        assert!(restaurado.is_active());
        assert_eq!(restaurado.archivo, anterior.archivo);
        assert!(test.auditorias().is_empty());
    }

    #[tokio::test]
    async fn test_failed_stamp_rolls_back_replacement_and_object() {
        let test = TestContext::new();
        let anterior = seed_adjunto(&test, Some("personas_adjuntos/viejo.pdf"));
        let user = test.user_with("PERSONAS ADJUNTOS", Nivel::Modificar);
        test.fail_stamps();

        let err = AdjuntoService::new(&test.ctx)
            .replace_file(&user, anterior.id, "ine.pdf", b"%PDF".to_vec())
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), 500);
        assert_eq!(test.count::<PersonaAdjunto>(), 1);
        let restaurado = test.get::<PersonaAdjunto>(anterior.id);
        assert!(restaurado.is_active());
        assert_eq!(restaurado.archivo, anterior.archivo);
        assert!(test.storage.is_empty());
        assert!(test.auditorias().is_empty());
    }

    #[tokio::test]
    async fn test_failed_stamp_in_place_removes_object() {
        let test = TestContext::new();
        let adjunto = seed_adjunto(&test, None);
        let user = test.user_with("PERSONAS ADJUNTOS", Nivel::Modificar);
        test.fail_stamps();

        AdjuntoService::new(&test.ctx)
            .replace_file(&user, adjunto.id, "ine.pdf", b"%PDF".to_vec())
            .await
            .unwrap_err();

        let sin_archivo = test.get::<PersonaAdjunto>(adjunto.id);
        assert!(sin_archivo.is_active());
        assert!(sin_archivo.archivo.is_none());
        assert!(test.storage.is_empty());
    }

    #[tokio::test]
    async fn test_failed_rollback_keeps_upload_error() {
        let test = TestContext::with_storage(Arc::new(FailingStorage), Duration::from_secs(5));
        let anterior = seed_adjunto(&test, Some("personas_adjuntos/viejo.pdf"));
        let user = test.user_with("PERSONAS ADJUNTOS", Nivel::Modificar);
        test.fail_rollbacks();

        let err = AdjuntoService::new(&test.ctx)
            .replace_file(&user, anterior.id, "ine.pdf", b"%PDF".to_vec())
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), 502);
        assert!(err.to_string().contains("bucket unavailable"));
    }

    #[tokio::test]
    async fn test_slow_upload_times_out_and_rolls_back() {
        let test = TestContext::with_storage(Arc::new(SlowStorage), Duration::from_millis(20));
        let anterior = seed_adjunto(&test, Some("personas_adjuntos/viejo.pdf"));
        let user = test.user_with("PERSONAS ADJUNTOS", Nivel::Modificar);

        let err = AdjuntoService::new(&test.ctx)
            .replace_file(&user, anterior.id, "ine.pdf", b"%PDF".to_vec())
            .await
            .unwrap_err();

        assert_eq!(err.error_code(), "STORAGE_TIMEOUT");
        assert_eq!(test.count::<PersonaAdjunto>(), 1);
        assert!(test.get::<PersonaAdjunto>(anterior.id).is_active());
    }

    #[tokio::test]
    async fn test_disallowed_extension_touches_nothing() {
        let test = TestContext::new();
        let anterior = seed_adjunto(&test, Some("personas_adjuntos/viejo.pdf"));
        let user = test.user_with("PERSONAS ADJUNTOS", Nivel::Modificar);
        let service = AdjuntoService::new(&test.ctx);

        let err = service
            .replace_file(&user, anterior.id, "foto.gif", vec![0])
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.to_string(), "Tipo de archivo no permitido: gif");

        let err = service
            .replace_file(&user, anterior.id, "sin_extension", vec![0])
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 400);

        assert_eq!(test.count::<PersonaAdjunto>(), 1);
        assert!(test.storage.is_empty());
        assert!(test.auditorias().is_empty());
    }

    #[tokio::test]
    async fn test_nombramientos_accept_docx() {
        let test = TestContext::new();
        let persona = test.insert(Persona::new(
            "JUAN",
            "PEREZ",
            "PEGJ800101AB1",
            "PEGJ800101HCLRRN09",
        ));
        let nombramiento = test.insert(PersonaNombramiento {
            persona_id: persona.id,
            ..PersonaNombramiento::default()
        });
        let user = test.user_with("PERSONAS NOMBRAMIENTOS", Nivel::Modificar);

        let stamped = NombramientoService::new(&test.ctx)
            .replace_file(&user, nombramiento.id, "oficio.docx", vec![0])
            .await
            .unwrap();
        assert!(stamped.archivo.unwrap().ends_with(".docx"));

        let err = AdjuntoService::new(&test.ctx)
            .replace_file(&user, 1, "oficio.docx", vec![0])
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 403);
    }

    #[tokio::test]
    async fn test_upload_needs_modificar() {
        let test = TestContext::new();
        let adjunto = seed_adjunto(&test, None);
        let user = test.user_with("PERSONAS ADJUNTOS", Nivel::Ver);
        let service = AdjuntoService::new(&test.ctx);

        let err = service.authorize(&user).await.unwrap_err();
        assert_eq!(err.status_code(), 403);

        let err = service
            .replace_file(&user, adjunto.id, "ine.pdf", vec![0])
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 403);
        assert!(test.storage.is_empty());

        let editor = test.user_with("PERSONAS ADJUNTOS", Nivel::Modificar);
        service.authorize(&editor).await.unwrap();
    }
}
