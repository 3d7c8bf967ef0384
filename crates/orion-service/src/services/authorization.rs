//! Authorization resources
//!
//! Modulo, Rol and Usuario are aggregate roots: their delete and recover
//! cascade through the repository. Permiso and UsuarioRol are pairs that
//! may exist only once.

use async_trait::async_trait;
use orion_common::text::{safe_curp, safe_email, safe_string};
use orion_core::entities::{Modulo, Permiso, Rol, Usuario, UsuarioRol};
use orion_core::{CampoUnico, Estatus};

use crate::dto::{ModuloRequest, PermisoRequest, RolRequest, UsuarioRequest, UsuarioRolRequest};

use super::context::ServiceContext;
use super::current_user::CurrentUser;
use super::error::ServiceResult;
use super::lifecycle::LifecycleService;
use super::resource::{referenced, required_text, CrudService, Resource};

pub type ModuloService<'a> = CrudService<'a, Modulo>;
pub type RolService<'a> = CrudService<'a, Rol>;
pub type PermisoService<'a> = CrudService<'a, Permiso>;
pub type UsuarioService<'a> = CrudService<'a, Usuario>;
pub type UsuarioRolService<'a> = CrudService<'a, UsuarioRol>;

// ============================================================================
// Aggregate roots
// ============================================================================

#[async_trait]
impl Resource for Modulo {
    type Request = ModuloRequest;

    fn fill(&mut self, request: ModuloRequest) -> ServiceResult<()> {
        self.nombre = required_text(&request.nombre, 256, "El nombre es obligatorio.")?;
        self.nombre_corto = request.nombre_corto.trim().to_string();
        self.icono = request.icono.trim().to_string();
        self.ruta = request.ruta.trim().to_string();
        self.en_navegacion = request.en_navegacion;
        self.en_plataforma = request.en_plataforma;
        Ok(())
    }

    fn describe(&self) -> String {
        self.nombre.clone()
    }

    fn unique_fields(&self) -> Vec<(CampoUnico, String)> {
        vec![(CampoUnico::ModuloNombre, self.nombre.clone())]
    }

    async fn set_status(
        ctx: &ServiceContext,
        user: &CurrentUser,
        id: i32,
        estatus: Estatus,
    ) -> ServiceResult<bool> {
        LifecycleService::new(ctx)
            .cascade::<Modulo, _>(ctx.modulo_repo(), user, id, estatus)
            .await
    }
}

#[async_trait]
impl Resource for Rol {
    type Request = RolRequest;

    fn fill(&mut self, request: RolRequest) -> ServiceResult<()> {
        self.nombre = required_text(&request.nombre, 256, "El nombre es obligatorio.")?;
        Ok(())
    }

    fn describe(&self) -> String {
        self.nombre.clone()
    }

    fn unique_fields(&self) -> Vec<(CampoUnico, String)> {
        vec![(CampoUnico::RolNombre, self.nombre.clone())]
    }

    async fn set_status(
        ctx: &ServiceContext,
        user: &CurrentUser,
        id: i32,
        estatus: Estatus,
    ) -> ServiceResult<bool> {
        LifecycleService::new(ctx)
            .cascade::<Rol, _>(ctx.rol_repo(), user, id, estatus)
            .await
    }
}

#[async_trait]
impl Resource for Usuario {
    type Request = UsuarioRequest;

    fn fill(&mut self, request: UsuarioRequest) -> ServiceResult<()> {
        self.email = safe_email(&request.email, false)?;
        self.nombres = required_text(&request.nombres, 256, "Los nombres son obligatorios.")?;
        self.apellido_paterno = required_text(
            &request.apellido_paterno,
            256,
            "El apellido paterno es obligatorio.",
        )?;
        self.apellido_materno = safe_string(&request.apellido_materno, 256, true);
        self.curp = safe_curp(&request.curp, true, false)?;
        self.puesto = safe_string(&request.puesto, 256, true);
        Ok(())
    }

    fn describe(&self) -> String {
        self.email.clone()
    }

    fn unique_fields(&self) -> Vec<(CampoUnico, String)> {
        vec![(CampoUnico::UsuarioEmail, self.email.clone())]
    }

    async fn set_status(
        ctx: &ServiceContext,
        user: &CurrentUser,
        id: i32,
        estatus: Estatus,
    ) -> ServiceResult<bool> {
        LifecycleService::new(ctx)
            .cascade::<Usuario, _>(ctx.usuario_repo(), user, id, estatus)
            .await
    }
}

// ============================================================================
// Pairs
// ============================================================================

#[async_trait]
impl Resource for Permiso {
    type Request = PermisoRequest;

    fn fill(&mut self, request: PermisoRequest) -> ServiceResult<()> {
        self.rol_id = request.rol_id;
        self.modulo_id = request.modulo_id;
        self.nivel = request.nivel;
        Ok(())
    }

    fn describe(&self) -> String {
        self.nombre.clone()
    }

    async fn prepare(&mut self, ctx: &ServiceContext) -> ServiceResult<()> {
        let rol = referenced::<Rol>(ctx, self.rol_id).await?;
        let modulo = referenced::<Modulo>(ctx, self.modulo_id).await?;
        self.nombre = Permiso::nombrar(&rol.nombre, self.nivel, &modulo.nombre);
        Ok(())
    }

    async fn find_duplicate(&self, ctx: &ServiceContext) -> ServiceResult<Option<Self>> {
        Ok(ctx
            .permiso_repo()
            .find_pair(self.rol_id, self.modulo_id)
            .await?)
    }
}

#[async_trait]
impl Resource for UsuarioRol {
    type Request = UsuarioRolRequest;

    const RECOVERS_DUPLICATE: bool = true;

    fn fill(&mut self, request: UsuarioRolRequest) -> ServiceResult<()> {
        self.usuario_id = request.usuario_id;
        self.rol_id = request.rol_id;
        Ok(())
    }

    fn describe(&self) -> String {
        self.descripcion.clone()
    }

    async fn prepare(&mut self, ctx: &ServiceContext) -> ServiceResult<()> {
        let usuario = referenced::<Usuario>(ctx, self.usuario_id).await?;
        let rol = referenced::<Rol>(ctx, self.rol_id).await?;
        self.descripcion = UsuarioRol::describir(&usuario.email, &rol.nombre);
        Ok(())
    }

    async fn find_duplicate(&self, ctx: &ServiceContext) -> ServiceResult<Option<Self>> {
        Ok(ctx
            .usuario_rol_repo()
            .find_pair(self.usuario_id, self.rol_id)
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::permission::PermissionService;
    use crate::services::testing::TestContext;
    use orion_core::{Entity, Nivel, Tabla};

    fn rol(nombre: &str) -> RolRequest {
        RolRequest {
            nombre: nombre.to_string(),
        }
    }

    fn usuario(email: &str) -> UsuarioRequest {
        UsuarioRequest {
            email: email.to_string(),
            nombres: "Ana".to_string(),
            apellido_paterno: "López".to_string(),
            apellido_materno: String::new(),
            curp: String::new(),
            puesto: "Capturista".to_string(),
        }
    }

    #[tokio::test]
    async fn test_second_rol_with_same_name_is_rejected() {
        let test = TestContext::new();
        let user = test.user_with("ROLES", Nivel::Crear);
        let service = RolService::new(&test.ctx);

        service.create(&user, rol("ADMIN")).await.unwrap();
        let err = service.create(&user, rol("admin")).await.unwrap_err();

        assert_eq!(err.status_code(), 400);
        assert_eq!(err.to_string(), "El nombre ya está en uso. Debe de ser único.");
        assert_eq!(test.count::<Rol>(), 1);
    }

    #[tokio::test]
    async fn test_rol_delete_and_recover_cascade() {
        let test = TestContext::new();
        let user = test.user_with("ROLES", Nivel::Administrar);
        let service = RolService::new(&test.ctx);

        let creado = service.create(&user, rol("CAPTURISTA")).await.unwrap();
        assert_eq!(
            service.delete(&user, creado.id).await.unwrap().estatus,
            Estatus::Baja
        );
        assert_eq!(
            service.recover(&user, creado.id).await.unwrap().estatus,
            Estatus::Activo
        );

        assert_eq!(
            test.cascadas(),
            vec![
                (Tabla::Roles, creado.id, Estatus::Baja),
                (Tabla::Roles, creado.id, Estatus::Activo),
            ]
        );
        let auditorias = test.auditorias();
        assert_eq!(auditorias[1].descripcion, format!("Eliminado Rol {}", creado.id));
        assert_eq!(auditorias[2].descripcion, format!("Recuperado Rol {}", creado.id));
    }

    #[tokio::test]
    async fn test_usuario_email_is_normalized_and_unique() {
        let test = TestContext::new();
        let user = test.user_with("USUARIOS", Nivel::Crear);
        let service = UsuarioService::new(&test.ctx);

        let creado = service.create(&user, usuario("Ana@PJECZ.gob.mx")).await.unwrap();
        assert_eq!(creado.email, "ana@pjecz.gob.mx");
        assert_eq!(creado.apellido_paterno, "LOPEZ");

        let err = service.create(&user, usuario("ana@pjecz.gob.mx")).await.unwrap_err();
        assert_eq!(err.to_string(), "El e-mail ya está en uso. Debe de ser único.");
    }

    #[tokio::test]
    async fn test_permiso_is_named_and_unique_per_pair() {
        let test = TestContext::new();
        let modulo = test.insert(Modulo::new("AREAS", "Áreas"));
        let capturista = test.insert(Rol::new("CAPTURISTA"));
        let user = test.user_with("PERMISOS", Nivel::Crear);
        let service = PermisoService::new(&test.ctx);

        let request = PermisoRequest {
            rol_id: capturista.id,
            modulo_id: modulo.id,
            nivel: Nivel::Modificar,
        };
        let permiso = service.create(&user, request.clone()).await.unwrap();
        assert_eq!(permiso.nombre, "CAPTURISTA puede VER y MODIFICAR en AREAS");

        let err = service.create(&user, request).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Ya existe CAPTURISTA puede VER y MODIFICAR en AREAS"
        );
        assert_eq!(test.count::<Permiso>(), 1);
    }

    #[tokio::test]
    async fn test_usuario_rol_recovers_deleted_pair() {
        let test = TestContext::new();
        let ana = test.seed_usuario("ana@pjecz.gob.mx");
        let capturista = test.insert(Rol::new("CAPTURISTA"));
        let user = test.user_with("USUARIOS ROLES", Nivel::Administrar);
        let service = UsuarioRolService::new(&test.ctx);
        let request = UsuarioRolRequest {
            usuario_id: ana.id,
            rol_id: capturista.id,
        };

        let asignado = service.create(&user, request.clone()).await.unwrap();
        assert_eq!(asignado.descripcion, "ana@pjecz.gob.mx en CAPTURISTA");

        let err = service.create(&user, request.clone()).await.unwrap_err();
        assert_eq!(err.to_string(), "Ya existe ana@pjecz.gob.mx en CAPTURISTA");

        service.delete(&user, asignado.id).await.unwrap();
        let recuperado = service.create(&user, request).await.unwrap();
        assert_eq!(recuperado.id, asignado.id);
        assert!(recuperado.is_active());
        assert_eq!(test.count::<UsuarioRol>(), 1);
    }

    #[tokio::test]
    async fn test_granting_through_services_opens_the_module() {
        let test = TestContext::new();
        let admin = test.user_with_all(Nivel::Administrar);

        let modulo = ModuloService::new(&test.ctx)
            .create(
                &admin,
                ModuloRequest {
                    nombre: "AREAS".to_string(),
                    nombre_corto: "Áreas".to_string(),
                    icono: "building".to_string(),
                    ruta: "/areas".to_string(),
                    en_navegacion: true,
                    en_plataforma: true,
                },
            )
            .await
            .unwrap();
        let capturista = RolService::new(&test.ctx)
            .create(&admin, rol("CAPTURISTA"))
            .await
            .unwrap();
        PermisoService::new(&test.ctx)
            .create(
                &admin,
                PermisoRequest {
                    rol_id: capturista.id,
                    modulo_id: modulo.id,
                    nivel: Nivel::Modificar,
                },
            )
            .await
            .unwrap();
        let u = UsuarioService::new(&test.ctx)
            .create(&admin, usuario("u@pjecz.gob.mx"))
            .await
            .unwrap();
        UsuarioRolService::new(&test.ctx)
            .create(
                &admin,
                UsuarioRolRequest {
                    usuario_id: u.id,
                    rol_id: capturista.id,
                },
            )
            .await
            .unwrap();

        let current = CurrentUser::new(u);
        let guard = PermissionService::new(&test.ctx);
        assert!(guard.check(&current, "AREAS", Nivel::Modificar).await.unwrap());
        assert!(!guard.check(&current, "AREAS", Nivel::Crear).await.unwrap());

        let menu = current.menu(&test.ctx).await.unwrap();
        assert_eq!(menu.len(), 1);
        assert_eq!(menu[0].ruta, "/areas");
    }

    #[tokio::test]
    async fn test_deleted_rol_closes_the_module() {
        let test = TestContext::new();
        let admin = test.user_with_all(Nivel::Administrar);
        let ana = test.seed_usuario("ana@pjecz.gob.mx");
        let modulo = test.insert(Modulo::new("BANCOS", "Bancos"));
        let capturista = test.insert(Rol::new("CAPTURISTA"));
        test.insert(Permiso::new(capturista.id, modulo.id, "P", Nivel::Ver));
        test.insert(UsuarioRol::new(ana.id, capturista.id, "ana en CAPTURISTA"));

        let guard = PermissionService::new(&test.ctx);
        assert!(guard
            .check(&CurrentUser::new(ana.clone()), "BANCOS", Nivel::Ver)
            .await
            .unwrap());

        RolService::new(&test.ctx).delete(&admin, capturista.id).await.unwrap();
        assert!(!guard
            .check(&CurrentUser::new(ana), "BANCOS", Nivel::Ver)
            .await
            .unwrap());
    }
}
