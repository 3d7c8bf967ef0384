//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{get, post, put, MethodRouter},
    Router,
};
use orion_core::entities::{
    Area, Atribucion, AtribucionCt, Banco, Carrera, CentroTrabajo, Distrito, Domicilio,
    HistorialAcademico, HistorialPuesto, Incapacidad, Licencia, Modulo, NivelAcademico, Organo,
    Permiso, Persona, PersonaAdjunto, PersonaDomicilio, PersonaFotografia, PersonaNombramiento,
    Puesto, PuestoFuncion, Rol, Turno, Usuario, UsuarioRol,
};
use orion_service::{Archivo, Resource};
use serde::Serialize;

use crate::handlers::{archivos, auth, bitacoras, health, menu, personas, resource, tareas, usuarios};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(authorization_routes())
        .merge(catalog_routes())
        .merge(persona_routes())
        .merge(log_routes())
        .merge(tarea_routes())
}

/// The six routes every resource has
fn resource_routes<T>() -> Router<AppState>
where
    T: Resource + Serialize,
{
    resource_routes_with::<T>(get(resource::get::<T>))
}

/// Resource routes with a custom detail handler
fn resource_routes_with<T>(detail: MethodRouter<AppState>) -> Router<AppState>
where
    T: Resource + Serialize,
{
    let ruta = T::TABLA.ruta();
    Router::new()
        .route(&ruta, get(resource::list::<T>).post(resource::create::<T>))
        .route(
            &format!("{ruta}/:id"),
            detail
                .patch(resource::update::<T>)
                .delete(resource::delete::<T>),
        )
        .route(&format!("{ruta}/:id/recover"), post(resource::recover::<T>))
}

/// Resource routes plus the file upload
fn archivo_routes<T>() -> Router<AppState>
where
    T: Archivo + Serialize,
{
    resource_routes::<T>().route(
        &format!("{}/:id/file", T::TABLA.ruta()),
        post(archivos::upload::<T>),
    )
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(auth::login))
        .route("/auth/refresh", post(auth::refresh_token))
        .route("/auth/logout", post(auth::logout))
        .route("/auth/me", get(auth::me))
        .route("/menu", get(menu::menu))
}

/// Modules, roles, permissions and users
fn authorization_routes() -> Router<AppState> {
    Router::new()
        .merge(resource_routes::<Modulo>())
        .merge(resource_routes::<Rol>())
        .merge(resource_routes::<Permiso>())
        .merge(resource_routes::<Usuario>())
        .merge(resource_routes::<UsuarioRol>())
        .route(
            "/usuarios/:id/api_key",
            post(usuarios::create_api_key).delete(usuarios::clear_api_key),
        )
        .route("/usuarios/:id/password", put(usuarios::set_password))
}

/// Organization catalogs
fn catalog_routes() -> Router<AppState> {
    Router::new()
        .merge(resource_routes::<Distrito>())
        .merge(resource_routes::<Organo>())
        .merge(resource_routes::<CentroTrabajo>())
        .merge(resource_routes::<Area>())
        .merge(resource_routes::<AtribucionCt>())
        .merge(resource_routes::<Puesto>())
        .merge(resource_routes::<PuestoFuncion>())
        .merge(resource_routes::<Atribucion>())
        .merge(resource_routes::<NivelAcademico>())
        .merge(resource_routes::<Banco>())
        .merge(resource_routes::<Carrera>())
        .merge(resource_routes::<Turno>())
}

/// Personas and everything hanging from them
fn persona_routes() -> Router<AppState> {
    Router::new()
        .merge(resource_routes::<Persona>())
        .route("/personas/search", get(personas::search))
        .merge(resource_routes::<Domicilio>())
        .merge(resource_routes::<PersonaDomicilio>())
        .merge(resource_routes::<HistorialPuesto>())
        .merge(resource_routes::<HistorialAcademico>())
        .merge(resource_routes_with::<Licencia>(get(personas::get_licencia)))
        .merge(resource_routes_with::<Incapacidad>(get(personas::get_incapacidad)))
        .merge(archivo_routes::<PersonaAdjunto>())
        .merge(archivo_routes::<PersonaFotografia>())
        .merge(archivo_routes::<PersonaNombramiento>())
}

/// Audit and login logs
fn log_routes() -> Router<AppState> {
    Router::new()
        .route("/bitacoras", get(bitacoras::list_bitacoras))
        .route("/bitacoras/:id", get(bitacoras::get_bitacora))
        .route("/entradas_salidas", get(bitacoras::list_entradas_salidas))
}

/// Background job routes
fn tarea_routes() -> Router<AppState> {
    Router::new()
        .route("/tareas", post(tareas::launch))
        .route("/tareas/in_progress", get(tareas::in_progress))
        .route(
            "/tareas/:id/progress",
            get(tareas::progress).put(tareas::report_progress),
        )
        .route("/tareas/:id/error", put(tareas::report_error))
}
