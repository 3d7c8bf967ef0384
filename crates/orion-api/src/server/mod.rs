//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use orion_cache::{RedisPool, RedisTaskQueue, RefreshTokenStore};
use orion_common::{AppConfig, AppError, JwtService, LocalStorage};
use orion_core::entities::{
    Area, Atribucion, AtribucionCt, Banco, Carrera, CentroTrabajo, Distrito, Domicilio,
    HistorialAcademico, Incapacidad, Licencia, NivelAcademico, Organo, PersonaDomicilio, Puesto,
    PuestoFuncion, Turno,
};
use orion_db::repositories::{
    PgAreaRepository, PgAtribucionCtRepository, PgAtribucionRepository, PgBancoRepository,
    PgBitacoraRepository, PgCarreraRepository, PgCentroTrabajoRepository, PgDistritoRepository,
    PgDomicilioRepository, PgEntradaSalidaRepository, PgHistorialAcademicoRepository,
    PgHistorialPuestoRepository, PgIncapacidadRepository, PgLicenciaRepository,
    PgLifecycleRepository, PgModuloRepository, PgNivelAcademicoRepository, PgOrganoRepository,
    PgPermisoRepository, PgPersonaAdjuntoRepository, PgPersonaDomicilioRepository,
    PgPersonaFotografiaRepository, PgPersonaNombramientoRepository, PgPersonaRepository,
    PgPuestoFuncionRepository, PgPuestoRepository, PgRolRepository, PgTareaRepository,
    PgTurnoRepository, PgUniqueFieldRepository, PgUsuarioRepository, PgUsuarioRolRepository,
};
use orion_db::{create_pool, run_migrations, PgPool};
use orion_service::{ServiceContext, ServiceContextBuilder};
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware;
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
///
/// Health routes stay outside the middleware so probes are never rate limited.
pub fn create_app(state: AppState) -> Router {
    let router = apply_middleware(create_router(), state.config());
    router.merge(health_routes()).with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Create database pool
    info!("Connecting to PostgreSQL...");
    let db_config = orion_db::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        ..Default::default()
    };
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    run_migrations(&pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    // Create Redis pool
    info!("Connecting to Redis...");
    let redis_pool =
        RedisPool::from_config(&config.redis).map_err(|e| AppError::Cache(e.to_string()))?;
    info!("Redis pool created");

    let service_context = build_service_context(&config, &pool, &redis_pool)
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config, pool, redis_pool))
}

/// Wire every PostgreSQL repository, the Redis collaborators and the storage
fn build_service_context(
    config: &AppConfig,
    pool: &PgPool,
    redis_pool: &RedisPool,
) -> orion_service::ServiceResult<ServiceContext> {
    let jwt_service = Arc::new(JwtService::new(
        &config.jwt.secret,
        config.jwt.access_token_expiry,
        config.jwt.refresh_token_expiry,
    ));
    let storage = Arc::new(LocalStorage::from_config(&config.storage));
    let task_queue = Arc::new(RedisTaskQueue::new(
        redis_pool.clone(),
        config.tasks.queue.clone(),
    ));

    ServiceContextBuilder::new()
        // Authorization
        .modulo_repo(Arc::new(PgModuloRepository::new(pool.clone())))
        .rol_repo(Arc::new(PgRolRepository::new(pool.clone())))
        .permiso_repo(Arc::new(PgPermisoRepository::new(pool.clone())))
        .usuario_repo(Arc::new(PgUsuarioRepository::new(pool.clone())))
        .usuario_rol_repo(Arc::new(PgUsuarioRolRepository::new(pool.clone())))
        // Catalogs
        .entity_repo::<Distrito, _>(Arc::new(PgDistritoRepository::new(pool.clone())))
        .entity_repo::<Organo, _>(Arc::new(PgOrganoRepository::new(pool.clone())))
        .entity_repo::<CentroTrabajo, _>(Arc::new(PgCentroTrabajoRepository::new(pool.clone())))
        .entity_repo::<Area, _>(Arc::new(PgAreaRepository::new(pool.clone())))
        .entity_repo::<AtribucionCt, _>(Arc::new(PgAtribucionCtRepository::new(pool.clone())))
        .entity_repo::<Puesto, _>(Arc::new(PgPuestoRepository::new(pool.clone())))
        .entity_repo::<PuestoFuncion, _>(Arc::new(PgPuestoFuncionRepository::new(pool.clone())))
        .entity_repo::<Atribucion, _>(Arc::new(PgAtribucionRepository::new(pool.clone())))
        .entity_repo::<NivelAcademico, _>(Arc::new(PgNivelAcademicoRepository::new(pool.clone())))
        .entity_repo::<Banco, _>(Arc::new(PgBancoRepository::new(pool.clone())))
        .entity_repo::<Carrera, _>(Arc::new(PgCarreraRepository::new(pool.clone())))
        .entity_repo::<Turno, _>(Arc::new(PgTurnoRepository::new(pool.clone())))
        // Personas
        .persona_repo(Arc::new(PgPersonaRepository::new(pool.clone())))
        .historial_puesto_repo(Arc::new(PgHistorialPuestoRepository::new(pool.clone())))
        .entity_repo::<Domicilio, _>(Arc::new(PgDomicilioRepository::new(pool.clone())))
        .entity_repo::<PersonaDomicilio, _>(Arc::new(PgPersonaDomicilioRepository::new(
            pool.clone(),
        )))
        .entity_repo::<HistorialAcademico, _>(Arc::new(PgHistorialAcademicoRepository::new(
            pool.clone(),
        )))
        .entity_repo::<Licencia, _>(Arc::new(PgLicenciaRepository::new(pool.clone())))
        .entity_repo::<Incapacidad, _>(Arc::new(PgIncapacidadRepository::new(pool.clone())))
        .persona_adjunto_repo(Arc::new(PgPersonaAdjuntoRepository::new(pool.clone())))
        .persona_fotografia_repo(Arc::new(PgPersonaFotografiaRepository::new(pool.clone())))
        .persona_nombramiento_repo(Arc::new(PgPersonaNombramientoRepository::new(pool.clone())))
        // Cross-cutting
        .lifecycle_repo(Arc::new(PgLifecycleRepository::new(pool.clone())))
        .unique_repo(Arc::new(PgUniqueFieldRepository::new(pool.clone())))
        .bitacora_repo(Arc::new(PgBitacoraRepository::new(pool.clone())))
        .entrada_salida_repo(Arc::new(PgEntradaSalidaRepository::new(pool.clone())))
        .tarea_repo(Arc::new(PgTareaRepository::new(pool.clone())))
        // Redis, storage and secrets
        .refresh_token_store(RefreshTokenStore::with_ttl(
            redis_pool.clone(),
            u64::try_from(config.jwt.refresh_token_expiry).unwrap_or_default(),
        ))
        .task_queue(task_queue)
        .storage(storage, Duration::from_secs(config.storage.timeout_secs))
        .jwt_service(jwt_service)
        .security(config.security.salt.clone(), config.security.api_key_days)
        .build()
}

/// Run the HTTP server on an already bound listener
pub async fn serve(listener: TcpListener, app: Router) -> Result<(), AppError> {
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .map_err(|e| AppError::Config(format!("Server error: {}", e)))
}

/// Run the HTTP server
pub async fn run_server(app: Router, address: &str) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", address);

    let listener = TcpListener::bind(address)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {}: {}", address, e)))?;

    info!("Server listening on http://{}", address);

    serve(listener, app).await
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let address = config.api.address();

    // Create app state
    let state = create_app_state(config).await?;

    // Build application
    let app = create_app(state);

    // Run server
    run_server(app, &address).await
}
