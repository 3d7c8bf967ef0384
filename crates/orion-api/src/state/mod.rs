//! Application state
//!
//! Holds the shared state for the Axum application: the service context,
//! the configuration and the pools probed by the readiness check.

use std::sync::Arc;

use orion_cache::RedisPool;
use orion_common::AppConfig;
use orion_db::PgPool;
use orion_service::ServiceContext;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Service context containing all dependencies
    service_context: Arc<ServiceContext>,
    /// Application configuration
    config: Arc<AppConfig>,
    db_pool: PgPool,
    redis_pool: RedisPool,
}

impl AppState {
    /// Create a new AppState
    pub fn new(
        service_context: ServiceContext,
        config: AppConfig,
        db_pool: PgPool,
        redis_pool: RedisPool,
    ) -> Self {
        Self {
            service_context: Arc::new(service_context),
            config: Arc::new(config),
            db_pool,
            redis_pool,
        }
    }

    /// Get the service context
    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    /// Get the application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// PostgreSQL pool, for health probes
    pub fn db_pool(&self) -> &PgPool {
        &self.db_pool
    }

    /// Redis pool, for health probes
    pub fn redis_pool(&self) -> &RedisPool {
        &self.redis_pool
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("service_context", &"ServiceContext")
            .field("config", &"AppConfig")
            .finish()
    }
}
