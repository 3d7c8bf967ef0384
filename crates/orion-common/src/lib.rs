//! # orion-common
//!
//! Shared utilities: configuration, errors, authentication, telemetry,
//! object storage and text sanitizers.

pub mod auth;
pub mod config;
pub mod error;
pub mod storage;
pub mod telemetry;
pub mod text;

pub use auth::{
    generate_api_key, hash_password, validate_password_strength, verify_password, Claims,
    JwtService, PasswordService, TokenPair, TokenType,
};
pub use config::{
    AppConfig, AppSettings, ConfigError, CorsConfig, DatabaseConfig, Environment, JwtConfig,
    RateLimitConfig, RedisConfig, SecurityConfig, ServerConfig, StorageConfig, TasksConfig,
};
pub use error::{AppError, AppResult, ErrorResponse};
pub use storage::{
    FileUpload, LocalStorage, MemoryStorage, ObjectStorage, StorageError, EXTENSIONES_DOCUMENTOS,
    EXTENSIONES_NOMBRAMIENTOS,
};
pub use telemetry::{
    init_tracing, init_tracing_with_config, try_init_tracing, try_init_tracing_with_config,
    TracingConfig, TracingError,
};
