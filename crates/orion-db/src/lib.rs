//! # orion-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `orion-core`. It handles:
//!
//! - Connection pool management and migrations
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations, each mutation audited in its own transaction
//!
//! ## Usage
//!
//! ```rust,ignore
//! use orion_db::pool::{create_pool, DatabaseConfig};
//! use orion_db::repositories::PgRolRepository;
//! use orion_core::traits::EntityRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env();
//!     let pool = create_pool(&config).await?;
//!     let roles = PgRolRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{
    PgBitacoraRepository, PgEntityRepository, PgEntradaSalidaRepository,
    PgHistorialPuestoRepository, PgLifecycleRepository, PgModuloRepository, PgPermisoRepository,
    PgPersonaRepository, PgRolRepository, PgTareaRepository, PgUniqueFieldRepository,
    PgUsuarioRepository, PgUsuarioRolRepository,
};
