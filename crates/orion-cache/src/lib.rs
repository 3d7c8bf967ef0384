//! # orion-cache
//!
//! Redis layer for authentication sessions and background jobs.
//!
//! ## Features
//!
//! - **Connection Pool**: Managed Redis connection pool with deadpool
//! - **Session Storage**: Refresh tokens, revocable per token or per user
//! - **Task Queue**: Job list consumed by the external workers, plus the
//!   per-job metadata hash where workers report progress
//!
//! ## Example
//!
//! ```ignore
//! use orion_cache::{RedisPool, RedisPoolConfig, RedisTaskQueue};
//! use orion_core::traits::TaskQueue;
//!
//! let pool = RedisPool::new(RedisPoolConfig::default())?;
//! let queue = RedisTaskQueue::new(pool.clone(), "orion");
//!
//! let id = queue.enqueue("personas.exportar", serde_json::json!([])).await?;
//! let progreso = queue.progress(id).await?;
//! ```

pub mod pool;
pub mod session;
pub mod tasks;

// Re-export pool types
pub use pool::{RedisPool, RedisPoolConfig, RedisPoolError, RedisResult};

// Re-export session types
pub use session::{RefreshTokenData, RefreshTokenStore};

// Re-export task types
pub use tasks::{JobPayload, RedisTaskQueue, JOB_PREFIX};
