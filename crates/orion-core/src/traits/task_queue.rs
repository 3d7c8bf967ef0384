//! Task queue port - the external job runner

use async_trait::async_trait;
use uuid::Uuid;

use super::RepoResult;

#[async_trait]
pub trait TaskQueue: Send + Sync {
    /// Enqueue a command; the returned id becomes the Tarea primary key
    async fn enqueue(&self, comando: &str, args: serde_json::Value) -> RepoResult<Uuid>;

    /// Progress reported by the worker, `None` when the job is unknown
    async fn progress(&self, id: Uuid) -> RepoResult<Option<i32>>;

    /// Record progress on the job metadata
    async fn set_progress(&self, id: Uuid, progreso: i32) -> RepoResult<()>;
}
