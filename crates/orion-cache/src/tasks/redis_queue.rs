//! Redis task queue
//!
//! Jobs are pushed as JSON onto a list named after the queue. Each job also
//! gets a metadata hash `orion:job:{id}` whose `progress` field the worker
//! updates while it runs.

use async_trait::async_trait;
use orion_core::traits::{RepoResult, TaskQueue};
use redis::AsyncCommands;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::pool::{RedisPool, RedisResult};

/// Key prefix of the job metadata hashes
pub const JOB_PREFIX: &str = "orion:job:";

/// Metadata is kept for a week after the last write
const JOB_TTL: i64 = 7 * 24 * 60 * 60;

const PROGRESS_FIELD: &str = "progress";

/// Message pushed onto the queue list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPayload {
    pub id: Uuid,
    pub comando: String,
    pub args: serde_json::Value,
    pub encolado: i64,
}

/// [`TaskQueue`] over a Redis list plus one metadata hash per job
#[derive(Clone)]
pub struct RedisTaskQueue {
    pool: RedisPool,
    queue: String,
}

impl RedisTaskQueue {
    pub fn new(pool: RedisPool, queue: impl Into<String>) -> Self {
        Self {
            pool,
            queue: queue.into(),
        }
    }

    /// Redis list the workers pop from
    pub fn list_key(&self) -> String {
        format!("orion:queue:{}", self.queue)
    }

    fn job_key(id: Uuid) -> String {
        format!("{JOB_PREFIX}{id}")
    }

    async fn push(&self, payload: &JobPayload) -> RedisResult<()> {
        let message = serde_json::to_string(payload)?;
        let job_key = Self::job_key(payload.id);
        let mut conn = self.pool.get().await?;

        redis::pipe()
            .atomic()
            .hset(&job_key, "comando", &payload.comando)
            .ignore()
            .hset(&job_key, PROGRESS_FIELD, 0)
            .ignore()
            .expire(&job_key, JOB_TTL)
            .ignore()
            .lpush(self.list_key(), message)
            .ignore()
            .query_async::<()>(&mut conn)
            .await?;

        Ok(())
    }

    async fn read_progress(&self, id: Uuid) -> RedisResult<Option<i32>> {
        let mut conn = self.pool.get().await?;
        let progreso: Option<i32> = conn.hget(Self::job_key(id), PROGRESS_FIELD).await?;
        Ok(progreso)
    }

    async fn write_progress(&self, id: Uuid, progreso: i32) -> RedisResult<()> {
        let job_key = Self::job_key(id);
        let mut conn = self.pool.get().await?;

        redis::pipe()
            .atomic()
            .hset(&job_key, PROGRESS_FIELD, progreso)
            .ignore()
            .expire(&job_key, JOB_TTL)
            .ignore()
            .query_async::<()>(&mut conn)
            .await?;

        Ok(())
    }
}

#[async_trait]
impl TaskQueue for RedisTaskQueue {
    #[instrument(skip(self, args), fields(queue = %self.queue))]
    async fn enqueue(&self, comando: &str, args: serde_json::Value) -> RepoResult<Uuid> {
        let payload = JobPayload {
            id: Uuid::new_v4(),
            comando: comando.to_string(),
            args,
            encolado: chrono::Utc::now().timestamp(),
        };

        self.push(&payload).await?;

        info!(id = %payload.id, "Job enqueued");
        Ok(payload.id)
    }

    #[instrument(skip(self))]
    async fn progress(&self, id: Uuid) -> RepoResult<Option<i32>> {
        Ok(self.read_progress(id).await?)
    }

    #[instrument(skip(self))]
    async fn set_progress(&self, id: Uuid, progreso: i32) -> RepoResult<()> {
        self.write_progress(id, progreso).await?;
        debug!(progreso, "Job progress updated");
        Ok(())
    }
}
