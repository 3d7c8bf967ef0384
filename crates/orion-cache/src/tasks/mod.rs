//! Background task queue backed by Redis.

mod redis_queue;

pub use redis_queue::{JobPayload, RedisTaskQueue, JOB_PREFIX};
