//! Refresh token storage in Redis.
//!
//! Stores refresh tokens with automatic expiration; logout revokes them.

use crate::pool::{RedisPool, RedisResult};
use redis::AsyncCommands;
use serde::{Deserialize, Serialize};

/// Key prefix for refresh tokens
const REFRESH_TOKEN_PREFIX: &str = "orion:refresh_token:";

/// Key prefix for the set of tokens issued to a user
const USER_TOKENS_PREFIX: &str = "orion:user_tokens:";

/// Default TTL for refresh tokens (7 days)
const DEFAULT_REFRESH_TOKEN_TTL: u64 = 7 * 24 * 60 * 60;

/// Stored refresh token data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshTokenData {
    /// Usuario this token belongs to
    pub usuario_id: i32,
    /// Session ID (one per login)
    pub session_id: String,
    /// Token creation timestamp (Unix epoch seconds)
    pub created_at: i64,
    /// IP address at login (optional)
    pub ip_address: Option<String>,
}

impl RefreshTokenData {
    /// Create new refresh token data
    #[must_use]
    pub fn new(usuario_id: i32, session_id: String) -> Self {
        Self {
            usuario_id,
            session_id,
            created_at: chrono::Utc::now().timestamp(),
            ip_address: None,
        }
    }

    /// Add IP address
    #[must_use]
    pub fn with_ip_address(mut self, ip: impl Into<String>) -> Self {
        self.ip_address = Some(ip.into());
        self
    }
}

/// Refresh token store for managing authentication sessions
#[derive(Clone)]
pub struct RefreshTokenStore {
    pool: RedisPool,
    ttl_seconds: u64,
}

impl RefreshTokenStore {
    /// Create a new refresh token store
    #[must_use]
    pub fn new(pool: RedisPool) -> Self {
        Self {
            pool,
            ttl_seconds: DEFAULT_REFRESH_TOKEN_TTL,
        }
    }

    /// Create with a TTL in seconds, usually the refresh token lifetime
    #[must_use]
    pub fn with_ttl(pool: RedisPool, ttl_seconds: u64) -> Self {
        Self {
            pool,
            ttl_seconds: ttl_seconds.max(1),
        }
    }

    /// Seconds a stored token lives
    #[must_use]
    pub fn ttl_seconds(&self) -> u64 {
        self.ttl_seconds
    }

    /// Generate Redis key for a refresh token
    fn key(token_id: &str) -> String {
        format!("{REFRESH_TOKEN_PREFIX}{token_id}")
    }

    fn user_key(usuario_id: i32) -> String {
        format!("{USER_TOKENS_PREFIX}{usuario_id}")
    }

    /// Store a refresh token
    pub async fn store(&self, token_id: &str, data: &RefreshTokenData) -> RedisResult<()> {
        let key = Self::key(token_id);
        self.pool.set(&key, data, Some(self.ttl_seconds)).await?;

        // Also add to the user's token set for tracking
        let user_set_key = Self::user_key(data.usuario_id);
        let mut conn = self.pool.get().await?;
        conn.sadd::<_, _, ()>(&user_set_key, token_id).await?;
        self.pool.expire(&user_set_key, self.ttl_seconds).await?;

        tracing::debug!(
            usuario_id = data.usuario_id,
            session_id = %data.session_id,
            "Stored refresh token"
        );

        Ok(())
    }

    /// Get refresh token data, `None` once expired or revoked
    pub async fn get(&self, token_id: &str) -> RedisResult<Option<RefreshTokenData>> {
        let key = Self::key(token_id);
        self.pool.get_value(&key).await
    }

    /// Revoke (delete) a refresh token
    pub async fn revoke(&self, token_id: &str) -> RedisResult<bool> {
        if let Some(data) = self.get(token_id).await? {
            let user_set_key = Self::user_key(data.usuario_id);
            let mut conn = self.pool.get().await?;
            conn.srem::<_, _, ()>(&user_set_key, token_id).await?;
        }

        let key = Self::key(token_id);
        let deleted = self.pool.delete(&key).await?;

        if deleted {
            tracing::debug!("Revoked refresh token");
        }

        Ok(deleted)
    }

    /// Revoke all tokens for a user (logout from all devices)
    pub async fn revoke_all_for_user(&self, usuario_id: i32) -> RedisResult<u32> {
        let user_set_key = Self::user_key(usuario_id);
        let mut conn = self.pool.get().await?;

        let token_ids: Vec<String> = conn.smembers(&user_set_key).await?;
        let count = token_ids.len() as u32;

        if !token_ids.is_empty() {
            let keys: Vec<String> = token_ids.iter().map(|id| Self::key(id)).collect();
            let keys_refs: Vec<&str> = keys.iter().map(String::as_str).collect();
            self.pool.delete_many(&keys_refs).await?;
        }

        conn.del::<_, ()>(&user_set_key).await?;

        tracing::info!(usuario_id, count, "Revoked all refresh tokens for user");

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::RedisPoolConfig;

    #[test]
    fn test_refresh_token_data_creation() {
        let data =
            RefreshTokenData::new(12345, "session123".to_string()).with_ip_address("192.168.1.1");

        assert_eq!(data.usuario_id, 12345);
        assert_eq!(data.session_id, "session123");
        assert_eq!(data.ip_address, Some("192.168.1.1".to_string()));
    }

    #[test]
    fn test_ttl_follows_token_lifetime() {
        let pool = RedisPool::new(RedisPoolConfig::default()).unwrap();
        assert_eq!(RefreshTokenStore::new(pool.clone()).ttl_seconds(), DEFAULT_REFRESH_TOKEN_TTL);
        assert_eq!(RefreshTokenStore::with_ttl(pool.clone(), 3600).ttl_seconds(), 3600);
        assert_eq!(RefreshTokenStore::with_ttl(pool, 0).ttl_seconds(), 1);
    }

    #[test]
    fn test_key_generation() {
        assert_eq!(RefreshTokenStore::key("abc123"), "orion:refresh_token:abc123");
        assert_eq!(RefreshTokenStore::user_key(7), "orion:user_tokens:7");
    }
}
