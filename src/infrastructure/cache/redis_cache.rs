//! Redis-backed cache implementation.

use super::backend::{CacheBackend, CacheError, CacheResult};
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, info};

/// Redis cache for short key lookups.
///
/// Uses `ConnectionManager` for connection reuse and reconnection. Expiry is
/// delegated to Redis' native `EX` option. Errors are returned to the
/// [`super::CacheGateway`], which decides how to surface them.
pub struct RedisCache {
    client: ConnectionManager,
    key_prefix: String,
}

impl RedisCache {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://localhost:6379"`)
    /// - `key_prefix` - Namespace prepended to every key (`REDIS_KEY_PREFIX`)
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::Connection`] if the URL is invalid, the connection cannot
    /// be established, or the PING health check fails.
    pub async fn connect(redis_url: &str, key_prefix: impl Into<String>) -> CacheResult<Self> {
        info!("Connecting to Redis");

        let client = Client::open(redis_url)
            .map_err(|e| CacheError::Connection(format!("Failed to create Redis client: {}", e)))?;

        let manager = ConnectionManager::new(client)
            .await
            .map_err(|e| CacheError::Connection(format!("Failed to connect to Redis: {}", e)))?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| CacheError::Connection(format!("Redis PING failed: {}", e)))?;

        info!("Connected to Redis");

        Ok(Self {
            client: manager,
            key_prefix: key_prefix.into(),
        })
    }

    /// Constructs the full Redis key with namespace prefix.
    fn build_key(&self, key: &str) -> String {
        format!("{}{}", self.key_prefix, key)
    }
}

#[async_trait]
impl CacheBackend for RedisCache {
    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        let redis_key = self.build_key(key);
        let mut conn = self.client.clone();

        conn.get::<_, Option<String>>(&redis_key)
            .await
            .map_err(|e| CacheError::Operation(format!("GET {}: {}", redis_key, e)))
    }

    async fn set_with_expiry(&self, key: &str, value: &str, ttl_seconds: u64) -> CacheResult<()> {
        let redis_key = self.build_key(key);
        let mut conn = self.client.clone();

        conn.set_ex::<_, _, ()>(&redis_key, value, ttl_seconds)
            .await
            .map_err(|e| CacheError::Operation(format!("SET {}: {}", redis_key, e)))?;

        debug!(key = %redis_key, ttl_seconds, "Cache SET");
        Ok(())
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }

    fn name(&self) -> &'static str {
        "redis"
    }
}
