//! Cache backend trait and error types.

use async_trait::async_trait;

/// Errors that can occur talking to the cache service.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Cache connection error: {0}")]
    Connection(String),
    #[error("Cache operation error: {0}")]
    Operation(String),
}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Raw access to the external cache service.
///
/// Backends report transport failures as [`CacheError`]. They are never used
/// directly by the resolver: [`super::CacheGateway`] wraps them and turns
/// failures into misses plus a diagnostic event.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisCache`] - Redis-backed cache with native TTL
/// - [`crate::infrastructure::cache::NullCache`] - No-op implementation for disabled caching
#[async_trait]
pub trait CacheBackend: Send + Sync {
    /// Reads the destination URL cached under `key`.
    ///
    /// Returns `Ok(None)` on a miss.
    async fn get(&self, key: &str) -> CacheResult<Option<String>>;

    /// Stores `value` under `key`, expiring after `ttl_seconds`.
    async fn set_with_expiry(&self, key: &str, value: &str, ttl_seconds: u64) -> CacheResult<()>;

    /// Checks if the cache backend is reachable.
    async fn health_check(&self) -> bool;

    /// Short backend name used in diagnostics and health output.
    fn name(&self) -> &'static str;
}
