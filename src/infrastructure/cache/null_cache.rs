//! No-op cache implementation for disabled caching.

use super::backend::{CacheBackend, CacheResult};
use async_trait::async_trait;
use tracing::debug;

/// A cache backend that stores nothing.
///
/// Used when Redis is not configured or could not be reached at startup.
/// Every read is a miss and every write succeeds immediately, so the resolver
/// degrades to pure storage lookups.
pub struct NullCache;

impl NullCache {
    /// Creates a new NullCache instance.
    pub fn new() -> Self {
        debug!("Using NullCache (caching disabled)");
        Self
    }
}

impl Default for NullCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheBackend for NullCache {
    async fn get(&self, _key: &str) -> CacheResult<Option<String>> {
        Ok(None)
    }

    async fn set_with_expiry(
        &self,
        _key: &str,
        _value: &str,
        _ttl_seconds: u64,
    ) -> CacheResult<()> {
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }

    fn name(&self) -> &'static str {
        "disabled"
    }
}
