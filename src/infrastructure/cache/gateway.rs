//! Typed gateway between the resolver and the cache backend.

use std::sync::Arc;

use super::backend::CacheBackend;
use super::null_cache::NullCache;
use metrics::counter;
use tokio::task::JoinHandle;
use tracing::{Instrument, debug, warn};

/// The only interface the resolver uses to reach the cache service.
///
/// Reads never fail: a backend error is logged with `dependency = "cache"`,
/// counted in `dependency_failures_total`, and reported to the caller as a miss.
/// Writes run on a detached task and are never awaited by the resolver.
#[derive(Clone)]
pub struct CacheGateway {
    backend: Arc<dyn CacheBackend>,
}

impl CacheGateway {
    /// Wraps a cache backend.
    pub fn new(backend: Arc<dyn CacheBackend>) -> Self {
        Self { backend }
    }

    /// Gateway over [`NullCache`]: every read misses.
    pub fn disabled() -> Self {
        Self::new(Arc::new(NullCache::new()))
    }

    /// Name of the wrapped backend (`redis`, `disabled`, ...).
    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    /// Looks up the destination URL cached under `key`.
    ///
    /// Returns `None` on a miss and on backend failure. The two are told apart
    /// only in diagnostics: a miss logs at `debug`, a failure at `warn`.
    pub async fn get(&self, key: &str) -> Option<String> {
        match self.backend.get(key).await {
            Ok(Some(value)) => {
                debug!(key, "Cache HIT");
                Some(value)
            }
            Ok(None) => {
                debug!(key, "Cache MISS");
                None
            }
            Err(e) => {
                warn!(
                    dependency = "cache",
                    operation = "get",
                    backend = self.backend.name(),
                    key,
                    error = %e,
                    "Cache lookup failed, treating as miss"
                );
                counter!("dependency_failures_total", "dependency" => "cache", "operation" => "get")
                    .increment(1);
                None
            }
        }
    }

    /// Writes `key -> value` with a TTL on a detached task.
    ///
    /// The returned handle may be dropped; failures are only logged and
    /// counted. The write runs inside the caller's tracing span.
    pub fn set_with_expiry(&self, key: &str, value: &str, ttl_seconds: u64) -> JoinHandle<()> {
        let backend = Arc::clone(&self.backend);
        let key = key.to_string();
        let value = value.to_string();

        tokio::spawn(
            async move {
                if let Err(e) = backend.set_with_expiry(&key, &value, ttl_seconds).await {
                    warn!(
                        dependency = "cache",
                        operation = "set_with_expiry",
                        backend = backend.name(),
                        key = %key,
                        error = %e,
                        "Cache write failed"
                    );
                    counter!(
                        "dependency_failures_total",
                        "dependency" => "cache",
                        "operation" => "set_with_expiry"
                    )
                    .increment(1);
                }
            }
            .in_current_span(),
        )
    }

    /// Checks if the cache backend is reachable.
    pub async fn health_check(&self) -> bool {
        self.backend.health_check().await
    }
}
