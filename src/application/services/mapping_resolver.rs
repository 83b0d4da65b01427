//! Cache-aside mapping resolution.

use std::sync::Arc;

use crate::config::Config;
use crate::domain::entities::{Mapping, Resolution};
use crate::domain::repositories::MappingRepository;
use crate::infrastructure::cache::CacheGateway;
use metrics::counter;
use tracing::{debug, error, trace};

/// Settings the resolver needs, taken from [`Config`] at construction.
#[derive(Debug, Clone, Copy)]
pub struct ResolverSettings {
    /// TTL applied to cache entries written after a storage hit.
    pub cache_ttl_seconds: u64,
}

impl From<&Config> for ResolverSettings {
    fn from(config: &Config) -> Self {
        Self {
            cache_ttl_seconds: config.cache_ttl_seconds,
        }
    }
}

/// What a request wants resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    Key(&'a str),
    DestinationUrl(&'a str),
}

/// Resolves short keys and destination URLs to mappings.
///
/// Key lookups go cache first, then storage, and write storage hits back to
/// the cache on a detached task. Destination lookups always go to storage:
/// the cache is keyed by short key only.
///
/// Every failure collapses into [`Resolution::Absent`]; the cause is only
/// visible in logs and the `dependency_failures_total` counter. No state is
/// shared between calls and no lock is held across awaits, so concurrent
/// misses for the same key may each query storage and each write the cache.
pub struct MappingResolver<R: MappingRepository + ?Sized> {
    repository: Arc<R>,
    cache: CacheGateway,
    settings: ResolverSettings,
}

impl<R: MappingRepository + ?Sized> MappingResolver<R> {
    /// Creates a new resolver.
    pub fn new(repository: Arc<R>, cache: CacheGateway, settings: ResolverSettings) -> Self {
        Self {
            repository,
            cache,
            settings,
        }
    }

    /// Returns the cache gateway used for key lookups.
    pub fn cache(&self) -> &CacheGateway {
        &self.cache
    }

    /// Checks if durable storage is reachable.
    pub async fn storage_healthy(&self) -> bool {
        self.repository.health_check().await
    }

    /// Resolves a short key.
    ///
    /// 1. Cache hit: returned as-is, storage is not consulted.
    /// 2. Cache miss or cache failure: storage is queried by key.
    /// 3. Storage hit: returned, and `key -> destination_url` is written to the
    ///    cache with the configured TTL without awaiting the write.
    /// 4. Storage miss or failure: [`Resolution::Absent`].
    ///
    /// An empty key is absent without touching either dependency.
    pub async fn resolve_by_key(&self, key: &str) -> Resolution {
        if key.trim().is_empty() {
            debug!("Empty key, resolving as absent");
            record_outcome("key", "absent");
            return Resolution::Absent;
        }

        if let Some(destination_url) = self.cache.get(key).await {
            record_outcome("key", "cache_hit");
            return Resolution::Found(Mapping::new(key, destination_url));
        }

        match self.repository.find_by_key(key).await {
            Ok(Some(mapping)) => {
                trace!(key, "Storage hit, populating cache");
                self.cache.set_with_expiry(
                    key,
                    &mapping.destination_url,
                    self.settings.cache_ttl_seconds,
                );
                record_outcome("key", "storage_hit");
                Resolution::Found(mapping)
            }
            Ok(None) => {
                debug!(key, "No mapping for key");
                record_outcome("key", "absent");
                Resolution::Absent
            }
            Err(e) => {
                error!(
                    dependency = "storage",
                    operation = "find_by_key",
                    key,
                    error = %e,
                    "Storage lookup failed, resolving as absent"
                );
                record_storage_failure("find_by_key");
                record_outcome("key", "absent");
                Resolution::Absent
            }
        }
    }

    /// Resolves a destination URL to its existing mapping.
    ///
    /// Always queries storage and never reads or writes the cache. The URL is
    /// treated as an opaque string; an empty one is absent without a query.
    pub async fn resolve_by_destination_url(&self, destination_url: &str) -> Resolution {
        if destination_url.trim().is_empty() {
            debug!("Empty destination URL, resolving as absent");
            record_outcome("destination", "absent");
            return Resolution::Absent;
        }

        match self
            .repository
            .find_by_destination_url(destination_url)
            .await
        {
            Ok(Some(mapping)) => {
                record_outcome("destination", "storage_hit");
                Resolution::Found(mapping)
            }
            Ok(None) => {
                debug!(destination_url, "No mapping for destination URL");
                record_outcome("destination", "absent");
                Resolution::Absent
            }
            Err(e) => {
                error!(
                    dependency = "storage",
                    operation = "find_by_destination_url",
                    destination_url,
                    error = %e,
                    "Storage lookup failed, resolving as absent"
                );
                record_storage_failure("find_by_destination_url");
                record_outcome("destination", "absent");
                Resolution::Absent
            }
        }
    }

    /// Resolves `lookup` unless `memo` already holds an outcome for this request.
    pub async fn resolve_memoized(&self, memo: Resolution, lookup: Lookup<'_>) -> Resolution {
        if memo.is_attempted() {
            trace!(?lookup, "Mapping already resolved for this request");
            return memo;
        }

        match lookup {
            Lookup::Key(key) => self.resolve_by_key(key).await,
            Lookup::DestinationUrl(url) => self.resolve_by_destination_url(url).await,
        }
    }
}

fn record_outcome(path: &'static str, outcome: &'static str) {
    counter!("mapping_resolutions_total", "path" => path, "outcome" => outcome).increment(1);
}

fn record_storage_failure(operation: &'static str) {
    counter!("dependency_failures_total", "dependency" => "storage", "operation" => operation)
        .increment(1);
}
