//! Cache layer for short key lookups.
//!
//! [`CacheGateway`] is the typed interface the resolver consumes. It wraps a
//! [`CacheBackend`]:
//! - [`RedisCache`] - Production Redis-backed cache
//! - [`NullCache`] - No-op implementation when caching is disabled

mod backend;
mod gateway;
mod null_cache;
mod redis_cache;

#[cfg(test)]
pub(crate) mod testing;

pub use backend::{CacheBackend, CacheError, CacheResult};
pub use gateway::CacheGateway;
pub use null_cache::NullCache;
pub use redis_cache::RedisCache;
