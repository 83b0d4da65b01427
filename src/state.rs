//! Shared application state injected into handlers and middleware.

use std::sync::Arc;

use crate::application::services::MappingResolver;
use crate::domain::repositories::MappingRepository;

/// State shared across requests.
///
/// Holds only immutable handles; the resolver keeps no per-request state.
#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<MappingResolver<dyn MappingRepository>>,
    pub base_url: Arc<str>,
}

impl AppState {
    pub fn new(
        resolver: Arc<MappingResolver<dyn MappingRepository>>,
        base_url: impl Into<String>,
    ) -> Self {
        let base_url: String = base_url.into();
        Self {
            resolver,
            base_url: Arc::from(base_url.trim_end_matches('/')),
        }
    }

    /// Public short URL for a key, e.g. `https://s.example.com/abc123`.
    pub fn short_url(&self, key: &str) -> String {
        format!("{}/{}", self.base_url, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::ResolverSettings;
    use crate::domain::repositories::MockMappingRepository;
    use crate::infrastructure::cache::CacheGateway;

    #[test]
    fn test_short_url_trims_trailing_slash() {
        let repository: Arc<dyn MappingRepository> = Arc::new(MockMappingRepository::new());
        let resolver = Arc::new(MappingResolver::new(
            repository,
            CacheGateway::disabled(),
            ResolverSettings {
                cache_ttl_seconds: 60,
            },
        ));

        let state = AppState::new(resolver, "https://s.example.com/");

        assert_eq!(state.short_url("abc123"), "https://s.example.com/abc123");
    }
}
