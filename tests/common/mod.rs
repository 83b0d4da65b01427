#![allow(dead_code)]

use async_trait::async_trait;
use link_resolver::application::services::{MappingResolver, ResolverSettings};
use link_resolver::domain::entities::Mapping;
use link_resolver::domain::repositories::MappingRepository;
use link_resolver::error::AppError;
use link_resolver::infrastructure::cache::{
    CacheBackend, CacheError, CacheGateway, CacheResult,
};
use link_resolver::state::AppState;
use serde_json::json;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub const BASE_URL: &str = "https://s.example.com";
pub const TTL: u64 = 3600;

/// In-memory storage that counts queries and can be switched offline.
#[derive(Default)]
pub struct FakeRepository {
    mappings: Mutex<Vec<Mapping>>,
    pub key_queries: AtomicUsize,
    pub destination_queries: AtomicUsize,
    pub offline: AtomicBool,
}

impl FakeRepository {
    pub fn with(mappings: &[(&str, &str)]) -> Arc<Self> {
        let repo = Self::default();
        *repo.mappings.lock().unwrap() = mappings
            .iter()
            .map(|(key, url)| Mapping::new(*key, *url))
            .collect();
        Arc::new(repo)
    }

    pub fn queries(&self) -> usize {
        self.key_queries.load(Ordering::SeqCst) + self.destination_queries.load(Ordering::SeqCst)
    }

    fn check_online(&self) -> Result<(), AppError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(AppError::internal(
                "Database error",
                json!({ "reason": "connection refused" }),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl MappingRepository for FakeRepository {
    async fn find_by_key(&self, key: &str) -> Result<Option<Mapping>, AppError> {
        self.key_queries.fetch_add(1, Ordering::SeqCst);
        self.check_online()?;
        Ok(self
            .mappings
            .lock()
            .unwrap()
            .iter()
            .find(|m| m.key == key)
            .cloned())
    }

    async fn find_by_destination_url(
        &self,
        destination_url: &str,
    ) -> Result<Option<Mapping>, AppError> {
        self.destination_queries.fetch_add(1, Ordering::SeqCst);
        self.check_online()?;
        Ok(self
            .mappings
            .lock()
            .unwrap()
            .iter()
            .find(|m| m.destination_url == destination_url)
            .cloned())
    }

    async fn health_check(&self) -> bool {
        !self.offline.load(Ordering::SeqCst)
    }
}

/// In-memory cache backend that records reads and writes.
#[derive(Default)]
pub struct FakeCache {
    entries: Mutex<HashMap<String, String>>,
    writes: Mutex<Vec<(String, String, u64)>>,
    pub gets: AtomicUsize,
    pub offline: AtomicBool,
}

impl FakeCache {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn insert(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    pub fn writes(&self) -> Vec<(String, String, u64)> {
        self.writes.lock().unwrap().clone()
    }

    /// Waits for detached cache writes to land.
    pub async fn settle(&self, expected: usize) -> Vec<(String, String, u64)> {
        for _ in 0..64 {
            if self.writes.lock().unwrap().len() >= expected {
                break;
            }
            tokio::task::yield_now().await;
        }
        self.writes()
    }
}

#[async_trait]
impl CacheBackend for FakeCache {
    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        if self.offline.load(Ordering::SeqCst) {
            return Err(CacheError::Connection("connection refused".to_string()));
        }
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    async fn set_with_expiry(&self, key: &str, value: &str, ttl_seconds: u64) -> CacheResult<()> {
        self.writes
            .lock()
            .unwrap()
            .push((key.to_string(), value.to_string(), ttl_seconds));
        if self.offline.load(Ordering::SeqCst) {
            return Err(CacheError::Connection("connection refused".to_string()));
        }
        self.insert(key, value);
        Ok(())
    }

    async fn health_check(&self) -> bool {
        !self.offline.load(Ordering::SeqCst)
    }

    fn name(&self) -> &'static str {
        "fake"
    }
}

pub fn create_test_state(repository: Arc<FakeRepository>, cache: Arc<FakeCache>) -> AppState {
    let repository: Arc<dyn MappingRepository> = repository;
    let resolver = Arc::new(MappingResolver::new(
        repository,
        CacheGateway::new(cache),
        ResolverSettings {
            cache_ttl_seconds: TTL,
        },
    ));

    AppState::new(resolver, BASE_URL)
}
