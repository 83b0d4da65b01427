//! In-process cache backend that records traffic, for unit tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::backend::{CacheBackend, CacheError, CacheResult};
use async_trait::async_trait;

type RecordedWrite = (String, String, u64);

#[derive(Default)]
pub struct RecordingCache {
    entries: Mutex<HashMap<String, String>>,
    writes: Mutex<Vec<RecordedWrite>>,
    gets: AtomicUsize,
    fail_reads: bool,
    fail_writes: bool,
}

impl RecordingCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn insert(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    pub fn get_count(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }

    /// Every attempted write, including failed ones.
    pub fn writes(&self) -> Vec<RecordedWrite> {
        self.writes.lock().unwrap().clone()
    }

    /// Yields to the runtime until `expected` writes were attempted or the
    /// detached tasks had plenty of chances to run.
    pub async fn settle(&self, expected: usize) -> Vec<RecordedWrite> {
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
impl CacheBackend for RecordingCache {
    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        if self.fail_reads {
            return Err(CacheError::Connection("connection refused".to_string()));
        }
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    async fn set_with_expiry(&self, key: &str, value: &str, ttl_seconds: u64) -> CacheResult<()> {
        self.writes
            .lock()
            .unwrap()
            .push((key.to_string(), value.to_string(), ttl_seconds));
        if self.fail_writes {
            return Err(CacheError::Operation("READONLY replica".to_string()));
        }
        self.insert(key, value);
        Ok(())
    }

    async fn health_check(&self) -> bool {
        !self.fail_reads
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}
