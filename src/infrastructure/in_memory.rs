use crate::domain::ports::CounterStore;
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory counter store.
///
/// Uses `Arc<RwLock<HashMap<String, u64>>>` so clones share the same counters.
/// Compare-and-set runs under the write lock. Counters vanish with the
/// process, which suits tests and one-off runs.
#[derive(Default, Clone)]
pub struct InMemoryCounterStore {
    counters: Arc<RwLock<HashMap<String, u64>>>,
}

impl InMemoryCounterStore {
    /// Creates a new, empty in-memory counter store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of every counter, for inspection.
    pub async fn snapshot(&self) -> HashMap<String, u64> {
        self.counters.read().await.clone()
    }
}

#[async_trait]
impl CounterStore for InMemoryCounterStore {
    async fn get(&self, key: &str) -> Result<Option<u64>> {
        let counters = self.counters.read().await;
        Ok(counters.get(key).copied())
    }

    async fn compare_and_set(&self, key: &str, expected: Option<u64>, new: u64) -> Result<bool> {
        let mut counters = self.counters.write().await;
        if counters.get(key).copied() != expected {
            return Ok(false);
        }
        counters.insert(key.to_string(), new);
        Ok(true)
    }
}
