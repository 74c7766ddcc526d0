use crate::error::Result;
use async_trait::async_trait;

/// Durable storage for sequence counters, keyed by
/// `{series}_counter_{YYYYMMDD}`.
///
/// Implementations only need two primitives. `compare_and_set` is the single
/// write path: it stores `new` only when the current value still equals
/// `expected` (`None` meaning the key was never written) and reports whether
/// it did. Any read or write failure surfaces as
/// [`crate::error::ReceiptError::StorageUnavailable`].
#[async_trait]
pub trait CounterStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<u64>>;
    async fn compare_and_set(&self, key: &str, expected: Option<u64>, new: u64) -> Result<bool>;
}

pub type CounterStoreBox = Box<dyn CounterStore>;
