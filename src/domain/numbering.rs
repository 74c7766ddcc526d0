use crate::domain::ports::CounterStoreBox;
use crate::error::{ReceiptError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

/// Attempts before a contended counter is reported as unavailable.
const MAX_CAS_ATTEMPTS: u32 = 64;

/// An independent numbering sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesKind {
    Receipt,
    Invoice,
}

impl SeriesKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SeriesKind::Receipt => "receipt",
            SeriesKind::Invoice => "invoice",
        }
    }

    pub fn prefix(&self) -> &'static str {
        match self {
            SeriesKind::Receipt => "SR",
            SeriesKind::Invoice => "INV",
        }
    }
}

/// Identifies one counter: a series on a calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScopeKey {
    pub series: SeriesKind,
    pub date: NaiveDate,
}

impl ScopeKey {
    pub fn new(series: SeriesKind, date: NaiveDate) -> Self {
        Self { series, date }
    }

    /// Key under which the counter is persisted, e.g. `receipt_counter_20240601`.
    pub fn storage_key(&self) -> String {
        format!("{}_counter_{}", self.series.as_str(), self.date.format("%Y%m%d"))
    }
}

/// A formatted receipt or invoice number such as `SR-20240601-0001`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentNumber(String);

impl DocumentNumber {
    pub fn new(key: ScopeKey, counter: u64) -> Self {
        Self(format!(
            "{}-{}-{:04}",
            key.series.prefix(),
            key.date.format("%Y%m%d"),
            counter
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Issues daily sequential numbers backed by a [`crate::domain::ports::CounterStore`].
///
/// Each issuance is a read followed by a compare-and-set of the incremented
/// value. A lost race re-reads and tries again, so two callers sharing a store
/// never receive the same number.
pub struct NumberingService {
    store: CounterStoreBox,
}

impl NumberingService {
    pub fn new(store: CounterStoreBox) -> Self {
        Self { store }
    }

    /// Consumes the next slot of `series` on `scope_date`.
    pub async fn next_number(
        &self,
        series: SeriesKind,
        scope_date: NaiveDate,
    ) -> Result<DocumentNumber> {
        let key = ScopeKey::new(series, scope_date);
        let storage_key = key.storage_key();

        for attempt in 1..=MAX_CAS_ATTEMPTS {
            let current = self.store.get(&storage_key).await?;
            let next = current.unwrap_or(0).checked_add(1).ok_or_else(|| {
                ReceiptError::StorageUnavailable(format!("counter {} overflowed", storage_key))
            })?;

            if self
                .store
                .compare_and_set(&storage_key, current, next)
                .await?
            {
                debug!(key = %storage_key, counter = next, "issued sequence number");
                return Ok(DocumentNumber::new(key, next));
            }

            warn!(key = %storage_key, attempt, "counter changed concurrently, retrying");
        }

        Err(ReceiptError::StorageUnavailable(format!(
            "counter {} stayed contended after {} attempts",
            storage_key, MAX_CAS_ATTEMPTS
        )))
    }

    /// Last value issued for `series` on `scope_date`, 0 if none.
    pub async fn current(&self, series: SeriesKind, scope_date: NaiveDate) -> Result<u64> {
        let key = ScopeKey::new(series, scope_date).storage_key();
        Ok(self.store.get(&key).await?.unwrap_or(0))
    }
}
