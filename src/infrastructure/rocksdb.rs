use crate::domain::ports::CounterStore;
use crate::error::{ReceiptError, Result};
use async_trait::async_trait;
use rocksdb::{ColumnFamilyDescriptor, DB, Options};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Column Family for storing sequence counters.
pub const CF_COUNTERS: &str = "counters";

/// A persistent counter store implementation using RocksDB.
///
/// Keys are the counter storage keys as UTF-8, values the decimal counter as
/// UTF-8 text, matching the file store layout.
///
/// This struct is thread-safe (`Clone` shares the underlying `Arc<DB>` and
/// the compare-and-set mutex).
#[derive(Clone)]
pub struct RocksDBCounterStore {
    db: Arc<DB>,
    write_lock: Arc<Mutex<()>>,
}

impl RocksDBCounterStore {
    /// Opens or creates a RocksDB instance at the specified path.
    ///
    /// Ensures that the "counters" column family exists.
    ///
    /// # Arguments
    ///
    /// * `path` - The filesystem path where the database will be stored.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cf_counters = ColumnFamilyDescriptor::new(CF_COUNTERS, Options::default());
        let db = DB::open_cf_descriptors(&opts, path, vec![cf_counters])?;

        Ok(Self {
            db: Arc::new(db),
            write_lock: Arc::new(Mutex::new(())),
        })
    }

    fn read(&self, key: &str) -> Result<Option<u64>> {
        let cf = self.db.cf_handle(CF_COUNTERS).ok_or_else(|| {
            ReceiptError::StorageUnavailable("Counters column family not found".to_string())
        })?;

        match self.db.get_cf(&cf, key.as_bytes())? {
            Some(bytes) => {
                let counter = std::str::from_utf8(&bytes)
                    .ok()
                    .and_then(|text| text.parse::<u64>().ok())
                    .ok_or_else(|| {
                        ReceiptError::StorageUnavailable(format!(
                            "Counter {} holds a non-numeric value",
                            key
                        ))
                    })?;
                Ok(Some(counter))
            }
            None => Ok(None),
        }
    }
}

#[async_trait]
impl CounterStore for RocksDBCounterStore {
    async fn get(&self, key: &str) -> Result<Option<u64>> {
        self.read(key)
    }

    async fn compare_and_set(&self, key: &str, expected: Option<u64>, new: u64) -> Result<bool> {
        let _guard = self.write_lock.lock().await;

        if self.read(key)? != expected {
            return Ok(false);
        }

        let cf = self.db.cf_handle(CF_COUNTERS).ok_or_else(|| {
            ReceiptError::StorageUnavailable("Counters column family not found".to_string())
        })?;
        self.db
            .put_cf(&cf, key.as_bytes(), new.to_string().as_bytes())?;

        Ok(true)
    }
}
