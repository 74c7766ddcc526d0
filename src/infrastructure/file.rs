use crate::domain::ports::CounterStore;
use crate::error::{ReceiptError, Result};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::NamedTempFile;
use tokio::sync::Mutex;
use tracing::debug;

/// A persistent counter store backed by a single JSON file.
///
/// The file holds one object mapping `{series}_counter_{YYYYMMDD}` keys to
/// decimal strings. Every write goes to a temporary file in the same
/// directory which then replaces the original, so a crash leaves either the
/// old or the new counters on disk, never a torn file.
///
/// Clones share one mutex, which serializes compare-and-set within the
/// process. Separate processes pointed at the same file are not coordinated.
#[derive(Clone)]
pub struct FileCounterStore {
    path: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl FileCounterStore {
    /// Opens the store at `path`, creating parent directories as needed.
    ///
    /// The file itself is created on the first write. An existing file must
    /// parse, otherwise the store is reported unavailable right away.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| unavailable(&path, e))?;
        }

        let store = Self {
            path,
            write_lock: Arc::new(Mutex::new(())),
        };
        store.load()?;
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, u64>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(unavailable(&self.path, e)),
        };

        let raw: BTreeMap<String, String> = serde_json::from_slice(&bytes).map_err(|e| {
            ReceiptError::StorageUnavailable(format!(
                "counter file {} is corrupt: {}",
                self.path.display(),
                e
            ))
        })?;

        raw.into_iter()
            .map(|(key, value)| {
                let counter = value.trim().parse::<u64>().map_err(|_| {
                    ReceiptError::StorageUnavailable(format!(
                        "counter {} in {} is not a number: {:?}",
                        key,
                        self.path.display(),
                        value
                    ))
                })?;
                Ok((key, counter))
            })
            .collect()
    }

    fn save(&self, counters: &BTreeMap<String, u64>) -> Result<()> {
        let raw: BTreeMap<&str, String> = counters
            .iter()
            .map(|(key, value)| (key.as_str(), value.to_string()))
            .collect();

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let tmp = NamedTempFile::new_in(dir).map_err(|e| unavailable(&self.path, e))?;
        {
            let mut writer = BufWriter::new(tmp.as_file());
            serde_json::to_writer_pretty(&mut writer, &raw).map_err(|e| {
                ReceiptError::StorageUnavailable(format!("Serialization error: {}", e))
            })?;
            writer.flush().map_err(|e| unavailable(&self.path, e))?;
        }
        tmp.as_file()
            .sync_all()
            .map_err(|e| unavailable(&self.path, e))?;
        tmp.persist(&self.path)
            .map_err(|e| unavailable(&self.path, e.error))?;
        Ok(())
    }
}

fn unavailable(path: &Path, e: io::Error) -> ReceiptError {
    ReceiptError::StorageUnavailable(format!("counter file {}: {}", path.display(), e))
}

#[async_trait]
impl CounterStore for FileCounterStore {
    async fn get(&self, key: &str) -> Result<Option<u64>> {
        Ok(self.load()?.get(key).copied())
    }

    async fn compare_and_set(&self, key: &str, expected: Option<u64>, new: u64) -> Result<bool> {
        let _guard = self.write_lock.lock().await;

        let mut counters = self.load()?;
        if counters.get(key).copied() != expected {
            return Ok(false);
        }
        counters.insert(key.to_string(), new);
        self.save(&counters)?;

        debug!(path = %self.path.display(), key, value = new, "persisted counter");
        Ok(true)
    }
}
