use crate::domain::validation::ValidationErrors;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReceiptError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("Counter store unavailable: {0}")]
    StorageUnavailable(String),
    #[error("Signing error: {0}")]
    Signing(String),
    #[error("Receipt assembly failed: {0}")]
    Assembly(#[source] Box<ReceiptError>),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ReceiptError {
    /// Wraps `self` as an assembly failure unless it already is one.
    pub fn into_assembly(self) -> Self {
        match self {
            ReceiptError::Assembly(_) => self,
            other => ReceiptError::Assembly(Box::new(other)),
        }
    }

    /// The innermost error, looking through any `Assembly` wrapper.
    pub fn root(&self) -> &ReceiptError {
        match self {
            ReceiptError::Assembly(inner) => inner.root(),
            other => other,
        }
    }
}

#[cfg(feature = "storage-rocksdb")]
impl From<rocksdb::Error> for ReceiptError {
    fn from(e: rocksdb::Error) -> Self {
        ReceiptError::StorageUnavailable(format!("RocksDB error: {}", e))
    }
}

pub type Result<T> = std::result::Result<T, ReceiptError>;
