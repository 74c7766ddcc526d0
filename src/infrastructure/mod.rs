//! Counter store adapters for the [`crate::domain::ports::CounterStore`] port.

pub mod file;
pub mod in_memory;
#[cfg(feature = "storage-rocksdb")]
pub mod rocksdb;
