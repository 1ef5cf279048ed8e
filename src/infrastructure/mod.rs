//! Key-value store implementations and the storage selector.

pub mod factory;
pub mod in_memory;
#[cfg(feature = "storage-rocksdb")]
pub mod rocksdb;
