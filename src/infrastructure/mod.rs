//! Concrete implementations of the domain ports.

pub mod in_memory;
pub mod notifier;
pub mod payment;
#[cfg(feature = "storage-rocksdb")]
pub mod rocksdb;
