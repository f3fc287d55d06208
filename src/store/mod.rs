//! Storage module
//!
//! Provides the storage trait and the in-memory backend for string
//! key-value pairs. This module is independent of the demonstration
//! driver (loose coupling).

mod error;
mod memory;

pub use error::{Result, StoreError};
pub use memory::MemoryStore;

/// Storage trait
///
/// All backends implement this trait with the same three operations.
/// Callers depend on the trait, not on a concrete backend, so a future
/// backend (concurrent, persistent) can replace [`MemoryStore`] without
/// touching call sites.
///
/// The trait assumes single-threaded, synchronous use: no operation
/// blocks or yields, and simultaneous access from several threads is
/// outside the contract.
pub trait KeyValueStore {
    /// Store `value` under `key`, overwriting any existing value.
    ///
    /// Any string is a legal key (the empty string included) and any
    /// string is a legal value. The in-memory backend cannot fail here;
    /// the `Result` return keeps the signature uniform for backends
    /// that can.
    fn set(&mut self, key: String, value: String) -> Result<()>;

    /// Return the value stored under `key`.
    ///
    /// Fails with [`StoreError::NotFound`] when the key is absent.
    /// Never mutates the store.
    fn get(&self, key: &str) -> Result<String>;

    /// Remove `key` and its value from the store.
    ///
    /// Fails with [`StoreError::NotFound`] when the key is absent:
    /// deleting a key that is not there is an error, not a no-op.
    fn delete(&mut self, key: &str) -> Result<()>;
}
