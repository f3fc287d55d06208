//! MiniCache - A minimal, single-threaded in-memory key-value store
//!
//! MiniCache keeps the surface deliberately small:
//! - One storage trait with three operations (set, get, delete)
//! - One concrete backend over a hash map
//! - One error kind (a key that is not there)
//!
//! There is no eviction, no expiration, no persistence and no concurrency
//! control. The store is meant to be owned and driven by a single thread.

pub mod store;

/// Re-export commonly used types
pub use store::{KeyValueStore, MemoryStore, Result, StoreError};
