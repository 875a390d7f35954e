//! Injectable key-value persistence.
//!
//! Everything the auth store persists goes through [`KeyValueStore`] so the
//! backing medium can be swapped: a JSON-file directory in the real binary,
//! an in-memory map in tests.

pub mod file;
pub mod memory;

use anyhow::Result;
use async_trait::async_trait;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

/// String-keyed persistent storage
///
/// Values are opaque strings (JSON-encoded by callers). A missing key is
/// `None`, never an error.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous value
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`; removing an absent key is not an error
    async fn delete(&self, key: &str) -> Result<()>;
}
