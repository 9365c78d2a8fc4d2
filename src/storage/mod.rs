//! Key-value storage backends
//!
//! The cart mirrors its contents into an opaque byte store keyed by string:
//! - `FileStore`: one file per key under a directory (device-local storage)
//! - `MemoryStore`: process-local map, for tests and ephemeral carts

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::GomarketResult;
use async_trait::async_trait;

/// Abstract key-value store interface
///
/// Implementations make no ordering promise across overlapping calls;
/// callers that need ordered writes serialize them themselves.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, `None` if absent
    async fn get(&self, key: &str) -> GomarketResult<Option<Vec<u8>>>;

    /// Store `value` under `key`, replacing any previous value
    async fn set(&self, key: &str, value: &[u8]) -> GomarketResult<()>;

    /// Remove `key`; removing an absent key is not an error
    async fn remove(&self, key: &str) -> GomarketResult<()>;

    /// Get the human-readable backend name for display
    fn backend_name(&self) -> &'static str;
}
