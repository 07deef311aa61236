mod file_storage;
mod memory_storage;

pub use file_storage::FileStorage;
pub use memory_storage::MemoryStorage;

use crate::Result as SessionErrorResult;

use async_trait::async_trait;

/// Device-local key-value storage for serialized session blobs.
#[async_trait]
pub trait SessionStorage: Send + Sync {
    /// Returns the blob last written under `key`, or `None`.
    async fn read(&self, key: &str) -> SessionErrorResult<Option<String>>;

    async fn write(&self, key: &str, value: &str) -> SessionErrorResult<()>;

    /// Removing a missing key is not an error.
    async fn erase(&self, key: &str) -> SessionErrorResult<()>;
}
