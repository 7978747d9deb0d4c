use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Durable client storage could not be opened or written.
    #[error("Storage error: {0}")]
    Storage(#[from] newsphere_sdk::StorageError),
}
