use omnichat_storage::StorageError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InboxError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
