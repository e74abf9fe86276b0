/// Errors that can occur during record storage operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// A record with the same uniqueness key is already stored.
    #[error("duplicate record for key {0}")]
    Duplicate(String),
    /// The backing store failed.
    #[error("storage backend error: {0}")]
    Backend(String),
}
