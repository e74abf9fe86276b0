use std::fmt::Debug;
use std::hash::Hash;

use async_trait::async_trait;

use super::error::StorageError;

/// A record with a uniqueness key. At most one record per key can be stored.
pub trait Keyed {
    type Key: Eq + Hash + Clone + Debug + Send + Sync + 'static;

    fn key(&self) -> Self::Key;
}

/// Borrowed filter used by [`RecordStore::list_by`].
pub type Filter<'a, T> = &'a (dyn Fn(&T) -> bool + Send + Sync);

/// Keyed record storage.
#[async_trait]
pub trait RecordStore<T>: Send + Sync
where
    T: Keyed + Clone + Send + Sync + 'static,
{
    /// Look up a record by its uniqueness key.
    async fn find(&self, key: &T::Key) -> Result<Option<T>, StorageError>;

    /// Store a new record and return it.
    ///
    /// Fails with [`StorageError::Duplicate`] if a record with the same key
    /// exists. The check and the write happen as one step.
    async fn insert(&self, record: T) -> Result<T, StorageError>;

    /// Return every record matching `filter`, in no particular order.
    async fn list_by(&self, filter: Filter<'_, T>) -> Result<Vec<T>, StorageError>;

    /// Apply `mutation` to the record stored under `key`.
    ///
    /// Returns the updated record, or `None` if nothing is stored under `key`.
    /// The mutation must not change the record's key.
    async fn update(
        &self,
        key: &T::Key,
        mutation: &(dyn for<'m> Fn(&'m mut T) + Send + Sync),
    ) -> Result<Option<T>, StorageError>;

    /// Return every stored record.
    async fn list_all(&self) -> Result<Vec<T>, StorageError> {
        self.list_by(&|_: &T| true).await
    }
}
