use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use super::error::StorageError;
use super::traits::{Filter, Keyed, RecordStore};

/// Process-local record store. Contents live as long as the store.
pub struct MemoryStore<T: Keyed> {
    records: DashMap<T::Key, T>,
}

impl<T: Keyed> MemoryStore<T> {
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<T: Keyed> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T> RecordStore<T> for MemoryStore<T>
where
    T: Keyed + Clone + Send + Sync + 'static,
{
    async fn find(&self, key: &T::Key) -> Result<Option<T>, StorageError> {
        Ok(self.records.get(key).map(|entry| entry.value().clone()))
    }

    async fn insert(&self, record: T) -> Result<T, StorageError> {
        match self.records.entry(record.key()) {
            Entry::Occupied(existing) => {
                Err(StorageError::Duplicate(format!("{:?}", existing.key())))
            }
            Entry::Vacant(slot) => {
                slot.insert(record.clone());
                Ok(record)
            }
        }
    }

    async fn list_by(&self, filter: Filter<'_, T>) -> Result<Vec<T>, StorageError> {
        Ok(self
            .records
            .iter()
            .filter(|entry| filter(entry.value()))
            .map(|entry| entry.value().clone())
            .collect())
    }

    async fn update(
        &self,
        key: &T::Key,
        mutation: &(dyn for<'m> Fn(&'m mut T) + Send + Sync),
    ) -> Result<Option<T>, StorageError> {
        Ok(self.records.get_mut(key).map(|mut entry| {
            mutation(entry.value_mut());
            entry.value().clone()
        }))
    }
}
