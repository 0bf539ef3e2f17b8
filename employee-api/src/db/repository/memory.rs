//! In-memory Repository
//!
//! Entities live in a `BTreeMap` keyed by id behind a `parking_lot::RwLock`,
//! so listing order is id order, which is creation order. Ids come from an
//! atomic counter starting at 1.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use parking_lot::RwLock;

use super::{Entity, RepoError, RepoResult, Repository};

#[derive(Debug)]
pub struct MemoryRepository<T> {
    items: RwLock<BTreeMap<i64, T>>,
    next_id: AtomicI64,
}

impl<T: Entity> MemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            items: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Start from existing entities; new ids continue after the largest one.
    #[cfg(test)]
    pub fn with_entities(entities: impl IntoIterator<Item = T>) -> Self {
        let items: BTreeMap<i64, T> = entities.into_iter().map(|e| (e.id(), e)).collect();
        let next_id = items.keys().next_back().map_or(1, |max| max + 1);
        Self {
            items: RwLock::new(items),
            next_id: AtomicI64::new(next_id),
        }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }
}

impl<T: Entity> Default for MemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Entity> Repository<T> for MemoryRepository<T> {
    async fn get_all(&self) -> RepoResult<Vec<T>> {
        Ok(self.items.read().values().cloned().collect())
    }

    async fn get_by_id(&self, id: i64) -> RepoResult<Option<T>> {
        Ok(self.items.read().get(&id).cloned())
    }

    async fn create(&self, entity: &mut T) -> RepoResult<()> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        entity.set_id(id);
        self.items.write().insert(id, entity.clone());
        Ok(())
    }

    async fn update(&self, entity: &T) -> RepoResult<()> {
        let mut items = self.items.write();
        let stored = items
            .get_mut(&entity.id())
            .ok_or(RepoError::NotFound(entity.id()))?;
        stored.apply_mutable(entity);
        Ok(())
    }
}
