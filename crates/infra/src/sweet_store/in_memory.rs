use std::collections::HashMap;
use std::sync::RwLock;

use sweetshop_core::{DomainError, SweetId};
use sweetshop_inventory::{StockMovement, Sweet};

use super::{AdjustError, StoreError, SweetStore};

/// In-memory sweet store for dev/tests.
///
/// A poisoned lock is reported as [`StoreError::Poisoned`] rather than
/// swallowed; the API maps it to an internal error.
#[derive(Debug, Default)]
pub struct InMemorySweetStore {
    inner: RwLock<HashMap<SweetId, Sweet>>,
}

impl InMemorySweetStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }
}

impl SweetStore for InMemorySweetStore {
    fn insert(&self, sweet: Sweet) -> Result<Sweet, StoreError> {
        let mut map = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        map.insert(sweet.id, sweet.clone());
        Ok(sweet)
    }

    fn get(&self, id: &SweetId) -> Result<Option<Sweet>, StoreError> {
        let map = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        Ok(map.get(id).cloned())
    }

    fn delete(&self, id: &SweetId) -> Result<bool, StoreError> {
        let mut map = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        Ok(map.remove(id).is_some())
    }

    fn list(&self) -> Result<Vec<Sweet>, StoreError> {
        let map = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        let mut sweets: Vec<Sweet> = map.values().cloned().collect();
        // Natural order = insertion order (creation time, id as tiebreak).
        sweets.sort_by_key(|s| (s.created_at, s.id));
        Ok(sweets)
    }

    fn find(&self, predicate: &dyn Fn(&Sweet) -> bool) -> Result<Vec<Sweet>, StoreError> {
        let map = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        let mut sweets: Vec<Sweet> = map.values().filter(|s| predicate(s)).cloned().collect();
        sweets.sort_by_key(|s| (s.created_at, s.id));
        Ok(sweets)
    }

    fn adjust_stock(&self, id: &SweetId, movement: StockMovement) -> Result<Sweet, AdjustError> {
        // Lookup, arithmetic, and write-back under one write lock: a
        // conditional update, not read-then-write across two calls.
        let mut map = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        let sweet = map.get_mut(id).ok_or(DomainError::NotFound)?;
        sweet.quantity = movement.apply(sweet.quantity)?;
        Ok(sweet.clone())
    }
}
