//! Sweet collection store abstraction.

use thiserror::Error;

use sweetshop_core::{DomainError, SweetId};
use sweetshop_inventory::{StockMovement, Sweet};

mod in_memory;

pub use in_memory::InMemorySweetStore;

/// Infrastructure failure inside a store backend.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A store lock was poisoned by a panicking writer.
    #[error("store lock poisoned")]
    Poisoned,

    /// The backend reported a failure (connection loss, I/O, ...).
    #[error("store backend failure: {0}")]
    Backend(String),
}

/// Failure of an atomic stock adjustment: either a domain rejection
/// (not found, insufficient stock) or an infrastructure fault.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AdjustError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Document-store boundary for the sweet collection.
///
/// `adjust_stock` is the one non-obvious requirement: the lookup, the
/// movement arithmetic, and the write-back must be a single atomic step
/// per id, so two concurrent purchases cannot both observe the
/// pre-decrement quantity (lost-update hazard on the non-negative
/// invariant).
pub trait SweetStore: Send + Sync {
    /// Persist a new sweet. Duplicate names are allowed; ids are unique.
    fn insert(&self, sweet: Sweet) -> Result<Sweet, StoreError>;

    fn get(&self, id: &SweetId) -> Result<Option<Sweet>, StoreError>;

    /// Remove a sweet; `Ok(true)` when something was deleted.
    fn delete(&self, id: &SweetId) -> Result<bool, StoreError>;

    /// All sweets in natural store order (insertion order).
    fn list(&self) -> Result<Vec<Sweet>, StoreError>;

    /// All sweets matching a predicate, in natural store order.
    fn find(&self, predicate: &dyn Fn(&Sweet) -> bool) -> Result<Vec<Sweet>, StoreError>;

    /// Atomically apply a stock movement to one sweet and return the
    /// updated record.
    fn adjust_stock(&self, id: &SweetId, movement: StockMovement) -> Result<Sweet, AdjustError>;
}
