//! The inventory operations engine.
//!
//! One method per API operation, each a single atomic read or
//! read-modify-write against the sweet collection. Stateless across
//! requests; all state lives in the store.

use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;

use sweetshop_core::{DomainError, SweetId};
use sweetshop_infra::{AdjustError, StoreError, SweetStore};
use sweetshop_inventory::{sort_sweets, NewSweet, SortSpec, StockMovement, Sweet, SweetFilter};

/// Operation failure: a deterministic domain rejection or an
/// infrastructure fault.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OpError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<AdjustError> for OpError {
    fn from(err: AdjustError) -> Self {
        match err {
            AdjustError::Domain(e) => Self::Domain(e),
            AdjustError::Store(e) => Self::Store(e),
        }
    }
}

pub struct AppServices {
    store: Arc<dyn SweetStore>,
}

impl AppServices {
    pub fn new(store: Arc<dyn SweetStore>) -> Self {
        Self { store }
    }

    /// Persist a new sweet with a freshly minted id. Duplicate names are
    /// allowed.
    pub fn create_sweet(&self, input: NewSweet) -> Result<Sweet, OpError> {
        let sweet = Sweet::create(input, SweetId::new(), Utc::now())?;
        let stored = self.store.insert(sweet)?;
        tracing::info!(id = %stored.id, name = %stored.name, "sweet added");
        Ok(stored)
    }

    /// All sweets, in natural store order unless a sort was requested.
    pub fn list_sweets(&self, sort: Option<SortSpec>) -> Result<Vec<Sweet>, OpError> {
        let mut sweets = self.store.list()?;
        if let Some(spec) = sort {
            sort_sweets(&mut sweets, spec);
        }
        Ok(sweets)
    }

    /// Sweets matching a conjunctive filter; an empty result is not an
    /// error.
    pub fn search_sweets(
        &self,
        filter: &SweetFilter,
        sort: Option<SortSpec>,
    ) -> Result<Vec<Sweet>, OpError> {
        let mut sweets = self.store.find(&|s: &Sweet| filter.matches(s))?;
        if let Some(spec) = sort {
            sort_sweets(&mut sweets, spec);
        }
        Ok(sweets)
    }

    /// Apply a purchase or restock atomically and return the updated
    /// sweet.
    pub fn adjust_stock(&self, id: SweetId, movement: StockMovement) -> Result<Sweet, OpError> {
        let updated = self.store.adjust_stock(&id, movement)?;
        tracing::info!(
            id = %updated.id,
            quantity = updated.quantity,
            amount = movement.amount(),
            kind = ?movement.kind(),
            "stock adjusted"
        );
        Ok(updated)
    }

    pub fn delete_sweet(&self, id: SweetId) -> Result<(), OpError> {
        if !self.store.delete(&id)? {
            return Err(DomainError::not_found().into());
        }
        tracing::info!(%id, "sweet deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sweetshop_infra::InMemorySweetStore;
    use sweetshop_inventory::{MovementKind, SortField, SortOrder};

    fn services() -> AppServices {
        AppServices::new(Arc::new(InMemorySweetStore::new()))
    }

    fn input(name: &str, category: &str, price: f64, quantity: u64) -> NewSweet {
        NewSweet {
            name: name.to_string(),
            category: category.to_string(),
            price,
            quantity,
        }
    }

    #[test]
    fn purchase_restock_round_trip_restores_quantity() {
        let svc = services();
        let sweet = svc
            .create_sweet(input("Kaju Katli", "Nut-Based", 50.0, 20))
            .unwrap();

        let purchase = StockMovement::new(MovementKind::Purchase, 5).unwrap();
        let after = svc.adjust_stock(sweet.id, purchase).unwrap();
        assert_eq!(after.quantity, 15);

        let restock = StockMovement::new(MovementKind::Restock, 5).unwrap();
        let after = svc.adjust_stock(sweet.id, restock).unwrap();
        assert_eq!(after.quantity, 20);

        let over = StockMovement::new(MovementKind::Purchase, 100).unwrap();
        let err = svc.adjust_stock(sweet.id, over).unwrap_err();
        assert_eq!(err, OpError::Domain(DomainError::InsufficientStock));

        let unchanged = svc.list_sweets(None).unwrap();
        assert_eq!(unchanged[0].quantity, 20);
    }

    #[test]
    fn list_applies_requested_sort() {
        let svc = services();
        svc.create_sweet(input("Kaju Katli", "Nut-Based", 50.0, 20))
            .unwrap();
        svc.create_sweet(input("Gulab Jamun", "Milk-Based", 10.0, 50))
            .unwrap();
        svc.create_sweet(input("Rasgulla", "Milk-Based", 30.0, 15))
            .unwrap();

        let sorted = svc
            .list_sweets(Some(SortSpec {
                field: SortField::Price,
                order: SortOrder::Asc,
            }))
            .unwrap();
        let prices: Vec<f64> = sorted.iter().map(|s| s.price).collect();
        assert_eq!(prices, vec![10.0, 30.0, 50.0]);
    }

    #[test]
    fn search_returns_empty_vec_on_no_match() {
        let svc = services();
        svc.create_sweet(input("Rasgulla", "Milk-Based", 25.0, 10))
            .unwrap();

        let filter = SweetFilter::new(Some("laddu".to_string()), None, None, None).unwrap();
        let found = svc.search_sweets(&filter, None).unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn delete_missing_sweet_is_not_found() {
        let svc = services();
        let err = svc.delete_sweet(SweetId::new()).unwrap_err();
        assert_eq!(err, OpError::Domain(DomainError::NotFound));
    }
}
