use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use sweetshop_core::{DomainError, SweetId};

/// A single sweet-inventory record.
///
/// Invariants held by every persisted value: `price >= 0` (and finite) and
/// `quantity` is a non-negative count. `quantity` only changes through a
/// [`crate::StockMovement`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sweet {
    pub id: SweetId,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub quantity: u64,
    pub created_at: DateTime<Utc>,
}

/// Validated input for creating a sweet.
///
/// Anything not named here was dropped at the request boundary; extra
/// fields never reach storage.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSweet {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub quantity: u64,
}

impl Sweet {
    /// Build a persisted sweet from validated input.
    ///
    /// Re-checks the domain invariants even though the request gate already
    /// ran: empty (after trim) name/category and negative or non-finite
    /// prices are rejected here no matter who the caller is.
    pub fn create(input: NewSweet, id: SweetId, created_at: DateTime<Utc>) -> Result<Self, DomainError> {
        let name = input.name.trim().to_string();
        if name.is_empty() {
            return Err(DomainError::validation("Name cannot be empty."));
        }

        let category = input.category.trim().to_string();
        if category.is_empty() {
            return Err(DomainError::validation("Category cannot be empty."));
        }

        if !input.price.is_finite() {
            return Err(DomainError::validation("Price must be a valid number."));
        }
        if input.price < 0.0 {
            return Err(DomainError::out_of_range(
                "Price and quantity must be non-negative values.",
            ));
        }

        Ok(Self {
            id,
            name,
            category,
            price: input.price,
            quantity: input.quantity,
            created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> NewSweet {
        NewSweet {
            name: "Kaju Katli".to_string(),
            category: "Nut-Based".to_string(),
            price: 50.0,
            quantity: 20,
        }
    }

    #[test]
    fn create_keeps_validated_fields() {
        let sweet = Sweet::create(input(), SweetId::new(), Utc::now()).unwrap();
        assert_eq!(sweet.name, "Kaju Katli");
        assert_eq!(sweet.category, "Nut-Based");
        assert_eq!(sweet.price, 50.0);
        assert_eq!(sweet.quantity, 20);
    }

    #[test]
    fn create_trims_name_and_category() {
        let sweet = Sweet::create(
            NewSweet {
                name: "  Barfi ".to_string(),
                category: " Milk-Based ".to_string(),
                ..input()
            },
            SweetId::new(),
            Utc::now(),
        )
        .unwrap();
        assert_eq!(sweet.name, "Barfi");
        assert_eq!(sweet.category, "Milk-Based");
    }

    #[test]
    fn create_rejects_blank_name() {
        let err = Sweet::create(
            NewSweet {
                name: "   ".to_string(),
                ..input()
            },
            SweetId::new(),
            Utc::now(),
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn create_rejects_negative_price() {
        let err = Sweet::create(
            NewSweet {
                price: -1.0,
                ..input()
            },
            SweetId::new(),
            Utc::now(),
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::OutOfRange(_)));
    }

    #[test]
    fn create_allows_zero_quantity() {
        // A sold-out sweet is a legitimate record; 0 is not "missing".
        let sweet = Sweet::create(
            NewSweet {
                quantity: 0,
                ..input()
            },
            SweetId::new(),
            Utc::now(),
        )
        .unwrap();
        assert_eq!(sweet.quantity, 0);
    }
}
