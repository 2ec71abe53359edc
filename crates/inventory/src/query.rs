//! Search filters and sort semantics for sweets.

use core::cmp::Ordering;
use core::str::FromStr;

use sweetshop_core::DomainError;

use crate::sweet::Sweet;

/// Field a listing can be ordered by.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SortField {
    Name,
    Price,
    Category,
    Quantity,
}

impl FromStr for SortField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "price" => Ok(Self::Price),
            "category" => Ok(Self::Category),
            "quantity" => Ok(Self::Quantity),
            _ => Err(DomainError::invalid_field("Invalid sortBy field.")),
        }
    }
}

/// Direction of a sort.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl FromStr for SortOrder {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(DomainError::invalid_field("Invalid order value.")),
        }
    }
}

/// A validated sort request.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub field: SortField,
    pub order: SortOrder,
}

/// Sort in place. Text fields compare byte-lexicographically (no locale
/// collation), numeric fields numerically; `Desc` reverses the ascending
/// comparator. The sort is stable, so ties keep store order.
pub fn sort_sweets(sweets: &mut [Sweet], spec: SortSpec) {
    sweets.sort_by(|a, b| {
        let ord = match spec.field {
            SortField::Name => a.name.cmp(&b.name),
            SortField::Category => a.category.cmp(&b.category),
            SortField::Price => a.price.total_cmp(&b.price),
            SortField::Quantity => a.quantity.cmp(&b.quantity),
        };
        match spec.order {
            SortOrder::Asc => ord,
            SortOrder::Desc => ord.reverse(),
        }
    });
}

/// Conjunctive search predicate over sweets.
///
/// All supplied criteria must hold: name is a case-insensitive substring
/// match, category a case-insensitive exact match, and min/max bound the
/// price inclusively on whichever side is present.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SweetFilter {
    pub name: Option<String>,
    pub category: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

impl SweetFilter {
    /// Build a filter, rejecting an inverted price range.
    pub fn new(
        name: Option<String>,
        category: Option<String>,
        min_price: Option<f64>,
        max_price: Option<f64>,
    ) -> Result<Self, DomainError> {
        if let (Some(min), Some(max)) = (min_price, max_price) {
            if min > max {
                return Err(DomainError::validation("min cannot be greater than max."));
            }
        }
        Ok(Self {
            name,
            category,
            min_price,
            max_price,
        })
    }

    /// True when no criterion is set at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.category.is_none()
            && self.min_price.is_none()
            && self.max_price.is_none()
    }

    pub fn matches(&self, sweet: &Sweet) -> bool {
        if let Some(name) = &self.name {
            if !sweet.name.to_lowercase().contains(&name.to_lowercase()) {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if !sweet.category.eq_ignore_ascii_case(category) {
                return false;
            }
        }
        if let Some(min) = self.min_price {
            if sweet.price.total_cmp(&min) == Ordering::Less {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if sweet.price.total_cmp(&max) == Ordering::Greater {
                return false;
            }
        }
        true
    }
}
