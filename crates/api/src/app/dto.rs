//! Request DTOs and the validation gate.
//!
//! Everything here is a pure function from raw request input (a JSON body
//! or query-string params) to a typed domain value, or a [`DomainError`].
//! Unknown body fields are simply never looked at, so they are dropped at
//! this boundary and cannot reach storage. All checks run before any store
//! interaction.

use serde::Deserialize;
use serde_json::Value;

use sweetshop_core::DomainError;
use sweetshop_inventory::{
    MovementKind, NewSweet, SortField, SortOrder, SortSpec, StockMovement, Sweet, SweetFilter,
};

// -------------------------
// Request DTOs
// -------------------------

/// Query params for `GET /api/sweets`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ListParams {
    #[serde(rename = "sortBy")]
    pub sort_by: Option<String>,
    pub order: Option<String>,
}

/// Query params for `GET /api/sweets/search`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    pub name: Option<String>,
    pub category: Option<String>,
    pub min: Option<String>,
    pub max: Option<String>,
    #[serde(rename = "sortBy")]
    pub sort_by: Option<String>,
    pub order: Option<String>,
}

// -------------------------
// Validation gate
// -------------------------

/// A field set to JSON `null` counts as absent, same as a missing key.
fn field<'a>(body: &'a Value, key: &str) -> Option<&'a Value> {
    match body.get(key) {
        None | Some(Value::Null) => None,
        Some(v) => Some(v),
    }
}

fn require_text(v: &Value, what: &str) -> Result<String, DomainError> {
    v.as_str()
        .map(str::to_string)
        .ok_or_else(|| DomainError::validation(format!("{what} must be text.")))
}

fn require_price(v: &Value) -> Result<f64, DomainError> {
    let price = v
        .as_f64()
        .ok_or_else(|| DomainError::validation("Price must be a valid number."))?;
    if price < 0.0 {
        return Err(DomainError::out_of_range(
            "Price and quantity must be non-negative values.",
        ));
    }
    Ok(price)
}

/// A non-negative whole number. Negative is a sign violation (422),
/// fractional or non-numeric is malformed (400).
fn require_count(v: &Value) -> Result<u64, DomainError> {
    if let Some(n) = v.as_u64() {
        return Ok(n);
    }
    if v.as_i64().is_some() || v.as_f64().map(f64::is_sign_negative).unwrap_or(false) {
        return Err(DomainError::out_of_range(
            "Price and quantity must be non-negative values.",
        ));
    }
    Err(DomainError::validation("Quantity must be a whole number."))
}

/// Gate for `POST /api/sweets`.
pub fn parse_create(body: &Value) -> Result<NewSweet, DomainError> {
    let (name, category, price, quantity) = match (
        field(body, "name"),
        field(body, "category"),
        field(body, "price"),
        field(body, "quantity"),
    ) {
        (Some(n), Some(c), Some(p), Some(q)) => (n, c, p, q),
        _ => {
            return Err(DomainError::missing_fields(
                "All fields (name, category, price, quantity) are required.",
            ))
        }
    };

    Ok(NewSweet {
        name: require_text(name, "Name")?,
        category: require_text(category, "Category")?,
        price: require_price(price)?,
        quantity: require_count(quantity)?,
    })
}

/// Gate for the purchase/restock body: `quantity` present, numeric,
/// a whole number, and strictly positive.
pub fn parse_movement(body: &Value, kind: MovementKind) -> Result<StockMovement, DomainError> {
    let v = field(body, "quantity")
        .ok_or_else(|| DomainError::missing_fields("Quantity is required."))?;

    let amount = if let Some(n) = v.as_u64() {
        n
    } else if v.as_i64().is_some() {
        return Err(DomainError::out_of_range(
            "Quantity must be a positive number.",
        ));
    } else if v.is_number() {
        return Err(DomainError::validation("Quantity must be a whole number."));
    } else {
        return Err(DomainError::validation("Quantity must be a valid number."));
    };

    // Rejects zero.
    StockMovement::new(kind, amount)
}

/// Gate for the shared sortBy/order pair. `order` is validated whenever
/// present; a sort is only requested when `sortBy` is.
pub fn parse_sort(
    sort_by: Option<&str>,
    order: Option<&str>,
) -> Result<Option<SortSpec>, DomainError> {
    let order_parsed = order.map(str::parse::<SortOrder>).transpose()?;

    match sort_by {
        None => Ok(None),
        Some(field) => Ok(Some(SortSpec {
            field: field.parse::<SortField>()?,
            order: order_parsed.unwrap_or_default(),
        })),
    }
}

/// Gate for `GET /api/sweets/search`: at least one criterion, numeric
/// min/max, `min <= max`.
pub fn parse_search(params: &SearchParams) -> Result<(SweetFilter, Option<SortSpec>), DomainError> {
    let no_filter = params.name.is_none()
        && params.category.is_none()
        && params.min.is_none()
        && params.max.is_none();
    if no_filter && params.sort_by.is_none() {
        return Err(DomainError::EmptyQuery);
    }

    let min = parse_bound(params.min.as_deref())?;
    let max = parse_bound(params.max.as_deref())?;

    let filter = SweetFilter::new(params.name.clone(), params.category.clone(), min, max)?;
    let sort = parse_sort(params.sort_by.as_deref(), params.order.as_deref())?;
    Ok((filter, sort))
}

fn parse_bound(raw: Option<&str>) -> Result<Option<f64>, DomainError> {
    raw.map(|s| {
        s.trim()
            .parse::<f64>()
            .map_err(|_| DomainError::validation("min and max should be valid numbers."))
    })
    .transpose()
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn sweet_to_json(sweet: &Sweet) -> Value {
    serde_json::json!({
        "id": sweet.id.to_string(),
        "name": sweet.name,
        "category": sweet.category,
        "price": sweet.price,
        "quantity": sweet.quantity,
        "createdAt": sweet.created_at.to_rfc3339(),
    })
}
