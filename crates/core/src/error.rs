//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures. The
/// messages carried here are the strings surfaced to API clients, so they
/// are written for people, not logs. Infrastructure concerns belong
/// elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// One or more required fields were absent from the request.
    #[error("{0}")]
    MissingFields(String),

    /// A value failed validation (e.g. non-numeric where a number is required).
    #[error("{0}")]
    Validation(String),

    /// A numeric value had the wrong sign (negative price, non-positive amount).
    ///
    /// Distinguished from `Validation` so the API can answer 422 instead of 400.
    #[error("{0}")]
    OutOfRange(String),

    /// An enumerated field (sortBy/order) had an unknown value.
    #[error("{0}")]
    InvalidField(String),

    /// A search was issued with no filter or sort criteria at all.
    #[error("At least one query param (name, category, min, max, sortBy) is required.")]
    EmptyQuery,

    /// An identifier was syntactically invalid (parse failure).
    #[error("Invalid ID format.")]
    InvalidId(String),

    /// The requested sweet does not exist.
    #[error("Sweet not found.")]
    NotFound,

    /// A purchase asked for more units than are in stock.
    #[error("Not enough stock available.")]
    InsufficientStock,
}

impl DomainError {
    pub fn missing_fields(msg: impl Into<String>) -> Self {
        Self::MissingFields(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn out_of_range(msg: impl Into<String>) -> Self {
        Self::OutOfRange(msg.into())
    }

    pub fn invalid_field(msg: impl Into<String>) -> Self {
        Self::InvalidField(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}
