//! `sweetshop-infra` — persistence collaborators.
//!
//! The document-store boundary the inventory API talks to: a single sweet
//! collection with CRUD, query-by-predicate, and an atomic stock
//! adjustment primitive.

pub mod sweet_store;

pub use sweet_store::{AdjustError, InMemorySweetStore, StoreError, SweetStore};
