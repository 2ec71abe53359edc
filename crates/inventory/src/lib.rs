//! `sweetshop-inventory` — pure inventory domain.
//!
//! The `Sweet` entity, stock movements (purchase/restock), and the
//! search/sort semantics. No I/O and no HTTP types live here.

pub mod movement;
pub mod query;
pub mod sweet;

pub use movement::{MovementKind, StockMovement};
pub use query::{sort_sweets, SortField, SortOrder, SortSpec, SweetFilter};
pub use sweet::{NewSweet, Sweet};
