pub mod sweets;
