//! Stockdeck Catalog
//!
//! Product domain model for the stockdeck inventory dashboard.
//!
//! # Overview
//!
//! This crate provides the shared product types consumed by the analytics
//! layer:
//!
//! - **Snapshots**: read-only product records (`ProductSnapshot`)
//! - **Classification**: stock levels from quantity vs. threshold (`StockLevel`)
//! - **Boundary**: conversion from raw persistence rows (`RawProductRecord`)
//!
//! # Usage
//!
//! ```ignore
//! use stockdeck_catalog::{ProductSnapshot, StockLevel};
//!
//! let product = ProductSnapshot::new("Desk Lamp", "24.90".parse()?, 3, created_at)
//!     .with_low_stock_at(4);
//!
//! assert_eq!(product.stock_level(), StockLevel::LowStock);
//! ```
//!
//! Records are read-only inputs: aggregation over them produces new derived
//! values and never writes back. Fetching and authorization scoping happen
//! upstream, in the persistence collaborator.

pub mod error;
pub mod product;
pub mod stock;


// Re-exports for convenience
pub use error::{CatalogError, Result};
pub use product::{ProductSnapshot, RawProductRecord, DEFAULT_LOW_STOCK_THRESHOLD};
pub use stock::StockLevel;
