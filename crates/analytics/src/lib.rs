//! Stockdeck Analytics
//!
//! Dashboard metrics over product collections.
//!
//! # Overview
//!
//! This crate computes the numbers behind the inventory dashboard from an
//! already-fetched product collection:
//!
//! - **Totals**: product count and exact-decimal inventory value
//! - **Stock breakdown**: per-level counts with display percentages
//! - **Weekly histogram**: creation counts over the tracked recent weeks
//! - **Stock levels**: the newest products with their classification
//!
//! # Usage
//!
//! ```ignore
//! use chrono::Utc;
//! use stockdeck_analytics::{recent_stock_levels, DashboardMetrics};
//!
//! let metrics = DashboardMetrics::from_products(&products, Utc::now());
//! println!(
//!     "{} products worth {}",
//!     metrics.total_products,
//!     metrics.rounded_total_value()
//! );
//!
//! let rows = recent_stock_levels(&products, 6);
//! ```
//!
//! All computations are pure and total: empty collections produce zeroed
//! metrics, never errors.

pub mod aggregate;
pub mod stock_levels;
pub mod weekly;

#[cfg(test)]
mod aggregate_test;

// Re-exports for convenience
pub use aggregate::{DashboardMetrics, StockBreakdown};
pub use stock_levels::{recent_stock_levels, StockLevelRow, DEFAULT_RECENT_PRODUCTS};
pub use weekly::{weekly_product_counts, WeeklyBucket, WEEKS_TRACKED};
