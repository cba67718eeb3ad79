//! Dashboard metric aggregation
//!
//! Computes the inventory summary for the dashboard: product and value
//! totals, the stock-level breakdown with display percentages, and the
//! weekly creation histogram.

use chrono::{DateTime, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use stockdeck_catalog::{ProductSnapshot, StockLevel};

use crate::weekly::{weekly_product_counts, WeeklyBucket, WEEKS_TRACKED};

/// Aggregated dashboard metrics for a product collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardMetrics {
    /// Number of products
    pub total_products: u64,
    /// Inventory value (sum of price × quantity), full precision
    pub total_value: Decimal,
    /// Stock-level counts and percentages
    pub stock: StockBreakdown,
    /// Weekly creation histogram, oldest week first
    pub weekly: Vec<WeeklyBucket>,
}

impl DashboardMetrics {
    /// Compute metrics over a product collection
    ///
    /// Pure and total: an empty collection yields zero totals, all-zero
    /// percentages, and a full set of zero-count buckets labelled from
    /// `now`.
    pub fn from_products(products: &[ProductSnapshot], now: DateTime<Utc>) -> Self {
        let total_products = products.len() as u64;
        let total_value = products
            .iter()
            .fold(Decimal::ZERO, |acc, p| acc.saturating_add(p.line_value()));

        let mut out_of_stock = 0u64;
        let mut low_stock = 0u64;
        let mut in_stock = 0u64;
        for product in products {
            match product.stock_level() {
                StockLevel::OutOfStock => out_of_stock += 1,
                StockLevel::LowStock => low_stock += 1,
                StockLevel::InStock => in_stock += 1,
            }
        }

        tracing::debug!(
            total_products,
            weeks = WEEKS_TRACKED,
            "aggregated dashboard metrics"
        );

        Self {
            total_products,
            total_value,
            stock: StockBreakdown::from_counts(out_of_stock, low_stock, in_stock),
            weekly: weekly_product_counts(products, now),
        }
    }

    /// Total value rounded to whole units for display (half away from zero)
    pub fn rounded_total_value(&self) -> Decimal {
        self.total_value
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
    }

    /// Check if the collection was empty
    pub fn is_empty(&self) -> bool {
        self.total_products == 0
    }
}

/// Stock-level counts with independently rounded display percentages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockBreakdown {
    /// Products with zero quantity
    pub out_of_stock: u64,
    /// Products at or below their low-stock threshold
    pub low_stock: u64,
    /// Products above their low-stock threshold
    pub in_stock: u64,
    /// Percent of products out of stock (rounded half up)
    pub out_of_stock_percent: u32,
    /// Percent of products low on stock (rounded half up)
    pub low_stock_percent: u32,
    /// Percent of products in stock (rounded half up)
    pub in_stock_percent: u32,
}

impl StockBreakdown {
    /// Build a breakdown from per-level counts
    ///
    /// Each percentage is rounded on its own, so the three may not sum to
    /// exactly 100 for some distributions.
    pub fn from_counts(out_of_stock: u64, low_stock: u64, in_stock: u64) -> Self {
        let total = out_of_stock
            .saturating_add(low_stock)
            .saturating_add(in_stock);
        Self {
            out_of_stock,
            low_stock,
            in_stock,
            out_of_stock_percent: percent_of(out_of_stock, total),
            low_stock_percent: percent_of(low_stock, total),
            in_stock_percent: percent_of(in_stock, total),
        }
    }

    /// Total products across the three levels
    pub fn total(&self) -> u64 {
        self.out_of_stock
            .saturating_add(self.low_stock)
            .saturating_add(self.in_stock)
    }
}

/// Share of `total` as a whole percentage, rounded half up
///
/// A zero total reports 0 rather than dividing by zero.
fn percent_of(count: u64, total: u64) -> u32 {
    if total == 0 {
        return 0;
    }

    (Decimal::from(count) * Decimal::ONE_HUNDRED / Decimal::from(total))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u32()
        .unwrap_or(0)
}
