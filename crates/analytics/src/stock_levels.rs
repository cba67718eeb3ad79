//! Recent stock-level listing
//!
//! The newest products with their stock classification, backing the
//! dashboard's stock-levels card.

use serde::{Deserialize, Serialize};

use stockdeck_catalog::{ProductSnapshot, StockLevel};

/// Rows the stock-levels card shows when the caller does not choose a limit
pub const DEFAULT_RECENT_PRODUCTS: usize = 5;

/// One row of the stock-levels card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockLevelRow {
    /// Product display name
    pub name: String,
    /// Units on hand
    pub quantity: u32,
    /// Classification at the product's effective threshold
    pub level: StockLevel,
}

/// List the most recently created products with their stock levels
///
/// Sorted by creation time, newest first; ties keep collection order. At
/// most `limit` rows are returned.
pub fn recent_stock_levels(products: &[ProductSnapshot], limit: usize) -> Vec<StockLevelRow> {
    let mut ordered: Vec<&ProductSnapshot> = products.iter().collect();
    ordered.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    ordered
        .into_iter()
        .take(limit)
        .map(|product| StockLevelRow {
            name: product.name.clone(),
            quantity: product.quantity,
            level: product.stock_level(),
        })
        .collect()
}
