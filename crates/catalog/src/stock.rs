//! Stock-level classification
//!
//! Classifies a product as out of stock, low stock, or in stock from its
//! quantity and effective low-stock threshold.

use serde::{Deserialize, Serialize};

/// Stock level of a single product
///
/// Exactly one level holds for any `(quantity, threshold)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockLevel {
    /// No units on hand
    OutOfStock,
    /// Between one unit and the threshold, inclusive
    LowStock,
    /// Above the threshold
    InStock,
}

impl StockLevel {
    /// Classify a quantity against a low-stock threshold
    ///
    /// The boundary is inclusive on the low side: `quantity == threshold`
    /// classifies as `LowStock`, not `InStock`. A zero quantity is always
    /// `OutOfStock`, regardless of the threshold.
    pub fn classify(quantity: u32, threshold: u32) -> Self {
        if quantity == 0 {
            Self::OutOfStock
        } else if quantity <= threshold {
            Self::LowStock
        } else {
            Self::InStock
        }
    }

    /// Human-readable label for presentation
    pub fn label(&self) -> &'static str {
        match self {
            Self::OutOfStock => "Out of Stock",
            Self::LowStock => "Low Stock",
            Self::InStock => "In Stock",
        }
    }
}
