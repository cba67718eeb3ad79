//! Product snapshots and the raw persistence boundary
//!
//! `ProductSnapshot` is the materialized, read-only view of one product row
//! that the aggregation layer consumes. `RawProductRecord` is the shape the
//! persistence collaborator actually ships, with the decimal price still a
//! string; converting it is the one fallible step in this crate.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::stock::StockLevel;

/// Low-stock threshold applied when a product carries none of its own
pub const DEFAULT_LOW_STOCK_THRESHOLD: u32 = 5;

/// A read-only view of one product row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSnapshot {
    /// Display name (used by stock-level listings, never by aggregation math)
    pub name: String,
    /// Unit price
    pub price: Decimal,
    /// Units currently on hand
    pub quantity: u32,
    /// Per-product low-stock threshold (`None` = default threshold)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low_stock_at: Option<u32>,
    /// Creation time
    pub created_at: DateTime<Utc>,
}

impl ProductSnapshot {
    /// Create a snapshot without a per-product threshold
    pub fn new(
        name: impl Into<String>,
        price: Decimal,
        quantity: u32,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            name: name.into(),
            price,
            quantity,
            low_stock_at: None,
            created_at,
        }
    }

    /// Set a per-product low-stock threshold
    pub fn with_low_stock_at(mut self, threshold: u32) -> Self {
        self.low_stock_at = Some(threshold);
        self
    }

    /// The low-stock boundary for this product
    ///
    /// Falls back to [`DEFAULT_LOW_STOCK_THRESHOLD`] when the product has no
    /// threshold of its own.
    pub fn effective_threshold(&self) -> u32 {
        self.low_stock_at.unwrap_or(DEFAULT_LOW_STOCK_THRESHOLD)
    }

    /// Classify this product's stock level
    pub fn stock_level(&self) -> StockLevel {
        StockLevel::classify(self.quantity, self.effective_threshold())
    }

    /// Value of the units on hand (price × quantity)
    ///
    /// Exact decimal arithmetic, saturating at the representable bounds
    /// rather than overflowing.
    pub fn line_value(&self) -> Decimal {
        self.price.saturating_mul(Decimal::from(self.quantity))
    }
}

/// A product row as the persistence layer ships it
///
/// Decimal columns arrive as strings and integers arrive signed; field names
/// follow the upstream camelCase wire shape. Convert with `TryFrom` to get a
/// [`ProductSnapshot`] with an exact decimal price. Coercing the price
/// through binary floating point is what this boundary exists to avoid.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProductRecord {
    /// Display name
    pub name: String,
    /// Price as a decimal string, e.g. `"19.99"`
    pub price: String,
    /// Units on hand
    pub quantity: i64,
    /// Per-product low-stock threshold, if any
    #[serde(default)]
    pub low_stock_at: Option<i64>,
    /// Creation time
    pub created_at: DateTime<Utc>,
}

impl TryFrom<RawProductRecord> for ProductSnapshot {
    type Error = CatalogError;

    /// Parse the price and narrow the integer fields
    ///
    /// A price string that parses to a negative decimal is accepted: the
    /// aggregation path tolerates degenerate values, and rejecting them here
    /// is the caller's business, not this boundary's. Negative quantities and
    /// thresholds have no representation downstream and are errors.
    fn try_from(raw: RawProductRecord) -> Result<Self, Self::Error> {
        let price: Decimal = raw
            .price
            .trim()
            .parse()
            .map_err(|_| CatalogError::InvalidPrice(raw.price.clone()))?;

        let quantity =
            u32::try_from(raw.quantity).map_err(|_| CatalogError::InvalidQuantity(raw.quantity))?;

        let low_stock_at = raw
            .low_stock_at
            .map(|t| u32::try_from(t).map_err(|_| CatalogError::InvalidThreshold(t)))
            .transpose()?;

        Ok(Self {
            name: raw.name,
            price,
            quantity,
            low_stock_at,
            created_at: raw.created_at,
        })
    }
}
