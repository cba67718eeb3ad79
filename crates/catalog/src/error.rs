//! Catalog error types

use thiserror::Error;

/// Catalog errors
///
/// Raised only at the raw-record boundary; the snapshot and classification
/// APIs are total functions.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Price string did not parse as a decimal
    #[error("invalid price: {0}")]
    InvalidPrice(String),

    /// Quantity outside the representable range
    #[error("invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Low-stock threshold outside the representable range
    #[error("invalid low-stock threshold: {0}")]
    InvalidThreshold(i64),
}

/// Result type for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;
