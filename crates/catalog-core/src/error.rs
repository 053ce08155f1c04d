//! Error Types for the Catalog

use rust_decimal::Decimal;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CatalogError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Duplicate product id: {0}")]
    DuplicateId(u32),

    #[error("Negative price for product {id}: {price}")]
    NegativePrice { id: u32, price: Decimal },

    #[error("Product {id} has an empty {field}")]
    EmptyField { id: u32, field: &'static str },
}
