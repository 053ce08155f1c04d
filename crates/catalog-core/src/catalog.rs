//! Catalog Store
//!
//! The fixed, read-only product list shown on the homepage.

use std::collections::HashSet;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::{CatalogError, Result};
use crate::model::Product;

/// Ordered, immutable list of products
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::featured()
    }
}

impl Catalog {
    /// Build a catalog from a caller-supplied list, rejecting duplicate ids,
    /// negative prices and blank names or brands.
    pub fn new(products: Vec<Product>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(products.len());

        for product in &products {
            if let Err(err) = Self::validate(product, &mut seen) {
                tracing::warn!(product_id = product.id, error = %err, "rejected catalog");
                return Err(err);
            }
        }

        Ok(Self { products })
    }

    fn validate(product: &Product, seen: &mut HashSet<u32>) -> Result<()> {
        if !seen.insert(product.id) {
            return Err(CatalogError::DuplicateId(product.id));
        }
        if product.price < Decimal::ZERO {
            return Err(CatalogError::NegativePrice {
                id: product.id,
                price: product.price,
            });
        }
        if product.name.trim().is_empty() {
            return Err(CatalogError::EmptyField { id: product.id, field: "name" });
        }
        if product.brand.trim().is_empty() {
            return Err(CatalogError::EmptyField { id: product.id, field: "brand" });
        }
        Ok(())
    }

    /// The four phones shipped with the homepage
    pub fn featured() -> Self {
        Self {
            products: vec![
                Product::new(1, "Pulse X1", "NovaTech", dec!(249), dec!(4.5))
                    .with_image("/images/phone-1.jpg")
                    .with_tag("Best seller"),
                Product::new(2, "Arc Pro", "ZenMobile", dec!(399), dec!(4.7))
                    .with_image("/images/phone-2.jpg")
                    .with_tag("New"),
                Product::new(3, "MiniGo", "Pocket", dec!(129), dec!(4.0))
                    .with_image("/images/phone-3.jpg")
                    .with_tag("Budget"),
                Product::new(4, "Titan V", "MegaTel", dec!(799), dec!(4.8))
                    .with_image("/images/phone-4.jpg")
                    .with_tag("Premium"),
            ],
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Distinct brands, in order of first appearance
    pub fn brands(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.products
            .iter()
            .filter(|p| seen.insert(p.brand.as_str()))
            .map(|p| p.brand.clone())
            .collect()
    }
}
