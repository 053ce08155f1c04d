//! Domain Models
//!
//! Display data for the phones on the homepage.
//! Uses `rust_decimal` for prices and ratings - never use f64 for money!

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A phone listed in the catalog
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier, also the render key
    pub id: u32,

    /// Display name (e.g., "Pulse X1")
    pub name: String,

    /// Manufacturer, the domain of the brand filter
    pub brand: String,

    /// Price in USD
    pub price: Decimal,

    /// Average customer rating
    pub rating: Decimal,

    /// Image path, resolved by whoever serves the page
    pub image: String,

    /// Short label (e.g., "New", "Budget")
    pub tag: String,
}

impl Product {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        brand: impl Into<String>,
        price: Decimal,
        rating: Decimal,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            brand: brand.into(),
            price,
            rating,
            image: String::new(),
            tag: String::new(),
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    /// Text the search query is matched against: `"<name> <brand> <tag>"`
    pub fn haystack(&self) -> String {
        format!("{} {} {}", self.name, self.brand, self.tag)
    }

    /// Price as shown on the card, e.g. `$249`
    pub fn price_label(&self) -> String {
        format!("${}", self.price.normalize())
    }

    /// Rating as shown on the card, e.g. `4.5 ★` (`4.0` shows as `4 ★`)
    pub fn rating_label(&self) -> String {
        format!("{} ★", self.rating.normalize())
    }

    pub fn image_alt(&self) -> String {
        format!("{} image", self.name)
    }
}

/// Options offered by the sort selector.
///
/// The selector is rendered but not wired to any ordering logic; the grid
/// always shows products in catalog order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    Recommended,
    PriceLowToHigh,
    PriceHighToLow,
}

impl SortOrder {
    pub const ALL: [Self; 3] = [Self::Recommended, Self::PriceLowToHigh, Self::PriceHighToLow];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Recommended => "Recommended",
            Self::PriceLowToHigh => "Price: Low to High",
            Self::PriceHighToLow => "Price: High to Low",
        }
    }
}
