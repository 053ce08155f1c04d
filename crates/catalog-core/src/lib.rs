//! # catalog-core
//!
//! Product catalog and filtering logic behind the GeneralPhones homepage.
//!
//! ## Data Flow
//!
//! ```text
//! ┌──────────────┐    ┌──────────────────────────────┐    ┌──────────────┐
//! │   Catalog    │───▶│  visible_products(query,     │───▶│  Product     │
//! │  (4 phones)  │    │                   brand)     │    │  grid        │
//! └──────────────┘    └──────────────────────────────┘    └──────────────┘
//!                                    ▲
//!                     ┌──────────────┴──────────────┐
//!                     │        CatalogState         │
//!                     │  query     ◀── search form  │
//!                     │  brand     ◀── filter bar   │
//!                     └─────────────────────────────┘
//! ```
//!
//! The catalog is never mutated; filtering always yields a derived list in
//! catalog order.

pub mod catalog;
pub mod controls;
pub mod error;
pub mod filter;
pub mod model;
pub mod state;

pub use catalog::Catalog;
pub use controls::{BrandOption, brand_options, normalize_query};
pub use error::{CatalogError, Result};
pub use filter::{brand_matches, query_matches, visible_products};
pub use model::{Product, SortOrder};
pub use state::CatalogState;

/// Store name shown in the header and footer
pub const STORE_NAME: &str = "GeneralPhones";

/// Message shown in place of the grid when nothing matches
pub const EMPTY_RESULTS_MESSAGE: &str = "No phones match your search.";

/// Banner image in the hero section
pub const HERO_IMAGE: &str = "/images/hero-phones.jpg";
