//! Control Reporting
//!
//! What the search and brand controls report to the page.

use serde::{Deserialize, Serialize};

/// Turn the search box draft into the submitted query.
///
/// Only surrounding whitespace is removed; an empty result means "no filter".
pub fn normalize_query(draft: &str) -> String {
    draft.trim().to_string()
}

/// One button in the brand filter bar
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BrandOption {
    #[default]
    All,
    Brand(String),
}

impl BrandOption {
    pub fn label(&self) -> &str {
        match self {
            Self::All => "All",
            Self::Brand(brand) => brand,
        }
    }

    /// Value reported to the page: `None` for "All"
    pub fn report(&self) -> Option<String> {
        match self {
            Self::All => None,
            Self::Brand(brand) => Some(brand.clone()),
        }
    }
}

/// Filter bar options: "All" followed by each brand
pub fn brand_options(brands: &[String]) -> Vec<BrandOption> {
    std::iter::once(BrandOption::All)
        .chain(brands.iter().cloned().map(BrandOption::Brand))
        .collect()
}
