//! Page State
//!
//! The two pieces of UI state the homepage owns. Controls never touch this
//! directly; they report values and the page applies them here.

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::controls::normalize_query;
use crate::filter::visible_products;
use crate::model::Product;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogState {
    /// Last submitted search, already trimmed
    pub query: String,

    /// Selected brand; `None` is "All"
    pub selected_brand: Option<String>,
}

impl CatalogState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a search form submission
    pub fn submit_query(&mut self, draft: &str) {
        self.query = normalize_query(draft);
        tracing::debug!(query = %self.query, "search submitted");
    }

    /// Apply a brand filter report
    pub fn select_brand(&mut self, brand: Option<String>) {
        tracing::debug!(brand = brand.as_deref().unwrap_or("All"), "brand selected");
        self.selected_brand = brand;
    }

    pub fn visible<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Product> {
        visible_products(catalog, &self.query, self.selected_brand.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controls::BrandOption;
    use proptest::prelude::*;

    fn ids(state: &CatalogState, catalog: &Catalog) -> Vec<u32> {
        state.visible(catalog).iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_initial_state() {
        let state = CatalogState::new();
        assert_eq!(state.query, "");
        assert_eq!(state.selected_brand, None);
        assert_eq!(ids(&state, &Catalog::featured()), [1, 2, 3, 4]);
    }

    #[test]
    fn test_submit_trims() {
        let mut state = CatalogState::new();
        state.submit_query("   arc  ");
        assert_eq!(state.query, "arc");
        assert_eq!(ids(&state, &Catalog::featured()), [2]);
    }

    #[test]
    fn test_blank_submission_clears_search() {
        let catalog = Catalog::featured();
        let mut state = CatalogState::new();
        state.submit_query("premium");
        assert_eq!(ids(&state, &catalog), [4]);

        state.submit_query("  ");
        assert_eq!(ids(&state, &catalog), [1, 2, 3, 4]);
    }

    #[test]
    fn test_reselecting_brand_does_not_toggle() {
        let catalog = Catalog::featured();
        let mut state = CatalogState::new();
        let pocket = BrandOption::Brand("Pocket".into());

        state.select_brand(pocket.report());
        state.select_brand(pocket.report());
        assert_eq!(ids(&state, &catalog), [3]);

        state.select_brand(BrandOption::All.report());
        state.select_brand(BrandOption::All.report());
        assert_eq!(state.selected_brand, None);
        assert_eq!(ids(&state, &catalog), [1, 2, 3, 4]);
    }

    #[test]
    fn test_search_and_brand_are_independent() {
        let catalog = Catalog::featured();
        let mut state = CatalogState::new();

        state.select_brand(Some("ZenMobile".into()));
        state.submit_query("zzz-no-match");
        assert!(state.visible(&catalog).is_empty());
        assert_eq!(state.selected_brand.as_deref(), Some("ZenMobile"));

        state.submit_query("");
        assert_eq!(ids(&state, &catalog), [2]);
    }

    proptest! {
        #[test]
        fn resubmitting_is_idempotent(draft in "[ A-Za-z]{0,8}") {
            let catalog = Catalog::featured();
            let mut once = CatalogState::new();
            once.submit_query(&draft);

            let mut twice = once.clone();
            twice.submit_query(&draft);

            prop_assert_eq!(&once, &twice);
            prop_assert_eq!(ids(&once, &catalog), ids(&twice, &catalog));
        }

        #[test]
        fn all_restores_query_filtered_set(
            draft in "[a-z ]{0,4}",
            brand_idx in 0usize..4,
        ) {
            let catalog = Catalog::featured();
            let brands = catalog.brands();

            let mut unfiltered = CatalogState::new();
            unfiltered.submit_query(&draft);

            let mut state = unfiltered.clone();
            state.select_brand(Some(brands[brand_idx].clone()));
            state.select_brand(BrandOption::All.report());

            prop_assert_eq!(ids(&state, &catalog), ids(&unfiltered, &catalog));
        }
    }
}
