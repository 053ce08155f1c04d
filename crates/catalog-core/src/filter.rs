//! Visible Set
//!
//! The search and brand predicates, and the derived list of products that
//! satisfy both. Everything here is a pure function of its inputs.

use crate::catalog::Catalog;
use crate::model::Product;

/// Case-insensitive substring match against `"<name> <brand> <tag>"`.
///
/// The fields are joined before searching, so a query may span a field
/// boundary ("x1 nova" matches Pulse X1 by NovaTech). Words are not matched
/// independently: "pocket mini" does not match "MiniGo Pocket Budget".
pub fn query_matches(product: &Product, query: &str) -> bool {
    query.is_empty() || product.haystack().to_lowercase().contains(&query.to_lowercase())
}

/// Exact, case-sensitive brand equality; `None` matches every product
pub fn brand_matches(product: &Product, selected: Option<&str>) -> bool {
    selected.is_none_or(|brand| product.brand == brand)
}

/// Products matching both predicates, in catalog order
pub fn visible_products<'a>(
    catalog: &'a Catalog,
    query: &str,
    selected: Option<&str>,
) -> Vec<&'a Product> {
    let visible: Vec<_> = catalog
        .products()
        .iter()
        .filter(|p| query_matches(p, query) && brand_matches(p, selected))
        .collect();

    tracing::debug!(
        query,
        brand = selected.unwrap_or("All"),
        visible = visible.len(),
        total = catalog.len(),
        "recomputed visible products"
    );

    visible
}
