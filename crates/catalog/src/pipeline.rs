//! Catalog pipeline: base set → predicate → sort → page slice.

use serde::Serialize;

use crate::filter::FilterState;
use crate::predicate::matches;
use crate::product::Product;
use crate::sort::sort_products;

/// What the product grid renders for one state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogView<'a> {
    /// First `visible_count` matching products, in display order.
    pub visible: Vec<&'a Product>,
    /// Matching products behind the "load more" button.
    pub remaining_count: usize,
}

impl CatalogView<'_> {
    /// Every product matching the state, shown or not.
    pub fn total_matching(&self) -> usize {
        self.visible.len() + self.remaining_count
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    pub fn has_more(&self) -> bool {
        self.remaining_count > 0
    }
}

/// Products matching `state`, sorted, not yet paginated.
pub fn filtered_products<'a>(products: &'a [Product], state: &FilterState) -> Vec<&'a Product> {
    let base = products.iter().filter(|p| match state.active_collection() {
        Some(collection) => p.in_collection(collection),
        None => true,
    });
    let matching: Vec<&Product> = base.filter(|p| matches(p, state)).collect();
    sort_products(&matching, state.sort())
}

/// Compute the visible slice of the catalog for `state`.
///
/// Pure: the same `(products, state)` always yields the same view in the same
/// order, so callers recompute on every state change instead of caching.
pub fn compute_view<'a>(products: &'a [Product], state: &FilterState) -> CatalogView<'a> {
    let mut visible = filtered_products(products, state);
    let remaining_count = visible.len().saturating_sub(state.visible_count());
    visible.truncate(state.visible_count());
    tracing::trace!(
        visible = visible.len(),
        remaining = remaining_count,
        sort = %state.sort(),
        "catalog view computed"
    );
    CatalogView {
        visible,
        remaining_count,
    }
}
