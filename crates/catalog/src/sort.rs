//! Product grid ordering.

use std::borrow::Borrow;

use chrono::{DateTime, Utc};

use crate::filter::SortKey;
use crate::product::Product;
use crate::text::locale_cmp;

fn created_or_epoch(product: &Product) -> DateTime<Utc> {
    product.created_at.unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

/// Return `products` ordered by `key`, leaving the input untouched.
///
/// Every ordering is stable: ties keep their relative input order, so the
/// same inputs always paginate the same way.
pub fn sort_products<P>(products: &[P], key: SortKey) -> Vec<P>
where
    P: Borrow<Product> + Clone,
{
    let mut sorted = products.to_vec();
    match key {
        SortKey::Default => {}
        SortKey::PriceAsc => {
            sorted.sort_by(|a, b| a.borrow().price_value().total_cmp(&b.borrow().price_value()))
        }
        SortKey::PriceDesc => {
            sorted.sort_by(|a, b| b.borrow().price_value().total_cmp(&a.borrow().price_value()))
        }
        SortKey::NameAsc => sorted.sort_by(|a, b| locale_cmp(&a.borrow().name, &b.borrow().name)),
        SortKey::NameDesc => sorted.sort_by(|a, b| locale_cmp(&b.borrow().name, &a.borrow().name)),
        SortKey::Newest => {
            sorted.sort_by(|a, b| created_or_epoch(b.borrow()).cmp(&created_or_epoch(a.borrow())))
        }
    }
    sorted
}
