//! Home page product sections and catalog search.

use crate::product::Product;

/// "Destaques" section: featured products in source order.
pub fn featured(products: &[Product]) -> Vec<&Product> {
    products.iter().filter(|p| p.featured).collect()
}

/// "Novidades" section: products flagged as new, in source order.
pub fn new_arrivals(products: &[Product]) -> Vec<&Product> {
    products.iter().filter(|p| p.is_new).collect()
}

/// Case-insensitive substring search over name, category, collection and
/// description. A blank query matches nothing.
pub fn search_products<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    let hit = |field: &str| field.to_lowercase().contains(&needle);
    products
        .iter()
        .filter(|p| {
            hit(&p.name)
                || hit(&p.category)
                || p.collection.as_deref().is_some_and(hit)
                || p.description.as_deref().is_some_and(hit)
        })
        .collect()
}
