//! Categories and collections: admin-managed groupings shown as filter tabs
//! and collection cards.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use tary_core::{CategoryId, CollectionId, Entity};

use crate::de;
use crate::product::Product;

/// Category record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(default)]
    pub id: CategoryId,
    #[serde(default, deserialize_with = "de::nullable")]
    pub name: String,
    #[serde(default, deserialize_with = "de::nullable")]
    pub slug: String,
    #[serde(default = "de::default_true", deserialize_with = "de::nullable_true")]
    pub active: bool,
    #[serde(default, deserialize_with = "de::nullable")]
    pub order: i64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Category {
    pub fn new(id: impl Into<CategoryId>, name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            slug: slug.into(),
            active: true,
            ..Self::default()
        }
    }
}

impl Entity for Category {
    type Id = CategoryId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Collection record. Same shape as a category, separate store collection.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    #[serde(default)]
    pub id: CollectionId,
    #[serde(default, deserialize_with = "de::nullable")]
    pub name: String,
    #[serde(default, deserialize_with = "de::nullable")]
    pub slug: String,
    #[serde(default = "de::default_true", deserialize_with = "de::nullable_true")]
    pub active: bool,
    #[serde(default, deserialize_with = "de::nullable")]
    pub order: i64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Collection {
    pub fn new(id: impl Into<CollectionId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            active: true,
            ..Self::default()
        }
    }
}

impl Entity for Collection {
    type Id = CollectionId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Shared view over orderable, toggleable listings.
pub trait Listing {
    fn name(&self) -> &str;
    fn is_active(&self) -> bool;
    fn order(&self) -> i64;
}

impl Listing for Category {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn order(&self) -> i64 {
        self.order
    }
}

impl Listing for Collection {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn order(&self) -> i64 {
        self.order
    }
}

/// Active listings ordered by `order`, one per distinct name.
///
/// The sort is stable and runs before deduplication, so among records sharing
/// a name the lowest `order` wins, and ties keep source order.
pub fn active_listings<L: Listing + Clone>(listings: &[L]) -> Vec<L> {
    let mut active: Vec<&L> = listings.iter().filter(|l| l.is_active()).collect();
    active.sort_by_key(|l| l.order());

    let mut seen = HashSet::new();
    active
        .into_iter()
        .filter(|l| seen.insert(l.name()))
        .cloned()
        .collect()
}

/// Categories to present as filter tabs.
pub fn active_categories(categories: &[Category]) -> Vec<Category> {
    active_listings(categories)
}

/// A collection card on the home page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollectionSummary {
    pub name: String,
    pub image_url: Option<String>,
    pub product_count: usize,
}

/// Active collections that contain at least one product, with counts.
pub fn collection_summaries(products: &[Product], collections: &[Collection]) -> Vec<CollectionSummary> {
    active_listings(collections)
        .into_iter()
        .filter_map(|collection| {
            let product_count = products
                .iter()
                .filter(|p| p.in_collection(&collection.name))
                .count();
            (product_count > 0).then(|| CollectionSummary {
                name: collection.name,
                image_url: collection.image_url,
                product_count,
            })
        })
        .collect()
}

/// Distinct collection names used by products, in first-seen order.
pub fn collections_from_products(products: &[Product]) -> Vec<&str> {
    let mut seen = HashSet::new();
    products
        .iter()
        .filter_map(|p| p.collection.as_deref())
        .filter(|name| seen.insert(*name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(id: &str, name: &str, order: i64, active: bool) -> Category {
        Category {
            order,
            active,
            ..Category::new(id, name, crate::slug::create_slug(name))
        }
    }

    #[test]
    fn dedupes_by_name_and_drops_inactive() {
        let categories = vec![
            category("c1", "Maiôs", 2, true),
            category("c2", "Biquínis", 1, true),
            category("c3", "Maiôs", 3, true),
            category("c4", "Acessórios", 0, false),
        ];
        let tabs = active_categories(&categories);
        let names: Vec<&str> = tabs.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Biquínis", "Maiôs"]);
        assert_eq!(tabs[1].id, CategoryId::new("c1"));
    }

    #[test]
    fn missing_active_flag_means_active() {
        let parsed: Category = serde_json::from_str(r#"{"id":"c1","name":"Maiôs","slug":"maios"}"#).unwrap();
        assert!(parsed.active);
        let parsed: Category =
            serde_json::from_str(r#"{"id":"c1","name":"Maiôs","slug":"maios","active":null}"#).unwrap();
        assert!(parsed.active);
        let parsed: Category =
            serde_json::from_str(r#"{"id":"c1","name":"Maiôs","slug":"maios","active":false}"#).unwrap();
        assert!(!parsed.active);
    }

    #[test]
    fn summaries_skip_empty_collections() {
        let products = vec![
            Product::new("p1", "A").with_collection("Tropical"),
            Product::new("p2", "B").with_collection("Tropical"),
            Product::new("p3", "C").with_collection("Elegance"),
        ];
        let collections = vec![
            Collection {
                order: 2,
                ..Collection::new("k1", "Tropical")
            },
            Collection {
                order: 1,
                ..Collection::new("k2", "Elegance")
            },
            Collection::new("k3", "Festas"),
        ];
        let summaries = collection_summaries(&products, &collections);
        assert_eq!(
            summaries
                .iter()
                .map(|s| (s.name.as_str(), s.product_count))
                .collect::<Vec<_>>(),
            [("Elegance", 1), ("Tropical", 2)]
        );
    }

    #[test]
    fn collection_names_in_first_seen_order() {
        let products = vec![
            Product::new("p1", "A").with_collection("Tropical"),
            Product::new("p2", "B"),
            Product::new("p3", "C").with_collection("Elegance"),
            Product::new("p4", "D").with_collection("Tropical"),
        ];
        assert_eq!(collections_from_products(&products), ["Tropical", "Elegance"]);
    }
}
