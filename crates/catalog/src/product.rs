//! Product records as read from the document store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tary_core::{Entity, ProductId};

use crate::de;
use crate::price::Price;

/// Product record (read-only input to the catalog).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(default)]
    pub id: ProductId,
    #[serde(default, deserialize_with = "de::nullable")]
    pub name: String,
    /// Expected to match an active category's name; not enforced.
    #[serde(default, deserialize_with = "de::nullable")]
    pub category: String,
    #[serde(default, deserialize_with = "de::non_blank")]
    pub collection: Option<String>,
    #[serde(default)]
    pub price: Option<Price>,
    #[serde(default)]
    pub description: Option<String>,
    /// First image is the cover.
    #[serde(default, deserialize_with = "de::nullable")]
    pub images: Vec<String>,
    /// Color ids from the palette in [`crate::filter::COLORS`].
    #[serde(default, deserialize_with = "de::nullable")]
    pub colors: Vec<String>,
    #[serde(default, deserialize_with = "de::nullable")]
    pub featured: bool,
    #[serde(default, deserialize_with = "de::nullable")]
    pub is_new: bool,
    #[serde(default, deserialize_with = "de::nullable")]
    pub plus_size: bool,
    #[serde(default, deserialize_with = "de::timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Product {
    /// Minimal product, for fixtures and builders.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = Some(collection.into());
        self
    }

    pub fn with_price(mut self, price: impl Into<Price>) -> Self {
        self.price = Some(price.into());
        self
    }

    pub fn with_plus_size(mut self, plus_size: bool) -> Self {
        self.plus_size = plus_size;
        self
    }

    pub fn with_colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.colors = colors.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Parsed price; absent or unreadable prices are worth 0.
    pub fn price_value(&self) -> f64 {
        self.price.as_ref().map_or(0.0, Price::value)
    }

    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    pub fn in_collection(&self, collection: &str) -> bool {
        self.collection.as_deref() == Some(collection)
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_a_store_document() {
        let json = r#"{
            "id": "p1",
            "name": "Biquíni Azul Royal",
            "category": "Biquínis",
            "collection": "Verão 2024",
            "price": "R$ 189,00",
            "images": ["/a.jpg", "/b.jpg"],
            "featured": true,
            "isNew": true,
            "createdAt": {"seconds": 1700000000, "nanoseconds": 0}
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, ProductId::new("p1"));
        assert_eq!(product.price_value(), 189.0);
        assert_eq!(product.cover_image(), Some("/a.jpg"));
        assert!(product.featured && product.is_new && !product.plus_size);
        assert!(product.created_at.is_some());
        assert!(product.in_collection("Verão 2024"));
    }

    #[test]
    fn tolerates_nulls_and_missing_fields() {
        let json = r#"{"id": "p2", "name": null, "images": null, "plusSize": null, "collection": ""}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.name, "");
        assert!(product.images.is_empty());
        assert!(!product.plus_size);
        assert_eq!(product.collection, None);
        assert_eq!(product.price_value(), 0.0);
        assert_eq!(product.cover_image(), None);
    }
}
