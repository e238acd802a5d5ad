//! Catalog read from a JSON export of the document store.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::sync::OnceCell;

use tary_catalog::{Banner, Category, Collection, Product, Story};

use crate::error::SourceError;
use crate::source::{CategorySource, ProductSource, PromoSource};

/// Shape of the export file. Every section is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogExport {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub collections: Vec<Collection>,
    #[serde(default)]
    pub banners: Vec<Banner>,
    #[serde(default)]
    pub stories: Vec<Story>,
}

/// The export with records still undecoded, so one bad record cannot sink
/// its whole section.
#[derive(Deserialize)]
struct RawExport {
    #[serde(default)]
    products: Vec<Value>,
    #[serde(default)]
    categories: Vec<Value>,
    #[serde(default)]
    collections: Vec<Value>,
    #[serde(default)]
    banners: Vec<Value>,
    #[serde(default)]
    stories: Vec<Value>,
}

fn decode_records<T: DeserializeOwned>(section: &'static str, records: Vec<Value>) -> Vec<T> {
    records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| {
            let id = record.get("id").and_then(Value::as_str).map(str::to_owned);
            serde_json::from_value(record)
                .map_err(|err| {
                    tracing::warn!(
                        section,
                        index,
                        id = id.as_deref().unwrap_or(""),
                        error = %err,
                        "skipping unreadable record"
                    );
                })
                .ok()
        })
        .collect()
}

impl CatalogExport {
    /// Decode an export, skipping (and logging) records that do not fit
    /// their section's shape. Fails only when the document itself is not an
    /// export.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        let raw: RawExport = serde_json::from_slice(bytes)?;
        Ok(Self {
            products: decode_records("products", raw.products),
            categories: decode_records("categories", raw.categories),
            collections: decode_records("collections", raw.collections),
            banners: decode_records("banners", raw.banners),
            stories: decode_records("stories", raw.stories),
        })
    }
}

/// Source backed by an export file.
///
/// The file is read and decoded once, on the first successful fetch; every
/// section then comes from that same snapshot. Build a new source to pick up
/// a newer export.
#[derive(Debug, Clone)]
pub struct JsonCatalogFile {
    path: PathBuf,
    export: OnceCell<CatalogExport>,
}

impl JsonCatalogFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            export: OnceCell::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn read(&self) -> Result<&CatalogExport, SourceError> {
        self.export
            .get_or_try_init(|| async {
                let bytes = tokio::fs::read(&self.path).await.map_err(|source| SourceError::Io {
                    path: self.path.clone(),
                    source,
                })?;
                CatalogExport::from_slice(&bytes).map_err(|source| SourceError::Decode {
                    path: self.path.clone(),
                    source,
                })
            })
            .await
    }
}

#[async_trait::async_trait]
impl ProductSource for JsonCatalogFile {
    async fn fetch_all_products(&self) -> Result<Vec<Product>, SourceError> {
        Ok(self.read().await?.products.clone())
    }
}

#[async_trait::async_trait]
impl CategorySource for JsonCatalogFile {
    async fn fetch_active_categories(&self) -> Result<Vec<Category>, SourceError> {
        Ok(self.read().await?.categories.clone())
    }

    async fn fetch_collections(&self) -> Result<Vec<Collection>, SourceError> {
        Ok(self.read().await?.collections.clone())
    }
}

#[async_trait::async_trait]
impl PromoSource for JsonCatalogFile {
    async fn fetch_banners(&self) -> Result<Vec<Banner>, SourceError> {
        Ok(self.read().await?.banners.clone())
    }

    async fn fetch_stories(&self) -> Result<Vec<Story>, SourceError> {
        Ok(self.read().await?.stories.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bad_records_are_skipped_not_fatal() {
        let body = json!({
            "products": [
                { "id": "p1", "name": "Biquíni Coral", "featured": "sim" },
                { "id": "p2", "name": "Maiô Noite", "featured": true }
            ],
            "categories": [
                { "id": "c1", "name": "Biquínis", "order": 1.5 },
                { "id": "c2", "name": "Maiôs", "order": 2 }
            ]
        });
        let export = CatalogExport::from_slice(&serde_json::to_vec(&body).unwrap()).unwrap();

        let products: Vec<&str> = export.products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(products, ["p2"]);
        let categories: Vec<&str> = export.categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(categories, ["Maiôs"]);
    }

    #[test]
    fn section_of_the_wrong_shape_is_a_decode_error() {
        assert!(CatalogExport::from_slice(br#"{ "products": "none" }"#).is_err());
        assert!(CatalogExport::from_slice(b"{ not json").is_err());
    }

    #[test]
    fn missing_sections_are_empty() {
        let export = CatalogExport::from_slice(b"{}").unwrap();
        assert!(export.products.is_empty());
        assert!(export.stories.is_empty());
    }
}
