//! In-memory sources for tests and local runs.

use tary_catalog::{Banner, Category, Collection, Product, Story};

use crate::error::SourceError;
use crate::source::{CategorySource, ProductSource, PromoSource};

/// Fixed catalog held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    pub products: Vec<Product>,
    pub categories: Vec<Category>,
    pub collections: Vec<Collection>,
    pub banners: Vec<Banner>,
    pub stories: Vec<Story>,
}

impl InMemoryCatalog {
    pub fn new(products: Vec<Product>, categories: Vec<Category>) -> Self {
        Self {
            products,
            categories,
            ..Self::default()
        }
    }
}

#[async_trait::async_trait]
impl ProductSource for InMemoryCatalog {
    async fn fetch_all_products(&self) -> Result<Vec<Product>, SourceError> {
        Ok(self.products.clone())
    }
}

#[async_trait::async_trait]
impl CategorySource for InMemoryCatalog {
    async fn fetch_active_categories(&self) -> Result<Vec<Category>, SourceError> {
        Ok(self.categories.clone())
    }

    async fn fetch_collections(&self) -> Result<Vec<Collection>, SourceError> {
        Ok(self.collections.clone())
    }
}

#[async_trait::async_trait]
impl PromoSource for InMemoryCatalog {
    async fn fetch_banners(&self) -> Result<Vec<Banner>, SourceError> {
        Ok(self.banners.clone())
    }

    async fn fetch_stories(&self) -> Result<Vec<Story>, SourceError> {
        Ok(self.stories.clone())
    }
}

/// Source whose every fetch fails, e.g. the store is unreachable.
#[derive(Debug, Clone, Default)]
pub struct UnavailableSource;

#[async_trait::async_trait]
impl ProductSource for UnavailableSource {
    async fn fetch_all_products(&self) -> Result<Vec<Product>, SourceError> {
        Err(SourceError::unavailable("products"))
    }
}

#[async_trait::async_trait]
impl CategorySource for UnavailableSource {
    async fn fetch_active_categories(&self) -> Result<Vec<Category>, SourceError> {
        Err(SourceError::unavailable("categories"))
    }

    async fn fetch_collections(&self) -> Result<Vec<Collection>, SourceError> {
        Err(SourceError::unavailable("collections"))
    }
}

#[async_trait::async_trait]
impl PromoSource for UnavailableSource {
    async fn fetch_banners(&self) -> Result<Vec<Banner>, SourceError> {
        Err(SourceError::unavailable("banners"))
    }

    async fn fetch_stories(&self) -> Result<Vec<Story>, SourceError> {
        Err(SourceError::unavailable("stories"))
    }
}
