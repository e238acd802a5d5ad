//! Boundary contracts with the document store.
//!
//! Each source is fetched once per page load. Nothing is pushed down: the
//! catalog does all filtering, sorting and pagination in memory.

use std::sync::Arc;

use tary_catalog::{Banner, Category, Collection, Product, Story};

use crate::error::SourceError;

/// All product records.
#[async_trait::async_trait]
pub trait ProductSource: Send + Sync {
    async fn fetch_all_products(&self) -> Result<Vec<Product>, SourceError>;
}

/// Category and collection records.
#[async_trait::async_trait]
pub trait CategorySource: Send + Sync {
    /// Categories, possibly including inactive or duplicate-named records;
    /// the storefront filters and deduplicates them.
    async fn fetch_active_categories(&self) -> Result<Vec<Category>, SourceError>;

    async fn fetch_collections(&self) -> Result<Vec<Collection>, SourceError> {
        Ok(Vec::new())
    }
}

/// Hero banners and stories.
#[async_trait::async_trait]
pub trait PromoSource: Send + Sync {
    async fn fetch_banners(&self) -> Result<Vec<Banner>, SourceError> {
        Ok(Vec::new())
    }

    async fn fetch_stories(&self) -> Result<Vec<Story>, SourceError> {
        Ok(Vec::new())
    }
}

#[async_trait::async_trait]
impl<S> ProductSource for Arc<S>
where
    S: ProductSource + ?Sized,
{
    async fn fetch_all_products(&self) -> Result<Vec<Product>, SourceError> {
        (**self).fetch_all_products().await
    }
}

#[async_trait::async_trait]
impl<S> CategorySource for Arc<S>
where
    S: CategorySource + ?Sized,
{
    async fn fetch_active_categories(&self) -> Result<Vec<Category>, SourceError> {
        (**self).fetch_active_categories().await
    }

    async fn fetch_collections(&self) -> Result<Vec<Collection>, SourceError> {
        (**self).fetch_collections().await
    }
}

#[async_trait::async_trait]
impl<S> PromoSource for Arc<S>
where
    S: PromoSource + ?Sized,
{
    async fn fetch_banners(&self) -> Result<Vec<Banner>, SourceError> {
        (**self).fetch_banners().await
    }

    async fn fetch_stories(&self) -> Result<Vec<Story>, SourceError> {
        (**self).fetch_stories().await
    }
}
