//! Environment-driven configuration for the storefront binary.

use std::path::PathBuf;

use tary_catalog::{PriceBand, SortKey};

use crate::error::ConfigError;

pub const CATALOG_PATH_VAR: &str = "TARY_CATALOG_PATH";
pub const TRIGGER_VAR: &str = "TARY_TRIGGER";
pub const SORT_VAR: &str = "TARY_SORT";
pub const PRICE_RANGE_VAR: &str = "TARY_PRICE_RANGE";

const DEFAULT_CATALOG_PATH: &str = "catalog.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// JSON export to load the catalog from.
    pub catalog_path: PathBuf,
    /// Deep-link trigger to replay after load, as if a banner was clicked.
    pub trigger: Option<String>,
    pub sort: Option<SortKey>,
    pub price_range: Option<PriceBand>,
}

impl StorefrontConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from any variable lookup; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let get = |var| lookup(var).filter(|v| !v.trim().is_empty());

        let catalog_path = get(CATALOG_PATH_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG_PATH));

        let sort = get(SORT_VAR)
            .map(|v| v.parse::<SortKey>())
            .transpose()
            .map_err(|source| ConfigError::Invalid { var: SORT_VAR, source })?;

        let price_range = get(PRICE_RANGE_VAR)
            .map(|v| v.parse::<PriceBand>())
            .transpose()
            .map_err(|source| ConfigError::Invalid {
                var: PRICE_RANGE_VAR,
                source,
            })?;

        Ok(Self {
            catalog_path,
            trigger: get(TRIGGER_VAR),
            sort,
            price_range,
        })
    }
}
