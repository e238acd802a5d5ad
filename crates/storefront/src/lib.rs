//! Storefront wiring: catalog sources, configuration and the shopper session.

pub mod config;
pub mod error;
pub mod json_file;
pub mod memory;
pub mod session;
pub mod source;

pub use config::StorefrontConfig;
pub use error::{ConfigError, SourceError};
pub use json_file::{CatalogExport, JsonCatalogFile};
pub use memory::{InMemoryCatalog, UnavailableSource};
pub use session::{CategoryTab, HomeSections, Storefront};
pub use source::{CategorySource, ProductSource, PromoSource};
