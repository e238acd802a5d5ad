//! Storefront catalog engine.
//!
//! This crate turns the raw product list into the exact product grid to
//! render: filter state, price parsing, predicate, sort, pagination and deep
//! links. It is deterministic domain logic only (no IO, no rendering).

mod de;

pub mod category;
pub mod deep_link;
pub mod filter;
pub mod lint;
pub mod pipeline;
pub mod predicate;
pub mod price;
pub mod product;
pub mod promo;
pub mod sections;
pub mod slug;
pub mod sort;
pub mod text;

pub use category::{
    Category, Collection, CollectionSummary, active_categories, collection_summaries,
    collections_from_products,
};
pub use deep_link::{DeepLinkMatch, Resolution, resolve_external_filter};
pub use filter::{
    COLORS, CategoryFilter, Color, FilterAction, FilterState, PAGE_SIZE, PLUS_SIZE_NAME, SortKey,
    TransitionKind,
};
pub use lint::{PriceDiagnostic, PriceIssue, lint_prices};
pub use pipeline::{CatalogView, compute_view, filtered_products};
pub use predicate::matches;
pub use price::{Price, PriceBand, PriceError, format_price_input, parse_price, parse_price_strict};
pub use product::Product;
pub use promo::{Banner, Story, active_banners, active_stories};
pub use sections::{featured, new_arrivals, search_products};
pub use slug::{SlugField, create_slug};
pub use sort::sort_products;
