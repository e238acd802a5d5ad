use anyhow::Context;
use serde::Serialize;

use tary_catalog::{CatalogView, DeepLinkMatch, FilterAction, FilterState, PriceDiagnostic};
use tary_storefront::{CategoryTab, HomeSections, JsonCatalogFile, Storefront, StorefrontConfig};

/// What the binary prints: the grid a shopper would see for the configured
/// state.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Report<'a> {
    state: &'a FilterState,
    deep_link: Option<DeepLinkMatch>,
    categories: Vec<CategoryTab>,
    home: Option<HomeSections<'a>>,
    view: CatalogView<'a>,
    has_more: bool,
    price_issues: &'a [PriceDiagnostic],
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tary_observability::init();

    let config = StorefrontConfig::from_env().context("invalid storefront configuration")?;
    tracing::info!(path = %config.catalog_path.display(), "loading catalog");

    let source = JsonCatalogFile::new(&config.catalog_path);
    let mut store = Storefront::load(&source).await;

    if let Some(sort) = config.sort {
        store.dispatch(FilterAction::SetSort(sort));
    }
    if let Some(band) = config.price_range {
        store.dispatch(FilterAction::SetPriceRange(band));
    }
    let deep_link = config
        .trigger
        .as_deref()
        .map(|trigger| store.follow_trigger(trigger));

    let view = store.view();
    let report = Report {
        state: store.state(),
        deep_link,
        categories: store.category_tabs(),
        home: store.home_sections(),
        has_more: view.has_more(),
        view,
        price_issues: store.diagnostics(),
    };

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
