//! One shopper's page session: the loaded catalog plus the current filter
//! state.

use serde::Serialize;

use tary_catalog::{
    Banner, CatalogView, Category, CategoryFilter, Collection, CollectionSummary, DeepLinkMatch,
    FilterAction, FilterState, PriceDiagnostic, Product, Story, active_banners, active_categories,
    active_stories, collection_summaries, compute_view, featured, lint_prices, new_arrivals,
    resolve_external_filter, search_products,
};
use tary_catalog::filter::{PLUS_SIZE_NAME, PLUS_SIZE_SLUG};
use tary_core::{Entity, ProductId, Reducer};

use crate::error::SourceError;
use crate::source::{CategorySource, ProductSource, PromoSource};

/// Home page sections shown above the grid.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeSections<'a> {
    pub featured: Vec<&'a Product>,
    pub new_arrivals: Vec<&'a Product>,
    pub collections: Vec<CollectionSummary>,
}

/// A category tab, with whether it is currently selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTab {
    pub name: String,
    pub slug: String,
    pub selected: bool,
}

#[derive(Debug, Clone, Default)]
pub struct Storefront {
    products: Vec<Product>,
    categories: Vec<Category>,
    collections: Vec<Collection>,
    banners: Vec<Banner>,
    stories: Vec<Story>,
    diagnostics: Vec<PriceDiagnostic>,
    state: FilterState,
}

fn or_empty<T>(what: &'static str, fetched: Result<Vec<T>, SourceError>) -> Vec<T> {
    fetched.unwrap_or_else(|err| {
        tracing::warn!(source = what, error = %err, "fetch failed; continuing with an empty list");
        Vec::new()
    })
}

impl Storefront {
    /// Fetch everything once and start from the default filter state.
    ///
    /// Never fails: a source that cannot deliver contributes an empty list.
    pub async fn load<S>(source: &S) -> Self
    where
        S: ProductSource + CategorySource + PromoSource + ?Sized,
    {
        let products = or_empty("products", source.fetch_all_products().await);
        let categories = or_empty("categories", source.fetch_active_categories().await);
        let collections = or_empty("collections", source.fetch_collections().await);
        let banners = or_empty("banners", source.fetch_banners().await);
        let stories = or_empty("stories", source.fetch_stories().await);

        Self::from_parts(products, categories, collections, banners, stories)
    }

    pub fn from_parts(
        products: Vec<Product>,
        categories: Vec<Category>,
        collections: Vec<Collection>,
        banners: Vec<Banner>,
        stories: Vec<Story>,
    ) -> Self {
        let categories = active_categories(&categories);
        let diagnostics = lint_prices(&products);
        for diagnostic in &diagnostics {
            tracing::warn!(
                product_id = %diagnostic.product_id,
                product = %diagnostic.product_name,
                issue = ?diagnostic.issue,
                "price will be treated as 0"
            );
        }

        tracing::info!(
            products = products.len(),
            categories = categories.len(),
            collections = collections.len(),
            banners = banners.len(),
            stories = stories.len(),
            price_issues = diagnostics.len(),
            "catalog loaded"
        );

        Self {
            products,
            categories,
            collections,
            banners,
            stories,
            diagnostics,
            state: FilterState::default(),
        }
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Active categories, ordered and deduplicated by name.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Price problems found at load time.
    pub fn diagnostics(&self) -> &[PriceDiagnostic] {
        &self.diagnostics
    }

    /// Apply one transition, replacing the whole state.
    pub fn dispatch(&mut self, action: FilterAction) -> &FilterState {
        tracing::debug!(action = ?action, kind = ?action.kind(), "filter transition");
        self.state = self.state.reduce(&action);
        &self.state
    }

    /// Resolve a banner, story or tab trigger and adopt the resulting state.
    pub fn follow_trigger(&mut self, trigger: &str) -> DeepLinkMatch {
        let resolution = resolve_external_filter(trigger, &self.state, &self.categories);
        let matched = resolution.matched.clone();
        self.state = resolution.into_state();
        matched
    }

    pub fn view(&self) -> CatalogView<'_> {
        compute_view(&self.products, &self.state)
    }

    /// Category tabs for the stored categories. A stored Plus Size record
    /// shows as selected while the virtual category is active.
    pub fn category_tabs(&self) -> Vec<CategoryTab> {
        let selected = self.state.category();
        self.categories
            .iter()
            .map(|c| CategoryTab {
                name: c.name.clone(),
                slug: c.slug.clone(),
                selected: match selected {
                    CategoryFilter::None => false,
                    CategoryFilter::Named(name) => *name == c.name,
                    CategoryFilter::PlusSizeVirtual => {
                        c.name == PLUS_SIZE_NAME || c.slug == PLUS_SIZE_SLUG
                    }
                },
            })
            .collect()
    }

    /// Featured, new-arrival and collection sections. Hidden while a
    /// collection is selected.
    pub fn home_sections(&self) -> Option<HomeSections<'_>> {
        if self.state.active_collection().is_some() {
            return None;
        }
        Some(HomeSections {
            featured: featured(&self.products),
            new_arrivals: new_arrivals(&self.products),
            collections: collection_summaries(&self.products, &self.collections),
        })
    }

    pub fn banners(&self) -> Vec<&Banner> {
        active_banners(&self.banners)
    }

    pub fn stories(&self) -> Vec<&Story> {
        active_stories(&self.stories)
    }

    pub fn search(&self, query: &str) -> Vec<&Product> {
        search_products(&self.products, query)
    }

    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id() == id)
    }
}
