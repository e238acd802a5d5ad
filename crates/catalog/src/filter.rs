//! Filter state and its transition table.
//!
//! [`FilterState`] is an immutable value. Every change goes through a tagged
//! [`FilterAction`] and [`Reducer::reduce`], which returns a new state. The
//! pagination reset rule lives in exactly one place: every action except
//! [`FilterAction::LoadMore`] puts `visible_count` back to [`PAGE_SIZE`].

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use tary_core::{DomainError, Reducer, ValueObject};

use crate::price::PriceBand;
use crate::slug::create_slug;

/// Products revealed per page / per "load more".
pub const PAGE_SIZE: usize = 12;

/// Display name of the virtual Plus Size category.
pub const PLUS_SIZE_NAME: &str = "Plus Size";

/// Slug of the virtual Plus Size category.
pub const PLUS_SIZE_SLUG: &str = "plus-size";

/// Category selection.
///
/// Plus Size is not a stored category value: it is backed by the product's
/// `plus_size` flag, so it gets its own variant instead of a magic string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum CategoryFilter {
    #[default]
    None,
    Named(String),
    PlusSizeVirtual,
}

impl ValueObject for CategoryFilter {}

impl CategoryFilter {
    /// Category selection from a stored category name or slug.
    ///
    /// `"Plus Size"` (exact name) and `"plus-size"` (exact slug) select the
    /// virtual category; blank input selects nothing.
    pub fn from_value(value: &str) -> Self {
        if value.trim().is_empty() {
            CategoryFilter::None
        } else if value == PLUS_SIZE_NAME || value == PLUS_SIZE_SLUG {
            CategoryFilter::PlusSizeVirtual
        } else {
            CategoryFilter::Named(value.to_string())
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, CategoryFilter::None)
    }

    /// Display name of the selection, if any.
    pub fn name(&self) -> Option<&str> {
        match self {
            CategoryFilter::None => None,
            CategoryFilter::Named(name) => Some(name),
            CategoryFilter::PlusSizeVirtual => Some(PLUS_SIZE_NAME),
        }
    }

    /// Slug of the selection, for URLs and analytics.
    pub fn slug(&self) -> Option<String> {
        match self {
            CategoryFilter::None => None,
            CategoryFilter::Named(name) => Some(create_slug(name)),
            CategoryFilter::PlusSizeVirtual => Some(PLUS_SIZE_SLUG.to_string()),
        }
    }
}

/// Product grid ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    Default,
    PriceAsc,
    PriceDesc,
    NameAsc,
    NameDesc,
    Newest,
}

impl ValueObject for SortKey {}

impl SortKey {
    pub const ALL: [SortKey; 6] = [
        SortKey::Default,
        SortKey::PriceAsc,
        SortKey::PriceDesc,
        SortKey::NameAsc,
        SortKey::NameDesc,
        SortKey::Newest,
    ];

    pub fn id(self) -> &'static str {
        match self {
            SortKey::Default => "default",
            SortKey::PriceAsc => "price_asc",
            SortKey::PriceDesc => "price_desc",
            SortKey::NameAsc => "name_asc",
            SortKey::NameDesc => "name_desc",
            SortKey::Newest => "newest",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Default => "Ordenar por",
            SortKey::PriceAsc => "Menor preço",
            SortKey::PriceDesc => "Maior preço",
            SortKey::NameAsc => "A-Z",
            SortKey::NameDesc => "Z-A",
            SortKey::Newest => "Mais recentes",
        }
    }
}

impl core::fmt::Display for SortKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for SortKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.id() == s.trim())
            .ok_or_else(|| DomainError::unknown("sort key", s))
    }
}

/// Swatch in the color filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub id: &'static str,
    pub name: &'static str,
    pub hex: &'static str,
}

pub const COLORS: [Color; 10] = [
    Color { id: "preto", name: "Preto", hex: "#1f2937" },
    Color { id: "branco", name: "Branco", hex: "#ffffff" },
    Color { id: "azul", name: "Azul", hex: "#3182ce" },
    Color { id: "rosa", name: "Rosa", hex: "#ec4899" },
    Color { id: "verde", name: "Verde", hex: "#10b981" },
    Color { id: "vermelho", name: "Vermelho", hex: "#ef4444" },
    Color { id: "laranja", name: "Laranja", hex: "#f97316" },
    Color { id: "amarelo", name: "Amarelo", hex: "#fbbf24" },
    Color { id: "roxo", name: "Roxo", hex: "#8b5cf6" },
    Color { id: "marrom", name: "Marrom", hex: "#92400e" },
];

pub fn color(id: &str) -> Option<&'static Color> {
    COLORS.iter().find(|c| c.id == id)
}

/// Everything the product grid is filtered, sorted and paginated by.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    category: CategoryFilter,
    price_range: PriceBand,
    sort: SortKey,
    plus_size: bool,
    colors: Vec<String>,
    active_collection: Option<String>,
    visible_count: usize,
}

impl ValueObject for FilterState {}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            category: CategoryFilter::None,
            price_range: PriceBand::All,
            sort: SortKey::Default,
            plus_size: false,
            colors: Vec::new(),
            active_collection: None,
            visible_count: PAGE_SIZE,
        }
    }
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(&self) -> &CategoryFilter {
        &self.category
    }

    pub fn price_range(&self) -> PriceBand {
        self.price_range
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    pub fn plus_size(&self) -> bool {
        self.plus_size
    }

    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    pub fn active_collection(&self) -> Option<&str> {
        self.active_collection.as_deref()
    }

    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    /// Number shown on the "Filtros" badge.
    pub fn active_filter_count(&self) -> usize {
        self.colors.len()
            + usize::from(self.price_range != PriceBand::All)
            + usize::from(self.plus_size)
    }

    /// Whether "clear filters" has anything to clear.
    pub fn has_active_filters(&self) -> bool {
        self.active_filter_count() > 0 || self.sort != SortKey::Default
    }
}

/// Kind of transition, for logging and for the reset rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    CollectionChange,
    CategoryChange,
    FilterChange,
    SortChange,
    PaginationAdvance,
}

/// Tagged state transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterAction {
    SetCategory(CategoryFilter),
    /// Deep-link focus: clears the collection, then sets the category, or
    /// clears it when `toggle` is set and it is already selected.
    FocusCategory { category: CategoryFilter, toggle: bool },
    SetCollection(Option<String>),
    /// Collection card click: select, or clear when already selected.
    ToggleCollection(String),
    SetPriceRange(PriceBand),
    SetSort(SortKey),
    SetPlusSize(bool),
    TogglePlusSize,
    ToggleColor(String),
    /// Reset colors, price band, sort, plus size and category. The active
    /// collection is kept.
    ClearFilters,
    LoadMore,
}

impl FilterAction {
    pub fn kind(&self) -> TransitionKind {
        match self {
            FilterAction::SetCategory(_) | FilterAction::FocusCategory { .. } => {
                TransitionKind::CategoryChange
            }
            FilterAction::SetCollection(_) | FilterAction::ToggleCollection(_) => {
                TransitionKind::CollectionChange
            }
            FilterAction::SetPriceRange(_)
            | FilterAction::SetPlusSize(_)
            | FilterAction::TogglePlusSize
            | FilterAction::ToggleColor(_)
            | FilterAction::ClearFilters => TransitionKind::FilterChange,
            FilterAction::SetSort(_) => TransitionKind::SortChange,
            FilterAction::LoadMore => TransitionKind::PaginationAdvance,
        }
    }
}

impl Reducer for FilterState {
    type Action = FilterAction;

    fn reduce(&self, action: &FilterAction) -> Self {
        let mut next = self.clone();
        match action {
            FilterAction::SetCategory(category) => next.category = category.clone(),
            FilterAction::FocusCategory { category, toggle } => {
                next.active_collection = None;
                next.category = if *toggle && self.category == *category {
                    CategoryFilter::None
                } else {
                    category.clone()
                };
            }
            FilterAction::SetCollection(collection) => {
                next.active_collection = collection.clone().filter(|c| !c.trim().is_empty());
            }
            FilterAction::ToggleCollection(collection) => {
                next.active_collection = if self.active_collection.as_deref() == Some(collection.as_str()) {
                    None
                } else {
                    Some(collection.clone())
                };
            }
            FilterAction::SetPriceRange(band) => next.price_range = *band,
            FilterAction::SetSort(sort) => next.sort = *sort,
            FilterAction::SetPlusSize(on) => next.plus_size = *on,
            FilterAction::TogglePlusSize => next.plus_size = !self.plus_size,
            FilterAction::ToggleColor(color) => {
                if let Some(pos) = next.colors.iter().position(|c| c == color) {
                    next.colors.remove(pos);
                } else {
                    next.colors.push(color.clone());
                }
            }
            FilterAction::ClearFilters => {
                next = FilterState {
                    active_collection: self.active_collection.clone(),
                    ..FilterState::default()
                };
            }
            FilterAction::LoadMore => {
                next.visible_count = self.visible_count.saturating_add(PAGE_SIZE);
                return next;
            }
        }
        next.visible_count = PAGE_SIZE;
        next
    }
}
