//! Deep links: banner CTAs, story taps and category tabs carry a free-form
//! filter intent that is resolved against the known categories.

use serde::Serialize;

use tary_core::Reducer;

use crate::category::Category;
use crate::filter::{CategoryFilter, FilterAction, FilterState};
use crate::text::eq_ignore_case;

/// Trigger spellings that select the virtual Plus Size category.
const PLUS_SIZE_TRIGGERS: [&str; 3] = ["plussize", "plus-size", "plus size"];

/// How a trigger was understood.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "category", rename_all = "snake_case")]
pub enum DeepLinkMatch {
    /// Selected the virtual Plus Size category.
    PlusSize,
    /// Matched a known category by name or slug.
    Category(String),
    /// Nothing matched; the trigger itself was used as the category value.
    Literal(String),
    /// Blank trigger; state unchanged.
    Ignored,
}

/// Result of resolving a trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub state: FilterState,
    pub matched: DeepLinkMatch,
    /// The grid should be scrolled into view. Presentation is the caller's job.
    pub scroll_to_grid: bool,
}

impl Resolution {
    pub fn into_state(self) -> FilterState {
        self.state
    }
}

/// Whether a trigger names the Plus Size virtual category.
pub fn is_plus_size_trigger(trigger: &str) -> bool {
    PLUS_SIZE_TRIGGERS.iter().any(|t| eq_ignore_case(trigger, t))
}

/// Known category whose name or slug matches `trigger`, ignoring case.
///
/// `known_categories` is expected to be deduplicated already
/// (see [`crate::category::active_categories`]); the first match wins.
pub fn find_category<'a>(trigger: &str, known_categories: &'a [Category]) -> Option<&'a Category> {
    known_categories
        .iter()
        .find(|c| eq_ignore_case(&c.name, trigger) || (!c.slug.is_empty() && eq_ignore_case(&c.slug, trigger)))
}

/// Map an external trigger onto the next filter state.
///
/// Rules, first match wins:
/// 1. a Plus Size spelling selects the virtual category (never a toggle);
/// 2. a known category (name or slug) is toggled;
/// 3. anything else is toggled as a literal category value.
///
/// Each rule clears the active collection and resets pagination.
pub fn resolve_external_filter(
    trigger: &str,
    current: &FilterState,
    known_categories: &[Category],
) -> Resolution {
    let trimmed = trigger.trim();
    if trimmed.is_empty() {
        return Resolution {
            state: current.clone(),
            matched: DeepLinkMatch::Ignored,
            scroll_to_grid: false,
        };
    }

    let (action, matched) = if is_plus_size_trigger(trimmed) {
        (
            FilterAction::FocusCategory {
                category: CategoryFilter::PlusSizeVirtual,
                toggle: false,
            },
            DeepLinkMatch::PlusSize,
        )
    } else if let Some(category) = find_category(trimmed, known_categories) {
        (
            FilterAction::FocusCategory {
                category: CategoryFilter::from_value(&category.name),
                toggle: true,
            },
            DeepLinkMatch::Category(category.name.clone()),
        )
    } else {
        // Legacy triggers authored before categories were managed in the
        // admin panel.
        tracing::debug!(trigger = trimmed, "deep link matched no category; using literal value");
        (
            FilterAction::FocusCategory {
                category: CategoryFilter::from_value(trimmed),
                toggle: true,
            },
            DeepLinkMatch::Literal(trimmed.to_string()),
        )
    };

    tracing::debug!(trigger = trimmed, matched = ?matched, "deep link resolved");
    Resolution {
        state: current.reduce(&action),
        matched,
        scroll_to_grid: true,
    }
}
