//! Per-product filter predicate.
//!
//! A product matches when every clause holds. Each clause reads one part of
//! the state, is vacuously true when that part is unset, and can be
//! evaluated in any order.

use crate::filter::{CategoryFilter, FilterState};
use crate::price::PriceBand;
use crate::product::Product;

/// Plus-size toggle: only plus-size products.
pub fn plus_size_clause(product: &Product, plus_size: bool) -> bool {
    !plus_size || product.plus_size
}

/// Category selection. The Plus Size virtual category is backed by the flag,
/// not by the product's category string.
pub fn category_clause(product: &Product, category: &CategoryFilter) -> bool {
    match category {
        CategoryFilter::None => true,
        CategoryFilter::PlusSizeVirtual => product.plus_size,
        CategoryFilter::Named(name) => product.category == *name,
    }
}

/// Price band, `[min, max)` over the parsed price.
pub fn price_clause(product: &Product, band: PriceBand) -> bool {
    band == PriceBand::All || band.contains(product.price_value())
}

/// Colors: any selected color present on the product.
pub fn color_clause(product: &Product, colors: &[String]) -> bool {
    colors.is_empty() || colors.iter().any(|c| product.colors.contains(c))
}

/// Whether `product` passes every clause of `state`.
pub fn matches(product: &Product, state: &FilterState) -> bool {
    plus_size_clause(product, state.plus_size())
        && category_clause(product, state.category())
        && price_clause(product, state.price_range())
        && color_clause(product, state.colors())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::FilterAction;
    use tary_core::Reducer;

    fn bikini() -> Product {
        Product::new("p1", "Biquíni Azul")
            .with_category("Biquínis")
            .with_price("R$ 150,00")
            .with_colors(["azul"])
    }

    #[test]
    fn default_state_matches_everything() {
        assert!(matches(&bikini(), &FilterState::new()));
        assert!(matches(&Product::default(), &FilterState::new()));
    }

    #[test]
    fn plus_size_toggle_requires_flag() {
        assert!(!plus_size_clause(&bikini(), true));
        assert!(plus_size_clause(&bikini().with_plus_size(true), true));
        assert!(plus_size_clause(&bikini(), false));
    }

    #[test]
    fn named_category_is_exact_and_case_sensitive() {
        let named = |s: &str| CategoryFilter::Named(s.to_string());
        assert!(category_clause(&bikini(), &named("Biquínis")));
        assert!(!category_clause(&bikini(), &named("biquínis")));
        assert!(!category_clause(&bikini(), &named("Biquinis")));
    }

    #[test]
    fn plus_size_virtual_category_uses_flag_not_string() {
        let plus = bikini().with_plus_size(true);
        assert!(category_clause(&plus, &CategoryFilter::PlusSizeVirtual));
        assert!(!category_clause(&bikini(), &CategoryFilter::PlusSizeVirtual));

        let labelled_but_not_flagged = bikini().with_category("Plus Size");
        assert!(!category_clause(&labelled_but_not_flagged, &CategoryFilter::PlusSizeVirtual));
    }

    #[test]
    fn price_band_bounds_are_half_open() {
        let at = |price: &str| bikini().with_price(price);
        assert!(price_clause(&at("R$ 100,00"), PriceBand::Mid));
        assert!(price_clause(&at("R$ 199,99"), PriceBand::Mid));
        assert!(!price_clause(&at("R$ 200,00"), PriceBand::Mid));
        assert!(price_clause(&at("R$ 200,00"), PriceBand::Premium));
    }

    #[test]
    fn unparseable_price_counts_as_zero() {
        let free = bikini().with_price("sob consulta");
        assert!(price_clause(&free, PriceBand::Budget));
        assert!(!price_clause(&free, PriceBand::Mid));
    }

    #[test]
    fn colors_match_any_selected() {
        let selected = vec!["rosa".to_string(), "azul".to_string()];
        assert!(color_clause(&bikini(), &selected));
        assert!(!color_clause(&bikini(), &["preto".to_string()]));
        assert!(!color_clause(&Product::default(), &selected));
    }

    #[test]
    fn matches_is_the_conjunction_of_clauses() {
        let state = FilterState::new().reduce_all(&[
            FilterAction::SetCategory(CategoryFilter::Named("Biquínis".into())),
            FilterAction::SetPriceRange(PriceBand::Mid),
        ]);
        assert!(matches(&bikini(), &state));
        assert!(!matches(&bikini().with_price("R$ 90,00"), &state));
        assert!(!matches(&bikini().with_category("Maiôs"), &state));
    }
}
