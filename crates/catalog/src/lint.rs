//! Price diagnostics.
//!
//! The catalog treats an unreadable price as 0 so the grid always renders,
//! which quietly ranks such products as the cheapest. This lint reports them
//! so the data can be fixed at the source.

use serde::Serialize;

use tary_core::ProductId;

use crate::price::{Price, PriceError};
use crate::product::Product;

/// What is wrong with a product's price.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PriceIssue {
    Missing,
    Unreadable { raw: String, reason: String },
}

/// One product with a price problem.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceDiagnostic {
    pub product_id: ProductId,
    pub product_name: String,
    pub issue: PriceIssue,
}

fn raw_text(product: &Product) -> String {
    match &product.price {
        Some(Price::Text(s)) => s.clone(),
        Some(Price::Amount(v)) => v.to_string(),
        None => String::new(),
    }
}

fn issue(product: &Product) -> Option<PriceIssue> {
    let price = match &product.price {
        None => return Some(PriceIssue::Missing),
        Some(price) => price,
    };
    match price.strict_value() {
        Ok(_) => None,
        Err(PriceError::Empty) => Some(PriceIssue::Missing),
        Err(err) => Some(PriceIssue::Unreadable {
            raw: raw_text(product),
            reason: err.to_string(),
        }),
    }
}

/// Products whose price is missing or not strictly readable, in source order.
pub fn lint_prices(products: &[Product]) -> Vec<PriceDiagnostic> {
    products
        .iter()
        .filter_map(|product| {
            issue(product).map(|issue| PriceDiagnostic {
                product_id: product.id.clone(),
                product_name: product.name.clone(),
                issue,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_missing_and_unreadable_prices() {
        let products = vec![
            Product::new("ok", "Ok").with_price("R$ 189,00"),
            Product::new("numeric", "Numeric").with_price(99.5),
            Product::new("missing", "Missing"),
            Product::new("blank", "Blank").with_price("R$ "),
            Product::new("garbage", "Garbage").with_price("sob consulta"),
        ];
        let report = lint_prices(&products);
        let flagged: Vec<(&str, &PriceIssue)> = report
            .iter()
            .map(|d| (d.product_id.as_str(), &d.issue))
            .collect();
        assert_eq!(flagged.len(), 3);
        assert_eq!(flagged[0], ("missing", &PriceIssue::Missing));
        assert_eq!(flagged[1], ("blank", &PriceIssue::Missing));
        assert!(matches!(
            flagged[2],
            ("garbage", PriceIssue::Unreadable { raw, .. }) if raw == "sob consulta"
        ));
    }

    #[test]
    fn clean_catalog_has_no_diagnostics() {
        let products = vec![Product::new("p1", "A").with_price("R$ 1.234,56")];
        assert!(lint_prices(&products).is_empty());
    }
}
