//! Localized price parsing, price bands and price-entry formatting.
//!
//! Prices are stored as Brazilian currency strings (`"R$ 1.234,56"`): dots
//! group thousands and the comma separates centavos.

use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use tary_core::{DomainError, ValueObject};

/// Currency prefix stripped before parsing.
pub const CURRENCY_PREFIX: &str = "R$";

/// Price as stored on a product record: already numeric, or a display string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Amount(f64),
    Text(String),
}

impl Price {
    /// Comparable numeric value. Never fails; garbage is worth 0.
    pub fn value(&self) -> f64 {
        match self {
            Price::Amount(v) => *v,
            Price::Text(s) => parse_price(s),
        }
    }

    /// Strict variant used by diagnostics.
    pub fn strict_value(&self) -> Result<f64, PriceError> {
        match self {
            Price::Amount(v) if v.is_finite() => Ok(*v),
            Price::Amount(v) => Err(PriceError::Malformed(v.to_string())),
            Price::Text(s) => parse_price_strict(s),
        }
    }
}

impl From<&str> for Price {
    fn from(value: &str) -> Self {
        Price::Text(value.to_string())
    }
}

impl From<f64> for Price {
    fn from(value: f64) -> Self {
        Price::Amount(value)
    }
}

/// Why a price string could not be read strictly.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PriceError {
    #[error("price is empty")]
    Empty,

    #[error("price is not a number: {0:?}")]
    Malformed(String),

    #[error("price is negative: {0}")]
    Negative(f64),
}

/// Remove the currency prefix, whitespace and thousand separators, then turn
/// the decimal comma into a point.
fn normalize(input: &str) -> String {
    let mut cleaned: String = input
        .replace(CURRENCY_PREFIX, "")
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '.')
        .collect();
    if let Some(pos) = cleaned.find(',') {
        cleaned.replace_range(pos..pos + 1, ".");
    }
    cleaned
}

/// Length of the longest prefix of `s` that reads as a decimal number
/// (`[+-]digits[.digits][e[+-]digits]`), or `None` if there is no digit.
fn numeric_prefix_len(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    let mut i = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }
    let int_start = i;
    while bytes.get(i).is_some_and(u8::is_ascii_digit) {
        i += 1;
    }
    let mut digits = i - int_start;
    if bytes.get(i) == Some(&b'.') {
        let frac_start = i + 1;
        let mut j = frac_start;
        while bytes.get(j).is_some_and(u8::is_ascii_digit) {
            j += 1;
        }
        if digits > 0 || j > frac_start {
            digits += j - frac_start;
            i = j;
        }
    }
    if digits == 0 {
        return None;
    }
    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_start = j;
        while bytes.get(j).is_some_and(u8::is_ascii_digit) {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }
    Some(i)
}

/// Parse a localized price string into a comparable number.
///
/// Reads the leading number after normalisation, so trailing noise is
/// ignored (`"R$ 99,90 à vista"` → `99.9`). Absent, empty or unreadable input
/// is worth `0.0`; this never fails.
pub fn parse_price(input: &str) -> f64 {
    let cleaned = normalize(input);
    numeric_prefix_len(&cleaned)
        .and_then(|len| cleaned[..len].parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Parse a price that must be entirely numeric after normalisation.
pub fn parse_price_strict(input: &str) -> Result<f64, PriceError> {
    let cleaned = normalize(input);
    if cleaned.is_empty() {
        return Err(PriceError::Empty);
    }
    if numeric_prefix_len(&cleaned) != Some(cleaned.len()) {
        return Err(PriceError::Malformed(input.to_string()));
    }
    let value = cleaned
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| PriceError::Malformed(input.to_string()))?;
    if value < 0.0 {
        return Err(PriceError::Negative(value));
    }
    Ok(value)
}

/// Named price filter band. Bounds are `[min, max)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceBand {
    #[default]
    All,
    Budget,
    Mid,
    Premium,
    Luxury,
}

impl ValueObject for PriceBand {}

impl PriceBand {
    /// Every band, in display order.
    pub const ALL: [PriceBand; 5] = [
        PriceBand::All,
        PriceBand::Budget,
        PriceBand::Mid,
        PriceBand::Premium,
        PriceBand::Luxury,
    ];

    pub fn id(self) -> &'static str {
        match self {
            PriceBand::All => "all",
            PriceBand::Budget => "budget",
            PriceBand::Mid => "mid",
            PriceBand::Premium => "premium",
            PriceBand::Luxury => "luxury",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PriceBand::All => "Todos os preços",
            PriceBand::Budget => "Até R$ 100",
            PriceBand::Mid => "R$ 100 – R$ 200",
            PriceBand::Premium => "R$ 200 – R$ 350",
            PriceBand::Luxury => "Acima de R$ 350",
        }
    }

    /// Inclusive lower bound and exclusive upper bound (`None` = unbounded).
    pub fn bounds(self) -> (f64, Option<f64>) {
        match self {
            PriceBand::All => (0.0, None),
            PriceBand::Budget => (0.0, Some(100.0)),
            PriceBand::Mid => (100.0, Some(200.0)),
            PriceBand::Premium => (200.0, Some(350.0)),
            PriceBand::Luxury => (350.0, None),
        }
    }

    pub fn contains(self, price: f64) -> bool {
        let (min, max) = self.bounds();
        price >= min && max.is_none_or(|max| price < max)
    }
}

impl core::fmt::Display for PriceBand {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for PriceBand {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PriceBand::ALL
            .into_iter()
            .find(|band| band.id() == s.trim())
            .ok_or_else(|| DomainError::unknown("price band", s))
    }
}

/// Format raw keyboard input as a price, reading the digits as centavos:
/// `"18990"` → `"R$ 189,90"`, `"123456789"` → `"R$ 1.234.567,89"`.
///
/// Non-digits are ignored; input with no digits formats as an empty string.
pub fn format_price_input(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return String::new();
    }
    let trimmed = digits.trim_start_matches('0');
    let padded = format!("{trimmed:0>3}");
    let (reais, centavos) = padded.split_at(padded.len() - 2);

    let mut grouped = String::with_capacity(reais.len() + reais.len() / 3);
    for (i, c) in reais.chars().enumerate() {
        if i > 0 && (reais.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    format!("{CURRENCY_PREFIX} {grouped},{centavos}")
}

/// Recover the raw centavo digits from a formatted price, for editing:
/// `"R$ 1.234,56"` → `"123456"`.
pub fn price_input_digits(price: &str) -> String {
    let mut digits: String = price
        .chars()
        .filter(|c| !matches!(c, 'R' | '$' | '.') && !c.is_whitespace())
        .collect();
    if let Some(pos) = digits.find(',') {
        digits.remove(pos);
    }
    digits
}
