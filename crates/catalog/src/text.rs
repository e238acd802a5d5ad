//! Text folding and collation helpers shared by slugs, sorting and deep links.

use core::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;

/// Combining diacritical marks block.
fn is_combining_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&c)
}

/// Canonical decomposition with the accent marks dropped.
fn unaccented(input: &str) -> impl Iterator<Item = char> + '_ {
    input.nfd().filter(|c| !is_combining_mark(*c))
}

/// Remove accents: `"Açaí"` → `"Acai"`, `"Việt"` → `"Viet"`.
///
/// Letters without a canonical decomposition (`ø`, `æ`, `ß`, `ł`) are kept.
pub fn fold_diacritics(input: &str) -> String {
    unaccented(input).collect()
}

/// Case-insensitive equality, ignoring surrounding whitespace.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum CharClass {
    Space,
    Punctuation,
    Symbol,
    Digit,
    Letter,
    Other,
}

fn char_class(c: char) -> CharClass {
    if c.is_whitespace() {
        CharClass::Space
    } else if c.is_ascii_punctuation() && !matches!(c, '$' | '+' | '<' | '=' | '>' | '^' | '`' | '|' | '~') {
        CharClass::Punctuation
    } else if c.is_ascii_punctuation() {
        CharClass::Symbol
    } else if c.is_numeric() {
        CharClass::Digit
    } else if c.is_alphabetic() {
        CharClass::Letter
    } else {
        CharClass::Other
    }
}

fn primary_keys(s: &str) -> impl Iterator<Item = (CharClass, char)> + '_ {
    unaccented(s)
        .flat_map(char::to_lowercase)
        .map(|c| (char_class(c), c))
}

/// Locale-aware string ordering for display names.
///
/// Three levels, in the order a Portuguese reader expects:
/// 1. base letters, ignoring accents and case (`"maiô" ~ "Maio"`), with
///    spaces and punctuation before digits before letters;
/// 2. unaccented before accented (`"maio" < "maiô"`);
/// 3. lowercase before uppercase (`"maio" < "Maio"`).
///
/// Strings equal on all three levels fall back to code-point order so the
/// result is a total order.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    primary_keys(a)
        .cmp(primary_keys(b))
        .then_with(|| {
            a.nfd()
                .flat_map(char::to_lowercase)
                .cmp(b.nfd().flat_map(char::to_lowercase))
        })
        .then_with(|| {
            a.chars()
                .map(char::is_uppercase)
                .cmp(b.chars().map(char::is_uppercase))
        })
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_strips_portuguese_accents() {
        assert_eq!(fold_diacritics("Biquínis Maiôs Saídas Açaí"), "Biquinis Maios Saidas Acai");
    }

    #[test]
    fn fold_strips_decomposed_marks() {
        assert_eq!(fold_diacritics("Mai\u{006F}\u{0302}s"), "Maios");
    }

    #[test]
    fn fold_strips_accents_outside_latin1() {
        assert_eq!(fold_diacritics("Tiếng Việt"), "Tieng Viet");
        assert_eq!(fold_diacritics("Phở Łódź Ṣọ"), "Pho Łodz So");
    }

    #[test]
    fn locale_cmp_folds_vietnamese_letters() {
        assert_eq!(locale_cmp("Việt", "Vieu"), Ordering::Less);
        assert_eq!(locale_cmp("viet", "Việt"), Ordering::Less);
        assert_eq!(locale_cmp("Phở", "Phoa"), Ordering::Less);
    }

    #[test]
    fn fold_keeps_letters_without_decomposition() {
        assert_eq!(fold_diacritics("Ørsted straße"), "Ørsted straße");
    }

    #[test]
    fn locale_cmp_ignores_case_at_primary_level() {
        assert_eq!(locale_cmp("abacaxi", "Banana"), Ordering::Less);
        assert_eq!(locale_cmp("Zebra", "água"), Ordering::Greater);
    }

    #[test]
    fn locale_cmp_orders_accented_after_plain() {
        assert_eq!(locale_cmp("maio", "maiô"), Ordering::Less);
        assert_eq!(locale_cmp("maiô", "maios"), Ordering::Less);
    }

    #[test]
    fn locale_cmp_orders_lowercase_first() {
        assert_eq!(locale_cmp("maio", "Maio"), Ordering::Less);
        assert_eq!(locale_cmp("Maio", "Maio"), Ordering::Equal);
    }

    #[test]
    fn locale_cmp_puts_empty_first() {
        assert_eq!(locale_cmp("", "A"), Ordering::Less);
    }

    #[test]
    fn eq_ignore_case_handles_unicode() {
        assert!(eq_ignore_case(" MAIÔS ", "maiôs"));
        assert!(!eq_ignore_case("maios", "maiôs"));
    }
}
