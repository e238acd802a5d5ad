//! URL-safe identifiers for categories and collections.

use lazy_regex::regex;
use serde::{Deserialize, Serialize};

use crate::text::fold_diacritics;

/// Normalize a display name into a slug: `"  Açaí & Mar  "` → `"acai-mar"`.
pub fn create_slug(text: &str) -> String {
    let folded = fold_diacritics(&text.to_lowercase());
    let hyphenated = regex!(r"\s+").replace_all(&folded, "-");
    let word_only = regex!(r"[^a-z0-9_\-]+").replace_all(&hyphenated, "");
    let collapsed = regex!(r"-{2,}").replace_all(&word_only, "-");
    collapsed.trim_matches('-').to_string()
}

/// Name + slug pair as edited in the admin forms.
///
/// The slug follows the name until someone edits the slug by hand. Records
/// loaded for editing start out touched so saving never rewrites a published
/// slug behind the editor's back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlugField {
    name: String,
    slug: String,
    touched: bool,
}

impl SlugField {
    /// Blank field for a new record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Field for an existing record.
    pub fn existing(name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slug: slug.into(),
            touched: true,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn is_touched(&self) -> bool {
        self.touched
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        if !self.touched {
            self.slug = create_slug(&self.name);
        }
    }

    pub fn set_slug(&mut self, slug: impl Into<String>) {
        self.slug = slug.into();
        self.touched = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_display_names() {
        assert_eq!(create_slug("Moda Masculina"), "moda-masculina");
        assert_eq!(create_slug("  Açaí & Mar  "), "acai-mar");
        assert_eq!(create_slug("Saídas de Praia"), "saidas-de-praia");
        assert_eq!(create_slug("Verão 2024"), "verao-2024");
    }

    #[test]
    fn collapses_and_trims_hyphens() {
        assert_eq!(create_slug("--Plus -- Size--"), "plus-size");
        assert_eq!(create_slug("a\t\n b"), "a-b");
    }

    #[test]
    fn drops_symbols_and_undecomposable_letters() {
        assert_eq!(create_slug("100% Algodão!"), "100-algodao");
        assert_eq!(create_slug("Ørsted"), "rsted");
        assert_eq!(create_slug("🌴"), "");
    }

    #[test]
    fn keeps_base_letters_of_stacked_accents() {
        assert_eq!(create_slug("Tiếng Việt"), "tieng-viet");
        assert_eq!(create_slug("Phở"), "pho");
        assert_eq!(create_slug("Coleção Ḥawaí"), "colecao-hawai");
    }

    #[test]
    fn keeps_underscores() {
        assert_eq!(create_slug("snake_case name"), "snake_case-name");
    }

    #[test]
    fn slug_follows_name_until_touched() {
        let mut field = SlugField::new();
        field.set_name("Maiôs");
        assert_eq!(field.slug(), "maios");
        field.set_name("Maiôs Premium");
        assert_eq!(field.slug(), "maios-premium");

        field.set_slug("premium");
        field.set_name("Maiôs Luxo");
        assert_eq!(field.slug(), "premium");
        assert!(field.is_touched());
    }

    #[test]
    fn existing_records_start_touched() {
        let mut field = SlugField::existing("Biquínis", "bikinis");
        field.set_name("Biquínis Verão");
        assert_eq!(field.slug(), "bikinis");
    }
}
