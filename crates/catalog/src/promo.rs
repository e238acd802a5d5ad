//! Hero banners and stories: the click-throughs that emit deep-link triggers.

use serde::{Deserialize, Serialize};

use crate::de;

/// Hero carousel slide.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
    #[serde(default)]
    pub id: String,
    #[serde(default, deserialize_with = "de::nullable")]
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub button_text: Option<String>,
    #[serde(default, deserialize_with = "de::non_blank")]
    pub link: Option<String>,
    #[serde(default, deserialize_with = "de::non_blank")]
    pub category_filter: Option<String>,
    #[serde(default, deserialize_with = "de::nullable")]
    pub order: i64,
    #[serde(default = "de::default_true", deserialize_with = "de::nullable_true")]
    pub active: bool,
}

/// Story bubble with its slides.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    #[serde(default)]
    pub id: String,
    #[serde(default, deserialize_with = "de::nullable")]
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default, deserialize_with = "de::nullable")]
    pub images: Vec<String>,
    /// Single-image stories written before `images` existed.
    #[serde(default, skip_serializing)]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "de::non_blank")]
    pub link: Option<String>,
    #[serde(default, deserialize_with = "de::non_blank")]
    pub category_filter: Option<String>,
    #[serde(default, deserialize_with = "de::nullable")]
    pub order: i64,
    #[serde(default = "de::default_true", deserialize_with = "de::nullable_true")]
    pub active: bool,
}

/// A link is a filter intent unless it navigates somewhere: URLs, paths and
/// in-page anchors are left to the browser.
fn link_trigger(link: Option<&str>) -> Option<&str> {
    link.map(str::trim)
        .filter(|l| !l.is_empty() && !l.contains("://") && !l.starts_with(['/', '#']))
}

impl Banner {
    /// Filter intent emitted by the CTA, if any.
    pub fn trigger(&self) -> Option<&str> {
        self.category_filter
            .as_deref()
            .or_else(|| link_trigger(self.link.as_deref()))
    }
}

impl Story {
    /// Filter intent emitted by the "see products" tap, if any.
    pub fn trigger(&self) -> Option<&str> {
        self.category_filter
            .as_deref()
            .or_else(|| link_trigger(self.link.as_deref()))
    }

    /// Slides to show, falling back to the legacy single image.
    pub fn slides(&self) -> Vec<&str> {
        if self.images.is_empty() {
            self.image_url.as_deref().into_iter().collect()
        } else {
            self.images.iter().map(String::as_str).collect()
        }
    }
}

/// Active banners in carousel order.
pub fn active_banners(banners: &[Banner]) -> Vec<&Banner> {
    let mut active: Vec<&Banner> = banners.iter().filter(|b| b.active).collect();
    active.sort_by_key(|b| b.order);
    active
}

/// Active stories in display order.
pub fn active_stories(stories: &[Story]) -> Vec<&Story> {
    let mut active: Vec<&Story> = stories.iter().filter(|s| s.active).collect();
    active.sort_by_key(|s| s.order);
    active
}

#[cfg(test)]
mod tests {
    use super::*;

    fn banner(id: &str, order: i64, active: bool, link: Option<&str>) -> Banner {
        Banner {
            id: id.into(),
            order,
            active,
            link: link.map(Into::into),
            ..Banner::default()
        }
    }

    #[test]
    fn active_banners_sorted_by_order() {
        let banners = vec![
            banner("b1", 2, true, None),
            banner("b2", 1, true, None),
            banner("b3", 0, false, None),
        ];
        let ids: Vec<&str> = active_banners(&banners).iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, ["b2", "b1"]);
    }

    #[test]
    fn navigation_links_are_not_triggers() {
        assert_eq!(banner("b", 0, true, Some("#produtos")).trigger(), None);
        assert_eq!(banner("b", 0, true, Some("/colecoes")).trigger(), None);
        assert_eq!(banner("b", 0, true, Some("https://wa.me/55")).trigger(), None);
        assert_eq!(banner("b", 0, true, Some("maios")).trigger(), Some("maios"));
    }

    #[test]
    fn explicit_category_filter_wins_over_link() {
        let story: Story = serde_json::from_str(
            r#"{"id":"s1","title":"Plus Size","categoryFilter":"plussize","link":"maios","imageUrl":"/p.jpg"}"#,
        )
        .unwrap();
        assert_eq!(story.trigger(), Some("plussize"));
        assert_eq!(story.slides(), ["/p.jpg"]);
        assert!(story.active);
    }

    #[test]
    fn inactive_stories_are_hidden() {
        let stories = vec![
            Story {
                id: "s1".into(),
                active: false,
                ..Story::default()
            },
            Story {
                id: "s2".into(),
                active: true,
                ..Story::default()
            },
        ];
        let ids: Vec<&str> = active_stories(&stories).iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["s2"]);
    }
}
