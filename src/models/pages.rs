//! Singleton page documents: about, careers, privacy policy, terms.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::{Document, null_as_default};

/// A titled block with optional badge and image.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageSection {
    #[serde(default, deserialize_with = "null_as_default")]
    pub badge: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The about page singleton.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutPage {
    #[serde(default, deserialize_with = "null_as_default")]
    pub hero_section: PageSection,
    #[serde(default, deserialize_with = "null_as_default")]
    pub story_section: PageSection,
    #[serde(default, deserialize_with = "null_as_default")]
    pub vision_section: PageSection,
    #[serde(default, deserialize_with = "null_as_default")]
    pub mission_section: PageSection,

    /// Server fields the dashboard does not edit
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AboutPage {
    /// Mutable access to a section by its wire key.
    pub fn section_mut(&mut self, key: &str) -> Option<&mut PageSection> {
        match key {
            "heroSection" => Some(&mut self.hero_section),
            "storySection" => Some(&mut self.story_section),
            "visionSection" => Some(&mut self.vision_section),
            "missionSection" => Some(&mut self.mission_section),
            _ => None,
        }
    }
}

impl Document for AboutPage {
    const TITLE: &'static str = "About page";
}

/// Search-engine directives for the careers page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RobotsDirectives {
    #[serde(deserialize_with = "null_as_default")]
    pub noindex: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub nofollow: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub noarchive: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub nosnippet: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub noimageindex: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub notranslate: bool,
}

/// The careers landing page singleton, including SEO metadata.
///
/// Missing keys take the values of `CareerPage::default()`; `null` values
/// decode as empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CareerPage {
    #[serde(deserialize_with = "null_as_default")]
    pub heading: String,
    #[serde(deserialize_with = "null_as_default")]
    pub sub_heading: String,
    #[serde(deserialize_with = "null_as_default")]
    pub image: String,
    #[serde(deserialize_with = "null_as_default")]
    pub heading1: String,
    #[serde(deserialize_with = "null_as_default")]
    pub sub_heading1: String,

    #[serde(deserialize_with = "null_as_default")]
    pub meta_title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub meta_description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub meta_keywords: String,
    #[serde(deserialize_with = "null_as_default")]
    pub meta_image: String,

    #[serde(deserialize_with = "null_as_default")]
    pub og_title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub og_description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub og_image: String,
    #[serde(deserialize_with = "null_as_default")]
    pub og_type: String,

    #[serde(deserialize_with = "null_as_default")]
    pub robots: RobotsDirectives,

    /// Server fields the dashboard does not edit
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for CareerPage {
    fn default() -> Self {
        Self {
            heading: String::new(),
            sub_heading: String::new(),
            image: String::new(),
            heading1: String::new(),
            sub_heading1: String::new(),
            meta_title: String::new(),
            meta_description: String::new(),
            meta_keywords: String::new(),
            meta_image: String::new(),
            og_title: String::new(),
            og_description: String::new(),
            og_image: String::new(),
            og_type: "website".to_string(),
            robots: RobotsDirectives::default(),
            extra: Map::new(),
        }
    }
}

impl Document for CareerPage {
    const TITLE: &'static str = "Career page";
}

/// Title + rich-text body shared by the policy documents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolicyPage {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Privacy policy document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrivacyPolicy(pub PolicyPage);

impl Document for PrivacyPolicy {
    const TITLE: &'static str = "Privacy policy";
}

/// Terms and conditions document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TermsOfService(pub PolicyPage);

impl Document for TermsOfService {
    const TITLE: &'static str = "Terms";
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_about_missing_nested_field_is_empty() {
        let about: AboutPage = serde_json::from_value(json!({
            "heroSection": { "description": "We build things" },
            "storySection": { "badge": "Story", "title": "Since 2010" }
        }))
        .unwrap();

        assert_eq!(about.hero_section.title, "");
        assert_eq!(about.hero_section.description, "We build things");
        assert_eq!(about.story_section.image, "");
        assert_eq!(about.mission_section, PageSection::default());
    }

    #[test]
    fn test_about_section_lookup() {
        let mut about = AboutPage::default();
        about.section_mut("visionSection").unwrap().title = "Vision".to_string();
        assert_eq!(about.vision_section.title, "Vision");
        assert!(about.section_mut("footer").is_none());
    }

    #[test]
    fn test_career_page_keeps_defaults() {
        let page: CareerPage = serde_json::from_value(json!({
            "heading": "Join us",
            "robots": { "noindex": true }
        }))
        .unwrap();
        assert_eq!(page.og_type, "website");
        assert_eq!(page.meta_keywords, "");
        assert!(page.robots.noindex);
        assert!(!page.robots.nofollow);
    }

    #[test]
    fn test_policy_is_transparent() {
        let policy: PrivacyPolicy =
            serde_json::from_value(json!({ "title": "Privacy" })).unwrap();
        assert_eq!(policy.0.title, "Privacy");
        assert_eq!(
            serde_json::to_value(&policy).unwrap(),
            json!({ "title": "Privacy", "description": "" })
        );
    }

    #[test]
    fn test_null_values_decode_as_empty() {
        let about: AboutPage = serde_json::from_value(json!({
            "heroSection": { "title": null, "badge": "About" },
            "storySection": null
        }))
        .unwrap();
        assert_eq!(about.hero_section.title, "");
        assert_eq!(about.hero_section.badge, "About");
        assert_eq!(about.story_section, PageSection::default());

        let page: CareerPage = serde_json::from_value(json!({
            "heading": null,
            "robots": { "noindex": null, "nofollow": true }
        }))
        .unwrap();
        assert_eq!(page.heading, "");
        assert!(!page.robots.noindex);
        assert!(page.robots.nofollow);
    }

    #[test]
    fn test_unknown_keys_written_back() {
        let body = json!({
            "_id": "665f",
            "heroSection": { "title": "About", "ctaLink": "/contact" },
            "updatedAt": "2026-02-01T00:00:00.000Z",
            "__v": 3
        });
        let about: AboutPage = serde_json::from_value(body.clone()).unwrap();
        assert_eq!(about.extra["__v"], 3);

        let written = serde_json::to_value(&about).unwrap();
        assert_eq!(written["_id"], "665f");
        assert_eq!(written["updatedAt"], body["updatedAt"]);
        assert_eq!(written["heroSection"]["ctaLink"], "/contact");
        assert_eq!(written["heroSection"]["title"], "About");
    }
}
