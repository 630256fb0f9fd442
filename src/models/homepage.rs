//! Homepage section identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Independently fetched and saved homepage sections, keyed by route slug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HomepageSlug {
    Hero,
    TrustedBy,
    Process,
    WebFeature,
    ServicesHeader,
    StatsFeature,
    Pillars,
    Testimonials,
}

impl HomepageSlug {
    pub const ALL: [HomepageSlug; 8] = [
        HomepageSlug::Hero,
        HomepageSlug::TrustedBy,
        HomepageSlug::Process,
        HomepageSlug::WebFeature,
        HomepageSlug::ServicesHeader,
        HomepageSlug::StatsFeature,
        HomepageSlug::Pillars,
        HomepageSlug::Testimonials,
    ];

    /// Route slug (`/homepage/{slug}`).
    pub fn as_str(&self) -> &'static str {
        match self {
            HomepageSlug::Hero => "hero",
            HomepageSlug::TrustedBy => "trusted-by",
            HomepageSlug::Process => "process",
            HomepageSlug::WebFeature => "web-feature",
            HomepageSlug::ServicesHeader => "services-header",
            HomepageSlug::StatsFeature => "stats-feature",
            HomepageSlug::Pillars => "pillars",
            HomepageSlug::Testimonials => "testimonials",
        }
    }

    /// Key the section is known by in the editor state.
    pub fn section_key(&self) -> &'static str {
        match self {
            HomepageSlug::Hero => "heroSection",
            HomepageSlug::TrustedBy => "trustedByData",
            HomepageSlug::Process => "processData",
            HomepageSlug::WebFeature => "webFeature",
            HomepageSlug::ServicesHeader => "services",
            HomepageSlug::StatsFeature => "statsFeature",
            HomepageSlug::Pillars => "threePillarsSection",
            HomepageSlug::Testimonials => "testimonials",
        }
    }

    pub fn path(&self) -> String {
        format!("/homepage/{}", self.as_str())
    }
}

impl fmt::Display for HomepageSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HomepageSlug {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HomepageSlug::ALL
            .into_iter()
            .find(|slug| slug.as_str() == s || slug.section_key() == s)
            .ok_or_else(|| AppError::validation(format!("Unknown homepage section: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_round_trip_through_str() {
        for slug in HomepageSlug::ALL {
            assert_eq!(slug.as_str().parse::<HomepageSlug>().unwrap(), slug);
        }
        assert_eq!(
            "threePillarsSection".parse::<HomepageSlug>().unwrap(),
            HomepageSlug::Pillars
        );
        assert!("footer".parse::<HomepageSlug>().is_err());
    }

    #[test]
    fn test_slug_path() {
        assert_eq!(HomepageSlug::StatsFeature.path(), "/homepage/stats-feature");
    }
}
