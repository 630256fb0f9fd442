// src/models/mod.rs

//! Domain models for the dashboard.
//!
//! Collection entities carry a server-assigned `_id`; singleton documents
//! (about page, policies, ...) have no identity and are replaced wholesale.
//! Text fields default to `""` and list fields to `[]` when the server omits
//! them or sends `null`, so a decoded value never has a missing field. Keys
//! the models do not name are kept in `extra` and written back unchanged.

mod article;
mod contact;
mod faq;
mod footer;
mod homepage;
mod job;
mod pages;
mod service;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

// Re-export all public types
pub use article::{Article, ArticleStatus};
pub use contact::{ContactHero, ContactLog, ContactPage, ContactPoint, FormSection};
pub use faq::Faq;
pub use footer::FooterItem;
pub use homepage::HomepageSlug;
pub use job::{Job, JobApplication, JobRef, JobType};
pub use pages::{
    AboutPage, CareerPage, PageSection, PolicyPage, PrivacyPolicy, RobotsDirectives,
    TermsOfService,
};
pub use service::Service;

/// An identifiable record held in a resource store.
pub trait Entity: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Human-readable name used in notifications ("Job created successfully").
    const NOUN: &'static str;

    /// Server-assigned identity, absent before creation.
    fn id(&self) -> Option<&str>;

    /// Prefix relative image paths for display.
    fn resolve_images(&mut self, _image_base: &str) {}
}

/// A singleton content document (no identity).
pub trait Document:
    Serialize + DeserializeOwned + Clone + Default + Send + Sync + 'static
{
    /// Title used in notifications ("About page updated successfully").
    const TITLE: &'static str;
}

/// Treat empty identities as absent.
pub(crate) fn non_empty(id: &Option<String>) -> Option<&str> {
    id.as_deref().filter(|s| !s.is_empty())
}

/// Decode `null` as the type's default value.
///
/// Pair with `#[serde(default)]` so a missing key behaves the same way.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
