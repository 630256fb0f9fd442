//! Service offering data structure.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::{Entity, non_empty, null_as_default};
use crate::utils::url::resolve_image;

/// A service listed on the public site.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,

    /// Short summary shown on cards
    #[serde(default, deserialize_with = "null_as_default")]
    pub excerpt: String,

    /// Heading above the bullet points
    #[serde(default, deserialize_with = "null_as_default")]
    pub point_heading: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub description_bottom: String,

    /// Icon path, relative to the image host unless absolute
    #[serde(default, deserialize_with = "null_as_default")]
    pub icon: String,

    /// Bullet points; shape is owned by the site
    #[serde(default, deserialize_with = "null_as_default")]
    pub points: Vec<Value>,

    /// Server fields the dashboard does not edit
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Entity for Service {
    const NOUN: &'static str = "Service";

    fn id(&self) -> Option<&str> {
        non_empty(&self.id)
    }

    fn resolve_images(&mut self, image_base: &str) {
        self.icon = resolve_image(image_base, &self.icon);
    }
}
