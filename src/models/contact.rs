//! Contact inquiries and the contact page document.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::{Document, Entity, non_empty, null_as_default};

/// An inquiry submitted through the public contact form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactLog {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub first_name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub last_name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub phone: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub subject: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub inquiry_type: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub company: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// Server fields the dashboard does not edit
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ContactLog {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }
}

impl Entity for ContactLog {
    const NOUN: &'static str = "Log";

    fn id(&self) -> Option<&str> {
        non_empty(&self.id)
    }
}

/// Hero block of the contact page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactHero {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub button_text: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Block introducing the contact form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormSection {
    #[serde(default, deserialize_with = "null_as_default")]
    pub badge: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Selectable inquiry type offered by the form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactPoint {
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The contact page singleton.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPage {
    #[serde(default, deserialize_with = "null_as_default")]
    pub hero_section: ContactHero,

    #[serde(default, deserialize_with = "null_as_default")]
    pub form_section: FormSection,

    #[serde(default, deserialize_with = "null_as_default")]
    pub points: Vec<ContactPoint>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub bottom_section: Vec<Value>,

    /// Server fields the dashboard does not edit
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ContactPage {
    pub fn add_point(&mut self) {
        self.points.push(ContactPoint::default());
    }

    /// Remove the point at `index`; out of range is ignored.
    pub fn remove_point(&mut self, index: usize) {
        if index < self.points.len() {
            self.points.remove(index);
        }
    }
}

impl Document for ContactPage {
    const TITLE: &'static str = "Contact Page";
}
