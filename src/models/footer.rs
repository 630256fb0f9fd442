//! Footer link / article entry.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::{Entity, non_empty, null_as_default};

/// An entry in one of the footer columns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FooterItem {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,

    /// Footer column the entry belongs to
    #[serde(default, deserialize_with = "null_as_default")]
    pub section: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub link: String,

    /// Optional article body rendered at `link`
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,

    /// Server fields the dashboard does not edit
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Entity for FooterItem {
    const NOUN: &'static str = "Footer item";

    fn id(&self) -> Option<&str> {
        non_empty(&self.id)
    }
}
