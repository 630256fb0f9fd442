//! Help-center FAQ entry.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::{Entity, non_empty, null_as_default};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Faq {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub question: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub answer: String,

    /// Server fields the dashboard does not edit
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Entity for Faq {
    const NOUN: &'static str = "FAQ";

    fn id(&self) -> Option<&str> {
        non_empty(&self.id)
    }
}
