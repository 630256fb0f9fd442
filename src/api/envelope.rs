// src/api/envelope.rs

//! Response envelope normalization.
//!
//! The backend wraps payloads inconsistently:
//!
//! ```text
//! [ ... ]                                           bare collection
//! { "data": [ ... ] }                               wrapped collection
//! { "items": [...], "currentPage": 1,
//!   "totalPages": 3, "totalJobs": 25 }              paginated
//! { "data": { "items": [...], ... } }               wrapped paginated
//! { "data": [...], "pagination": { ... } }          paginated, split meta
//! { "data": { ... }, "message": "..." }             single entity
//! ```
//!
//! Everything is reduced here so stores never branch on shape.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{AppError, Result};

/// Pagination metadata held by a resource store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub current_page: u32,
    pub total_pages: u32,
    pub total: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
            total: 0,
        }
    }
}

impl Pagination {
    /// Read pagination fields from an object, defaulting to 1/1/0.
    ///
    /// The total count is `total` or the first `total<Entity>` key that is
    /// not `totalPages`.
    fn from_object(obj: &Map<String, Value>) -> Self {
        let defaults = Self::default();
        let current_page = read_u32(obj.get("currentPage")).unwrap_or(defaults.current_page);
        let total_pages = read_u32(obj.get("totalPages")).unwrap_or(defaults.total_pages);
        let total = read_u64(obj.get("total"))
            .or_else(|| {
                obj.iter()
                    .filter(|(k, _)| k.starts_with("total") && k.as_str() != "totalPages")
                    .find_map(|(_, v)| read_u64(Some(v)))
            })
            .unwrap_or(defaults.total);

        Self {
            current_page,
            total_pages,
            total,
        }
    }

    /// Whether `page` lies inside `[1, total_pages]`.
    pub fn contains(&self, page: u32) -> bool {
        page >= 1 && page <= self.total_pages.max(1)
    }
}

/// Numbers sometimes arrive as strings.
fn read_u64(value: Option<&Value>) -> Option<u64> {
    match value? {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Page numbers that do not fit a `u32` are treated as absent.
fn read_u32(value: Option<&Value>) -> Option<u32> {
    read_u64(value).and_then(|v| u32::try_from(v).ok())
}

/// Normalized list response.
#[derive(Debug, Clone, PartialEq)]
pub enum ListPayload<T> {
    /// Bare sequence; pagination is left untouched by the store.
    Collection { items: Vec<T> },
    /// Paginated wrapper.
    Page {
        items: Vec<T>,
        pagination: Pagination,
    },
}

impl<T> ListPayload<T> {
    pub fn items(&self) -> &[T] {
        match self {
            ListPayload::Collection { items } | ListPayload::Page { items, .. } => items,
        }
    }

    pub fn pagination(&self) -> Option<Pagination> {
        match self {
            ListPayload::Collection { .. } => None,
            ListPayload::Page { pagination, .. } => Some(*pagination),
        }
    }
}

/// Return `body.data` when present and non-null, else the body itself.
pub fn unwrap_data(body: Value) -> Value {
    match body {
        Value::Object(mut obj) => match obj.remove("data") {
            Some(data) if !data.is_null() => data,
            Some(_) | None => Value::Object(obj),
        },
        other => other,
    }
}

/// Unwrap a singleton document; sequences yield their first element.
pub fn unwrap_singleton(body: Value) -> Value {
    match unwrap_data(body) {
        Value::Array(items) => items.into_iter().next().unwrap_or(Value::Null),
        other => other,
    }
}

/// Optional `message` string of a mutating response.
pub fn message(body: &Value) -> Option<String> {
    body.get("message")
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string)
}

/// Extract an error message from a raw (possibly non-JSON) error body.
pub fn error_message(raw: &str) -> Option<String> {
    let body: Value = serde_json::from_str(raw).ok()?;
    ["message", "error"]
        .iter()
        .find_map(|key| body.get(*key).and_then(Value::as_str))
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string)
}

/// Decode a single entity from a response body.
pub fn decode_entity<T: DeserializeOwned>(body: Value) -> Result<T> {
    Ok(serde_json::from_value(unwrap_data(body))?)
}

/// Reduce any list response to a `ListPayload`.
pub fn normalize_list<T: DeserializeOwned>(body: Value) -> Result<ListPayload<T>> {
    match body {
        Value::Array(items) => Ok(ListPayload::Collection {
            items: decode_items(items)?,
        }),
        Value::Object(mut obj) => {
            if let Some(Value::Array(items)) = obj.remove("items") {
                let pagination = Pagination::from_object(&obj);
                return Ok(ListPayload::Page {
                    items: decode_items(items)?,
                    pagination,
                });
            }

            match obj.remove("data") {
                Some(Value::Array(items)) => match obj.get("pagination") {
                    Some(Value::Object(meta)) => Ok(ListPayload::Page {
                        items: decode_items(items)?,
                        pagination: Pagination::from_object(meta),
                    }),
                    _ => Ok(ListPayload::Collection {
                        items: decode_items(items)?,
                    }),
                },
                Some(inner @ Value::Object(_)) => normalize_list(inner),
                Some(other) => Err(AppError::envelope(format!(
                    "expected a list under `data`, got {}",
                    kind(&other)
                ))),
                None => Err(AppError::envelope(
                    "object without `items` or `data`".to_string(),
                )),
            }
        }
        other => Err(AppError::envelope(format!(
            "expected a list, got {}",
            kind(&other)
        ))),
    }
}

fn decode_items<T: DeserializeOwned>(items: Vec<Value>) -> Result<Vec<T>> {
    items
        .into_iter()
        .map(|item| serde_json::from_value(item).map_err(AppError::from))
        .collect()
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
