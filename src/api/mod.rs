//! Backend access layer.
//!
//! - `Backend`: the seam every store talks through
//! - `ApiClient`: reqwest implementation against the REST API
//! - `envelope`: normalization of `{ data }` / `{ items, ... }` / bare payloads
//! - `Session`: bearer token shared by the client and the route guard

pub mod client;
pub mod envelope;
pub mod session;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;

pub use client::ApiClient;
pub use envelope::{ListPayload, Pagination};
pub use session::Session;

/// HTTP verbs used by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// A request relative to the configured base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self::new(Method::Post, path).with_body(body)
    }

    pub fn put(path: impl Into<String>, body: Value) -> Self {
        Self::new(Method::Put, path).with_body(body)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    pub fn with_query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Value of a query parameter, if present.
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Transport used by the stores.
///
/// Implementations return the full JSON response body on 2xx and a classified
/// `AppError` otherwise. They must not retry.
#[async_trait]
pub trait Backend: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<Value>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_builders() {
        let req = ApiRequest::get("/article").with_query(vec![
            ("page".to_string(), "2".to_string()),
            ("search".to_string(), "rust".to_string()),
        ]);
        assert_eq!(req.method, Method::Get);
        assert_eq!(req.query_value("page"), Some("2"));
        assert_eq!(req.query_value("limit"), None);
        assert!(req.body.is_none());

        let req = ApiRequest::put("/career/jobs/1", json!({ "title": "Engineer" }));
        assert_eq!(req.method.as_str(), "PUT");
        assert_eq!(req.body, Some(json!({ "title": "Engineer" })));
    }
}
