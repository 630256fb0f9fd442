// src/store/singleton.rs

//! Store for singleton content documents (about page, policies, ...).

use std::sync::Arc;

use serde_json::Value;
use tokio::sync::RwLock;

use crate::api::envelope;
use crate::api::{ApiRequest, Backend};
use crate::error::{AppError, Result};
use crate::models::Document;

/// Snapshot of a singleton store's held state.
#[derive(Debug, Clone, Default)]
pub struct SingletonState<D> {
    pub document: Option<D>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Holds one singleton document fetched from and written back to `path`.
pub struct SingletonStore<D: Document> {
    path: String,
    backend: Arc<dyn Backend>,
    state: RwLock<SingletonState<D>>,
}

impl<D: Document> SingletonStore<D> {
    pub fn new(path: impl Into<String>, backend: Arc<dyn Backend>) -> Self {
        Self {
            path: path.into(),
            backend,
            state: RwLock::new(SingletonState {
                document: None,
                loading: false,
                error: None,
            }),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub async fn snapshot(&self) -> SingletonState<D> {
        self.state.read().await.clone()
    }

    pub async fn document(&self) -> Option<D> {
        self.state.read().await.document.clone()
    }

    pub async fn error(&self) -> Option<String> {
        self.state.read().await.error.clone()
    }

    /// Fetch the document. An empty response yields the default document.
    pub async fn fetch(&self) -> Result<D> {
        self.begin().await;

        let result = match self.backend.send(ApiRequest::get(self.path.as_str())).await {
            Ok(body) => match envelope::unwrap_singleton(body) {
                Value::Null => Ok(D::default()),
                doc => serde_json::from_value::<D>(doc).map_err(AppError::from),
            },
            Err(e) => Err(e),
        };

        match result {
            Ok(doc) => {
                let mut state = self.state.write().await;
                state.loading = false;
                state.document = Some(doc.clone());
                Ok(doc)
            }
            Err(e) => self.fail("fetch", e).await,
        }
    }

    /// Replace the document wholesale. Returns the server's `message`, if any.
    pub async fn replace(&self, document: &D) -> Result<Option<String>> {
        self.begin().await;

        let result = match serde_json::to_value(document) {
            Ok(body) => self
                .backend
                .send(ApiRequest::put(self.path.as_str(), body))
                .await,
            Err(e) => Err(e.into()),
        };

        match result {
            Ok(response) => {
                let message = envelope::message(&response);
                let held = returned_document::<D>(response).unwrap_or_else(|| document.clone());
                let mut state = self.state.write().await;
                state.loading = false;
                state.document = Some(held);
                log::info!("{}: replaced", D::TITLE);
                Ok(message)
            }
            Err(e) => self.fail("replace", e).await,
        }
    }

    async fn begin(&self) {
        let mut state = self.state.write().await;
        state.loading = true;
        state.error = None;
    }

    async fn fail<T>(&self, operation: &str, err: AppError) -> Result<T> {
        log::warn!("{}: {} failed: {}", D::TITLE, operation, err);
        let mut state = self.state.write().await;
        state.loading = false;
        state.error = Some(err.user_message());
        Err(err)
    }
}

/// The saved document, when the response carries one under `data`.
fn returned_document<D: Document>(response: Value) -> Option<D> {
    match response {
        Value::Object(mut obj) => match obj.remove("data") {
            Some(data @ Value::Object(_)) => serde_json::from_value(data).ok(),
            Some(Value::Array(items)) => items
                .into_iter()
                .next()
                .and_then(|doc| serde_json::from_value(doc).ok()),
            _ => None,
        },
        _ => None,
    }
}
