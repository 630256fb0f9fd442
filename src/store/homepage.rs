// src/store/homepage.rs

//! Store for the slug-keyed homepage sections.

use std::collections::BTreeMap;
use std::sync::Arc;

use futures::future::join_all;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::api::envelope;
use crate::api::{ApiRequest, Backend};
use crate::error::{AppError, Result};
use crate::models::HomepageSlug;

const UPDATE_OK: &str = "Updated successfully";
const UPDATE_FAILED: &str = "Update failed";

/// Snapshot of the homepage editor state.
#[derive(Debug, Clone, Default)]
pub struct HomepageState {
    pub sections: BTreeMap<HomepageSlug, Value>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Holds each homepage section as an independently fetched JSON document.
pub struct HomepageStore {
    backend: Arc<dyn Backend>,
    state: RwLock<HomepageState>,
}

impl HomepageStore {
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self {
            backend,
            state: RwLock::new(HomepageState::default()),
        }
    }

    pub async fn snapshot(&self) -> HomepageState {
        self.state.read().await.clone()
    }

    pub async fn section(&self, slug: HomepageSlug) -> Option<Value> {
        self.state.read().await.sections.get(&slug).cloned()
    }

    pub async fn is_loading(&self) -> bool {
        self.state.read().await.loading
    }

    /// Fetch one section.
    ///
    /// Failures are logged and leave the held section untouched.
    pub async fn fetch_section(&self, slug: HomepageSlug) -> Option<Value> {
        self.load_section(slug).await.ok()
    }

    /// Sections are held whole; list-shaped sections keep every element.
    async fn load_section(&self, slug: HomepageSlug) -> Result<Value> {
        match self.backend.send(ApiRequest::get(slug.path())).await {
            Ok(body) => {
                let section = envelope::unwrap_data(body);
                self.state
                    .write()
                    .await
                    .sections
                    .insert(slug, section.clone());
                Ok(section)
            }
            Err(e) => {
                log::warn!("homepage: failed to fetch {}: {}", slug, e);
                Err(e)
            }
        }
    }

    /// Fetch every section concurrently. Returns how many succeeded.
    ///
    /// When none succeed, the first failure is recorded as the store error.
    pub async fn fetch_all(&self) -> usize {
        {
            let mut state = self.state.write().await;
            state.loading = true;
            state.error = None;
        }

        let results = join_all(HomepageSlug::ALL.iter().map(|slug| self.load_section(*slug))).await;
        let fetched = results.iter().filter(|r| r.is_ok()).count();

        let mut state = self.state.write().await;
        state.loading = false;
        if fetched < HomepageSlug::ALL.len() {
            log::info!(
                "homepage: fetched {}/{} sections",
                fetched,
                HomepageSlug::ALL.len()
            );
        }
        if fetched == 0 {
            state.error = results
                .iter()
                .find_map(|r| r.as_ref().err())
                .map(AppError::user_message);
        }
        fetched
    }

    /// Save a section, then re-fetch it.
    ///
    /// Returns the server's message, or a generic one when it sent none.
    pub async fn update_section(&self, slug: HomepageSlug, body: Value) -> Result<String> {
        {
            let mut state = self.state.write().await;
            state.loading = true;
            state.error = None;
        }

        let result = self.backend.send(ApiRequest::put(slug.path(), body)).await;
        self.state.write().await.loading = false;

        match result {
            Ok(response) => {
                self.fetch_section(slug).await;
                Ok(envelope::message(&response).unwrap_or_else(|| UPDATE_OK.to_string()))
            }
            Err(e) => {
                log::warn!("homepage: failed to update {}: {}", slug, e);
                self.state.write().await.error = Some(Self::failure_message(&e));
                Err(e)
            }
        }
    }

    /// Notification text for a failed section update.
    ///
    /// The server's message when it sent one, else a generic one.
    pub fn failure_message(err: &AppError) -> String {
        match err {
            AppError::Http { message, .. } if !message.trim().is_empty() => message.clone(),
            _ => UPDATE_FAILED.to_string(),
        }
    }
}
