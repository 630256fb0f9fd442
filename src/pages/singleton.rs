// src/pages/singleton.rs

//! Editors for singleton documents and homepage sections.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::{Map, Value};

use crate::error::Result;
use crate::models::{Document, HomepageSlug};
use crate::pages::form::FormState;
use crate::pages::notify::{Notifier, Toast};
use crate::store::{HomepageStore, SingletonStore};

/// Edits one singleton document (about page, policies, ...).
pub struct SingletonPage<D: Document> {
    store: Arc<SingletonStore<D>>,
    notifier: Arc<dyn Notifier>,
    document: D,
    state: FormState,
}

impl<D: Document> SingletonPage<D> {
    pub fn new(store: Arc<SingletonStore<D>>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            store,
            notifier,
            document: D::default(),
            state: FormState::Idle,
        }
    }

    /// Fetch and populate the local copy.
    pub async fn mount(&mut self) -> Result<()> {
        self.state = FormState::Loading;
        match self.store.fetch().await {
            Ok(doc) => {
                self.document = doc;
                self.state = FormState::Ready;
                Ok(())
            }
            Err(e) => {
                self.state = FormState::Error;
                Err(e)
            }
        }
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut D {
        &mut self.document
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    /// Write the local copy back. Returns whether it was saved.
    pub async fn save(&mut self) -> bool {
        self.state = FormState::Saving;
        let result = self.store.replace(&self.document).await;
        self.state = FormState::Ready;

        match result {
            Ok(_) => {
                self.notifier
                    .notify(Toast::success(format!("{} updated successfully", D::TITLE)));
                true
            }
            Err(e) => {
                self.notifier.notify(Toast::failure(e.user_message()));
                false
            }
        }
    }
}

/// Edits the homepage sections, each saved on its own.
pub struct HomepageEditor {
    store: Arc<HomepageStore>,
    notifier: Arc<dyn Notifier>,
    drafts: BTreeMap<HomepageSlug, Value>,
}

impl HomepageEditor {
    pub fn new(store: Arc<HomepageStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            store,
            notifier,
            drafts: BTreeMap::new(),
        }
    }

    /// Fetch every section; the ones that fail stay empty.
    pub async fn mount(&mut self) -> usize {
        let fetched = self.store.fetch_all().await;
        self.drafts = self.store.snapshot().await.sections;
        fetched
    }

    pub fn section(&self, slug: HomepageSlug) -> Option<&Value> {
        self.drafts.get(&slug)
    }

    /// Local draft of a section, created empty if it was never fetched.
    pub fn section_mut(&mut self, slug: HomepageSlug) -> &mut Value {
        let draft = self
            .drafts
            .entry(slug)
            .or_insert_with(|| Value::Object(Map::new()));
        if draft.is_null() {
            *draft = Value::Object(Map::new());
        }
        draft
    }

    /// Save one section and reload it from the server.
    pub async fn save_section(&mut self, slug: HomepageSlug) -> Result<String> {
        let body = self.drafts.get(&slug).cloned().unwrap_or(Value::Null);
        match self.store.update_section(slug, body).await {
            Ok(message) => {
                if let Some(fresh) = self.store.section(slug).await {
                    self.drafts.insert(slug, fresh);
                }
                self.notifier.notify(Toast::success(message.clone()));
                Ok(message)
            }
            Err(e) => {
                self.notifier
                    .notify(Toast::failure(HomepageStore::failure_message(&e)));
                Err(e)
            }
        }
    }
}
