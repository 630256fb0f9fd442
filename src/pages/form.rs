// src/pages/form.rs

//! Create/edit form controller bound to one resource store.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::error::Result;
use crate::models::Entity;
use crate::pages::notify::{Notifier, Toast};
use crate::store::ResourceStore;

/// Per-field validation messages, keyed by wire field name.
pub type FieldErrors = BTreeMap<&'static str, String>;

const REQUIRED_FIELDS_MISSING: &str = "Please fill required fields before saving.";

/// Editable local state of one entity type.
///
/// Every field is present (empty string or empty sequence by default) so a
/// form built from a partial entity never has a hole.
pub trait FormModel: Default + Clone + Send + Sync {
    type Entity: Entity;

    /// Required fields as `(field, label)`.
    const REQUIRED: &'static [(&'static str, &'static str)];

    /// Route of the list page to return to after a save.
    const LIST_ROUTE: Option<&'static str> = None;

    fn from_entity(entity: &Self::Entity) -> Self;

    /// Text value of a field, for presence checks.
    fn field(&self, name: &str) -> Option<&str>;

    /// Trim and normalize into a submission payload.
    fn into_payload(self) -> Self::Entity;

    /// Error for one field, if it is required and blank.
    fn check_field(&self, name: &str) -> Option<String> {
        let (_, label) = Self::REQUIRED.iter().find(|(field, _)| *field == name)?;
        let blank = self.field(name).is_none_or(|v| v.trim().is_empty());
        blank.then(|| format!("{label} is required"))
    }

    fn validate(&self) -> FieldErrors {
        Self::REQUIRED
            .iter()
            .filter_map(|(field, _)| self.check_field(field).map(|e| (*field, e)))
            .collect()
    }
}

/// Lifecycle of a form page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Idle,
    Loading,
    Ready,
    Saving,
    Error,
}

/// Result of `FormPage::save`.
#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome<E> {
    /// Persisted; `redirect` is the list route to navigate to, if any
    Saved { entity: E, redirect: Option<String> },
    /// Blocked client-side; nothing was sent
    Invalid(FieldErrors),
    /// The backend rejected the request; the form is left populated
    Failed(String),
}

/// Binds a store's entity to editable local state.
pub struct FormPage<F: FormModel> {
    store: Arc<ResourceStore<F::Entity>>,
    notifier: Arc<dyn Notifier>,
    id: Option<String>,
    form: F,
    errors: FieldErrors,
    state: FormState,
}

impl<F: FormModel> FormPage<F> {
    pub fn new(store: Arc<ResourceStore<F::Entity>>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            store,
            notifier,
            id: None,
            form: F::default(),
            errors: FieldErrors::new(),
            state: FormState::Idle,
        }
    }

    /// Load the entity being edited, or start a blank form.
    pub async fn mount(&mut self, id: Option<&str>) -> Result<()> {
        self.errors.clear();
        self.id = id.map(str::to_string);

        let Some(id) = id else {
            self.store.clear_selected().await;
            self.form = F::default();
            self.state = FormState::Ready;
            return Ok(());
        };

        self.state = FormState::Loading;
        match self.store.get_by_id(id).await {
            Ok(entity) => {
                self.form = F::from_entity(&entity);
                self.state = FormState::Ready;
                Ok(())
            }
            Err(e) => {
                self.state = FormState::Error;
                Err(e)
            }
        }
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut F {
        &mut self.form
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.is_some()
    }

    /// Re-check one field after an edit.
    pub fn validate_field(&mut self, name: &str) -> Option<&str> {
        let field = F::REQUIRED.iter().find(|(f, _)| *f == name)?.0;
        match self.form.check_field(field) {
            Some(message) => {
                self.errors.insert(field, message);
            }
            None => {
                self.errors.remove(field);
            }
        }
        self.errors.get(field).map(String::as_str)
    }

    /// Validate, then create or update depending on the mounted identity.
    pub async fn save(&mut self) -> SaveOutcome<F::Entity> {
        self.errors = self.form.validate();
        if !self.errors.is_empty() {
            self.notifier.notify(Toast::failure(REQUIRED_FIELDS_MISSING));
            return SaveOutcome::Invalid(self.errors.clone());
        }

        self.state = FormState::Saving;
        let payload = self.form.clone().into_payload();
        let noun = <F::Entity as Entity>::NOUN;

        let (result, verb) = match self.id.as_deref() {
            Some(id) => (self.store.update(id, &payload).await, "updated"),
            None => (self.store.create(&payload).await, "created"),
        };

        match result {
            Ok(entity) => {
                self.state = FormState::Ready;
                self.notifier
                    .notify(Toast::success(format!("{noun} {verb} successfully")));
                SaveOutcome::Saved {
                    entity,
                    redirect: F::LIST_ROUTE.map(str::to_string),
                }
            }
            Err(e) => {
                self.state = FormState::Ready;
                let message = e.user_message();
                self.notifier.notify(Toast::failure(message.clone()));
                SaveOutcome::Failed(message)
            }
        }
    }

    /// Leave the page; the store forgets the selected entity.
    pub async fn unmount(self) {
        self.store.clear_selected().await;
    }
}
