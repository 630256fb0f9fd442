// src/pages/mod.rs

//! Headless page controllers.
//!
//! Each controller drives one store the way a dashboard page does: fetch on
//! mount, edit a local copy, save, notify. Navigation is returned to the
//! caller rather than performed.

pub mod debounce;
pub mod form;
pub mod forms;
pub mod guard;
pub mod list;
pub mod notify;
pub mod singleton;

pub use debounce::Debouncer;
pub use form::{FieldErrors, FormModel, FormPage, FormState, SaveOutcome};
pub use forms::{ArticleForm, FaqForm, FooterForm, JobForm, ServiceForm};
pub use guard::{GuardDecision, RouteGuard};
pub use list::{ListPage, ListView};
pub use notify::{LogNotifier, Notifier, RecordingNotifier, Toast};
pub use singleton::{HomepageEditor, SingletonPage};
