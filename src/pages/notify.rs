// src/pages/notify.rs

//! Toast notifications emitted by page controllers.

use std::fmt;
use std::sync::Mutex;

/// A transient user notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Toast {
    Success(String),
    Failure(String),
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Toast::Success(message.into())
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Toast::Failure(message.into())
    }

    pub fn message(&self) -> &str {
        match self {
            Toast::Success(m) | Toast::Failure(m) => m,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Toast::Success(_))
    }
}

impl fmt::Display for Toast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Sink for toasts; the UI shell decides how to show them.
pub trait Notifier: Send + Sync {
    fn notify(&self, toast: Toast);
}

/// Writes toasts to the log (success at info, failure at error).
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, toast: Toast) {
        match toast {
            Toast::Success(m) => log::info!("{}", m),
            Toast::Failure(m) => log::error!("{}", m),
        }
    }
}

/// Keeps every toast in order.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    toasts: Mutex<Vec<Toast>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts
            .lock()
            .map(|t| t.clone())
            .unwrap_or_default()
    }

    pub fn last(&self) -> Option<Toast> {
        self.toasts().pop()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, toast: Toast) {
        if let Ok(mut toasts) = self.toasts.lock() {
            toasts.push(toast);
        }
    }
}
