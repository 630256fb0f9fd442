// src/pages/debounce.rs

//! Trailing-edge debouncer for search input.

use std::future::Future;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::timeout;

/// Runs `action` with the latest pushed value once no newer value has arrived
/// for the quiet period.
///
/// Each action runs on its own task, so a newer action never cancels an older
/// one still in flight. Dropping the debouncer discards a pending value.
pub struct Debouncer<T> {
    tx: mpsc::UnboundedSender<T>,
    handle: JoinHandle<()>,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Start the debounce task. Must be called within a tokio runtime.
    pub fn spawn<F, Fut>(quiet: Duration, action: F) -> Self
    where
        F: Fn(T) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let (tx, mut rx) = mpsc::unbounded_channel::<T>();

        let handle = tokio::spawn(async move {
            let mut pending: Option<T> = None;
            loop {
                match pending.take() {
                    None => match rx.recv().await {
                        Some(value) => pending = Some(value),
                        None => break,
                    },
                    Some(value) => match timeout(quiet, rx.recv()).await {
                        Ok(Some(newer)) => pending = Some(newer),
                        Ok(None) => break,
                        Err(_) => {
                            tokio::spawn(action(value));
                        }
                    },
                }
            }
        });

        Self { tx, handle }
    }

    /// Replace the pending value and restart the quiet period.
    pub fn push(&self, value: T) {
        if self.tx.send(value).is_err() {
            log::warn!("debounce task has stopped; input dropped");
        }
    }

    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }
}
