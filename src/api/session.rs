// src/api/session.rs

//! Session token shared between the HTTP client and the route guard.

use std::sync::{Arc, RwLock};

use serde::Serialize;
use serde_json::Value;

use crate::api::{ApiRequest, Backend, envelope};
use crate::error::{AppError, Result};

/// Holder of the bearer token; clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct Session {
    token: Arc<RwLock<Option<String>>>,
}

#[derive(Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session already holding a token.
    pub fn with_token(token: impl Into<String>) -> Self {
        let session = Self::new();
        session.set_token(token);
        session
    }

    /// Current token, if any.
    pub fn token(&self) -> Option<String> {
        self.token.read().ok().and_then(|t| t.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    pub fn set_token(&self, token: impl Into<String>) {
        let token = token.into();
        if let Ok(mut slot) = self.token.write() {
            *slot = Some(token).filter(|t| !t.trim().is_empty());
        }
    }

    pub fn clear(&self) {
        if let Ok(mut slot) = self.token.write() {
            *slot = None;
        }
    }

    /// Exchange credentials for a token and keep it.
    pub async fn login(
        &self,
        backend: &dyn Backend,
        login_path: &str,
        email: &str,
        password: &str,
    ) -> Result<String> {
        let body = serde_json::to_value(Credentials { email, password })?;
        let response = backend.send(ApiRequest::post(login_path, body)).await?;

        let token = extract_token(&response)
            .ok_or_else(|| AppError::envelope("login response carries no token"))?;
        self.set_token(token.clone());
        log::info!("Signed in as {}", email);
        Ok(token)
    }

    /// Drop the token; the route guard will redirect to login.
    pub fn logout(&self) {
        self.clear();
        log::info!("Signed out");
    }
}

/// The token may sit at the top level or under `data`.
fn extract_token(response: &Value) -> Option<String> {
    let data = envelope::unwrap_data(response.clone());
    ["token", "accessToken"].iter().find_map(|key| {
        response
            .get(*key)
            .or_else(|| data.get(*key))
            .and_then(Value::as_str)
            .map(str::to_string)
    })
}
