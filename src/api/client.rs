// src/api/client.rs

//! HTTP client adapter for the dashboard API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use url::Url;

use crate::api::{ApiRequest, Backend, Session, envelope};
use crate::config::ApiConfig;
use crate::error::{AppError, Result};
use crate::utils::url::join;

/// Create a configured asynchronous HTTP client.
pub fn create_client(config: &ApiConfig) -> Result<Client> {
    let mut builder = Client::builder().user_agent(&config.user_agent);
    if let Some(secs) = config.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    builder
        .build()
        .map_err(|e| AppError::config(format!("failed to build HTTP client: {e}")))
}

/// REST client bound to a base URL and a session.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    session: Session,
}

impl ApiClient {
    /// Create a client from configuration.
    pub fn new(config: &ApiConfig, session: Session) -> Result<Self> {
        Url::parse(&config.base_url)?;
        Ok(Self {
            client: create_client(config)?,
            base_url: config.base_url.clone(),
            session,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Absolute URL for a resource path.
    pub fn url(&self, path: &str) -> Result<Url> {
        Ok(Url::parse(&join(&self.base_url, path))?)
    }
}

#[async_trait]
impl Backend for ApiClient {
    async fn send(&self, request: ApiRequest) -> Result<Value> {
        let url = self.url(&request.path)?;
        log::debug!("{} {}", request.method.as_str(), url);

        let mut builder = self.client.request(request.method.into(), url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(token) = self.session.token() {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            log::warn!(
                "{} {} failed without response: {}",
                request.method.as_str(),
                request.path,
                e
            );
            AppError::Network(e.to_string())
        })?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let message = envelope::error_message(&text)
                .unwrap_or_else(|| format!("Request failed with status {}", status.as_u16()));
            log::warn!(
                "{} {} returned {}: {}",
                request.method.as_str(),
                request.path,
                status.as_u16(),
                message
            );
            return Err(AppError::Http {
                status: status.as_u16(),
                message,
            });
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }
}
