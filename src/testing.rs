//! In-memory backend for store and page tests.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::api::{ApiRequest, Backend, Method};
use crate::error::{AppError, Result};

/// Canned reply for a route.
#[derive(Debug, Clone)]
pub enum Reply {
    Json(Value),
    Fail { status: u16, message: String },
    Offline,
}

impl Reply {
    pub fn json(value: Value) -> Self {
        Reply::Json(value)
    }

    pub fn fail(status: u16, message: &str) -> Self {
        Reply::Fail {
            status,
            message: message.to_string(),
        }
    }

    fn into_result(self) -> Result<Value> {
        match self {
            Reply::Json(value) => Ok(value),
            Reply::Fail { status, message } => Err(AppError::Http { status, message }),
            Reply::Offline => Err(AppError::Network("connection refused".to_string())),
        }
    }
}

#[derive(Default)]
struct Route {
    replies: VecDeque<(Reply, Duration)>,
}

/// Records every request and answers from per-route reply queues.
///
/// The last queued reply of a route is reused once the queue is drained.
#[derive(Default)]
pub struct FakeBackend {
    routes: Mutex<HashMap<(Method, String), Route>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a reply for `method path`.
    pub fn on(&self, method: Method, path: &str, reply: Reply) {
        self.on_delayed(method, path, reply, Duration::ZERO);
    }

    /// Queue a reply that resolves after `delay`.
    pub fn on_delayed(&self, method: Method, path: &str, reply: Reply, delay: Duration) {
        self.routes
            .lock()
            .unwrap()
            .entry((method, path.to_string()))
            .or_default()
            .replies
            .push_back((reply, delay));
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn requests_to(&self, method: Method, path: &str) -> Vec<ApiRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.method == method && r.path == path)
            .collect()
    }

    fn next_reply(&self, method: Method, path: &str) -> Option<(Reply, Duration)> {
        let mut routes = self.routes.lock().unwrap();
        let route = routes.get_mut(&(method, path.to_string()))?;
        if route.replies.len() > 1 {
            route.replies.pop_front()
        } else {
            route.replies.front().cloned()
        }
    }
}

#[async_trait]
impl Backend for FakeBackend {
    async fn send(&self, request: ApiRequest) -> Result<Value> {
        self.requests.lock().unwrap().push(request.clone());

        let (reply, delay) = self
            .next_reply(request.method, &request.path)
            .unwrap_or_else(|| (Reply::fail(404, "Route not found"), Duration::ZERO));

        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        reply.into_result()
    }
}
