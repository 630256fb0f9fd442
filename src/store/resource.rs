// src/store/resource.rs

//! Generic resource store: one per collection entity type.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::api::envelope::{self, ListPayload, Pagination};
use crate::api::{ApiRequest, Backend};
use crate::error::{AppError, Result};
use crate::models::Entity;
use crate::store::Endpoints;

/// Parameters of a list request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub search: Option<String>,
}

impl ListParams {
    pub fn page(page: u32) -> Self {
        Self {
            page: Some(page),
            ..Self::default()
        }
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Query pairs; a blank search term is omitted.
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(page) = self.page {
            query.push(("page".to_string(), page.to_string()));
        }
        if let Some(limit) = self.limit {
            query.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(search) = self.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            query.push(("search".to_string(), search.to_string()));
        }
        query
    }
}

/// Snapshot of a store's held state.
#[derive(Debug, Clone)]
pub struct StoreState<E> {
    /// Current page (or full collection) of entities
    pub items: Vec<E>,
    /// Result of the un-paginated listing, where the resource has one
    pub all_items: Vec<E>,
    /// Entity being viewed or edited
    pub selected: Option<E>,
    pub loading: bool,
    pub error: Option<String>,
    pub pagination: Pagination,
}

impl<E> Default for StoreState<E> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            all_items: Vec::new(),
            selected: None,
            loading: false,
            error: None,
            pagination: Pagination::default(),
        }
    }
}

/// Holds one entity type's fetched state and exposes its CRUD operations.
///
/// Operations are not serialized against each other: when two race, the last
/// response to resolve is the one left in the held state.
pub struct ResourceStore<E: Entity> {
    name: String,
    endpoints: Endpoints,
    backend: Arc<dyn Backend>,
    image_base: String,
    state: RwLock<StoreState<E>>,
}

impl<E: Entity> ResourceStore<E> {
    pub fn new(name: impl Into<String>, endpoints: Endpoints, backend: Arc<dyn Backend>) -> Self {
        Self {
            name: name.into(),
            endpoints,
            backend,
            image_base: String::new(),
            state: RwLock::new(StoreState::default()),
        }
    }

    /// Image host used to resolve entity images on `get_by_id`.
    pub fn with_image_base(mut self, image_base: impl Into<String>) -> Self {
        self.image_base = image_base.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    // --- State accessors ---

    pub async fn snapshot(&self) -> StoreState<E> {
        self.state.read().await.clone()
    }

    pub async fn items(&self) -> Vec<E> {
        self.state.read().await.items.clone()
    }

    pub async fn selected(&self) -> Option<E> {
        self.state.read().await.selected.clone()
    }

    pub async fn pagination(&self) -> Pagination {
        self.state.read().await.pagination
    }

    pub async fn is_loading(&self) -> bool {
        self.state.read().await.loading
    }

    pub async fn error(&self) -> Option<String> {
        self.state.read().await.error.clone()
    }

    pub async fn clear_selected(&self) {
        self.state.write().await.selected = None;
    }

    pub async fn clear_error(&self) {
        self.state.write().await.error = None;
    }

    // --- Operations ---

    /// Fetch a page (or the whole collection).
    ///
    /// A paginated envelope replaces items and pagination; a bare collection
    /// replaces items and leaves pagination as it was.
    pub async fn list(&self, params: &ListParams) -> Result<Pagination> {
        let path = self.route(&self.endpoints.list, "list")?;
        self.begin().await;

        let request = ApiRequest::get(path).with_query(params.to_query());
        let result = match self.backend.send(request).await {
            Ok(body) => envelope::normalize_list::<E>(body),
            Err(e) => Err(e),
        };

        match result {
            Ok(payload) => {
                let mut state = self.state.write().await;
                state.loading = false;
                match payload {
                    ListPayload::Collection { items } => state.items = items,
                    ListPayload::Page { items, pagination } => {
                        state.items = items;
                        state.pagination = pagination;
                    }
                }
                log::debug!(
                    "{}: listed {} item(s), page {}/{}",
                    self.name,
                    state.items.len(),
                    state.pagination.current_page,
                    state.pagination.total_pages
                );
                Ok(state.pagination)
            }
            Err(e) => self.fail("list", e).await,
        }
    }

    /// Fetch the un-paginated listing into `all_items`.
    pub async fn list_all(&self, search: Option<&str>) -> Result<Vec<E>> {
        let path = self.route(&self.endpoints.list_all, "list_all")?;
        self.begin().await;

        let params = ListParams {
            search: search.map(str::to_string),
            ..ListParams::default()
        };
        let request = ApiRequest::get(path).with_query(params.to_query());
        let result = match self.backend.send(request).await {
            Ok(body) => envelope::normalize_list::<E>(body),
            Err(e) => Err(e),
        };

        match result {
            Ok(payload) => {
                let items = payload.items().to_vec();
                let mut state = self.state.write().await;
                state.loading = false;
                state.all_items = items.clone();
                Ok(items)
            }
            Err(e) => self.fail("list_all", e).await,
        }
    }

    /// Fetch one entity into `selected`.
    pub async fn get_by_id(&self, id: &str) -> Result<E> {
        let path = Endpoints::fill(self.route(&self.endpoints.detail, "get")?, id);
        self.begin().await;

        let result = match self.backend.send(ApiRequest::get(path)).await {
            Ok(body) => envelope::decode_entity::<E>(body),
            Err(e) => Err(e),
        };

        match result {
            Ok(mut entity) => {
                entity.resolve_images(&self.image_base);
                let mut state = self.state.write().await;
                state.loading = false;
                state.selected = Some(entity.clone());
                Ok(entity)
            }
            Err(e) => self.fail("get", e).await,
        }
    }

    /// Create an entity and append the server's copy to the collection.
    pub async fn create(&self, payload: &E) -> Result<E> {
        let path = self.route(&self.endpoints.create, "create")?;
        self.begin().await;

        let result = match serde_json::to_value(payload) {
            Ok(body) => match self.backend.send(ApiRequest::post(path, body)).await {
                Ok(response) => envelope::decode_entity::<E>(response),
                Err(e) => Err(e),
            },
            Err(e) => Err(e.into()),
        };

        match result {
            Ok(created) => {
                let mut state = self.state.write().await;
                state.loading = false;
                state.items.push(created.clone());
                log::info!(
                    "{}: created {}",
                    self.name,
                    created.id().unwrap_or("<no id>")
                );
                Ok(created)
            }
            Err(e) => self.fail("create", e).await,
        }
    }

    /// Update an entity and replace the held copy with matching identity.
    ///
    /// A response without identity leaves the collection untouched.
    pub async fn update(&self, id: &str, payload: &E) -> Result<E> {
        let path = Endpoints::fill(self.route(&self.endpoints.update, "update")?, id);
        self.begin().await;

        let result = match serde_json::to_value(payload) {
            Ok(body) => match self.backend.send(ApiRequest::put(path, body)).await {
                Ok(response) => envelope::decode_entity::<E>(response),
                Err(e) => Err(e),
            },
            Err(e) => Err(e.into()),
        };

        match result {
            Ok(updated) => {
                let mut state = self.state.write().await;
                state.loading = false;

                let Some(updated_id) = updated.id() else {
                    log::debug!("{}: update response for {} carries no identity", self.name, id);
                    return Ok(updated);
                };

                if let Some(slot) = state.items.iter_mut().find(|e| e.id() == Some(updated_id)) {
                    *slot = updated.clone();
                }
                if state
                    .selected
                    .as_ref()
                    .is_some_and(|s| s.id() == Some(updated_id))
                {
                    state.selected = Some(updated.clone());
                }
                log::info!("{}: updated {}", self.name, updated_id);
                Ok(updated)
            }
            Err(e) => self.fail("update", e).await,
        }
    }

    /// Delete an entity and drop it from held state without re-fetching.
    ///
    /// Returns the server's `message`, if any.
    pub async fn delete(&self, id: &str) -> Result<Option<String>> {
        let path = Endpoints::fill(self.route(&self.endpoints.delete, "delete")?, id);
        self.begin().await;

        match self.backend.send(ApiRequest::delete(path)).await {
            Ok(body) => {
                let mut state = self.state.write().await;
                state.loading = false;
                state.items.retain(|e| e.id() != Some(id));
                state.all_items.retain(|e| e.id() != Some(id));
                if state.selected.as_ref().is_some_and(|s| s.id() == Some(id)) {
                    state.selected = None;
                }
                log::info!("{}: deleted {}", self.name, id);
                Ok(envelope::message(&body))
            }
            Err(e) => self.fail("delete", e).await,
        }
    }

    // --- Helpers ---

    fn route<'a>(&self, route: &'a Option<String>, operation: &'static str) -> Result<&'a str> {
        route
            .as_deref()
            .ok_or_else(|| AppError::unsupported(self.name.clone(), operation))
    }

    async fn begin(&self) {
        let mut state = self.state.write().await;
        state.loading = true;
        state.error = None;
    }

    async fn fail<T>(&self, operation: &str, err: AppError) -> Result<T> {
        log::warn!("{}: {} failed: {}", self.name, operation, err);
        let mut state = self.state.write().await;
        state.loading = false;
        state.error = Some(err.user_message());
        Err(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Method;
    use crate::models::{Article, Job, JobType, Service};
    use crate::testing::{FakeBackend, Reply};
    use serde_json::json;
    use std::time::Duration;

    fn job_store(backend: &Arc<FakeBackend>) -> ResourceStore<Job> {
        ResourceStore::new("jobs", Endpoints::jobs(), backend.clone())
    }

    fn job(id: &str, title: &str) -> Job {
        Job {
            id: Some(id.to_string()),
            title: title.to_string(),
            ..Job::default()
        }
    }

    #[tokio::test]
    async fn test_list_bare_collection_passes_through() {
        let backend = Arc::new(FakeBackend::new());
        let body = json!([
            { "_id": "j1", "title": "Engineer", "location": "Remote", "type": "Full-time", "description": "", "requirements": "" },
            { "_id": "j2", "title": "Designer", "location": "Berlin", "type": "Contract", "description": "", "requirements": "" }
        ]);
        backend.on(Method::Get, "/career/jobs", Reply::json(body.clone()));

        let store = job_store(&backend);
        store.list(&ListParams::default()).await.unwrap();

        let held = serde_json::to_value(store.items().await).unwrap();
        assert_eq!(held, body);
        assert_eq!(store.pagination().await, Pagination::default());
        assert!(!store.is_loading().await);
    }

    #[tokio::test]
    async fn test_list_keeps_unmodelled_server_fields() {
        let backend = Arc::new(FakeBackend::new());
        let body = json!([
            {
                "_id": "j1", "title": "Engineer", "location": "Remote", "type": "Full-time",
                "description": "", "requirements": "",
                "createdAt": "2026-01-02T09:00:00.000Z", "updatedAt": "2026-01-03T09:00:00.000Z", "__v": 0
            },
            {
                "_id": "j2", "title": "Designer", "location": "Berlin", "type": "Contract",
                "description": "", "requirements": "", "salary": { "min": 50000, "max": 70000 }
            }
        ]);
        backend.on(Method::Get, "/career/jobs", Reply::json(body.clone()));

        let store = job_store(&backend);
        store.list(&ListParams::default()).await.unwrap();

        let held = serde_json::to_value(store.items().await).unwrap();
        assert_eq!(held, body);
    }

    #[tokio::test]
    async fn test_list_tolerates_null_fields() {
        let backend = Arc::new(FakeBackend::new());
        backend.on(
            Method::Get,
            "/article",
            Reply::json(json!([
                { "_id": "a1", "title": "First", "author": "Ada", "tags": ["rust"] },
                { "_id": "a2", "title": "Second", "author": null, "tags": null, "image": null }
            ])),
        );

        let store: ResourceStore<Article> =
            ResourceStore::new("articles", Endpoints::articles(), backend.clone());
        store.list(&ListParams::default()).await.unwrap();

        let items = store.items().await;
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].author, "");
        assert!(items[1].tags.is_empty());
        assert!(store.error().await.is_none());
    }

    #[tokio::test]
    async fn test_update_writes_back_unmodelled_fields() {
        let backend = Arc::new(FakeBackend::new());
        let stored = json!({ "_id": "j1", "title": "Engineer", "__v": 2, "createdAt": "2026-01-02" });
        backend.on(Method::Get, "/career/jobs/j1", Reply::json(json!({ "data": stored })));
        backend.on(Method::Put, "/career/jobs/j1", Reply::json(json!({ "message": "ok" })));

        let store = job_store(&backend);
        let mut job = store.get_by_id("j1").await.unwrap();
        job.title = "Senior Engineer".to_string();
        store.update("j1", &job).await.unwrap();

        let sent = backend.requests_to(Method::Put, "/career/jobs/j1")[0]
            .body
            .clone()
            .unwrap();
        assert_eq!(sent["title"], "Senior Engineer");
        assert_eq!(sent["__v"], 2);
        assert_eq!(sent["createdAt"], "2026-01-02");
    }

    #[tokio::test]
    async fn test_list_collection_leaves_pagination_untouched() {
        let backend = Arc::new(FakeBackend::new());
        backend.on(
            Method::Get,
            "/career/jobs",
            Reply::json(json!({ "items": [{ "_id": "j1" }], "currentPage": 2, "totalPages": 3, "totalJobs": 21 })),
        );
        backend.on(Method::Get, "/career/jobs", Reply::json(json!({ "data": [] })));

        let store = job_store(&backend);
        store.list(&ListParams::page(2)).await.unwrap();
        store.list(&ListParams::default()).await.unwrap();

        assert!(store.items().await.is_empty());
        assert_eq!(
            store.pagination().await,
            Pagination {
                current_page: 2,
                total_pages: 3,
                total: 21
            }
        );
    }

    #[tokio::test]
    async fn test_list_items_wrapper_sets_pagination() {
        let backend = Arc::new(FakeBackend::new());
        backend.on(
            Method::Get,
            "/career/jobs",
            Reply::json(json!({ "items": [{ "_id": "j1" }] })),
        );

        let store = job_store(&backend);
        let pagination = store.list(&ListParams::page(1).with_limit(10)).await.unwrap();

        assert_eq!(pagination, Pagination::default());
        let request = &backend.requests()[0];
        assert_eq!(request.query_value("page"), Some("1"));
        assert_eq!(request.query_value("limit"), Some("10"));
        assert_eq!(request.query_value("search"), None);
    }

    #[tokio::test]
    async fn test_list_failure_records_message() {
        let backend = Arc::new(FakeBackend::new());
        backend.on(Method::Get, "/career/jobs", Reply::fail(500, "Database unavailable"));

        let store = job_store(&backend);
        assert!(store.list(&ListParams::default()).await.is_err());

        let state = store.snapshot().await;
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("Database unavailable"));
    }

    #[tokio::test]
    async fn test_next_operation_clears_error() {
        let backend = Arc::new(FakeBackend::new());
        backend.on(Method::Get, "/career/jobs", Reply::Offline);
        backend.on(Method::Get, "/career/jobs", Reply::json(json!([])));

        let store = job_store(&backend);
        let _ = store.list(&ListParams::default()).await;
        assert!(store.error().await.unwrap().starts_with("Network error"));

        store.list(&ListParams::default()).await.unwrap();
        assert!(store.error().await.is_none());
    }

    #[tokio::test]
    async fn test_create_appends_server_copy() {
        let backend = Arc::new(FakeBackend::new());
        backend.on(
            Method::Post,
            "/career/jobs",
            Reply::json(json!({
                "data": { "_id": "j-new", "title": "Engineer", "location": "Remote", "type": "Full-time" },
                "message": "Job created"
            })),
        );

        let store = job_store(&backend);
        let payload = Job {
            title: "Engineer".to_string(),
            location: "Remote".to_string(),
            job_type: JobType::FullTime,
            ..Job::default()
        };
        let created = store.create(&payload).await.unwrap();

        assert_eq!(created.id(), Some("j-new"));
        assert_eq!(store.items().await, vec![created]);
        let sent = backend.requests()[0].body.clone().unwrap();
        assert!(sent.get("_id").is_none());
        assert_eq!(sent["type"], "Full-time");
    }

    #[tokio::test]
    async fn test_update_replaces_only_matching_entity() {
        let backend = Arc::new(FakeBackend::new());
        backend.on(
            Method::Get,
            "/career/jobs",
            Reply::json(serde_json::to_value(vec![job("j1", "A"), job("j2", "B"), job("j3", "C")]).unwrap()),
        );
        backend.on(
            Method::Put,
            "/career/jobs/j2",
            Reply::json(json!({ "data": { "_id": "j2", "title": "B2" } })),
        );

        let store = job_store(&backend);
        store.list(&ListParams::default()).await.unwrap();
        store.update("j2", &job("j2", "B2")).await.unwrap();

        let items = store.items().await;
        assert_eq!(items[0], job("j1", "A"));
        assert_eq!(items[1].title, "B2");
        assert_eq!(items[2], job("j3", "C"));
        assert_eq!(items.iter().filter(|j| j.title == "B2").count(), 1);
    }

    #[tokio::test]
    async fn test_update_refreshes_selected() {
        let backend = Arc::new(FakeBackend::new());
        backend.on(
            Method::Get,
            "/career/jobs/j1",
            Reply::json(json!({ "data": { "_id": "j1", "title": "Old" } })),
        );
        backend.on(
            Method::Put,
            "/career/jobs/j1",
            Reply::json(json!({ "_id": "j1", "title": "New" })),
        );

        let store = job_store(&backend);
        store.get_by_id("j1").await.unwrap();
        store.update("j1", &job("j1", "New")).await.unwrap();

        assert_eq!(store.selected().await.unwrap().title, "New");
    }

    #[tokio::test]
    async fn test_update_without_identity_leaves_collection() {
        let backend = Arc::new(FakeBackend::new());
        backend.on(
            Method::Get,
            "/career/jobs",
            Reply::json(serde_json::to_value(vec![job("j1", "A")]).unwrap()),
        );
        backend.on(
            Method::Put,
            "/career/jobs/j1",
            Reply::json(json!({ "message": "Updated" })),
        );

        let store = job_store(&backend);
        store.list(&ListParams::default()).await.unwrap();
        store.update("j1", &job("j1", "A2")).await.unwrap();

        assert_eq!(store.items().await, vec![job("j1", "A")]);
    }

    #[tokio::test]
    async fn test_delete_removes_and_clears_selected() {
        let backend = Arc::new(FakeBackend::new());
        backend.on(
            Method::Get,
            "/career/jobs",
            Reply::json(serde_json::to_value(vec![job("j1", "A"), job("j2", "B")]).unwrap()),
        );
        backend.on(
            Method::Get,
            "/career/jobs/j1",
            Reply::json(json!({ "data": { "_id": "j1", "title": "A" } })),
        );
        backend.on(
            Method::Delete,
            "/career/jobs/j1",
            Reply::json(json!({ "message": "Job removed" })),
        );

        let store = job_store(&backend);
        store.list(&ListParams::default()).await.unwrap();
        store.get_by_id("j1").await.unwrap();
        let message = store.delete("j1").await.unwrap();

        assert_eq!(message.as_deref(), Some("Job removed"));
        assert_eq!(store.items().await, vec![job("j2", "B")]);
        assert!(store.selected().await.is_none());
        assert_eq!(backend.requests_to(Method::Get, "/career/jobs").len(), 1);
    }

    #[tokio::test]
    async fn test_delete_keeps_unrelated_selected() {
        let backend = Arc::new(FakeBackend::new());
        backend.on(
            Method::Get,
            "/career/jobs/j2",
            Reply::json(json!({ "_id": "j2", "title": "B" })),
        );
        backend.on(Method::Delete, "/career/jobs/j1", Reply::json(serde_json::Value::Null));

        let store = job_store(&backend);
        store.get_by_id("j2").await.unwrap();
        assert_eq!(store.delete("j1").await.unwrap(), None);
        assert_eq!(store.selected().await.unwrap().id(), Some("j2"));
    }

    #[tokio::test]
    async fn test_failed_delete_keeps_entity() {
        let backend = Arc::new(FakeBackend::new());
        backend.on(
            Method::Get,
            "/career/jobs",
            Reply::json(serde_json::to_value(vec![job("j1", "A")]).unwrap()),
        );
        backend.on(Method::Delete, "/career/jobs/j1", Reply::fail(403, "Forbidden"));

        let store = job_store(&backend);
        store.list(&ListParams::default()).await.unwrap();
        let err = store.delete("j1").await.unwrap_err();

        assert_eq!(err.status(), Some(403));
        assert_eq!(store.items().await.len(), 1);
        assert_eq!(store.error().await.as_deref(), Some("Forbidden"));
    }

    #[tokio::test]
    async fn test_get_by_id_resolves_images() {
        let backend = Arc::new(FakeBackend::new());
        backend.on(
            Method::Get,
            "/services/detail/s1",
            Reply::json(json!({ "data": { "_id": "s1", "title": "Cloud", "icon": "/uploads/cloud.svg" } })),
        );

        let store: ResourceStore<Service> =
            ResourceStore::new("services", Endpoints::services(), backend.clone())
                .with_image_base("https://img.example.com");
        let service = store.get_by_id("s1").await.unwrap();

        assert_eq!(service.icon, "https://img.example.com/uploads/cloud.svg");
        assert_eq!(store.selected().await, Some(service));
    }

    #[tokio::test]
    async fn test_list_all_for_services() {
        let backend = Arc::new(FakeBackend::new());
        backend.on(
            Method::Get,
            "/services/all",
            Reply::json(json!({ "data": [{ "_id": "s1" }, { "_id": "s2" }] })),
        );

        let store: ResourceStore<Service> =
            ResourceStore::new("services", Endpoints::services(), backend.clone());
        let all = store.list_all(Some("cloud")).await.unwrap();

        assert_eq!(all.len(), 2);
        assert_eq!(store.snapshot().await.all_items.len(), 2);
        assert_eq!(backend.requests()[0].query_value("search"), Some("cloud"));
    }

    #[tokio::test]
    async fn test_unsupported_operation_makes_no_request() {
        let backend = Arc::new(FakeBackend::new());
        let store: ResourceStore<Job> =
            ResourceStore::new("applications", Endpoints::read_only("/job-applications"), backend.clone());

        let err = store.delete("x").await.unwrap_err();
        assert!(matches!(err, AppError::Unsupported { operation: "delete", .. }));
        assert!(store.list_all(None).await.is_err());
        assert!(backend.requests().is_empty());
        assert!(store.error().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_delete_racing_list_last_response_wins() {
        let backend = Arc::new(FakeBackend::new());
        let article = |id: &str| json!({ "_id": id, "title": id });
        backend.on(
            Method::Get,
            "/article",
            Reply::json(json!([article("a0"), article("a1"), article("a2")])),
        );
        // refresh resolves after the delete
        backend.on_delayed(
            Method::Get,
            "/article",
            Reply::json(json!([article("a1"), article("a2")])),
            Duration::from_millis(200),
        );
        backend.on_delayed(
            Method::Delete,
            "/article/a1",
            Reply::json(json!({ "message": "deleted" })),
            Duration::from_millis(50),
        );

        let store: Arc<ResourceStore<Article>> = Arc::new(ResourceStore::new(
            "articles",
            Endpoints::articles(),
            backend.clone(),
        ));
        store.list(&ListParams::default()).await.unwrap();

        let refresh = {
            let store = Arc::clone(&store);
            tokio::spawn(async move { store.list(&ListParams::default()).await })
        };
        let delete = {
            let store = Arc::clone(&store);
            tokio::spawn(async move { store.delete("a1").await })
        };

        delete.await.unwrap().unwrap();
        refresh.await.unwrap().unwrap();

        // the stale refresh resolved last, so its payload is what remains
        let ids: Vec<_> = store
            .items()
            .await
            .iter()
            .filter_map(|a| a.id().map(str::to_string))
            .collect();
        assert_eq!(ids, vec!["a1", "a2"]);
        assert!(!store.is_loading().await);
    }

    #[test]
    fn test_list_params_query() {
        let params = ListParams::page(1).with_limit(20).with_search("  hiring ");
        assert_eq!(
            params.to_query(),
            vec![
                ("page".to_string(), "1".to_string()),
                ("limit".to_string(), "20".to_string()),
                ("search".to_string(), "hiring".to_string()),
            ]
        );
        assert!(ListParams::default().with_search("").to_query().is_empty());
    }
}
