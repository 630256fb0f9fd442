// src/pages/list.rs

//! Paginated, searchable list controller with a delete confirmation flow.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;

use crate::api::Pagination;
use crate::config::ListConfig;
use crate::error::Result;
use crate::models::Entity;
use crate::pages::debounce::Debouncer;
use crate::pages::notify::{Notifier, Toast};
use crate::store::{ListParams, ResourceStore};

/// What the list area should render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView {
    /// Nothing fetched yet, or an empty collection without a search term
    Empty,
    Loading,
    Populated,
    /// A search term matched nothing
    NoResults,
    Error(String),
}

#[derive(Debug, Clone, Default)]
struct Query {
    page: u32,
    search: String,
}

impl Query {
    fn params(&self, limit: u32) -> ListParams {
        ListParams {
            page: Some(self.page.max(1)),
            limit: Some(limit),
            search: Some(self.search.clone()),
        }
    }
}

/// Drives one resource store's list page.
pub struct ListPage<E: Entity> {
    store: Arc<ResourceStore<E>>,
    notifier: Arc<dyn Notifier>,
    limit: u32,
    query: Arc<Mutex<Query>>,
    search: Debouncer<String>,
    pending_delete: Option<String>,
}

impl<E: Entity> ListPage<E> {
    /// Must be called within a tokio runtime (the search debouncer is a task).
    pub fn new(
        store: Arc<ResourceStore<E>>,
        notifier: Arc<dyn Notifier>,
        config: &ListConfig,
    ) -> Self {
        let limit = config.page_limit;
        let query = Arc::new(Mutex::new(Query {
            page: 1,
            search: String::new(),
        }));

        let search = {
            let store = Arc::clone(&store);
            let query = Arc::clone(&query);
            Debouncer::spawn(
                Duration::from_millis(config.search_debounce_ms),
                move |term: String| {
                    let store = Arc::clone(&store);
                    let query = Arc::clone(&query);
                    async move {
                        let params = {
                            let mut query = query.lock().await;
                            query.search = term;
                            query.page = 1;
                            query.params(limit)
                        };
                        // failure is recorded in the store's error state
                        if let Err(e) = store.list(&params).await {
                            log::debug!("{}: search failed: {}", store.name(), e);
                        }
                    }
                },
            )
        };

        Self {
            store,
            notifier,
            limit,
            query,
            search,
            pending_delete: None,
        }
    }

    pub fn store(&self) -> &Arc<ResourceStore<E>> {
        &self.store
    }

    /// Fetch the first page.
    pub async fn mount(&mut self) -> Result<Pagination> {
        let params = {
            let mut query = self.query.lock().await;
            query.page = 1;
            query.params(self.limit)
        };
        self.store.list(&params).await
    }

    /// Re-issue the list with the current page and search term.
    pub async fn refresh(&self) -> Result<Pagination> {
        let params = self.query.lock().await.params(self.limit);
        self.store.list(&params).await
    }

    /// Queue a search; it is sent once typing pauses, starting from page 1.
    pub fn set_search(&self, term: impl Into<String>) {
        self.search.push(term.into());
    }

    pub async fn search_term(&self) -> String {
        self.query.lock().await.search.clone()
    }

    pub async fn current_page(&self) -> u32 {
        self.query.lock().await.page
    }

    /// Fetch page `page`. Out of range pages are ignored and return `false`.
    pub async fn go_to_page(&self, page: u32) -> Result<bool> {
        let pagination = self.store.pagination().await;
        if !pagination.contains(page) {
            log::debug!(
                "{}: page {} outside 1..={}",
                self.store.name(),
                page,
                pagination.total_pages
            );
            return Ok(false);
        }

        let params = {
            let mut query = self.query.lock().await;
            query.page = page;
            query.params(self.limit)
        };
        self.store.list(&params).await?;
        Ok(true)
    }

    pub async fn next_page(&self) -> Result<bool> {
        let page = self.current_page().await;
        self.go_to_page(page.saturating_add(1)).await
    }

    pub async fn prev_page(&self) -> Result<bool> {
        let page = self.current_page().await;
        self.go_to_page(page.saturating_sub(1)).await
    }

    pub async fn view(&self) -> ListView {
        let state = self.store.snapshot().await;
        if state.loading {
            return ListView::Loading;
        }
        if let Some(error) = state.error {
            return ListView::Error(error);
        }
        if !state.items.is_empty() {
            return ListView::Populated;
        }
        if self.query.lock().await.search.trim().is_empty() {
            ListView::Empty
        } else {
            ListView::NoResults
        }
    }

    // --- Delete confirmation ---

    /// Open the confirmation dialog for `id`.
    pub fn request_delete(&mut self, id: impl Into<String>) {
        self.pending_delete = Some(id.into());
    }

    pub fn pending_delete(&self) -> Option<&str> {
        self.pending_delete.as_deref()
    }

    /// Close the dialog without deleting anything.
    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Delete the pending entity.
    ///
    /// Returns `false` when no delete was pending. On failure the dialog stays
    /// open so the user can retry or cancel.
    pub async fn confirm_delete(&mut self) -> Result<bool> {
        let Some(id) = self.pending_delete.clone() else {
            return Ok(false);
        };

        match self.store.delete(&id).await {
            Ok(_) => {
                self.pending_delete = None;
                self.notifier
                    .notify(Toast::success(format!("{} deleted successfully", E::NOUN)));
                Ok(true)
            }
            Err(e) => {
                self.notifier.notify(Toast::failure(e.user_message()));
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Method;
    use crate::models::{Article, ContactLog, Job};
    use crate::pages::notify::RecordingNotifier;
    use crate::store::Endpoints;
    use crate::testing::{FakeBackend, Reply};
    use serde_json::json;
    use tokio::time::sleep;

    fn jobs_page(backend: &Arc<FakeBackend>) -> (ListPage<Job>, Arc<RecordingNotifier>) {
        let store = Arc::new(ResourceStore::new("jobs", Endpoints::jobs(), backend.clone()));
        let notifier = Arc::new(RecordingNotifier::new());
        let page = ListPage::new(store, notifier.clone(), &ListConfig::default());
        (page, notifier)
    }

    fn paged(ids: &[&str], current: u32, total_pages: u32) -> Reply {
        let items: Vec<_> = ids.iter().map(|id| json!({ "_id": id })).collect();
        Reply::json(json!({
            "items": items,
            "currentPage": current,
            "totalPages": total_pages,
            "totalArticles": 25
        }))
    }

    #[tokio::test(start_paused = true)]
    async fn test_search_sends_one_request_after_quiet_period() {
        let backend = Arc::new(FakeBackend::new());
        backend.on(Method::Get, "/career/jobs", Reply::json(json!({ "items": [] })));
        let (page, _) = jobs_page(&backend);

        for prefix in ["h", "hi", "hir", "hiri", "hirin", "hiring"] {
            page.set_search(prefix);
            sleep(Duration::from_millis(120)).await;
        }
        // 120ms after the last keystroke
        assert!(backend.requests().is_empty());

        sleep(Duration::from_millis(379)).await;
        assert!(backend.requests().is_empty());

        sleep(Duration::from_millis(2)).await;
        let requests = backend.requests_to(Method::Get, "/career/jobs");
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].query_value("search"), Some("hiring"));
        assert_eq!(requests[0].query_value("page"), Some("1"));
        assert_eq!(requests[0].query_value("limit"), Some("10"));

        sleep(Duration::from_secs(2)).await;
        assert_eq!(backend.requests().len(), 1);
        assert_eq!(page.search_term().await, "hiring");
    }

    #[tokio::test(start_paused = true)]
    async fn test_search_resets_to_first_page() {
        let backend = Arc::new(FakeBackend::new());
        let store = Arc::new(ResourceStore::<Article>::new(
            "articles",
            Endpoints::articles(),
            backend.clone(),
        ));
        backend.on(Method::Get, "/article", paged(&["a1"], 1, 3));
        backend.on(Method::Get, "/article", paged(&["a2"], 2, 3));
        backend.on(Method::Get, "/article", paged(&["a3"], 1, 1));
        let mut page = ListPage::new(store, Arc::new(RecordingNotifier::new()), &ListConfig::default());

        page.mount().await.unwrap();
        assert!(page.next_page().await.unwrap());
        assert_eq!(page.current_page().await, 2);

        page.set_search("rust");
        sleep(Duration::from_millis(501)).await;

        assert_eq!(page.current_page().await, 1);
        let last = backend.requests().pop().unwrap();
        assert_eq!(last.query_value("page"), Some("1"));
        assert_eq!(last.query_value("search"), Some("rust"));
    }

    #[tokio::test]
    async fn test_pagination_clamped() {
        let backend = Arc::new(FakeBackend::new());
        let store = Arc::new(ResourceStore::<Article>::new(
            "articles",
            Endpoints::articles(),
            backend.clone(),
        ));
        backend.on(Method::Get, "/article", paged(&["a1"], 1, 3));
        backend.on(Method::Get, "/article", paged(&["a3"], 3, 3));
        let mut page = ListPage::new(store, Arc::new(RecordingNotifier::new()), &ListConfig::default());

        page.mount().await.unwrap();
        assert!(!page.prev_page().await.unwrap());
        assert!(!page.go_to_page(0).await.unwrap());
        assert!(!page.go_to_page(4).await.unwrap());
        assert_eq!(backend.requests().len(), 1);

        assert!(page.go_to_page(3).await.unwrap());
        assert!(!page.next_page().await.unwrap());
        assert_eq!(page.current_page().await, 3);
        assert_eq!(backend.requests().len(), 2);
    }

    #[tokio::test]
    async fn test_cancel_delete_makes_no_request() {
        let backend = Arc::new(FakeBackend::new());
        let (mut page, notifier) = jobs_page(&backend);

        page.request_delete("j1");
        assert_eq!(page.pending_delete(), Some("j1"));
        page.cancel_delete();

        assert!(page.pending_delete().is_none());
        assert!(!page.confirm_delete().await.unwrap());
        assert!(backend.requests().is_empty());
        assert!(notifier.toasts().is_empty());
    }

    #[tokio::test]
    async fn test_confirm_delete_toasts_and_closes() {
        let backend = Arc::new(FakeBackend::new());
        backend.on(
            Method::Get,
            "/contact",
            Reply::json(json!({ "data": [{ "_id": "c1" }, { "_id": "c2" }], "pagination": { "currentPage": 1, "totalPages": 1, "total": 2 } })),
        );
        backend.on(Method::Delete, "/contact/c1", Reply::json(json!({ "message": "ok" })));
        let store = Arc::new(ResourceStore::<ContactLog>::new(
            "contacts",
            Endpoints::contacts(),
            backend.clone(),
        ));
        let notifier = Arc::new(RecordingNotifier::new());
        let mut page = ListPage::new(store.clone(), notifier.clone(), &ListConfig::default());

        page.mount().await.unwrap();
        page.request_delete("c1");
        assert!(page.confirm_delete().await.unwrap());

        assert!(page.pending_delete().is_none());
        assert_eq!(store.items().await.len(), 1);
        assert_eq!(notifier.last(), Some(Toast::success("Log deleted successfully")));
        assert_eq!(page.view().await, ListView::Populated);
    }

    #[tokio::test]
    async fn test_failed_delete_keeps_dialog() {
        let backend = Arc::new(FakeBackend::new());
        backend.on(Method::Delete, "/career/jobs/j1", Reply::fail(500, "Cannot delete"));
        let (mut page, notifier) = jobs_page(&backend);

        page.request_delete("j1");
        assert!(page.confirm_delete().await.is_err());

        assert_eq!(page.pending_delete(), Some("j1"));
        assert_eq!(notifier.last(), Some(Toast::failure("Cannot delete")));
    }

    #[tokio::test]
    async fn test_view_states() {
        let backend = Arc::new(FakeBackend::new());
        backend.on(Method::Get, "/career/jobs", Reply::json(json!([])));
        backend.on(Method::Get, "/career/jobs", Reply::fail(503, "Service unavailable"));
        let (mut page, _) = jobs_page(&backend);

        assert_eq!(page.view().await, ListView::Empty);
        page.mount().await.unwrap();
        assert_eq!(page.view().await, ListView::Empty);

        let _ = page.refresh().await;
        assert_eq!(
            page.view().await,
            ListView::Error("Service unavailable".to_string())
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_view_no_results_for_search() {
        let backend = Arc::new(FakeBackend::new());
        backend.on(Method::Get, "/career/jobs", Reply::json(json!({ "items": [] })));
        let (page, _) = jobs_page(&backend);

        page.set_search("zzz");
        sleep(Duration::from_millis(600)).await;

        assert_eq!(page.view().await, ListView::NoResults);
    }
}
