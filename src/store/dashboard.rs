// src/store/dashboard.rs

//! Root of the store tree, built once at startup.

use std::sync::Arc;

use crate::api::{ApiClient, Backend, Session};
use crate::config::{Config, ListConfig};
use crate::error::Result;
use crate::models::{
    AboutPage, Article, CareerPage, ContactLog, ContactPage, Entity, Faq, FooterItem, Job,
    JobApplication, PrivacyPolicy, Service, TermsOfService,
};
use crate::store::{Endpoints, HomepageStore, ResourceStore, SingletonStore};

/// Every store of the dashboard, sharing one backend.
///
/// Stores are reference-counted so page controllers and spawned search tasks
/// can hold them past a borrow of the dashboard.
pub struct Dashboard {
    pub articles: Arc<ResourceStore<Article>>,
    pub services: Arc<ResourceStore<Service>>,
    pub jobs: Arc<ResourceStore<Job>>,
    pub applications: Arc<ResourceStore<JobApplication>>,
    pub contacts: Arc<ResourceStore<ContactLog>>,
    pub faqs: Arc<ResourceStore<Faq>>,
    pub footer: Arc<ResourceStore<FooterItem>>,

    pub about: Arc<SingletonStore<AboutPage>>,
    pub career: Arc<SingletonStore<CareerPage>>,
    pub contact_page: Arc<SingletonStore<ContactPage>>,
    pub privacy: Arc<SingletonStore<PrivacyPolicy>>,
    pub terms: Arc<SingletonStore<TermsOfService>>,

    pub homepage: Arc<HomepageStore>,

    list: ListConfig,
    backend: Arc<dyn Backend>,
}

impl Dashboard {
    pub fn new(config: &Config, backend: Arc<dyn Backend>) -> Self {
        let images = config.api.image_base_url.as_str();

        let articles = resource::<Article>("articles", Endpoints::articles(), &backend);
        let services = resource::<Service>("services", Endpoints::services(), &backend);
        let jobs = resource::<Job>("jobs", Endpoints::jobs(), &backend);
        let applications =
            resource::<JobApplication>("applications", Endpoints::applications(), &backend);
        let contacts = resource::<ContactLog>("contacts", Endpoints::contacts(), &backend);
        let faqs = resource::<Faq>("faqs", Endpoints::faqs(), &backend);
        let footer = resource::<FooterItem>("footer", Endpoints::footer(), &backend);

        Self {
            articles: Arc::new(articles.with_image_base(images)),
            services: Arc::new(services.with_image_base(images)),
            jobs: Arc::new(jobs),
            applications: Arc::new(applications.with_image_base(images)),
            contacts: Arc::new(contacts),
            faqs: Arc::new(faqs),
            footer: Arc::new(footer),
            about: Arc::new(SingletonStore::new("/about-page", Arc::clone(&backend))),
            career: Arc::new(SingletonStore::new("/career", Arc::clone(&backend))),
            contact_page: Arc::new(SingletonStore::new("/contact-page", Arc::clone(&backend))),
            privacy: Arc::new(SingletonStore::new("/privacy-policy", Arc::clone(&backend))),
            terms: Arc::new(SingletonStore::new(
                "/terms-and-conditions",
                Arc::clone(&backend),
            )),
            homepage: Arc::new(HomepageStore::new(Arc::clone(&backend))),
            list: config.list.clone(),
            backend,
        }
    }

    /// Build the dashboard against the configured HTTP backend.
    pub fn connect(config: &Config, session: Session) -> Result<Self> {
        let client = ApiClient::new(&config.api, session)?;
        log::debug!("Dashboard connected to {}", config.api.base_url);
        Ok(Self::new(config, Arc::new(client)))
    }

    /// List page settings shared by every list controller.
    pub fn list_config(&self) -> &ListConfig {
        &self.list
    }

    pub fn backend(&self) -> Arc<dyn Backend> {
        Arc::clone(&self.backend)
    }
}

fn resource<E: Entity>(
    name: &str,
    endpoints: Endpoints,
    backend: &Arc<dyn Backend>,
) -> ResourceStore<E> {
    ResourceStore::new(name, endpoints, Arc::clone(backend))
}
