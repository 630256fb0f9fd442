//! cms-admin CLI
//!
//! Terminal front end for the dashboard stores and page flows.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand, ValueEnum};
use cms_admin::{
    api::Session,
    config::Config,
    error::{AppError, Result},
    models::{Document, Entity, HomepageSlug},
    pages::{
        ArticleForm, FaqForm, FooterForm, FormModel, FormPage, GuardDecision, HomepageEditor,
        JobForm, ListPage, LogNotifier, Notifier, RouteGuard, SaveOutcome, ServiceForm,
        SingletonPage,
    },
    store::{Dashboard, ListParams, ResourceStore, SingletonStore},
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// cms-admin - content management dashboard client
#[derive(Parser, Debug)]
#[command(name = "cms-admin", version, about = "Content management dashboard client")]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "cms-admin.toml")]
    config: PathBuf,

    /// Bearer token (overrides CMS_ADMIN_TOKEN and auth.token)
    #[arg(long)]
    token: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List a page of a resource
    List {
        resource: Resource,
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        limit: Option<u32>,
        #[arg(long)]
        search: Option<String>,
    },

    /// Show one entity
    Get { resource: Resource, id: String },

    /// Create an entity from a JSON file
    Create {
        resource: Resource,
        #[arg(long)]
        file: PathBuf,
    },

    /// Update an entity from a JSON file
    Update {
        resource: Resource,
        id: String,
        #[arg(long)]
        file: PathBuf,
    },

    /// Delete an entity (asks for confirmation unless --yes)
    Delete {
        resource: Resource,
        id: String,
        #[arg(long)]
        yes: bool,
    },

    /// Read or replace a singleton page
    Page {
        #[command(subcommand)]
        action: PageAction,
    },

    /// Read or replace homepage sections
    Homepage {
        #[command(subcommand)]
        action: HomepageAction,
    },

    /// Sign in and print the issued token
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Validate the configuration file
    Validate,
}

#[derive(Subcommand, Debug)]
enum PageAction {
    Get {
        page: PageKind,
    },
    Put {
        page: PageKind,
        #[arg(long)]
        file: PathBuf,
    },
}

#[derive(Subcommand, Debug)]
enum HomepageAction {
    /// All sections, or one by slug
    Get { slug: Option<String> },
    Put {
        slug: String,
        #[arg(long)]
        file: PathBuf,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Resource {
    Articles,
    Services,
    Jobs,
    Applications,
    Contacts,
    Faqs,
    Footer,
}

impl Resource {
    /// Dashboard route of the resource's list page.
    fn route(&self) -> &'static str {
        match self {
            Resource::Articles => "/article",
            Resource::Services => "/service",
            Resource::Jobs => "/jobs",
            Resource::Applications => "/job-applications",
            Resource::Contacts => "/contact-logs",
            Resource::Faqs => "/faqs",
            Resource::Footer => "/footer",
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum PageKind {
    About,
    Career,
    Contact,
    Privacy,
    Terms,
}

/// Run `$body` with `$store` bound to the resource's store.
macro_rules! with_store {
    ($dashboard:expr, $resource:expr, $store:ident => $body:expr) => {
        match $resource {
            Resource::Articles => {
                let $store = &$dashboard.articles;
                $body
            }
            Resource::Services => {
                let $store = &$dashboard.services;
                $body
            }
            Resource::Jobs => {
                let $store = &$dashboard.jobs;
                $body
            }
            Resource::Applications => {
                let $store = &$dashboard.applications;
                $body
            }
            Resource::Contacts => {
                let $store = &$dashboard.contacts;
                $body
            }
            Resource::Faqs => {
                let $store = &$dashboard.faqs;
                $body
            }
            Resource::Footer => {
                let $store = &$dashboard.footer;
                $body
            }
        }
    };
}

/// Run `$body` with `$store` bound to the page's singleton store.
macro_rules! with_page {
    ($dashboard:expr, $page:expr, $store:ident => $body:expr) => {
        match $page {
            PageKind::About => {
                let $store = &$dashboard.about;
                $body
            }
            PageKind::Career => {
                let $store = &$dashboard.career;
                $body
            }
            PageKind::Contact => {
                let $store = &$dashboard.contact_page;
                $body
            }
            PageKind::Privacy => {
                let $store = &$dashboard.privacy;
                $body
            }
            PageKind::Terms => {
                let $store = &$dashboard.terms;
                $body
            }
        }
    };
}

/// Initialize logging based on verbosity flag and configured level.
fn init_logging(verbose: bool, level: &str) {
    let level = if verbose { "debug" } else { level };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = tokio::fs::read_to_string(path).await?;
    Ok(serde_json::from_str(&content)?)
}

/// Ask on stdin; anything but y/yes declines.
fn confirm(prompt: &str) -> Result<bool> {
    print!("{prompt} [y/N] ");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut config = Config::load_or_default(&cli.config);
    config.apply_env();
    init_logging(cli.verbose, &config.logging.level);

    match run(cli, config).await {
        Ok(true) => ExitCode::SUCCESS,
        // already reported through a notification
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Execute a command. `Ok(false)` means it failed after reporting.
async fn run(cli: Cli, config: Config) -> Result<bool> {
    let session = Session::new();
    if let Some(token) = cli.token.clone().or_else(|| config.auth.token.clone()) {
        session.set_token(token);
    }

    log::debug!("Validating configuration...");
    config.validate()?;

    let dashboard = Dashboard::connect(&config, session.clone())?;
    let notifier: Arc<dyn Notifier> = Arc::new(LogNotifier);
    let guard = RouteGuard::new(session.clone());

    match cli.command {
        Command::Validate => {
            log::info!("✓ Config OK ({})", config.api.base_url);
        }

        Command::Login { email, password } => {
            let token = session
                .login(dashboard.backend().as_ref(), &config.auth.login_path, &email, &password)
                .await?;
            println!("{token}");
        }

        Command::List {
            resource,
            page,
            limit,
            search,
        } => {
            warn_if_signed_out(&guard, resource.route());
            let params = ListParams {
                page: Some(page.unwrap_or(1)),
                limit: Some(limit.unwrap_or(dashboard.list_config().page_limit)),
                search,
            };
            with_store!(dashboard, resource, store => list(store, &params).await?);
        }

        Command::Get { resource, id } => {
            warn_if_signed_out(&guard, resource.route());
            with_store!(dashboard, resource, store => print_json(&store.get_by_id(&id).await?)?);
        }

        Command::Create { resource, file } => {
            warn_if_signed_out(&guard, resource.route());
            return save(&dashboard, resource, None, &file, notifier).await;
        }

        Command::Update { resource, id, file } => {
            warn_if_signed_out(&guard, resource.route());
            return save(&dashboard, resource, Some(&id), &file, notifier).await;
        }

        Command::Delete { resource, id, yes } => {
            warn_if_signed_out(&guard, resource.route());
            return with_store!(dashboard, resource, store => {
                delete(store, &dashboard, &id, yes, Arc::clone(&notifier)).await
            });
        }

        Command::Page { action } => match action {
            PageAction::Get { page } => {
                with_page!(dashboard, page, store => print_json(&store.fetch().await?)?);
            }
            PageAction::Put { page, file } => {
                return with_page!(dashboard, page, store => {
                    replace_page(store, &file, Arc::clone(&notifier)).await
                });
            }
        },

        Command::Homepage { action } => match action {
            HomepageAction::Get { slug: Some(slug) } => {
                let slug: HomepageSlug = slug.parse()?;
                match dashboard.homepage.fetch_section(slug).await {
                    Some(section) => print_json(&section)?,
                    None => return Ok(false),
                }
            }
            HomepageAction::Get { slug: None } => {
                dashboard.homepage.fetch_all().await;
                let sections: Map<String, Value> = dashboard
                    .homepage
                    .snapshot()
                    .await
                    .sections
                    .into_iter()
                    .map(|(slug, section)| (slug.section_key().to_string(), section))
                    .collect();
                print_json(&sections)?;
            }
            HomepageAction::Put { slug, file } => {
                let slug: HomepageSlug = slug.parse()?;
                let body: Value = read_json(&file).await?;
                let mut editor = HomepageEditor::new(Arc::clone(&dashboard.homepage), notifier);
                *editor.section_mut(slug) = body;
                return Ok(editor.save_section(slug).await.is_ok());
            }
        },
    }

    Ok(true)
}

fn warn_if_signed_out(guard: &RouteGuard, route: &str) {
    if let GuardDecision::Redirect(to) = guard.check(route) {
        log::warn!("Not signed in (would redirect to {to}); requests are unauthenticated");
    }
}

async fn list<E: Entity>(store: &Arc<ResourceStore<E>>, params: &ListParams) -> Result<()> {
    let pagination = store.list(params).await?;
    print_json(&store.items().await)?;
    log::info!(
        "Page {}/{} ({} total)",
        pagination.current_page,
        pagination.total_pages,
        pagination.total
    );
    Ok(())
}

/// Create or update through the resource's form page.
async fn save(
    dashboard: &Dashboard,
    resource: Resource,
    id: Option<&str>,
    file: &Path,
    notifier: Arc<dyn Notifier>,
) -> Result<bool> {
    match resource {
        Resource::Articles => submit::<ArticleForm>(&dashboard.articles, id, file, notifier).await,
        Resource::Services => submit::<ServiceForm>(&dashboard.services, id, file, notifier).await,
        Resource::Jobs => submit::<JobForm>(&dashboard.jobs, id, file, notifier).await,
        Resource::Faqs => submit::<FaqForm>(&dashboard.faqs, id, file, notifier).await,
        Resource::Footer => submit::<FooterForm>(&dashboard.footer, id, file, notifier).await,
        Resource::Applications => Err(AppError::unsupported("applications", "save")),
        Resource::Contacts => Err(AppError::unsupported("contacts", "save")),
    }
}

async fn submit<F: FormModel>(
    store: &Arc<ResourceStore<F::Entity>>,
    id: Option<&str>,
    file: &Path,
    notifier: Arc<dyn Notifier>,
) -> Result<bool> {
    let entity: F::Entity = read_json(file).await?;
    let mut page = FormPage::<F>::new(Arc::clone(store), notifier);
    page.mount(id).await?;
    *page.form_mut() = F::from_entity(&entity);

    let saved = match page.save().await {
        SaveOutcome::Saved { entity, redirect } => {
            print_json(&entity)?;
            if let Some(route) = redirect {
                log::debug!("Would navigate to {route}");
            }
            true
        }
        SaveOutcome::Invalid(errors) => {
            for message in errors.values() {
                log::error!("{message}");
            }
            false
        }
        SaveOutcome::Failed(_) => false,
    };
    page.unmount().await;
    Ok(saved)
}

/// Delete through the list page's confirmation flow.
async fn delete<E: Entity>(
    store: &Arc<ResourceStore<E>>,
    dashboard: &Dashboard,
    id: &str,
    yes: bool,
    notifier: Arc<dyn Notifier>,
) -> Result<bool> {
    let mut page = ListPage::new(Arc::clone(store), notifier, dashboard.list_config());
    page.request_delete(id);

    if !yes && !confirm(&format!("Delete {} {}?", E::NOUN, id))? {
        page.cancel_delete();
        log::info!("Cancelled");
        return Ok(true);
    }
    Ok(page.confirm_delete().await.is_ok())
}

async fn replace_page<D: Document>(
    store: &Arc<SingletonStore<D>>,
    file: &Path,
    notifier: Arc<dyn Notifier>,
) -> Result<bool> {
    let document: D = read_json(file).await?;
    let mut page = SingletonPage::new(Arc::clone(store), notifier);
    *page.document_mut() = document;
    Ok(page.save().await)
}
