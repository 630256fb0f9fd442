// src/store/mod.rs

//! State layer: stores wrapping backend calls with loading/error flags.
//!
//! - `ResourceStore`: collection entities (articles, jobs, ...)
//! - `SingletonStore`: single documents replaced wholesale
//! - `HomepageStore`: homepage sections keyed by slug
//! - `Dashboard`: owns one of each, built at startup

pub mod dashboard;
pub mod endpoints;
pub mod homepage;
pub mod resource;
pub mod singleton;

pub use dashboard::Dashboard;
pub use endpoints::Endpoints;
pub use homepage::{HomepageState, HomepageStore};
pub use resource::{ListParams, ResourceStore, StoreState};
pub use singleton::{SingletonState, SingletonStore};
