//! Remote store boundary for folio.
//!
//! Provides:
//! - `RestClient`, a PostgREST-style table client over reqwest
//! - The `TableStore` seam and the typed `Table<E>` built on it
//! - One data-access module per entity (`ProjectsApi`, `SkillsApi`, ...)
//! - Password sign-in for the admin panel
//! - A read-only GitHub client for project import
//!
//! Every operation returns a `StoreResult`. Nothing here panics on a remote
//! failure and nothing is retried.

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod github;
pub mod logging;
pub mod outcome;
pub mod query;
pub mod rest_client;
pub mod table;

pub use api::{
    AnalyticsApi, ContactApi, EducationApi, EntityApi, ExperiencesApi, MarkRead, ProfilesApi,
    ProjectsApi, SkillsApi,
};
pub use auth::{Authenticator, Session};
pub use config::StoreConfig;
pub use error::{ErrorKind, StoreError, StoreResult};
pub use github::{GithubClient, GithubRepo};
pub use logging::init_logging;
pub use outcome::{DeleteOutcome, Outcome};
pub use query::{Filter, Query};
pub use rest_client::{PORTFOLIO_TABLES, RestClient, shared_client};
pub use table::{Table, TableStore};
