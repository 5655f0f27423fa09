//! Remote store configuration.

use crate::error::{StoreError, StoreResult};
use serde::{Deserialize, Serialize};
use tracing::warn;

pub const ENV_URL: &str = "FOLIO_SUPABASE_URL";
pub const ENV_ANON_KEY: &str = "FOLIO_SUPABASE_ANON_KEY";
pub const ENV_GITHUB_USERNAME: &str = "FOLIO_GITHUB_USERNAME";
pub const ENV_TIMEOUT_SECS: &str = "FOLIO_HTTP_TIMEOUT_SECS";

/// Configuration for the remote store client.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Project base URL (e.g., "https://abcd.supabase.co").
    pub url: String,

    /// Public anon key, sent as `apikey` on every request.
    pub anon_key: String,

    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,

    /// Base URL of the GitHub REST API.
    pub github_api_url: String,

    /// Account whose public repositories are offered for import.
    pub github_username: Option<String>,

    /// How many recently updated repositories to fetch.
    pub github_page_size: u8,

    /// Stamped on contact messages and analytics events.
    pub user_agent: Option<String>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            anon_key: String::new(),
            request_timeout_secs: 30,
            github_api_url: "https://api.github.com".to_string(),
            github_username: None,
            github_page_size: 6,
            user_agent: Some(concat!("folio/", env!("CARGO_PKG_VERSION")).to_string()),
        }
    }
}

impl StoreConfig {
    /// Builds a config from `FOLIO_*` environment variables on top of the
    /// defaults. Missing credentials are logged, not fatal; [`validate`]
    /// reports them when a client is built.
    ///
    /// [`validate`]: StoreConfig::validate
    pub fn from_env() -> Self {
        let mut config = Self::default();

        match std::env::var(ENV_URL) {
            Ok(url) => config.url = url,
            Err(_) => warn!("{ENV_URL} is not set; remote store calls will fail"),
        }
        match std::env::var(ENV_ANON_KEY) {
            Ok(key) => config.anon_key = key,
            Err(_) => warn!("{ENV_ANON_KEY} is not set; remote store calls will fail"),
        }
        if let Ok(user) = std::env::var(ENV_GITHUB_USERNAME) {
            config.github_username = Some(user).filter(|u| !u.trim().is_empty());
        }
        if let Ok(raw) = std::env::var(ENV_TIMEOUT_SECS) {
            match raw.trim().parse() {
                Ok(secs) => config.request_timeout_secs = secs,
                Err(_) => warn!("ignoring {ENV_TIMEOUT_SECS}={raw}: not a number of seconds"),
            }
        }

        config
    }

    pub fn validate(&self) -> StoreResult<()> {
        if self.url.trim().is_empty() {
            return Err(StoreError::Config("missing store url".into()));
        }
        if !self.url.starts_with("http://") && !self.url.starts_with("https://") {
            return Err(StoreError::Config(format!(
                "store url must be http(s): {}",
                self.url
            )));
        }
        if self.anon_key.trim().is_empty() {
            return Err(StoreError::Config("missing anon key".into()));
        }
        if self.request_timeout_secs == 0 {
            return Err(StoreError::Config("request timeout must be positive".into()));
        }
        Ok(())
    }

    /// `<url>/rest/v1/<table>`
    pub fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{table}", self.url.trim_end_matches('/'))
    }

    /// `<url>/auth/v1/<path>`
    pub fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{path}", self.url.trim_end_matches('/'))
    }
}
