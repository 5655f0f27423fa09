//! HTTP client for the PostgREST-style table API and its auth endpoints.
//!
//! Requests carry the anon key as `apikey` and, as bearer, either the
//! signed-in session's access token or the anon key. Writes ask for the
//! stored row back with `Prefer: return=representation`.

use crate::auth::{Authenticator, Session};
use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};
use crate::query::{Query, value_text};
use crate::table::{TableStore, id_value};
use async_trait::async_trait;
use folio_types::RowId;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::Deserialize;
use serde_json::Value;
use std::sync::{Arc, OnceLock};
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

const RETURN_REPRESENTATION: &str = "return=representation";
const MERGE_DUPLICATES: &str = "resolution=merge-duplicates,return=representation";

/// Tables the admin panel depends on.
pub const PORTFOLIO_TABLES: &[&str] = &["projects", "experiences", "skills", "profiles"];

/// Client for one remote store project. Cheap to share behind an `Arc`.
pub struct RestClient {
    client: Client,
    config: StoreConfig,
    session: Arc<RwLock<Option<Session>>>,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    refresh_token: String,
    user: TokenUser,
}

#[derive(Deserialize)]
struct TokenUser {
    id: RowId,
    #[serde(default)]
    email: Option<String>,
}

impl RestClient {
    pub fn new(config: StoreConfig) -> StoreResult<Self> {
        config.validate()?;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| StoreError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            config,
            session: Arc::new(RwLock::new(None)),
        })
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Restores a saved session.
    pub async fn set_session(&self, session: Session) {
        *self.session.write().await = Some(session);
    }

    pub async fn is_authenticated(&self) -> bool {
        self.session.read().await.is_some()
    }

    pub async fn user_id(&self) -> Option<RowId> {
        self.session.read().await.as_ref().map(|s| s.user_id.clone())
    }

    async fn bearer(&self) -> String {
        match self.session.read().await.as_ref() {
            Some(s) => s.access_token.clone(),
            None => self.config.anon_key.clone(),
        }
    }

    async fn request(&self, method: Method, url: String) -> RequestBuilder {
        self.client
            .request(method, url)
            .header("apikey", &self.config.anon_key)
            .bearer_auth(self.bearer().await)
    }

    fn row_url(&self, table: &str, id: &RowId) -> String {
        format!(
            "{}?id=eq.{}",
            self.config.table_url(table),
            urlencoding::encode(&value_text(&id_value(id)))
        )
    }

    // ── Auth ──

    pub async fn sign_in_with_password(&self, email: &str, password: &str) -> StoreResult<Session> {
        let url = format!("{}?grant_type=password", self.config.auth_url("token"));
        debug!("password sign-in");
        let resp = self
            .client
            .post(&url)
            .header("apikey", &self.config.anon_key)
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(match StoreError::from_response(status.as_u16(), &body) {
                StoreError::Forbidden(m) | StoreError::Validation(m) | StoreError::NotFound(m) => {
                    StoreError::AuthFailed(m)
                }
                other => other,
            });
        }

        let token: TokenResponse = resp.json().await?;
        let session = Session {
            access_token: token.access_token,
            refresh_token: token.refresh_token,
            user_id: token.user.id,
            email: token.user.email,
        };
        self.set_session(session.clone()).await;
        info!(user = %session.user_id, "signed in");
        Ok(session)
    }

    pub async fn sign_out(&self) {
        if self.session.write().await.take().is_some() {
            info!("signed out");
        }
    }

    // ── Diagnostics ──

    /// Total rows in `table` visible to the current session, read from the
    /// `Content-Range` header of a one-row request.
    pub async fn count(&self, table: &str) -> StoreResult<usize> {
        let url = format!("{}?select=id&limit=1", self.config.table_url(table));
        debug!("COUNT {table}");
        let resp = self
            .request(Method::GET, url)
            .await
            .header("Prefer", "count=exact")
            .send()
            .await?;
        let resp = check(resp).await?;
        let total = resp
            .headers()
            .get(reqwest::header::CONTENT_RANGE)
            .and_then(|v| v.to_str().ok())
            .and_then(|range| range.rsplit('/').next())
            .and_then(|total| total.parse::<usize>().ok());
        match total {
            Some(n) => Ok(n),
            None => Ok(resp.json::<Vec<Value>>().await?.len()),
        }
    }

    /// Checks that each table answers, reporting its row count or the error
    /// it returned. One table failing does not stop the others.
    pub async fn check_tables(&self, tables: &[&str]) -> Vec<(String, StoreResult<usize>)> {
        let mut report = Vec::with_capacity(tables.len());
        for table in tables {
            let result = self.count(table).await;
            match &result {
                Ok(n) => info!("{table}: reachable ({n} rows)"),
                Err(e) => warn!("{table}: {e}"),
            }
            report.push((table.to_string(), result));
        }
        report
    }
}

async fn check(resp: Response) -> StoreResult<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(StoreError::from_response(status.as_u16(), &body))
}

async fn rows(resp: Response) -> StoreResult<Vec<Value>> {
    let resp = check(resp).await?;
    Ok(resp.json().await?)
}

/// First row of a representation, or `missing` when the write touched none.
async fn single(resp: Response, missing: impl FnOnce() -> StoreError) -> StoreResult<Value> {
    rows(resp).await?.into_iter().next().ok_or_else(missing)
}

#[async_trait]
impl TableStore for RestClient {
    async fn select(&self, table: &str, query: &Query) -> StoreResult<Vec<Value>> {
        let url = format!("{}?{}", self.config.table_url(table), query.to_query_string());
        debug!("GET {url}");
        let resp = self.request(Method::GET, url).await.send().await?;
        rows(resp).await
    }

    async fn insert(&self, table: &str, row: Value) -> StoreResult<Value> {
        let url = self.config.table_url(table);
        debug!("POST {url}");
        let resp = self
            .request(Method::POST, url)
            .await
            .header("Prefer", RETURN_REPRESENTATION)
            .json(&row)
            .send()
            .await?;
        single(resp, || StoreError::Api {
            status: 201,
            message: format!("insert into {table} returned no row"),
        })
        .await
    }

    async fn update(&self, table: &str, id: &RowId, patch: Value) -> StoreResult<Value> {
        let url = self.row_url(table, id);
        debug!("PATCH {url}");
        let resp = self
            .request(Method::PATCH, url)
            .await
            .header("Prefer", RETURN_REPRESENTATION)
            .json(&patch)
            .send()
            .await?;
        single(resp, || StoreError::NotFound(format!("{table} row {id}"))).await
    }

    async fn delete(&self, table: &str, id: &RowId) -> StoreResult<()> {
        let url = self.row_url(table, id);
        debug!("DELETE {url}");
        let resp = self
            .request(Method::DELETE, url)
            .await
            .header("Prefer", RETURN_REPRESENTATION)
            .send()
            .await?;
        single(resp, || StoreError::NotFound(format!("{table} row {id}")))
            .await
            .map(|_| ())
    }

    async fn upsert(&self, table: &str, row: Value) -> StoreResult<Value> {
        let url = self.config.table_url(table);
        debug!("POST {url} (upsert)");
        let resp = self
            .request(Method::POST, url)
            .await
            .header("Prefer", MERGE_DUPLICATES)
            .json(&row)
            .send()
            .await?;
        single(resp, || StoreError::Api {
            status: 201,
            message: format!("upsert into {table} returned no row"),
        })
        .await
    }
}

#[async_trait]
impl Authenticator for RestClient {
    async fn sign_in(&self, email: &str, password: &str) -> StoreResult<Session> {
        self.sign_in_with_password(email, password).await
    }

    async fn sign_out(&self) {
        RestClient::sign_out(self).await
    }

    async fn session(&self) -> Option<Session> {
        self.session.read().await.clone()
    }
}

static SHARED: OnceLock<Arc<RestClient>> = OnceLock::new();

/// Process-wide client built from [`StoreConfig::from_env`] on first use.
pub fn shared_client() -> StoreResult<Arc<RestClient>> {
    if let Some(client) = SHARED.get() {
        return Ok(Arc::clone(client));
    }
    let client = Arc::new(RestClient::new(StoreConfig::from_env())?);
    // A concurrent first call may have won; either instance is equivalent.
    let _ = SHARED.set(client);
    SHARED
        .get()
        .cloned()
        .ok_or_else(|| StoreError::Config("shared client unavailable".into()))
}
