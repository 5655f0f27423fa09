//! Read-only client for the owner's public GitHub repositories.

use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};
use chrono::{DateTime, Utc};
use folio_types::{NewProject, ProjectPatch, ProjectStatus};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// The repository fields project import consumes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GithubRepo {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub html_url: String,
    #[serde(default)]
    pub stargazers_count: u32,
    #[serde(default)]
    pub forks_count: u32,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl GithubRepo {
    fn description_or_default(&self) -> String {
        self.description
            .clone()
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| format!("GitHub repository: {}", self.name))
    }

    /// Imported repositories are completed, non-custom projects whose only
    /// technology is the repository language.
    pub fn to_new_project(&self) -> NewProject {
        NewProject {
            title: self.name.clone(),
            description: Some(self.description_or_default()),
            github_url: Some(self.html_url.clone()),
            technologies: self.language.iter().cloned().collect(),
            is_featured: false,
            status: ProjectStatus::Completed,
            is_custom: false,
            github_repo_id: Some(self.id),
            stars_count: Some(self.stargazers_count),
            forks_count: Some(self.forks_count),
            language: self.language.clone(),
            ..NewProject::default()
        }
    }

    /// Refreshes the mirrored fields of an already imported project. Admin
    /// edits to featured flag, status and order are kept.
    pub fn to_patch(&self) -> ProjectPatch {
        ProjectPatch {
            title: Some(self.name.clone()),
            description: Some(self.description_or_default()),
            github_url: Some(self.html_url.clone()),
            technologies: Some(self.language.iter().cloned().collect()),
            stars_count: Some(self.stargazers_count),
            forks_count: Some(self.forks_count),
            language: self.language.clone(),
            ..ProjectPatch::default()
        }
    }
}

pub struct GithubClient {
    client: Client,
    api_url: String,
    username: String,
    per_page: u8,
}

impl GithubClient {
    pub fn new(config: &StoreConfig) -> StoreResult<Self> {
        let username = config
            .github_username
            .clone()
            .ok_or_else(|| StoreError::Config("github username is not configured".into()))?;
        let user_agent = config
            .user_agent
            .clone()
            .unwrap_or_else(|| "folio".to_string());
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(user_agent)
            .build()
            .map_err(|e| StoreError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_url: config.github_api_url.trim_end_matches('/').to_string(),
            username,
            per_page: config.github_page_size,
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// The most recently updated public repositories, newest first.
    pub async fn recent_repos(&self) -> StoreResult<Vec<GithubRepo>> {
        let url = format!(
            "{}/users/{}/repos?sort=updated&per_page={}",
            self.api_url,
            urlencoding::encode(&self.username),
            self.per_page
        );
        debug!("GET {url}");
        let resp = self
            .client
            .get(&url)
            .header("Accept", "application/vnd.github+json")
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(StoreError::Api {
                status: status.as_u16(),
                message: github_message(&body)
                    .unwrap_or_else(|| format!("GitHub API error: HTTP {status}")),
            });
        }

        Ok(resp.json().await?)
    }
}

fn github_message(body: &str) -> Option<String> {
    #[derive(Deserialize)]
    struct Resp {
        message: String,
    }
    serde_json::from_str::<Resp>(body)
        .ok()
        .map(|r| format!("GitHub API error: {}", r.message))
}
