use crate::collection::SyncedCollection;
use folio_store::{EntityApi, GithubClient, GithubRepo, ProjectsApi, StoreResult};
use folio_types::Project;
use tracing::{debug, info, warn};

pub type ProjectsView = SyncedCollection<ProjectsApi>;

/// Outcome of importing a batch of repositories.
#[derive(Debug, Clone, Default)]
pub struct ImportReport {
    pub imported: Vec<Project>,
    /// Repositories that already had a project.
    pub skipped: Vec<String>,
    /// Repository name and error message for each failed import.
    pub failed: Vec<(String, String)>,
}

impl ImportReport {
    pub fn summary(&self) -> String {
        let mut summary = format!("{} projects imported", self.imported.len());
        if !self.skipped.is_empty() {
            summary.push_str(&format!(", {} already present", self.skipped.len()));
        }
        if !self.failed.is_empty() {
            summary.push_str(&format!(", {} failed", self.failed.len()));
        }
        summary
    }
}

impl SyncedCollection<ProjectsApi> {
    pub fn featured(&self) -> Vec<Project> {
        self.items().into_iter().filter(|p| p.is_featured).collect()
    }

    /// Creates one project per selected repository that has none yet. A
    /// failed repository does not stop the rest. The collection is reloaded
    /// when anything was imported.
    pub async fn import_repos(&self, repos: &[GithubRepo]) -> ImportReport {
        let mut report = ImportReport::default();
        if let Err(e) = self.authorize().await {
            report.failed = repos
                .iter()
                .map(|r| (r.name.clone(), e.to_string()))
                .collect();
            return report;
        }

        for repo in repos {
            let imported = match self.api().by_github_id(repo.id).await {
                Ok(Some(_)) => {
                    debug!("[SYNC] {} already imported", repo.name);
                    report.skipped.push(repo.name.clone());
                    continue;
                }
                Ok(None) => self.api().create(&repo.to_new_project()).await,
                Err(e) => Err(e),
            };
            match imported {
                Ok(project) => report.imported.push(project),
                Err(e) => {
                    warn!("[SYNC] failed to import {}: {e}", repo.name);
                    report.failed.push((repo.name.clone(), e.to_string()));
                }
            }
        }

        info!("[SYNC] GitHub import: {}", report.summary());
        if !report.imported.is_empty() {
            self.refetch().await;
        }
        report
    }

    /// Fetches the owner's recent repositories and mirrors them into the
    /// projects table. A failed mirror is logged; the repositories are still
    /// returned so they can be offered for import.
    pub async fn fetch_github(&self, github: &GithubClient) -> StoreResult<Vec<GithubRepo>> {
        let repos = github.recent_repos().await?;
        if let Err(e) = self.authorize().await {
            warn!("[SYNC] not mirroring GitHub repositories: {e}");
            return Ok(repos);
        }
        match self.api().sync_with_github(&repos).await {
            Ok(_) => {
                self.refetch().await;
            }
            Err(e) => warn!("[SYNC] GitHub mirror failed: {e}"),
        }
        Ok(repos)
    }
}
