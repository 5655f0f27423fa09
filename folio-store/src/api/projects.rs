use super::EntityApi;
use crate::error::StoreResult;
use crate::github::GithubRepo;
use crate::query::Query;
use crate::table::{Table, TableStore};
use folio_types::{NewProject, Project, ProjectPatch};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub struct ProjectsApi {
    table: Table<Project>,
}

impl ProjectsApi {
    pub fn new(store: Arc<dyn TableStore>) -> Self {
        Self {
            table: Table::new(store),
        }
    }

    /// Featured projects in display order.
    pub async fn featured(&self) -> StoreResult<Vec<Project>> {
        self.table.select(Query::new().eq("is_featured", true)).await
    }

    /// The project mirroring GitHub repository `repo_id`, if any.
    pub async fn by_github_id(&self, repo_id: i64) -> StoreResult<Option<Project>> {
        let rows = self
            .table
            .select(Query::new().eq("github_repo_id", repo_id).limit(1))
            .await?;
        Ok(rows.into_iter().next())
    }

    /// Mirrors `repos` into the projects table, keyed by GitHub repository id:
    /// known repositories are refreshed, new ones inserted. Stops at the
    /// first failure.
    pub async fn sync_with_github(&self, repos: &[GithubRepo]) -> StoreResult<Vec<Project>> {
        let mut synced = Vec::with_capacity(repos.len());
        for repo in repos {
            let project = match self.by_github_id(repo.id).await? {
                Some(p) => self.table.update(&p.id, &repo.to_patch()).await?,
                None => self.table.create(&repo.to_new_project()).await?,
            };
            synced.push(project);
        }
        info!(count = synced.len(), "synced GitHub repositories");
        Ok(synced)
    }
}

impl EntityApi for ProjectsApi {
    type Row = Project;
    type New = NewProject;
    type Patch = ProjectPatch;

    fn table(&self) -> &Table<Project> {
        &self.table
    }
}
