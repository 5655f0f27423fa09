use crate::{OrderBy, Record, RowId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status shown next to a project.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    #[default]
    Completed,
    InProgress,
    Planned,
}

/// A portfolio project, either hand-written or imported from GitHub.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: RowId,
    #[serde(default, deserialize_with = "crate::de::null_as_default")]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub demo_url: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    /// Ordered, denormalized list of technology names.
    #[serde(default, deserialize_with = "crate::de::null_as_default")]
    pub technologies: Vec<String>,
    #[serde(default, deserialize_with = "crate::de::null_as_default")]
    pub is_featured: bool,
    #[serde(default, deserialize_with = "crate::de::null_as_default")]
    pub status: ProjectStatus,
    #[serde(default, deserialize_with = "crate::de::null_as_default")]
    pub sort_order: i32,
    #[serde(default = "default_true", deserialize_with = "crate::de::null_as_true")]
    pub is_custom: bool,
    #[serde(default)]
    pub github_repo_id: Option<i64>,
    #[serde(default, deserialize_with = "crate::de::null_as_default")]
    pub stars_count: u32,
    #[serde(default, deserialize_with = "crate::de::null_as_default")]
    pub forks_count: u32,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

fn default_true() -> bool {
    true
}

impl Record for Project {
    const TABLE: &'static str = "projects";

    fn id(&self) -> &RowId {
        &self.id
    }

    fn default_order() -> &'static [OrderBy] {
        const { &[OrderBy::asc("sort_order")] }
    }
}

/// Insert payload for a project.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NewProject {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub technologies: Vec<String>,
    pub is_featured: bool,
    pub status: ProjectStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
    pub is_custom: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_repo_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stars_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forks_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Partial update for a project. Only `Some` fields are sent.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technologies: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProjectStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stars_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forks_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl From<NewProject> for ProjectPatch {
    fn from(p: NewProject) -> Self {
        Self {
            title: Some(p.title),
            description: p.description,
            github_url: p.github_url,
            demo_url: p.demo_url,
            image_url: p.image_url,
            technologies: Some(p.technologies),
            is_featured: Some(p.is_featured),
            status: Some(p.status),
            sort_order: p.sort_order,
            stars_count: p.stars_count,
            forks_count: p.forks_count,
            language: p.language,
        }
    }
}
