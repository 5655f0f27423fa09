//! One data-access module per entity.
//!
//! Each module is a thin typed layer over [`Table`]: the shared CRUD comes
//! from [`EntityApi`], and entity-specific reads live on the concrete type.

mod analytics;
mod contact;
mod education;
mod experiences;
mod profiles;
mod projects;
mod skills;

pub use analytics::AnalyticsApi;
pub use contact::{ContactApi, MarkRead};
pub use education::EducationApi;
pub use experiences::ExperiencesApi;
pub use profiles::ProfilesApi;
pub use projects::ProjectsApi;
pub use skills::SkillsApi;

use crate::error::StoreResult;
use crate::table::Table;
use async_trait::async_trait;
use folio_types::{Record, RowId};
use serde::Serialize;

/// The list-and-mutate surface every synchronized collection needs.
#[async_trait]
pub trait EntityApi: Send + Sync + 'static {
    type Row: Record;
    type New: Serialize + Send + Sync;
    type Patch: Serialize + Send + Sync;

    fn table(&self) -> &Table<Self::Row>;

    /// The rows a collection shows, in display order.
    async fn get_all(&self) -> StoreResult<Vec<Self::Row>> {
        self.table().all().await
    }

    async fn create(&self, new: &Self::New) -> StoreResult<Self::Row> {
        self.table().create(new).await
    }

    async fn update(&self, id: &RowId, patch: &Self::Patch) -> StoreResult<Self::Row> {
        self.table().update(id, patch).await
    }

    async fn delete(&self, id: &RowId) -> StoreResult<()> {
        self.table().delete(id).await
    }
}
