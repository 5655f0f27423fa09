use super::EntityApi;
use crate::error::{StoreError, StoreResult};
use crate::query::Query;
use crate::table::{Table, TableStore};
use async_trait::async_trait;
use folio_types::{Profile, ProfileUpdate, RowId};
use serde::Serialize;
use std::sync::Arc;

#[derive(Clone)]
pub struct ProfilesApi {
    table: Table<Profile>,
}

/// Upsert body: the update plus the owner id it applies to.
#[derive(Serialize)]
struct ProfileRow<'a> {
    id: &'a RowId,
    #[serde(flatten)]
    update: &'a ProfileUpdate,
}

impl ProfilesApi {
    pub fn new(store: Arc<dyn TableStore>) -> Self {
        Self {
            table: Table::new(store),
        }
    }

    /// The profile of `user_id`, or `None` when the owner has not saved one.
    pub async fn get(&self, user_id: &RowId) -> StoreResult<Option<Profile>> {
        match self.table.get(user_id).await {
            Err(StoreError::NotFound(_)) => Ok(None),
            other => other,
        }
    }

    /// The single public profile.
    pub async fn first(&self) -> StoreResult<Option<Profile>> {
        let rows = self.table.select(Query::new().limit(1)).await?;
        Ok(rows.into_iter().next())
    }

    /// Creates or merges into the profile row keyed by `user_id`.
    pub async fn upsert(&self, user_id: &RowId, update: &ProfileUpdate) -> StoreResult<Profile> {
        self.table
            .upsert(&ProfileRow {
                id: user_id,
                update,
            })
            .await
    }
}

/// A profile collection holds at most the one public row.
#[async_trait]
impl EntityApi for ProfilesApi {
    type Row = Profile;
    type New = ProfileUpdate;
    type Patch = ProfileUpdate;

    fn table(&self) -> &Table<Profile> {
        &self.table
    }

    async fn get_all(&self) -> StoreResult<Vec<Profile>> {
        Ok(self.first().await?.into_iter().collect())
    }
}
