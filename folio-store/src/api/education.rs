use super::EntityApi;
use crate::error::StoreResult;
use crate::query::Query;
use crate::table::{Table, TableStore};
use folio_types::{Education, EducationPatch, NewEducation};
use std::sync::Arc;

#[derive(Clone)]
pub struct EducationApi {
    table: Table<Education>,
}

impl EducationApi {
    pub fn new(store: Arc<dyn TableStore>) -> Self {
        Self {
            table: Table::new(store),
        }
    }

    /// Entries shown on the public page.
    pub async fn visible(&self) -> StoreResult<Vec<Education>> {
        self.table.select(Query::new().eq("is_visible", true)).await
    }
}

impl EntityApi for EducationApi {
    type Row = Education;
    type New = NewEducation;
    type Patch = EducationPatch;

    fn table(&self) -> &Table<Education> {
        &self.table
    }
}
