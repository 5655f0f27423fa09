use super::EntityApi;
use crate::table::{Table, TableStore};
use folio_types::{Experience, ExperiencePatch, NewExperience};
use std::sync::Arc;

#[derive(Clone)]
pub struct ExperiencesApi {
    table: Table<Experience>,
}

impl ExperiencesApi {
    pub fn new(store: Arc<dyn TableStore>) -> Self {
        Self {
            table: Table::new(store),
        }
    }
}

impl EntityApi for ExperiencesApi {
    type Row = Experience;
    type New = NewExperience;
    type Patch = ExperiencePatch;

    fn table(&self) -> &Table<Experience> {
        &self.table
    }
}
