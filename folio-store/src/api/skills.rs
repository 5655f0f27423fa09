use super::EntityApi;
use crate::error::StoreResult;
use crate::query::Query;
use crate::table::{Table, TableStore};
use folio_types::{NewSkill, OrderBy, Skill, SkillCategory, SkillPatch};
use std::sync::Arc;

#[derive(Clone)]
pub struct SkillsApi {
    table: Table<Skill>,
}

impl SkillsApi {
    pub fn new(store: Arc<dyn TableStore>) -> Self {
        Self {
            table: Table::new(store),
        }
    }

    /// Skills in one category, by name.
    pub async fn by_category(&self, category: SkillCategory) -> StoreResult<Vec<Skill>> {
        self.table
            .select(
                Query::new()
                    .eq("category", category.as_str())
                    .order(&[OrderBy::asc("name")]),
            )
            .await
    }
}

impl EntityApi for SkillsApi {
    type Row = Skill;
    type New = NewSkill;
    type Patch = SkillPatch;

    fn table(&self) -> &Table<Skill> {
        &self.table
    }
}
