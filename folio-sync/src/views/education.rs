use crate::collection::SyncedCollection;
use folio_store::EducationApi;
use folio_types::{DegreeType, Education, RowId};

pub type EducationView = SyncedCollection<EducationApi>;

/// The entry shown when the remote list cannot be loaded.
pub fn default_education() -> Vec<Education> {
    vec![Education {
        id: RowId::from(1_i64),
        university: "Sakarya University".into(),
        department: "Computer Engineering".into(),
        start_year: Some(2023),
        end_year: None,
        current_year: Some("4th Year".into()),
        gpa: Some(3.52),
        is_current: true,
        degree: DegreeType::Bachelor,
        is_visible: true,
        sort_order: 0,
    }]
}

impl SyncedCollection<EducationApi> {
    pub fn with_default_fallback(self) -> Self {
        self.with_fallback(default_education())
    }

    /// Entries the public page shows.
    pub fn visible(&self) -> Vec<Education> {
        self.items().into_iter().filter(|e| e.is_visible).collect()
    }
}
