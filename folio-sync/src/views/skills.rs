use crate::collection::SyncedCollection;
use folio_store::SkillsApi;
use folio_types::{RowId, Skill, SkillCategory, SkillGroups};

pub type SkillsView = SyncedCollection<SkillsApi>;

const FRONTEND: &[&str] = &[
    "React + Vite",
    "Angular",
    "TypeScript",
    "JavaScript",
    "TailwindCSS",
    "Bootstrap",
];
const BACKEND: &[&str] = &[".Net", "Asp.net/WebApi", "Sql", "Entity Framework"];
const OTHER: &[&str] = &[
    "Python",
    "C++",
    "C#",
    "Java",
    "Git",
    "GitHub",
    "Linux",
    "Blender Software",
    "CNN training",
    "YOLO",
];

/// Skills shown when the remote list cannot be loaded. Ids are
/// `fallback-<name>`.
pub fn default_skills() -> Vec<Skill> {
    [
        (SkillCategory::Frontend, FRONTEND),
        (SkillCategory::Backend, BACKEND),
        (SkillCategory::Other, OTHER),
    ]
    .into_iter()
    .flat_map(|(category, names)| {
        names.iter().map(move |name| Skill {
            id: RowId::new(format!("fallback-{name}")),
            name: (*name).to_string(),
            category,
        })
    })
    .collect()
}

impl SyncedCollection<SkillsApi> {
    pub fn with_default_fallback(self) -> Self {
        self.with_fallback(default_skills())
    }

    /// Skill names per category, in collection order.
    pub fn grouped(&self) -> SkillGroups {
        SkillGroups::from_skills(&self.snapshot().items)
    }

    pub fn by_category(&self, category: SkillCategory) -> Vec<Skill> {
        self.items()
            .into_iter()
            .filter(|s| s.category == category)
            .collect()
    }
}
