use crate::{OrderBy, Record, RowId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Grouping used on the about page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    #[default]
    Frontend,
    Backend,
    Other,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 3] = [Self::Frontend, Self::Backend, Self::Other];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Frontend => "frontend",
            Self::Backend => "backend",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub id: RowId,
    pub name: String,
    #[serde(default, deserialize_with = "crate::de::null_as_default")]
    pub category: SkillCategory,
}

impl Record for Skill {
    const TABLE: &'static str = "skills";

    fn id(&self) -> &RowId {
        &self.id
    }

    fn default_order() -> &'static [OrderBy] {
        const { &[OrderBy::asc("category"), OrderBy::asc("name")] }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSkill {
    pub name: String,
    pub category: SkillCategory,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<SkillCategory>,
}

/// Skill names bucketed by category, each bucket in input order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGroups {
    pub frontend: Vec<String>,
    pub backend: Vec<String>,
    pub other: Vec<String>,
}

impl SkillGroups {
    pub fn from_skills(skills: &[Skill]) -> Self {
        let mut groups = Self::default();
        for skill in skills {
            groups.bucket_mut(skill.category).push(skill.name.clone());
        }
        groups
    }

    pub fn get(&self, category: SkillCategory) -> &[String] {
        match category {
            SkillCategory::Frontend => &self.frontend,
            SkillCategory::Backend => &self.backend,
            SkillCategory::Other => &self.other,
        }
    }

    fn bucket_mut(&mut self, category: SkillCategory) -> &mut Vec<String> {
        match category {
            SkillCategory::Frontend => &mut self.frontend,
            SkillCategory::Backend => &mut self.backend,
            SkillCategory::Other => &mut self.other,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.frontend.is_empty() && self.backend.is_empty() && self.other.is_empty()
    }
}
