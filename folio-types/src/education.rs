use crate::{OrderBy, Record, RowId, period_label};
use serde::{Deserialize, Serialize};

/// Degree or programme kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DegreeType {
    #[serde(rename = "High School")]
    HighSchool,
    Associate,
    #[default]
    Bachelor,
    Master,
    #[serde(rename = "PhD")]
    PhD,
    Certificate,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub id: RowId,
    #[serde(default, deserialize_with = "crate::de::null_as_default")]
    pub university: String,
    #[serde(default, deserialize_with = "crate::de::null_as_default")]
    pub department: String,
    #[serde(default, deserialize_with = "crate::de::opt_i32_from_str_or_num")]
    pub start_year: Option<i32>,
    /// Stored end year. Use [`Education::effective_end_year`] for display.
    #[serde(default, deserialize_with = "crate::de::opt_i32_from_str_or_num")]
    pub end_year: Option<i32>,
    /// Free text such as "4th Year".
    #[serde(default)]
    pub current_year: Option<String>,
    /// Grade point average on a 0.0–4.0 scale.
    #[serde(default, deserialize_with = "crate::de::opt_f64_from_str_or_num")]
    pub gpa: Option<f64>,
    #[serde(default, deserialize_with = "crate::de::null_as_default")]
    pub is_current: bool,
    #[serde(rename = "type", default, deserialize_with = "crate::de::null_as_default")]
    pub degree: DegreeType,
    #[serde(default = "default_visible", deserialize_with = "crate::de::null_as_true")]
    pub is_visible: bool,
    #[serde(default, deserialize_with = "crate::de::null_as_default")]
    pub sort_order: i32,
}

fn default_visible() -> bool {
    true
}

impl Education {
    pub fn effective_end_year(&self) -> Option<i32> {
        if self.is_current { None } else { self.end_year }
    }

    /// "2023 – Present" for a current entry, "2019 – 2023" otherwise.
    pub fn period(&self) -> String {
        let start = self
            .start_year
            .map(|y| y.to_string())
            .unwrap_or_else(|| "N/A".to_string());
        period_label(start, self.effective_end_year(), self.is_current)
    }
}

impl Record for Education {
    const TABLE: &'static str = "education";

    fn id(&self) -> &RowId {
        &self.id
    }

    fn default_order() -> &'static [OrderBy] {
        const { &[OrderBy::asc("sort_order"), OrderBy::desc("start_year")] }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NewEducation {
    pub university: String,
    pub department: String,
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
    pub current_year: Option<String>,
    pub gpa: Option<f64>,
    pub is_current: bool,
    #[serde(rename = "type")]
    pub degree: DegreeType,
    pub is_visible: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub university: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_year: Option<Option<i32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_year: Option<Option<i32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_year: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpa: Option<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_current: Option<bool>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub degree: Option<DegreeType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_visible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
}

impl From<NewEducation> for EducationPatch {
    fn from(e: NewEducation) -> Self {
        Self {
            university: Some(e.university),
            department: Some(e.department),
            start_year: Some(e.start_year),
            end_year: Some(e.end_year),
            current_year: Some(e.current_year),
            gpa: Some(e.gpa),
            is_current: Some(e.is_current),
            degree: Some(e.degree),
            is_visible: Some(e.is_visible),
            sort_order: e.sort_order,
        }
    }
}
