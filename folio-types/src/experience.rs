use crate::{OrderBy, Record, RowId, period_label};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A work or volunteering entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub id: RowId,
    #[serde(default, deserialize_with = "crate::de::null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "crate::de::null_as_default")]
    pub organization: String,
    /// Bullet points, in display order.
    #[serde(default, deserialize_with = "crate::de::null_as_default")]
    pub descriptions: Vec<String>,
    #[serde(default, deserialize_with = "crate::de::opt_date_lenient")]
    pub start_date: Option<NaiveDate>,
    /// Stored end date. Use [`Experience::effective_end_date`] for display.
    #[serde(default, deserialize_with = "crate::de::opt_date_lenient")]
    pub end_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "crate::de::null_as_default")]
    pub is_current: bool,
}

impl Experience {
    /// The end date as it should be shown: always `None` while current.
    pub fn effective_end_date(&self) -> Option<NaiveDate> {
        if self.is_current { None } else { self.end_date }
    }

    /// "2022 – Present", "2021 – 2023", or with "N/A" for unknown years.
    pub fn period(&self) -> String {
        let start = self
            .start_date
            .map(|d| d.year().to_string())
            .unwrap_or_else(|| "N/A".to_string());
        period_label(start, self.effective_end_date().map(|d| d.year()), self.is_current)
    }
}

impl Record for Experience {
    const TABLE: &'static str = "experiences";

    fn id(&self) -> &RowId {
        &self.id
    }

    fn default_order() -> &'static [OrderBy] {
        const { &[OrderBy::desc("start_date")] }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NewExperience {
    pub title: String,
    pub organization: String,
    pub descriptions: Vec<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub is_current: bool,
}

/// Partial update for an experience.
///
/// `end_date` is doubly optional: `Some(None)` clears the stored date.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperiencePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descriptions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<Option<NaiveDate>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_current: Option<bool>,
}

impl From<NewExperience> for ExperiencePatch {
    fn from(e: NewExperience) -> Self {
        Self {
            title: Some(e.title),
            organization: Some(e.organization),
            descriptions: Some(e.descriptions),
            start_date: e.start_date,
            end_date: Some(e.end_date),
            is_current: Some(e.is_current),
        }
    }
}
