//! Admin form input normalization.
//!
//! Forms hold raw text as typed by the admin. Converting a form into an insert
//! payload trims text, parses numbers and dates, and splits list fields. This
//! is the only validation done before the remote store sees the data.

use crate::{
    DegreeType, NewEducation, NewExperience, NewProject, NewSkill, ProjectStatus, SkillCategory,
};
use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("{field} is required")]
    Required { field: &'static str },

    #[error("{field}: `{value}` is not a valid year")]
    InvalidYear { field: &'static str, value: String },

    #[error("{field}: `{value}` is not a valid date (expected YYYY-MM-DD)")]
    InvalidDate { field: &'static str, value: String },

    #[error("gpa: `{0}` is not a number")]
    InvalidGpa(String),

    #[error("gpa must be between 0.0 and 4.0, got {0}")]
    GpaOutOfRange(f64),
}

pub type FormResult<T> = Result<T, FormError>;

/// Splits on `sep`, trims each piece and drops empty ones. Order is kept.
pub fn split_list(text: &str, sep: char) -> Vec<String> {
    text.split(sep)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// One entry per non-blank line.
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Trimmed text, `None` when blank.
pub fn optional_text(text: &str) -> Option<String> {
    let t = text.trim();
    (!t.is_empty()).then(|| t.to_string())
}

pub fn required_text(text: &str, field: &'static str) -> FormResult<String> {
    optional_text(text).ok_or(FormError::Required { field })
}

pub fn parse_year(text: &str, field: &'static str) -> FormResult<Option<i32>> {
    let t = text.trim();
    if t.is_empty() {
        return Ok(None);
    }
    t.parse::<i32>().map(Some).map_err(|_| FormError::InvalidYear {
        field,
        value: t.to_string(),
    })
}

pub fn parse_date(text: &str, field: &'static str) -> FormResult<Option<NaiveDate>> {
    let t = text.trim();
    if t.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(t, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| FormError::InvalidDate {
            field,
            value: t.to_string(),
        })
}

pub fn parse_gpa(text: &str) -> FormResult<Option<f64>> {
    let t = text.trim();
    if t.is_empty() {
        return Ok(None);
    }
    let gpa: f64 = t.parse().map_err(|_| FormError::InvalidGpa(t.to_string()))?;
    if !(0.0..=4.0).contains(&gpa) {
        return Err(FormError::GpaOutOfRange(gpa));
    }
    Ok(Some(gpa))
}

/// Project editor. `technologies` is comma-separated.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProjectForm {
    pub title: String,
    pub description: String,
    pub github_url: String,
    pub demo_url: String,
    pub image_url: String,
    pub technologies: String,
    pub is_featured: bool,
    pub status: ProjectStatus,
}

impl ProjectForm {
    pub fn into_new(self) -> FormResult<NewProject> {
        Ok(NewProject {
            title: required_text(&self.title, "title")?,
            description: optional_text(&self.description),
            github_url: optional_text(&self.github_url),
            demo_url: optional_text(&self.demo_url),
            image_url: optional_text(&self.image_url),
            technologies: split_list(&self.technologies, ','),
            is_featured: self.is_featured,
            status: self.status,
            is_custom: true,
            ..NewProject::default()
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SkillForm {
    pub name: String,
    pub category: SkillCategory,
}

impl SkillForm {
    pub fn into_new(self) -> FormResult<NewSkill> {
        Ok(NewSkill {
            name: required_text(&self.name, "name")?,
            category: self.category,
        })
    }
}

/// Experience editor. `descriptions` holds one bullet per line.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExperienceForm {
    pub title: String,
    pub organization: String,
    pub descriptions: String,
    pub start_date: String,
    pub end_date: String,
    pub is_current: bool,
}

impl ExperienceForm {
    pub fn into_new(self) -> FormResult<NewExperience> {
        let end_date = if self.is_current {
            None
        } else {
            parse_date(&self.end_date, "end_date")?
        };
        Ok(NewExperience {
            title: required_text(&self.title, "title")?,
            organization: required_text(&self.organization, "organization")?,
            descriptions: split_lines(&self.descriptions),
            start_date: parse_date(&self.start_date, "start_date")?,
            end_date,
            is_current: self.is_current,
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EducationForm {
    pub university: String,
    pub department: String,
    pub start_year: String,
    pub end_year: String,
    pub current_year: String,
    pub gpa: String,
    pub is_current: bool,
    pub degree: DegreeType,
    pub is_visible: bool,
}

impl Default for EducationForm {
    fn default() -> Self {
        Self {
            university: String::new(),
            department: String::new(),
            start_year: String::new(),
            end_year: String::new(),
            current_year: String::new(),
            gpa: String::new(),
            is_current: false,
            degree: DegreeType::Bachelor,
            is_visible: true,
        }
    }
}

impl EducationForm {
    pub fn into_new(self) -> FormResult<NewEducation> {
        let end_year = if self.is_current {
            None
        } else {
            parse_year(&self.end_year, "end_year")?
        };
        Ok(NewEducation {
            university: required_text(&self.university, "university")?,
            department: required_text(&self.department, "department")?,
            start_year: parse_year(&self.start_year, "start_year")?,
            end_year,
            current_year: optional_text(&self.current_year),
            gpa: parse_gpa(&self.gpa)?,
            is_current: self.is_current,
            degree: self.degree,
            is_visible: self.is_visible,
            sort_order: None,
        })
    }
}
