//! Row types for the folio portfolio store.
//!
//! Every table the portfolio reads or writes has a typed row here, together
//! with the payloads used to insert and patch it. Rows are coerced on the way
//! in: missing or null columns fall back to documented defaults so callers
//! never have to branch on "maybe this field is absent".
//!
//! This crate does no I/O. The remote boundary lives in `folio-store`.

mod analytics;
mod contact;
mod de;
mod display;
mod education;
mod experience;
pub mod form;
mod id;
mod profile;
mod project;
mod record;
mod skill;

pub use analytics::{AnalyticsEvent, EventType, NewAnalyticsEvent};
pub use contact::{ContactMessage, NewContactMessage};
pub use display::{PRESENT, period_label};
pub use education::{DegreeType, Education, EducationPatch, NewEducation};
pub use experience::{Experience, ExperiencePatch, NewExperience};
pub use form::FormError;
pub use id::RowId;
pub use profile::{Profile, ProfileUpdate};
pub use project::{NewProject, Project, ProjectPatch, ProjectStatus};
pub use record::{OrderBy, Record};
pub use skill::{NewSkill, Skill, SkillCategory, SkillGroups, SkillPatch};
