//! Per-entity views. Each is a [`SyncedCollection`] over the entity's
//! data-access module, plus whatever the screens showing it need.
//!
//! [`SyncedCollection`]: crate::SyncedCollection

mod analytics;
mod contact;
mod education;
mod experiences;
mod profile;
mod projects;
mod skills;

pub use analytics::{AnalyticsDashboard, AnalyticsReport, AnalyticsStats, AnalyticsTracker, TimeRange};
pub use contact::{ContactForm, ContactInbox, ReadFilter};
pub use education::{EducationView, default_education};
pub use experiences::ExperiencesView;
pub use profile::{ProfileView, default_profile};
pub use projects::{ImportReport, ProjectsView};
pub use skills::{SkillsView, default_skills};
