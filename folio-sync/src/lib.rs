//! View-state synchronization for the folio portfolio.
//!
//! Every screen that lists an entity holds a [`SyncedCollection`]: a local
//! copy of one remote table that loads on demand, applies successful writes
//! in place, falls back to bundled content when the remote store is down,
//! and stops accepting results once closed. The per-entity views in
//! [`views`] are instantiations of it plus entity-specific helpers.

pub mod cancel;
pub mod collection;
pub mod gate;
mod list;
pub mod views;

pub use cancel::CancelToken;
pub use collection::{LoadState, MutationOutcome, Snapshot, SyncedCollection};
pub use gate::AdminGate;
pub use views::{
    AnalyticsDashboard, AnalyticsReport, AnalyticsStats, AnalyticsTracker, ContactForm,
    ContactInbox, EducationView, ExperiencesView, ImportReport, ProfileView, ProjectsView,
    ReadFilter, SkillsView, TimeRange,
};
