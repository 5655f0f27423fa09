use crate::collection::SyncedCollection;
use folio_store::ExperiencesApi;

/// Work history, newest first. Nothing is shown when loading fails.
pub type ExperiencesView = SyncedCollection<ExperiencesApi>;
