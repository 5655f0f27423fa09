use super::analytics::AnalyticsTracker;
use crate::collection::{MutationOutcome, SyncedCollection};
use folio_store::{ContactApi, MarkRead, StoreError};
use folio_types::{ContactMessage, NewContactMessage, RowId};
use tracing::info;

/// The admin inbox, newest first.
pub type ContactInbox = SyncedCollection<ContactApi>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadFilter {
    #[default]
    All,
    Unread,
    Read,
}

impl ReadFilter {
    pub fn matches(self, message: &ContactMessage) -> bool {
        match self {
            Self::All => true,
            Self::Unread => !message.is_read,
            Self::Read => message.is_read,
        }
    }
}

impl SyncedCollection<ContactApi> {
    /// Flags one message as read. Other messages are untouched.
    pub async fn mark_as_read(&self, id: &RowId) -> MutationOutcome<ContactMessage> {
        self.update(id, &MarkRead { is_read: true }).await
    }

    pub fn unread_count(&self) -> usize {
        self.snapshot()
            .items
            .iter()
            .filter(|m| !m.is_read)
            .count()
    }

    pub fn filtered(&self, filter: ReadFilter) -> Vec<ContactMessage> {
        self.items()
            .into_iter()
            .filter(|m| filter.matches(m))
            .collect()
    }
}

/// The public contact form.
pub struct ContactForm {
    api: ContactApi,
    tracker: AnalyticsTracker,
    user_agent: Option<String>,
}

impl ContactForm {
    pub fn new(api: ContactApi, tracker: AnalyticsTracker, user_agent: Option<String>) -> Self {
        Self {
            api,
            tracker,
            user_agent,
        }
    }

    /// Sends the message. Name, email and message are required; a
    /// `contact_form_submit` event is recorded once the message is stored.
    pub async fn submit(&self, message: NewContactMessage) -> MutationOutcome<ContactMessage> {
        let message = message.normalized();
        for (field, value) in [
            ("name", &message.name),
            ("email", &message.email),
            ("message", &message.message),
        ] {
            if value.is_empty() {
                return MutationOutcome::failed(StoreError::Validation(format!(
                    "{field} is required"
                )));
            }
        }

        match self.api.submit(&message, self.user_agent.as_deref()).await {
            Ok(stored) => {
                info!(id = %stored.id, "contact message received");
                self.tracker.track_contact_form_submit();
                MutationOutcome::ok(stored)
            }
            Err(e) => MutationOutcome::failed(e),
        }
    }
}
