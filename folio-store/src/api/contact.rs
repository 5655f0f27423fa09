use super::EntityApi;
use crate::error::StoreResult;
use crate::table::{Table, TableStore};
use async_trait::async_trait;
use folio_types::{ContactMessage, NewContactMessage, RowId};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Patch applied when the admin opens a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkRead {
    pub is_read: bool,
}

#[derive(Serialize)]
struct ContactRow<'a> {
    #[serde(flatten)]
    message: &'a NewContactMessage,
    user_agent: Option<&'a str>,
    ip_address: Option<&'a str>,
    is_read: bool,
}

#[derive(Clone)]
pub struct ContactApi {
    table: Table<ContactMessage>,
    user_agent: Option<String>,
}

impl ContactApi {
    /// `user_agent` is stamped on messages created through [`EntityApi::create`].
    pub fn new(store: Arc<dyn TableStore>, user_agent: Option<String>) -> Self {
        Self {
            table: Table::new(store),
            user_agent,
        }
    }

    /// Stores a visitor's message. Fields are trimmed; the ip address is
    /// never collected.
    pub async fn submit(
        &self,
        message: &NewContactMessage,
        user_agent: Option<&str>,
    ) -> StoreResult<ContactMessage> {
        let message = message.clone().normalized();
        self.table
            .create(&ContactRow {
                message: &message,
                user_agent,
                ip_address: None,
                is_read: false,
            })
            .await
    }

    /// The inbox, newest first.
    pub async fn messages(&self) -> StoreResult<Vec<ContactMessage>> {
        self.table.all().await
    }

    pub async fn mark_as_read(&self, id: &RowId) -> StoreResult<ContactMessage> {
        self.table.update(id, &MarkRead { is_read: true }).await
    }
}

#[async_trait]
impl EntityApi for ContactApi {
    type Row = ContactMessage;
    type New = NewContactMessage;
    type Patch = MarkRead;

    fn table(&self) -> &Table<ContactMessage> {
        &self.table
    }

    async fn create(&self, new: &NewContactMessage) -> StoreResult<ContactMessage> {
        self.submit(new, self.user_agent.as_deref()).await
    }
}
