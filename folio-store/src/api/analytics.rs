use crate::error::StoreResult;
use crate::query::Query;
use crate::table::{Table, TableStore};
use chrono::{DateTime, SecondsFormat, Utc};
use folio_types::{AnalyticsEvent, NewAnalyticsEvent};
use std::sync::Arc;

/// Append-only access to recorded analytics events.
#[derive(Clone)]
pub struct AnalyticsApi {
    table: Table<AnalyticsEvent>,
}

impl AnalyticsApi {
    pub fn new(store: Arc<dyn TableStore>) -> Self {
        Self {
            table: Table::new(store),
        }
    }

    pub async fn track(&self, event: &NewAnalyticsEvent) -> StoreResult<AnalyticsEvent> {
        self.table.create(event).await
    }

    /// Events recorded at or after `since`, newest first.
    pub async fn since(&self, since: DateTime<Utc>) -> StoreResult<Vec<AnalyticsEvent>> {
        self.table
            .select(
                Query::new().gte(
                    "created_at",
                    since.to_rfc3339_opts(SecondsFormat::Secs, true),
                ),
            )
            .await
    }

    pub async fn all(&self) -> StoreResult<Vec<AnalyticsEvent>> {
        self.table.all().await
    }
}
