//! The table seam and the typed table built on top of it.

use crate::error::{StoreError, StoreResult};
use crate::query::Query;
use async_trait::async_trait;
use folio_types::{Record, RowId};
use serde::Serialize;
use serde_json::Value;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::{debug, warn};

/// Untyped row access to a remote table store.
///
/// Every write returns the row as stored, so callers see server-assigned
/// ids and defaults.
#[async_trait]
pub trait TableStore: Send + Sync {
    async fn select(&self, table: &str, query: &Query) -> StoreResult<Vec<Value>>;

    async fn insert(&self, table: &str, row: Value) -> StoreResult<Value>;

    /// Fails with `NotFound` when no row has `id`.
    async fn update(&self, table: &str, id: &RowId, patch: Value) -> StoreResult<Value>;

    /// Fails with `NotFound` when no row has `id`.
    async fn delete(&self, table: &str, id: &RowId) -> StoreResult<()>;

    /// Insert, or merge into the row with the same primary key.
    async fn upsert(&self, table: &str, row: Value) -> StoreResult<Value>;
}

/// Typed access to the table holding `E`.
pub struct Table<E> {
    store: Arc<dyn TableStore>,
    _row: PhantomData<fn() -> E>,
}

impl<E> Clone for Table<E> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            _row: PhantomData,
        }
    }
}

impl<E: Record> Table<E> {
    pub fn new(store: Arc<dyn TableStore>) -> Self {
        Self {
            store,
            _row: PhantomData,
        }
    }

    pub fn store(&self) -> &Arc<dyn TableStore> {
        &self.store
    }

    /// Every row, in the entity's server order.
    pub async fn all(&self) -> StoreResult<Vec<E>> {
        self.select(Query::new().order(E::default_order())).await
    }

    /// Rows matching `query`. The entity's default order is used when the
    /// query names none.
    pub async fn select(&self, query: Query) -> StoreResult<Vec<E>> {
        let query = if query.ordering().is_empty() {
            query.order(E::default_order())
        } else {
            query
        };
        debug!(table = E::TABLE, "select");
        let rows = self
            .store
            .select(E::TABLE, &query)
            .await
            .inspect_err(|e| log_failure(E::TABLE, "select", e))?;
        rows.into_iter().map(decode).collect()
    }

    pub async fn get(&self, id: &RowId) -> StoreResult<Option<E>> {
        let rows = self.select(Query::new().eq("id", id_value(id)).limit(1)).await?;
        Ok(rows.into_iter().next())
    }

    pub async fn create<P: Serialize + Sync>(&self, payload: &P) -> StoreResult<E> {
        debug!(table = E::TABLE, "insert");
        let row = self
            .store
            .insert(E::TABLE, serde_json::to_value(payload)?)
            .await
            .inspect_err(|e| log_failure(E::TABLE, "insert", e))?;
        decode(row)
    }

    pub async fn update<P: Serialize + Sync>(&self, id: &RowId, patch: &P) -> StoreResult<E> {
        debug!(table = E::TABLE, %id, "update");
        let row = self
            .store
            .update(E::TABLE, id, serde_json::to_value(patch)?)
            .await
            .inspect_err(|e| log_failure(E::TABLE, "update", e))?;
        decode(row)
    }

    pub async fn delete(&self, id: &RowId) -> StoreResult<()> {
        debug!(table = E::TABLE, %id, "delete");
        self.store
            .delete(E::TABLE, id)
            .await
            .inspect_err(|e| log_failure(E::TABLE, "delete", e))
    }

    pub async fn upsert<P: Serialize + Sync>(&self, payload: &P) -> StoreResult<E> {
        debug!(table = E::TABLE, "upsert");
        let row = self
            .store
            .upsert(E::TABLE, serde_json::to_value(payload)?)
            .await
            .inspect_err(|e| log_failure(E::TABLE, "upsert", e))?;
        decode(row)
    }
}

fn decode<E: Record>(row: Value) -> StoreResult<E> {
    serde_json::from_value(row).map_err(StoreError::from)
}

/// The id as the store expects it in a filter.
pub(crate) fn id_value(id: &RowId) -> Value {
    serde_json::to_value(id).unwrap_or_else(|_| Value::String(id.to_string()))
}

fn log_failure(table: &str, op: &str, e: &StoreError) {
    warn!(table, op, kind = ?e.kind(), "remote store call failed: {e}");
}
