//! The synchronized collection every entity view is built on.

use crate::cancel::CancelToken;
use crate::gate::AdminGate;
use crate::list;
use folio_store::{DeleteOutcome, EntityApi, ErrorKind, Outcome, StoreError};
use folio_types::{Record, RowId};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// Where a collection is in its load cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    /// Constructed, nothing requested yet.
    #[default]
    Idle,
    Loading,
    Ready,
    /// The last load failed; items hold the fallback or nothing.
    Failed,
}

/// What observers see: the rows, the load state and the last load error.
#[derive(Debug, Clone)]
pub struct Snapshot<E> {
    pub state: LoadState,
    pub items: Vec<E>,
    pub error: Option<String>,
}

impl<E> Default for Snapshot<E> {
    fn default() -> Self {
        Self {
            state: LoadState::Idle,
            items: Vec::new(),
            error: None,
        }
    }
}

/// Result of a mutation issued through a view.
#[derive(Debug, Clone, PartialEq)]
pub struct MutationOutcome<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
    pub kind: Option<ErrorKind>,
}

impl<T> MutationOutcome<T> {
    pub fn ok(data: T) -> Self {
        Self::from(Outcome::<T>::from(Ok::<T, StoreError>(data)))
    }

    pub fn failed(err: StoreError) -> Self {
        Self::from(Outcome::<T>::from(err))
    }
}

impl<T> From<Outcome<T>> for MutationOutcome<T> {
    fn from(outcome: Outcome<T>) -> Self {
        Self {
            success: outcome.is_ok(),
            data: outcome.data,
            error: outcome.error,
            kind: outcome.kind,
        }
    }
}

impl From<DeleteOutcome> for MutationOutcome<()> {
    fn from(outcome: DeleteOutcome) -> Self {
        Self {
            success: outcome.success,
            data: outcome.success.then_some(()),
            error: outcome.error,
            kind: outcome.kind,
        }
    }
}

/// A local copy of one remote table.
///
/// Loads are explicit. A failed load installs the fallback rows when one is
/// configured and empties the collection otherwise. Successful mutations are
/// applied locally without a refetch; failed ones leave the snapshot alone.
/// After [`close`](Self::close) nothing the remote store returns is applied.
pub struct SyncedCollection<A: EntityApi> {
    api: Arc<A>,
    fallback: Option<Vec<A::Row>>,
    gate: Option<Arc<AdminGate>>,
    state: watch::Sender<Snapshot<A::Row>>,
    cancel: CancelToken,
}

impl<A: EntityApi> SyncedCollection<A> {
    pub fn new(api: A) -> Self {
        Self::from_shared(Arc::new(api))
    }

    pub fn from_shared(api: Arc<A>) -> Self {
        let (state, _rx) = watch::channel(Snapshot::default());
        Self {
            api,
            fallback: None,
            gate: None,
            state,
            cancel: CancelToken::new(),
        }
    }

    /// Rows shown when a load fails.
    pub fn with_fallback(mut self, rows: Vec<A::Row>) -> Self {
        self.fallback = Some(rows);
        self
    }

    /// Mutations are refused unless the gate has a signed-in admin.
    pub fn with_admin_gate(mut self, gate: Arc<AdminGate>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn api(&self) -> &Arc<A> {
        &self.api
    }

    pub fn gate(&self) -> Option<&Arc<AdminGate>> {
        self.gate.as_ref()
    }

    fn table(&self) -> &'static str {
        <A::Row as Record>::TABLE
    }

    // ── Observation ──

    pub fn snapshot(&self) -> Snapshot<A::Row> {
        self.state.borrow().clone()
    }

    pub fn items(&self) -> Vec<A::Row> {
        self.state.borrow().items.clone()
    }

    pub fn state(&self) -> LoadState {
        self.state.borrow().state
    }

    pub fn is_loading(&self) -> bool {
        self.state() == LoadState::Loading
    }

    /// Message of the last failed load, cleared by the next successful one.
    pub fn error(&self) -> Option<String> {
        self.state.borrow().error.clone()
    }

    pub fn len(&self) -> usize {
        self.state.borrow().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Change notifications. Dropping the receiver unsubscribes.
    pub fn subscribe(&self) -> watch::Receiver<Snapshot<A::Row>> {
        self.state.subscribe()
    }

    pub fn cancel_token(&self) -> &CancelToken {
        &self.cancel
    }

    // ── Lifecycle ──

    /// Stops the collection: an in-flight load is abandoned and no later
    /// result touches the snapshot.
    pub fn close(&self) {
        if !self.cancel.is_cancelled() {
            debug!("[SYNC] {} view closed", self.table());
            self.cancel.cancel();
        }
    }

    pub fn is_closed(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Fetches every row and replaces the local copy. Returns the state the
    /// collection ends in.
    pub async fn load(&self) -> LoadState {
        if self.is_closed() {
            return self.state();
        }

        let previous = self.state();
        self.state.send_modify(|s| s.state = LoadState::Loading);

        let result = tokio::select! {
            _ = self.cancel.cancelled() => {
                debug!("[SYNC] {} load abandoned", self.table());
                self.state.send_modify(|s| s.state = previous);
                return previous;
            }
            result = self.api.get_all() => result,
        };

        match result {
            Ok(rows) => {
                info!("[SYNC] {} loaded {} rows", self.table(), rows.len());
                self.state.send_modify(|s| {
                    s.items = rows;
                    s.state = LoadState::Ready;
                    s.error = None;
                });
            }
            Err(e) => {
                let items = match &self.fallback {
                    Some(rows) => {
                        warn!("[SYNC] {} load failed, showing fallback: {e}", self.table());
                        rows.clone()
                    }
                    None => {
                        warn!("[SYNC] {} load failed: {e}", self.table());
                        Vec::new()
                    }
                };
                self.state.send_modify(|s| {
                    s.items = items;
                    s.state = LoadState::Failed;
                    s.error = Some(e.to_string());
                });
            }
        }

        self.state()
    }

    /// Same as [`load`](Self::load); named for callers reacting to a change
    /// made elsewhere.
    pub async fn refetch(&self) -> LoadState {
        self.load().await
    }

    // ── Mutations ──

    pub async fn add(&self, new: &A::New) -> MutationOutcome<A::Row> {
        if let Err(e) = self.authorize().await {
            return MutationOutcome::failed(e);
        }
        match self.api.create(new).await {
            Ok(row) => {
                self.apply(|items| list::insert_front(items, row.clone()));
                MutationOutcome::ok(row)
            }
            Err(e) => MutationOutcome::failed(e),
        }
    }

    pub async fn update(&self, id: &RowId, patch: &A::Patch) -> MutationOutcome<A::Row> {
        if let Err(e) = self.authorize().await {
            return MutationOutcome::failed(e);
        }
        match self.api.update(id, patch).await {
            Ok(row) => {
                self.apply(|items| {
                    if !list::replace(items, id, row.clone()) {
                        debug!("[SYNC] {} row {id} updated but not held locally", self.table());
                    }
                });
                MutationOutcome::ok(row)
            }
            Err(e) => MutationOutcome::failed(e),
        }
    }

    pub async fn remove(&self, id: &RowId) -> MutationOutcome<()> {
        if let Err(e) = self.authorize().await {
            return MutationOutcome::failed(e);
        }
        let outcome = DeleteOutcome::from(self.api.delete(id).await);
        if outcome.success {
            self.apply(|items| {
                list::remove(items, id);
            });
        }
        outcome.into()
    }

    /// Fails with `AdminRequired` when a gate is attached and no admin is
    /// signed in.
    pub(crate) async fn authorize(&self) -> Result<(), StoreError> {
        match &self.gate {
            Some(gate) => gate.require_admin().await.map(|_| ()),
            None => Ok(()),
        }
    }

    /// Edits the local rows unless the collection is closed.
    pub(crate) fn apply(&self, edit: impl FnOnce(&mut Vec<A::Row>)) {
        if self.is_closed() {
            debug!("[SYNC] {} closed, dropping late result", self.table());
            return;
        }
        self.state.send_modify(|s| edit(&mut s.items));
    }
}

impl<A: EntityApi> Drop for SyncedCollection<A> {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
