//! In-memory table store and authenticator for view tests.

#![allow(dead_code)]

use async_trait::async_trait;
use folio_store::query::value_text;
use folio_store::{Authenticator, Filter, Query, Session, StoreError, StoreResult, TableStore};
use folio_types::RowId;
use serde_json::Value;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering as AtomicOrdering};
use std::time::Duration;

/// Tables held as JSON rows. Integer ids are assigned on insert.
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<HashMap<String, Vec<Value>>>,
    next_id: AtomicI64,
    calls: AtomicUsize,
    failure: Mutex<Option<fn() -> StoreError>>,
    select_delay: Mutex<Option<Duration>>,
}

pub fn transport_down() -> StoreError {
    StoreError::Transport("connection refused".into())
}

pub fn policy_denied() -> StoreError {
    StoreError::Forbidden("new row violates row-level security policy".into())
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            next_id: AtomicI64::new(1000),
            ..Self::default()
        }
    }

    pub fn with_rows(self, table: &str, rows: Vec<Value>) -> Self {
        self.tables
            .lock()
            .unwrap()
            .insert(table.to_string(), rows);
        self
    }

    /// Every call fails with `make()` until [`recover`](Self::recover).
    pub fn fail_with(&self, make: fn() -> StoreError) {
        *self.failure.lock().unwrap() = Some(make);
    }

    pub fn recover(&self) {
        *self.failure.lock().unwrap() = None;
    }

    pub fn delay_selects(&self, delay: Duration) {
        *self.select_delay.lock().unwrap() = Some(delay);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(AtomicOrdering::SeqCst)
    }

    pub fn rows(&self, table: &str) -> Vec<Value> {
        self.tables
            .lock()
            .unwrap()
            .get(table)
            .cloned()
            .unwrap_or_default()
    }

    fn enter(&self) -> StoreResult<()> {
        self.calls.fetch_add(1, AtomicOrdering::SeqCst);
        match *self.failure.lock().unwrap() {
            Some(make) => Err(make()),
            None => Ok(()),
        }
    }
}

fn row_id(row: &Value) -> String {
    value_text(&row["id"])
}

fn compare(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Null, _) => Ordering::Less,
        (_, Value::Null) => Ordering::Greater,
        _ => value_text(a).cmp(&value_text(b)),
    }
}

fn matches(row: &Value, filter: &Filter) -> bool {
    let actual = &row[filter.column()];
    match filter {
        Filter::Eq(_, v) => value_text(actual) == value_text(v),
        Filter::Gte(_, v) => !actual.is_null() && compare(actual, v) != Ordering::Less,
    }
}

fn merge(row: &mut Value, patch: Value) {
    if let (Value::Object(target), Value::Object(fields)) = (row, patch) {
        for (k, v) in fields {
            target.insert(k, v);
        }
    }
}

#[async_trait]
impl TableStore for MemoryStore {
    async fn select(&self, table: &str, query: &Query) -> StoreResult<Vec<Value>> {
        let delay = *self.select_delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        self.enter()?;

        let mut rows: Vec<Value> = self
            .rows(table)
            .into_iter()
            .filter(|r| query.filters().iter().all(|f| matches(r, f)))
            .collect();
        rows.sort_by(|a, b| {
            for o in query.ordering() {
                let ord = compare(&a[o.column], &b[o.column]);
                let ord = if o.ascending { ord } else { ord.reverse() };
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            Ordering::Equal
        });
        if let Some(n) = query.row_limit() {
            rows.truncate(n);
        }
        Ok(rows)
    }

    async fn insert(&self, table: &str, mut row: Value) -> StoreResult<Value> {
        self.enter()?;
        if row.get("id").is_none_or(Value::is_null) {
            row["id"] = Value::from(self.next_id.fetch_add(1, AtomicOrdering::SeqCst));
        }
        self.tables
            .lock()
            .unwrap()
            .entry(table.to_string())
            .or_default()
            .push(row.clone());
        Ok(row)
    }

    async fn update(&self, table: &str, id: &RowId, patch: Value) -> StoreResult<Value> {
        self.enter()?;
        let mut tables = self.tables.lock().unwrap();
        let row = tables
            .get_mut(table)
            .and_then(|rows| rows.iter_mut().find(|r| row_id(r) == id.as_str()))
            .ok_or_else(|| StoreError::NotFound(format!("{table} row {id}")))?;
        merge(row, patch);
        Ok(row.clone())
    }

    async fn delete(&self, table: &str, id: &RowId) -> StoreResult<()> {
        self.enter()?;
        let mut tables = self.tables.lock().unwrap();
        let rows = tables.entry(table.to_string()).or_default();
        let before = rows.len();
        rows.retain(|r| row_id(r) != id.as_str());
        if rows.len() == before {
            return Err(StoreError::NotFound(format!("{table} row {id}")));
        }
        Ok(())
    }

    async fn upsert(&self, table: &str, row: Value) -> StoreResult<Value> {
        self.enter()?;
        let id = row_id(&row);
        let mut tables = self.tables.lock().unwrap();
        let rows = tables.entry(table.to_string()).or_default();
        match rows.iter_mut().find(|r| row_id(r) == id) {
            Some(existing) => {
                merge(existing, row);
                Ok(existing.clone())
            }
            None => {
                rows.push(row.clone());
                Ok(row)
            }
        }
    }
}

/// Accepts a fixed set of email/password pairs.
#[derive(Default)]
pub struct FakeAuth {
    users: HashMap<String, (String, RowId)>,
    session: Mutex<Option<Session>>,
}

impl FakeAuth {
    pub fn with_user(mut self, email: &str, password: &str, user_id: &str) -> Self {
        self.users
            .insert(email.to_string(), (password.to_string(), RowId::from(user_id)));
        self
    }
}

#[async_trait]
impl Authenticator for FakeAuth {
    async fn sign_in(&self, email: &str, password: &str) -> StoreResult<Session> {
        match self.users.get(email) {
            Some((pw, id)) if pw == password => {
                let session = Session {
                    access_token: format!("at-{id}"),
                    refresh_token: format!("rt-{id}"),
                    user_id: id.clone(),
                    email: Some(email.to_string()),
                };
                *self.session.lock().unwrap() = Some(session.clone());
                Ok(session)
            }
            _ => Err(StoreError::AuthFailed("Invalid login credentials".into())),
        }
    }

    async fn sign_out(&self) {
        self.session.lock().unwrap().take();
    }

    async fn session(&self) -> Option<Session> {
        self.session.lock().unwrap().clone()
    }
}

pub fn skill_row(id: i64, name: &str, category: &str) -> Value {
    serde_json::json!({ "id": id, "name": name, "category": category })
}

pub fn experience_row(id: &str, title: &str, start: &str) -> Value {
    serde_json::json!({
        "id": id,
        "title": title,
        "organization": "Org",
        "descriptions": [],
        "start_date": start,
        "end_date": null,
        "is_current": false
    })
}

pub fn message_row(id: i64, name: &str, is_read: bool, created_at: &str) -> Value {
    serde_json::json!({
        "id": id,
        "name": name,
        "email": format!("{}@example.com", name.to_lowercase()),
        "subject": null,
        "message": "Hi",
        "is_read": is_read,
        "created_at": created_at
    })
}

pub fn profile_row(id: &str, is_admin: bool) -> Value {
    serde_json::json!({
        "id": id,
        "email": "owner@example.com",
        "name": "Owner",
        "title": "Engineer",
        "bio": "",
        "is_admin": is_admin
    })
}

pub fn project_row(id: i64, title: &str, featured: bool) -> Value {
    serde_json::json!({
        "id": id,
        "title": title,
        "technologies": [],
        "is_featured": featured,
        "status": "completed",
        "sort_order": id
    })
}
