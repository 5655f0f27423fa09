//! Flattened result shapes for callers that want `{ data, error }` rather
//! than a `Result`.

use crate::error::{ErrorKind, StoreError, StoreResult};
use serde::Serialize;

/// Either data or an error message, never both.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome<T> {
    pub data: Option<T>,
    pub error: Option<String>,
    #[serde(skip)]
    pub kind: Option<ErrorKind>,
}

impl<T> Outcome<T> {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

impl<T> From<StoreResult<T>> for Outcome<T> {
    fn from(result: StoreResult<T>) -> Self {
        match result {
            Ok(data) => Self {
                data: Some(data),
                error: None,
                kind: None,
            },
            Err(e) => Self::from(e),
        }
    }
}

impl<T> From<StoreError> for Outcome<T> {
    fn from(e: StoreError) -> Self {
        Self {
            data: None,
            error: Some(e.to_string()),
            kind: Some(e.kind()),
        }
    }
}

/// Result of a delete: a success flag and the error message on failure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeleteOutcome {
    pub success: bool,
    pub error: Option<String>,
    #[serde(skip)]
    pub kind: Option<ErrorKind>,
}

impl From<StoreResult<()>> for DeleteOutcome {
    fn from(result: StoreResult<()>) -> Self {
        match result {
            Ok(()) => Self {
                success: true,
                error: None,
                kind: None,
            },
            Err(e) => Self {
                success: false,
                error: Some(e.to_string()),
                kind: Some(e.kind()),
            },
        }
    }
}
