//! Remote store error types.

use serde::Deserialize;
use thiserror::Error;

/// Result type for remote store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur talking to the remote store or the repository host.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("remote store unreachable: {0}")]
    Transport(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("remote store error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("permission denied: {0}")]
    Forbidden(String),

    #[error("rejected by remote store: {0}")]
    Validation(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("admin access required")]
    AdminRequired,

    #[error("authentication required")]
    AuthRequired,

    #[error("authentication failed: {0}")]
    AuthFailed(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("request cancelled")]
    Cancelled,
}

/// Coarse classification of a [`StoreError`] for callers that branch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Transport,
    Remote,
    Forbidden,
    Validation,
    NotFound,
    AdminRequired,
    Auth,
    Malformed,
    Config,
    Cancelled,
}

impl StoreError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Transport(_) => ErrorKind::Transport,
            Self::Http(e) if e.is_connect() || e.is_timeout() || e.is_request() => {
                ErrorKind::Transport
            }
            Self::Http(e) if e.is_decode() => ErrorKind::Malformed,
            Self::Http(_) | Self::Api { .. } => ErrorKind::Remote,
            Self::Forbidden(_) => ErrorKind::Forbidden,
            Self::Validation(_) => ErrorKind::Validation,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::AdminRequired => ErrorKind::AdminRequired,
            Self::AuthRequired | Self::AuthFailed(_) => ErrorKind::Auth,
            Self::Serialization(_) => ErrorKind::Malformed,
            Self::Config(_) => ErrorKind::Config,
            Self::Cancelled => ErrorKind::Cancelled,
        }
    }

    /// Maps a non-success response to an error, using the message from the
    /// JSON error body when there is one.
    pub fn from_response(status: u16, body: &str) -> Self {
        let parsed: Option<ErrorBody> = serde_json::from_str(body).ok();
        let code = parsed.as_ref().and_then(|b| b.code.clone());
        let message = parsed
            .and_then(ErrorBody::into_message)
            .unwrap_or_else(|| match body.trim() {
                "" => format!("HTTP {status}"),
                text => text.to_string(),
            });

        // PGRST116: a single-object request matched zero rows.
        if code.as_deref() == Some("PGRST116") {
            return Self::NotFound(message);
        }

        match status {
            401 | 403 => Self::Forbidden(message),
            404 => Self::NotFound(message),
            400 | 409 | 422 => Self::Validation(message),
            _ => Self::Api { status, message },
        }
    }
}

/// Error body shapes returned by PostgREST (`message`, `details`, `hint`)
/// and by the auth endpoints (`error_description`, `msg`, `error`).
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    details: Option<String>,
    #[serde(default)]
    hint: Option<String>,
    #[serde(default)]
    error_description: Option<String>,
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl ErrorBody {
    fn into_message(self) -> Option<String> {
        let head = self
            .message
            .or(self.error_description)
            .or(self.msg)
            .or(self.error)?;
        Some(match (self.details, self.hint) {
            (Some(d), _) if !d.is_empty() => format!("{head} ({d})"),
            (_, Some(h)) if !h.is_empty() => format!("{head} (hint: {h})"),
            _ => head,
        })
    }
}
