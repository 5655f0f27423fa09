//! Password sign-in for the admin panel.

use crate::error::StoreResult;
use async_trait::async_trait;
use folio_types::RowId;
use serde::{Deserialize, Serialize};

/// An authenticated session. The access token replaces the anon key as the
/// bearer for later table requests.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    pub user_id: RowId,
    pub email: Option<String>,
}

/// Something that can sign an owner in and out.
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn sign_in(&self, email: &str, password: &str) -> StoreResult<Session>;

    /// Drops the current session. Never fails.
    async fn sign_out(&self);

    async fn session(&self) -> Option<Session>;
}
