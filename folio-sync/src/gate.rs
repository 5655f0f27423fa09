//! Client-side admin gate.
//!
//! The remote store's row policies are what actually protect the tables;
//! the gate keeps non-admin sessions from issuing writes at all.

use folio_store::{Authenticator, ProfilesApi, StoreError, StoreResult};
use folio_types::{Profile, RowId};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

pub struct AdminGate {
    auth: Arc<dyn Authenticator>,
    profiles: ProfilesApi,
    admin: RwLock<Option<Profile>>,
}

impl AdminGate {
    pub fn new(auth: Arc<dyn Authenticator>, profiles: ProfilesApi) -> Self {
        Self {
            auth,
            profiles,
            admin: RwLock::new(None),
        }
    }

    /// Signs in and admits the caller only if their profile is flagged
    /// `is_admin`. A non-admin session is signed out again before
    /// `AdminRequired` is returned.
    pub async fn sign_in(&self, email: &str, password: &str) -> StoreResult<Profile> {
        let session = self.auth.sign_in(email, password).await?;
        self.admit(&session.user_id).await
    }

    /// Re-checks an existing session, e.g. one restored at startup.
    /// Returns `Ok(None)` when nobody is signed in.
    pub async fn restore(&self) -> StoreResult<Option<Profile>> {
        match self.auth.session().await {
            Some(session) => self.admit(&session.user_id).await.map(Some),
            None => {
                self.admin.write().await.take();
                Ok(None)
            }
        }
    }

    async fn admit(&self, user_id: &RowId) -> StoreResult<Profile> {
        match self.profiles.get(user_id).await {
            Ok(Some(profile)) if profile.is_admin => {
                info!(user = %user_id, "admin signed in");
                *self.admin.write().await = Some(profile.clone());
                Ok(profile)
            }
            Ok(_) => {
                warn!(user = %user_id, "sign-in refused: not an admin");
                self.revoke().await;
                Err(StoreError::AdminRequired)
            }
            Err(e) => {
                warn!(user = %user_id, "sign-in refused: profile lookup failed: {e}");
                self.revoke().await;
                Err(e)
            }
        }
    }

    async fn revoke(&self) {
        self.admin.write().await.take();
        self.auth.sign_out().await;
    }

    pub async fn sign_out(&self) {
        self.revoke().await;
    }

    pub async fn is_admin(&self) -> bool {
        self.admin.read().await.is_some()
    }

    /// The signed-in admin's profile.
    pub async fn admin(&self) -> Option<Profile> {
        self.admin.read().await.clone()
    }

    /// The signed-in admin, or `AdminRequired` when there is none or the
    /// session has since been dropped.
    pub async fn require_admin(&self) -> StoreResult<Profile> {
        if self.auth.session().await.is_none() {
            self.admin.write().await.take();
            return Err(StoreError::AdminRequired);
        }
        self.admin().await.ok_or(StoreError::AdminRequired)
    }
}
