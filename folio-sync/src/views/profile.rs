use crate::collection::{MutationOutcome, SyncedCollection};
use crate::list;
use folio_store::{ProfilesApi, StoreError};
use folio_types::{Profile, ProfileUpdate, RowId};
use tracing::info;

/// The public owner profile. The collection holds at most one row.
pub type ProfileView = SyncedCollection<ProfilesApi>;

pub fn default_profile() -> Profile {
    Profile {
        id: RowId::from("fallback-profile"),
        email: None,
        name: "Muaz Hamza Leventoğlu".into(),
        title: "Computer Engineering Student".into(),
        bio: "Computer Engineering student building web applications with .NET, \
              Angular and React."
            .into(),
        location: None,
        phone: None,
        website: None,
        linkedin: Some(
            "https://www.linkedin.com/in/muaz-hamza-levento%C4%9Flu-860109249/".into(),
        ),
        github: Some("https://github.com/MHLeventoglu".into()),
        twitter: None,
        instagram: None,
        avatar_url: None,
        resume_url: None,
        is_admin: false,
    }
}

impl SyncedCollection<ProfilesApi> {
    pub fn with_default_fallback(self) -> Self {
        self.with_fallback(vec![default_profile()])
    }

    /// The stored profile, if the owner has saved one.
    pub fn stored(&self) -> Option<Profile> {
        self.snapshot().items.into_iter().next()
    }

    /// The profile to render: the stored one, else the default.
    pub fn profile(&self) -> Profile {
        self.stored().unwrap_or_else(default_profile)
    }

    /// Creates or updates the signed-in admin's own profile row.
    pub async fn save(&self, update: &ProfileUpdate) -> MutationOutcome<Profile> {
        let owner = match self.gate() {
            Some(gate) => match gate.require_admin().await {
                Ok(admin) => admin.id,
                Err(e) => return MutationOutcome::failed(e),
            },
            None => return MutationOutcome::failed(StoreError::AuthRequired),
        };

        match self.api().upsert(&owner, update).await {
            Ok(profile) => {
                info!(user = %owner, "profile saved");
                self.apply(|items| {
                    items.retain(|p| p.id == profile.id);
                    list::insert_front(items, profile.clone());
                });
                MutationOutcome::ok(profile)
            }
            Err(e) => MutationOutcome::failed(e),
        }
    }
}
