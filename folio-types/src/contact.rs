use crate::{OrderBy, Record, RowId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A message left through the public contact form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub id: RowId,
    #[serde(default, deserialize_with = "crate::de::null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "crate::de::null_as_default")]
    pub email: String,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default, deserialize_with = "crate::de::null_as_default")]
    pub message: String,
    #[serde(default, deserialize_with = "crate::de::null_as_default")]
    pub is_read: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub ip_address: Option<String>,
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Record for ContactMessage {
    const TABLE: &'static str = "contact_messages";

    fn id(&self) -> &RowId {
        &self.id
    }

    fn default_order() -> &'static [OrderBy] {
        const { &[OrderBy::desc("created_at")] }
    }
}

/// What a visitor submits. The user agent and ip are stamped by the store.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
}

impl NewContactMessage {
    /// Trims every field and turns a blank subject into `None`.
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            subject: self
                .subject
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            message: self.message.trim().to_string(),
        }
    }
}
