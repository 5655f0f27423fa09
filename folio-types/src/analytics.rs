use crate::{OrderBy, Record, RowId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Kind of tracked visitor interaction. Unknown kinds are kept verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum EventType {
    PageView,
    ProjectClick,
    ContactFormSubmit,
    Other(String),
}

impl EventType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::PageView => "page_view",
            Self::ProjectClick => "project_click",
            Self::ContactFormSubmit => "contact_form_submit",
            Self::Other(s) => s,
        }
    }
}

impl From<&str> for EventType {
    fn from(s: &str) -> Self {
        match s {
            "page_view" => Self::PageView,
            "project_click" => Self::ProjectClick,
            "contact_form_submit" => Self::ContactFormSubmit,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for EventType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for EventType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from(s.as_str()))
    }
}

/// A recorded analytics event. Append-only.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsEvent {
    pub id: RowId,
    pub event_type: EventType,
    #[serde(default = "empty_object", deserialize_with = "null_as_empty_object")]
    pub event_data: serde_json::Value,
    #[serde(default)]
    pub user_session_id: Option<String>,
    #[serde(default)]
    pub ip_address: Option<String>,
    #[serde(default)]
    pub user_agent: Option<String>,
    #[serde(default)]
    pub referrer: Option<String>,
    #[serde(default)]
    pub page_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

fn empty_object() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}

fn null_as_empty_object<'de, D: Deserializer<'de>>(d: D) -> Result<serde_json::Value, D::Error> {
    Ok(Option::<serde_json::Value>::deserialize(d)?
        .filter(|v| !v.is_null())
        .unwrap_or_else(empty_object))
}

impl Record for AnalyticsEvent {
    const TABLE: &'static str = "analytics_events";

    fn id(&self) -> &RowId {
        &self.id
    }

    fn default_order() -> &'static [OrderBy] {
        const { &[OrderBy::desc("created_at")] }
    }
}

/// Insert payload for an analytics event.
///
/// `user_session_id` and `ip_address` are reserved columns and always sent as
/// null.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewAnalyticsEvent {
    pub event_type: EventType,
    pub event_data: serde_json::Value,
    pub user_session_id: Option<String>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub referrer: Option<String>,
    pub page_url: Option<String>,
}

impl NewAnalyticsEvent {
    pub fn new(event_type: EventType, event_data: serde_json::Value) -> Self {
        Self {
            event_type,
            event_data,
            user_session_id: None,
            ip_address: None,
            user_agent: None,
            referrer: None,
            page_url: None,
        }
    }

    pub fn page_view(page_url: &str) -> Self {
        Self::new(EventType::PageView, serde_json::json!({ "page": page_url }))
            .with_page_url(page_url)
    }

    pub fn project_click(project_id: &RowId, project_title: &str) -> Self {
        Self::new(
            EventType::ProjectClick,
            serde_json::json!({ "project_id": project_id, "project_title": project_title }),
        )
    }

    pub fn contact_form_submit() -> Self {
        Self::new(EventType::ContactFormSubmit, empty_object())
    }

    pub fn with_page_url(mut self, page_url: &str) -> Self {
        self.page_url = Some(page_url.to_string());
        self
    }

    pub fn with_referrer(mut self, referrer: Option<String>) -> Self {
        self.referrer = referrer;
        self
    }

    pub fn with_user_agent(mut self, user_agent: Option<String>) -> Self {
        self.user_agent = user_agent;
        self
    }
}
