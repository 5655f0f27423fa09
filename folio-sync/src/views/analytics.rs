use chrono::{DateTime, Duration, Utc};
use folio_store::{AnalyticsApi, StoreResult};
use folio_types::{AnalyticsEvent, EventType, NewAnalyticsEvent, RowId};
use std::collections::HashSet;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Records visitor interactions without making the caller wait.
#[derive(Clone)]
pub struct AnalyticsTracker {
    api: AnalyticsApi,
    user_agent: Option<String>,
    referrer: Option<String>,
    page: Option<String>,
}

impl AnalyticsTracker {
    pub fn new(api: AnalyticsApi) -> Self {
        Self {
            api,
            user_agent: None,
            referrer: None,
            page: None,
        }
    }

    /// Stamped on every event that does not carry its own.
    pub fn with_context(mut self, user_agent: Option<String>, referrer: Option<String>) -> Self {
        self.user_agent = user_agent;
        self.referrer = referrer;
        self
    }

    /// Path of the page the visitor is on, e.g. `/projects`.
    pub fn with_page(mut self, path: impl Into<String>) -> Self {
        self.page = Some(path.into());
        self
    }

    /// Sends `event` on a background task. Failures are logged and dropped.
    /// Returns `None` when there is no runtime to send from.
    pub fn track(&self, mut event: NewAnalyticsEvent) -> Option<JoinHandle<()>> {
        if event.user_agent.is_none() {
            event.user_agent = self.user_agent.clone();
        }
        if event.referrer.is_none() {
            event.referrer = self.referrer.clone();
        }
        if event.page_url.is_none() {
            event.page_url = self.page.clone();
        }

        let Ok(handle) = Handle::try_current() else {
            warn!("no async runtime, dropping {} event", event.event_type);
            return None;
        };
        let api = self.api.clone();
        Some(handle.spawn(async move {
            match api.track(&event).await {
                Ok(_) => debug!("tracked {}", event.event_type),
                Err(e) => warn!("failed to track {}: {e}", event.event_type),
            }
        }))
    }

    pub fn track_page_view(&self, page_url: &str) -> Option<JoinHandle<()>> {
        self.track(NewAnalyticsEvent::page_view(page_url))
    }

    pub fn track_project_click(&self, id: &RowId, title: &str) -> Option<JoinHandle<()>> {
        self.track(NewAnalyticsEvent::project_click(id, title))
    }

    pub fn track_contact_form_submit(&self) -> Option<JoinHandle<()>> {
        self.track(NewAnalyticsEvent::contact_form_submit())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeRange {
    Last24Hours,
    #[default]
    Last7Days,
    Last30Days,
}

impl TimeRange {
    pub fn start(self, now: DateTime<Utc>) -> DateTime<Utc> {
        now - match self {
            Self::Last24Hours => Duration::hours(24),
            Self::Last7Days => Duration::days(7),
            Self::Last30Days => Duration::days(30),
        }
    }
}

/// Counts over a window of events.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalyticsStats {
    pub total_events: usize,
    pub page_views: usize,
    pub project_clicks: usize,
    pub contact_submissions: usize,
    /// Distinct recorded ip addresses; `None` when no event has one.
    pub unique_visitors: Option<usize>,
}

impl AnalyticsStats {
    pub fn from_events(events: &[AnalyticsEvent]) -> Self {
        let count = |kind: EventType| events.iter().filter(|e| e.event_type == kind).count();
        let ips: HashSet<&str> = events
            .iter()
            .filter_map(|e| e.ip_address.as_deref())
            .filter(|ip| !ip.is_empty())
            .collect();

        Self {
            total_events: events.len(),
            page_views: count(EventType::PageView),
            project_clicks: count(EventType::ProjectClick),
            contact_submissions: count(EventType::ContactFormSubmit),
            unique_visitors: (!ips.is_empty()).then_some(ips.len()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AnalyticsReport {
    pub range: TimeRange,
    /// Newest first.
    pub events: Vec<AnalyticsEvent>,
    pub stats: AnalyticsStats,
}

/// Admin view over recorded events.
pub struct AnalyticsDashboard {
    api: AnalyticsApi,
}

impl AnalyticsDashboard {
    pub fn new(api: AnalyticsApi) -> Self {
        Self { api }
    }

    pub async fn load(&self, range: TimeRange) -> StoreResult<AnalyticsReport> {
        self.load_at(range, Utc::now()).await
    }

    pub async fn load_at(&self, range: TimeRange, now: DateTime<Utc>) -> StoreResult<AnalyticsReport> {
        let events = self.api.since(range.start(now)).await?;
        let stats = AnalyticsStats::from_events(&events);
        Ok(AnalyticsReport {
            range,
            events,
            stats,
        })
    }
}
