//! Tour calendar read client.
//!
//! Tour dates are maintained in a shared calendar; the site lists upcoming
//! entries alongside the CMS events. Items map to [`CalendarEvent`], with
//! all-day entries carrying a bare date instead of a datetime.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::auth::{GoogleAuth, GoogleError, ServiceAccountKey, SCOPE_CALENDAR_READONLY};

/// Base URL of the calendar API.
const API_URL: &str = "https://www.googleapis.com/calendar/v3";

/// Title used when a calendar entry has no summary.
const UNTITLED_EVENT: &str = "Untitled Event";

/// A tour date as the site presents it.
#[derive(Debug, Clone, Serialize)]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    /// RFC 3339 datetime, or `YYYY-MM-DD` for all-day entries.
    pub start: String,
    pub end: String,
    pub html_link: Option<String>,
    pub status: Option<String>,
}

/// Venue and city split out of a calendar location string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedLocation {
    pub venue: Option<String>,
    pub city: Option<String>,
}

/// Split a `"venue, city, ..."` location string into venue and city.
pub fn parse_location(location: Option<&str>) -> ParsedLocation {
    let Some(location) = location.filter(|l| !l.trim().is_empty()) else {
        return ParsedLocation::default();
    };
    let parts: Vec<&str> = location.split(',').map(str::trim).collect();
    if parts.len() >= 2 {
        ParsedLocation {
            venue: Some(parts[0].to_string()),
            city: Some(parts[1].to_string()),
        }
    } else {
        ParsedLocation {
            venue: Some(location.trim().to_string()),
            city: None,
        }
    }
}

/// Whether a start value denotes an all-day entry (bare `YYYY-MM-DD`).
pub fn is_all_day(start: &str) -> bool {
    start.len() == 10
}

// -- wire types -------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct ApiEventList {
    #[serde(default)]
    items: Vec<ApiEvent>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiEvent {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    summary: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    location: Option<String>,
    #[serde(default)]
    start: Option<ApiEventTime>,
    #[serde(default)]
    end: Option<ApiEventTime>,
    #[serde(default)]
    html_link: Option<String>,
    #[serde(default)]
    status: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiEventTime {
    #[serde(default)]
    date_time: Option<String>,
    #[serde(default)]
    date: Option<String>,
}

impl ApiEventTime {
    fn into_value(self) -> String {
        self.date_time.or(self.date).unwrap_or_default()
    }
}

impl ApiEvent {
    fn into_event(self) -> CalendarEvent {
        CalendarEvent {
            id: self.id.unwrap_or_default(),
            title: self.summary.unwrap_or_else(|| UNTITLED_EVENT.to_string()),
            description: self.description,
            location: self.location,
            start: self.start.unwrap_or_default().into_value(),
            end: self.end.unwrap_or_default().into_value(),
            html_link: self.html_link,
            status: self.status,
        }
    }
}

// -- service ----------------------------------------------------------------

/// Tour calendar service, tolerant of the calendar being unconfigured.
pub struct TourCalendar {
    inner: Option<CalendarClient>,
}

struct CalendarClient {
    auth: Arc<GoogleAuth>,
    client: reqwest::Client,
    calendar_id: String,
}

impl TourCalendar {
    /// Build from the environment (`GOOGLE_SERVICE_ACCOUNT_KEY` and
    /// `GOOGLE_CALENDAR_ID`). Logs a warning and disables lookups when
    /// either is missing or the key is malformed.
    pub fn from_env() -> Self {
        let key = match ServiceAccountKey::from_env() {
            Ok(Some(key)) => key,
            Ok(None) => {
                tracing::warn!("Google service account key not set, tour calendar disabled");
                return Self { inner: None };
            }
            Err(error) => {
                tracing::error!(%error, "Invalid Google service account key, tour calendar disabled");
                return Self { inner: None };
            }
        };
        let Some(calendar_id) = std::env::var("GOOGLE_CALENDAR_ID").ok().filter(|v| !v.is_empty())
        else {
            tracing::warn!("GOOGLE_CALENDAR_ID not set, tour calendar disabled");
            return Self { inner: None };
        };
        Self::new(Arc::new(GoogleAuth::new(key, SCOPE_CALENDAR_READONLY)), calendar_id)
    }

    /// Build around an existing authenticator.
    pub fn new(auth: Arc<GoogleAuth>, calendar_id: String) -> Self {
        Self {
            inner: Some(CalendarClient {
                auth,
                client: reqwest::Client::new(),
                calendar_id,
            }),
        }
    }

    /// A service with no calendar behind it; every lookup is empty.
    pub fn disabled() -> Self {
        Self { inner: None }
    }

    /// Whether a calendar is configured.
    pub fn is_configured(&self) -> bool {
        self.inner.is_some()
    }

    /// Upcoming entries, soonest first.
    pub async fn upcoming(&self, max_results: i64) -> Vec<CalendarEvent> {
        let Some(inner) = &self.inner else {
            return Vec::new();
        };
        let time_min = chrono::Utc::now().to_rfc3339();
        match inner.list(&time_min, None, max_results).await {
            Ok(events) => events,
            Err(error) => {
                tracing::error!(%error, "Calendar listing failed");
                Vec::new()
            }
        }
    }

    /// Entries within a date range, soonest first.
    pub async fn in_range(
        &self,
        start: chrono::DateTime<chrono::Utc>,
        end: chrono::DateTime<chrono::Utc>,
        max_results: i64,
    ) -> Vec<CalendarEvent> {
        let Some(inner) = &self.inner else {
            return Vec::new();
        };
        match inner
            .list(&start.to_rfc3339(), Some(&end.to_rfc3339()), max_results)
            .await
        {
            Ok(events) => events,
            Err(error) => {
                tracing::error!(%error, "Calendar range listing failed");
                Vec::new()
            }
        }
    }

    /// A single entry by id.
    pub async fn by_id(&self, event_id: &str) -> Option<CalendarEvent> {
        let inner = self.inner.as_ref()?;
        match inner.get(event_id).await {
            Ok(event) => Some(event),
            Err(error) => {
                tracing::error!(%error, event_id, "Calendar lookup failed");
                None
            }
        }
    }
}

impl CalendarClient {
    async fn list(
        &self,
        time_min: &str,
        time_max: Option<&str>,
        max_results: i64,
    ) -> Result<Vec<CalendarEvent>, GoogleError> {
        let token = self.auth.token().await?;
        let max_results = max_results.to_string();
        let mut query: Vec<(&str, &str)> = vec![
            ("timeMin", time_min),
            ("maxResults", max_results.as_str()),
            ("singleEvents", "true"),
            ("orderBy", "startTime"),
        ];
        if let Some(time_max) = time_max {
            query.push(("timeMax", time_max));
        }

        let response = self
            .client
            .get(format!(
                "{API_URL}/calendars/{}/events",
                urlencode(&self.calendar_id)
            ))
            .query(&query)
            .bearer_auth(token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GoogleError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let list: ApiEventList = response.json().await?;
        Ok(list.items.into_iter().map(ApiEvent::into_event).collect())
    }

    async fn get(&self, event_id: &str) -> Result<CalendarEvent, GoogleError> {
        let token = self.auth.token().await?;
        let response = self
            .client
            .get(format!(
                "{API_URL}/calendars/{}/events/{}",
                urlencode(&self.calendar_id),
                urlencode(event_id)
            ))
            .bearer_auth(token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GoogleError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let item: ApiEvent = response.json().await?;
        Ok(item.into_event())
    }
}

/// Percent-encode a path segment (calendar ids contain `@` and `#`).
fn urlencode(segment: &str) -> String {
    let mut encoded = String::with_capacity(segment.len());
    for byte in segment.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char)
            }
            other => encoded.push_str(&format!("%{other:02X}")),
        }
    }
    encoded
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
