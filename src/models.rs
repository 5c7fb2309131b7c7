use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::constants::{CLIENT_ROLE, DEFAULT_SEARCH_LIMIT};

/// Server-provided configuration, opaque to the store
pub type MainConfig = Map<String, Value>;

/// Search hits, passed through to the caller untouched
pub type SearchResults = Value;

/// Logged-in user as exposed by the session
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub role: String,
}

impl User {
    pub fn new(id: impl Into<String>, role: impl Into<String>) -> Self {
        User {
            id: id.into(),
            role: role.into(),
        }
    }

    pub fn is_client(&self) -> bool {
        self.role == CLIENT_ROLE
    }
}

/// Profile fields sent when syncing the theme preference
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PersonUpdate {
    #[serde(skip)]
    pub id: String,
    pub theme: String,
}

/// A timeline event returned by the server
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Time range for `load_events`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EventWindow {
    pub after: NaiveDateTime,
    pub before: NaiveDateTime,
}

impl EventWindow {
    pub const FORMAT: &'static str = "%Y-%m-%dT%H:%M:%S";

    pub fn new(after: NaiveDateTime, before: NaiveDateTime) -> Self {
        EventWindow { after, before }
    }

    pub fn after_param(&self) -> String {
        self.after.format(Self::FORMAT).to_string()
    }

    pub fn before_param(&self) -> String {
        self.before.format(Self::FORMAT).to_string()
    }
}

/// Full-text search request
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SearchQuery {
    pub query: String,
    pub limit: u32,
    pub offset: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_names: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub production_id: Option<String>,
}

impl SearchQuery {
    pub fn new(query: impl Into<String>) -> Self {
        SearchQuery {
            query: query.into(),
            limit: DEFAULT_SEARCH_LIMIT,
            offset: 0,
            index_names: None,
            production_id: None,
        }
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    pub fn index_names(mut self, names: Vec<String>) -> Self {
        self.index_names = Some(names);
        self
    }

    pub fn production(mut self, production_id: impl Into<String>) -> Self {
        self.production_id = Some(production_id.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_search_query_defaults() {
        let query = SearchQuery::new("shot 12");
        assert_eq!(query.limit, 3);
        assert_eq!(query.offset, 0);
        let body = serde_json::to_value(&query).unwrap();
        assert!(body.get("index_names").is_none());
        assert!(body.get("production_id").is_none());
    }

    #[test]
    fn test_event_window_params() {
        let after = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let before = NaiveDate::from_ymd_opt(2024, 3, 2)
            .unwrap()
            .and_hms_opt(12, 30, 0)
            .unwrap();
        let window = EventWindow::new(after, before);
        assert_eq!(window.after_param(), "2024-03-01T00:00:00");
        assert_eq!(window.before_param(), "2024-03-02T12:30:00");
    }

    #[test]
    fn test_event_keeps_unknown_fields() {
        let event: Event = serde_json::from_str(
            r#"{"id":"e1","name":"task:update","created_at":"2024-03-01T10:00:00","project_id":"p1"}"#,
        )
        .unwrap();
        assert_eq!(event.name, "task:update");
        assert_eq!(event.extra.get("project_id"), Some(&Value::from("p1")));
    }
}
