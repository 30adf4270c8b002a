//! Storage-shape event types.
//!
//! These are the wire shapes the events API persists: snake_case field
//! names, optional fields omitted when absent. The rendering side works
//! with [`crate::display::DisplayEvent`] instead, and the two are mapped
//! in exactly one place (the `display` module).

use serde::{Deserialize, Serialize};

/// Default event color, applied by the view controller when the user
/// creates an event. The server never assigns colors.
pub const DEFAULT_COLOR: &str = "#3b82f6";

/// A calendar event as the server stores and returns it.
///
/// `start` and `end` are date-time strings passed through verbatim; the
/// client does no date validation (`end >= start` is the server's job).
/// An absent `end` means the event ends the instant it starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Server-assigned, immutable after creation.
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Inclusive start instant.
    pub start: String,
    /// Exclusive end instant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    /// True for date-only events (time-of-day ignored for display).
    #[serde(default)]
    pub all_day: bool,
    /// Hex display hint, e.g. "#3b82f6".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Request body for both create and update.
///
/// Updates are a full replace of the record, never a partial patch, so
/// the same shape serves both operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventCreate {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub start: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    #[serde(default)]
    pub all_day: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_serializes_snake_case_all_day() {
        let event = Event {
            id: "1".into(),
            title: "Standup".into(),
            description: None,
            location: None,
            start: "2024-01-01T09:00".into(),
            end: None,
            all_day: false,
            color: None,
        };

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["all_day"], serde_json::json!(false));
        assert!(json.get("allDay").is_none());
    }

    #[test]
    fn optional_fields_omitted_when_absent() {
        let body = EventCreate {
            title: "Lunch".into(),
            description: None,
            location: None,
            start: "2024-01-01T12:00".into(),
            end: None,
            all_day: false,
            color: None,
        };

        let json = serde_json::to_value(&body).unwrap();
        let obj = json.as_object().unwrap();
        assert!(!obj.contains_key("description"));
        assert!(!obj.contains_key("location"));
        assert!(!obj.contains_key("end"));
        assert!(!obj.contains_key("color"));
    }

    #[test]
    fn event_parses_with_minimal_fields() {
        let event: Event = serde_json::from_str(
            r#"{"id":"1","title":"Standup","start":"2024-01-01T09:00","all_day":false}"#,
        )
        .unwrap();

        assert_eq!(event.id, "1");
        assert_eq!(event.title, "Standup");
        assert_eq!(event.end, None);
        assert!(!event.all_day);
    }
}
