//! Display-shape events and the storage ↔ display mapping.
//!
//! The rendering layer expects the all-day flag spelled `allDay`, while
//! the API persists it as `all_day`. Every event entering or leaving the
//! view controller's state crosses this mapping, and it lives here and
//! nowhere else so the round trip is the identity by construction.

use serde::{Deserialize, Serialize};

use crate::event::{DEFAULT_COLOR, Event, EventCreate};

/// An event in the shape the rendering layer consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayEvent {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub start: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    #[serde(rename = "allDay", default)]
    pub all_day: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl From<Event> for DisplayEvent {
    fn from(event: Event) -> Self {
        DisplayEvent {
            id: event.id,
            title: event.title,
            description: event.description,
            location: event.location,
            start: event.start,
            end: event.end,
            all_day: event.all_day,
            color: event.color,
        }
    }
}

impl From<DisplayEvent> for Event {
    fn from(event: DisplayEvent) -> Self {
        Event {
            id: event.id,
            title: event.title,
            description: event.description,
            location: event.location,
            start: event.start,
            end: event.end,
            all_day: event.all_day,
            color: event.color,
        }
    }
}

impl DisplayEvent {
    /// Build the outbound full-replace body for this event under a new
    /// title, carrying every other field unchanged. Missing display
    /// fields fall back to their defaults (empty strings stay absent,
    /// color falls back to [`DEFAULT_COLOR`]).
    pub fn to_create(&self, title: String) -> EventCreate {
        EventCreate {
            title,
            description: self.description.clone(),
            location: self.location.clone(),
            start: self.start.clone(),
            end: self.end.clone(),
            all_day: self.all_day,
            color: Some(
                self.color
                    .clone()
                    .unwrap_or_else(|| DEFAULT_COLOR.to_string()),
            ),
        }
    }
}
