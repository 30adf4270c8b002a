use std::sync::{Arc, RwLock};

use kalendr_core::{Event, EventCreate};

/// Shared application state: the in-memory event list.
///
/// Lock discipline is trivial: handlers take the lock for the duration
/// of one synchronous operation and never hold it across an await.
#[derive(Clone, Default)]
pub struct AppState {
    events: Arc<RwLock<Vec<Event>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// All events, ordered by start.
    pub fn list(&self) -> Vec<Event> {
        let mut events = self.events.read().unwrap().clone();
        events.sort_by(|a, b| a.start.cmp(&b.start));
        events
    }

    /// Store a new event under a fresh id.
    pub fn insert(&self, body: EventCreate) -> Event {
        let event = Event {
            id: uuid::Uuid::new_v4().to_string(),
            title: body.title,
            description: body.description,
            location: body.location,
            start: body.start,
            end: body.end,
            all_day: body.all_day,
            color: body.color,
        };

        self.events.write().unwrap().push(event.clone());
        event
    }

    /// Full-replace the event with the given id. Returns None when the
    /// id is unknown.
    pub fn update(&self, id: &str, body: EventCreate) -> Option<Event> {
        let mut events = self.events.write().unwrap();
        let slot = events.iter_mut().find(|e| e.id == id)?;

        slot.title = body.title;
        slot.description = body.description;
        slot.location = body.location;
        slot.start = body.start;
        slot.end = body.end;
        slot.all_day = body.all_day;
        slot.color = body.color;

        Some(slot.clone())
    }

    /// Remove the event with the given id. Returns false when the id is
    /// unknown.
    pub fn remove(&self, id: &str) -> bool {
        let mut events = self.events.write().unwrap();
        let before = events.len();
        events.retain(|e| e.id != id);
        events.len() < before
    }
}
