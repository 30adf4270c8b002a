//! Calendar view controller.
//!
//! Holds the in-memory event list as its single source of truth and
//! mutates it in response to the two user intents the calendar surface
//! emits: selecting a date range (create) and clicking an event (edit or
//! delete). Every mutation round-trips through the events API and local
//! state adopts exactly what the server returns; deletions are applied
//! locally without a re-fetch.

use anyhow::Result;
use owo_colors::OwoColorize;

use kalendr_core::{DEFAULT_COLOR, DisplayEvent, Event, EventCreate};

use crate::dialog::Dialog;

/// The four operations of the events API, abstracted so the controller
/// can be driven by an in-memory store in tests.
pub trait EventStore {
    async fn list_events(&self) -> Result<Vec<Event>>;
    async fn create_event(&self, event: &EventCreate) -> Result<Event>;
    async fn update_event(&self, id: &str, event: &EventCreate) -> Result<Event>;
    async fn delete_event(&self, id: &str) -> Result<()>;
}

/// A date range the user selected on the calendar surface.
#[derive(Debug, Clone)]
pub struct DateSelection {
    pub start: String,
    pub end: Option<String>,
    /// True when the selection covers whole days rather than a timed range.
    pub all_day: bool,
}

/// View state plus the three user-intent handlers.
pub struct CalendarController<S: EventStore> {
    store: S,
    events: Vec<DisplayEvent>,
    loading: bool,
}

impl<S: EventStore> CalendarController<S> {
    pub fn new(store: S) -> Self {
        CalendarController {
            store,
            events: Vec::new(),
            loading: false,
        }
    }

    /// Current view state, in display shape.
    pub fn events(&self) -> &[DisplayEvent] {
        &self.events
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Initial load. On failure the calendar stays empty; the error is
    /// logged but never shown as a blocking notification.
    pub async fn load(&mut self) {
        self.loading = true;

        match self.store.list_events().await {
            Ok(events) => {
                self.events = events.into_iter().map(DisplayEvent::from).collect();
            }
            Err(e) => {
                eprintln!("{}", format!("Failed to load events: {e}").dimmed());
            }
        }

        self.loading = false;
    }

    /// Create flow: the user selected a date range.
    ///
    /// Cancelling the title prompt (or leaving it empty) aborts before
    /// any API call. There is no optimistic insert; the new event only
    /// enters local state once the server has confirmed it.
    pub async fn handle_date_select(&mut self, dialog: &mut impl Dialog, selection: DateSelection) {
        let Some(title) = dialog.prompt("Enter event title:", "") else {
            return;
        };
        if title.is_empty() {
            return;
        }

        let body = EventCreate {
            title,
            description: None,
            location: None,
            start: selection.start,
            end: selection.end,
            all_day: selection.all_day,
            color: Some(DEFAULT_COLOR.to_string()),
        };

        match self.store.create_event(&body).await {
            Ok(created) => {
                self.events.push(created.into());
            }
            Err(e) => {
                eprintln!("{}", format!("Failed to create event: {e}").dimmed());
                dialog.alert("Failed to create event");
            }
        }
    }

    /// Edit/delete flow: the user clicked an existing event.
    ///
    /// Only the exact tokens "edit" and "delete" are recognized; any
    /// other answer (including cancel) is a no-op. The edit prompt only
    /// exposes the title; the remaining fields are re-sent unchanged,
    /// which is an intentional product limitation.
    pub async fn handle_event_click(&mut self, dialog: &mut impl Dialog, id: &str) {
        let Some(event) = self.events.iter().find(|e| e.id == id).cloned() else {
            return;
        };

        let action = dialog.prompt(
            &format!(
                "Event: {}\n\nOptions:\n- Type \"edit\" to edit\n- Type \"delete\" to delete\n- Press Cancel to close",
                event.title
            ),
            "edit",
        );

        match action.as_deref() {
            Some("delete") => self.delete_event(dialog, &event).await,
            Some("edit") => self.edit_event(dialog, &event).await,
            _ => {}
        }
    }

    async fn delete_event(&mut self, dialog: &mut impl Dialog, event: &DisplayEvent) {
        if !dialog.confirm(&format!(
            "Are you sure you want to delete \"{}\"?",
            event.title
        )) {
            return;
        }

        match self.store.delete_event(&event.id).await {
            Ok(()) => {
                self.events.retain(|e| e.id != event.id);
            }
            Err(e) => {
                eprintln!("{}", format!("Failed to delete event: {e}").dimmed());
                dialog.alert("Failed to delete event");
            }
        }
    }

    async fn edit_event(&mut self, dialog: &mut impl Dialog, event: &DisplayEvent) {
        let Some(new_title) = dialog.prompt("Enter new title:", &event.title) else {
            return;
        };
        if new_title.is_empty() || new_title == event.title {
            return;
        }

        let body = event.to_create(new_title);

        match self.store.update_event(&event.id, &body).await {
            Ok(updated) => {
                if let Some(slot) = self.events.iter_mut().find(|e| e.id == event.id) {
                    *slot = updated.into();
                }
            }
            Err(e) => {
                eprintln!("{}", format!("Failed to update event: {e}").dimmed());
                dialog.alert("Failed to update event");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// In-memory event store that records every call it receives.
    #[derive(Default)]
    struct FakeStore {
        listed: Vec<Event>,
        fail_list: bool,
        fail_mutations: bool,
        created: Mutex<Vec<EventCreate>>,
        updated: Mutex<Vec<(String, EventCreate)>>,
        deleted: Mutex<Vec<String>>,
    }

    impl FakeStore {
        fn with_events(listed: Vec<Event>) -> Self {
            FakeStore {
                listed,
                ..Default::default()
            }
        }

        fn failing() -> Self {
            FakeStore {
                fail_list: true,
                fail_mutations: true,
                ..Default::default()
            }
        }

        /// Lists succeed, every mutation fails.
        fn mutations_failing(listed: Vec<Event>) -> Self {
            FakeStore {
                listed,
                fail_mutations: true,
                ..Default::default()
            }
        }

        fn create_calls(&self) -> usize {
            self.created.lock().unwrap().len()
        }

        fn update_calls(&self) -> usize {
            self.updated.lock().unwrap().len()
        }

        fn delete_calls(&self) -> usize {
            self.deleted.lock().unwrap().len()
        }
    }

    impl EventStore for FakeStore {
        async fn list_events(&self) -> Result<Vec<Event>> {
            if self.fail_list {
                anyhow::bail!("boom");
            }
            Ok(self.listed.clone())
        }

        async fn create_event(&self, event: &EventCreate) -> Result<Event> {
            let mut created = self.created.lock().unwrap();
            created.push(event.clone());
            if self.fail_mutations {
                anyhow::bail!("boom");
            }
            Ok(Event {
                id: format!("srv-{}", created.len()),
                title: event.title.clone(),
                description: event.description.clone(),
                location: event.location.clone(),
                start: event.start.clone(),
                end: event.end.clone(),
                all_day: event.all_day,
                color: event.color.clone(),
            })
        }

        async fn update_event(&self, id: &str, event: &EventCreate) -> Result<Event> {
            self.updated
                .lock()
                .unwrap()
                .push((id.to_string(), event.clone()));
            if self.fail_mutations {
                anyhow::bail!("boom");
            }
            Ok(Event {
                id: id.to_string(),
                title: event.title.clone(),
                description: event.description.clone(),
                location: event.location.clone(),
                start: event.start.clone(),
                end: event.end.clone(),
                all_day: event.all_day,
                color: event.color.clone(),
            })
        }

        async fn delete_event(&self, id: &str) -> Result<()> {
            self.deleted.lock().unwrap().push(id.to_string());
            if self.fail_mutations {
                anyhow::bail!("boom");
            }
            Ok(())
        }
    }

    /// Dialog that replays canned answers and records alerts.
    #[derive(Default)]
    struct ScriptedDialog {
        prompts: VecDeque<Option<String>>,
        confirms: VecDeque<bool>,
        alerts: Vec<String>,
    }

    impl ScriptedDialog {
        fn answering(prompts: Vec<Option<&str>>) -> Self {
            ScriptedDialog {
                prompts: prompts
                    .into_iter()
                    .map(|p| p.map(str::to_string))
                    .collect(),
                ..Default::default()
            }
        }

        fn confirming(mut self, answers: Vec<bool>) -> Self {
            self.confirms = answers.into_iter().collect();
            self
        }
    }

    impl Dialog for ScriptedDialog {
        fn prompt(&mut self, _message: &str, _initial: &str) -> Option<String> {
            self.prompts.pop_front().expect("unexpected prompt")
        }

        fn confirm(&mut self, _message: &str) -> bool {
            self.confirms.pop_front().expect("unexpected confirm")
        }

        fn alert(&mut self, message: &str) {
            self.alerts.push(message.to_string());
        }
    }

    fn standup() -> Event {
        Event {
            id: "1".into(),
            title: "Standup".into(),
            description: None,
            location: None,
            start: "2024-01-01T09:00".into(),
            end: None,
            all_day: false,
            color: None,
        }
    }

    fn offsite() -> Event {
        Event {
            id: "2".into(),
            title: "Offsite".into(),
            description: Some("quarterly".into()),
            location: Some("Lisbon".into()),
            start: "2024-03-04".into(),
            end: Some("2024-03-06".into()),
            all_day: true,
            color: Some("#10b981".into()),
        }
    }

    fn timed_selection() -> DateSelection {
        DateSelection {
            start: "2024-01-02T10:00".into(),
            end: Some("2024-01-02T11:00".into()),
            all_day: false,
        }
    }

    #[tokio::test]
    async fn load_mirrors_all_day_into_display_flag() {
        let mut controller =
            CalendarController::new(FakeStore::with_events(vec![standup(), offsite()]));
        controller.load().await;

        assert!(!controller.is_loading());
        assert_eq!(controller.events().len(), 2);
        assert!(!controller.events()[0].all_day);
        assert!(controller.events()[1].all_day);
    }

    #[tokio::test]
    async fn load_failure_leaves_empty_calendar() {
        let mut controller = CalendarController::new(FakeStore::failing());
        controller.load().await;

        assert!(!controller.is_loading());
        assert!(controller.events().is_empty());
    }

    #[tokio::test]
    async fn cancelled_title_skips_create_call() {
        let mut controller = CalendarController::new(FakeStore::default());
        let mut dialog = ScriptedDialog::answering(vec![None]);

        controller
            .handle_date_select(&mut dialog, timed_selection())
            .await;

        assert_eq!(controller.store.create_calls(), 0);
        assert!(controller.events().is_empty());
    }

    #[tokio::test]
    async fn empty_title_skips_create_call() {
        let mut controller = CalendarController::new(FakeStore::default());
        let mut dialog = ScriptedDialog::answering(vec![Some("")]);

        controller
            .handle_date_select(&mut dialog, timed_selection())
            .await;

        assert_eq!(controller.store.create_calls(), 0);
        assert!(controller.events().is_empty());
    }

    #[tokio::test]
    async fn create_success_appends_mapped_server_response() {
        let mut controller = CalendarController::new(FakeStore::default());
        let mut dialog = ScriptedDialog::answering(vec![Some("Planning")]);

        controller
            .handle_date_select(&mut dialog, timed_selection())
            .await;

        assert_eq!(controller.events().len(), 1);
        let event = &controller.events()[0];
        assert_eq!(event.id, "srv-1");
        assert_eq!(event.title, "Planning");
        assert_eq!(event.color.as_deref(), Some(DEFAULT_COLOR));
        assert!(dialog.alerts.is_empty());
    }

    #[tokio::test]
    async fn all_day_selection_produces_all_day_create_body() {
        let mut controller = CalendarController::new(FakeStore::default());
        let mut dialog = ScriptedDialog::answering(vec![Some("Holiday")]);

        controller
            .handle_date_select(
                &mut dialog,
                DateSelection {
                    start: "2024-07-01".into(),
                    end: Some("2024-07-02".into()),
                    all_day: true,
                },
            )
            .await;

        let created = controller.store.created.lock().unwrap();
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].title, "Holiday");
        assert!(created[0].all_day);
        assert_eq!(created[0].color.as_deref(), Some(DEFAULT_COLOR));
    }

    #[tokio::test]
    async fn create_failure_leaves_state_unchanged_and_alerts() {
        let mut controller = CalendarController::new(FakeStore::failing());
        let mut dialog = ScriptedDialog::answering(vec![Some("Planning")]);

        controller
            .handle_date_select(&mut dialog, timed_selection())
            .await;

        assert!(controller.events().is_empty());
        assert_eq!(dialog.alerts, vec!["Failed to create event"]);
    }

    #[tokio::test]
    async fn unrecognized_action_token_is_a_noop() {
        let mut controller = CalendarController::new(FakeStore::with_events(vec![standup()]));
        controller.load().await;

        for answer in [Some("Edit"), Some("remove"), Some(""), None] {
            let mut dialog = ScriptedDialog::answering(vec![answer]);
            controller.handle_event_click(&mut dialog, "1").await;
        }

        assert_eq!(controller.store.update_calls(), 0);
        assert_eq!(controller.store.delete_calls(), 0);
        assert_eq!(controller.events().len(), 1);
    }

    #[tokio::test]
    async fn click_on_unknown_id_is_a_noop() {
        let mut controller = CalendarController::new(FakeStore::with_events(vec![standup()]));
        controller.load().await;

        let mut dialog = ScriptedDialog::default();
        controller.handle_event_click(&mut dialog, "ghost").await;

        assert_eq!(controller.events().len(), 1);
    }

    #[tokio::test]
    async fn delete_confirmed_removes_only_the_matching_entry() {
        let mut controller =
            CalendarController::new(FakeStore::with_events(vec![standup(), offsite()]));
        controller.load().await;

        let mut dialog =
            ScriptedDialog::answering(vec![Some("delete")]).confirming(vec![true]);
        controller.handle_event_click(&mut dialog, "1").await;

        assert!(controller.events().iter().all(|e| e.id != "1"));
        assert_eq!(controller.events().len(), 1);
        assert_eq!(controller.events()[0].id, "2");
    }

    #[tokio::test]
    async fn delete_declined_skips_the_call() {
        let mut controller = CalendarController::new(FakeStore::with_events(vec![standup()]));
        controller.load().await;

        let mut dialog =
            ScriptedDialog::answering(vec![Some("delete")]).confirming(vec![false]);
        controller.handle_event_click(&mut dialog, "1").await;

        assert_eq!(controller.store.delete_calls(), 0);
        assert_eq!(controller.events().len(), 1);
    }

    #[tokio::test]
    async fn delete_failure_leaves_state_unchanged_and_alerts() {
        let mut controller =
            CalendarController::new(FakeStore::mutations_failing(vec![standup()]));
        controller.load().await;

        let mut dialog =
            ScriptedDialog::answering(vec![Some("delete")]).confirming(vec![true]);
        controller.handle_event_click(&mut dialog, "1").await;

        assert_eq!(controller.events().len(), 1);
        assert_eq!(dialog.alerts, vec!["Failed to delete event"]);
    }

    #[tokio::test]
    async fn edit_with_unchanged_title_skips_the_call() {
        let mut controller = CalendarController::new(FakeStore::with_events(vec![standup()]));
        controller.load().await;

        let mut dialog = ScriptedDialog::answering(vec![Some("edit"), Some("Standup")]);
        controller.handle_event_click(&mut dialog, "1").await;

        assert_eq!(controller.store.update_calls(), 0);
        assert_eq!(controller.events()[0].title, "Standup");
    }

    #[tokio::test]
    async fn edit_with_empty_title_skips_the_call() {
        let mut controller = CalendarController::new(FakeStore::with_events(vec![standup()]));
        controller.load().await;

        let mut dialog = ScriptedDialog::answering(vec![Some("edit"), Some("")]);
        controller.handle_event_click(&mut dialog, "1").await;

        assert_eq!(controller.store.update_calls(), 0);
    }

    #[tokio::test]
    async fn edit_success_replaces_entry_and_carries_other_fields() {
        let mut controller = CalendarController::new(FakeStore::with_events(vec![offsite()]));
        controller.load().await;

        let mut dialog = ScriptedDialog::answering(vec![Some("edit"), Some("Team Offsite")]);
        controller.handle_event_click(&mut dialog, "2").await;

        let updated = controller.store.updated.lock().unwrap();
        let (id, body) = &updated[0];
        assert_eq!(id, "2");
        assert_eq!(body.title, "Team Offsite");
        assert_eq!(body.description.as_deref(), Some("quarterly"));
        assert_eq!(body.location.as_deref(), Some("Lisbon"));
        assert_eq!(body.start, "2024-03-04");
        assert_eq!(body.end.as_deref(), Some("2024-03-06"));
        assert!(body.all_day);
        assert_eq!(body.color.as_deref(), Some("#10b981"));
        drop(updated);

        assert_eq!(controller.events().len(), 1);
        assert_eq!(controller.events()[0].title, "Team Offsite");
        assert_eq!(controller.events()[0].id, "2");
    }

    #[tokio::test]
    async fn edit_failure_leaves_state_unchanged_and_alerts() {
        let mut controller =
            CalendarController::new(FakeStore::mutations_failing(vec![standup()]));
        controller.load().await;

        let mut dialog = ScriptedDialog::answering(vec![Some("edit"), Some("Renamed")]);
        controller.handle_event_click(&mut dialog, "1").await;

        assert_eq!(controller.events()[0].title, "Standup");
        assert_eq!(dialog.alerts, vec!["Failed to update event"]);
    }
}
