use anyhow::Result;
use dialoguer::Select;
use owo_colors::OwoColorize;

use crate::client::EventsClient;
use crate::commands::new::build_selection;
use crate::controller::CalendarController;
use crate::dialog::TermDialog;
use crate::render::{Render, sort_by_start};
use crate::utils::tui;

/// Interactive calendar session: an initial load, then a select loop
/// where picking an event is a "click" and "New event" starts a range
/// selection.
pub async fn run(client: EventsClient) -> Result<()> {
    let spinner = tui::create_spinner("Loading calendar");
    let mut controller = CalendarController::new(client);
    controller.load().await;
    spinner.finish_and_clear();

    let mut dialog = TermDialog;

    loop {
        let mut events = controller.events().to_vec();
        sort_by_start(&mut events);

        let mut items: Vec<String> = events.iter().map(|e| e.render()).collect();
        items.push("+ New event".green().to_string());
        items.push("Quit".dimmed().to_string());

        let choice = Select::new()
            .with_prompt("Calendar")
            .items(&items)
            .default(0)
            .interact_opt()?;

        match choice {
            Some(i) if i < events.len() => {
                let id = events[i].id.clone();
                controller.handle_event_click(&mut dialog, &id).await;
            }
            Some(i) if i == events.len() => match build_selection(None, None) {
                Ok(selection) => {
                    controller.handle_date_select(&mut dialog, selection).await;
                }
                Err(e) => {
                    eprintln!("  {}", e.to_string().red());
                }
            },
            _ => break,
        }
    }

    Ok(())
}
