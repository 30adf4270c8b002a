use anyhow::Result;
use owo_colors::OwoColorize;

use crate::client::EventsClient;
use crate::controller::CalendarController;
use crate::render::{Render, sort_by_start};
use crate::utils::tui;

pub async fn run(client: EventsClient) -> Result<()> {
    let spinner = tui::create_spinner("Loading events");
    let mut controller = CalendarController::new(client);
    controller.load().await;
    spinner.finish_and_clear();

    let mut events = controller.events().to_vec();
    if events.is_empty() {
        println!("{}", "No events".dimmed());
        return Ok(());
    }

    sort_by_start(&mut events);
    for event in &events {
        println!("  {}", event.render());
    }

    Ok(())
}
