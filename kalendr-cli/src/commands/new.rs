use anyhow::Result;
use dialoguer::Input;
use owo_colors::OwoColorize;

use crate::client::EventsClient;
use crate::controller::{CalendarController, DateSelection};
use crate::dialog::TermDialog;
use crate::utils::datetime::{ParsedInstant, parse_instant};

pub async fn run(
    client: EventsClient,
    start: Option<String>,
    end: Option<String>,
) -> Result<()> {
    let selection = build_selection(start, end)?;

    let mut dialog = TermDialog;
    let mut controller = CalendarController::new(client);
    controller.handle_date_select(&mut dialog, selection).await;

    if let Some(created) = controller.events().last() {
        println!("{}", format!("  Created: {}", created.title).green());
    }

    Ok(())
}

/// Resolve the date range from args, prompting for whatever is missing.
/// An input without a time-of-day component makes the whole selection
/// all-day, mirroring how a click-and-drag on a month grid behaves.
pub(crate) fn build_selection(
    start: Option<String>,
    end: Option<String>,
) -> Result<DateSelection> {
    let start = match start {
        Some(s) => parse_instant(&s)?,
        None => prompt_instant("  When?")?,
    };

    let end = match end {
        Some(e) => Some(parse_instant(&e)?),
        None => prompt_optional_instant("  Until? (skip)")?,
    };

    Ok(DateSelection {
        all_day: start.all_day,
        start: start.value,
        end: end.map(|e| e.value),
    })
}

/// Prompt for a date/time, retrying on parse errors.
fn prompt_instant(prompt: &str) -> Result<ParsedInstant> {
    loop {
        let input: String = Input::new().with_prompt(prompt).interact_text()?;
        match parse_instant(&input) {
            Ok(result) => return Ok(result),
            Err(e) => {
                eprintln!("  {}", e.to_string().red());
            }
        }
    }
}

/// Prompt for an optional date/time; empty input skips.
fn prompt_optional_instant(prompt: &str) -> Result<Option<ParsedInstant>> {
    loop {
        let input: String = Input::new()
            .with_prompt(prompt)
            .default(String::new())
            .show_default(false)
            .interact_text()?;
        if input.is_empty() {
            return Ok(None);
        }
        match parse_instant(&input) {
            Ok(result) => return Ok(Some(result)),
            Err(e) => {
                eprintln!("  {}", e.to_string().red());
            }
        }
    }
}
