//! Terminal rendering for display-shape events.
//!
//! Extension trait plus small helpers, colored with owo_colors. No grid
//! layout happens here; the agenda is a sorted list.

use chrono::{NaiveDate, NaiveDateTime};
use owo_colors::OwoColorize;

use kalendr_core::DisplayEvent;

/// Extension trait for colored terminal rendering.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for DisplayEvent {
    fn render(&self) -> String {
        let mut line = format!("{}  {}", format_range(self), self.title.bold());

        if self.all_day {
            line.push_str(&format!("  {}", "(all day)".dimmed()));
        }
        if let Some(location) = &self.location {
            line.push_str(&format!("  {}", format!("@ {location}").dimmed()));
        }

        line
    }
}

/// Render the start/end range. For timed events ending the same day the
/// end collapses to its time of day.
fn format_range(event: &DisplayEvent) -> String {
    let start = pretty_instant(&event.start, event.all_day);

    match &event.end {
        Some(end) if *end != event.start => {
            let end = pretty_instant(end, event.all_day);
            let short_end = if event.all_day {
                end
            } else {
                end.rsplit_once(' ')
                    .filter(|(day, _)| start.starts_with(day))
                    .map(|(_, time)| time.to_string())
                    .unwrap_or(end)
            };
            format!("{} - {}", start.cyan(), short_end.cyan())
        }
        _ => start.cyan().to_string(),
    }
}

/// Parse a wire date-time string for display; falls back to the raw
/// string when it is not in a shape we recognize.
fn pretty_instant(value: &str, all_day: bool) -> String {
    if all_day {
        if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
            return date.format("%a %b %e").to_string();
        }
    }

    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return dt.format("%a %b %e %H:%M").to_string();
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return date.format("%a %b %e").to_string();
    }

    value.to_string()
}

/// Sort events by their start string. ISO-8601 date-times order
/// correctly under plain string comparison, so no date math is needed.
pub fn sort_by_start(events: &mut [DisplayEvent]) {
    events.sort_by(|a, b| a.start.cmp(&b.start));
}
