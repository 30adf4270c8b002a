//! Turning user date input into wire date-time strings.
//!
//! The events API takes date-time strings verbatim, so all this module
//! decides is the string to send and whether the input named a whole day
//! (no time-of-day component) or a timed instant.

use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime};

/// A parsed instant ready for the wire.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedInstant {
    pub value: String,
    /// True when the input carried no time-of-day component.
    pub all_day: bool,
}

/// Parse user input into a wire instant. Accepts ISO dates/date-times
/// directly and natural language ("tomorrow", "friday 3pm") via fuzzydate.
pub fn parse_instant(input: &str) -> Result<ParsedInstant> {
    let input = input.trim();

    // Already in wire format: pass through untouched.
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if NaiveDateTime::parse_from_str(input, format).is_ok() {
            return Ok(ParsedInstant {
                value: input.to_string(),
                all_day: false,
            });
        }
    }
    if NaiveDate::parse_from_str(input, "%Y-%m-%d").is_ok() {
        return Ok(ParsedInstant {
            value: input.to_string(),
            all_day: true,
        });
    }

    let dt = fuzzydate::parse(input)
        .map_err(|_| anyhow::anyhow!("Could not parse date/time: \"{}\"", input))?;

    if has_time_component(input) {
        Ok(ParsedInstant {
            value: dt.format("%Y-%m-%dT%H:%M:%S").to_string(),
            all_day: false,
        })
    } else {
        Ok(ParsedInstant {
            value: dt.date().format("%Y-%m-%d").to_string(),
            all_day: true,
        })
    }
}

/// Whether the input names a time of day ("3pm", "15:00", "noon",
/// "at 9") rather than just a date.
fn has_time_component(input: &str) -> bool {
    let lower = input.to_lowercase();

    if lower.contains("noon") || lower.contains("midnight") {
        return true;
    }

    let tokens: Vec<&str> = lower.split_whitespace().collect();
    for (i, token) in tokens.iter().enumerate() {
        // "6pm", "11am"
        if let Some(prefix) = token.strip_suffix("am").or_else(|| token.strip_suffix("pm")) {
            if !prefix.is_empty() && prefix.chars().all(|c| c.is_ascii_digit() || c == ':') {
                return true;
            }
            // "3 pm"
            if prefix.is_empty()
                && i > 0
                && tokens[i - 1].chars().all(|c| c.is_ascii_digit() || c == ':')
                && tokens[i - 1].starts_with(|c: char| c.is_ascii_digit())
            {
                return true;
            }
        }

        // "15:00"
        if let Some((h, m)) = token.split_once(':') {
            if h.chars().all(|c| c.is_ascii_digit())
                && !h.is_empty()
                && m.starts_with(|c: char| c.is_ascii_digit())
            {
                return true;
            }
        }

        // "at 3"
        if *token == "at"
            && tokens
                .get(i + 1)
                .is_some_and(|next| next.starts_with(|c: char| c.is_ascii_digit()))
        {
            return true;
        }
    }

    false
}
