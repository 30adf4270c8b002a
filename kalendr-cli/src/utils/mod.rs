pub mod datetime;
pub mod tui;
