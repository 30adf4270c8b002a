//! Modal user interaction seam.
//!
//! The view controller's flows block on short modal exchanges (enter a
//! title, confirm a delete). This trait keeps those exchanges swappable:
//! the binary uses dialoguer, the controller tests use a scripted stand-in.

use dialoguer::{Confirm, Input};
use owo_colors::OwoColorize;

/// A modal request/response interaction that suspends the current flow
/// until the user answers or cancels.
pub trait Dialog {
    /// Ask for a line of text, pre-filled with `initial`. `None` means
    /// the user cancelled.
    fn prompt(&mut self, message: &str, initial: &str) -> Option<String>;

    /// Ask a yes/no question. Cancelling counts as "no".
    fn confirm(&mut self, message: &str) -> bool;

    /// Show a blocking error notification.
    fn alert(&mut self, message: &str);
}

/// Terminal dialogs via dialoguer.
pub struct TermDialog;

impl Dialog for TermDialog {
    fn prompt(&mut self, message: &str, initial: &str) -> Option<String> {
        Input::<String>::new()
            .with_prompt(format!("  {message}"))
            .with_initial_text(initial)
            .allow_empty(true)
            .interact_text()
            .ok()
    }

    fn confirm(&mut self, message: &str) -> bool {
        Confirm::new()
            .with_prompt(format!("  {message}"))
            .default(false)
            .interact()
            .unwrap_or(false)
    }

    fn alert(&mut self, message: &str) {
        eprintln!("  {}", message.red());
    }
}
