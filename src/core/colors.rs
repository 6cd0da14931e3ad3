//! Color mapping for status codes.
//!
//! # Color Scheme
//! - **Modified**: Yellow
//! - **Added**: Green
//! - **Deleted**: Red
//! - **Renamed/Copied**: Blue
//! - **Type changed**: Magenta
//! - **Untracked**: Cyan
//! - **Unmerged**: Red bold

use crate::core::status_entry::StatusEntry;
use colored::*;

/// Color styling for a single status code character
pub fn get_status_color_style(code: char) -> Box<dyn Fn(&str) -> ColoredString> {
    match code {
        'M' => Box::new(|text: &str| text.yellow()),
        '?' => Box::new(|text: &str| text.cyan()),
        'D' => Box::new(|text: &str| text.red()),
        'A' => Box::new(|text: &str| text.green()),
        'R' | 'C' => Box::new(|text: &str| text.blue()),
        'T' => Box::new(|text: &str| text.magenta()),
        'U' => Box::new(|text: &str| text.red().bold()),
        _ => Box::new(|text: &str| text.normal()),
    }
}

/// Format one entry as `XY path  (description)` in the color of its category's code
pub fn format_entry(entry: &StatusEntry) -> String {
    let color_fn = get_status_color_style(entry.display_code());
    let code = format!("{}{}", entry.index_code(), entry.worktree_code());
    let path = match entry.from_path() {
        Some(from) => format!("{from} -> {}", entry.to_path()),
        None => entry.to_path().to_string(),
    };
    format!(
        "{} {}  {}",
        color_fn(&code),
        color_fn(&path),
        format!("({})", entry.description()).bright_black()
    )
}
