//! Unified output formatting utilities for consistent CLI presentation.
//!
//! Red for errors, green for success, white for information and section headers.
//! Every message is surrounded by blank lines.

use colored::*;

/// Formats and prints an error message with consistent styling
///
/// # Format
/// ```text
///
/// ✕ Error: <message>
///
/// ```
///
/// # Colors
/// - "✕ Error:" in red
/// - Message in white
/// - Newlines before and after for spacing
pub fn print_error(message: &str) {
    println!("\n{} {}\n", "✕ Error:".red(), message.white());
}

/// Formats and prints a success message with consistent styling
///
/// # Format
/// ```text
///
/// ✓ <message>
///
/// ```
///
/// # Colors
/// - Checkmark in green, message in white
/// - Newlines before and after for spacing
pub fn print_success(message: &str) {
    println!("\n{} {}", "✓".green(), message.white());
}

/// Formats and prints an informational message with consistent styling
///
/// # Format
/// ```text
///
/// <message>
///
/// ```
///
/// # Colors
/// - Message in white
/// - Newlines before and after for spacing
pub fn print_info(message: &str) {
    println!("\n{}\n", message.white());
}

/// Formats and prints a section header, followed by its action labels if any
///
/// # Format
/// ```text
///
/// <header>: [<action>] [<action>]
///
/// ```
pub fn print_section_header(header: &str, actions: &[&str]) {
    let actions: Vec<String> = actions
        .iter()
        .map(|action| format!("[{action}]").blue().to_string())
        .collect();
    if actions.is_empty() {
        println!("\n{}:\n", header.white());
    } else {
        println!("\n{}: {}\n", header.white(), actions.join(" "));
    }
}

/// Formats and prints a cancellation notice in yellow
pub fn print_cancelled(message: &str) {
    println!("\n{} {}\n", "–".yellow(), message.white());
}
