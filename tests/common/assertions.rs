//! Common assertion helpers for test output validation
//!
//! Provides predicates for validating git-stager command output and error messages.

#![allow(dead_code)]

use predicates::prelude::*;

/// Creates a predicate that checks for git repository error messages
pub fn not_in_git_repo() -> impl Predicate<str> {
    predicates::str::contains("Not in a git repository")
}

/// Creates a predicate that checks for a section heading with its bucket actions
pub fn has_section(heading: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("{heading}:"))
}

/// Creates a predicate that checks for git status descriptions
pub fn has_status(status: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("({})", status))
}

/// Creates a predicate that checks for an error line
pub fn has_error(message: &str) -> impl Predicate<str> {
    predicates::str::contains("Error:").and(predicates::str::contains(message.to_string()))
}
