//! Test data generation utilities and predefined scenarios
//!
//! Provides functions for creating repositories with specific file states
//! and configurations to test various git scenarios consistently.

#![allow(dead_code)]

use super::repository::*;
use git_stager::core::error::Result;

/// Scenario: one staged, one unstaged and one untracked file
///
/// - `staged.txt`: modified and added to the index
/// - `changed.txt`: modified in the working tree only
/// - `new.txt`: untracked
pub fn create_mixed_status_repo() -> Result<TestRepo> {
    let repo = setup_test_repo()?;

    create_test_files(&repo.path, &["staged.txt", "changed.txt"])?;
    git_add(&repo.path, ".")?;
    git_commit(&repo.path, "Initial commit")?;

    modify_test_files(&repo.path, &["staged.txt", "changed.txt"])?;
    git_add(&repo.path, "staged.txt")?;
    create_file(&repo.path, "new.txt", "new content\n")?;

    Ok(repo)
}
