use crate::commands::report_outcome;
use crate::commands::session::{Session, SessionOptions};
use crate::core::{error::Result, print_success};

/// Set or clear the mark on the changed file at `path`
pub fn execute_mark(options: SessionOptions, path: &str, marked: bool) -> Result<()> {
    let mut session = Session::initialize(options)?;
    let entry = session.coordinator.select_path(path)?;
    session.repo.set_mark(entry.to_path(), marked)?;

    if marked {
        print_success(&format!("Marked {path}"));
    } else {
        print_success(&format!("Unmarked {path}"));
    }
    Ok(())
}

/// Stage every marked changed file in one batch
pub async fn execute_stage_marked(options: SessionOptions) -> Result<()> {
    let session = Session::initialize(options)?;
    let marked = session.coordinator.marked_entries();
    let outcome = session.coordinator.stage_marked().await?;
    report_outcome(
        outcome,
        &format!("Staged {} marked file(s)", marked.len()),
        "No marked files to stage",
    );
    Ok(())
}
