use crate::commands::report_outcome;
use crate::commands::session::{Session, SessionOptions};
use crate::core::{
    command_registry::CommandId,
    diff_refs::DiffContext,
    error::Result,
};

/// Run one per-entry command on the changed file at `path`
pub async fn execute_entry_command(
    options: SessionOptions,
    command: CommandId,
    path: &str,
) -> Result<()> {
    let mut session = Session::initialize(options)?;
    session.coordinator.select_path(path)?;

    let outcome = session.coordinator.execute(command.id()).await?;
    report_outcome(
        outcome,
        &completed_message(command, path),
        &format!("{} {path}: nothing to do", command.spec().label),
    );
    Ok(())
}

fn completed_message(command: CommandId, path: &str) -> String {
    match command {
        CommandId::Open => format!("Opened {path}"),
        CommandId::Stage => format!("Staged {path}"),
        CommandId::Track => format!("Now tracking {path}"),
        CommandId::Unstage => format!("Unstaged {path}"),
        CommandId::Discard => format!("Discarded changes to {path}"),
        CommandId::DiffWorking | CommandId::DiffIndex => format!("Showed diff of {path}"),
    }
}

/// Show the diff of `path` against HEAD: the index side for staged entries, the
/// working tree otherwise
pub async fn execute_diff(options: SessionOptions, path: &str) -> Result<()> {
    let mut session = Session::initialize(options)?;
    let entry = session.coordinator.select_path(path)?;

    let command = match DiffContext::for_entry(&entry) {
        DiffContext::Index => CommandId::DiffIndex,
        DiffContext::Working => CommandId::DiffWorking,
    };
    session.coordinator.execute(command.id()).await?;
    Ok(())
}
