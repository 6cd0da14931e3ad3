use crate::commands::report_outcome;
use crate::commands::session::{Session, SessionOptions};
use crate::core::{
    action_sets::BucketAction, classifier::DisplayMode, error::Result,
};

/// Run a section-level action on the current snapshot
pub async fn execute_bucket_action(options: SessionOptions, action: BucketAction) -> Result<()> {
    let session = Session::initialize(options)?;
    let outcome = session.coordinator.run_bucket_action(action).await?;
    report_outcome(
        outcome,
        action.label(),
        &format!("{action}: {} section is empty", action.bucket().heading()),
    );
    Ok(())
}

/// Run the discard offered by the active mode
pub async fn execute_discard_all(options: SessionOptions) -> Result<()> {
    let session = Session::initialize(options)?;
    let action = match session.coordinator.mode() {
        DisplayMode::Detailed => BucketAction::DiscardAllUnstaged,
        DisplayMode::Simple => BucketAction::DiscardAllChanges,
    };
    let outcome = session.coordinator.run_bucket_action(action).await?;
    report_outcome(outcome, action.label(), "No changes to discard");
    Ok(())
}
