pub mod bucket;
pub mod entry;
pub mod interactive;
pub mod marks;
pub mod session;
pub mod status;

pub use bucket::*;
pub use entry::*;
pub use marks::*;
pub use session::{Session, SessionOptions};
pub use status::*;

use crate::core::{dispatcher::ActionOutcome, print_cancelled, print_info, print_success};

/// Print the user-facing result of one action
pub(crate) fn report_outcome(outcome: ActionOutcome, completed: &str, skipped: &str) {
    match outcome {
        ActionOutcome::Completed => print_success(completed),
        ActionOutcome::Cancelled => print_cancelled("Cancelled, nothing was changed"),
        ActionOutcome::Skipped => print_info(skipped),
    }
}
