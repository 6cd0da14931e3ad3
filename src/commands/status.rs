use crate::commands::session::{Session, SessionOptions};
use crate::core::{
    action_sets::Bucket,
    classifier::{CategoryBuckets, SubStatus},
    colors::format_entry,
    coordinator::StageCoordinator,
    error::Result,
    print_info, print_section_header,
    status_entry::StatusEntry,
    WorkingTreeBackend,
};
use colored::*;

pub fn execute_status(options: SessionOptions) -> Result<()> {
    let session = Session::initialize(options)?;
    let coordinator = &session.coordinator;

    let buckets = coordinator.buckets();
    if buckets.is_empty() {
        print_info("Nothing to commit, working tree clean");
        return Ok(());
    }

    match buckets {
        CategoryBuckets::Detailed {
            staged,
            unstaged,
            untracked,
        } => {
            print_bucket(coordinator, Bucket::Staged, &staged);
            print_bucket(coordinator, Bucket::Unstaged, &unstaged);
            print_bucket(coordinator, Bucket::Untracked, &untracked);
        }
        CategoryBuckets::Simple { changed } => {
            print_bucket_header(Bucket::Changed);
            for item in &changed {
                let mark = if session.repo.get_mark(item.entry.to_path()) {
                    "[x]"
                } else {
                    "[ ]"
                };
                let sub_status = match item.sub_status {
                    SubStatus::Staged => "staged".green(),
                    SubStatus::Unstaged => "unstaged".yellow(),
                };
                println!(
                    "{} {}  {}{}",
                    mark.cyan(),
                    format_entry(&item.entry),
                    sub_status,
                    command_labels(coordinator, &item.entry)
                );
            }
        }
    }

    println!();
    Ok(())
}

fn print_bucket_header(bucket: Bucket) {
    let labels: Vec<&str> = bucket.actions().iter().map(|action| action.label()).collect();
    print_section_header(bucket.heading(), &labels);
}

fn print_bucket(coordinator: &StageCoordinator, bucket: Bucket, entries: &[StatusEntry]) {
    if entries.is_empty() {
        return;
    }
    print_bucket_header(bucket);
    for entry in entries {
        println!("  {}{}", format_entry(entry), command_labels(coordinator, entry));
    }
}

fn command_labels(coordinator: &StageCoordinator, entry: &StatusEntry) -> String {
    let labels: Vec<&str> = coordinator
        .available_commands(entry)
        .iter()
        .map(|spec| spec.label)
        .collect();
    if labels.is_empty() {
        String::new()
    } else {
        format!("  {}", format!("[{}]", labels.join(", ")).bright_black())
    }
}
