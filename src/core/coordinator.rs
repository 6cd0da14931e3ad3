//! The working-tree change coordinator.
//!
//! [`StageCoordinator`] owns the current snapshot, the display mode and the selection,
//! and routes registered commands to the [`ActionDispatcher`]. A snapshot is replaced
//! wholesale on every refresh; the selection is kept as a value and re-validated
//! against the snapshot by four-field equality whenever a command runs.

use crate::core::action_sets::{action_set, simple_action_set, Bucket, BucketAction};
use crate::core::classifier::{classify, CategoryBuckets, DisplayMode, SubStatus};
use crate::core::command_registry::{CommandId, CommandRegistry, CommandSpec};
use crate::core::dispatcher::{ActionDispatcher, ActionOutcome, FileAction};
use crate::core::error::{GitStagerError, Result};
use crate::core::selection::{marked_entries, SelectionStore};
use crate::core::status_entry::{Category, StatusEntry};
use std::sync::Arc;

pub struct StageCoordinator {
    dispatcher: ActionDispatcher,
    registry: Arc<CommandRegistry>,
    selection: SelectionStore,
    snapshot: Vec<StatusEntry>,
    mode: DisplayMode,
}

impl StageCoordinator {
    /// Create a coordinator, registering the file commands in `registry` if another
    /// coordinator has not already done so
    pub fn new(
        dispatcher: ActionDispatcher,
        registry: Arc<CommandRegistry>,
        mode: DisplayMode,
    ) -> Self {
        let registered = registry.register_file_commands();
        log::debug!("Coordinator created in {mode} mode ({registered} commands registered)");
        Self {
            dispatcher,
            registry,
            selection: SelectionStore::new(),
            snapshot: Vec::new(),
            mode,
        }
    }

    pub fn dispatcher(&self) -> &ActionDispatcher {
        &self.dispatcher
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: DisplayMode) {
        self.mode = mode;
    }

    /// Replace the snapshot with a freshly read one
    pub fn replace_snapshot(&mut self, entries: Vec<StatusEntry>) {
        log::debug!("Snapshot replaced with {} entries", entries.len());
        self.snapshot = entries;
    }

    pub fn snapshot(&self) -> &[StatusEntry] {
        &self.snapshot
    }

    /// Classification of the current snapshot under the current mode
    pub fn buckets(&self) -> CategoryBuckets {
        classify(&self.snapshot, self.mode)
    }

    pub fn select(&mut self, entry: Option<StatusEntry>) {
        self.selection.select(entry);
    }

    /// Select the entry of the current snapshot whose path is `path`
    pub fn select_path(&mut self, path: &str) -> Result<StatusEntry> {
        let entry = self
            .snapshot
            .iter()
            .find(|entry| entry.to_path() == path)
            .cloned()
            .ok_or_else(|| GitStagerError::entry_not_found(path))?;
        self.selection.select(Some(entry.clone()));
        Ok(entry)
    }

    pub fn is_selected(&self, candidate: &StatusEntry) -> bool {
        self.selection.is_selected(candidate)
    }

    /// The selection, if it is still part of the current snapshot
    pub fn selected(&self) -> Option<&StatusEntry> {
        self.selection.resolve(&self.snapshot)
    }

    /// Commands bound to `entry` under the current mode
    pub fn action_set_for(&self, entry: &StatusEntry) -> &'static [CommandId] {
        match self.mode {
            DisplayMode::Detailed => action_set(entry.category()),
            DisplayMode::Simple => match entry.category() {
                Category::Staged => simple_action_set(SubStatus::Staged),
                Category::Unstaged => simple_action_set(SubStatus::Unstaged),
                Category::Untracked => &[],
            },
        }
    }

    /// Registered commands to render for `entry`, without diffs the viewer cannot show
    pub fn available_commands(&self, entry: &StatusEntry) -> Vec<CommandSpec> {
        self.action_set_for(entry)
            .iter()
            .filter_map(|command| self.registry.get(command.id()))
            .filter(|spec| match spec.action {
                FileAction::Diff(_) => self.dispatcher.diff_eligible(entry.to_path()),
                _ => true,
            })
            .collect()
    }

    /// Buckets rendered under the current mode
    pub fn visible_buckets(&self) -> &'static [Bucket] {
        match self.mode {
            DisplayMode::Detailed => &[Bucket::Staged, Bucket::Unstaged, Bucket::Untracked],
            DisplayMode::Simple => &[Bucket::Changed],
        }
    }

    /// Number of current entries rendered in `bucket`
    pub fn bucket_len(&self, bucket: Bucket) -> usize {
        self.snapshot
            .iter()
            .filter(|entry| match bucket {
                Bucket::Staged => entry.category() == Category::Staged,
                Bucket::Unstaged => entry.category() == Category::Unstaged,
                Bucket::Untracked => entry.category() == Category::Untracked,
                Bucket::Changed => entry.category() != Category::Untracked,
            })
            .count()
    }

    /// Execute a registered command on the current selection
    pub async fn execute(&self, command_id: &str) -> Result<ActionOutcome> {
        let spec = self
            .registry
            .get(command_id)
            .ok_or_else(|| GitStagerError::unknown_command(command_id))?;
        let entry = self.selected().ok_or(GitStagerError::NoSelection)?;

        if !self.action_set_for(entry).contains(&spec.command) {
            return Err(GitStagerError::command_not_applicable(
                spec.command.id(),
                entry.category(),
            ));
        }

        self.dispatcher.run(spec.action, entry).await
    }

    /// Run a section-level action. Disabled (skipped) when its bucket is empty.
    pub async fn run_bucket_action(&self, action: BucketAction) -> Result<ActionOutcome> {
        let bucket = action.bucket();
        if !self.visible_buckets().contains(&bucket) {
            return Err(GitStagerError::bucket_action_unavailable(action, self.mode));
        }
        if self.bucket_len(bucket) == 0 {
            log::warn!("'{action}' skipped: {} section is empty", bucket.heading());
            return Ok(ActionOutcome::Skipped);
        }
        self.dispatcher.run_bucket_action(action).await
    }

    /// Entries of the current snapshot marked by the backend, queried on every call
    pub fn marked_entries(&self) -> Vec<StatusEntry> {
        marked_entries(&self.snapshot, self.dispatcher.backend())
    }

    /// Stage every marked entry in one batch
    pub async fn stage_marked(&self) -> Result<ActionOutcome> {
        self.dispatcher.stage_marked(&self.snapshot).await
    }
}
