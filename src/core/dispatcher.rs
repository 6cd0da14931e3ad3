//! Action dispatcher: the staging verbs and their legality, confirmation and backend calls.
//!
//! Every verb checks its applicability against the entry's category before touching
//! the backend, asks the [`Confirmer`] first when it is destructive, and wraps backend
//! failures with the operation name. The dispatcher never refreshes state itself; the
//! backend is expected to publish a new snapshot after a successful mutation.
//!
//! # Outcomes
//! - [`ActionOutcome::Completed`]: backend calls ran and succeeded
//! - [`ActionOutcome::Cancelled`]: the user declined the confirmation, no backend call
//! - [`ActionOutcome::Skipped`]: the action was suppressed, no backend call
//!
//! # Single-file discard
//! `Idle -> AwaitingConfirmation -> Cancelled | Unstaging -> RestoringWorktree -> Idle`.
//! A failure in either step is reported as one [`GitStagerError::DiscardFailed`]; steps
//! already completed are not rolled back and nothing is retried.

use crate::core::action_sets::BucketAction;
use crate::core::backend::WorkingTreeBackend;
use crate::core::collaborators::{ConfirmationRequest, Confirmer, DiffViewer, FileOpener};
use crate::core::diff_refs::{DiffContext, DiffRequestSpec};
use crate::core::error::{DiscardStep, GitStagerError, Result};
use crate::core::selection::marked_entries;
use crate::core::status_entry::{Category, StatusEntry};
use std::fmt;
use std::sync::Arc;

/// A per-entry verb
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileAction {
    Open,
    Stage,
    Track,
    Unstage,
    Discard,
    Diff(DiffContext),
}

impl FileAction {
    pub fn name(&self) -> &'static str {
        match self {
            FileAction::Open => "open",
            FileAction::Stage => "stage",
            FileAction::Track => "track",
            FileAction::Unstage => "unstage",
            FileAction::Discard => "discard",
            FileAction::Diff(DiffContext::Working) => "diff working tree",
            FileAction::Diff(DiffContext::Index) => "diff index",
        }
    }

    /// Categories this verb may be applied to
    pub fn applies_to(&self, category: Category) -> bool {
        match self {
            FileAction::Open | FileAction::Diff(_) => true,
            FileAction::Stage => matches!(category, Category::Unstaged | Category::Untracked),
            FileAction::Track => category == Category::Untracked,
            FileAction::Unstage => category == Category::Staged,
            FileAction::Discard => matches!(category, Category::Unstaged | Category::Staged),
        }
    }

    pub fn requires_confirmation(&self) -> bool {
        matches!(self, FileAction::Discard)
    }
}

impl fmt::Display for FileAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    Completed,
    Cancelled,
    Skipped,
}

#[derive(Clone)]
pub struct ActionDispatcher {
    backend: Arc<dyn WorkingTreeBackend>,
    confirmer: Arc<dyn Confirmer>,
    diff_viewer: Arc<dyn DiffViewer>,
    opener: Arc<dyn FileOpener>,
}

fn rejected(operation: &'static str) -> impl FnOnce(GitStagerError) -> GitStagerError {
    move |e| {
        log::error!("{operation} failed: {e}");
        GitStagerError::backend_rejected(operation, e)
    }
}

impl ActionDispatcher {
    pub fn new(
        backend: Arc<dyn WorkingTreeBackend>,
        confirmer: Arc<dyn Confirmer>,
        diff_viewer: Arc<dyn DiffViewer>,
        opener: Arc<dyn FileOpener>,
    ) -> Self {
        Self {
            backend,
            confirmer,
            diff_viewer,
            opener,
        }
    }

    pub fn backend(&self) -> &dyn WorkingTreeBackend {
        self.backend.as_ref()
    }

    /// Whether the diff viewer can render `path`
    pub fn diff_eligible(&self, path: &str) -> bool {
        self.diff_viewer.supports(path)
    }

    /// Run `action` on `entry` after checking it applies to the entry's category
    pub async fn run(&self, action: FileAction, entry: &StatusEntry) -> Result<ActionOutcome> {
        if !action.applies_to(entry.category()) {
            return Err(GitStagerError::command_not_applicable(
                action.name(),
                entry.category(),
            ));
        }

        log::debug!("Running {action} on {entry}");
        match action {
            FileAction::Open => {
                self.opener.open(entry).await?;
                Ok(ActionOutcome::Completed)
            }
            FileAction::Stage | FileAction::Track => {
                self.add_paths(&[entry.to_path().to_string()]).await
            }
            FileAction::Unstage => self.unstage_entry(entry).await,
            FileAction::Discard => self.discard_path(entry.to_path()).await,
            FileAction::Diff(context) => self.open_diff(entry.to_path(), context).await,
        }
    }

    pub async fn open(&self, entry: &StatusEntry) -> Result<ActionOutcome> {
        self.run(FileAction::Open, entry).await
    }

    pub async fn stage(&self, entry: &StatusEntry) -> Result<ActionOutcome> {
        self.run(FileAction::Stage, entry).await
    }

    pub async fn track(&self, entry: &StatusEntry) -> Result<ActionOutcome> {
        self.run(FileAction::Track, entry).await
    }

    pub async fn unstage(&self, entry: &StatusEntry) -> Result<ActionOutcome> {
        self.run(FileAction::Unstage, entry).await
    }

    pub async fn discard(&self, entry: &StatusEntry) -> Result<ActionOutcome> {
        self.run(FileAction::Discard, entry).await
    }

    pub async fn diff(&self, entry: &StatusEntry, context: DiffContext) -> Result<ActionOutcome> {
        self.run(FileAction::Diff(context), entry).await
    }

    /// Stage every given path in one backend call
    pub async fn add_paths(&self, paths: &[String]) -> Result<ActionOutcome> {
        if paths.is_empty() {
            return Ok(ActionOutcome::Skipped);
        }
        self.backend.add(paths).await.map_err(rejected("add"))?;
        Ok(ActionOutcome::Completed)
    }

    /// Stage every given entry in one batch call
    pub async fn mark_all(&self, entries: &[StatusEntry]) -> Result<ActionOutcome> {
        let paths: Vec<String> = entries
            .iter()
            .map(|entry| entry.to_path().to_string())
            .collect();
        self.add_paths(&paths).await
    }

    /// Stage every entry of `entries` the backend reports as marked
    pub async fn stage_marked(&self, entries: &[StatusEntry]) -> Result<ActionOutcome> {
        let marked = marked_entries(entries, self.backend.as_ref());
        if marked.is_empty() {
            log::debug!("No marked files to stage");
        }
        self.mark_all(&marked).await
    }

    pub async fn unstage_all(&self) -> Result<ActionOutcome> {
        self.backend.reset(None).await.map_err(rejected("reset"))?;
        Ok(ActionOutcome::Completed)
    }

    pub async fn stage_all_unstaged(&self) -> Result<ActionOutcome> {
        self.backend
            .add_all_unstaged()
            .await
            .map_err(rejected("add all unstaged"))?;
        Ok(ActionOutcome::Completed)
    }

    pub async fn track_all_untracked(&self) -> Result<ActionOutcome> {
        self.backend
            .add_all_untracked()
            .await
            .map_err(rejected("add all untracked"))?;
        Ok(ActionOutcome::Completed)
    }

    /// Restore every unstaged worktree change; staged changes are untouched
    pub async fn discard_all_unstaged(&self) -> Result<ActionOutcome> {
        if !self.confirmer.confirm(&ConfirmationRequest::discard_all()).await? {
            log::debug!("Discard all unstaged changes cancelled");
            return Ok(ActionOutcome::Cancelled);
        }
        self.backend
            .checkout(None)
            .await
            .map_err(rejected("discard all unstaged changes"))?;
        Ok(ActionOutcome::Completed)
    }

    /// Unstage and restore every change in one step
    pub async fn discard_all_changes(&self) -> Result<ActionOutcome> {
        if !self.confirmer.confirm(&ConfirmationRequest::discard_all()).await? {
            log::debug!("Discard all changes cancelled");
            return Ok(ActionOutcome::Cancelled);
        }
        self.backend
            .reset_to_commit()
            .await
            .map_err(rejected("discard all changes"))?;
        Ok(ActionOutcome::Completed)
    }

    pub async fn run_bucket_action(&self, action: BucketAction) -> Result<ActionOutcome> {
        match action {
            BucketAction::UnstageAll => self.unstage_all().await,
            BucketAction::DiscardAllUnstaged => self.discard_all_unstaged().await,
            BucketAction::StageAllUnstaged => self.stage_all_unstaged().await,
            BucketAction::TrackAllUntracked => self.track_all_untracked().await,
            BucketAction::DiscardAllChanges => self.discard_all_changes().await,
        }
    }

    async fn unstage_entry(&self, entry: &StatusEntry) -> Result<ActionOutcome> {
        // Resetting a staged deletion would resurrect a path that may never have existed
        if entry.is_index_deletion() {
            log::warn!("Not unstaging {}: index records a deletion", entry.to_path());
            return Ok(ActionOutcome::Skipped);
        }
        self.backend
            .reset(Some(entry.to_path()))
            .await
            .map_err(rejected("reset"))?;
        Ok(ActionOutcome::Completed)
    }

    async fn discard_path(&self, path: &str) -> Result<ActionOutcome> {
        log::debug!("Discard {path}: awaiting confirmation");
        if !self
            .confirmer
            .confirm(&ConfirmationRequest::discard_file(path))
            .await?
        {
            log::debug!("Discard {path}: cancelled");
            return Ok(ActionOutcome::Cancelled);
        }

        log::debug!("Discard {path}: unstaging");
        self.backend.reset(Some(path)).await.map_err(|e| {
            log::error!("Discard {path} failed while unstaging: {e}");
            GitStagerError::discard_failed(path, DiscardStep::Unstage, e)
        })?;

        log::debug!("Discard {path}: restoring worktree");
        self.backend.checkout(Some(path)).await.map_err(|e| {
            log::error!("Discard {path} failed while restoring: {e}");
            GitStagerError::discard_failed(path, DiscardStep::Restore, e)
        })?;

        Ok(ActionOutcome::Completed)
    }

    async fn open_diff(&self, path: &str, context: DiffContext) -> Result<ActionOutcome> {
        if !self.diff_eligible(path) {
            return Err(GitStagerError::diff_not_supported(path));
        }

        let request = DiffRequestSpec::new(path, context);
        self.diff_viewer.open_diff(&request).await.map_err(|e| {
            log::warn!("Failed to open diff view for {path}: {e}");
            GitStagerError::diff_open_failed(path, e)
        })?;
        Ok(ActionOutcome::Completed)
    }
}
