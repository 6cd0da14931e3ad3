//! Ordered action sets bound to each category.
//!
//! These lists are the single source of truth for which commands a rendered entry
//! offers, both in an action bar and in a context menu. Bucket-level actions (the
//! buttons in a section header) are bound the same way.

use crate::core::classifier::SubStatus;
use crate::core::command_registry::CommandId;
use crate::core::status_entry::Category;
use std::fmt;

const STAGED_ACTIONS: &[CommandId] = &[CommandId::Open, CommandId::Unstage, CommandId::DiffIndex];

const UNSTAGED_ACTIONS: &[CommandId] = &[
    CommandId::Open,
    CommandId::Stage,
    CommandId::Discard,
    CommandId::DiffWorking,
];

const UNTRACKED_ACTIONS: &[CommandId] = &[CommandId::Open, CommandId::Track];

const SIMPLE_UNSTAGED_ACTIONS: &[CommandId] = &[CommandId::Discard, CommandId::DiffWorking];

const SIMPLE_STAGED_ACTIONS: &[CommandId] = &[CommandId::DiffIndex];

/// Action set of an entry in detailed mode
pub fn action_set(category: Category) -> &'static [CommandId] {
    match category {
        Category::Staged => STAGED_ACTIONS,
        Category::Unstaged => UNSTAGED_ACTIONS,
        Category::Untracked => UNTRACKED_ACTIONS,
    }
}

/// Action set of an entry in the simple-mode list
pub fn simple_action_set(sub_status: SubStatus) -> &'static [CommandId] {
    match sub_status {
        SubStatus::Staged => SIMPLE_STAGED_ACTIONS,
        SubStatus::Unstaged => SIMPLE_UNSTAGED_ACTIONS,
    }
}

/// Actions applying to a whole bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BucketAction {
    UnstageAll,
    DiscardAllUnstaged,
    StageAllUnstaged,
    TrackAllUntracked,
    /// Unstage and restore everything; offered only in simple mode
    DiscardAllChanges,
}

impl BucketAction {
    pub fn label(&self) -> &'static str {
        match self {
            BucketAction::UnstageAll => "Unstage all changes",
            BucketAction::DiscardAllUnstaged => "Discard All Changes",
            BucketAction::StageAllUnstaged => "Stage all changes",
            BucketAction::TrackAllUntracked => "Track all untracked files",
            BucketAction::DiscardAllChanges => "Discard All Changes",
        }
    }

    pub fn requires_confirmation(&self) -> bool {
        matches!(
            self,
            BucketAction::DiscardAllUnstaged | BucketAction::DiscardAllChanges
        )
    }
}

impl fmt::Display for BucketAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Bucket a [`BucketAction`] is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bucket {
    Staged,
    Unstaged,
    Untracked,
    /// The unified simple-mode list
    Changed,
}

impl Bucket {
    pub fn heading(&self) -> &'static str {
        match self {
            Bucket::Staged => "Staged",
            Bucket::Unstaged | Bucket::Changed => "Changed",
            Bucket::Untracked => "Untracked",
        }
    }

    pub fn actions(&self) -> &'static [BucketAction] {
        match self {
            Bucket::Staged => &[BucketAction::UnstageAll],
            Bucket::Unstaged => &[
                BucketAction::DiscardAllUnstaged,
                BucketAction::StageAllUnstaged,
            ],
            Bucket::Untracked => &[BucketAction::TrackAllUntracked],
            Bucket::Changed => &[BucketAction::DiscardAllChanges],
        }
    }
}

impl BucketAction {
    /// The bucket whose header offers this action
    pub fn bucket(&self) -> Bucket {
        match self {
            BucketAction::UnstageAll => Bucket::Staged,
            BucketAction::DiscardAllUnstaged | BucketAction::StageAllUnstaged => Bucket::Unstaged,
            BucketAction::TrackAllUntracked => Bucket::Untracked,
            BucketAction::DiscardAllChanges => Bucket::Changed,
        }
    }
}
