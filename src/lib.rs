//! git-stager - a working-tree change coordinator for git.
//!
//! The library models each changed path as a [`StatusEntry`], groups a snapshot into
//! staged, unstaged and untracked buckets (or one unified list in simple mode), binds
//! an ordered action set to every entry, and dispatches the chosen action to a
//! [`WorkingTreeBackend`] with confirmation for destructive verbs.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module:
//! - Status model and classification
//! - Selection, marks and the command registry
//! - The action dispatcher and the [`StageCoordinator`]
//! - Collaborator traits and the concrete [`GitRepo`] backend
//! - Error handling and result types

pub mod commands;
pub mod core;

// Re-export the core public API for external users
pub use core::{
    action_set,
    classify,
    resolve_refs,
    simple_action_set,
    ActionDispatcher,
    ActionOutcome,
    Bucket,
    BucketAction,
    Category,
    CategoryBuckets,
    CommandId,
    CommandRegistry,
    CommandSpec,
    ConfirmationRequest,
    Confirmer,
    DiffContext,
    DiffRequestSpec,
    DiffSupport,
    DiffViewer,
    DisplayMode,
    FileAction,
    FileOpener,
    GitRefSpec,
    GitRepo,
    // Error handling
    GitStagerError,
    MarkStore,
    Result,
    SelectionStore,
    Settings,
    SimpleEntry,
    SpecialRef,
    StageCoordinator,
    StatusEntry,
    SubStatus,
    WorkingTreeBackend,
};
