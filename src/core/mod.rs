//! Core functionality for git-stager.
//!
//! This module holds the working-tree change model, its classification and action
//! bindings, the coordinator that routes commands to the dispatcher, and the concrete
//! git backend, settings and presentation helpers used by the binary.

pub mod action_sets;
pub mod backend;
pub mod classifier;
pub mod collaborators;
pub mod colors;
pub mod command_registry;
pub mod config;
pub mod coordinator;
pub mod diff_refs;
pub mod dirs;
pub mod dispatcher;
pub mod error;
pub mod git;
pub mod marks;
pub mod output;
pub mod selection;
pub mod status_entry;

// === Error handling ===
pub use error::{DiscardStep, GitStagerError, Result};

// === Status model ===
// One changed path per entry, categorized by its two status columns
pub use status_entry::{describe_code, Category, StatusEntry};

// === Classification ===
pub use classifier::{classify, CategoryBuckets, DisplayMode, SimpleEntry, SubStatus};

// === Selection and marks ===
pub use marks::MarkStore;
pub use selection::{marked_entries, SelectionStore};

// === Collaborators ===
// Injected capabilities the dispatcher awaits
pub use backend::WorkingTreeBackend;
pub use collaborators::{ConfirmationRequest, Confirmer, DiffViewer, FileOpener};

// === Diff references ===
pub use diff_refs::{
    resolve_refs, DiffContext, DiffRequestSpec, DiffSupport, GitRefSpec, RefPair, SpecialRef,
    HEAD_REF,
};

// === Commands and dispatch ===
pub use action_sets::{action_set, simple_action_set, Bucket, BucketAction};
pub use command_registry::{CommandId, CommandRegistry, CommandSpec};
pub use coordinator::StageCoordinator;
pub use dispatcher::{ActionDispatcher, ActionOutcome, FileAction};

// === Git backend ===
pub use git::GitRepo;

// === Settings ===
pub use config::Settings;

// === Output formatting ===
pub use colors::{format_entry, get_status_color_style};
pub use output::{print_cancelled, print_error, print_info, print_section_header, print_success};
