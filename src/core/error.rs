//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`GitStagerError`] which covers every failure mode of the
//! coordinator and its concrete collaborators. It uses `thiserror` for ergonomic error
//! definitions and includes constructors for the structured variants.
//!
//! # Public API
//! - [`GitStagerError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, GitStagerError>`
//!
//! # Error Categories
//! - **Repository access**: Repository not found, git2 library errors, I/O
//! - **Model invariants**: Empty paths, status codes that describe no change
//! - **Backend failures**: Rejected add/reset/checkout calls, partial discards
//! - **Diff**: Unsupported paths and viewer failures
//! - **Dispatch**: Missing selection, commands outside an entry's action set
//! - **Persistence**: Settings and mark files
//!
//! A declined confirmation is deliberately absent: it is reported as
//! [`ActionOutcome::Cancelled`](crate::core::dispatcher::ActionOutcome::Cancelled).

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Step of a single-file discard that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscardStep {
    /// `reset(path)`: removing the change from the index
    Unstage,
    /// `checkout(path)`: restoring worktree content from HEAD
    Restore,
}

impl fmt::Display for DiscardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiscardStep::Unstage => write!(f, "unstage"),
            DiscardStep::Restore => write!(f, "restore"),
        }
    }
}

/// Domain-specific error types for git-stager
#[derive(Error, Debug)]
pub enum GitStagerError {
    // Git repository errors
    #[error("Not in a git repository")]
    NotInGitRepo,

    #[error("Git repository error: {0}")]
    GitRepo(#[from] git2::Error),

    #[error("Repository has no working directory")]
    NoWorkingDirectory,

    #[error("Invalid UTF-8 path in repository")]
    InvalidUtf8Path,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Status model errors
    #[error("Status entry path must not be empty")]
    EmptyPath,

    #[error("Status code '{index}{worktree}' does not describe a change")]
    NotAChange { index: char, worktree: char },

    // Backend errors
    #[error("git {command} failed: {message}")]
    GitCommandFailed { command: String, message: String },

    #[error("{operation} failed: {source}")]
    BackendRejected {
        operation: &'static str,
        source: Box<GitStagerError>,
    },

    #[error("Discard changes for {path} failed during {step}: {source}")]
    DiscardFailed {
        path: String,
        step: DiscardStep,
        source: Box<GitStagerError>,
    },

    // Diff errors
    #[error("Diff is not supported for {path}")]
    DiffNotSupported { path: String },

    #[error("Failed to open diff view for {path}: {source}")]
    DiffOpenFailed {
        path: String,
        source: Box<GitStagerError>,
    },

    // Dispatch errors
    #[error("No file selected")]
    NoSelection,

    #[error("Command '{command}' does not apply to {category} files")]
    CommandNotApplicable { command: String, category: String },

    #[error("'{action}' is not offered in {mode} mode")]
    BucketActionUnavailable { action: String, mode: String },

    #[error("Unknown command: {id}")]
    UnknownCommand { id: String },

    #[error("No changed file at path: {path}")]
    EntryNotFound { path: String },

    // Persistence errors
    #[error("Failed to create directory '{path}': {source}")]
    DirectoryCreationFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read settings file '{path}': {source}")]
    SettingsReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse settings file '{path}': {source}")]
    SettingsParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to read marks file '{path}': {source}")]
    MarksReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse marks file '{path}': {source}")]
    MarksParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to write marks file '{path}': {source}")]
    MarksWriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    // JSON serialization errors
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results using GitStagerError
pub type Result<T> = std::result::Result<T, GitStagerError>;

impl GitStagerError {
    /// Create a git command failure from the command line and its stderr
    pub fn git_command_failed(command: impl Into<String>, message: impl Into<String>) -> Self {
        Self::GitCommandFailed {
            command: command.into(),
            message: message.into(),
        }
    }

    /// Wrap a backend error with the name of the operation that was attempted
    pub fn backend_rejected(operation: &'static str, source: GitStagerError) -> Self {
        Self::BackendRejected {
            operation,
            source: Box::new(source),
        }
    }

    /// Create a discard failure for one step of the unstage-then-restore chain
    pub fn discard_failed(path: impl Into<String>, step: DiscardStep, source: GitStagerError) -> Self {
        Self::DiscardFailed {
            path: path.into(),
            step,
            source: Box::new(source),
        }
    }

    pub fn diff_not_supported(path: impl Into<String>) -> Self {
        Self::DiffNotSupported { path: path.into() }
    }

    pub fn diff_open_failed(path: impl Into<String>, source: GitStagerError) -> Self {
        Self::DiffOpenFailed {
            path: path.into(),
            source: Box::new(source),
        }
    }

    pub fn command_not_applicable(command: impl Into<String>, category: impl fmt::Display) -> Self {
        Self::CommandNotApplicable {
            command: command.into(),
            category: category.to_string(),
        }
    }

    pub fn bucket_action_unavailable(action: impl fmt::Display, mode: impl fmt::Display) -> Self {
        Self::BucketActionUnavailable {
            action: action.to_string(),
            mode: mode.to_string(),
        }
    }

    pub fn unknown_command(id: impl Into<String>) -> Self {
        Self::UnknownCommand { id: id.into() }
    }

    pub fn entry_not_found(path: impl Into<String>) -> Self {
        Self::EntryNotFound { path: path.into() }
    }

    /// Create a directory creation failed error
    pub fn directory_creation_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::DirectoryCreationFailed {
            path: path.into(),
            source,
        }
    }

    pub fn settings_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::SettingsReadFailed {
            path: path.into(),
            source,
        }
    }

    pub fn settings_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::SettingsParseFailed {
            path: path.into(),
            source,
        }
    }

    pub fn marks_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::MarksReadFailed {
            path: path.into(),
            source,
        }
    }

    pub fn marks_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::MarksParseFailed {
            path: path.into(),
            source,
        }
    }

    pub fn marks_write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::MarksWriteFailed {
            path: path.into(),
            source,
        }
    }
}
