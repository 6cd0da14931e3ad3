//! Injected capabilities the dispatcher awaits: confirmation, diff view, file open.
//!
//! None of the core logic depends on how these are presented. The binary provides
//! terminal implementations in [`crate::commands::interactive`].

use crate::core::diff_refs::DiffRequestSpec;
use crate::core::error::Result;
use crate::core::status_entry::StatusEntry;
use async_trait::async_trait;

/// Yes/no question put to the user before a destructive action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationRequest {
    pub title: String,
    pub body: String,
    pub accept_label: String,
}

impl ConfirmationRequest {
    /// Confirmation for discarding the changes of one path
    pub fn discard_file(path: &str) -> Self {
        Self {
            title: "Discard changes".to_string(),
            body: format!(
                "Are you sure you want to permanently discard changes to {path}? This action cannot be undone."
            ),
            accept_label: "Discard".to_string(),
        }
    }

    /// Confirmation for discarding the changes of every file
    pub fn discard_all() -> Self {
        Self {
            title: "Discard all changes".to_string(),
            body: "Are you sure you want to permanently discard changes to all files? This action cannot be undone."
                .to_string(),
            accept_label: "Discard".to_string(),
        }
    }
}

#[async_trait]
pub trait Confirmer: Send + Sync {
    /// Returns `Ok(true)` only on an explicit affirmative answer
    async fn confirm(&self, request: &ConfirmationRequest) -> Result<bool>;
}

#[async_trait]
pub trait DiffViewer: Send + Sync {
    /// Whether the viewer can render a diff of `path`
    fn supports(&self, path: &str) -> bool;

    async fn open_diff(&self, request: &DiffRequestSpec) -> Result<()>;
}

#[async_trait]
pub trait FileOpener: Send + Sync {
    async fn open(&self, entry: &StatusEntry) -> Result<()>;
}
