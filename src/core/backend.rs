//! Abstract repository backend.
//!
//! The dispatcher never runs git itself. Every mutation goes through a
//! [`WorkingTreeBackend`], which is expected to publish a fresh snapshot on success
//! through its own refresh mechanism. [`GitRepo`](crate::core::git::GitRepo) is the
//! concrete implementation used by the binary.

use crate::core::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait WorkingTreeBackend: Send + Sync {
    /// Stage the given paths. Adding an already-staged path is a no-op.
    async fn add(&self, paths: &[String]) -> Result<()>;

    /// Stage every unstaged change of tracked files
    async fn add_all_unstaged(&self) -> Result<()>;

    /// Start tracking every untracked file
    async fn add_all_untracked(&self) -> Result<()>;

    /// Unstage one path, or everything when `path` is `None`
    async fn reset(&self, path: Option<&str>) -> Result<()>;

    /// Restore one path from the index, or every unstaged change when `path` is `None`
    async fn checkout(&self, path: Option<&str>) -> Result<()>;

    /// Discard all staged and unstaged changes in one step
    async fn reset_to_commit(&self) -> Result<()>;

    /// Externally owned mark flag for `path`
    fn get_mark(&self, path: &str) -> bool;
}
