//! Git repository backend.
//!
//! [`GitRepo`] reads status snapshots through `git2` and performs every mutation by
//! invoking the `git` executable in the working directory, so hooks, attributes and
//! sparse checkouts behave exactly as on the command line. It implements
//! [`WorkingTreeBackend`] for the dispatcher and owns the repository's [`MarkStore`].
//!
//! # Status codes
//! Each path becomes one [`StatusEntry`] with porcelain-style `XY` codes: `A M D R T`
//! or a space per column, `??` for untracked paths and `UU` for conflicts. Ignored
//! paths are not reported. `fromPath` is only set for renames recorded in the index.
//!
//! The rename sources of the last snapshot are remembered, so resetting or restoring
//! a rename target also covers the path it was renamed from.

use crate::core::backend::WorkingTreeBackend;
use crate::core::error::{GitStagerError, Result};
use crate::core::marks::MarkStore;
use crate::core::status_entry::{Category, StatusEntry};
use async_trait::async_trait;
use git2::{Delta, Repository, Status, StatusOptions};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::sync::{Mutex, PoisonError};
use tokio::process::Command;

pub struct GitRepo {
    repo: Mutex<Repository>,
    workdir: PathBuf,
    marks: MarkStore,
    rename_sources: Mutex<HashMap<String, String>>,
}

/// Porcelain `XY` codes for a set of git2 status flags, or `None` for ignored/clean paths
pub fn status_codes(status: Status) -> Option<(char, char)> {
    if status.is_ignored() {
        return None;
    }
    if status.is_conflicted() {
        return Some(('U', 'U'));
    }

    // A rename with edits carries both flags and is still reported as a rename
    let index = if status.is_index_renamed() {
        'R'
    } else if status.is_index_new() {
        'A'
    } else if status.is_index_modified() {
        'M'
    } else if status.is_index_deleted() {
        'D'
    } else if status.is_index_typechange() {
        'T'
    } else {
        ' '
    };

    if status.is_wt_new() && index == ' ' {
        return Some(('?', '?'));
    }

    let worktree = if status.is_wt_modified() {
        'M'
    } else if status.is_wt_deleted() {
        'D'
    } else if status.is_wt_renamed() {
        'R'
    } else if status.is_wt_typechange() {
        'T'
    } else {
        ' '
    };

    if index == ' ' && worktree == ' ' {
        None
    } else {
        Some((index, worktree))
    }
}

impl GitRepo {
    /// Discover the repository containing `path` and load its persisted marks
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::discover(path).map_err(|_| GitStagerError::NotInGitRepo)?;
        let workdir = repo
            .workdir()
            .ok_or(GitStagerError::NoWorkingDirectory)?
            .to_path_buf();
        let marks = MarkStore::for_repository(&workdir)?;
        Ok(Self::with_marks(repo, workdir, marks))
    }

    /// Open with an explicit mark store instead of the cached one
    pub fn open_with_marks<P: AsRef<Path>>(path: P, marks: MarkStore) -> Result<Self> {
        let repo = Repository::discover(path).map_err(|_| GitStagerError::NotInGitRepo)?;
        let workdir = repo
            .workdir()
            .ok_or(GitStagerError::NoWorkingDirectory)?
            .to_path_buf();
        Ok(Self::with_marks(repo, workdir, marks))
    }

    fn with_marks(repo: Repository, workdir: PathBuf, marks: MarkStore) -> Self {
        log::debug!("Opened repository at {}", workdir.display());
        Self {
            repo: Mutex::new(repo),
            workdir,
            marks,
            rename_sources: Mutex::new(HashMap::new()),
        }
    }

    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    pub fn marks(&self) -> &MarkStore {
        &self.marks
    }

    pub fn set_mark(&self, path: &str, marked: bool) -> Result<()> {
        self.marks.set_mark(path, marked)
    }

    /// Read a fresh snapshot of every changed path, sorted by path
    pub fn status_snapshot(&self) -> Result<Vec<StatusEntry>> {
        let repo = self.repo.lock().unwrap_or_else(PoisonError::into_inner);

        let mut opts = StatusOptions::new();
        opts.include_untracked(true)
            .recurse_untracked_dirs(true)
            .include_ignored(false)
            .renames_head_to_index(true);

        let statuses = repo.statuses(Some(&mut opts))?;
        let mut entries = Vec::new();
        let mut rename_sources = HashMap::new();

        for entry in statuses.iter() {
            let Some((index, worktree)) = status_codes(entry.status()) else {
                continue;
            };
            if Category::derive(index, worktree).is_none() {
                continue;
            }

            let renamed = entry
                .head_to_index()
                .filter(|delta| delta.status() == Delta::Renamed);
            let (from_path, to_path) = match renamed {
                Some(delta) => {
                    let from = delta
                        .old_file()
                        .path()
                        .and_then(Path::to_str)
                        .ok_or(GitStagerError::InvalidUtf8Path)?;
                    let to = delta
                        .new_file()
                        .path()
                        .and_then(Path::to_str)
                        .ok_or(GitStagerError::InvalidUtf8Path)?;
                    rename_sources.insert(to.to_string(), from.to_string());
                    (Some(from.to_string()), to.to_string())
                }
                None => {
                    let path = entry.path().ok_or(GitStagerError::InvalidUtf8Path)?;
                    (None, path.to_string())
                }
            };

            entries.push(StatusEntry::new(from_path, to_path, index, worktree)?);
        }

        entries.sort_by(|a, b| a.to_path().cmp(b.to_path()));
        *self
            .rename_sources
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = rename_sources;
        log::debug!("Read {} changed paths", entries.len());
        Ok(entries)
    }

    /// Source path of `path` if the last snapshot showed it as a staged rename target
    fn rename_source(&self, path: &str) -> Option<String> {
        self.rename_sources
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(path)
            .cloned()
    }

    /// Run git with `args` in the working directory, capturing its output
    async fn run_git(&self, args: &[&str]) -> Result<()> {
        let command_line = args.join(" ");
        log::debug!("Running git {command_line}");

        let output = Command::new("git")
            .args(args)
            .current_dir(&self.workdir)
            .output()
            .await?;

        if !output.status.success() {
            let message = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(GitStagerError::git_command_failed(command_line, message));
        }

        Ok(())
    }

    /// Run git with `args`, letting it write to this process's terminal
    pub async fn run_git_inherited(&self, args: &[&str]) -> Result<()> {
        let command_line = args.join(" ");
        log::debug!("Running git {command_line} (interactive)");

        let status = Command::new("git")
            .args(args)
            .current_dir(&self.workdir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await?;

        if !status.success() {
            return Err(GitStagerError::git_command_failed(
                command_line,
                format!("exited with {status}"),
            ));
        }

        Ok(())
    }
}

#[async_trait]
impl WorkingTreeBackend for GitRepo {
    async fn add(&self, paths: &[String]) -> Result<()> {
        if paths.is_empty() {
            return Ok(());
        }
        let mut args = vec!["add", "--"];
        args.extend(paths.iter().map(String::as_str));
        self.run_git(&args).await
    }

    async fn add_all_unstaged(&self) -> Result<()> {
        self.run_git(&["add", "-u"]).await
    }

    async fn add_all_untracked(&self) -> Result<()> {
        let untracked: Vec<String> = self
            .status_snapshot()?
            .into_iter()
            .filter(|entry| entry.category() == Category::Untracked)
            .map(|entry| entry.to_path().to_string())
            .collect();
        if untracked.is_empty() {
            log::debug!("No untracked files to add");
            return Ok(());
        }
        let mut args = vec!["add", "--"];
        args.extend(untracked.iter().map(String::as_str));
        self.run_git(&args).await
    }

    async fn reset(&self, path: Option<&str>) -> Result<()> {
        match path {
            Some(path) => match self.rename_source(path) {
                Some(from) => {
                    self.run_git(&["reset", "--quiet", "--", path, from.as_str()])
                        .await
                }
                None => self.run_git(&["reset", "--quiet", "--", path]).await,
            },
            None => self.run_git(&["reset", "--quiet"]).await,
        }
    }

    async fn checkout(&self, path: Option<&str>) -> Result<()> {
        // A renamed file is restored under its source name
        let source = path.and_then(|path| self.rename_source(path));
        let target = source.as_deref().or(path).unwrap_or(".");
        self.run_git(&["checkout", "--", target]).await
    }

    async fn reset_to_commit(&self) -> Result<()> {
        self.run_git(&["reset", "--hard", "HEAD"]).await
    }

    fn get_mark(&self, path: &str) -> bool {
        self.marks.is_marked(path)
    }
}
