//! Terminal implementations of the dispatcher's collaborators.

use crate::core::{
    collaborators::{ConfirmationRequest, Confirmer, DiffViewer, FileOpener},
    diff_refs::{DiffRequestSpec, DiffSupport, GitRefSpec, SpecialRef},
    error::{GitStagerError, Result},
    git::GitRepo,
    status_entry::StatusEntry,
};
use async_trait::async_trait;
use colored::*;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Asks on stdin; only `y`, `yes` or the accept label count as yes
pub struct TerminalConfirmer;

#[async_trait]
impl Confirmer for TerminalConfirmer {
    async fn confirm(&self, request: &ConfirmationRequest) -> Result<bool> {
        println!("\n{}", request.title.red().bold());
        println!("{}", request.body.white());
        print!(
            "{} ",
            format!("[{} / cancel]:", request.accept_label).bright_black()
        );
        std::io::stdout().flush()?;

        let mut answer = String::new();
        BufReader::new(tokio::io::stdin())
            .read_line(&mut answer)
            .await?;

        let answer = answer.trim();
        let accepted = answer.eq_ignore_ascii_case("y")
            || answer.eq_ignore_ascii_case("yes")
            || answer.eq_ignore_ascii_case(&request.accept_label);
        log::debug!("Confirmation '{}' answered {accepted}", request.title);
        Ok(accepted)
    }
}

/// Accepts every confirmation (`--yes`)
pub struct AutoConfirm;

#[async_trait]
impl Confirmer for AutoConfirm {
    async fn confirm(&self, request: &ConfirmationRequest) -> Result<bool> {
        log::debug!("Confirmation '{}' accepted by --yes", request.title);
        Ok(true)
    }
}

/// Renders diffs with `git diff` against HEAD
pub struct GitDiffViewer {
    repo: Arc<GitRepo>,
    support: DiffSupport,
}

impl GitDiffViewer {
    pub fn new(repo: Arc<GitRepo>, support: DiffSupport) -> Self {
        Self { repo, support }
    }
}

#[async_trait]
impl DiffViewer for GitDiffViewer {
    fn supports(&self, path: &str) -> bool {
        self.support.is_supported(path)
    }

    async fn open_diff(&self, request: &DiffRequestSpec) -> Result<()> {
        let previous = request.previous_ref.to_string();
        let mut args = vec!["diff", "--color"];
        match &request.current_ref {
            GitRefSpec::Special(SpecialRef::Index) => args.push("--cached"),
            GitRefSpec::Special(SpecialRef::Working) => {}
            GitRefSpec::Named(name) => {
                return Err(GitStagerError::git_command_failed(
                    format!("diff {previous} {name}"),
                    "only working tree and index diffs are supported",
                ))
            }
        }
        args.push(&previous);
        args.push("--");
        args.push(&request.path);

        println!(
            "{}{}{}",
            "═══ ".bright_blue().bold(),
            request.path.bright_blue().bold(),
            format!(" ({previous} ↔ {}) ═══", request.current_ref)
                .bright_blue()
                .bold()
        );
        self.repo.run_git_inherited(&args).await
    }
}

/// Opens entries in `$VISUAL` or `$EDITOR`, or prints the path when neither is set
pub struct EditorOpener {
    workdir: PathBuf,
}

impl EditorOpener {
    pub fn new(workdir: PathBuf) -> Self {
        Self { workdir }
    }

    fn editor() -> Option<String> {
        ["VISUAL", "EDITOR"]
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .find(|value| !value.trim().is_empty())
    }
}

#[async_trait]
impl FileOpener for EditorOpener {
    async fn open(&self, entry: &StatusEntry) -> Result<()> {
        let path = self.workdir.join(entry.to_path());

        let Some(editor) = Self::editor() else {
            println!("{}", path.display());
            return Ok(());
        };

        let mut parts = editor.split_whitespace();
        let Some(program) = parts.next() else {
            println!("{}", path.display());
            return Ok(());
        };

        log::debug!("Opening {} with {program}", path.display());
        let status = tokio::process::Command::new(program)
            .args(parts)
            .arg(&path)
            .status()
            .await?;

        if !status.success() {
            log::warn!("{program} exited with {status}");
        }
        Ok(())
    }
}
