//! Centralized setup shared by every CLI verb.
//!
//! [`Session::initialize`] opens the repository containing the current directory,
//! loads settings, wires the terminal collaborators into an [`ActionDispatcher`] and
//! gives the coordinator a fresh snapshot. Each verb starts from its own session, so
//! it always acts on the current working tree.

use crate::commands::interactive::{AutoConfirm, EditorOpener, GitDiffViewer, TerminalConfirmer};
use crate::core::{
    classifier::DisplayMode,
    collaborators::Confirmer,
    command_registry::CommandRegistry,
    config::Settings,
    coordinator::StageCoordinator,
    dispatcher::ActionDispatcher,
    error::Result,
    git::GitRepo,
};
use std::env;
use std::sync::Arc;

/// Global CLI flags that shape a session
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionOptions {
    /// Accept every confirmation without asking
    pub assume_yes: bool,
    /// Force simple mode regardless of settings
    pub simple: bool,
}

pub struct Session {
    pub repo: Arc<GitRepo>,
    pub coordinator: StageCoordinator,
}

impl Session {
    pub fn initialize(options: SessionOptions) -> Result<Self> {
        let current_dir = env::current_dir()?;
        let repo = Arc::new(GitRepo::open(&current_dir)?);
        let settings = Settings::load_or_default()?;

        let mode = if options.simple {
            DisplayMode::Simple
        } else {
            settings.display_mode()
        };

        let confirmer: Arc<dyn Confirmer> = if options.assume_yes {
            Arc::new(AutoConfirm)
        } else {
            Arc::new(TerminalConfirmer)
        };

        let dispatcher = ActionDispatcher::new(
            repo.clone(),
            confirmer,
            Arc::new(GitDiffViewer::new(repo.clone(), settings.diff_support())),
            Arc::new(EditorOpener::new(repo.workdir().to_path_buf())),
        );

        let mut coordinator = StageCoordinator::new(dispatcher, CommandRegistry::global(), mode);
        coordinator.replace_snapshot(repo.status_snapshot()?);

        log::debug!(
            "Session ready in {mode} mode with {} changed paths",
            coordinator.snapshot().len()
        );

        Ok(Self { repo, coordinator })
    }
}
