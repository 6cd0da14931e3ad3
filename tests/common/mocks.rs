//! Recording collaborators for dispatcher and coordinator tests
//!
//! Every mock records the calls it receives so tests can assert exact call
//! sequences and call counts without touching a real repository.

#![allow(dead_code)]

use async_trait::async_trait;
use git_stager::core::{
    collaborators::{ConfirmationRequest, Confirmer, DiffViewer, FileOpener},
    diff_refs::{DiffRequestSpec, DiffSupport},
    dispatcher::ActionDispatcher,
    error::{GitStagerError, Result},
    status_entry::StatusEntry,
    WorkingTreeBackend,
};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

/// One call received by [`RecordingBackend`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCall {
    Add(Vec<String>),
    AddAllUnstaged,
    AddAllUntracked,
    Reset(Option<String>),
    Checkout(Option<String>),
    ResetToCommit,
}

#[derive(Default)]
pub struct RecordingBackend {
    calls: Mutex<Vec<BackendCall>>,
    marks: Mutex<HashSet<String>>,
    failing: Mutex<HashSet<&'static str>>,
}

impl RecordingBackend {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Make every call to `operation` ("add", "reset", "checkout", ...) fail
    pub fn fail_on(&self, operation: &'static str) {
        self.failing.lock().unwrap().insert(operation);
    }

    pub fn mark(&self, path: &str) {
        self.marks.lock().unwrap().insert(path.to_string());
    }

    pub fn calls(&self) -> Vec<BackendCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, operation: &'static str, call: BackendCall) -> Result<()> {
        self.calls.lock().unwrap().push(call);
        if self.failing.lock().unwrap().contains(operation) {
            return Err(GitStagerError::git_command_failed(
                operation,
                "simulated backend failure",
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl WorkingTreeBackend for RecordingBackend {
    async fn add(&self, paths: &[String]) -> Result<()> {
        self.record("add", BackendCall::Add(paths.to_vec()))
    }

    async fn add_all_unstaged(&self) -> Result<()> {
        self.record("add_all_unstaged", BackendCall::AddAllUnstaged)
    }

    async fn add_all_untracked(&self) -> Result<()> {
        self.record("add_all_untracked", BackendCall::AddAllUntracked)
    }

    async fn reset(&self, path: Option<&str>) -> Result<()> {
        self.record("reset", BackendCall::Reset(path.map(str::to_string)))
    }

    async fn checkout(&self, path: Option<&str>) -> Result<()> {
        self.record("checkout", BackendCall::Checkout(path.map(str::to_string)))
    }

    async fn reset_to_commit(&self) -> Result<()> {
        self.record("reset_to_commit", BackendCall::ResetToCommit)
    }

    fn get_mark(&self, path: &str) -> bool {
        self.marks.lock().unwrap().contains(path)
    }
}

/// Answers every confirmation with a fixed decision and keeps the requests
pub struct ScriptedConfirmer {
    accept: bool,
    requests: Mutex<Vec<ConfirmationRequest>>,
}

impl ScriptedConfirmer {
    pub fn accepting() -> Arc<Self> {
        Arc::new(Self {
            accept: true,
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn declining() -> Arc<Self> {
        Arc::new(Self {
            accept: false,
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn requests(&self) -> Vec<ConfirmationRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Confirmer for ScriptedConfirmer {
    async fn confirm(&self, request: &ConfirmationRequest) -> Result<bool> {
        self.requests.lock().unwrap().push(request.clone());
        Ok(self.accept)
    }
}

pub struct RecordingDiffViewer {
    support: DiffSupport,
    fail: bool,
    requests: Mutex<Vec<DiffRequestSpec>>,
}

impl RecordingDiffViewer {
    pub fn new() -> Arc<Self> {
        Self::with_support(DiffSupport::new(["png"]), false)
    }

    pub fn failing() -> Arc<Self> {
        Self::with_support(DiffSupport::new(["png"]), true)
    }

    fn with_support(support: DiffSupport, fail: bool) -> Arc<Self> {
        Arc::new(Self {
            support,
            fail,
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn requests(&self) -> Vec<DiffRequestSpec> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl DiffViewer for RecordingDiffViewer {
    fn supports(&self, path: &str) -> bool {
        self.support.is_supported(path)
    }

    async fn open_diff(&self, request: &DiffRequestSpec) -> Result<()> {
        self.requests.lock().unwrap().push(request.clone());
        if self.fail {
            return Err(GitStagerError::git_command_failed(
                "diff",
                "viewer unavailable",
            ));
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingOpener {
    opened: Mutex<Vec<String>>,
}

impl RecordingOpener {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }
}

#[async_trait]
impl FileOpener for RecordingOpener {
    async fn open(&self, entry: &StatusEntry) -> Result<()> {
        self.opened.lock().unwrap().push(entry.to_path().to_string());
        Ok(())
    }
}

/// A dispatcher wired to recording collaborators, with handles to inspect them
pub struct Harness {
    pub backend: Arc<RecordingBackend>,
    pub confirmer: Arc<ScriptedConfirmer>,
    pub diff_viewer: Arc<RecordingDiffViewer>,
    pub opener: Arc<RecordingOpener>,
    pub dispatcher: ActionDispatcher,
}

impl Harness {
    pub fn with(confirmer: Arc<ScriptedConfirmer>, diff_viewer: Arc<RecordingDiffViewer>) -> Self {
        let backend = RecordingBackend::new();
        let opener = RecordingOpener::new();
        let dispatcher = ActionDispatcher::new(
            backend.clone(),
            confirmer.clone(),
            diff_viewer.clone(),
            opener.clone(),
        );
        Self {
            backend,
            confirmer,
            diff_viewer,
            opener,
            dispatcher,
        }
    }

    pub fn accepting() -> Self {
        Self::with(ScriptedConfirmer::accepting(), RecordingDiffViewer::new())
    }

    pub fn declining() -> Self {
        Self::with(ScriptedConfirmer::declining(), RecordingDiffViewer::new())
    }
}

/// Build an entry, panicking on invalid codes
pub fn entry(path: &str, index: char, worktree: char) -> StatusEntry {
    StatusEntry::new(None, path, index, worktree).expect("valid status entry")
}
