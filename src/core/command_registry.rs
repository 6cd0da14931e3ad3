//! Process-wide table of file commands.
//!
//! Seven stable identifiers map to a fixed `{label, caption, action}` record. Several
//! coordinators may share one registry, so insertion is insert-if-absent and
//! [`CommandRegistry::register_file_commands`] is idempotent: the first caller
//! registers, later callers find every identifier already present.
//!
//! # Public API
//! - [`CommandId`]: Typed command identifiers with their stable string ids
//! - [`CommandSpec`]: Registered record for one identifier
//! - [`CommandRegistry`]: Shared table, with [`CommandRegistry::global`] for the process

use crate::core::diff_refs::DiffContext;
use crate::core::dispatcher::FileAction;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandId {
    Open,
    Unstage,
    Stage,
    Track,
    Discard,
    DiffWorking,
    DiffIndex,
}

impl CommandId {
    pub const ALL: [CommandId; 7] = [
        CommandId::Open,
        CommandId::Unstage,
        CommandId::Stage,
        CommandId::Track,
        CommandId::Discard,
        CommandId::DiffWorking,
        CommandId::DiffIndex,
    ];

    /// Stable identifier string
    pub fn id(&self) -> &'static str {
        match self {
            CommandId::Open => "git:context-open",
            CommandId::Unstage => "git:context-unstage",
            CommandId::Stage => "git:context-stage",
            CommandId::Track => "git:context-track",
            CommandId::Discard => "git:context-discard",
            CommandId::DiffWorking => "git:context-diffWorking",
            CommandId::DiffIndex => "git:context-diffIndex",
        }
    }

    pub fn from_id(id: &str) -> Option<CommandId> {
        Self::ALL.into_iter().find(|command| command.id() == id)
    }

    /// Record this identifier is registered with
    pub fn spec(&self) -> CommandSpec {
        let (label, caption, action) = match self {
            CommandId::Open => ("Open", "Open selected file", FileAction::Open),
            CommandId::Unstage => (
                "Unstage",
                "Unstage the changes of selected file",
                FileAction::Unstage,
            ),
            CommandId::Stage => (
                "Stage",
                "Stage the changes of selected file",
                FileAction::Stage,
            ),
            CommandId::Track => ("Track", "Start tracking selected file", FileAction::Track),
            CommandId::Discard => (
                "Discard",
                "Discard recent changes of selected file",
                FileAction::Discard,
            ),
            CommandId::DiffWorking => (
                "Diff",
                "Diff selected file",
                FileAction::Diff(DiffContext::Working),
            ),
            CommandId::DiffIndex => (
                "Diff",
                "Diff selected file",
                FileAction::Diff(DiffContext::Index),
            ),
        };
        CommandSpec {
            command: *self,
            label,
            caption,
            action,
        }
    }
}

impl fmt::Display for CommandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    pub command: CommandId,
    pub label: &'static str,
    pub caption: &'static str,
    pub action: FileAction,
}

#[derive(Debug, Default)]
pub struct CommandRegistry {
    commands: RwLock<HashMap<&'static str, CommandSpec>>,
}

static GLOBAL_REGISTRY: OnceLock<Arc<CommandRegistry>> = OnceLock::new();

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The registry shared by every coordinator in this process
    pub fn global() -> Arc<CommandRegistry> {
        GLOBAL_REGISTRY
            .get_or_init(|| Arc::new(CommandRegistry::new()))
            .clone()
    }

    pub fn has_command(&self, id: &str) -> bool {
        self.commands
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(id)
    }

    /// Insert `spec` unless its identifier is already registered.
    /// Returns whether the record was inserted.
    pub fn add_command(&self, spec: CommandSpec) -> bool {
        let mut commands = self
            .commands
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let id = spec.command.id();
        if commands.contains_key(id) {
            return false;
        }
        log::debug!("Registering command {id} ({})", spec.label);
        commands.insert(id, spec);
        true
    }

    /// Register all file commands, skipping those already present.
    /// Returns the number of newly registered commands.
    pub fn register_file_commands(&self) -> usize {
        CommandId::ALL
            .iter()
            .filter(|command| self.add_command(command.spec()))
            .count()
    }

    pub fn get(&self, id: &str) -> Option<CommandSpec> {
        self.commands
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .copied()
    }

    pub fn len(&self) -> usize {
        self.commands
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
