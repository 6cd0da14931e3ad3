//! Selection and marking state.
//!
//! The coordinator owns a [`SelectionStore`] holding at most one selected entry.
//! Snapshots are rebuilt wholesale on every refresh, so a selection is never assumed
//! to survive: callers re-validate it against the current snapshot with
//! [`SelectionStore::resolve`], which compares by four-field equality.
//!
//! Marks belong to the backend. [`marked_entries`] queries the mark predicate on every
//! call and never caches the result, because marks may be toggled out-of-band.

use crate::core::backend::WorkingTreeBackend;
use crate::core::status_entry::StatusEntry;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionStore {
    selected: Option<StatusEntry>,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the selection; `None` deselects
    pub fn select(&mut self, entry: Option<StatusEntry>) {
        if let Some(entry) = &entry {
            log::debug!("Selected {entry}");
        }
        self.selected = entry;
    }

    pub fn get(&self) -> Option<&StatusEntry> {
        self.selected.as_ref()
    }

    /// Whether `candidate` is the same logical change as the selection
    pub fn is_selected(&self, candidate: &StatusEntry) -> bool {
        self.selected
            .as_ref()
            .is_some_and(|selected| selected.same_change(candidate))
    }

    /// Find the selection in `snapshot`, if it still exists there
    pub fn resolve<'a>(&self, snapshot: &'a [StatusEntry]) -> Option<&'a StatusEntry> {
        snapshot.iter().find(|entry| self.is_selected(entry))
    }
}

/// Entries of `entries` currently marked by the backend, in input order
pub fn marked_entries(entries: &[StatusEntry], backend: &dyn WorkingTreeBackend) -> Vec<StatusEntry> {
    entries
        .iter()
        .filter(|entry| backend.get_mark(entry.to_path()))
        .cloned()
        .collect()
}
