//! Partitioning of a status snapshot into display buckets.
//!
//! [`classify`] is a pure function of `(entries, mode)`. In detailed mode every entry
//! lands in exactly one of three buckets; in simple mode staged and unstaged entries
//! share one list while remembering their [`SubStatus`], and untracked paths (outside
//! version control) are left out.

use crate::core::status_entry::{Category, StatusEntry};
use std::fmt;

/// Display policy for a snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// Separate staged, unstaged and untracked sections
    #[default]
    Detailed,
    /// One unified list of tracked changes
    Simple,
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayMode::Detailed => write!(f, "detailed"),
            DisplayMode::Simple => write!(f, "simple"),
        }
    }
}

/// Sub-status an entry carried before being merged into the simple-mode list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubStatus {
    Staged,
    Unstaged,
}

impl fmt::Display for SubStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubStatus::Staged => write!(f, "staged"),
            SubStatus::Unstaged => write!(f, "unstaged"),
        }
    }
}

/// Entry of the simple-mode list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleEntry {
    pub entry: StatusEntry,
    pub sub_status: SubStatus,
}

/// Result of classifying one snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryBuckets {
    Detailed {
        staged: Vec<StatusEntry>,
        unstaged: Vec<StatusEntry>,
        untracked: Vec<StatusEntry>,
    },
    Simple {
        changed: Vec<SimpleEntry>,
    },
}

impl CategoryBuckets {
    pub fn mode(&self) -> DisplayMode {
        match self {
            CategoryBuckets::Detailed { .. } => DisplayMode::Detailed,
            CategoryBuckets::Simple { .. } => DisplayMode::Simple,
        }
    }

    /// Total number of entries across all buckets
    pub fn len(&self) -> usize {
        match self {
            CategoryBuckets::Detailed {
                staged,
                unstaged,
                untracked,
            } => staged.len() + unstaged.len() + untracked.len(),
            CategoryBuckets::Simple { changed } => changed.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Partition `entries` according to `mode`, preserving input order within buckets
pub fn classify(entries: &[StatusEntry], mode: DisplayMode) -> CategoryBuckets {
    match mode {
        DisplayMode::Detailed => {
            let mut staged = Vec::new();
            let mut unstaged = Vec::new();
            let mut untracked = Vec::new();

            for entry in entries {
                match entry.category() {
                    Category::Staged => staged.push(entry.clone()),
                    Category::Unstaged => unstaged.push(entry.clone()),
                    Category::Untracked => untracked.push(entry.clone()),
                }
            }

            CategoryBuckets::Detailed {
                staged,
                unstaged,
                untracked,
            }
        }
        DisplayMode::Simple => {
            let changed = entries
                .iter()
                .filter_map(|entry| {
                    let sub_status = match entry.category() {
                        Category::Staged => SubStatus::Staged,
                        Category::Unstaged => SubStatus::Unstaged,
                        Category::Untracked => return None,
                    };
                    Some(SimpleEntry {
                        entry: entry.clone(),
                        sub_status,
                    })
                })
                .collect();

            CategoryBuckets::Simple { changed }
        }
    }
}
