//! Status entries: one changed path and its dual status code.
//!
//! This module defines [`StatusEntry`], the per-snapshot representation of a changed
//! path, and [`Category`], the bucket an entry belongs to. The category is never
//! supplied by callers: it is derived from `(index_code, worktree_code)` when the entry
//! is built, so a stored category can never contradict [`Category::derive`].
//!
//! # Public API
//! - [`StatusEntry`]: Immutable changed-path record with porcelain-style codes
//! - [`Category`]: Staged, unstaged or untracked
//!
//! # Status codes
//! Codes follow `git status --porcelain`: `M` modified, `A` added, `D` deleted,
//! `R` renamed, `C` copied, `T` type changed, `U` unmerged, `?` untracked,
//! `!` ignored and a space for "no change in this column".

use crate::core::error::{GitStagerError, Result};
use std::fmt;

/// Code used in both columns for untracked paths
pub const UNTRACKED_CODE: char = '?';
/// Code used in both columns for ignored paths
pub const IGNORED_CODE: char = '!';
/// Code for a column without changes
pub const UNCHANGED_CODE: char = ' ';
/// Index code of a staged deletion
pub const DELETED_CODE: char = 'D';

/// Category of a changed path in detailed mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Staged,
    Unstaged,
    Untracked,
}

impl Category {
    /// Derive the category from a dual status code.
    ///
    /// `??` is untracked. Otherwise a change in the index column wins over a change
    /// in the worktree column, so a partially staged path (`MM`) is `Staged`.
    /// Clean (`  `) and ignored (`!!`) codes describe no change and yield `None`.
    pub fn derive(index_code: char, worktree_code: char) -> Option<Category> {
        if index_code == UNTRACKED_CODE && worktree_code == UNTRACKED_CODE {
            return Some(Category::Untracked);
        }
        if index_code == IGNORED_CODE || worktree_code == IGNORED_CODE {
            return None;
        }
        if index_code != UNCHANGED_CODE {
            return Some(Category::Staged);
        }
        if worktree_code != UNCHANGED_CODE {
            return Some(Category::Unstaged);
        }
        None
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Staged => "staged",
            Category::Unstaged => "unstaged",
            Category::Untracked => "untracked",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One changed path within a status snapshot.
///
/// Fields are private so that the derived category cannot drift from the codes.
/// Equality compares the four identity fields (`index_code`, `worktree_code`,
/// `from_path`, `to_path`); since `category` is a function of the codes, the derived
/// `PartialEq` is exactly that four-field equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StatusEntry {
    from_path: Option<String>,
    to_path: String,
    index_code: char,
    worktree_code: char,
    category: Category,
}

impl StatusEntry {
    /// Build an entry, validating the path and deriving the category
    pub fn new(
        from_path: Option<String>,
        to_path: impl Into<String>,
        index_code: char,
        worktree_code: char,
    ) -> Result<Self> {
        let to_path = to_path.into();
        if to_path.is_empty() {
            return Err(GitStagerError::EmptyPath);
        }

        let category = Category::derive(index_code, worktree_code).ok_or(
            GitStagerError::NotAChange {
                index: index_code,
                worktree: worktree_code,
            },
        )?;

        // A "rename" onto the same path carries no information
        let from_path = from_path.filter(|from| !from.is_empty() && *from != to_path);

        Ok(Self {
            from_path,
            to_path,
            index_code,
            worktree_code,
            category,
        })
    }

    /// Parse a single `git status --porcelain` line such as `" M a.py"`.
    ///
    /// Renames use the `R  old -> new` form.
    pub fn from_porcelain(line: &str) -> Result<Self> {
        let mut chars = line.chars();
        let index_code = chars.next().unwrap_or(UNCHANGED_CODE);
        let worktree_code = chars.next().unwrap_or(UNCHANGED_CODE);
        let rest = chars.as_str().trim_start();

        match rest.split_once(" -> ") {
            Some((from, to)) => Self::new(Some(from.to_string()), to, index_code, worktree_code),
            None => Self::new(None, rest, index_code, worktree_code),
        }
    }

    pub fn from_path(&self) -> Option<&str> {
        self.from_path.as_deref()
    }

    pub fn to_path(&self) -> &str {
        &self.to_path
    }

    pub fn index_code(&self) -> char {
        self.index_code
    }

    pub fn worktree_code(&self) -> char {
        self.worktree_code
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn is_rename(&self) -> bool {
        self.from_path.is_some()
    }

    /// Whether the index records a deletion of this path
    pub fn is_index_deletion(&self) -> bool {
        self.index_code == DELETED_CODE
    }

    /// Whether `other` is the same logical change within a render cycle
    pub fn same_change(&self, other: &StatusEntry) -> bool {
        self.index_code == other.index_code
            && self.worktree_code == other.worktree_code
            && self.from_path == other.from_path
            && self.to_path == other.to_path
    }

    /// The status code relevant for the entry's category
    pub fn display_code(&self) -> char {
        match self.category {
            Category::Staged => self.index_code,
            Category::Unstaged => self.worktree_code,
            Category::Untracked => UNTRACKED_CODE,
        }
    }

    /// Human-readable description of the entry's status
    pub fn description(&self) -> &'static str {
        describe_code(self.display_code())
    }
}

/// Get human-readable description for a single status code
pub fn describe_code(code: char) -> &'static str {
    match code {
        'M' => "modified",
        'A' => "new",
        'D' => "deleted",
        'R' => "renamed",
        'C' => "copied",
        'T' => "type changed",
        'U' => "unmerged",
        UNTRACKED_CODE => "untracked",
        IGNORED_CODE => "ignored",
        _ => "unchanged",
    }
}

impl fmt::Display for StatusEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.from_path {
            Some(from) => write!(
                f,
                "{}{} {} -> {}",
                self.index_code, self.worktree_code, from, self.to_path
            ),
            None => write!(f, "{}{} {}", self.index_code, self.worktree_code, self.to_path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_category() {
        assert_eq!(Category::derive('?', '?'), Some(Category::Untracked));
        assert_eq!(Category::derive('M', ' '), Some(Category::Staged));
        assert_eq!(Category::derive('A', ' '), Some(Category::Staged));
        assert_eq!(Category::derive('D', ' '), Some(Category::Staged));
        assert_eq!(Category::derive(' ', 'M'), Some(Category::Unstaged));
        assert_eq!(Category::derive(' ', 'D'), Some(Category::Unstaged));
        assert_eq!(Category::derive('M', 'M'), Some(Category::Staged));
        assert_eq!(Category::derive(' ', ' '), None);
        assert_eq!(Category::derive('!', '!'), None);
    }

    #[test]
    fn test_new_rejects_empty_path() {
        let result = StatusEntry::new(None, "", ' ', 'M');
        assert!(matches!(result, Err(GitStagerError::EmptyPath)));
    }

    #[test]
    fn test_new_rejects_clean_code() {
        let result = StatusEntry::new(None, "a.py", ' ', ' ');
        assert!(matches!(result, Err(GitStagerError::NotAChange { .. })));
    }

    #[test]
    fn test_stored_category_matches_derivation() -> Result<()> {
        for (x, y) in [('?', '?'), ('M', ' '), (' ', 'M'), ('R', 'M'), ('A', 'D')] {
            let entry = StatusEntry::new(None, "file.txt", x, y)?;
            assert_eq!(Some(entry.category()), Category::derive(x, y));
        }
        Ok(())
    }

    #[test]
    fn test_same_path_rename_is_dropped() -> Result<()> {
        let entry = StatusEntry::new(Some("a.py".to_string()), "a.py", 'M', ' ')?;
        assert_eq!(entry.from_path(), None);
        assert!(!entry.is_rename());
        Ok(())
    }

    #[test]
    fn test_same_change_uses_four_fields() -> Result<()> {
        let a = StatusEntry::new(None, "a.py", ' ', 'M')?;
        let b = StatusEntry::new(None, "a.py", ' ', 'M')?;
        let staged = StatusEntry::new(None, "a.py", 'M', ' ')?;
        let renamed = StatusEntry::new(Some("old.py".to_string()), "a.py", ' ', 'M')?;

        assert!(a.same_change(&b));
        assert_eq!(a, b);
        assert!(!a.same_change(&staged));
        assert!(!a.same_change(&renamed));
        Ok(())
    }

    #[test]
    fn test_from_porcelain() -> Result<()> {
        let modified = StatusEntry::from_porcelain(" M src/lib.rs")?;
        assert_eq!(modified.to_path(), "src/lib.rs");
        assert_eq!(modified.category(), Category::Unstaged);

        let renamed = StatusEntry::from_porcelain("R  originally_named.py -> renamed_to.py")?;
        assert_eq!(renamed.from_path(), Some("originally_named.py"));
        assert_eq!(renamed.to_path(), "renamed_to.py");
        assert_eq!(renamed.category(), Category::Staged);

        let untracked = StatusEntry::from_porcelain("?? notebook with spaces.ipynb")?;
        assert_eq!(untracked.to_path(), "notebook with spaces.ipynb");
        assert_eq!(untracked.category(), Category::Untracked);
        Ok(())
    }

    #[test]
    fn test_description() -> Result<()> {
        assert_eq!(StatusEntry::new(None, "a", 'A', ' ')?.description(), "new");
        assert_eq!(StatusEntry::new(None, "a", ' ', 'D')?.description(), "deleted");
        assert_eq!(StatusEntry::new(None, "a", '?', '?')?.description(), "untracked");
        assert_eq!(StatusEntry::new(None, "a", 'M', 'D')?.description(), "modified");
        Ok(())
    }

    #[test]
    fn test_index_deletion() -> Result<()> {
        assert!(StatusEntry::new(None, "gone.txt", 'D', ' ')?.is_index_deletion());
        assert!(!StatusEntry::new(None, "gone.txt", ' ', 'D')?.is_index_deletion());
        Ok(())
    }
}
