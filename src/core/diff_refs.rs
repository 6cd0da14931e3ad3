//! Diff reference model and eligibility.
//!
//! Every comparison is anchored at `HEAD` on the previous side. The current side is
//! the live working tree for unstaged diffs and the index for staged diffs. The
//! index is never compared to the working tree directly.

use crate::core::status_entry::{Category, StatusEntry};
use std::fmt;
use std::path::Path;

/// Name of the ref every diff is compared against
pub const HEAD_REF: &str = "HEAD";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialRef {
    Working,
    Index,
}

impl SpecialRef {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpecialRef::Working => "WORKING",
            SpecialRef::Index => "INDEX",
        }
    }
}

/// One side of a diff comparison
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GitRefSpec {
    Named(String),
    Special(SpecialRef),
}

impl fmt::Display for GitRefSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GitRefSpec::Named(name) => write!(f, "{name}"),
            GitRefSpec::Special(special) => write!(f, "{}", special.as_str()),
        }
    }
}

/// Context a diff is requested from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiffContext {
    /// Unstaged changes: HEAD against the working tree
    Working,
    /// Staged changes: HEAD against the index
    Index,
}

impl DiffContext {
    /// Natural diff context for an entry: the index for staged entries, the working
    /// tree otherwise
    pub fn for_entry(entry: &StatusEntry) -> Self {
        match entry.category() {
            Category::Staged => DiffContext::Index,
            _ => DiffContext::Working,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefPair {
    pub previous_ref: GitRefSpec,
    pub current_ref: GitRefSpec,
}

/// Parameters of one diff invocation, built fresh per request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffRequestSpec {
    pub path: String,
    pub previous_ref: GitRefSpec,
    pub current_ref: GitRefSpec,
}

impl DiffRequestSpec {
    pub fn new(path: impl Into<String>, context: DiffContext) -> Self {
        let RefPair {
            previous_ref,
            current_ref,
        } = resolve_refs(context);
        Self {
            path: path.into(),
            previous_ref,
            current_ref,
        }
    }
}

/// Comparison pair for a context: always `HEAD` against the live side
pub fn resolve_refs(context: DiffContext) -> RefPair {
    let special = match context {
        DiffContext::Working => SpecialRef::Working,
        DiffContext::Index => SpecialRef::Index,
    };
    RefPair {
        previous_ref: GitRefSpec::Named(HEAD_REF.to_string()),
        current_ref: GitRefSpec::Special(special),
    }
}

/// Extension-based diff eligibility.
///
/// A path is eligible unless its extension is in the configured list of formats the
/// viewer cannot render. Comparison is case-insensitive and ignores a leading dot in
/// the configured values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffSupport {
    unsupported_extensions: Vec<String>,
}

impl DiffSupport {
    pub fn new<I, S>(unsupported_extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            unsupported_extensions: unsupported_extensions
                .into_iter()
                .map(|ext| ext.as_ref().trim_start_matches('.').to_ascii_lowercase())
                .collect(),
        }
    }

    pub fn is_supported(&self, path: &str) -> bool {
        match Path::new(path).extension().and_then(|ext| ext.to_str()) {
            Some(ext) => !self
                .unsupported_extensions
                .iter()
                .any(|unsupported| unsupported.eq_ignore_ascii_case(ext)),
            None => true,
        }
    }
}
