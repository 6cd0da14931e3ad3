//! Persisted mark set for one repository.
//!
//! Marks are owned by the backend and toggled out-of-band from the coordinator, which
//! only ever asks whether a path is marked. The set is stored as JSON in the per-repo
//! cache directory, keyed by the md5 of the repository path.

use crate::core::dirs::get_repository_cache_directory;
use crate::core::error::{GitStagerError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use std::time::SystemTime;

const MARKS_FILE: &str = "marks.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct MarksFile {
    marked: BTreeSet<String>,
    last_updated: SystemTime,
    repo_path: PathBuf,
}

#[derive(Debug, Default)]
pub struct MarkStore {
    file: Option<PathBuf>,
    repo_path: PathBuf,
    marked: RwLock<BTreeSet<String>>,
}

impl MarkStore {
    /// A store that is never written to disk
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Load the store for `repo_path` from the cache directory
    pub fn for_repository(repo_path: &Path) -> Result<Self> {
        let cache_dir = get_repository_cache_directory(repo_path)?;
        Self::load(cache_dir.join(MARKS_FILE), repo_path)
    }

    /// Load marks from `file`; a missing file is an empty set
    pub fn load(file: PathBuf, repo_path: &Path) -> Result<Self> {
        let marked = if file.exists() {
            let content = fs::read_to_string(&file).map_err(|e| {
                log::error!("Failed to read marks file '{}': {}", file.display(), e);
                GitStagerError::marks_read_failed(&file, e)
            })?;
            let parsed: MarksFile = serde_json::from_str(&content)
                .map_err(|e| GitStagerError::marks_parse_failed(&file, e))?;
            log::debug!("Loaded {} marks from {}", parsed.marked.len(), file.display());
            parsed.marked
        } else {
            log::debug!("Marks file does not exist: {}", file.display());
            BTreeSet::new()
        };

        Ok(Self {
            file: Some(file),
            repo_path: repo_path.to_path_buf(),
            marked: RwLock::new(marked),
        })
    }

    pub fn is_marked(&self, path: &str) -> bool {
        self.marked
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(path)
    }

    /// Set or clear the mark on `path` and persist the set
    pub fn set_mark(&self, path: &str, marked: bool) -> Result<()> {
        {
            let mut set = self.marked.write().unwrap_or_else(PoisonError::into_inner);
            if marked {
                set.insert(path.to_string());
            } else {
                set.remove(path);
            }
        }
        log::debug!("Mark on {path} set to {marked}");
        self.save()
    }

    /// Flip the mark on `path`, returning the new state
    pub fn toggle(&self, path: &str) -> Result<bool> {
        let marked = !self.is_marked(path);
        self.set_mark(path, marked)?;
        Ok(marked)
    }

    pub fn marked_paths(&self) -> Vec<String> {
        self.marked
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .cloned()
            .collect()
    }

    fn save(&self) -> Result<()> {
        let Some(file) = &self.file else {
            return Ok(());
        };

        if let Some(dir) = file.parent() {
            fs::create_dir_all(dir).map_err(|e| {
                log::error!("Failed to create cache directory '{}': {}", dir.display(), e);
                GitStagerError::directory_creation_failed(dir, e)
            })?;
        }

        let contents = MarksFile {
            marked: self
                .marked
                .read()
                .unwrap_or_else(PoisonError::into_inner)
                .clone(),
            last_updated: SystemTime::now(),
            repo_path: self.repo_path.clone(),
        };
        let json = serde_json::to_string_pretty(&contents)?;
        fs::write(file, json).map_err(|e| GitStagerError::marks_write_failed(file, e))?;
        Ok(())
    }
}
