//! Path entries and rename plans

use std::borrow::Cow;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::naming::{curated_name, is_invalid_name};

/// A filesystem entry discovered by the walk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathEntry {
    pub parent: PathBuf,
    pub name: OsString,
}

impl PathEntry {
    /// Split a path into parent and base name. Returns `None` for paths
    /// without a final normal component (`/`, `..`).
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_os_string();
        let parent = path.parent().unwrap_or(Path::new("")).to_path_buf();
        Some(Self { parent, name })
    }

    pub fn full_path(&self) -> PathBuf {
        self.parent.join(&self.name)
    }

    /// Base name as text. Bytes that are not valid UTF-8 become U+FFFD.
    pub fn name_str(&self) -> Cow<'_, str> {
        self.name.to_string_lossy()
    }

    pub fn is_invalid(&self) -> bool {
        is_invalid_name(&self.name_str())
    }
}

/// Pairing of an invalid entry with the name it should get
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamePlan {
    pub original: PathEntry,
    pub curated_name: String,
}

impl RenamePlan {
    pub fn for_entry(entry: &PathEntry, replacement: &str) -> Self {
        Self {
            original: entry.clone(),
            curated_name: curated_name(&entry.name_str(), replacement),
        }
    }

    pub fn source(&self) -> PathBuf {
        self.original.full_path()
    }

    /// Same parent, curated base name
    pub fn target(&self) -> PathBuf {
        self.original.parent.join(&self.curated_name)
    }
}
