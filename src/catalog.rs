//! Theme catalog
//!
//! Lists the theme definition files installed under the themes repository.

use crate::error::ThemeError;
use std::fs;
use std::path::{Path, PathBuf};

/// A single installed theme: display name plus the file it lives in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeEntry {
    /// File base name with the final extension stripped (`monokai_pro`).
    pub name: String,
    /// Absolute path to the theme definition file.
    pub path: PathBuf,
}

impl ThemeEntry {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    /// True for the placeholder returned when no theme reference was found.
    pub fn is_empty(&self) -> bool {
        self.path.as_os_str().is_empty()
    }
}

/// List the theme files directly under `<themes_root>/themes/`.
///
/// Directories are skipped. Entries are sorted by name so the picker shows a
/// stable order regardless of filesystem enumeration order. A fresh list is
/// produced on every call; nothing is cached.
pub fn list_themes(themes_root: &Path) -> Result<Vec<ThemeEntry>, ThemeError> {
    let dir = themes_root.join("themes");
    let entries = fs::read_dir(&dir).map_err(|source| ThemeError::DirectoryUnreadable {
        path: dir.clone(),
        source,
    })?;

    let mut themes = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| ThemeError::DirectoryUnreadable {
            path: dir.clone(),
            source,
        })?;
        let path = entry.path();
        if path.is_dir() {
            continue;
        }
        let name = path
            .file_stem()
            .or_else(|| path.file_name())
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        themes.push(ThemeEntry { name, path });
    }

    themes.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(themes)
}
