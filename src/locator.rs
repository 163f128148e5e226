//! Active theme lookup
//!
//! Scans the Alacritty configuration file for the theme path currently
//! referenced by the import directive.

use crate::catalog::ThemeEntry;
use crate::error::ThemeError;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

/// Find the theme currently referenced by the configuration file.
///
/// Matches the first substring of the form `<themes_root>/themes/<name>.toml`
/// where `<name>` is word characters or hyphens. Returns an empty entry when
/// no reference exists; a missing or unreadable file is an error.
///
/// The returned entry carries the raw matched path in both fields, `name`
/// included. Callers compare paths, not names, when deciding whether a theme
/// is the active one.
pub fn find_active(config_path: &Path, themes_root: &Path) -> Result<ThemeEntry, ThemeError> {
    let content =
        fs::read_to_string(config_path).map_err(|source| ThemeError::ConfigUnreadable {
            path: config_path.to_path_buf(),
            source,
        })?;

    let prefix = format!("{}/themes/", themes_root.display());
    let pattern = format!(r"{}[\w-]+\.toml", regex::escape(&prefix));
    let re = Regex::new(&pattern).expect("active theme pattern is valid");

    match re.find(&content) {
        Some(m) => Ok(ThemeEntry {
            name: m.as_str().to_string(),
            path: PathBuf::from(m.as_str()),
        }),
        None => Ok(ThemeEntry::default()),
    }
}
