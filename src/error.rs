//! Error taxonomy for the theme reconciliation core

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the catalog, locator and directive editor.
///
/// All variants are terminal for the current operation; the core performs no
/// retries, and a failed write leaves the target file in its pre-call state.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// The themes directory could not be opened or listed.
    #[error("cannot list theme directory {path}: {source}")]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The Alacritty configuration file could not be read.
    #[error("cannot read config file {path}: {source}")]
    ConfigUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The Alacritty configuration file could not be (re)written.
    #[error("cannot write config file {path}: {source}")]
    ConfigWriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
