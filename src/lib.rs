//! alatheme - Alacritty theme picker
//!
//! This crate provides the theme-reference reconciliation engine and the
//! TUI components for browsing Alacritty color themes with live preview.
//!
//! # Modules
//!
//! - [`catalog`] - Listing of installed theme definition files
//! - [`locator`] - Lookup of the theme a config file currently references
//! - [`directive`] - Insert/replace of the theme import directive
//! - [`session`] - Preview / confirm / revert sequencing while browsing
//! - [`picker`] - Theme list widget and color sample panel
//! - [`provision`] - First-run clone of the theme repository

pub mod catalog;
pub mod cli;
pub mod config;
pub mod debug;
pub mod directive;
pub mod error;
pub mod locator;
pub mod picker;
pub mod provision;
pub mod session;

// Re-export commonly used types
pub use catalog::ThemeEntry;
pub use cli::{Cli, Commands};
pub use config::Config;
pub use error::ThemeError;
pub use picker::{PickerResult, ThemePicker};
pub use session::SelectionSession;
