//! Browsing session sequencing
//!
//! Drives the preview-on-navigate / commit-on-confirm / revert-on-cancel
//! protocol on top of the directive editor. The session records which theme
//! was active before browsing started so a cancelled session can put it back.

use crate::catalog::ThemeEntry;
use crate::directive;
use crate::error::ThemeError;
use crate::locator;
use std::path::{Path, PathBuf};

/// One interactive browsing session over the configuration file.
///
/// All calls are issued sequentially from the event loop; the session assumes
/// single-writer access to the file and holds no locks.
pub struct SelectionSession {
    config_path: PathBuf,
    themes_root: PathBuf,
    /// Theme referenced by the config before browsing started.
    original: ThemeEntry,
    previous_index: Option<usize>,
    choice: Option<String>,
}

impl SelectionSession {
    /// Start a session, recording the currently active theme for restore.
    pub fn begin(config_path: &Path, themes_root: &Path) -> Result<Self, ThemeError> {
        let original = locator::find_active(config_path, themes_root)?;
        Ok(Self {
            config_path: config_path.to_path_buf(),
            themes_root: themes_root.to_path_buf(),
            original,
            previous_index: None,
            choice: None,
        })
    }

    /// Live-apply `entry` if the highlighted index changed.
    ///
    /// Returns whether a write happened. Repeated calls with the same index
    /// are no-ops, so key-repeat while the cursor sits still costs nothing.
    pub fn preview(&mut self, index: usize, entry: &ThemeEntry) -> Result<bool, ThemeError> {
        if self.previous_index == Some(index) {
            return Ok(false);
        }
        directive::replace(&self.config_path, &self.themes_root, entry)?;
        self.previous_index = Some(index);
        Ok(true)
    }

    /// Accept the highlighted theme.
    ///
    /// The last preview already wrote it; only the name is recorded, for the
    /// goodbye message.
    pub fn confirm(&mut self, entry: &ThemeEntry) {
        self.choice = Some(entry.name.clone());
    }

    /// Abandon the session, restoring the theme active before browsing.
    ///
    /// Skipped when the config referenced no theme at session start; there is
    /// nothing meaningful to restore then.
    pub fn cancel(&mut self) -> Result<(), ThemeError> {
        if self.original.is_empty() {
            return Ok(());
        }
        directive::replace(&self.config_path, &self.themes_root, &self.original)
    }

    /// Name of the confirmed theme, if the session ended with one.
    pub fn choice(&self) -> Option<&str> {
        self.choice.as_deref()
    }

    /// Theme that was active when the session began.
    pub fn original(&self) -> &ThemeEntry {
        &self.original
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn setup() -> (TempDir, PathBuf) {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("alacritty.toml");
        fs::write(
            &config,
            "import = [\"/t/themes/original.toml\"]\nfont_size = 12\n",
        )
        .unwrap();
        (temp, config)
    }

    fn entry(name: &str) -> ThemeEntry {
        ThemeEntry::new(name, format!("/t/themes/{name}.toml"))
    }

    #[test]
    fn test_begin_records_original() {
        let (_temp, config) = setup();

        let session = SelectionSession::begin(&config, Path::new("/t")).unwrap();

        assert_eq!(
            session.original().path,
            PathBuf::from("/t/themes/original.toml")
        );
    }

    #[test]
    fn test_preview_writes_on_index_change() {
        let (_temp, config) = setup();
        let mut session = SelectionSession::begin(&config, Path::new("/t")).unwrap();

        let wrote = session.preview(2, &entry("dracula")).unwrap();

        assert!(wrote);
        let content = fs::read_to_string(&config).unwrap();
        assert_eq!(content, "import = [\"/t/themes/dracula.toml\"]\nfont_size = 12\n");
    }

    #[test]
    fn test_preview_same_index_is_a_no_op() {
        let (_temp, config) = setup();
        let mut session = SelectionSession::begin(&config, Path::new("/t")).unwrap();

        assert!(session.preview(1, &entry("nord")).unwrap());
        assert!(!session.preview(1, &entry("nord")).unwrap());
    }

    #[test]
    fn test_cancel_restores_original() {
        let (_temp, config) = setup();
        let mut session = SelectionSession::begin(&config, Path::new("/t")).unwrap();

        session.preview(3, &entry("gruvbox")).unwrap();
        session.preview(4, &entry("nord")).unwrap();
        session.cancel().unwrap();

        let content = fs::read_to_string(&config).unwrap();
        assert_eq!(
            content,
            "import = [\"/t/themes/original.toml\"]\nfont_size = 12\n"
        );
    }

    #[test]
    fn test_cancel_without_original_leaves_preview() {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("alacritty.toml");
        fs::write(&config, "font_size = 12\n").unwrap();
        let mut session = SelectionSession::begin(&config, Path::new("/t")).unwrap();

        session.preview(0, &entry("nord")).unwrap();
        session.cancel().unwrap();

        // No pre-session theme to restore; the previewed directive stays.
        let content = fs::read_to_string(&config).unwrap();
        assert!(content.contains("/t/themes/nord.toml"));
    }

    #[test]
    fn test_confirm_records_choice_without_extra_write() {
        let (_temp, config) = setup();
        let mut session = SelectionSession::begin(&config, Path::new("/t")).unwrap();

        session.preview(5, &entry("dracula")).unwrap();
        let before = fs::read_to_string(&config).unwrap();
        session.confirm(&entry("dracula"));
        let after = fs::read_to_string(&config).unwrap();

        assert_eq!(session.choice(), Some("dracula"));
        assert_eq!(before, after);
    }
}
