//! Configuration file support for alatheme
//!
//! Handles `.alatheme.toml` configuration file loading. Home-relative paths
//! (`~/...` or `$HOME/...`) are expanded as soon as the file is parsed, so
//! every consumer sees absolute paths.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default configuration file name
const CONFIG_FILE_NAME: &str = ".alatheme.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Filesystem locations
    #[serde(default)]
    pub paths: PathsConfig,

    /// Theme repository source
    #[serde(default)]
    pub repo: RepoConfig,
}

/// Filesystem locations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Checkout of the theme pack; theme files live in its `themes/` subdir
    #[serde(default = "default_themes_directory")]
    pub themes_directory: PathBuf,

    /// Alacritty configuration file carrying the import directive
    #[serde(default = "default_alacritty_config")]
    pub alacritty_config: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            themes_directory: default_themes_directory(),
            alacritty_config: default_alacritty_config(),
        }
    }
}

/// Theme repository source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoConfig {
    /// Repository cloned on first run when the theme pack is missing
    #[serde(default = "default_theme_url")]
    pub theme_url: String,
}

impl Default for RepoConfig {
    fn default() -> Self {
        Self {
            theme_url: default_theme_url(),
        }
    }
}

// Default value functions
fn default_themes_directory() -> PathBuf {
    PathBuf::from("~/.config/alacritty/alacritty-theme")
}

fn default_alacritty_config() -> PathBuf {
    PathBuf::from("~/.config/alacritty/alacritty.toml")
}

fn default_theme_url() -> String {
    "https://github.com/alacritty/alacritty-theme".to_string()
}

impl Config {
    /// Load configuration file (returns defaults if not found)
    ///
    /// Searches for `.alatheme.toml` in the current directory.
    pub fn load() -> Result<Self> {
        let config_path = PathBuf::from(CONFIG_FILE_NAME);

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            Ok(Self::default().expanded())
        }
    }

    /// Load configuration from specified path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse configuration file: {}", path.display()))?;

        Ok(config.expanded())
    }

    /// Save configuration to specified path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write configuration file: {}", path.display()))?;

        Ok(())
    }

    fn expanded(mut self) -> Self {
        self.paths.themes_directory = expand_home(&self.paths.themes_directory);
        self.paths.alacritty_config = expand_home(&self.paths.alacritty_config);
        self
    }
}

/// Expand a leading `~` or `$HOME` to the user's home directory.
///
/// Paths without such a prefix, and paths where the home directory cannot be
/// determined, are returned unchanged.
pub fn expand_home(path: &Path) -> PathBuf {
    let Some(raw) = path.to_str() else {
        return path.to_path_buf();
    };
    let Some(home) = dirs::home_dir() else {
        return path.to_path_buf();
    };

    if let Some(rest) = raw.strip_prefix("~") {
        return home.join(rest.trim_start_matches('/'));
    }
    if let Some(rest) = raw.strip_prefix("$HOME") {
        return home.join(rest.trim_start_matches('/'));
    }
    path.to_path_buf()
}
