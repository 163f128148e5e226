//! Theme repository provisioning
//!
//! First-run setup: clones the theme pack with the system `git` into the
//! configured themes directory. The clone runs on a background thread and
//! reports completion over a channel so the event loop can keep a spinner
//! alive meanwhile.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::mpsc::{self, Receiver};
use std::thread;

/// Check whether the theme pack is already in place.
///
/// The directory must exist and contain a `.git` entry; a plain directory
/// without one is treated as not provisioned.
pub fn is_repo_installed(themes_root: &Path) -> bool {
    themes_root.exists() && themes_root.join(".git").exists()
}

/// Clone the theme repository into `themes_root`.
pub fn install_themes(theme_url: &str, themes_root: &Path) -> Result<()> {
    if let Some(parent) = themes_root.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let output = Command::new("git")
        .args([
            "clone",
            theme_url,
            themes_root.to_str().context("Invalid themes path")?,
        ])
        .output()
        .context("Failed to execute git clone")?;

    if !output.status.success() {
        return Err(anyhow::anyhow!(
            "Failed to clone theme repository: {}",
            String::from_utf8_lossy(&output.stderr)
        ));
    }

    Ok(())
}

/// Run [`install_themes`] on a background thread.
///
/// Returns the receiving end of the completion channel. The event loop polls
/// it each tick and transitions from the provisioning spinner to browsing once
/// a result arrives.
pub fn spawn_install(theme_url: String, themes_root: PathBuf) -> Receiver<Result<()>> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let result = install_themes(&theme_url, &themes_root);
        // Receiver dropped means the user quit during provisioning.
        let _ = tx.send(result);
    });
    rx
}
