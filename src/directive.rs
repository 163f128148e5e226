//! Import directive editor
//!
//! Manages the single theme import directive inside the Alacritty
//! configuration file. The recognized structure is a quoted absolute theme
//! path inside a one-key array:
//!
//! ```text
//! import = [
//! "<absolute-path-to-theme-file>"
//! ]
//! ```
//!
//! Everything else in the file is opaque and preserved byte for byte. Each
//! operation reads the whole file and rewrites it in a single call, so a
//! failed call leaves the previous content in place.

use crate::catalog::ThemeEntry;
use crate::debug;
use crate::debug_log;
use crate::error::ThemeError;
use regex::{NoExpand, Regex};
use std::fs;
use std::path::Path;

/// Detector for "some theme directive already exists", root-independent.
const ANY_DIRECTIVE_PATTERN: &str = r"/themes/[\w-]+\.toml";

fn read_config(config_path: &Path) -> Result<String, ThemeError> {
    fs::read_to_string(config_path).map_err(|source| ThemeError::ConfigUnreadable {
        path: config_path.to_path_buf(),
        source,
    })
}

fn write_config(config_path: &Path, content: &str) -> Result<(), ThemeError> {
    fs::write(config_path, content).map_err(|source| ThemeError::ConfigWriteFailed {
        path: config_path.to_path_buf(),
        source,
    })
}

/// Guarantee that the configuration file exists and carries a theme directive.
///
/// Creates the file empty when missing. If any theme directive is already
/// present, whichever theme it names, this is a no-op: first-run
/// initialization only needs *a* configured theme, and repeated calls must not
/// stack directives. Otherwise the directive block for `theme` is prepended to
/// the existing content.
pub fn ensure_present(config_path: &Path, theme: &ThemeEntry) -> Result<(), ThemeError> {
    if !config_path.exists() {
        write_config(config_path, "")?;
    }

    let content = read_config(config_path)?;

    let re = Regex::new(ANY_DIRECTIVE_PATTERN).expect("directive pattern is valid");
    if re.is_match(&content) {
        return Ok(());
    }

    let updated = format!("import = [\n\"{}\"\n]\n\n{}", theme.path.display(), content);
    debug::log_rewrite("insert", config_path);
    write_config(config_path, &updated)
}

/// Point the import directive at `new_theme`.
///
/// Every occurrence of a theme path under `<themes_root>/themes/` is replaced
/// with `new_theme.path`, leaving all other bytes untouched. When the file
/// holds no such path the call falls back to [`ensure_present`], so it always
/// leaves the file with at least one correct directive. Calling this twice
/// with the same theme is a fixpoint: the substituted path itself still
/// matches the pattern on the next pass.
pub fn replace(
    config_path: &Path,
    themes_root: &Path,
    new_theme: &ThemeEntry,
) -> Result<(), ThemeError> {
    let content = read_config(config_path)?;

    let prefix = format!("{}/themes/", themes_root.display());
    let pattern = format!(r#"{}[^"]+\.toml"#, regex::escape(&prefix));
    let re = Regex::new(&pattern).expect("replace pattern is valid");

    if !re.is_match(&content) {
        return ensure_present(config_path, new_theme);
    }

    let new_path = new_theme.path.display().to_string();
    // NoExpand: the path is a literal, `$` in a filename must not be treated
    // as a capture group reference.
    let updated = re.replace_all(&content, NoExpand(&new_path));
    debug_log!("replace directive -> {} in {}", new_theme.name, config_path.display());
    write_config(config_path, &updated)
}
