//! Path resolution for configuration and trace files.
//!
//! Follows the XDG base directory layout:
//!
//! - data: `$XDG_DATA_HOME/openlib`, else `~/.local/share/openlib`
//! - config: `$XDG_CONFIG_HOME/openlib`, else `~/.config/openlib`
//!
//! `$OPENLIB_CONFIG` overrides the config file location entirely.

use std::ffi::OsString;
use std::path::PathBuf;

const APP_DIR: &str = "openlib";

/// Name of the config file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "openlib.toml";

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "OPENLIB_CONFIG";

/// Returns the directory trace files are written to.
///
/// # Examples
///
/// ```
/// use openlib::infrastructure::get_data_dir;
///
/// assert!(get_data_dir().ends_with("openlib"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    base_dir(
        std::env::var_os("XDG_DATA_HOME"),
        std::env::var_os("HOME"),
        &[".local", "share"],
    )
}

/// Returns the directory the default config file lives in.
#[must_use]
pub fn get_config_dir() -> PathBuf {
    base_dir(
        std::env::var_os("XDG_CONFIG_HOME"),
        std::env::var_os("HOME"),
        &[".config"],
    )
}

/// Returns the config file to load: `$OPENLIB_CONFIG` if set, otherwise
/// `openlib.toml` in [`get_config_dir`].
#[must_use]
pub fn get_config_file() -> PathBuf {
    match std::env::var(CONFIG_ENV_VAR) {
        Ok(path) if !path.trim().is_empty() => expand_tilde(path.trim()),
        _ => get_config_dir().join(CONFIG_FILE_NAME),
    }
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a leading `~`, and every path when `HOME` is unset, are
/// returned unchanged.
///
/// # Examples
///
/// ```
/// use openlib::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/absolute/path").to_str(), Some("/absolute/path"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    expand_with_home(path, std::env::var_os("HOME"))
}

fn expand_with_home(path: &str, home: Option<OsString>) -> PathBuf {
    let Some(home) = home.filter(|h| !h.is_empty()) else {
        return PathBuf::from(path);
    };

    if path == "~" {
        PathBuf::from(home)
    } else if let Some(rest) = path.strip_prefix("~/") {
        PathBuf::from(home).join(rest)
    } else {
        PathBuf::from(path)
    }
}

fn base_dir(xdg: Option<OsString>, home: Option<OsString>, fallback: &[&str]) -> PathBuf {
    if let Some(xdg) = xdg.filter(|x| !x.is_empty()) {
        return PathBuf::from(xdg).join(APP_DIR);
    }

    let mut dir = home
        .filter(|h| !h.is_empty())
        .map_or_else(|| PathBuf::from("."), PathBuf::from);
    for part in fallback {
        dir.push(part);
    }
    dir.join(APP_DIR)
}
