//! Filesystem path utilities.
//!
//! Resolves the application's data and log directories following XDG
//! conventions, and expands `~` in user-supplied source paths.

use std::path::PathBuf;

/// Returns the data directory for vitrine.
///
/// `$XDG_DATA_HOME/vitrine` when `XDG_DATA_HOME` is set, otherwise
/// `~/.local/share/vitrine`. Falls back to a relative `.vitrine` directory
/// when no home directory can be determined.
#[must_use]
pub fn data_dir() -> PathBuf {
    if let Some(xdg) = std::env::var_os("XDG_DATA_HOME") {
        return PathBuf::from(xdg).join("vitrine");
    }
    if let Some(home) = std::env::var_os("HOME") {
        return PathBuf::from(home).join(".local").join("share").join("vitrine");
    }
    PathBuf::from(".vitrine")
}

/// Returns the log directory, under the data directory.
#[must_use]
pub fn logs_dir() -> PathBuf {
    data_dir().join("logs")
}

/// Expands a leading tilde to the user's home directory.
///
/// Paths without a leading `~`, and environments without `HOME`, pass through
/// unchanged.
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    let Some(home) = std::env::var_os("HOME") else {
        return path.to_string();
    };
    let home = home.to_string_lossy().into_owned();

    if let Some(rest) = path.strip_prefix("~/") {
        format!("{home}/{rest}")
    } else if path == "~" {
        home
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// What: tilde expansion touches only a leading tilde
    #[test]
    fn expand_tilde_cases() {
        if std::env::var_os("HOME").is_some() {
            assert!(!expand_tilde("~/catalog.json").starts_with('~'));
            assert!(expand_tilde("~/catalog.json").ends_with("/catalog.json"));
        }
        assert_eq!(expand_tilde("/absolute/catalog.json"), "/absolute/catalog.json");
        assert_eq!(expand_tilde("relative.json"), "relative.json");
    }
}
