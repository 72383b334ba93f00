//! Path utilities: expand ~, resolve user-typed paths, force the .csv extension.

use std::path::{Path, PathBuf};

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

pub fn is_absolute(path: &str) -> bool {
    PathBuf::from(path).is_absolute()
}

/// Resolve a path typed by the user.
///
/// A leading `~/` is expanded; any other relative path is joined to
/// `base` when one is configured, otherwise left relative to the cwd.
pub fn resolve_user_path(input: &str, base: Option<&Path>) -> PathBuf {
    let expanded = expand_tilde(input.trim());
    match base {
        Some(dir) if expanded.is_relative() => expand_tilde(&dir.to_string_lossy()).join(expanded),
        _ => expanded,
    }
}

/// Append `.csv` when the path has no extension at all.
pub fn with_csv_extension(path: PathBuf) -> PathBuf {
    if path.extension().is_some() {
        path
    } else {
        path.with_extension("csv")
    }
}
