// src/export/fs_utils.rs

use crate::errors::AppResult;
use std::fs;
use std::path::Path;

/// True when the file does not exist yet or has zero length.
pub(crate) fn is_missing_or_empty(path: &Path) -> AppResult<bool> {
    match fs::metadata(path) {
        Ok(meta) => Ok(meta.len() == 0),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(true),
        Err(e) => Err(e.into()),
    }
}

/// Create the destination folder when it is missing.
pub(crate) fn ensure_parent_dir(path: &Path) -> AppResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
