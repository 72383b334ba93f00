//! Capabilities the presentation layer injects into the core.

use crate::errors::AppResult;
use std::path::Path;

/// Blocking questions put to the user.
///
/// `Ok(None)` / `Ok(false)` mean the user cancelled; the caller must leave
/// its state untouched in that case.
pub trait UserPrompt {
    /// Destination for a finished session. `suggested` is pre-filled.
    fn save_path(&mut self, suggested: &str) -> AppResult<Option<String>>;

    /// Name of a new, header-only record file.
    fn new_file_path(&mut self, suggested: &str) -> AppResult<Option<String>>;

    fn confirm(&mut self, question: &str) -> AppResult<bool>;

    /// Informational message the user acknowledges.
    fn notify(&mut self, message: &str);
}

/// Opens a file for viewing with whatever the platform provides.
pub trait FileOpener {
    fn open(&self, path: &Path) -> AppResult<()>;
}
