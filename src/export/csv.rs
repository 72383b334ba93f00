//! CSV persistence of finished sessions.
//!
//! Files are only ever appended to, except when the user explicitly asks
//! for a fresh header-only file.

use super::fs_utils::{ensure_parent_dir, is_missing_or_empty};
use crate::errors::AppResult;
use crate::models::Session;
use csv::{ReaderBuilder, WriterBuilder};
use std::fs::{File, OpenOptions};
use std::path::Path;
use tracing::debug;

pub const HEADER: [&str; 2] = ["Time Spent", "Description"];

/// Append one session row, writing the header first when the file is new or empty.
///
/// Returns `true` when the header was written by this call.
pub fn append_record(path: &Path, session: &Session) -> AppResult<bool> {
    let file_is_new = is_missing_or_empty(path)?;
    ensure_parent_dir(path)?;

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(file);

    if file_is_new {
        wtr.write_record(HEADER)?;
    }
    wtr.write_record(session.to_record())?;
    wtr.flush()?;

    debug!(path = %path.display(), header = file_is_new, "appended session row");
    Ok(file_is_new)
}

/// Create (or truncate) a file holding only the header row.
pub fn create_with_header(path: &Path) -> AppResult<()> {
    ensure_parent_dir(path)?;

    let file = File::create(path)?;
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(file);
    wtr.write_record(HEADER)?;
    wtr.flush()?;

    debug!(path = %path.display(), "created header-only csv");
    Ok(())
}

/// Whether the first row of the file is the `Time Spent,Description` header.
pub fn file_has_header(path: &Path) -> AppResult<bool> {
    if is_missing_or_empty(path)? {
        return Ok(false);
    }

    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    match rdr.records().next() {
        Some(first) => {
            let first = first?;
            Ok(first.iter().eq(HEADER.iter().copied()))
        }
        None => Ok(false),
    }
}
