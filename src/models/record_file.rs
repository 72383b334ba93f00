use crate::errors::AppResult;
use crate::export::csv::file_has_header;
use std::path::{Path, PathBuf};

/// The CSV file most recently written to or created in this run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordFile {
    pub path: PathBuf,
    pub has_header: bool,
}

impl RecordFile {
    pub fn new(path: impl Into<PathBuf>, has_header: bool) -> Self {
        Self {
            path: path.into(),
            has_header,
        }
    }

    /// Reference an existing (or not yet existing) file, reading its first row.
    pub fn inspect(path: impl Into<PathBuf>) -> AppResult<Self> {
        let path = path.into();
        let has_header = file_has_header(&path)?;
        Ok(Self { path, has_header })
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
