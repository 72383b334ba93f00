//! The single controller object: owns the timer, the description buffer
//! and the reference to the last CSV file used in this run.

use super::capabilities::{FileOpener, UserPrompt};
use super::clock::{Clock, SystemClock};
use super::timer::Timer;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::{self, is_missing_or_empty};
use crate::models::{RecordFile, Session};
use crate::utils::path::{resolve_user_path, with_csv_extension};
use chrono::TimeDelta;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub const DEFAULT_FILE_NAME: &str = "NewTimeRecords.csv";
pub const FILE_CREATED_MESSAGE: &str = "New CSV file created with headers.";

/// Settings the recorder takes from the configuration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecorderSettings {
    pub default_file_name: String,
    pub records_dir: Option<PathBuf>,
}

impl Default for RecorderSettings {
    fn default() -> Self {
        Self {
            default_file_name: DEFAULT_FILE_NAME.to_string(),
            records_dir: None,
        }
    }
}

impl From<&Config> for RecorderSettings {
    fn from(cfg: &Config) -> Self {
        Self {
            default_file_name: cfg.default_file_name.clone(),
            records_dir: cfg.records_dir.as_ref().map(PathBuf::from),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopOutcome {
    Saved { path: PathBuf, session: Session },
    /// The user dismissed the file prompt; the timer keeps its time.
    Cancelled,
    /// Zero accumulated time: nothing asked, nothing written.
    NothingToRecord,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReloadOutcome {
    Opened(PathBuf),
    Created(PathBuf),
    Cancelled,
}

pub struct Recorder<C: Clock = SystemClock> {
    clock: C,
    timer: Timer,
    description: String,
    last_file: Option<RecordFile>,
    settings: RecorderSettings,
}

impl Recorder<SystemClock> {
    pub fn with_system_clock(settings: RecorderSettings) -> Self {
        Self::new(SystemClock, settings)
    }
}

impl<C: Clock> Recorder<C> {
    pub fn new(clock: C, settings: RecorderSettings) -> Self {
        Self {
            clock,
            timer: Timer::new(),
            description: String::new(),
            last_file: None,
            settings,
        }
    }

    /// Pre-set the record file reference, e.g. from `--file`.
    pub fn with_last_file(mut self, file: RecordFile) -> Self {
        self.last_file = Some(file);
        self
    }

    // ---------------------------
    // Timer actions
    // ---------------------------

    pub fn start(&mut self) {
        let now = self.clock.now();
        self.timer.start(now);
    }

    /// Returns the length of the segment just closed.
    pub fn pause(&mut self) -> TimeDelta {
        let now = self.clock.now();
        self.timer.pause(now)
    }

    /// Close the running segment and persist the session.
    ///
    /// Timer and description are reset only when a row was written. A blank
    /// description fails with `AppError::Validation`; cancelling the file
    /// prompt or an I/O error also leave the accumulated time in place.
    pub fn stop(&mut self, prompt: &mut dyn UserPrompt) -> AppResult<StopOutcome> {
        let now = self.clock.now();
        let total = self.timer.stop(now);
        let description = self.description.clone();
        self.finalize(prompt, &description, total)
    }

    /// Validate, ask for a destination, append the row.
    pub fn finalize(
        &mut self,
        prompt: &mut dyn UserPrompt,
        description: &str,
        total_duration: TimeDelta,
    ) -> AppResult<StopOutcome> {
        let session = Session::new(description, total_duration)?;

        if total_duration <= TimeDelta::zero() {
            debug!("stop with no accumulated time, nothing to record");
            return Ok(StopOutcome::NothingToRecord);
        }

        let suggested = self.suggested_save_path();
        let Some(answer) = prompt.save_path(&suggested)? else {
            debug!("save prompt cancelled, keeping accumulated time");
            return Ok(StopOutcome::Cancelled);
        };

        let path = self.resolve(&answer);
        self.append_row(&path, &session)?;

        self.timer.reset();
        self.description.clear();

        Ok(StopOutcome::Saved { path, session })
    }

    /// Append one row and remember `path` as the current record file.
    pub fn append_row(&mut self, path: &Path, session: &Session) -> AppResult<()> {
        let had_rows = !is_missing_or_empty(path)?;
        match export::append_record(path, session) {
            Ok(header_written) => {
                info!(path = %path.display(), time_spent = %session.time_spent(), "session saved");
                self.last_file = Some(RecordFile::new(path, header_written || had_rows));
                Ok(())
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to append session row");
                Err(e)
            }
        }
    }

    /// Open the last record file, or create a fresh header-only one.
    pub fn reload(
        &mut self,
        prompt: &mut dyn UserPrompt,
        opener: &dyn FileOpener,
    ) -> AppResult<ReloadOutcome> {
        if let Some(file) = self.last_file.as_ref().filter(|f| f.exists()) {
            let path = file.path.clone();
            opener.open(&path)?;
            debug!(path = %path.display(), "opened record file");
            return Ok(ReloadOutcome::Opened(path));
        }

        let Some(answer) = prompt.new_file_path(&self.settings.default_file_name)? else {
            return Ok(ReloadOutcome::Cancelled);
        };
        let path = with_csv_extension(self.resolve(&answer));

        if !is_missing_or_empty(&path)? {
            let question = format!(
                "The file '{}' already exists. Replace it with an empty record file?",
                path.display()
            );
            if !prompt.confirm(&question)? {
                return Ok(ReloadOutcome::Cancelled);
            }
        }

        if let Err(e) = export::create_with_header(&path) {
            warn!(path = %path.display(), error = %e, "failed to create record file");
            return Err(e);
        }
        self.last_file = Some(RecordFile::new(&path, true));
        prompt.notify(FILE_CREATED_MESSAGE);

        Ok(ReloadOutcome::Created(path))
    }

    // ---------------------------
    // Description buffer
    // ---------------------------

    pub fn set_description(&mut self, text: impl Into<String>) {
        self.description = text.into();
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn clear_description(&mut self) {
        self.description.clear();
    }

    // ---------------------------
    // Read-only views
    // ---------------------------

    pub fn timer(&self) -> &Timer {
        &self.timer
    }

    pub fn elapsed(&self) -> TimeDelta {
        self.timer.elapsed(self.clock.now())
    }

    pub fn last_file(&self) -> Option<&RecordFile> {
        self.last_file.as_ref()
    }

    pub fn settings(&self) -> &RecorderSettings {
        &self.settings
    }

    fn suggested_save_path(&self) -> String {
        match &self.last_file {
            Some(file) => file.path.to_string_lossy().to_string(),
            None => self.settings.default_file_name.clone(),
        }
    }

    fn resolve(&self, answer: &str) -> PathBuf {
        resolve_user_path(answer, self.settings.records_dir.as_deref())
    }
}
