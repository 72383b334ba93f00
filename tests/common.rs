#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, Local, TimeDelta, TimeZone};
use rtimerecorder::core::{Clock, FileOpener, UserPrompt};
use rtimerecorder::errors::{AppError, AppResult};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub fn rtr() -> Command {
    cargo_bin_cmd!("rtimerecorder")
}

/// Create a unique csv path inside the system temp dir and remove any existing file
pub fn temp_csv(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimerecorder.csv", name));
    fs::remove_file(&path).ok();
    path
}

/// Config path that does not exist, so the binary runs with defaults
pub fn temp_conf(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimerecorder.conf", name));
    fs::remove_file(&path).ok();
    path
}

/// Parse a record file back into (header, rows).
pub fn read_records(path: &Path) -> (Vec<String>, Vec<(String, String)>) {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .expect("open csv");
    let header = rdr
        .headers()
        .expect("csv header")
        .iter()
        .map(str::to_string)
        .collect();
    let rows = rdr
        .records()
        .map(|r| {
            let r = r.expect("csv row");
            (r[0].to_string(), r[1].to_string())
        })
        .collect();
    (header, rows)
}

/// Clock that only moves when told to.
pub struct ManualClock {
    now: Cell<DateTime<Local>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Cell::new(Local.timestamp_opt(1_760_000_000, 0).unwrap()),
        }
    }

    pub fn advance(&self, d: TimeDelta) {
        self.now.set(self.now.get() + d);
    }

    pub fn advance_secs(&self, secs: i64) {
        self.advance(TimeDelta::seconds(secs));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Local> {
        self.now.get()
    }
}

/// Prompt answering from a script and recording what it was asked.
#[derive(Default)]
pub struct ScriptedPrompt {
    pub paths: VecDeque<Option<String>>,
    pub confirms: VecDeque<bool>,
    pub suggestions: Vec<String>,
    pub questions: Vec<String>,
    pub notices: Vec<String>,
}

impl ScriptedPrompt {
    /// Answer the first path prompt with `path`.
    pub fn answering(path: impl AsRef<Path>) -> Self {
        Self::default().then(path)
    }

    /// Cancel the first path prompt.
    pub fn cancelling() -> Self {
        let mut prompt = Self::default();
        prompt.paths.push_back(None);
        prompt
    }

    pub fn then(mut self, path: impl AsRef<Path>) -> Self {
        self.paths
            .push_back(Some(path.as_ref().to_string_lossy().to_string()));
        self
    }

    pub fn confirming(mut self, answers: &[bool]) -> Self {
        self.confirms = answers.iter().copied().collect();
        self
    }

    pub fn path_prompts(&self) -> usize {
        self.suggestions.len()
    }

    fn next_path(&mut self, suggested: &str) -> AppResult<Option<String>> {
        self.suggestions.push(suggested.to_string());
        Ok(self.paths.pop_front().flatten())
    }
}

impl UserPrompt for ScriptedPrompt {
    fn save_path(&mut self, suggested: &str) -> AppResult<Option<String>> {
        self.next_path(suggested)
    }

    fn new_file_path(&mut self, suggested: &str) -> AppResult<Option<String>> {
        self.next_path(suggested)
    }

    fn confirm(&mut self, question: &str) -> AppResult<bool> {
        self.questions.push(question.to_string());
        Ok(self.confirms.pop_front().unwrap_or(false))
    }

    fn notify(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }
}

/// Opener that remembers the paths it was asked to open.
#[derive(Default)]
pub struct RecordingOpener {
    pub opened: RefCell<Vec<PathBuf>>,
    pub fail: bool,
}

impl FileOpener for RecordingOpener {
    fn open(&self, path: &Path) -> AppResult<()> {
        if self.fail {
            return Err(AppError::Opener {
                path: path.display().to_string(),
                reason: "no viewer".to_string(),
            });
        }
        self.opened.borrow_mut().push(path.to_path_buf());
        Ok(())
    }
}
