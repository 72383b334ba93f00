use std::fmt;

/// Observable state of the stopwatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    /// Nothing accumulated and not running.
    Idle,
    Running,
    /// Stopped with unsaved accumulated time.
    Paused,
}

impl TimerState {
    pub fn label(&self) -> &'static str {
        match self {
            TimerState::Idle => "idle",
            TimerState::Running => "running",
            TimerState::Paused => "paused",
        }
    }
}

impl fmt::Display for TimerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
