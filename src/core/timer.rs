use crate::models::TimerState;
use chrono::{DateTime, Local, TimeDelta};
use tracing::debug;

/// Stopwatch accumulating active time over start/pause segments.
///
/// `accumulated` only grows on a running→paused transition and
/// `start_mark` is `Some` exactly while the timer runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timer {
    running: bool,
    start_mark: Option<DateTime<Local>>,
    accumulated: TimeDelta,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    pub fn new() -> Self {
        Self {
            running: false,
            start_mark: None,
            accumulated: TimeDelta::zero(),
        }
    }

    /// Begin a segment. No-op when already running.
    pub fn start(&mut self, now: DateTime<Local>) {
        if self.running {
            return;
        }
        self.start_mark = Some(now);
        self.running = true;
        debug!(accumulated = %self.accumulated, "timer started");
    }

    /// Close the current segment and return its length (zero when not running).
    pub fn pause(&mut self, now: DateTime<Local>) -> TimeDelta {
        if !self.running {
            return TimeDelta::zero();
        }

        let segment = self
            .start_mark
            .take()
            .map(|mark| segment_between(mark, now))
            .unwrap_or_else(TimeDelta::zero);

        self.accumulated += segment;
        self.running = false;
        debug!(segment = %segment, accumulated = %self.accumulated, "timer paused");
        segment
    }

    /// Capture the trailing segment and return the session total.
    ///
    /// State is not cleared here; call [`Timer::reset`] once the total is saved.
    pub fn stop(&mut self, now: DateTime<Local>) -> TimeDelta {
        if self.running {
            self.pause(now);
        }
        self.accumulated
    }

    pub fn reset(&mut self) {
        self.running = false;
        self.start_mark = None;
        self.accumulated = TimeDelta::zero();
        debug!("timer reset");
    }

    /// Accumulated time plus the in-flight segment, without mutating anything.
    pub fn elapsed(&self, now: DateTime<Local>) -> TimeDelta {
        match self.start_mark {
            Some(mark) if self.running => self.accumulated + segment_between(mark, now),
            _ => self.accumulated,
        }
    }

    pub fn accumulated(&self) -> TimeDelta {
        self.accumulated
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn start_mark(&self) -> Option<DateTime<Local>> {
        self.start_mark
    }

    pub fn state(&self) -> TimerState {
        if self.running {
            TimerState::Running
        } else if self.accumulated > TimeDelta::zero() {
            TimerState::Paused
        } else {
            TimerState::Idle
        }
    }
}

/// A clock that jumped backwards yields an empty segment.
fn segment_between(start: DateTime<Local>, end: DateTime<Local>) -> TimeDelta {
    (end - start).max(TimeDelta::zero())
}
