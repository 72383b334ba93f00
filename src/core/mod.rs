//! Timer state machine and the recorder that persists finished sessions.

pub mod capabilities;
pub mod clock;
pub mod recorder;
pub mod timer;

pub use capabilities::{FileOpener, UserPrompt};
pub use clock::{Clock, SystemClock};
pub use recorder::{Recorder, RecorderSettings, ReloadOutcome, StopOutcome};
pub use timer::Timer;
