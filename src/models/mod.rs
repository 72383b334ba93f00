pub mod record_file;
pub mod session;
pub mod timer_state;

pub use record_file::RecordFile;
pub use session::Session;
pub use timer_state::TimerState;
