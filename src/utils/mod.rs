pub mod path;
pub mod time;

pub use time::{format_duration, parse_duration};
