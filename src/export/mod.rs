pub mod csv;
mod fs_utils;

pub use self::csv::{HEADER, append_record, create_with_header, file_has_header};
pub(crate) use fs_utils::is_missing_or_empty;
