use crate::errors::{AppError, AppResult};
use crate::utils::format_duration;
use chrono::TimeDelta;

pub const EMPTY_DESCRIPTION_WARNING: &str = "Please enter a description of what you did.";

/// One finished timing session, built at stop time and consumed by the CSV writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub total_duration: TimeDelta,
    pub description: String,
}

impl Session {
    /// Build a session, rejecting blank descriptions. The stored text is trimmed.
    pub fn new(description: &str, total_duration: TimeDelta) -> AppResult<Self> {
        let description = description.trim();
        if description.is_empty() {
            return Err(AppError::Validation(EMPTY_DESCRIPTION_WARNING.to_string()));
        }

        Ok(Self {
            total_duration,
            description: description.to_string(),
        })
    }

    pub fn time_spent(&self) -> String {
        format_duration(self.total_duration)
    }

    /// The CSV data row: `(time_spent, description)`.
    pub fn to_record(&self) -> [String; 2] {
        [self.time_spent(), self.description.clone()]
    }
}
