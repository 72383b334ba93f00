//! Duration text: `H:MM:SS` with an optional `.ffffff` microsecond fraction.

use crate::errors::{AppError, AppResult};
use chrono::TimeDelta;
use regex::Regex;
use std::sync::LazyLock;

static DURATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(-)?(\d+):([0-5]\d):([0-5]\d)(?:\.(\d{1,6}))?$").expect("valid duration regex")
});

/// Render a duration as elapsed-time text.
///
/// Hours are not wrapped at 24; the fraction is printed only when non-zero.
///
/// ```
/// use chrono::TimeDelta;
/// use rtimerecorder::utils::format_duration;
///
/// assert_eq!(format_duration(TimeDelta::seconds(3_725)), "1:02:05");
/// assert_eq!(format_duration(TimeDelta::milliseconds(1_500)), "0:00:01.500000");
/// ```
pub fn format_duration(d: TimeDelta) -> String {
    let sign = if d < TimeDelta::zero() { "-" } else { "" };
    let d = d.abs();

    let secs = d.num_seconds();
    let micros = d.subsec_nanos() / 1_000;
    let (h, m, s) = (secs / 3_600, (secs % 3_600) / 60, secs % 60);

    if micros == 0 {
        format!("{}{}:{:02}:{:02}", sign, h, m, s)
    } else {
        format!("{}{}:{:02}:{:02}.{:06}", sign, h, m, s, micros)
    }
}

/// Parse text produced by [`format_duration`] back into a duration.
pub fn parse_duration(text: &str) -> AppResult<TimeDelta> {
    let invalid = || AppError::InvalidDuration(text.to_string());
    let caps = DURATION_RE.captures(text.trim()).ok_or_else(invalid)?;

    let field = |i: usize| -> AppResult<i64> {
        caps.get(i)
            .map_or(Ok(0), |m| m.as_str().parse::<i64>().map_err(|_| invalid()))
    };

    let hours = field(2)?;
    let minutes = field(3)?;
    let seconds = field(4)?;
    let micros = match caps.get(5) {
        // "5" means 500000 µs
        Some(frac) => format!("{:0<6}", frac.as_str()).parse::<i64>().map_err(|_| invalid())?,
        None => 0,
    };

    let total = TimeDelta::try_hours(hours)
        .ok_or_else(invalid)?
        .checked_add(&TimeDelta::minutes(minutes))
        .and_then(|d| d.checked_add(&TimeDelta::seconds(seconds)))
        .and_then(|d| d.checked_add(&TimeDelta::microseconds(micros)))
        .ok_or_else(invalid)?;

    Ok(if caps.get(1).is_some() { -total } else { total })
}
