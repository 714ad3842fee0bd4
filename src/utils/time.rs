//! Time utilities: parsing HH:MM, minutes-since-midnight arithmetic, formatting.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Timelike};

pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Convert a stored time-of-day to minutes since midnight.
///
/// Tolerant of rows written without validation: hour and minute may have one
/// or two digits and a trailing `:SS` part is ignored ("9:5", "10:00:00").
/// Returns None for non-numeric parts or anything outside 00:00..=23:59.
pub fn hhmm_to_minutes(s: &str) -> Option<u32> {
    let mut parts = s.trim().split(':');
    let h = clock_field(parts.next()?, 23)?;
    let m = clock_field(parts.next()?, 59)?;
    if let Some(sec) = parts.next() {
        clock_field(sec, 59)?;
    }
    if parts.next().is_some() {
        return None;
    }
    Some(h * 60 + m)
}

/// Strict `H:MM` / `HH:MM`, as accepted for user input.
pub fn strict_hhmm_to_minutes(s: &str) -> Option<u32> {
    let (h, m) = s.trim().split_once(':')?;
    if m.len() != 2 {
        return None;
    }
    Some(clock_field(h, 23)? * 60 + clock_field(m, 59)?)
}

fn clock_field(part: &str, max: u32) -> Option<u32> {
    if part.is_empty() || part.len() > 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse::<u32>().ok().filter(|&v| v <= max)
}

pub fn minutes_of(t: NaiveTime) -> u32 {
    t.hour() * 60 + t.minute()
}

/// `anchor - offset`, wrapped onto the previous day when negative.
pub fn minutes_before(anchor: u32, offset: u32) -> u32 {
    let offset = offset % MINUTES_PER_DAY;
    (anchor + MINUTES_PER_DAY - offset) % MINUTES_PER_DAY
}

/// True when `current` lies in the closed window `[start, start + width]`.
///
/// The comparison is linear, not modular: a window anchored at 23:59 does not
/// reach 00:00 of the next day.
pub fn in_window(current: u32, start: u32, width: u32) -> bool {
    current >= start && current - start <= width
}

/// Clock label used in alert reports: hour unpadded, minute padded ("9:05").
pub fn clock_label(t: NaiveTime) -> String {
    format!("{}:{:02}", t.hour(), t.minute())
}

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    let mins = strict_hhmm_to_minutes(t)?;
    NaiveTime::from_hms_opt(mins / 60, mins % 60, 0)
}

pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<NaiveTime>> {
    if let Some(s) = input {
        let t = parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
        Ok(Some(t))
    } else {
        Ok(None)
    }
}
