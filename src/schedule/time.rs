// src/schedule/time.rs
//! Wall-clock time parsing for slot comparisons.
//!
//! Slot times are stored as "HH:MM" strings; everything that compares them
//! goes through [`parse_time`] to get minutes since midnight. No timezone,
//! no day rollover.

use crate::error::{FestivalError, Result};

/// Parse a 24-hour "HH:MM" string into minutes since midnight.
///
/// Parsing is strict: exactly one ':', both sides integers, hours 0-23,
/// minutes 0-59. Malformed input is a reported error, not a silent NaN.
pub fn parse_time(time: &str) -> Result<u32> {
    let invalid = || FestivalError::InvalidTime(time.to_string());

    let (hours, minutes) = time.split_once(':').ok_or_else(invalid)?;
    let hours: u32 = hours.trim().parse().map_err(|_| invalid())?;
    let minutes: u32 = minutes.trim().parse().map_err(|_| invalid())?;

    if hours > 23 || minutes > 59 {
        return Err(invalid());
    }

    Ok(hours * 60 + minutes)
}

/// Infallible variant used by the query-side views: a slot whose time does
/// not parse simply never compares (it cannot conflict and sorts last).
/// The validation pass is where malformed times get reported.
pub(crate) fn parse_time_opt(time: &str) -> Option<u32> {
    parse_time(time).ok()
}
