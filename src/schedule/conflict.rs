// src/schedule/conflict.rs
//! Conflict detection among must-see slots.

use crate::model::{ArtistSlot, Priority};

use super::time::parse_time_opt;

/// Whether `slot` clashes with another must-see slot on a different stage
/// of the same day.
///
/// Only must-see slots conflict: anything else returns false no matter how
/// its interval overlaps. Two must-see acts on the *same* stage never
/// conflict either (a stage's timeline is sequential by definition), so only
/// cross-stage overlaps are signaled. Intervals are half-open: a slot ending
/// at 15:00 does not clash with one starting at 15:00.
///
/// Recomputed from scratch on every call; no index is kept, so the answer
/// can never go stale after a priority edit. O(n) over the day's slots.
pub fn has_conflict(slot: &ArtistSlot, day_slots: &[&ArtistSlot]) -> bool {
    if slot.priority != Priority::Must {
        return false;
    }

    let (start, end) = match (parse_time_opt(&slot.start_time), parse_time_opt(&slot.end_time)) {
        (Some(start), Some(end)) => (start, end),
        _ => return false,
    };

    day_slots
        .iter()
        .filter(|other| {
            other.priority == Priority::Must
                && other.id != slot.id
                && other.stage_id != slot.stage_id
        })
        .any(|other| {
            match (
                parse_time_opt(&other.start_time),
                parse_time_opt(&other.end_time),
            ) {
                (Some(other_start), Some(other_end)) => start < other_end && end > other_start,
                _ => false,
            }
        })
}
