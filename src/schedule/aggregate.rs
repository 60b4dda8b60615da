// src/schedule/aggregate.rs
//! Per-day schedule views: stage columns, summary counts, timeline bounds.

use crate::model::{ArtistSlot, Priority};

use super::time::parse_time_opt;

/// Slot counts for one day's lineup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaySummary {
    pub must_count: usize,
    pub maybe_count: usize,
    pub skip_count: usize,
}

impl DaySummary {
    pub fn total(&self) -> usize {
        self.must_count + self.maybe_count + self.skip_count
    }
}

/// Slots on one stage, ascending by start time.
///
/// The sort is stable: slots with equal start times keep their input order
/// (there is no tiebreak field). Slots whose start time does not parse sort
/// last.
pub fn slots_by_stage<'a>(day_slots: &[&'a ArtistSlot], stage_id: &str) -> Vec<&'a ArtistSlot> {
    let mut slots: Vec<&ArtistSlot> = day_slots
        .iter()
        .filter(|a| a.stage_id == stage_id)
        .copied()
        .collect();
    slots.sort_by_key(|a| parse_time_opt(&a.start_time).unwrap_or(u32::MAX));
    slots
}

/// Count slots per priority tier.
pub fn summarize(day_slots: &[&ArtistSlot]) -> DaySummary {
    let mut summary = DaySummary {
        must_count: 0,
        maybe_count: 0,
        skip_count: 0,
    };
    for slot in day_slots {
        match slot.priority {
            Priority::Must => summary.must_count += 1,
            Priority::Maybe => summary.maybe_count += 1,
            Priority::Skip => summary.skip_count += 1,
        }
    }
    summary
}

/// Earliest parsed start and latest parsed end across the day, in minutes
/// since midnight. `None` when the day has no slots with parseable times;
/// presentation uses this to size a timeline grid and must handle the empty
/// case.
pub fn day_time_bounds(day_slots: &[&ArtistSlot]) -> Option<(u32, u32)> {
    let mut bounds: Option<(u32, u32)> = None;
    for slot in day_slots {
        let (start, end) = match (
            parse_time_opt(&slot.start_time),
            parse_time_opt(&slot.end_time),
        ) {
            (Some(start), Some(end)) => (start, end),
            _ => continue,
        };
        bounds = Some(match bounds {
            Some((min_start, max_end)) => (min_start.min(start), max_end.max(end)),
            None => (start, end),
        });
    }
    bounds
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(id: &str, stage: &str, start: &str, end: &str, priority: Priority) -> ArtistSlot {
        ArtistSlot {
            id: id.to_string(),
            artist_name: format!("Artist {}", id),
            stage_id: stage.to_string(),
            start_time: start.to_string(),
            end_time: end.to_string(),
            priority,
            day_id: "day-1".to_string(),
        }
    }

    #[test]
    fn test_slots_by_stage_filters_and_sorts() {
        let a = slot("a", "main", "16:00", "17:00", Priority::Maybe);
        let b = slot("b", "grove", "14:00", "15:00", Priority::Maybe);
        let c = slot("c", "main", "14:30", "15:30", Priority::Maybe);
        let day = vec![&a, &b, &c];

        let main = slots_by_stage(&day, "main");
        let ids: Vec<&str> = main.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a"]);
    }

    #[test]
    fn test_sort_is_stable_on_equal_start_times() {
        let a = slot("a", "main", "14:00", "15:00", Priority::Maybe);
        let b = slot("b", "main", "14:00", "14:30", Priority::Maybe);
        let c = slot("c", "main", "13:00", "14:00", Priority::Maybe);
        let day = vec![&a, &b, &c];

        let ids: Vec<&str> = slots_by_stage(&day, "main")
            .iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_malformed_start_time_sorts_last() {
        let a = slot("a", "main", "whenever", "15:00", Priority::Maybe);
        let b = slot("b", "main", "22:00", "23:00", Priority::Maybe);
        let day = vec![&a, &b];

        let ids: Vec<&str> = slots_by_stage(&day, "main")
            .iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_summary_counts_are_additive() {
        let a = slot("a", "main", "14:00", "15:00", Priority::Must);
        let b = slot("b", "main", "15:00", "16:00", Priority::Maybe);
        let c = slot("c", "grove", "14:00", "15:00", Priority::Skip);
        let d = slot("d", "grove", "16:00", "17:00", Priority::Must);
        let day = vec![&a, &b, &c, &d];

        let summary = summarize(&day);
        assert_eq!(summary.must_count, 2);
        assert_eq!(summary.maybe_count, 1);
        assert_eq!(summary.skip_count, 1);
        assert_eq!(summary.total(), day.len());
    }

    #[test]
    fn test_day_time_bounds() {
        let a = slot("a", "main", "14:00", "15:00", Priority::Maybe);
        let b = slot("b", "grove", "12:30", "13:15", Priority::Maybe);
        let c = slot("c", "grove", "20:00", "23:30", Priority::Maybe);
        let day = vec![&a, &b, &c];

        assert_eq!(day_time_bounds(&day), Some((12 * 60 + 30, 23 * 60 + 30)));
    }

    #[test]
    fn test_day_time_bounds_empty_day_is_none() {
        assert_eq!(day_time_bounds(&[]), None);
    }

    #[test]
    fn test_day_time_bounds_skips_malformed() {
        let a = slot("a", "main", "??", "15:00", Priority::Maybe);
        let b = slot("b", "main", "14:00", "16:00", Priority::Maybe);
        let day = vec![&a, &b];
        assert_eq!(day_time_bounds(&day), Some((14 * 60, 16 * 60)));

        let only_bad = vec![&a];
        assert_eq!(day_time_bounds(&only_bad), None);
    }
}
