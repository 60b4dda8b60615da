//! Ingestion-time validation for a festival aggregate.
//!
//! The scheduling views stay total over whatever data they are handed: a
//! slot with a malformed time never conflicts and sorts last, and a slot
//! referencing a missing day or stage simply drops out of every view. This
//! pass is where that silence becomes a report, run when a festival is
//! imported or on demand.

use crate::model::Festival;
use crate::schedule::parse_time;

/// A data problem the scheduling views would otherwise swallow.
#[derive(Debug, Clone)]
pub enum ValidationIssue {
    /// Slot's `day_id` matches no festival day.
    UnknownDay {
        artist_name: String,
        day_id: String,
    },
    /// Slot's `stage_id` matches no stage within its day.
    UnknownStage {
        artist_name: String,
        stage_id: String,
    },
    /// Start or end time is not a valid "HH:MM".
    MalformedTime {
        artist_name: String,
        value: String,
    },
    /// Both times parse but the slot ends at or before it starts.
    InvertedInterval {
        artist_name: String,
        start_time: String,
        end_time: String,
    },
}

/// Check every slot against its owning festival and return any issues.
pub fn check_festival(festival: &Festival) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    for slot in &festival.artists {
        let day = festival.day(&slot.day_id);
        match day {
            None => issues.push(ValidationIssue::UnknownDay {
                artist_name: slot.artist_name.clone(),
                day_id: slot.day_id.clone(),
            }),
            Some(day) => {
                if day.stage(&slot.stage_id).is_none() {
                    issues.push(ValidationIssue::UnknownStage {
                        artist_name: slot.artist_name.clone(),
                        stage_id: slot.stage_id.clone(),
                    });
                }
            }
        }

        let start = parse_time(&slot.start_time);
        let end = parse_time(&slot.end_time);
        for (result, value) in [(&start, &slot.start_time), (&end, &slot.end_time)] {
            if result.is_err() {
                issues.push(ValidationIssue::MalformedTime {
                    artist_name: slot.artist_name.clone(),
                    value: value.clone(),
                });
            }
        }

        if let (Ok(start_min), Ok(end_min)) = (start, end) {
            if start_min >= end_min {
                issues.push(ValidationIssue::InvertedInterval {
                    artist_name: slot.artist_name.clone(),
                    start_time: slot.start_time.clone(),
                    end_time: slot.end_time.clone(),
                });
            }
        }
    }

    issues
}

/// Format an issue for display.
pub fn format_issue(issue: &ValidationIssue) -> String {
    match issue {
        ValidationIssue::UnknownDay {
            artist_name,
            day_id,
        } => {
            format!(
                "Warning: '{}' references unknown day '{}' - slot is invisible to every view",
                artist_name, day_id
            )
        }
        ValidationIssue::UnknownStage {
            artist_name,
            stage_id,
        } => {
            format!(
                "Warning: '{}' references unknown stage '{}' - slot will not appear in any stage column",
                artist_name, stage_id
            )
        }
        ValidationIssue::MalformedTime { artist_name, value } => {
            format!(
                "Warning: '{}' has unparseable time '{}' - slot is excluded from conflict detection",
                artist_name, value
            )
        }
        ValidationIssue::InvertedInterval {
            artist_name,
            start_time,
            end_time,
        } => {
            format!(
                "Warning: '{}' ends at or before it starts ({} - {})",
                artist_name, start_time, end_time
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ArtistSlot, FestivalDay, Priority, Stage};

    fn festival_with_slot(slot: ArtistSlot) -> Festival {
        let day = FestivalDay {
            id: "day-1".to_string(),
            date: "2026-09-05".to_string(),
            stages: vec![Stage {
                id: "stage-1".to_string(),
                name: "Main Stage".to_string(),
                color: None,
            }],
        };
        Festival::new("Test Fest".to_string(), vec![day], vec![slot])
    }

    fn valid_slot() -> ArtistSlot {
        ArtistSlot {
            id: "a1".to_string(),
            artist_name: "Indie Hearts".to_string(),
            stage_id: "stage-1".to_string(),
            start_time: "16:00".to_string(),
            end_time: "17:00".to_string(),
            priority: Priority::Maybe,
            day_id: "day-1".to_string(),
        }
    }

    #[test]
    fn test_valid_festival_has_no_issues() {
        let festival = festival_with_slot(valid_slot());
        assert!(check_festival(&festival).is_empty());
    }

    #[test]
    fn test_unknown_day_reported() {
        let mut slot = valid_slot();
        slot.day_id = "day-404".to_string();
        let issues = check_festival(&festival_with_slot(slot));
        assert_eq!(issues.len(), 1);
        match &issues[0] {
            ValidationIssue::UnknownDay { day_id, .. } => assert_eq!(day_id, "day-404"),
            other => panic!("Expected UnknownDay, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_stage_reported() {
        let mut slot = valid_slot();
        slot.stage_id = "stage-404".to_string();
        let issues = check_festival(&festival_with_slot(slot));
        assert_eq!(issues.len(), 1);
        match &issues[0] {
            ValidationIssue::UnknownStage { stage_id, .. } => assert_eq!(stage_id, "stage-404"),
            other => panic!("Expected UnknownStage, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_times_reported_per_field() {
        let mut slot = valid_slot();
        slot.start_time = "afternoon".to_string();
        slot.end_time = "25:99".to_string();
        let issues = check_festival(&festival_with_slot(slot));
        let malformed = issues
            .iter()
            .filter(|i| matches!(i, ValidationIssue::MalformedTime { .. }))
            .count();
        assert_eq!(malformed, 2);
    }

    #[test]
    fn test_inverted_interval_reported() {
        let mut slot = valid_slot();
        slot.start_time = "18:00".to_string();
        slot.end_time = "17:00".to_string();
        let issues = check_festival(&festival_with_slot(slot));
        assert_eq!(issues.len(), 1);
        assert!(matches!(
            issues[0],
            ValidationIssue::InvertedInterval { .. }
        ));
    }

    #[test]
    fn test_zero_length_interval_is_inverted() {
        let mut slot = valid_slot();
        slot.start_time = "17:00".to_string();
        slot.end_time = "17:00".to_string();
        let issues = check_festival(&festival_with_slot(slot));
        assert!(matches!(
            issues[0],
            ValidationIssue::InvertedInterval { .. }
        ));
    }

    #[test]
    fn test_format_issue_mentions_artist() {
        let issue = ValidationIssue::MalformedTime {
            artist_name: "Retro Wave".to_string(),
            value: "late".to_string(),
        };
        let msg = format_issue(&issue);
        assert!(msg.contains("Retro Wave"));
        assert!(msg.contains("late"));
    }
}
