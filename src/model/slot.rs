// src/model/slot.rs
use serde::{Deserialize, Serialize};

/// Attendance priority for a single artist slot.
///
/// Only `Must` participates in conflict detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Must,
    #[default]
    Maybe,
    Skip,
}

impl Priority {
    /// Advance to the next priority in the fixed cycle
    /// maybe -> must -> skip -> maybe.
    ///
    /// There is no transition guard: any state may advance regardless of
    /// existing conflicts.
    pub fn cycle(self) -> Self {
        match self {
            Priority::Maybe => Priority::Must,
            Priority::Must => Priority::Skip,
            Priority::Skip => Priority::Maybe,
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::Must => write!(f, "must"),
            Priority::Maybe => write!(f, "maybe"),
            Priority::Skip => write!(f, "skip"),
        }
    }
}

impl std::str::FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "must" | "must-see" => Ok(Priority::Must),
            "maybe" => Ok(Priority::Maybe),
            "skip" => Ok(Priority::Skip),
            _ => Err(format!("Invalid priority: {}", s)),
        }
    }
}

/// One scheduled performance: an artist on a stage for a time range.
///
/// `start_time`/`end_time` are "HH:MM" 24-hour wall-clock strings as entered
/// by the user. `start_time < end_time` is expected but not enforced here;
/// the validation pass reports violations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistSlot {
    pub id: String,
    pub artist_name: String,
    /// Back-reference to a stage within the owning day. Lookup only.
    pub stage_id: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub priority: Priority,
    /// Back-reference to the owning festival day. Lookup only.
    pub day_id: String,
}

impl ArtistSlot {
    pub fn new(
        artist_name: String,
        stage_id: String,
        start_time: String,
        end_time: String,
        day_id: String,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            artist_name,
            stage_id,
            start_time,
            end_time,
            priority: Priority::default(),
            day_id,
        }
    }
}
