mod slot;

pub use slot::{ArtistSlot, Priority};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{FestivalError, Result};

/// A named performance area within a festival day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stage {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// One day of the festival. Stage order is display order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FestivalDay {
    pub id: String,
    /// ISO date, e.g. "2026-09-05".
    pub date: String,
    pub stages: Vec<Stage>,
}

impl FestivalDay {
    pub fn stage(&self, stage_id: &str) -> Option<&Stage> {
        self.stages.iter().find(|s| s.id == stage_id)
    }

    /// Stage name for display; slots with a dangling reference render as
    /// "Unknown Stage" rather than disappearing.
    pub fn stage_name(&self, stage_id: &str) -> &str {
        self.stage(stage_id).map_or("Unknown Stage", |s| s.name.as_str())
    }
}

/// Emergency contact details embedded in the wallpaper QR card.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub name: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternate_contact: Option<String>,
}

/// Aggregate root. Owns its days, stages and artist slots outright; the
/// `day_id`/`stage_id` fields inside slots are non-owning back-references.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Festival {
    pub id: String,
    pub name: String,
    pub days: Vec<FestivalDay>,
    /// Flat list spanning all days; views filter by `day_id`.
    pub artists: Vec<ArtistSlot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_info: Option<ContactInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Festival {
    pub fn new(name: String, days: Vec<FestivalDay>, artists: Vec<ArtistSlot>) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            days,
            artists,
            contact_info: None,
            created_at: Some(now),
            updated_at: Some(now),
        }
    }

    pub fn day(&self, day_id: &str) -> Option<&FestivalDay> {
        self.days.iter().find(|d| d.id == day_id)
    }

    /// The day the scheduling views operate on. Later days are modeled but
    /// never consulted by scheduling.
    pub fn first_day(&self) -> Option<&FestivalDay> {
        self.days.first()
    }

    /// All slots belonging to a day, in insertion order.
    pub fn day_slots(&self, day_id: &str) -> Vec<&ArtistSlot> {
        self.artists.iter().filter(|a| a.day_id == day_id).collect()
    }

    /// Find a slot by exact id, id prefix, or case-insensitive artist name.
    pub fn find_slot(&self, query: &str) -> Option<&ArtistSlot> {
        if let Some(slot) = self.artists.iter().find(|a| a.id == query) {
            return Some(slot);
        }
        if let Some(slot) = self.artists.iter().find(|a| a.id.starts_with(query)) {
            return Some(slot);
        }
        let lower = query.to_lowercase();
        self.artists
            .iter()
            .find(|a| a.artist_name.to_lowercase() == lower)
    }

    /// Set a slot's priority and stamp `updated_at`.
    pub fn set_priority(&mut self, query: &str, priority: Priority) -> Result<()> {
        let id = self
            .find_slot(query)
            .map(|s| s.id.clone())
            .ok_or_else(|| FestivalError::SlotNotFound(query.to_string()))?;

        let slot = self
            .artists
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| FestivalError::SlotNotFound(query.to_string()))?;
        slot.priority = priority;

        self.touch();
        Ok(())
    }

    /// Advance a slot's priority one step in the cycle and stamp
    /// `updated_at`. Returns the new priority.
    pub fn cycle_priority(&mut self, query: &str) -> Result<Priority> {
        let current = self
            .find_slot(query)
            .map(|s| s.priority)
            .ok_or_else(|| FestivalError::SlotNotFound(query.to_string()))?;
        let next = current.cycle();
        self.set_priority(query, next)?;
        Ok(next)
    }

    pub fn set_contact_info(&mut self, contact_info: ContactInfo) {
        self.contact_info = Some(contact_info);
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Some(Utc::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_festival() -> Festival {
        let day = FestivalDay {
            id: "day-1".to_string(),
            date: "2026-09-05".to_string(),
            stages: vec![Stage {
                id: "stage-1".to_string(),
                name: "Main Stage".to_string(),
                color: None,
            }],
        };
        let slot = ArtistSlot {
            id: "a1".to_string(),
            artist_name: "Phoenix Rising".to_string(),
            stage_id: "stage-1".to_string(),
            start_time: "18:30".to_string(),
            end_time: "19:45".to_string(),
            priority: Priority::Maybe,
            day_id: "day-1".to_string(),
        };
        Festival::new("Test Fest".to_string(), vec![day], vec![slot])
    }

    #[test]
    fn test_find_slot_by_id_prefix_and_name() {
        let festival = sample_festival();
        assert!(festival.find_slot("a1").is_some());
        assert!(festival.find_slot("a").is_some());
        assert!(festival.find_slot("phoenix rising").is_some());
        assert!(festival.find_slot("nobody").is_none());
    }

    #[test]
    fn test_cycle_priority_stamps_updated_at() {
        let mut festival = sample_festival();
        let before = festival.updated_at;
        let next = festival.cycle_priority("a1").unwrap();
        assert_eq!(next, Priority::Must);
        assert_eq!(festival.find_slot("a1").unwrap().priority, Priority::Must);
        assert!(festival.updated_at >= before);
    }

    #[test]
    fn test_set_priority_unknown_slot_errors() {
        let mut festival = sample_festival();
        assert!(festival.set_priority("missing", Priority::Skip).is_err());
    }

    #[test]
    fn test_stage_name_fallback() {
        let festival = sample_festival();
        let day = festival.first_day().unwrap();
        assert_eq!(day.stage_name("stage-1"), "Main Stage");
        assert_eq!(day.stage_name("stage-404"), "Unknown Stage");
    }
}
