//! Best-effort lineup extraction.
//!
//! An extractor (an AI vision backend, a poster parser, or a hand-written
//! JSON file) produces a partial [`ExtractedLineup`]; this module turns it
//! into a full festival with defaults filled in. The extraction itself
//! lives behind [`LineupExtractor`] -- nothing in this crate performs it.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::{ArtistSlot, Festival, FestivalDay, Stage};

const DEFAULT_START_TIME: &str = "14:00";
const DEFAULT_END_TIME: &str = "15:00";

/// Partial lineup as an extractor best-effort reports it. Every field may
/// be missing except the stage/artist names themselves.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedLineup {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub festival_name: Option<String>,
    /// ISO date if the extractor could read one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub stages: Vec<ExtractedStage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedStage {
    pub name: String,
    pub artists: Vec<ExtractedArtist>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedArtist {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
}

/// The seam an extraction backend implements: given raw image bytes,
/// optionally produce a partial lineup. `Ok(None)` means the backend ran
/// but could not read a lineup out of the image.
pub trait LineupExtractor {
    fn extract(&self, image: &[u8]) -> Result<Option<ExtractedLineup>>;
}

impl ExtractedLineup {
    /// Build a full festival from the partial lineup.
    ///
    /// Missing pieces get defaults: the fallback name/date when the
    /// extractor saw none, "14:00"-"15:00" for slots without times, and
    /// `maybe` priority for everything. All ids are freshly minted.
    pub fn into_festival(self, fallback_name: &str, fallback_date: &str) -> Festival {
        let name = self
            .festival_name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| fallback_name.to_string());
        let date = self
            .date
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| fallback_date.to_string());

        let day_id = uuid::Uuid::new_v4().to_string();

        let stages: Vec<Stage> = self
            .stages
            .iter()
            .map(|s| Stage {
                id: uuid::Uuid::new_v4().to_string(),
                name: s.name.clone(),
                color: None,
            })
            .collect();

        let mut artists = Vec::new();
        for (extracted, stage) in self.stages.iter().zip(&stages) {
            for artist in &extracted.artists {
                artists.push(ArtistSlot::new(
                    artist.name.clone(),
                    stage.id.clone(),
                    artist
                        .start_time
                        .clone()
                        .unwrap_or_else(|| DEFAULT_START_TIME.to_string()),
                    artist
                        .end_time
                        .clone()
                        .unwrap_or_else(|| DEFAULT_END_TIME.to_string()),
                    day_id.clone(),
                ));
            }
        }

        Festival::new(
            name,
            vec![FestivalDay {
                id: day_id,
                date,
                stages,
            }],
            artists,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Priority;
    use crate::validate::check_festival;

    fn sample_lineup() -> ExtractedLineup {
        ExtractedLineup {
            festival_name: Some("Neon Nights".to_string()),
            date: None,
            stages: vec![
                ExtractedStage {
                    name: "Main Stage".to_string(),
                    artists: vec![
                        ExtractedArtist {
                            name: "Phoenix Rising".to_string(),
                            start_time: Some("18:30".to_string()),
                            end_time: Some("19:45".to_string()),
                        },
                        ExtractedArtist {
                            name: "Retro Wave".to_string(),
                            start_time: None,
                            end_time: None,
                        },
                    ],
                },
                ExtractedStage {
                    name: "The Grove".to_string(),
                    artists: vec![ExtractedArtist {
                        name: "Luna & The Waves".to_string(),
                        start_time: Some("14:30".to_string()),
                        end_time: Some("15:30".to_string()),
                    }],
                },
            ],
        }
    }

    #[test]
    fn test_into_festival_fills_defaults() {
        let festival = sample_lineup().into_festival("Fallback Fest", "2026-09-05");

        assert_eq!(festival.name, "Neon Nights");
        assert_eq!(festival.days.len(), 1);
        assert_eq!(festival.days[0].date, "2026-09-05");
        assert_eq!(festival.days[0].stages.len(), 2);
        assert_eq!(festival.artists.len(), 3);

        let retro = festival.find_slot("Retro Wave").unwrap();
        assert_eq!(retro.start_time, "14:00");
        assert_eq!(retro.end_time, "15:00");
        assert_eq!(retro.priority, Priority::Maybe);
    }

    #[test]
    fn test_into_festival_references_are_consistent() {
        let festival = sample_lineup().into_festival("Fallback Fest", "2026-09-05");
        assert!(check_festival(&festival).is_empty());
    }

    #[test]
    fn test_fallback_name_when_extractor_saw_none() {
        let mut lineup = sample_lineup();
        lineup.festival_name = None;
        let festival = lineup.into_festival("Fallback Fest", "2026-09-05");
        assert_eq!(festival.name, "Fallback Fest");
    }

    #[test]
    fn test_lineup_deserializes_with_missing_fields() {
        let json = r#"{
            "festivalName": "Neon Nights",
            "stages": [
                {"name": "Main Stage", "artists": [{"name": "Phoenix Rising"}]}
            ]
        }"#;
        let lineup: ExtractedLineup = serde_json::from_str(json).unwrap();
        assert_eq!(lineup.stages.len(), 1);
        assert!(lineup.date.is_none());
        assert!(lineup.stages[0].artists[0].start_time.is_none());
    }
}
