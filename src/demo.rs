//! Built-in demo festival for trying the planner without importing a
//! lineup.

use chrono::{Duration, Utc};

use crate::model::{ArtistSlot, ContactInfo, Festival, FestivalDay, Priority, Stage};

const DEMO_DAY_ID: &str = "demo-day-1";

fn stage(id: &str, name: &str, color: &str) -> Stage {
    Stage {
        id: id.to_string(),
        name: name.to_string(),
        color: Some(color.to_string()),
    }
}

fn slot(id: &str, artist: &str, stage_id: &str, start: &str, end: &str, priority: Priority) -> ArtistSlot {
    ArtistSlot {
        id: id.to_string(),
        artist_name: artist.to_string(),
        stage_id: stage_id.to_string(),
        start_time: start.to_string(),
        end_time: end.to_string(),
        priority,
        day_id: DEMO_DAY_ID.to_string(),
    }
}

/// A one-day, four-stage lineup with a spread of priorities, dated thirty
/// days out so the plan always looks upcoming.
pub fn demo_festival() -> Festival {
    use Priority::{Maybe, Must, Skip};

    let stages = vec![
        stage("stage-1", "Main Stage", "#3b82f6"),
        stage("stage-2", "Left Foot Stage", "#8b5cf6"),
        stage("stage-3", "The Grove", "#10b981"),
        stage("stage-4", "Silent Disco", "#f59e0b"),
    ];

    let date = (Utc::now() + Duration::days(30)).format("%Y-%m-%d").to_string();

    let artists = vec![
        slot("a1", "The Midnight Runners", "stage-1", "14:00", "15:00", Maybe),
        slot("a2", "Electric Sunrise", "stage-2", "14:00", "14:45", Skip),
        slot("a3", "Luna & The Waves", "stage-3", "14:30", "15:30", Must),
        slot("a4", "DJ Neon Dreams", "stage-4", "14:00", "16:00", Maybe),
        slot("a5", "The Velvet Underground Revival", "stage-1", "15:30", "16:30", Must),
        slot("a6", "Cosmic Funk Collective", "stage-2", "15:15", "16:15", Maybe),
        slot("a7", "Indie Hearts", "stage-3", "16:00", "17:00", Skip),
        slot("a8", "Bass Rebel Sound System", "stage-1", "17:00", "18:00", Must),
        slot("a9", "The Analog Kids", "stage-2", "16:45", "17:45", Must),
        slot("a10", "Sunset Groove", "stage-3", "17:30", "18:30", Maybe),
        slot("a11", "Silent Storm DJ Set", "stage-4", "16:30", "18:30", Skip),
        slot("a12", "Phoenix Rising", "stage-1", "18:30", "19:45", Must),
        slot("a13", "Retro Wave", "stage-2", "18:15", "19:15", Maybe),
        slot("a14", "The Wildcards", "stage-3", "19:00", "20:00", Skip),
        slot("a15", "Starlight Symphony", "stage-1", "20:15", "21:45", Must),
        slot("a16", "Electronic Dreams", "stage-2", "19:45", "20:45", Must),
        slot("a17", "The Last Call", "stage-3", "20:30", "21:30", Maybe),
        slot("a18", "Late Night Vibes", "stage-4", "19:00", "22:00", Skip),
        slot("a19", "Headline Act Supreme", "stage-1", "22:00", "23:30", Must),
        slot("a20", "After Hours Collective", "stage-2", "21:15", "22:30", Maybe),
    ];

    let now = Utc::now();
    Festival {
        id: "demo-festival".to_string(),
        name: "Summer Sounds Festival".to_string(),
        days: vec![FestivalDay {
            id: DEMO_DAY_ID.to_string(),
            date,
            stages,
        }],
        artists,
        contact_info: Some(ContactInfo {
            name: "Your Name".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            alternate_contact: Some("friend@example.com".to_string()),
        }),
        created_at: Some(now),
        updated_at: Some(now),
    }
}
