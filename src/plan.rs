//! Read-only plan rendering.
//!
//! Generates the human-readable markdown view of a festival day: one
//! section per stage in display order, slots sorted by start time with
//! priority badges and conflict markers, and a summary footer. This is the
//! view a share link serves.

use crate::model::{ArtistSlot, Festival, Priority};
use crate::schedule::{has_conflict, slots_by_stage, summarize};

fn priority_badge(priority: Priority) -> &'static str {
    match priority {
        Priority::Must => "MUST SEE",
        Priority::Maybe => "maybe",
        Priority::Skip => "skip",
    }
}

fn format_slot_line(slot: &ArtistSlot, day_slots: &[&ArtistSlot]) -> String {
    let mut line = format!(
        "- {} - {} **{}** `[{}]`",
        slot.start_time,
        slot.end_time,
        slot.artist_name,
        priority_badge(slot.priority),
    );

    if has_conflict(slot, day_slots) {
        line.push_str(" `[conflict]`");
    }

    line
}

/// Render the first day's schedule as markdown.
pub fn render_markdown(festival: &Festival) -> String {
    let mut content = format!("# {}\n\n", festival.name);

    let day = match festival.first_day() {
        Some(day) => day,
        None => {
            content.push_str("*No festival days.*\n");
            return content;
        }
    };

    content.push_str(&format!("{}\n\n", day.date));

    let day_slots = festival.day_slots(&day.id);

    for stage in &day.stages {
        content.push_str(&format!("## {}\n\n", stage.name));

        let stage_slots = slots_by_stage(&day_slots, &stage.id);
        if stage_slots.is_empty() {
            content.push_str("*No artists scheduled.*\n\n");
            continue;
        }

        for slot in stage_slots {
            content.push_str(&format_slot_line(slot, &day_slots));
            content.push('\n');
        }
        content.push('\n');
    }

    let summary = summarize(&day_slots);
    content.push_str(&format!(
        "Must see: {} | Maybe: {} | Skip: {}\n",
        summary.must_count, summary.maybe_count, summary.skip_count
    ));

    content
}
