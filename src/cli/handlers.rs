use std::env;
use std::fs;
use std::path::PathBuf;

use chrono::Utc;
use tracing::info;

use crate::demo::demo_festival;
use crate::error::{FestivalError, Result};
use crate::extract::ExtractedLineup;
use crate::model::{ContactInfo, Festival, Priority};
use crate::plan::render_markdown;
use crate::schedule::{day_time_bounds, has_conflict, slots_by_stage, summarize};
use crate::storage::FestivalStore;
use crate::validate::{check_festival, format_issue};
use crate::wallpaper::{
    contact_card_text, device_by_name, TextWallpaper, WallpaperPlan, WallpaperRenderer,
    DEVICE_SIZES,
};

/// Find the planner root by looking for .festperfect/ or .git/
fn find_root() -> PathBuf {
    let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let mut current = cwd.as_path();
    loop {
        if current.join(".festperfect").exists() || current.join(".git").exists() {
            return current.to_path_buf();
        }
        match current.parent() {
            Some(parent) => current = parent,
            None => return cwd,
        }
    }
}

fn open_store() -> Result<FestivalStore> {
    FestivalStore::open(&find_root())
}

fn load_current(store: &FestivalStore) -> Result<Festival> {
    store.load_current()?.ok_or(FestivalError::NoFestival)
}

fn report_issues(festival: &Festival) {
    for issue in check_festival(festival) {
        eprintln!("{}", format_issue(&issue));
    }
}

fn format_minutes(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

pub fn handle_init(demo: bool) -> Result<()> {
    let root = env::current_dir()?;

    let mut store = FestivalStore::init(&root)?;
    println!("Initialized festperfect in {}", root.display());

    if demo {
        let festival = demo_festival();
        store.save_festival(&festival)?;
        info!(festival = %festival.id, "seeded demo festival");
        println!(
            "Seeded demo festival '{}' ({} artists across {} stages)",
            festival.name,
            festival.artists.len(),
            festival.days[0].stages.len()
        );
    }

    Ok(())
}

pub fn handle_import(
    path: PathBuf,
    lineup: bool,
    name: Option<String>,
    date: Option<String>,
) -> Result<()> {
    let mut store = open_store()?;
    let data = fs::read_to_string(&path)?;

    let festival = if lineup {
        let extracted: ExtractedLineup = serde_json::from_str(&data)?;
        let fallback_name = name.unwrap_or_else(|| "Imported Festival".to_string());
        let fallback_date =
            date.unwrap_or_else(|| Utc::now().format("%Y-%m-%d").to_string());
        extracted.into_festival(&fallback_name, &fallback_date)
    } else {
        serde_json::from_str(&data)?
    };

    report_issues(&festival);
    store.save_festival(&festival)?;

    println!(
        "Imported festival '{}' ({} artists)",
        festival.name,
        festival.artists.len()
    );

    Ok(())
}

pub fn handle_show(json: bool) -> Result<()> {
    let store = open_store()?;
    let festival = load_current(&store)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&festival)?);
        return Ok(());
    }

    let day = match festival.first_day() {
        Some(day) => day,
        None => {
            println!("{} has no days scheduled.", festival.name);
            return Ok(());
        }
    };

    println!("{} - {}\n", festival.name, day.date);

    let day_slots = festival.day_slots(&day.id);

    if let Some((start, end)) = day_time_bounds(&day_slots) {
        println!("Day runs {} - {}\n", format_minutes(start), format_minutes(end));
    }

    for stage in &day.stages {
        println!("{}", stage.name);
        let stage_slots = slots_by_stage(&day_slots, &stage.id);
        if stage_slots.is_empty() {
            println!("  (no artists scheduled)");
        }
        for slot in stage_slots {
            let conflict = if has_conflict(slot, &day_slots) {
                "  << conflict"
            } else {
                ""
            };
            println!(
                "  {} - {}  {} [{}]{}",
                slot.start_time, slot.end_time, slot.artist_name, slot.priority, conflict
            );
        }
        println!();
    }

    let summary = summarize(&day_slots);
    println!(
        "Must see: {} | Maybe: {}",
        summary.must_count, summary.maybe_count
    );

    Ok(())
}

pub fn handle_plan() -> Result<()> {
    let store = open_store()?;
    let festival = load_current(&store)?;
    print!("{}", render_markdown(&festival));
    Ok(())
}

pub fn handle_priority(slot_query: String, set: Option<String>) -> Result<()> {
    let mut store = open_store()?;
    let mut festival = load_current(&store)?;

    let next = match set {
        Some(value) => {
            let priority: Priority = value
                .parse()
                .map_err(|_| FestivalError::InvalidPriority(value.clone()))?;
            festival.set_priority(&slot_query, priority)?;
            priority
        }
        None => festival.cycle_priority(&slot_query)?,
    };

    let slot = festival
        .find_slot(&slot_query)
        .ok_or_else(|| FestivalError::SlotNotFound(slot_query.clone()))?;
    let artist_name = slot.artist_name.clone();
    let slot_id = slot.id.clone();
    let day_id = slot.day_id.clone();

    store.save_festival(&festival)?;

    println!("{} is now [{}]", artist_name, next);

    // Conflicts are re-derived after every edit, never cached
    let day_slots = festival.day_slots(&day_id);
    if let Some(slot) = festival.find_slot(&slot_id) {
        if has_conflict(slot, &day_slots) {
            println!("Warning: clashes with another must-see pick on a different stage");
        }
    }

    Ok(())
}

pub fn handle_conflicts(json: bool) -> Result<()> {
    let store = open_store()?;
    let festival = load_current(&store)?;

    let day = match festival.first_day() {
        Some(day) => day,
        None => return Err(FestivalError::NoFestival),
    };
    let day_slots = festival.day_slots(&day.id);

    let conflicted: Vec<_> = day_slots
        .iter()
        .filter(|slot| has_conflict(slot, &day_slots))
        .copied()
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&conflicted)?);
        return Ok(());
    }

    if conflicted.is_empty() {
        println!("No conflicts among must-see picks.");
        return Ok(());
    }

    println!("Conflicting must-see picks:\n");
    for slot in conflicted {
        println!(
            "  {} - {}  {} @ {}",
            slot.start_time,
            slot.end_time,
            slot.artist_name,
            day.stage_name(&slot.stage_id)
        );
    }

    Ok(())
}

pub fn handle_contact(name: String, phone: String, alternate: Option<String>) -> Result<()> {
    let mut store = open_store()?;
    let mut festival = load_current(&store)?;

    festival.set_contact_info(ContactInfo {
        name,
        phone,
        alternate_contact: alternate,
    });
    store.save_festival(&festival)?;

    println!("Contact information updated");
    Ok(())
}

pub fn handle_share_create() -> Result<()> {
    let store = open_store()?;
    let festival = load_current(&store)?;

    let plan = store.create_share(&festival)?;

    println!("Created share {}", plan.share_id);
    println!("View it with: festperfect share show {}", plan.share_id);
    Ok(())
}

pub fn handle_share_show(share_id: String, json: bool) -> Result<()> {
    let store = open_store()?;

    let plan = store
        .load_share(&share_id)?
        .ok_or_else(|| FestivalError::ShareNotFound(share_id.clone()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    println!(
        "Shared plan {} (created {})\n",
        plan.share_id,
        plan.created_at.format("%Y-%m-%d %H:%M")
    );
    print!("{}", render_markdown(&plan.festival));
    Ok(())
}

pub fn handle_wallpaper(device: String, output: Option<PathBuf>, list: bool) -> Result<()> {
    if list {
        println!("Device presets:\n");
        for preset in DEVICE_SIZES {
            println!(
                "  {:<18} {:>4} x {:<4} {}",
                preset.name, preset.width, preset.height, preset.label
            );
        }
        return Ok(());
    }

    let store = open_store()?;
    let festival = load_current(&store)?;

    let device = device_by_name(&device)?;
    let plan = WallpaperPlan::build(&festival)?;
    let contact_text = contact_card_text(festival.contact_info.as_ref());
    let bytes = TextWallpaper.render(&plan, &contact_text, device)?;

    match output {
        Some(path) => {
            fs::write(&path, &bytes)?;
            println!("Wrote wallpaper payload to {}", path.display());
        }
        None => {
            print!("{}", String::from_utf8_lossy(&bytes));
        }
    }

    Ok(())
}

pub fn handle_validate() -> Result<()> {
    let store = open_store()?;
    let festival = load_current(&store)?;

    let issues = check_festival(&festival);
    if issues.is_empty() {
        println!("No problems found.");
        return Ok(());
    }

    for issue in &issues {
        println!("{}", format_issue(issue));
    }
    println!("\n{} problem(s) found", issues.len());
    Ok(())
}

pub fn handle_clear(force: bool) -> Result<()> {
    let mut store = open_store()?;

    if !force {
        println!("This deletes the stored festival. Re-run with --force to confirm.");
        return Ok(());
    }

    match store.load_current()? {
        Some(festival) => {
            store.clear_festival(&festival.id)?;
            println!("Deleted festival '{}'", festival.name);
        }
        None => println!("Nothing to delete."),
    }

    Ok(())
}
