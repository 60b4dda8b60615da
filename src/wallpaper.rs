//! Lock-screen wallpaper payload.
//!
//! Builds everything a renderer needs: the device pixel size, the must-see
//! and maybe schedule lists, and the QR contact card text. Rasterization
//! and QR encoding stay behind [`WallpaperRenderer`]; the built-in
//! [`TextWallpaper`] produces a plain-text layout so the seam is usable
//! without an image backend.

use serde::Serialize;

use crate::error::{FestivalError, Result};
use crate::model::{ContactInfo, Festival, Priority};
use crate::schedule::parse_time_opt;

/// A target screen size for the generated wallpaper.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DeviceSize {
    pub name: &'static str,
    pub width: u32,
    pub height: u32,
    pub label: &'static str,
}

pub const DEVICE_SIZES: &[DeviceSize] = &[
    DeviceSize {
        name: "iphone-14-pro",
        width: 1179,
        height: 2556,
        label: "iPhone 14 Pro",
    },
    DeviceSize {
        name: "iphone-se",
        width: 750,
        height: 1334,
        label: "iPhone SE/8",
    },
    DeviceSize {
        name: "android-standard",
        width: 1080,
        height: 2340,
        label: "Android (Standard)",
    },
    DeviceSize {
        name: "android-large",
        width: 1440,
        height: 3200,
        label: "Android (Large)",
    },
];

/// Look up a device preset by name.
pub fn device_by_name(name: &str) -> Result<&'static DeviceSize> {
    DEVICE_SIZES
        .iter()
        .find(|d| d.name == name)
        .ok_or_else(|| FestivalError::UnknownDevice(name.to_string()))
}

/// One schedule line on the wallpaper.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WallpaperEntry {
    pub artist_name: String,
    pub stage_name: String,
    pub start_time: String,
    pub end_time: String,
}

/// The schedule content of the wallpaper: must-see and maybe picks for the
/// first day, each sorted by start time.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WallpaperPlan {
    pub festival_name: String,
    pub date: String,
    pub must_see: Vec<WallpaperEntry>,
    pub maybe: Vec<WallpaperEntry>,
}

impl WallpaperPlan {
    pub fn build(festival: &Festival) -> Result<Self> {
        let day = festival.first_day().ok_or(FestivalError::NoFestival)?;

        let mut must_see = Vec::new();
        let mut maybe = Vec::new();
        for slot in festival.day_slots(&day.id) {
            let entry = WallpaperEntry {
                artist_name: slot.artist_name.clone(),
                stage_name: day.stage_name(&slot.stage_id).to_string(),
                start_time: slot.start_time.clone(),
                end_time: slot.end_time.clone(),
            };
            match slot.priority {
                Priority::Must => must_see.push(entry),
                Priority::Maybe => maybe.push(entry),
                Priority::Skip => {}
            }
        }

        must_see.sort_by_key(|e| parse_time_opt(&e.start_time).unwrap_or(u32::MAX));
        maybe.sort_by_key(|e| parse_time_opt(&e.start_time).unwrap_or(u32::MAX));

        Ok(Self {
            festival_name: festival.name.clone(),
            date: day.date.clone(),
            must_see,
            maybe,
        })
    }
}

/// The text encoded into the wallpaper's QR code: an if-found contact card.
pub fn contact_card_text(contact: Option<&ContactInfo>) -> String {
    let name = contact.map_or("Owner", |c| c.name.as_str());
    let phone = contact.map_or("Not provided", |c| c.phone.as_str());
    let alt = contact
        .and_then(|c| c.alternate_contact.as_deref())
        .map(|a| format!("Alt: {}", a))
        .unwrap_or_default();

    format!(
        "If found, please contact:\n{}\nPhone: {}\n{}",
        name, phone, alt
    )
}

/// Renders a wallpaper payload at a device size. Implementations own
/// rasterization and QR encoding; the crate only prepares the content.
pub trait WallpaperRenderer {
    fn render(
        &self,
        plan: &WallpaperPlan,
        contact_text: &str,
        device: &DeviceSize,
    ) -> Result<Vec<u8>>;
}

/// Plain-text layout renderer: the schedule and contact card as bytes,
/// suitable for piping to a file or a terminal.
pub struct TextWallpaper;

impl WallpaperRenderer for TextWallpaper {
    fn render(
        &self,
        plan: &WallpaperPlan,
        contact_text: &str,
        device: &DeviceSize,
    ) -> Result<Vec<u8>> {
        let mut out = String::new();

        out.push_str(&format!(
            "{} ({}x{})\n",
            device.label, device.width, device.height
        ));
        out.push_str(&format!("{}\n{}\n\n", plan.festival_name, plan.date));

        out.push_str("MUST SEE\n");
        if plan.must_see.is_empty() {
            out.push_str("  (none yet)\n");
        }
        for entry in &plan.must_see {
            out.push_str(&format!(
                "  {} - {}  {} @ {}\n",
                entry.start_time, entry.end_time, entry.artist_name, entry.stage_name
            ));
        }

        out.push_str("\nMAYBE\n");
        if plan.maybe.is_empty() {
            out.push_str("  (none yet)\n");
        }
        for entry in &plan.maybe {
            out.push_str(&format!(
                "  {} - {}  {} @ {}\n",
                entry.start_time, entry.end_time, entry.artist_name, entry.stage_name
            ));
        }

        out.push_str(&format!("\n[QR]\n{}\n", contact_text));

        Ok(out.into_bytes())
    }
}
