// src/storage/store.rs
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use tracing::debug;

use crate::error::{FestivalError, Result};
use crate::model::{ArtistSlot, ContactInfo, Festival, FestivalDay, Stage};
use crate::share::{generate_share_id, ShareablePlan};

const FESTPERFECT_DIR: &str = ".festperfect";
const FESTIVAL_DB: &str = "festival.db";

/// Local repository for festival aggregates, keyed by festival id.
///
/// One SQLite database under `.festperfect/`. The scheduling core never sees
/// this type; the CLI layer loads an aggregate, hands it to the pure views,
/// and saves it back after mutations.
pub struct FestivalStore {
    conn: Connection,
    #[allow(dead_code)]
    path: PathBuf,
}

impl FestivalStore {
    /// Initialize a new festperfect directory
    pub fn init(root: &Path) -> Result<Self> {
        let dir = root.join(FESTPERFECT_DIR);

        if dir.exists() {
            return Err(FestivalError::AlreadyInitialized);
        }

        fs::create_dir_all(&dir)?;

        let path = dir.join(FESTIVAL_DB);
        let conn = Connection::open(&path)?;

        let store = Self { conn, path };
        store.init_schema()?;

        Ok(store)
    }

    /// Open an existing festperfect directory
    pub fn open(root: &Path) -> Result<Self> {
        let path = root.join(FESTPERFECT_DIR).join(FESTIVAL_DB);

        if !path.exists() {
            return Err(FestivalError::NotInitialized);
        }

        let conn = Connection::open(&path)?;
        let store = Self { conn, path };
        store.init_schema()?;

        Ok(store)
    }

    fn init_schema(&self) -> Result<()> {
        // Pointer bookkeeping (current festival)
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS meta (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS festivals (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                contact_name TEXT,
                contact_phone TEXT,
                contact_alternate TEXT,
                created_at TEXT,
                updated_at TEXT
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS festival_days (
                id TEXT PRIMARY KEY,
                festival_id TEXT NOT NULL,
                date TEXT NOT NULL,
                position INTEGER NOT NULL
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS stages (
                id TEXT PRIMARY KEY,
                festival_day_id TEXT NOT NULL,
                name TEXT NOT NULL,
                color TEXT,
                position INTEGER NOT NULL
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS artist_slots (
                id TEXT PRIMARY KEY,
                festival_id TEXT NOT NULL,
                festival_day_id TEXT NOT NULL,
                stage_id TEXT NOT NULL,
                artist_name TEXT NOT NULL,
                start_time TEXT NOT NULL,
                end_time TEXT NOT NULL,
                priority TEXT NOT NULL,
                position INTEGER NOT NULL
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_slots_festival ON artist_slots(festival_id)",
            [],
        )?;
        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_days_festival ON festival_days(festival_id)",
            [],
        )?;

        // Frozen snapshots behind share tokens
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS shared_plans (
                share_id TEXT PRIMARY KEY,
                festival_id TEXT NOT NULL,
                festival_json TEXT NOT NULL,
                created_at TEXT NOT NULL
            )",
            [],
        )?;

        Ok(())
    }

    /// Save the whole aggregate, replacing any previous rows for the same
    /// festival id, and point the current-festival marker at it.
    pub fn save_festival(&mut self, festival: &Festival) -> Result<()> {
        let tx = self.conn.transaction()?;

        tx.execute(
            "DELETE FROM stages WHERE festival_day_id IN
             (SELECT id FROM festival_days WHERE festival_id = ?1)",
            [&festival.id],
        )?;
        tx.execute(
            "DELETE FROM festival_days WHERE festival_id = ?1",
            [&festival.id],
        )?;
        tx.execute(
            "DELETE FROM artist_slots WHERE festival_id = ?1",
            [&festival.id],
        )?;

        tx.execute(
            "INSERT OR REPLACE INTO festivals
             (id, name, contact_name, contact_phone, contact_alternate, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                festival.id,
                festival.name,
                festival.contact_info.as_ref().map(|c| c.name.clone()),
                festival.contact_info.as_ref().map(|c| c.phone.clone()),
                festival
                    .contact_info
                    .as_ref()
                    .and_then(|c| c.alternate_contact.clone()),
                festival.created_at.map(|t| t.to_rfc3339()),
                festival.updated_at.map(|t| t.to_rfc3339()),
            ],
        )?;

        for (day_pos, day) in festival.days.iter().enumerate() {
            tx.execute(
                "INSERT INTO festival_days (id, festival_id, date, position)
                 VALUES (?1, ?2, ?3, ?4)",
                params![day.id, festival.id, day.date, day_pos as i64],
            )?;

            for (stage_pos, stage) in day.stages.iter().enumerate() {
                tx.execute(
                    "INSERT INTO stages (id, festival_day_id, name, color, position)
                     VALUES (?1, ?2, ?3, ?4, ?5)",
                    params![stage.id, day.id, stage.name, stage.color, stage_pos as i64],
                )?;
            }
        }

        for (slot_pos, slot) in festival.artists.iter().enumerate() {
            tx.execute(
                "INSERT INTO artist_slots
                 (id, festival_id, festival_day_id, stage_id, artist_name,
                  start_time, end_time, priority, position)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
                params![
                    slot.id,
                    festival.id,
                    slot.day_id,
                    slot.stage_id,
                    slot.artist_name,
                    slot.start_time,
                    slot.end_time,
                    slot.priority.to_string(),
                    slot_pos as i64,
                ],
            )?;
        }

        tx.execute(
            "INSERT OR REPLACE INTO meta (key, value) VALUES ('current_festival', ?1)",
            [&festival.id],
        )?;

        tx.commit()?;

        debug!(festival = %festival.id, slots = festival.artists.len(), "saved festival");
        Ok(())
    }

    /// Load an aggregate by festival id.
    pub fn load_festival(&self, id: &str) -> Result<Option<Festival>> {
        let header = self
            .conn
            .query_row(
                "SELECT name, contact_name, contact_phone, contact_alternate,
                        created_at, updated_at
                 FROM festivals WHERE id = ?1",
                [id],
                |row| {
                    Ok((
                        row.get::<_, String>(0)?,
                        row.get::<_, Option<String>>(1)?,
                        row.get::<_, Option<String>>(2)?,
                        row.get::<_, Option<String>>(3)?,
                        row.get::<_, Option<String>>(4)?,
                        row.get::<_, Option<String>>(5)?,
                    ))
                },
            )
            .optional()?;

        let (name, contact_name, contact_phone, contact_alternate, created_at, updated_at) =
            match header {
                Some(row) => row,
                None => return Ok(None),
            };

        let mut stmt = self.conn.prepare(
            "SELECT id, date FROM festival_days WHERE festival_id = ?1 ORDER BY position",
        )?;
        let day_rows = stmt
            .query_map([id], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let mut days = Vec::with_capacity(day_rows.len());
        for (day_id, date) in day_rows {
            let mut stage_stmt = self.conn.prepare(
                "SELECT id, name, color FROM stages
                 WHERE festival_day_id = ?1 ORDER BY position",
            )?;
            let stages = stage_stmt
                .query_map([&day_id], |row| {
                    Ok(Stage {
                        id: row.get(0)?,
                        name: row.get(1)?,
                        color: row.get(2)?,
                    })
                })?
                .collect::<std::result::Result<Vec<_>, _>>()?;

            days.push(FestivalDay {
                id: day_id,
                date,
                stages,
            });
        }

        let mut slot_stmt = self.conn.prepare(
            "SELECT id, festival_day_id, stage_id, artist_name, start_time, end_time, priority
             FROM artist_slots WHERE festival_id = ?1 ORDER BY position",
        )?;
        let artists = slot_stmt
            .query_map([id], |row| {
                Ok(ArtistSlot {
                    id: row.get(0)?,
                    day_id: row.get(1)?,
                    stage_id: row.get(2)?,
                    artist_name: row.get(3)?,
                    start_time: row.get(4)?,
                    end_time: row.get(5)?,
                    priority: row.get::<_, String>(6)?.parse().unwrap_or_default(),
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let contact_info = match (contact_name, contact_phone) {
            (Some(name), Some(phone)) => Some(ContactInfo {
                name,
                phone,
                alternate_contact: contact_alternate,
            }),
            _ => None,
        };

        Ok(Some(Festival {
            id: id.to_string(),
            name,
            days,
            artists,
            contact_info,
            created_at: parse_timestamp(created_at),
            updated_at: parse_timestamp(updated_at),
        }))
    }

    /// Load the festival the current-festival marker points at.
    pub fn load_current(&self) -> Result<Option<Festival>> {
        let current: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM meta WHERE key = 'current_festival'",
                [],
                |row| row.get(0),
            )
            .optional()?;

        match current {
            Some(id) => self.load_festival(&id),
            None => Ok(None),
        }
    }

    /// Delete an aggregate and, if it is the current one, the marker.
    pub fn clear_festival(&mut self, id: &str) -> Result<()> {
        let tx = self.conn.transaction()?;

        tx.execute(
            "DELETE FROM stages WHERE festival_day_id IN
             (SELECT id FROM festival_days WHERE festival_id = ?1)",
            [id],
        )?;
        tx.execute("DELETE FROM festival_days WHERE festival_id = ?1", [id])?;
        tx.execute("DELETE FROM artist_slots WHERE festival_id = ?1", [id])?;
        tx.execute("DELETE FROM festivals WHERE id = ?1", [id])?;
        tx.execute(
            "DELETE FROM meta WHERE key = 'current_festival' AND value = ?1",
            [id],
        )?;

        tx.commit()?;

        debug!(festival = %id, "cleared festival");
        Ok(())
    }

    /// Freeze the aggregate as a read-only snapshot and return its share
    /// token. Later edits to the live festival do not affect the snapshot.
    pub fn create_share(&self, festival: &Festival) -> Result<ShareablePlan> {
        let plan = ShareablePlan {
            festival_id: festival.id.clone(),
            share_id: generate_share_id(),
            festival: festival.clone(),
            created_at: Utc::now(),
        };

        self.conn.execute(
            "INSERT INTO shared_plans (share_id, festival_id, festival_json, created_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                plan.share_id,
                plan.festival_id,
                serde_json::to_string(&plan.festival)?,
                plan.created_at.to_rfc3339(),
            ],
        )?;

        debug!(share = %plan.share_id, festival = %plan.festival_id, "created share");
        Ok(plan)
    }

    /// Look up a frozen snapshot by share token.
    pub fn load_share(&self, share_id: &str) -> Result<Option<ShareablePlan>> {
        let row = self
            .conn
            .query_row(
                "SELECT festival_id, festival_json, created_at
                 FROM shared_plans WHERE share_id = ?1",
                [share_id],
                |row| {
                    Ok((
                        row.get::<_, String>(0)?,
                        row.get::<_, String>(1)?,
                        row.get::<_, String>(2)?,
                    ))
                },
            )
            .optional()?;

        let (festival_id, festival_json, created_at) = match row {
            Some(row) => row,
            None => return Ok(None),
        };

        let festival: Festival = serde_json::from_str(&festival_json)?;

        Ok(Some(ShareablePlan {
            festival_id,
            share_id: share_id.to_string(),
            festival,
            created_at: parse_timestamp(Some(created_at)).unwrap_or_else(Utc::now),
        }))
    }
}

fn parse_timestamp(value: Option<String>) -> Option<DateTime<Utc>> {
    value
        .and_then(|s| DateTime::parse_from_rfc3339(&s).ok())
        .map(|dt| dt.with_timezone(&Utc))
}
