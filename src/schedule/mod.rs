// src/schedule/mod.rs
//! The scheduling core: time parsing, conflict detection and per-day
//! aggregation.
//!
//! Everything here is a pure function over slots supplied by the caller --
//! no I/O, no shared state, no caching. Views are recomputed from scratch
//! after every edit, which keeps them trivially consistent at lineup scale
//! (tens to low hundreds of slots per day).

mod aggregate;
mod conflict;
mod time;

pub use aggregate::{day_time_bounds, slots_by_stage, summarize, DaySummary};
pub use conflict::has_conflict;
pub use time::parse_time;

pub(crate) use time::parse_time_opt;
