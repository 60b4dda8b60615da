//! Share tokens and the snapshot they unlock.
//!
//! A share is a frozen copy of the festival behind an opaque 8-character
//! token. The token carries no meaning; the snapshot is stored by the
//! repository ([`crate::storage::FestivalStore`]) and served read-only.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const SHARE_ID_LEN: usize = 8;
const SHARE_ALPHABET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// A read-only festival snapshot issued under a share token.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareablePlan {
    pub festival_id: String,
    pub share_id: String,
    pub festival: crate::model::Festival,
    pub created_at: DateTime<Utc>,
}

/// Generate an opaque share token: 8 characters of `[A-Za-z0-9]`, entropy
/// drawn from a fresh UUID.
pub fn generate_share_id() -> String {
    let bytes = *uuid::Uuid::new_v4().as_bytes();
    bytes
        .iter()
        .take(SHARE_ID_LEN)
        .map(|b| SHARE_ALPHABET[*b as usize % SHARE_ALPHABET.len()] as char)
        .collect()
}
