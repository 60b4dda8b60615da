use thiserror::Error;

#[derive(Error, Debug)]
pub enum FestivalError {
    #[error("Not in a festperfect directory. Run 'festperfect init' first.")]
    NotInitialized,

    #[error("Already initialized. Remove .festperfect/ to reinitialize.")]
    AlreadyInitialized,

    #[error("No festival stored yet. Run 'festperfect init --demo' or 'festperfect import'.")]
    NoFestival,

    #[error("Artist slot not found: {0}")]
    SlotNotFound(String),

    #[error("Shared plan not found: {0}")]
    ShareNotFound(String),

    #[error("Invalid time '{0}': expected HH:MM in 24-hour format")]
    InvalidTime(String),

    #[error("Invalid priority: {0}")]
    InvalidPriority(String),

    #[error("Unknown device: {0}")]
    UnknownDevice(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

pub type Result<T> = std::result::Result<T, FestivalError>;
