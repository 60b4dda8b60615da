pub mod cli;
pub mod demo;
pub mod error;
pub mod extract;
pub mod model;
pub mod plan;
pub mod schedule;
pub mod share;
pub mod storage;
pub mod validate;
pub mod wallpaper;

pub use error::{FestivalError, Result};
pub use model::{ArtistSlot, ContactInfo, Festival, FestivalDay, Priority, Stage};
pub use storage::FestivalStore;
