//! Item management — creation, check-offs, ordering, and voice capture

pub mod service;
pub mod transcription;

pub use service::{CreatedItem, ItemService};
pub use transcription::{parse_transcription, ParsedItem};
