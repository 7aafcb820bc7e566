//! Item aggregate
//!
//! Contains the ListItem entity, DTOs, and repository interface.

pub mod model;
pub mod repository;

mod dto_create;
mod dto_update;

// Re-export model types
pub use model::{ItemPriority, ListItem};

// Re-export DTOs
pub use dto_create::CreateItemDto;
pub use dto_update::UpdateItemDto;

// Re-export repository trait
pub use repository::ItemRepository;
