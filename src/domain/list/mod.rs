//! List aggregate
//!
//! Contains the ShoppingList entity, DTOs, and repository interface.

pub mod model;
pub mod repository;

mod dto_create;
mod dto_query;
mod dto_update;

// Re-export model types
pub use model::{ListOverview, ListStatus, ListSummary, ShoppingList};

// Re-export DTOs
pub use dto_create::CreateListDto;
pub use dto_query::{ListQueryDto, ListSortField};
pub use dto_update::UpdateListDto;

// Re-export repository trait
pub use repository::ListRepository;
