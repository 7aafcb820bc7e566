pub mod access;
pub mod category;
pub mod collaborator;
pub mod events;
pub mod invitation;
pub mod item;
pub mod list;
pub mod repositories;
pub mod user;

// Re-export commonly used types
pub use access::{Access, CollaboratorRole, Permission};
pub use category::{Category, CategoryRepository};
pub use collaborator::{CollaboratorRepository, ListCollaborator};
pub use events::{Event, EventMessage};
pub use invitation::{Invitation, InvitationRepository};
pub use item::{CreateItemDto, ItemPriority, ItemRepository, ListItem, UpdateItemDto};
pub use list::{
    CreateListDto, ListOverview, ListQueryDto, ListRepository, ListSortField, ListStatus,
    ListSummary, ShoppingList, UpdateListDto,
};
pub use repositories::RepositoryProvider;
pub use user::{User, UserRepository};

// Re-export error types for convenience
pub use crate::shared::types::errors::{DomainError, DomainResult};
