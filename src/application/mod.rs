pub mod categorizer;
pub mod collaboration;
pub mod events;
pub mod items;
pub mod lists;

// Re-export key types for convenience
pub use collaboration::{
    generate_invite_code, hash_invite_code, CollaborationService, InvitationLink,
};
pub use events::{create_event_bus, EventBus, EventSubscriber, SharedEventBus};
pub use items::{CreatedItem, ItemService, ParsedItem};
pub use lists::ListService;
