//! # Shoplist Service
//!
//! Domain service layer for shared shopping lists: ownership, collaboration,
//! and the business rules that keep concurrent households consistent.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Core business entities, types and repository traits
//! - **application**: Services, permission checks and the event bus
//! - **infrastructure**: Storage adapters (in-memory reference implementation)
//! - **shared**: Error types, pagination and validation helpers
//!
//! Accounts, HTTP transport and persistence backends live in the embedding
//! application; this crate only asks for them through traits.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod shared;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::{default_config_path, AppConfig, InvitationConfig, LoggingConfig, ServiceLimits};

// Re-export the service layer
pub use application::{
    create_event_bus, CollaborationService, CreatedItem, EventBus, InvitationLink, ItemService,
    ListService, SharedEventBus,
};

// Re-export core domain types
pub use domain::{
    Access, CollaboratorRole, DomainError, DomainResult, Event, EventMessage, Permission,
};

pub use infrastructure::InMemoryStore;
pub use shared::errors::RepositoryError;
