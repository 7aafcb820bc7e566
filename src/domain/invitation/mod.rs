//! Invitation aggregate

pub mod model;
pub mod repository;

pub use model::Invitation;
pub use repository::InvitationRepository;
