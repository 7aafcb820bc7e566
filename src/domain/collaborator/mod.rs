//! Collaborator aggregate

pub mod model;
pub mod repository;

pub use model::ListCollaborator;
pub use repository::CollaboratorRepository;
