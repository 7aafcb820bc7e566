//! Collaboration module — sharing, roles, invitations
//!
//! Contains the `CollaborationService`, the single authority for the
//! owner/collaborator permission model every other service defers to.

pub mod invite_code;
pub mod service;

pub use invite_code::{generate_invite_code, hash_invite_code};
pub use service::{CollaborationService, InvitationLink};
