//! Collaborator domain entity

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::access::CollaboratorRole;

/// Membership record granting a user a role on someone else's list.
/// At most one record exists per (list, user) pair; owners never get one.
#[derive(Debug, Clone)]
pub struct ListCollaborator {
    /// Unique record ID
    pub id: Uuid,
    /// The shared list
    pub list_id: Uuid,
    /// The invited user
    pub user_id: Uuid,
    /// Granted role
    pub role: CollaboratorRole,
    /// When the user joined the list
    pub joined_at: DateTime<Utc>,
}

impl ListCollaborator {
    pub fn new(list_id: Uuid, user_id: Uuid, role: CollaboratorRole) -> Self {
        Self {
            id: Uuid::new_v4(),
            list_id,
            user_id,
            role,
            joined_at: Utc::now(),
        }
    }
}
