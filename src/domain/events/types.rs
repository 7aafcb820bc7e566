//! Notification events
//!
//! Facts the services announce after successful mutations. Delivery (push,
//! email digests) is wired by the embedding application; publishing never
//! blocks and never fails the triggering operation.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::access::CollaboratorRole;

/// Event types for notifications
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A list was shared with a user
    ListShared {
        list_id: Uuid,
        user_id: Uuid,
        role: CollaboratorRole,
    },
    /// The owner removed a collaborator
    CollaboratorRemoved { list_id: Uuid, user_id: Uuid },
    /// A collaborator left on their own
    CollaboratorLeft { list_id: Uuid, user_id: Uuid },
    /// The owner changed a collaborator's role
    CollaboratorRoleChanged {
        list_id: Uuid,
        user_id: Uuid,
        role: CollaboratorRole,
    },
    /// A user joined a list through an invitation link
    InvitationAccepted { list_id: Uuid, user_id: Uuid },
    /// A list was marked completed
    ListCompleted { list_id: Uuid, completed_by: Uuid },
}

impl Event {
    /// Stable name for logging and downstream routing.
    pub fn event_type(&self) -> &'static str {
        match self {
            Event::ListShared { .. } => "list_shared",
            Event::CollaboratorRemoved { .. } => "collaborator_removed",
            Event::CollaboratorLeft { .. } => "collaborator_left",
            Event::CollaboratorRoleChanged { .. } => "collaborator_role_changed",
            Event::InvitationAccepted { .. } => "invitation_accepted",
            Event::ListCompleted { .. } => "list_completed",
        }
    }

    /// The list this event concerns.
    pub fn list_id(&self) -> Uuid {
        match self {
            Event::ListShared { list_id, .. }
            | Event::CollaboratorRemoved { list_id, .. }
            | Event::CollaboratorLeft { list_id, .. }
            | Event::CollaboratorRoleChanged { list_id, .. }
            | Event::InvitationAccepted { list_id, .. }
            | Event::ListCompleted { list_id, .. } => *list_id,
        }
    }
}

/// Envelope carrying an event together with its emission metadata
#[derive(Debug, Clone)]
pub struct EventMessage {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub event: Event,
}

impl EventMessage {
    pub fn new(event: Event) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            event,
        }
    }
}
