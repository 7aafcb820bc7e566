//! Invitation domain entity

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::access::CollaboratorRole;

/// Pending invitation to join a list through an opaque link code.
///
/// Only the SHA-256 digest of the code is stored; the code itself appears
/// once in the generated link. Links stay valid until they expire or the
/// owner revokes them, and may be accepted by more than one user.
#[derive(Debug, Clone)]
pub struct Invitation {
    /// Unique invitation ID
    pub id: Uuid,
    /// Hex SHA-256 digest of the invite code
    pub code_hash: String,
    /// The list being shared
    pub list_id: Uuid,
    /// Role granted on acceptance
    pub role: CollaboratorRole,
    /// Owner who issued the invitation
    pub invited_by: Uuid,
    /// When the link stops working
    pub expires_at: DateTime<Utc>,
    /// When the invitation was issued
    pub created_at: DateTime<Utc>,
}

impl Invitation {
    pub fn new(
        list_id: Uuid,
        role: CollaboratorRole,
        invited_by: Uuid,
        code_hash: impl Into<String>,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            code_hash: code_hash.into(),
            list_id,
            role,
            invited_by,
            expires_at,
            created_at: Utc::now(),
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn expiry_is_inclusive_of_the_deadline() {
        let now = Utc::now();
        let invitation = Invitation::new(
            Uuid::new_v4(),
            CollaboratorRole::Editor,
            Uuid::new_v4(),
            "abc123",
            now + Duration::days(7),
        );

        assert!(!invitation.is_expired(now));
        assert!(invitation.is_expired(now + Duration::days(7)));
        assert!(invitation.is_expired(now + Duration::days(8)));
    }
}
