//! Access model shared by the services
//!
//! A user relates to a list either as its owner or as a collaborator with a
//! granted role. Owners hold every permission unconditionally; collaborators
//! are bounded by their role.

use std::fmt;

/// Role granted to a collaborator on a list.
///
/// Declaration order is the capability hierarchy (`Viewer < Editor < Admin`),
/// so a stronger role grants everything a weaker one does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CollaboratorRole {
    /// Read-only access
    Viewer,
    /// May add, edit, check and remove items
    Editor,
    /// Editor rights; reserved for future collaborator management
    Admin,
}

impl CollaboratorRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Viewer => "viewer",
            Self::Editor => "editor",
            Self::Admin => "admin",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "viewer" => Some(Self::Viewer),
            "editor" => Some(Self::Editor),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }

    /// Whether this role grants the given permission level.
    pub fn grants(&self, permission: Permission) -> bool {
        *self >= permission.minimum_role()
    }
}

impl Default for CollaboratorRole {
    /// Lists are shared with edit rights unless the owner says otherwise.
    fn default() -> Self {
        Self::Editor
    }
}

impl fmt::Display for CollaboratorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Permission level an operation is gated on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    View,
    Edit,
    Admin,
}

impl Permission {
    /// The weakest collaborator role that grants this permission.
    pub fn minimum_role(&self) -> CollaboratorRole {
        match self {
            Self::View => CollaboratorRole::Viewer,
            Self::Edit => CollaboratorRole::Editor,
            Self::Admin => CollaboratorRole::Admin,
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::View => "view",
            Self::Edit => "edit",
            Self::Admin => "admin",
        };
        f.write_str(s)
    }
}

/// How a user relates to a list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// The user owns the list
    Owner,
    /// The user was granted a role by the owner
    Collaborator(CollaboratorRole),
}

impl Access {
    /// Whether this access level allows the given permission.
    /// Ownership allows everything regardless of collaborator roles.
    pub fn allows(&self, permission: Permission) -> bool {
        match self {
            Self::Owner => true,
            Self::Collaborator(role) => role.grants(permission),
        }
    }

    pub fn is_owner(&self) -> bool {
        matches!(self, Self::Owner)
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_are_ordered_by_capability() {
        assert!(CollaboratorRole::Viewer < CollaboratorRole::Editor);
        assert!(CollaboratorRole::Editor < CollaboratorRole::Admin);
    }

    #[test]
    fn stronger_roles_grant_weaker_permissions() {
        // Every role grants at least what the weaker roles grant.
        let roles = [
            CollaboratorRole::Viewer,
            CollaboratorRole::Editor,
            CollaboratorRole::Admin,
        ];
        let permissions = [Permission::View, Permission::Edit, Permission::Admin];

        for window in roles.windows(2) {
            let (weaker, stronger) = (window[0], window[1]);
            for p in permissions {
                if weaker.grants(p) {
                    assert!(stronger.grants(p), "{stronger} must grant {p}");
                }
            }
        }
    }

    #[test]
    fn viewer_cannot_edit() {
        assert!(CollaboratorRole::Viewer.grants(Permission::View));
        assert!(!CollaboratorRole::Viewer.grants(Permission::Edit));
        assert!(!CollaboratorRole::Viewer.grants(Permission::Admin));
    }

    #[test]
    fn editor_cannot_admin() {
        assert!(CollaboratorRole::Editor.grants(Permission::View));
        assert!(CollaboratorRole::Editor.grants(Permission::Edit));
        assert!(!CollaboratorRole::Editor.grants(Permission::Admin));
    }

    #[test]
    fn owner_allows_everything() {
        for p in [Permission::View, Permission::Edit, Permission::Admin] {
            assert!(Access::Owner.allows(p));
        }
    }

    #[test]
    fn collaborator_access_follows_role() {
        let viewer = Access::Collaborator(CollaboratorRole::Viewer);
        assert!(viewer.allows(Permission::View));
        assert!(!viewer.allows(Permission::Edit));
        assert!(!viewer.is_owner());
    }

    #[test]
    fn default_share_role_is_editor() {
        assert_eq!(CollaboratorRole::default(), CollaboratorRole::Editor);
    }

    #[test]
    fn role_roundtrip() {
        for role in [
            CollaboratorRole::Viewer,
            CollaboratorRole::Editor,
            CollaboratorRole::Admin,
        ] {
            assert_eq!(CollaboratorRole::from_str(role.as_str()), Some(role));
        }
        assert!(CollaboratorRole::from_str("superuser").is_none());
    }
}
