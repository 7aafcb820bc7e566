//! Collaboration service — application-layer orchestration
//!
//! Single source of truth for "may user U do X on list L". The list and item
//! services funnel every gated operation through [`CollaborationService`], so
//! the owner/collaborator rules live in exactly one place.

use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing::info;
use uuid::Uuid;

use crate::application::events::SharedEventBus;
use crate::config::{InvitationConfig, ServiceLimits};
use crate::domain::events::Event;
use crate::domain::{
    Access, CollaboratorRole, DomainError, DomainResult, Invitation, ListCollaborator, Permission,
    RepositoryProvider, ShoppingList,
};
use crate::shared::errors::RepositoryError;

use super::invite_code::{generate_invite_code, hash_invite_code};

/// Invitation link returned to the owner. The embedded code appears nowhere
/// else; only its hash is stored.
#[derive(Debug, Clone)]
pub struct InvitationLink {
    pub invitation_id: Uuid,
    pub url: String,
    pub code: String,
    pub expires_at: chrono::DateTime<Utc>,
}

/// Collaboration service — sharing, roles, and permission checks.
pub struct CollaborationService {
    repos: Arc<dyn RepositoryProvider>,
    limits: ServiceLimits,
    invitations: InvitationConfig,
    events: SharedEventBus,
}

impl CollaborationService {
    pub fn new(
        repos: Arc<dyn RepositoryProvider>,
        limits: ServiceLimits,
        invitations: InvitationConfig,
        events: SharedEventBus,
    ) -> Self {
        Self {
            repos,
            limits,
            invitations,
            events,
        }
    }

    // ── Access resolution ───────────────────────────────────────

    /// How `user_id` relates to the list: owner, collaborator, or `None`.
    pub async fn resolve_access(
        &self,
        list_id: Uuid,
        user_id: Uuid,
    ) -> DomainResult<Option<Access>> {
        if self.repos.lists().is_owner(list_id, user_id).await? {
            return Ok(Some(Access::Owner));
        }
        let row = self
            .repos
            .collaborators()
            .find_by_list_and_user(list_id, user_id)
            .await?;
        Ok(row.map(|c| Access::Collaborator(c.role)))
    }

    /// Permission predicate gating every list and item operation.
    /// The owner passes for any permission, regardless of collaborator rows.
    pub async fn has_permission(
        &self,
        list_id: Uuid,
        user_id: Uuid,
        permission: Permission,
    ) -> DomainResult<bool> {
        self.require_list(list_id).await?;
        let access = self.resolve_access(list_id, user_id).await?;
        Ok(access.is_some_and(|a| a.allows(permission)))
    }

    /// Like [`has_permission`](Self::has_permission), but failing with
    /// `Forbidden` and returning the resolved access on success.
    pub async fn require_permission(
        &self,
        list_id: Uuid,
        user_id: Uuid,
        permission: Permission,
    ) -> DomainResult<Access> {
        self.require_list(list_id).await?;
        match self.resolve_access(list_id, user_id).await? {
            Some(access) if access.allows(permission) => Ok(access),
            _ => Err(DomainError::Forbidden(format!(
                "User does not have {permission} access to this list"
            ))),
        }
    }

    // ── Sharing ─────────────────────────────────────────────────

    /// Share a list with the account behind `target_email`. Owner only.
    pub async fn share(
        &self,
        list_id: Uuid,
        owner_id: Uuid,
        target_email: &str,
        role: CollaboratorRole,
    ) -> DomainResult<ListCollaborator> {
        let list = self.require_list(list_id).await?;
        if list.owner_id != owner_id {
            return Err(DomainError::Forbidden("Only the list owner can share it".into()));
        }

        let email = target_email.trim();
        let target = self
            .repos
            .users()
            .find_by_email(email)
            .await?
            .ok_or_else(|| DomainError::Validation(format!("No account found for {email}")))?;

        if target.id == list.owner_id {
            return Err(DomainError::Validation("Cannot share a list with its owner".into()));
        }
        if self
            .repos
            .collaborators()
            .find_by_list_and_user(list_id, target.id)
            .await?
            .is_some()
        {
            return Err(DomainError::Validation(format!(
                "{email} is already a collaborator on this list"
            )));
        }

        let row = self
            .insert_collaborator(ListCollaborator::new(list_id, target.id, role))
            .await?;

        info!(list_id = %list_id, user_id = %target.id, role = %role, "List shared");
        metrics::counter!("shoplist_collaborators_added_total", "via" => "share").increment(1);
        self.events.publish(Event::ListShared {
            list_id,
            user_id: target.id,
            role,
        });
        Ok(row)
    }

    /// Remove a collaborator. Owner only.
    pub async fn remove_collaborator(
        &self,
        list_id: Uuid,
        owner_id: Uuid,
        member_id: Uuid,
    ) -> DomainResult<()> {
        let list = self.require_list(list_id).await?;
        if list.owner_id != owner_id {
            return Err(DomainError::Forbidden(
                "Only the list owner can manage collaborators".into(),
            ));
        }

        if !self.repos.collaborators().delete(list_id, member_id).await? {
            return Err(collaborator_not_found(member_id));
        }

        info!(list_id = %list_id, user_id = %member_id, "Collaborator removed");
        self.events.publish(Event::CollaboratorRemoved {
            list_id,
            user_id: member_id,
        });
        Ok(())
    }

    /// Change a collaborator's role. Owner only.
    pub async fn update_role(
        &self,
        list_id: Uuid,
        owner_id: Uuid,
        member_id: Uuid,
        role: CollaboratorRole,
    ) -> DomainResult<ListCollaborator> {
        let list = self.require_list(list_id).await?;
        if list.owner_id != owner_id {
            return Err(DomainError::Forbidden(
                "Only the list owner can manage collaborators".into(),
            ));
        }

        let mut row = self
            .repos
            .collaborators()
            .find_by_list_and_user(list_id, member_id)
            .await?
            .ok_or_else(|| collaborator_not_found(member_id))?;

        row.role = role;
        if !self.repos.collaborators().update(row.clone()).await? {
            return Err(collaborator_not_found(member_id));
        }

        info!(list_id = %list_id, user_id = %member_id, role = %role, "Collaborator role changed");
        self.events.publish(Event::CollaboratorRoleChanged {
            list_id,
            user_id: member_id,
            role,
        });
        Ok(row)
    }

    /// A collaborator removes themselves. Owners cannot leave their own list.
    pub async fn leave_list(&self, list_id: Uuid, user_id: Uuid) -> DomainResult<()> {
        let list = self.require_list(list_id).await?;
        if list.owner_id == user_id {
            return Err(DomainError::Validation(
                "The owner cannot leave their own list".into(),
            ));
        }

        if !self.repos.collaborators().delete(list_id, user_id).await? {
            return Err(collaborator_not_found(user_id));
        }

        info!(list_id = %list_id, user_id = %user_id, "Collaborator left list");
        self.events.publish(Event::CollaboratorLeft { list_id, user_id });
        Ok(())
    }

    // ── Invitations ─────────────────────────────────────────────

    /// Issue an invitation link for a list. Owner only.
    pub async fn generate_invitation_link(
        &self,
        list_id: Uuid,
        owner_id: Uuid,
        role: CollaboratorRole,
    ) -> DomainResult<InvitationLink> {
        let list = self.require_list(list_id).await?;
        if list.owner_id != owner_id {
            return Err(DomainError::Forbidden(
                "Only the list owner can manage invitations".into(),
            ));
        }

        let code = generate_invite_code();
        let expires_at = Utc::now() + Duration::days(self.invitations.ttl_days);
        let invitation = Invitation::new(
            list_id,
            role,
            owner_id,
            hash_invite_code(&code),
            expires_at,
        );
        let invitation_id = invitation.id;
        self.repos.invitations().insert(invitation).await?;

        let url = format!(
            "{}/invite/{}",
            self.invitations.base_url.trim_end_matches('/'),
            code
        );

        info!(list_id = %list_id, invitation_id = %invitation_id, role = %role, "Invitation link issued");
        Ok(InvitationLink {
            invitation_id,
            url,
            code,
            expires_at,
        })
    }

    /// Look up an invitation by its code. Expired or unknown codes resolve to
    /// `None`; the caller decides how to present that.
    pub async fn validate_invitation(&self, code: &str) -> DomainResult<Option<Invitation>> {
        let row = self
            .repos
            .invitations()
            .find_by_code_hash(&hash_invite_code(code))
            .await?;
        Ok(row.filter(|inv| !inv.is_expired(Utc::now())))
    }

    /// Join a list through an invitation link. Links are reusable until they
    /// expire or get revoked, so several people can join off one link.
    pub async fn accept_invitation(
        &self,
        code: &str,
        user_id: Uuid,
    ) -> DomainResult<ListCollaborator> {
        let invitation = self
            .validate_invitation(code)
            .await?
            .ok_or_else(|| {
                DomainError::Validation("Invitation link is invalid or has expired".into())
            })?;

        let list = self.require_list(invitation.list_id).await?;
        if list.owner_id == user_id {
            return Err(DomainError::Validation(
                "Cannot accept an invitation to your own list".into(),
            ));
        }
        if self
            .repos
            .collaborators()
            .find_by_list_and_user(list.id, user_id)
            .await?
            .is_some()
        {
            return Err(DomainError::Validation(
                "You are already a collaborator on this list".into(),
            ));
        }

        let row = self
            .insert_collaborator(ListCollaborator::new(list.id, user_id, invitation.role))
            .await?;

        info!(list_id = %list.id, user_id = %user_id, "Invitation accepted");
        metrics::counter!("shoplist_collaborators_added_total", "via" => "invitation")
            .increment(1);
        self.events.publish(Event::InvitationAccepted {
            list_id: list.id,
            user_id,
        });
        Ok(row)
    }

    /// Withdraw an invitation link. Owner only.
    pub async fn revoke_invitation(
        &self,
        invitation_id: Uuid,
        owner_id: Uuid,
    ) -> DomainResult<()> {
        let invitation = self
            .repos
            .invitations()
            .find_by_id(invitation_id)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "Invitation",
                field: "id",
                value: invitation_id.to_string(),
            })?;

        let list = self.require_list(invitation.list_id).await?;
        if list.owner_id != owner_id {
            return Err(DomainError::Forbidden(
                "Only the list owner can manage invitations".into(),
            ));
        }

        self.repos.invitations().delete(invitation_id).await?;
        info!(list_id = %list.id, invitation_id = %invitation_id, "Invitation revoked");
        Ok(())
    }

    // ── Queries ─────────────────────────────────────────────────

    /// Everyone the list is shared with. Requires view access.
    pub async fn get_collaborators(
        &self,
        list_id: Uuid,
        user_id: Uuid,
    ) -> DomainResult<Vec<ListCollaborator>> {
        self.require_permission(list_id, user_id, Permission::View)
            .await?;
        Ok(self.repos.collaborators().find_by_list(list_id).await?)
    }

    /// Lists shared with the user (owned lists are not included), most
    /// recently touched first.
    pub async fn get_shared_lists(&self, user_id: Uuid) -> DomainResult<Vec<ShoppingList>> {
        let ids = self
            .repos
            .collaborators()
            .find_list_ids_for_user(user_id)
            .await?;
        let mut lists = self.repos.lists().find_by_ids(&ids).await?;
        lists.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(lists)
    }

    // ── Helpers ─────────────────────────────────────────────────

    async fn require_list(&self, list_id: Uuid) -> DomainResult<ShoppingList> {
        self.repos
            .lists()
            .find_by_id(list_id)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "List",
                field: "id",
                value: list_id.to_string(),
            })
    }

    /// Guarded insert; translates ceiling and uniqueness outcomes into the
    /// canonical validation messages.
    async fn insert_collaborator(
        &self,
        row: ListCollaborator,
    ) -> DomainResult<ListCollaborator> {
        match self
            .repos
            .collaborators()
            .insert(row.clone(), self.limits.max_collaborators_per_list)
            .await
        {
            Ok(()) => Ok(row),
            Err(RepositoryError::CeilingExceeded { limit, .. }) => Err(DomainError::Validation(
                format!("Maximum collaborators reached ({limit})"),
            )),
            Err(RepositoryError::UniqueViolation(_)) => Err(DomainError::Validation(
                "You are already a collaborator on this list".into(),
            )),
            Err(err) => Err(err.into()),
        }
    }
}

fn collaborator_not_found(user_id: Uuid) -> DomainError {
    DomainError::NotFound {
        entity: "Collaborator",
        field: "user_id",
        value: user_id.to_string(),
    }
}

// ── Tests ───────────────────────────────────────────────────────
