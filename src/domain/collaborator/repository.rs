//! Collaborator repository interface

use async_trait::async_trait;
use uuid::Uuid;

use super::model::ListCollaborator;
use crate::shared::errors::RepositoryError;

#[async_trait]
pub trait CollaboratorRepository: Send + Sync {
    /// Insert a membership record, failing with `CeilingExceeded` when the
    /// list already has `max_per_list` collaborators and `UniqueViolation`
    /// when the user already holds one. Both checks and the insert are atomic
    /// with respect to concurrent inserts for the same list.
    async fn insert(
        &self,
        collaborator: ListCollaborator,
        max_per_list: u32,
    ) -> Result<(), RepositoryError>;

    async fn find_by_list(&self, list_id: Uuid)
        -> Result<Vec<ListCollaborator>, RepositoryError>;

    async fn find_by_list_and_user(
        &self,
        list_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<ListCollaborator>, RepositoryError>;

    /// List IDs the user collaborates on (not owns).
    async fn find_list_ids_for_user(&self, user_id: Uuid) -> Result<Vec<Uuid>, RepositoryError>;

    /// Replace a membership record. Returns `false` when it no longer exists.
    async fn update(&self, collaborator: ListCollaborator) -> Result<bool, RepositoryError>;

    /// Remove a membership record. Returns `false` when none existed.
    async fn delete(&self, list_id: Uuid, user_id: Uuid) -> Result<bool, RepositoryError>;
}
