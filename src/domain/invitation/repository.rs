//! Invitation repository interface

use async_trait::async_trait;
use uuid::Uuid;

use super::model::Invitation;
use crate::shared::errors::RepositoryError;

#[async_trait]
pub trait InvitationRepository: Send + Sync {
    async fn insert(&self, invitation: Invitation) -> Result<(), RepositoryError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Invitation>, RepositoryError>;
    async fn find_by_code_hash(&self, code_hash: &str)
        -> Result<Option<Invitation>, RepositoryError>;
    /// Returns `false` when the invitation no longer exists.
    async fn delete(&self, id: Uuid) -> Result<bool, RepositoryError>;
}
