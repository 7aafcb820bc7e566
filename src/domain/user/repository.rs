//! User repository interface

use async_trait::async_trait;
use uuid::Uuid;

use super::model::User;
use crate::shared::errors::RepositoryError;

/// Read-only access to externally managed accounts.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepositoryError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;
}
