//! Category repository interface

use async_trait::async_trait;
use uuid::Uuid;

use super::model::Category;
use crate::shared::errors::RepositoryError;

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Category>, RepositoryError>;
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Category>, RepositoryError>;
    async fn find_all(&self) -> Result<Vec<Category>, RepositoryError>;
}
