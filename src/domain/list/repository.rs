//! List repository interface

use std::collections::HashMap;

use async_trait::async_trait;
use uuid::Uuid;

use super::dto_query::ListQueryDto;
use super::model::{ListSummary, ShoppingList};
use crate::domain::item::ListItem;
use crate::shared::errors::RepositoryError;
use crate::shared::types::PaginatedResult;

#[async_trait]
pub trait ListRepository: Send + Sync {
    /// Insert a list, failing with `CeilingExceeded` when the owner already
    /// holds `max_per_owner` lists. The count check and the insert must be
    /// atomic with respect to concurrent inserts for the same owner.
    async fn insert(&self, list: ShoppingList, max_per_owner: u32) -> Result<(), RepositoryError>;

    /// Insert a list together with its items in one atomic step, under the
    /// same per-owner ceiling as [`insert`](Self::insert). No reader may
    /// observe the list without its items.
    async fn insert_with_items(
        &self,
        list: ShoppingList,
        items: Vec<ListItem>,
        max_per_owner: u32,
    ) -> Result<(), RepositoryError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ShoppingList>, RepositoryError>;

    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<ShoppingList>, RepositoryError>;

    /// Lists the user owns or collaborates on, filtered and paginated.
    async fn find_by_user(
        &self,
        user_id: Uuid,
        query: &ListQueryDto,
        page: u32,
        limit: u32,
    ) -> Result<PaginatedResult<ShoppingList>, RepositoryError>;

    /// Replace a stored list. Returns `false` when the list no longer exists.
    async fn update(&self, list: ShoppingList) -> Result<bool, RepositoryError>;

    /// Delete a list and everything hanging off it (items, collaborators,
    /// invitations). Returns `false` when the list no longer exists.
    async fn delete(&self, id: Uuid) -> Result<bool, RepositoryError>;

    async fn is_owner(&self, list_id: Uuid, user_id: Uuid) -> Result<bool, RepositoryError>;

    /// Batched per-list aggregates. One call covers a whole page of lists so
    /// overview screens never fan out into per-list queries.
    async fn summaries(
        &self,
        ids: &[Uuid],
    ) -> Result<HashMap<Uuid, ListSummary>, RepositoryError>;
}
