//! Item repository interface

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::model::ListItem;
use crate::shared::errors::RepositoryError;

#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Insert an item, failing with `CeilingExceeded` when the list already
    /// holds `max_per_list` items. Assigns the next `sort_order` under the
    /// same lock as the count check and returns the stored row.
    async fn insert(&self, item: ListItem, max_per_list: u32)
        -> Result<ListItem, RepositoryError>;

    /// Insert a batch for one list, all or nothing, under the same ceiling.
    /// Every item must carry the same `list_id`.
    async fn insert_many(
        &self,
        items: Vec<ListItem>,
        max_per_list: u32,
    ) -> Result<Vec<ListItem>, RepositoryError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ListItem>, RepositoryError>;

    /// All items of a list, ordered by `sort_order`.
    async fn find_by_list(&self, list_id: Uuid) -> Result<Vec<ListItem>, RepositoryError>;

    /// Replace a stored item. Returns `false` when the item no longer exists.
    async fn update(&self, item: ListItem) -> Result<bool, RepositoryError>;

    /// Returns `false` when the item no longer exists.
    async fn delete(&self, id: Uuid) -> Result<bool, RepositoryError>;

    /// Check off every unchecked item of a list in one batch, stamping all of
    /// them with the same `checked_at`. Returns how many items flipped.
    async fn check_all(&self, list_id: Uuid, at: DateTime<Utc>) -> Result<u32, RepositoryError>;

    /// Rewrite the sort positions of a list's items.
    async fn set_positions(
        &self,
        list_id: Uuid,
        positions: &[(Uuid, i32)],
    ) -> Result<(), RepositoryError>;

    /// Move an item to another list: checked state resets and the item goes
    /// to the end of the destination, under the destination's item ceiling.
    /// Returns `None` when the item no longer exists.
    async fn move_to_list(
        &self,
        item_id: Uuid,
        target_list_id: Uuid,
        max_per_list: u32,
    ) -> Result<Option<ListItem>, RepositoryError>;
}
