//! Item management service — application-layer orchestration
//!
//! Everything that happens on a list's items: adding (typed, bulk, or spoken),
//! editing, checking off, reordering, moving between lists, and the derived
//! aggregates. Permission checks are delegated to the [`CollaborationService`].

use std::collections::HashSet;
use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{debug, info};
use uuid::Uuid;

use crate::application::categorizer::classify;
use crate::application::collaboration::CollaborationService;
use crate::config::ServiceLimits;
use crate::domain::{
    CreateItemDto, DomainError, DomainResult, ListItem, ListSummary, Permission,
    RepositoryProvider, UpdateItemDto,
};
use crate::shared::errors::RepositoryError;
use crate::shared::{validate_name, validate_non_negative};

use super::transcription::parse_transcription;

/// Longest accepted item name, in characters.
const MAX_NAME_LEN: usize = 200;

/// Outcome of an item creation. `auto_categorized` is set when the classifier
/// picked the category rather than the caller.
#[derive(Debug, Clone)]
pub struct CreatedItem {
    pub item: ListItem,
    pub auto_categorized: bool,
}

/// Item service — item CRUD, check-offs, ordering, and aggregates.
pub struct ItemService {
    repos: Arc<dyn RepositoryProvider>,
    collaboration: Arc<CollaborationService>,
    limits: ServiceLimits,
}

impl ItemService {
    pub fn new(
        repos: Arc<dyn RepositoryProvider>,
        collaboration: Arc<CollaborationService>,
        limits: ServiceLimits,
    ) -> Self {
        Self {
            repos,
            collaboration,
            limits,
        }
    }

    // ── Creation ────────────────────────────────────────────────

    /// Add an item to a list. Requires any access: every collaborator,
    /// whatever their role, may add items.
    pub async fn create(
        &self,
        list_id: Uuid,
        user_id: Uuid,
        dto: CreateItemDto,
    ) -> DomainResult<CreatedItem> {
        self.create_inner(list_id, user_id, dto, "manual").await
    }

    /// Add a batch of items in one atomic step: either every item lands on
    /// the list or none does.
    pub async fn create_many(
        &self,
        list_id: Uuid,
        user_id: Uuid,
        dtos: Vec<CreateItemDto>,
    ) -> DomainResult<Vec<CreatedItem>> {
        self.collaboration
            .require_permission(list_id, user_id, Permission::View)
            .await?;
        if dtos.is_empty() {
            return Ok(Vec::new());
        }

        let mut items = Vec::with_capacity(dtos.len());
        let mut auto_flags = Vec::with_capacity(dtos.len());
        for dto in dtos {
            let (item, auto_categorized) = self.build_item(list_id, user_id, dto).await?;
            items.push(item);
            auto_flags.push(auto_categorized);
        }

        let stored = match self
            .repos
            .items()
            .insert_many(items, self.limits.max_items_per_list)
            .await
        {
            Ok(stored) => stored,
            Err(RepositoryError::CeilingExceeded { limit, .. }) => {
                return Err(DomainError::Validation(format!(
                    "Maximum items reached ({limit})"
                )))
            }
            Err(err) => return Err(err.into()),
        };

        let count = stored.len();
        info!(list_id = %list_id, items = count, "Items created in bulk");
        metrics::counter!("shoplist_items_created_total", "source" => "bulk")
            .increment(count as u64);

        Ok(stored
            .into_iter()
            .zip(auto_flags)
            .map(|(item, auto_categorized)| CreatedItem {
                item,
                auto_categorized,
            })
            .collect())
    }

    /// Add an item from a voice transcription phrase such as "2 gallons of
    /// milk". Unparseable phrases become a single item with quantity 1.
    pub async fn create_from_transcription(
        &self,
        list_id: Uuid,
        user_id: Uuid,
        text: &str,
    ) -> DomainResult<CreatedItem> {
        let parsed = parse_transcription(text);
        let mut dto = CreateItemDto::new(parsed.name);
        dto.quantity = Some(parsed.quantity);
        dto.unit = parsed.unit;
        self.create_inner(list_id, user_id, dto, "voice").await
    }

    // ── Commands (mutations) ────────────────────────────────────

    /// Update item fields. Requires edit access to the item's list.
    pub async fn update(
        &self,
        item_id: Uuid,
        user_id: Uuid,
        dto: UpdateItemDto,
    ) -> DomainResult<ListItem> {
        let mut item = self.edit_gated_item(item_id, user_id).await?;

        if let Some(ref name) = dto.name {
            item.name = validate_name(name, MAX_NAME_LEN, "Item name")?;
        }
        if let Some(quantity) = dto.quantity {
            validate_non_negative(quantity, "Quantity")?;
            item.quantity = quantity;
        }
        if let Some(unit) = dto.unit {
            item.unit = Some(unit);
        }
        if let Some(notes) = dto.notes {
            item.notes = Some(notes);
        }
        if let Some(price) = dto.estimated_price {
            validate_non_negative(price, "Estimated price")?;
            item.estimated_price = Some(price);
        }
        if let Some(priority) = dto.priority {
            item.priority = priority;
        }
        if let Some(category_id) = dto.category_id {
            self.require_category(category_id).await?;
            item.category_id = Some(category_id);
        }

        item.touch();
        self.store_update(item).await
    }

    /// Flip an item's checked state.
    pub async fn toggle_check(&self, item_id: Uuid, user_id: Uuid) -> DomainResult<ListItem> {
        let mut item = self.edit_gated_item(item_id, user_id).await?;
        item.set_checked(!item.is_checked);
        self.store_update(item).await
    }

    /// Check an item off, optionally recording what it actually cost.
    /// A supplied actual price replaces the estimate.
    pub async fn check(
        &self,
        item_id: Uuid,
        user_id: Uuid,
        actual_price: Option<Decimal>,
    ) -> DomainResult<ListItem> {
        let mut item = self.edit_gated_item(item_id, user_id).await?;
        if let Some(price) = actual_price {
            validate_non_negative(price, "Actual price")?;
            item.estimated_price = Some(price);
        }
        item.set_checked(true);
        self.store_update(item).await
    }

    /// Put an item back on the open list.
    pub async fn uncheck(&self, item_id: Uuid, user_id: Uuid) -> DomainResult<ListItem> {
        let mut item = self.edit_gated_item(item_id, user_id).await?;
        item.set_checked(false);
        self.store_update(item).await
    }

    /// Remove an item. Requires edit access to the item's list.
    pub async fn delete(&self, item_id: Uuid, user_id: Uuid) -> DomainResult<()> {
        let item = self.edit_gated_item(item_id, user_id).await?;
        if !self.repos.items().delete(item_id).await? {
            return Err(item_not_found(item_id));
        }
        info!(item_id = %item_id, list_id = %item.list_id, "Item deleted");
        Ok(())
    }

    /// Check off every remaining item in one batch. Returns how many items
    /// flipped; already-checked items are left alone.
    pub async fn complete_list(&self, list_id: Uuid, user_id: Uuid) -> DomainResult<u32> {
        self.collaboration
            .require_permission(list_id, user_id, Permission::Edit)
            .await?;
        let checked = self.repos.items().check_all(list_id, Utc::now()).await?;
        info!(list_id = %list_id, items_checked = checked, "All items checked off");
        Ok(checked)
    }

    /// Reorder a list's items. `item_ids` must cover the current item set
    /// exactly once; positions are assigned 0..N-1 in the given order.
    pub async fn reorder(
        &self,
        list_id: Uuid,
        user_id: Uuid,
        item_ids: Vec<Uuid>,
    ) -> DomainResult<()> {
        self.collaboration
            .require_permission(list_id, user_id, Permission::Edit)
            .await?;

        let current = self.repos.items().find_by_list(list_id).await?;
        let mut remaining: HashSet<Uuid> = current.iter().map(|i| i.id).collect();
        let covers_exactly =
            item_ids.len() == current.len() && item_ids.iter().all(|id| remaining.remove(id));
        if !covers_exactly {
            return Err(DomainError::Validation(
                "Reorder must cover every item on the list exactly once".into(),
            ));
        }

        let positions: Vec<(Uuid, i32)> = item_ids
            .iter()
            .enumerate()
            .map(|(idx, id)| (*id, idx as i32))
            .collect();
        self.repos.items().set_positions(list_id, &positions).await?;

        info!(list_id = %list_id, items = positions.len(), "Items reordered");
        Ok(())
    }

    /// Move an item to another list. The caller needs edit access on both
    /// lists; the item lands unchecked at the end of the destination.
    pub async fn move_to_list(
        &self,
        item_id: Uuid,
        target_list_id: Uuid,
        user_id: Uuid,
    ) -> DomainResult<ListItem> {
        let item = self.require_item(item_id).await?;
        if item.list_id == target_list_id {
            return Err(DomainError::Validation("Item is already on that list".into()));
        }
        self.collaboration
            .require_permission(item.list_id, user_id, Permission::Edit)
            .await?;
        self.collaboration
            .require_permission(target_list_id, user_id, Permission::Edit)
            .await?;

        match self
            .repos
            .items()
            .move_to_list(item_id, target_list_id, self.limits.max_items_per_list)
            .await
        {
            Ok(Some(moved)) => {
                info!(item_id = %item_id, from = %item.list_id, to = %target_list_id, "Item moved");
                Ok(moved)
            }
            Ok(None) => Err(item_not_found(item_id)),
            Err(RepositoryError::CeilingExceeded { limit, .. }) => Err(DomainError::Validation(
                format!("Maximum items reached ({limit})"),
            )),
            Err(err) => Err(err.into()),
        }
    }

    // ── Queries ─────────────────────────────────────────────────

    /// A list's items in display order. Requires view access.
    pub async fn get_items(&self, list_id: Uuid, user_id: Uuid) -> DomainResult<Vec<ListItem>> {
        self.collaboration
            .require_permission(list_id, user_id, Permission::View)
            .await?;
        Ok(self.repos.items().find_by_list(list_id).await?)
    }

    /// Sum of `estimated_price * quantity` over the list's priced items.
    pub async fn get_estimated_total(
        &self,
        list_id: Uuid,
        user_id: Uuid,
    ) -> DomainResult<Decimal> {
        Ok(self.summary(list_id, user_id).await?.estimated_total)
    }

    /// How many items are still unchecked.
    pub async fn get_unchecked_count(&self, list_id: Uuid, user_id: Uuid) -> DomainResult<u32> {
        let summary = self.summary(list_id, user_id).await?;
        Ok(summary.item_count - summary.checked_item_count)
    }

    // ── Helpers ─────────────────────────────────────────────────

    async fn create_inner(
        &self,
        list_id: Uuid,
        user_id: Uuid,
        dto: CreateItemDto,
        source: &'static str,
    ) -> DomainResult<CreatedItem> {
        self.collaboration
            .require_permission(list_id, user_id, Permission::View)
            .await?;
        let (item, auto_categorized) = self.build_item(list_id, user_id, dto).await?;

        let item = match self
            .repos
            .items()
            .insert(item, self.limits.max_items_per_list)
            .await
        {
            Ok(item) => item,
            Err(RepositoryError::CeilingExceeded { limit, .. }) => {
                return Err(DomainError::Validation(format!(
                    "Maximum items reached ({limit})"
                )))
            }
            Err(err) => return Err(err.into()),
        };

        info!(item_id = %item.id, list_id = %list_id, auto_categorized, "Item created");
        metrics::counter!("shoplist_items_created_total", "source" => source).increment(1);
        Ok(CreatedItem {
            item,
            auto_categorized,
        })
    }

    /// Validate a creation DTO and assemble the item, resolving its category.
    async fn build_item(
        &self,
        list_id: Uuid,
        user_id: Uuid,
        dto: CreateItemDto,
    ) -> DomainResult<(ListItem, bool)> {
        let name = validate_name(&dto.name, MAX_NAME_LEN, "Item name")?;
        let quantity = dto.quantity.unwrap_or(Decimal::ONE);
        validate_non_negative(quantity, "Quantity")?;
        if let Some(price) = dto.estimated_price {
            validate_non_negative(price, "Estimated price")?;
        }

        let (category_id, auto_categorized) =
            self.resolve_category(dto.category_id, &name).await?;

        let mut item = ListItem::new(list_id, user_id, name);
        item.quantity = quantity;
        item.unit = dto.unit;
        item.notes = dto.notes;
        item.estimated_price = dto.estimated_price;
        item.priority = dto.priority.unwrap_or_default();
        item.category_id = category_id;
        Ok((item, auto_categorized))
    }

    /// Explicit category wins; otherwise the classifier takes a guess. A slug
    /// the store does not carry leaves the item uncategorized.
    async fn resolve_category(
        &self,
        explicit: Option<Uuid>,
        name: &str,
    ) -> DomainResult<(Option<Uuid>, bool)> {
        if let Some(id) = explicit {
            self.require_category(id).await?;
            return Ok((Some(id), false));
        }
        if let Some(slug) = classify(name) {
            if let Some(category) = self.repos.categories().find_by_slug(slug).await? {
                debug!(slug, "Item auto-categorized");
                return Ok((Some(category.id), true));
            }
        }
        Ok((None, false))
    }

    async fn require_category(&self, category_id: Uuid) -> DomainResult<()> {
        if self
            .repos
            .categories()
            .find_by_id(category_id)
            .await?
            .is_none()
        {
            return Err(DomainError::Validation("Unknown category".into()));
        }
        Ok(())
    }

    async fn require_item(&self, item_id: Uuid) -> DomainResult<ListItem> {
        self.repos
            .items()
            .find_by_id(item_id)
            .await?
            .ok_or(item_not_found(item_id))
    }

    /// Fetch an item and require edit access on the list it belongs to.
    async fn edit_gated_item(&self, item_id: Uuid, user_id: Uuid) -> DomainResult<ListItem> {
        let item = self.require_item(item_id).await?;
        self.collaboration
            .require_permission(item.list_id, user_id, Permission::Edit)
            .await?;
        Ok(item)
    }

    async fn store_update(&self, item: ListItem) -> DomainResult<ListItem> {
        let item_id = item.id;
        if !self.repos.items().update(item.clone()).await? {
            return Err(item_not_found(item_id));
        }
        Ok(item)
    }

    async fn summary(&self, list_id: Uuid, user_id: Uuid) -> DomainResult<ListSummary> {
        self.collaboration
            .require_permission(list_id, user_id, Permission::View)
            .await?;
        let mut summaries = self.repos.lists().summaries(&[list_id]).await?;
        Ok(summaries.remove(&list_id).unwrap_or_default())
    }
}

fn item_not_found(item_id: Uuid) -> DomainError {
    DomainError::NotFound {
        entity: "Item",
        field: "id",
        value: item_id.to_string(),
    }
}

// ── Tests ───────────────────────────────────────────────────────
