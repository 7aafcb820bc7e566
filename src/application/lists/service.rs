//! List management service — application-layer orchestration
//!
//! Owns the list lifecycle: creation, metadata updates, status transitions,
//! duplication, and the overview queries. Permission checks are delegated to
//! the [`CollaborationService`].

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::application::collaboration::CollaborationService;
use crate::application::events::SharedEventBus;
use crate::config::ServiceLimits;
use crate::domain::events::Event;
use crate::domain::{
    CreateListDto, DomainError, DomainResult, ListItem, ListOverview, ListQueryDto, ListStatus,
    Permission, RepositoryProvider, ShoppingList, UpdateListDto,
};
use crate::shared::errors::RepositoryError;
use crate::shared::{validate_name, validate_non_negative, validate_pagination, PaginatedResult};

/// Longest accepted list name, in characters.
const MAX_NAME_LEN: usize = 100;

/// List service — creation, lifecycle, and overview queries.
pub struct ListService {
    repos: Arc<dyn RepositoryProvider>,
    collaboration: Arc<CollaborationService>,
    limits: ServiceLimits,
    events: SharedEventBus,
}

impl ListService {
    pub fn new(
        repos: Arc<dyn RepositoryProvider>,
        collaboration: Arc<CollaborationService>,
        limits: ServiceLimits,
        events: SharedEventBus,
    ) -> Self {
        Self {
            repos,
            collaboration,
            limits,
            events,
        }
    }

    // ── Commands (mutations) ────────────────────────────────────

    /// Create a list owned by `user_id`.
    pub async fn create(&self, user_id: Uuid, dto: CreateListDto) -> DomainResult<ShoppingList> {
        let name = validate_name(&dto.name, MAX_NAME_LEN, "List name")?;
        if let Some(budget) = dto.budget {
            validate_non_negative(budget, "Budget")?;
        }

        let mut list = ShoppingList::new(user_id, name);
        list.description = dto.description;
        list.budget = dto.budget;
        list.store_id = dto.store_id;
        list.is_template = dto.is_template;

        self.insert_list(list.clone()).await?;

        info!(list_id = %list.id, owner_id = %user_id, "List created");
        metrics::counter!("shoplist_lists_created_total").increment(1);
        Ok(list)
    }

    /// Update list metadata and status. Owner only; collaborators edit items,
    /// not the list itself.
    pub async fn update(
        &self,
        list_id: Uuid,
        user_id: Uuid,
        dto: UpdateListDto,
    ) -> DomainResult<ShoppingList> {
        let mut list = self.require_list(list_id).await?;
        if list.owner_id != user_id {
            return Err(DomainError::Forbidden(
                "Only the list owner can update the list".into(),
            ));
        }

        if let Some(ref name) = dto.name {
            list.name = validate_name(name, MAX_NAME_LEN, "List name")?;
        }
        if let Some(description) = dto.description {
            list.description = Some(description);
        }
        if let Some(budget) = dto.budget {
            validate_non_negative(budget, "Budget")?;
            list.budget = Some(budget);
        }
        if let Some(store_id) = dto.store_id {
            list.store_id = Some(store_id);
        }
        if let Some(is_template) = dto.is_template {
            list.is_template = is_template;
        }
        if let Some(next) = dto.status {
            if next != list.status {
                self.check_transition(&list, next)?;
                list.set_status(next);
            }
        }

        list.touch();
        if !self.repos.lists().update(list.clone()).await? {
            return Err(list_not_found(list_id));
        }

        info!(list_id = %list.id, "List updated");
        Ok(list)
    }

    /// Delete a list and everything on it. Owner only.
    pub async fn delete(&self, list_id: Uuid, user_id: Uuid) -> DomainResult<()> {
        let list = self.require_list(list_id).await?;
        if list.owner_id != user_id {
            return Err(DomainError::Forbidden(
                "Only the list owner can delete the list".into(),
            ));
        }

        if !self.repos.lists().delete(list_id).await? {
            return Err(list_not_found(list_id));
        }

        info!(list_id = %list_id, "List deleted");
        Ok(())
    }

    /// Copy a list (metadata and items) into a new list owned by `user_id`.
    /// The copy starts as a fresh trip: active, nothing checked.
    pub async fn duplicate(
        &self,
        list_id: Uuid,
        user_id: Uuid,
        new_name: Option<String>,
    ) -> DomainResult<ShoppingList> {
        self.collaboration
            .require_permission(list_id, user_id, Permission::View)
            .await?;
        let source = self.require_list(list_id).await?;

        let name = new_name.unwrap_or_else(|| copy_name(&source.name));
        let name = validate_name(&name, MAX_NAME_LEN, "List name")?;

        let source_items = self.repos.items().find_by_list(list_id).await?;

        let mut copy = ShoppingList::new(user_id, name);
        copy.description = source.description.clone();
        copy.budget = source.budget;
        copy.store_id = source.store_id;

        let items: Vec<ListItem> = source_items
            .iter()
            .enumerate()
            .map(|(idx, source_item)| {
                let mut item = ListItem::new(copy.id, user_id, source_item.name.clone());
                item.quantity = source_item.quantity;
                item.unit = source_item.unit.clone();
                item.notes = source_item.notes.clone();
                item.estimated_price = source_item.estimated_price;
                item.priority = source_item.priority;
                item.category_id = source_item.category_id;
                item.sort_order = idx as i32;
                item
            })
            .collect();
        let item_count = items.len();

        match self
            .repos
            .lists()
            .insert_with_items(copy.clone(), items, self.limits.max_lists_per_user)
            .await
        {
            Ok(()) => {}
            Err(RepositoryError::CeilingExceeded { limit, .. }) => {
                return Err(DomainError::Validation(format!(
                    "Maximum lists reached ({limit})"
                )))
            }
            Err(err) => return Err(err.into()),
        }

        info!(source_id = %list_id, list_id = %copy.id, items = item_count, "List duplicated");
        metrics::counter!("shoplist_lists_created_total").increment(1);
        Ok(copy)
    }

    /// Instantiate a template into a regular list. Convenience wrapper over
    /// [`duplicate`](Self::duplicate) that keeps the template's name.
    pub async fn create_from_template(
        &self,
        template_id: Uuid,
        user_id: Uuid,
        name: Option<String>,
    ) -> DomainResult<ShoppingList> {
        self.collaboration
            .require_permission(template_id, user_id, Permission::View)
            .await?;
        let source = self.require_list(template_id).await?;
        if !source.is_template {
            return Err(DomainError::Validation("List is not a template".into()));
        }

        let name = name.unwrap_or(source.name);
        self.duplicate(template_id, user_id, Some(name)).await
    }

    /// Mark a list completed. Owner only.
    pub async fn complete(&self, list_id: Uuid, user_id: Uuid) -> DomainResult<ShoppingList> {
        let mut list = self.require_list(list_id).await?;
        if list.owner_id != user_id {
            return Err(DomainError::Forbidden(
                "Only the list owner can complete the list".into(),
            ));
        }
        if list.status == ListStatus::Completed {
            return Err(DomainError::Validation("List is already completed".into()));
        }
        self.check_transition(&list, ListStatus::Completed)?;

        list.set_status(ListStatus::Completed);
        if !self.repos.lists().update(list.clone()).await? {
            return Err(list_not_found(list_id));
        }

        info!(list_id = %list.id, "List completed");
        self.events.publish(Event::ListCompleted {
            list_id,
            completed_by: user_id,
        });
        Ok(list)
    }

    /// Archive a list. Owner only.
    pub async fn archive(&self, list_id: Uuid, user_id: Uuid) -> DomainResult<ShoppingList> {
        let mut list = self.require_list(list_id).await?;
        if list.owner_id != user_id {
            return Err(DomainError::Forbidden(
                "Only the list owner can archive the list".into(),
            ));
        }
        if list.status == ListStatus::Archived {
            return Err(DomainError::Validation("List is already archived".into()));
        }
        self.check_transition(&list, ListStatus::Archived)?;

        list.set_status(ListStatus::Archived);
        if !self.repos.lists().update(list.clone()).await? {
            return Err(list_not_found(list_id));
        }

        info!(list_id = %list.id, "List archived");
        Ok(list)
    }

    // ── Queries ─────────────────────────────────────────────────

    /// Fetch a list the user can at least view.
    pub async fn get_by_id(&self, list_id: Uuid, user_id: Uuid) -> DomainResult<ShoppingList> {
        self.collaboration
            .require_permission(list_id, user_id, Permission::View)
            .await?;
        self.require_list(list_id).await
    }

    /// Fetch a list together with its derived summary.
    pub async fn get_by_id_with_details(
        &self,
        list_id: Uuid,
        user_id: Uuid,
    ) -> DomainResult<ListOverview> {
        let list = self.get_by_id(list_id, user_id).await?;
        let mut summaries = self.repos.lists().summaries(&[list_id]).await?;
        let summary = summaries.remove(&list_id).unwrap_or_default();
        Ok(ListOverview { list, summary })
    }

    /// Page through the lists the user owns or collaborates on. Summaries are
    /// fetched in one batch for the whole page.
    pub async fn get_by_user(
        &self,
        user_id: Uuid,
        query: ListQueryDto,
    ) -> DomainResult<PaginatedResult<ListOverview>> {
        let (page, limit) = validate_pagination(query.page, query.page_size);
        let page_result = self
            .repos
            .lists()
            .find_by_user(user_id, &query, page, limit)
            .await?;

        let ids: Vec<Uuid> = page_result.items.iter().map(|l| l.id).collect();
        let mut summaries = self.repos.lists().summaries(&ids).await?;

        Ok(page_result.map(|list| {
            let summary = summaries.remove(&list.id).unwrap_or_default();
            ListOverview { list, summary }
        }))
    }

    // ── Helpers ─────────────────────────────────────────────────

    async fn require_list(&self, list_id: Uuid) -> DomainResult<ShoppingList> {
        self.repos
            .lists()
            .find_by_id(list_id)
            .await?
            .ok_or(list_not_found(list_id))
    }

    async fn insert_list(&self, list: ShoppingList) -> DomainResult<()> {
        match self
            .repos
            .lists()
            .insert(list, self.limits.max_lists_per_user)
            .await
        {
            Ok(()) => Ok(()),
            Err(RepositoryError::CeilingExceeded { limit, .. }) => Err(DomainError::Validation(
                format!("Maximum lists reached ({limit})"),
            )),
            Err(err) => Err(err.into()),
        }
    }

    fn check_transition(&self, list: &ShoppingList, next: ListStatus) -> DomainResult<()> {
        if !list.status.can_transition_to(next) {
            return Err(DomainError::Validation(format!(
                "Cannot change status from {} to {}",
                list.status, next
            )));
        }
        Ok(())
    }
}

fn list_not_found(list_id: Uuid) -> DomainError {
    DomainError::NotFound {
        entity: "List",
        field: "id",
        value: list_id.to_string(),
    }
}

/// Default name for a duplicated list. Long source names are cut down so
/// the suffix still fits under the name ceiling.
fn copy_name(source: &str) -> String {
    const SUFFIX: &str = " (Copy)";
    let budget = MAX_NAME_LEN - SUFFIX.len();
    if source.chars().count() <= budget {
        return format!("{source}{SUFFIX}");
    }
    let base: String = source.chars().take(budget).collect();
    format!("{}{SUFFIX}", base.trim_end())
}

// ── Tests ───────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    use rust_decimal::Decimal;

    use crate::application::events::create_event_bus;
    use crate::application::items::ItemService;
    use crate::config::InvitationConfig;
    use crate::domain::{CollaboratorRole, CreateItemDto, ListSortField, User};
    use crate::test_support::{init_tracing, seed_user, store};

    struct Fixture {
        events: SharedEventBus,
        collaboration: Arc<CollaborationService>,
        lists: ListService,
        items: ItemService,
        owner: User,
        friend: User,
    }

    fn fixture() -> Fixture {
        fixture_with_limits(ServiceLimits::default())
    }

    fn fixture_with_limits(limits: ServiceLimits) -> Fixture {
        init_tracing();
        let store = store();
        let repos: Arc<dyn RepositoryProvider> = store.clone();
        let events = create_event_bus();
        let collaboration = Arc::new(CollaborationService::new(
            repos.clone(),
            limits.clone(),
            InvitationConfig::default(),
            events.clone(),
        ));
        let lists = ListService::new(
            repos.clone(),
            collaboration.clone(),
            limits.clone(),
            events.clone(),
        );
        let items = ItemService::new(repos, collaboration.clone(), limits);
        let owner = seed_user(&store, "owner@example.com", "Owner");
        let friend = seed_user(&store, "friend@example.com", "Friend");
        Fixture {
            events,
            collaboration,
            lists,
            items,
            owner,
            friend,
        }
    }

    #[tokio::test]
    async fn create_initializes_an_active_list() {
        let fx = fixture();
        let mut dto = CreateListDto::new("Groceries");
        dto.description = Some("Weekly run".into());
        dto.budget = Some(Decimal::new(15000, 2));

        let list = fx.lists.create(fx.owner.id, dto).await.unwrap();

        assert_eq!(list.name, "Groceries");
        assert_eq!(list.owner_id, fx.owner.id);
        assert_eq!(list.status, ListStatus::Active);
        assert!(!list.is_template);
        assert_eq!(list.budget, Some(Decimal::new(15000, 2)));
        assert_eq!(list.completed_at, None);
    }

    #[tokio::test]
    async fn create_validates_the_name() {
        let fx = fixture();

        let err = fx
            .lists
            .create(fx.owner.id, CreateListDto::new("   "))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("List name is required"));

        let err = fx
            .lists
            .create(fx.owner.id, CreateListDto::new("x".repeat(101)))
            .await
            .unwrap_err();
        assert!(err
            .to_string()
            .contains("List name must be 100 characters or less"));
    }

    #[tokio::test]
    async fn create_rejects_negative_budgets() {
        let fx = fixture();
        let mut dto = CreateListDto::new("Trip");
        dto.budget = Some(Decimal::new(-1, 0));

        let err = fx.lists.create(fx.owner.id, dto).await.unwrap_err();
        assert!(err.to_string().contains("Budget cannot be negative"));
    }

    #[tokio::test]
    async fn list_ceiling_names_the_limit() {
        let limits = ServiceLimits {
            max_lists_per_user: 3,
            ..ServiceLimits::default()
        };
        let fx = fixture_with_limits(limits);

        for i in 0..3 {
            fx.lists
                .create(fx.owner.id, CreateListDto::new(format!("List {i}")))
                .await
                .unwrap();
        }

        let err = fx
            .lists
            .create(fx.owner.id, CreateListDto::new("One too many"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Maximum lists reached (3)"));
    }

    #[tokio::test]
    async fn concurrent_creates_respect_the_ceiling() {
        let limits = ServiceLimits {
            max_lists_per_user: 5,
            ..ServiceLimits::default()
        };
        let fx = fixture_with_limits(limits);
        let owner_id = fx.owner.id;
        let service = Arc::new(fx.lists);

        let mut handles = Vec::new();
        for i in 0..20 {
            let service = Arc::clone(&service);
            handles.push(tokio::spawn(async move {
                service
                    .create(owner_id, CreateListDto::new(format!("List {i}")))
                    .await
            }));
        }

        let mut ok = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                ok += 1;
            }
        }
        assert_eq!(ok, 5);
    }

    #[tokio::test]
    async fn updates_are_owner_only_even_for_admins() {
        let fx = fixture();
        let list = fx
            .lists
            .create(fx.owner.id, CreateListDto::new("Groceries"))
            .await
            .unwrap();
        fx.collaboration
            .share(
                list.id,
                fx.owner.id,
                "friend@example.com",
                CollaboratorRole::Admin,
            )
            .await
            .unwrap();

        let dto = UpdateListDto {
            name: Some("Hijacked".into()),
            ..UpdateListDto::default()
        };
        let err = fx
            .lists
            .update(list.id, fx.friend.id, dto)
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Forbidden(_)));
        assert!(err
            .to_string()
            .contains("Only the list owner can update the list"));
    }

    #[tokio::test]
    async fn update_applies_only_the_given_fields() {
        let fx = fixture();
        let mut dto = CreateListDto::new("Groceries");
        dto.description = Some("Weekly run".into());
        let list = fx.lists.create(fx.owner.id, dto).await.unwrap();

        let dto = UpdateListDto {
            name: Some("Monthly stock-up".into()),
            budget: Some(Decimal::new(20000, 2)),
            ..UpdateListDto::default()
        };
        let updated = fx.lists.update(list.id, fx.owner.id, dto).await.unwrap();

        assert_eq!(updated.name, "Monthly stock-up");
        assert_eq!(updated.budget, Some(Decimal::new(20000, 2)));
        assert_eq!(updated.description.as_deref(), Some("Weekly run"));
        assert!(updated.updated_at >= list.updated_at);
    }

    #[tokio::test]
    async fn archived_lists_cannot_jump_to_completed() {
        let fx = fixture();
        let list = fx
            .lists
            .create(fx.owner.id, CreateListDto::new("Groceries"))
            .await
            .unwrap();
        fx.lists.archive(list.id, fx.owner.id).await.unwrap();

        let dto = UpdateListDto {
            status: Some(ListStatus::Completed),
            ..UpdateListDto::default()
        };
        let err = fx
            .lists
            .update(list.id, fx.owner.id, dto)
            .await
            .unwrap_err();
        assert!(err
            .to_string()
            .contains("Cannot change status from archived to completed"));
    }

    #[tokio::test]
    async fn complete_stamps_completed_at() {
        let fx = fixture();
        let list = fx
            .lists
            .create(fx.owner.id, CreateListDto::new("Groceries"))
            .await
            .unwrap();
        let mut subscriber = fx.events.subscribe();

        let completed = fx.lists.complete(list.id, fx.owner.id).await.unwrap();
        assert_eq!(completed.status, ListStatus::Completed);
        assert!(completed.completed_at.is_some());

        let msg = subscriber.recv().await.unwrap();
        assert_eq!(msg.event.event_type(), "list_completed");

        let err = fx.lists.complete(list.id, fx.owner.id).await.unwrap_err();
        assert!(err.to_string().contains("List is already completed"));
    }

    #[tokio::test]
    async fn reopening_clears_completed_at() {
        let fx = fixture();
        let list = fx
            .lists
            .create(fx.owner.id, CreateListDto::new("Groceries"))
            .await
            .unwrap();
        fx.lists.complete(list.id, fx.owner.id).await.unwrap();

        let dto = UpdateListDto {
            status: Some(ListStatus::Active),
            ..UpdateListDto::default()
        };
        let reopened = fx.lists.update(list.id, fx.owner.id, dto).await.unwrap();

        assert_eq!(reopened.status, ListStatus::Active);
        assert_eq!(reopened.completed_at, None);
    }

    #[tokio::test]
    async fn archiving_keeps_completed_at() {
        let fx = fixture();
        let list = fx
            .lists
            .create(fx.owner.id, CreateListDto::new("Groceries"))
            .await
            .unwrap();
        let completed = fx.lists.complete(list.id, fx.owner.id).await.unwrap();

        let archived = fx.lists.archive(list.id, fx.owner.id).await.unwrap();
        assert_eq!(archived.status, ListStatus::Archived);
        assert_eq!(archived.completed_at, completed.completed_at);
    }

    #[tokio::test]
    async fn delete_is_owner_only() {
        let fx = fixture();
        let list = fx
            .lists
            .create(fx.owner.id, CreateListDto::new("Groceries"))
            .await
            .unwrap();
        fx.collaboration
            .share(
                list.id,
                fx.owner.id,
                "friend@example.com",
                CollaboratorRole::Admin,
            )
            .await
            .unwrap();

        let err = fx.lists.delete(list.id, fx.friend.id).await.unwrap_err();
        assert!(err
            .to_string()
            .contains("Only the list owner can delete the list"));

        fx.lists.delete(list.id, fx.owner.id).await.unwrap();
        let err = fx.lists.get_by_id(list.id, fx.owner.id).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { entity: "List", .. }));
    }

    #[tokio::test]
    async fn duplicate_copies_items_unchecked() {
        let fx = fixture();
        let mut dto = CreateListDto::new("Groceries");
        dto.description = Some("Weekly run".into());
        dto.budget = Some(Decimal::new(5000, 2));
        let list = fx.lists.create(fx.owner.id, dto).await.unwrap();

        let mut milk = CreateItemDto::new("Milk");
        milk.quantity = Some(Decimal::from(2));
        milk.estimated_price = Some(Decimal::new(350, 2));
        let milk = fx
            .items
            .create(list.id, fx.owner.id, milk)
            .await
            .unwrap()
            .item;
        fx.items
            .create(list.id, fx.owner.id, CreateItemDto::new("Bread"))
            .await
            .unwrap();
        fx.items.check(milk.id, fx.owner.id, None).await.unwrap();

        fx.collaboration
            .share(
                list.id,
                fx.owner.id,
                "friend@example.com",
                CollaboratorRole::Viewer,
            )
            .await
            .unwrap();

        // A viewer may duplicate; the copy belongs to them.
        let copy = fx
            .lists
            .duplicate(list.id, fx.friend.id, None)
            .await
            .unwrap();
        assert_eq!(copy.owner_id, fx.friend.id);
        assert_eq!(copy.name, "Groceries (Copy)");
        assert_eq!(copy.status, ListStatus::Active);
        assert_eq!(copy.budget, Some(Decimal::new(5000, 2)));

        let copied = fx.items.get_items(copy.id, fx.friend.id).await.unwrap();
        assert_eq!(copied.len(), 2);
        assert_eq!(copied[0].name, "Milk");
        assert_eq!(copied[0].quantity, Decimal::from(2));
        assert_eq!(copied[0].estimated_price, Some(Decimal::new(350, 2)));
        assert_eq!(copied[1].name, "Bread");
        assert!(copied.iter().all(|i| !i.is_checked));

        // The source kept its checked state.
        let source_items = fx.items.get_items(list.id, fx.owner.id).await.unwrap();
        assert!(source_items.iter().any(|i| i.is_checked));
    }

    #[tokio::test]
    async fn duplicate_fits_long_names_under_the_ceiling() {
        let fx = fixture();
        let list = fx
            .lists
            .create(fx.owner.id, CreateListDto::new("x".repeat(100)))
            .await
            .unwrap();

        let copy = fx
            .lists
            .duplicate(list.id, fx.owner.id, None)
            .await
            .unwrap();

        assert_eq!(copy.name.chars().count(), 100);
        assert!(copy.name.ends_with(" (Copy)"));
    }

    #[tokio::test]
    async fn templates_instantiate_into_regular_lists() {
        let fx = fixture();
        let mut dto = CreateListDto::new("Camping checklist");
        dto.is_template = true;
        let template = fx.lists.create(fx.owner.id, dto).await.unwrap();
        fx.items
            .create(template.id, fx.owner.id, CreateItemDto::new("Tent"))
            .await
            .unwrap();

        let list = fx
            .lists
            .create_from_template(template.id, fx.owner.id, None)
            .await
            .unwrap();
        assert_eq!(list.name, "Camping checklist");
        assert!(!list.is_template);
        let items = fx.items.get_items(list.id, fx.owner.id).await.unwrap();
        assert_eq!(items.len(), 1);

        let plain = fx
            .lists
            .create(fx.owner.id, CreateListDto::new("Not a template"))
            .await
            .unwrap();
        let err = fx
            .lists
            .create_from_template(plain.id, fx.owner.id, None)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("List is not a template"));
    }

    #[tokio::test]
    async fn get_by_user_pages_with_batched_summaries() {
        let fx = fixture();
        for name in ["Alpha", "Beta", "Gamma"] {
            fx.lists
                .create(fx.owner.id, CreateListDto::new(name))
                .await
                .unwrap();
        }
        let query = ListQueryDto {
            sort_by: Some(ListSortField::Name),
            page: Some(1),
            page_size: Some(2),
            ..ListQueryDto::default()
        };
        let alpha_id = {
            let page = fx.lists.get_by_user(fx.owner.id, query.clone()).await.unwrap();
            page.items[0].list.id
        };
        let first = fx
            .items
            .create(alpha_id, fx.owner.id, CreateItemDto::new("Milk"))
            .await
            .unwrap();
        fx.items
            .create(alpha_id, fx.owner.id, CreateItemDto::new("Bread"))
            .await
            .unwrap();
        fx.items
            .check(first.item.id, fx.owner.id, None)
            .await
            .unwrap();

        let page = fx.lists.get_by_user(fx.owner.id, query).await.unwrap();
        assert_eq!(page.total, 3);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[0].list.name, "Alpha");
        assert_eq!(page.items[0].summary.item_count, 2);
        assert_eq!(page.items[0].summary.checked_item_count, 1);
        assert_eq!(page.items[1].list.name, "Beta");
        assert_eq!(page.items[1].summary.item_count, 0);

        let query = ListQueryDto {
            sort_by: Some(ListSortField::Name),
            page: Some(2),
            page_size: Some(2),
            ..ListQueryDto::default()
        };
        let last = fx.lists.get_by_user(fx.owner.id, query).await.unwrap();
        assert_eq!(last.items.len(), 1);
        assert_eq!(last.items[0].list.name, "Gamma");
    }

    #[tokio::test]
    async fn details_multiply_price_by_quantity() {
        let fx = fixture();
        let list = fx
            .lists
            .create(fx.owner.id, CreateListDto::new("Groceries"))
            .await
            .unwrap();

        let mut milk = CreateItemDto::new("Milk");
        milk.quantity = Some(Decimal::from(3));
        milk.estimated_price = Some(Decimal::new(250, 2));
        fx.items.create(list.id, fx.owner.id, milk).await.unwrap();

        let mut bread = CreateItemDto::new("Bread");
        bread.estimated_price = Some(Decimal::ONE);
        fx.items.create(list.id, fx.owner.id, bread).await.unwrap();

        // No price, no contribution.
        let mut napkins = CreateItemDto::new("Napkins");
        napkins.quantity = Some(Decimal::from(5));
        fx.items
            .create(list.id, fx.owner.id, napkins)
            .await
            .unwrap();

        let overview = fx
            .lists
            .get_by_id_with_details(list.id, fx.owner.id)
            .await
            .unwrap();
        assert_eq!(overview.summary.item_count, 3);
        assert_eq!(overview.summary.estimated_total, Decimal::new(850, 2));
    }

    #[tokio::test]
    async fn reads_are_gated_on_view_access() {
        let fx = fixture();
        let list = fx
            .lists
            .create(fx.owner.id, CreateListDto::new("Groceries"))
            .await
            .unwrap();

        let err = fx.lists.get_by_id(list.id, fx.friend.id).await.unwrap_err();
        assert!(matches!(err, DomainError::Forbidden(_)));

        fx.collaboration
            .share(
                list.id,
                fx.owner.id,
                "friend@example.com",
                CollaboratorRole::Viewer,
            )
            .await
            .unwrap();
        let fetched = fx.lists.get_by_id(list.id, fx.friend.id).await.unwrap();
        assert_eq!(fetched.id, list.id);
    }
}
