//! In-memory storage implementation

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use uuid::Uuid;

use crate::domain::{
    Category, CategoryRepository, CollaboratorRepository, Invitation, InvitationRepository,
    ItemRepository, ListCollaborator, ListItem, ListQueryDto, ListRepository, ListSortField,
    ListSummary, RepositoryProvider, ShoppingList, User, UserRepository,
};
use crate::shared::errors::RepositoryError;
use crate::shared::types::PaginatedResult;

/// Seed categories matching the classifier's vocabulary.
const DEFAULT_CATEGORIES: &[(&str, &str, &str)] = &[
    ("Produce", "produce", "🥬"),
    ("Dairy", "dairy", "🥛"),
    ("Meat", "meat", "🥩"),
    ("Seafood", "seafood", "🐟"),
    ("Bakery", "bakery", "🍞"),
    ("Frozen", "frozen", "🧊"),
    ("Beverages", "beverages", "🥤"),
    ("Snacks", "snacks", "🍿"),
    ("Pantry", "pantry", "🥫"),
    ("Household", "household", "🧽"),
    ("Personal Care", "personal-care", "🧴"),
];

/// In-memory storage for development and testing.
///
/// Guarded inserts rely on `DashMap` entry locks: the per-owner and per-list
/// count checks happen under the same lock as the insert, so ceilings hold
/// even under concurrent writers. Methods never hold two guards at once.
pub struct InMemoryStore {
    users: DashMap<Uuid, User>,
    lists: DashMap<Uuid, ShoppingList>,
    /// owner -> list ids; the entry lock serializes inserts per owner
    owner_index: DashMap<Uuid, Vec<Uuid>>,
    /// list -> items, kept in sort order
    items: DashMap<Uuid, Vec<ListItem>>,
    /// item -> owning list
    item_index: DashMap<Uuid, Uuid>,
    /// list -> memberships, in join order
    collaborators: DashMap<Uuid, Vec<ListCollaborator>>,
    /// user -> lists they collaborate on
    member_index: DashMap<Uuid, Vec<Uuid>>,
    invitations: DashMap<Uuid, Invitation>,
    categories: DashMap<Uuid, Category>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        let store = Self {
            users: DashMap::new(),
            lists: DashMap::new(),
            owner_index: DashMap::new(),
            items: DashMap::new(),
            item_index: DashMap::new(),
            collaborators: DashMap::new(),
            member_index: DashMap::new(),
            invitations: DashMap::new(),
            categories: DashMap::new(),
        };

        for (name, slug, icon) in DEFAULT_CATEGORIES {
            let category = Category::new(*name, *slug, Some((*icon).to_string()));
            store.categories.insert(category.id, category);
        }

        store
    }

    /// Register an account. Accounts are externally managed; this is the seam
    /// embedding applications and test fixtures use to provide them.
    pub fn add_user(&self, user: User) {
        self.users.insert(user.id, user);
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ListRepository for InMemoryStore {
    async fn insert(&self, list: ShoppingList, max_per_owner: u32) -> Result<(), RepositoryError> {
        {
            let mut owned = self.owner_index.entry(list.owner_id).or_default();
            if owned.len() as u32 >= max_per_owner {
                return Err(RepositoryError::CeilingExceeded {
                    entity: "list",
                    limit: max_per_owner,
                });
            }
            owned.push(list.id);
        }
        self.lists.insert(list.id, list);
        Ok(())
    }

    async fn insert_with_items(
        &self,
        list: ShoppingList,
        items: Vec<ListItem>,
        max_per_owner: u32,
    ) -> Result<(), RepositoryError> {
        let list_id = list.id;
        {
            let mut owned = self.owner_index.entry(list.owner_id).or_default();
            if owned.len() as u32 >= max_per_owner {
                return Err(RepositoryError::CeilingExceeded {
                    entity: "list",
                    limit: max_per_owner,
                });
            }
            owned.push(list_id);
        }
        // Items land before the list record so nobody sees the list bare.
        for item in &items {
            self.item_index.insert(item.id, list_id);
        }
        self.items.insert(list_id, items);
        self.lists.insert(list_id, list);
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ShoppingList>, RepositoryError> {
        Ok(self.lists.get(&id).map(|l| l.clone()))
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<ShoppingList>, RepositoryError> {
        Ok(ids
            .iter()
            .filter_map(|id| self.lists.get(id).map(|l| l.clone()))
            .collect())
    }

    async fn find_by_user(
        &self,
        user_id: Uuid,
        query: &ListQueryDto,
        page: u32,
        limit: u32,
    ) -> Result<PaginatedResult<ShoppingList>, RepositoryError> {
        let mut seen = HashSet::new();
        let mut lists: Vec<ShoppingList> = self
            .lists
            .iter()
            .filter(|l| l.owner_id == user_id)
            .map(|l| l.clone())
            .collect();
        seen.extend(lists.iter().map(|l| l.id));

        let member_of = self
            .member_index
            .get(&user_id)
            .map(|ids| ids.clone())
            .unwrap_or_default();
        for list_id in member_of {
            if let Some(list) = self.lists.get(&list_id) {
                if seen.insert(list.id) {
                    lists.push(list.clone());
                }
            }
        }

        lists.retain(|l| matches_query(l, query));
        sort_lists(&mut lists, query.sort_by);

        let total = lists.len() as u64;
        let start = (page.saturating_sub(1) as usize) * limit as usize;
        let items = lists
            .into_iter()
            .skip(start)
            .take(limit as usize)
            .collect();
        Ok(PaginatedResult::new(items, total, page, limit))
    }

    async fn update(&self, list: ShoppingList) -> Result<bool, RepositoryError> {
        match self.lists.get_mut(&list.id) {
            Some(mut slot) => {
                *slot = list;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<bool, RepositoryError> {
        let Some((_, list)) = self.lists.remove(&id) else {
            return Ok(false);
        };
        if let Some(mut owned) = self.owner_index.get_mut(&list.owner_id) {
            owned.retain(|list_id| *list_id != id);
        }
        if let Some((_, rows)) = self.items.remove(&id) {
            for item in rows {
                self.item_index.remove(&item.id);
            }
        }
        if let Some((_, rows)) = self.collaborators.remove(&id) {
            for row in rows {
                if let Some(mut member_of) = self.member_index.get_mut(&row.user_id) {
                    member_of.retain(|list_id| *list_id != id);
                }
            }
        }
        self.invitations.retain(|_, inv| inv.list_id != id);
        Ok(true)
    }

    async fn is_owner(&self, list_id: Uuid, user_id: Uuid) -> Result<bool, RepositoryError> {
        Ok(self
            .lists
            .get(&list_id)
            .map(|l| l.owner_id == user_id)
            .unwrap_or(false))
    }

    async fn summaries(
        &self,
        ids: &[Uuid],
    ) -> Result<HashMap<Uuid, ListSummary>, RepositoryError> {
        let mut out = HashMap::with_capacity(ids.len());
        for &list_id in ids {
            if !self.lists.contains_key(&list_id) {
                continue;
            }
            let mut summary = ListSummary::default();
            if let Some(rows) = self.items.get(&list_id) {
                for item in rows.iter() {
                    summary.item_count += 1;
                    if item.is_checked {
                        summary.checked_item_count += 1;
                    }
                    if let Some(price) = item.estimated_price {
                        summary.estimated_total += price * item.quantity;
                    }
                }
            }
            summary.collaborator_count = self
                .collaborators
                .get(&list_id)
                .map(|rows| rows.len() as u32)
                .unwrap_or(0);
            out.insert(list_id, summary);
        }
        Ok(out)
    }
}

#[async_trait]
impl ItemRepository for InMemoryStore {
    async fn insert(
        &self,
        mut item: ListItem,
        max_per_list: u32,
    ) -> Result<ListItem, RepositoryError> {
        let stored = {
            let mut rows = self.items.entry(item.list_id).or_default();
            if rows.len() as u32 >= max_per_list {
                return Err(RepositoryError::CeilingExceeded {
                    entity: "item",
                    limit: max_per_list,
                });
            }
            item.sort_order = rows.last().map(|i| i.sort_order + 1).unwrap_or(0);
            rows.push(item.clone());
            item
        };
        self.item_index.insert(stored.id, stored.list_id);
        Ok(stored)
    }

    async fn insert_many(
        &self,
        items: Vec<ListItem>,
        max_per_list: u32,
    ) -> Result<Vec<ListItem>, RepositoryError> {
        let Some(list_id) = items.first().map(|i| i.list_id) else {
            return Ok(Vec::new());
        };
        let stored = {
            let mut rows = self.items.entry(list_id).or_default();
            if (rows.len() + items.len()) as u32 > max_per_list {
                return Err(RepositoryError::CeilingExceeded {
                    entity: "item",
                    limit: max_per_list,
                });
            }
            let mut next = rows.last().map(|i| i.sort_order + 1).unwrap_or(0);
            let mut stored = Vec::with_capacity(items.len());
            for mut item in items {
                item.sort_order = next;
                next += 1;
                rows.push(item.clone());
                stored.push(item);
            }
            stored
        };
        for item in &stored {
            self.item_index.insert(item.id, list_id);
        }
        Ok(stored)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ListItem>, RepositoryError> {
        let Some(list_id) = self.item_index.get(&id).map(|r| *r) else {
            return Ok(None);
        };
        Ok(self
            .items
            .get(&list_id)
            .and_then(|rows| rows.iter().find(|i| i.id == id).cloned()))
    }

    async fn find_by_list(&self, list_id: Uuid) -> Result<Vec<ListItem>, RepositoryError> {
        Ok(self
            .items
            .get(&list_id)
            .map(|rows| rows.clone())
            .unwrap_or_default())
    }

    async fn update(&self, item: ListItem) -> Result<bool, RepositoryError> {
        let Some(mut rows) = self.items.get_mut(&item.list_id) else {
            return Ok(false);
        };
        let Some(slot) = rows.iter_mut().find(|i| i.id == item.id) else {
            return Ok(false);
        };
        *slot = item;
        Ok(true)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, RepositoryError> {
        let Some((_, list_id)) = self.item_index.remove(&id) else {
            return Ok(false);
        };
        let Some(mut rows) = self.items.get_mut(&list_id) else {
            return Ok(false);
        };
        let before = rows.len();
        rows.retain(|i| i.id != id);
        Ok(rows.len() != before)
    }

    async fn check_all(&self, list_id: Uuid, at: DateTime<Utc>) -> Result<u32, RepositoryError> {
        let Some(mut rows) = self.items.get_mut(&list_id) else {
            return Ok(0);
        };
        let mut flipped = 0;
        for item in rows.iter_mut() {
            if !item.is_checked {
                item.is_checked = true;
                item.checked_at = Some(at);
                item.updated_at = at;
                flipped += 1;
            }
        }
        Ok(flipped)
    }

    async fn set_positions(
        &self,
        list_id: Uuid,
        positions: &[(Uuid, i32)],
    ) -> Result<(), RepositoryError> {
        let Some(mut rows) = self.items.get_mut(&list_id) else {
            return Ok(());
        };
        for (item_id, position) in positions {
            if let Some(item) = rows.iter_mut().find(|i| i.id == *item_id) {
                item.sort_order = *position;
            }
        }
        rows.sort_by_key(|i| i.sort_order);
        Ok(())
    }

    async fn move_to_list(
        &self,
        item_id: Uuid,
        target_list_id: Uuid,
        max_per_list: u32,
    ) -> Result<Option<ListItem>, RepositoryError> {
        let Some(source_list_id) = self.item_index.get(&item_id).map(|r| *r) else {
            return Ok(None);
        };

        // Take the item out of its source list first; the guards on the two
        // lists must never overlap.
        let (source_pos, original) = {
            let Some(mut rows) = self.items.get_mut(&source_list_id) else {
                return Ok(None);
            };
            let Some(pos) = rows.iter().position(|i| i.id == item_id) else {
                return Ok(None);
            };
            (pos, rows.remove(pos))
        };

        let mut moved = original.clone();
        moved.list_id = target_list_id;
        moved.set_checked(false);
        moved.touch();

        let landed = {
            let mut rows = self.items.entry(target_list_id).or_default();
            if rows.len() as u32 >= max_per_list {
                None
            } else {
                moved.sort_order = rows.last().map(|i| i.sort_order + 1).unwrap_or(0);
                rows.push(moved.clone());
                Some(moved)
            }
        };

        match landed {
            Some(moved) => {
                self.item_index.insert(item_id, target_list_id);
                Ok(Some(moved))
            }
            None => {
                // Destination is full; put the item back where it was.
                let mut rows = self.items.entry(source_list_id).or_default();
                let pos = source_pos.min(rows.len());
                rows.insert(pos, original);
                Err(RepositoryError::CeilingExceeded {
                    entity: "item",
                    limit: max_per_list,
                })
            }
        }
    }
}

#[async_trait]
impl CollaboratorRepository for InMemoryStore {
    async fn insert(
        &self,
        collaborator: ListCollaborator,
        max_per_list: u32,
    ) -> Result<(), RepositoryError> {
        let stored = {
            let mut rows = self.collaborators.entry(collaborator.list_id).or_default();
            // The duplicate check comes first: re-adding someone to a full
            // list still reports the duplicate, not the ceiling.
            if rows.iter().any(|c| c.user_id == collaborator.user_id) {
                return Err(RepositoryError::UniqueViolation(format!(
                    "user {} already collaborates on list {}",
                    collaborator.user_id, collaborator.list_id
                )));
            }
            if rows.len() as u32 >= max_per_list {
                return Err(RepositoryError::CeilingExceeded {
                    entity: "collaborator",
                    limit: max_per_list,
                });
            }
            rows.push(collaborator.clone());
            collaborator
        };
        self.member_index
            .entry(stored.user_id)
            .or_default()
            .push(stored.list_id);
        Ok(())
    }

    async fn find_by_list(
        &self,
        list_id: Uuid,
    ) -> Result<Vec<ListCollaborator>, RepositoryError> {
        Ok(self
            .collaborators
            .get(&list_id)
            .map(|rows| rows.clone())
            .unwrap_or_default())
    }

    async fn find_by_list_and_user(
        &self,
        list_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<ListCollaborator>, RepositoryError> {
        Ok(self
            .collaborators
            .get(&list_id)
            .and_then(|rows| rows.iter().find(|c| c.user_id == user_id).cloned()))
    }

    async fn find_list_ids_for_user(&self, user_id: Uuid) -> Result<Vec<Uuid>, RepositoryError> {
        Ok(self
            .member_index
            .get(&user_id)
            .map(|ids| ids.clone())
            .unwrap_or_default())
    }

    async fn update(&self, collaborator: ListCollaborator) -> Result<bool, RepositoryError> {
        let Some(mut rows) = self.collaborators.get_mut(&collaborator.list_id) else {
            return Ok(false);
        };
        let Some(slot) = rows.iter_mut().find(|c| c.user_id == collaborator.user_id) else {
            return Ok(false);
        };
        *slot = collaborator;
        Ok(true)
    }

    async fn delete(&self, list_id: Uuid, user_id: Uuid) -> Result<bool, RepositoryError> {
        let removed = {
            let Some(mut rows) = self.collaborators.get_mut(&list_id) else {
                return Ok(false);
            };
            let before = rows.len();
            rows.retain(|c| c.user_id != user_id);
            rows.len() != before
        };
        if removed {
            if let Some(mut member_of) = self.member_index.get_mut(&user_id) {
                member_of.retain(|id| *id != list_id);
            }
        }
        Ok(removed)
    }
}

#[async_trait]
impl InvitationRepository for InMemoryStore {
    async fn insert(&self, invitation: Invitation) -> Result<(), RepositoryError> {
        self.invitations.insert(invitation.id, invitation);
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Invitation>, RepositoryError> {
        Ok(self.invitations.get(&id).map(|inv| inv.clone()))
    }

    async fn find_by_code_hash(
        &self,
        code_hash: &str,
    ) -> Result<Option<Invitation>, RepositoryError> {
        Ok(self
            .invitations
            .iter()
            .find(|inv| inv.code_hash == code_hash)
            .map(|inv| inv.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, RepositoryError> {
        Ok(self.invitations.remove(&id).is_some())
    }
}

#[async_trait]
impl CategoryRepository for InMemoryStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Category>, RepositoryError> {
        Ok(self.categories.get(&id).map(|c| c.clone()))
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Category>, RepositoryError> {
        Ok(self
            .categories
            .iter()
            .find(|c| c.slug == slug)
            .map(|c| c.clone()))
    }

    async fn find_all(&self) -> Result<Vec<Category>, RepositoryError> {
        let mut all: Vec<Category> = self.categories.iter().map(|c| c.clone()).collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(all)
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepositoryError> {
        Ok(self.users.get(&id).map(|u| u.clone()))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        Ok(self
            .users
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .map(|u| u.clone()))
    }
}

impl RepositoryProvider for InMemoryStore {
    fn lists(&self) -> &dyn ListRepository {
        self
    }

    fn items(&self) -> &dyn ItemRepository {
        self
    }

    fn collaborators(&self) -> &dyn CollaboratorRepository {
        self
    }

    fn invitations(&self) -> &dyn InvitationRepository {
        self
    }

    fn categories(&self) -> &dyn CategoryRepository {
        self
    }

    fn users(&self) -> &dyn UserRepository {
        self
    }
}

fn matches_query(list: &ShoppingList, query: &ListQueryDto) -> bool {
    if let Some(status) = query.status {
        if list.status != status {
            return false;
        }
    }
    if let Some(store_id) = query.store_id {
        if list.store_id != Some(store_id) {
            return false;
        }
    }
    if let Some(is_template) = query.is_template {
        if list.is_template != is_template {
            return false;
        }
    }
    if let Some(ref search) = query.search {
        let needle = search.to_lowercase();
        if !needle.is_empty() && !list.name.to_lowercase().contains(&needle) {
            return false;
        }
    }
    true
}

fn sort_lists(lists: &mut [ShoppingList], sort_by: Option<ListSortField>) {
    match sort_by {
        Some(ListSortField::Name) => {
            lists.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        }
        Some(ListSortField::UpdatedAt) => lists.sort_by(|a, b| b.updated_at.cmp(&a.updated_at)),
        Some(ListSortField::CreatedAt) | None => {
            lists.sort_by(|a, b| b.created_at.cmp(&a.created_at))
        }
    }
}

// ── Tests ───────────────────────────────────────────────────────
