//! Shopping list domain entity

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

/// List lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStatus {
    /// List is in use
    Active,
    /// Shopping trip finished
    Completed,
    /// Kept for history, hidden from day-to-day views
    Archived,
}

impl ListStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Archived => "archived",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "active" => Some(Self::Active),
            "completed" => Some(Self::Completed),
            "archived" => Some(Self::Archived),
            _ => None,
        }
    }

    /// Whether a list may move from `self` to `next`.
    ///
    /// Completed and archived lists can be reopened; an archived list cannot
    /// be marked completed without reopening it first.
    pub fn can_transition_to(self, next: ListStatus) -> bool {
        match (self, next) {
            (Self::Active, Self::Completed) => true,
            (Self::Active, Self::Archived) => true,
            (Self::Completed, Self::Archived) => true,
            (Self::Completed, Self::Active) => true,
            (Self::Archived, Self::Active) => true,
            _ => false,
        }
    }
}

impl std::fmt::Display for ListStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shared shopping list
#[derive(Debug, Clone)]
pub struct ShoppingList {
    /// Unique list ID
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Optional free-text description
    pub description: Option<String>,
    /// Optional spending budget for the trip
    pub budget: Option<Decimal>,
    /// Lifecycle status
    pub status: ListStatus,
    /// Template lists seed new lists instead of being shopped directly
    pub is_template: bool,
    /// Owning user
    pub owner_id: Uuid,
    /// Optional store this list is pinned to
    pub store_id: Option<Uuid>,
    /// When the list was marked completed
    pub completed_at: Option<DateTime<Utc>>,
    /// When the list was created
    pub created_at: DateTime<Utc>,
    /// Last modification time
    pub updated_at: DateTime<Utc>,
}

impl ShoppingList {
    pub fn new(owner_id: Uuid, name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: None,
            budget: None,
            status: ListStatus::Active,
            is_template: false,
            owner_id,
            store_id: None,
            completed_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a status change, keeping `completed_at` in sync: entering
    /// Completed stamps it, reopening to Active clears it, archiving a
    /// completed list keeps it.
    pub fn set_status(&mut self, next: ListStatus) {
        if next == ListStatus::Completed && self.status != ListStatus::Completed {
            self.completed_at = Some(Utc::now());
        }
        if self.status == ListStatus::Completed && next == ListStatus::Active {
            self.completed_at = None;
        }
        self.status = next;
        self.touch();
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Aggregates computed over a list's items and collaborators.
/// Never stored; derived per request.
#[derive(Debug, Clone, PartialEq)]
pub struct ListSummary {
    /// Number of items on the list
    pub item_count: u32,
    /// Number of checked items
    pub checked_item_count: u32,
    /// Sum of `estimated_price * quantity` over priced items
    pub estimated_total: Decimal,
    /// Number of collaborators (the owner is not counted)
    pub collaborator_count: u32,
}

impl Default for ListSummary {
    fn default() -> Self {
        Self {
            item_count: 0,
            checked_item_count: 0,
            estimated_total: Decimal::ZERO,
            collaborator_count: 0,
        }
    }
}

/// A list together with its derived summary
#[derive(Debug, Clone)]
pub struct ListOverview {
    pub list: ShoppingList,
    pub summary: ListSummary,
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_list() -> ShoppingList {
        ShoppingList::new(Uuid::new_v4(), "Weekly groceries")
    }

    #[test]
    fn new_list_is_active() {
        let list = sample_list();
        assert_eq!(list.status, ListStatus::Active);
        assert!(!list.is_template);
        assert!(list.completed_at.is_none());
        assert!(list.budget.is_none());
    }

    #[test]
    fn completing_stamps_completed_at() {
        let mut list = sample_list();
        list.set_status(ListStatus::Completed);
        assert_eq!(list.status, ListStatus::Completed);
        assert!(list.completed_at.is_some());
    }

    #[test]
    fn reopening_clears_completed_at() {
        let mut list = sample_list();
        list.set_status(ListStatus::Completed);
        list.set_status(ListStatus::Active);
        assert_eq!(list.status, ListStatus::Active);
        assert!(list.completed_at.is_none());
    }

    #[test]
    fn archiving_a_completed_list_keeps_completed_at() {
        let mut list = sample_list();
        list.set_status(ListStatus::Completed);
        let stamped = list.completed_at;
        list.set_status(ListStatus::Archived);
        assert_eq!(list.completed_at, stamped);
    }

    #[test]
    fn archived_cannot_become_completed() {
        assert!(!ListStatus::Archived.can_transition_to(ListStatus::Completed));
        assert!(ListStatus::Archived.can_transition_to(ListStatus::Active));
    }

    #[test]
    fn active_can_complete_or_archive() {
        assert!(ListStatus::Active.can_transition_to(ListStatus::Completed));
        assert!(ListStatus::Active.can_transition_to(ListStatus::Archived));
        assert!(!ListStatus::Active.can_transition_to(ListStatus::Active));
    }

    #[test]
    fn status_roundtrip() {
        for status in [ListStatus::Active, ListStatus::Completed, ListStatus::Archived] {
            assert_eq!(ListStatus::from_str(status.as_str()), Some(status));
        }
        assert!(ListStatus::from_str("deleted").is_none());
    }
}
