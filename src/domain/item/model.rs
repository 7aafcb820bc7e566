//! List item domain entity

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

/// Shopping priority of an item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemPriority {
    Low,
    Medium,
    High,
}

impl ItemPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }
}

impl Default for ItemPriority {
    fn default() -> Self {
        Self::Medium
    }
}

/// Entry on a shopping list
#[derive(Debug, Clone)]
pub struct ListItem {
    /// Unique item ID
    pub id: Uuid,
    /// Item name as the shopper typed or spoke it
    pub name: String,
    /// Amount to buy; fractional quantities are allowed ("1.5 kg")
    pub quantity: Decimal,
    /// Optional unit for the quantity
    pub unit: Option<String>,
    /// Optional free-text note
    pub notes: Option<String>,
    /// Estimated price per unit. Overwritten by the actual price when the
    /// item is checked off with one.
    pub estimated_price: Option<Decimal>,
    /// Shopping priority
    pub priority: ItemPriority,
    /// Position within the list; unique per list, assigned on insert
    pub sort_order: i32,
    /// Whether the item has been checked off
    pub is_checked: bool,
    /// When the item was last checked off
    pub checked_at: Option<DateTime<Utc>>,
    /// List this item belongs to
    pub list_id: Uuid,
    /// Resolved category, if any
    pub category_id: Option<Uuid>,
    /// User who added the item
    pub added_by: Uuid,
    /// When the item was created
    pub created_at: DateTime<Utc>,
    /// Last modification time
    pub updated_at: DateTime<Utc>,
}

impl ListItem {
    pub fn new(list_id: Uuid, added_by: Uuid, name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            quantity: Decimal::ONE,
            unit: None,
            notes: None,
            estimated_price: None,
            priority: ItemPriority::default(),
            sort_order: 0,
            is_checked: false,
            checked_at: None,
            list_id,
            category_id: None,
            added_by,
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the checked state, stamping or clearing `checked_at` with it.
    pub fn set_checked(&mut self, checked: bool) {
        self.is_checked = checked;
        self.checked_at = checked.then(Utc::now);
        self.touch();
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_item() -> ListItem {
        ListItem::new(Uuid::new_v4(), Uuid::new_v4(), "Milk")
    }

    #[test]
    fn new_item_defaults() {
        let item = sample_item();
        assert_eq!(item.quantity, Decimal::ONE);
        assert_eq!(item.priority, ItemPriority::Medium);
        assert!(!item.is_checked);
        assert!(item.checked_at.is_none());
        assert!(item.category_id.is_none());
    }

    #[test]
    fn checking_stamps_checked_at() {
        let mut item = sample_item();
        item.set_checked(true);
        assert!(item.is_checked);
        assert!(item.checked_at.is_some());
    }

    #[test]
    fn unchecking_clears_checked_at() {
        let mut item = sample_item();
        item.set_checked(true);
        item.set_checked(false);
        assert!(!item.is_checked);
        assert!(item.checked_at.is_none());
    }

    #[test]
    fn priority_roundtrip() {
        for p in [ItemPriority::Low, ItemPriority::Medium, ItemPriority::High] {
            assert_eq!(ItemPriority::from_str(p.as_str()), Some(p));
        }
        assert!(ItemPriority::from_str("urgent").is_none());
    }
}
