use rust_decimal::Decimal;
use uuid::Uuid;

use super::model::ItemPriority;

/// Partial update; `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateItemDto {
    pub name: Option<String>,
    pub quantity: Option<Decimal>,
    pub unit: Option<String>,
    pub notes: Option<String>,
    pub estimated_price: Option<Decimal>,
    pub priority: Option<ItemPriority>,
    pub category_id: Option<Uuid>,
}
