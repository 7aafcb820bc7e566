use rust_decimal::Decimal;
use uuid::Uuid;

use super::model::ItemPriority;

#[derive(Debug, Clone, Default)]
pub struct CreateItemDto {
    pub name: String,
    /// Defaults to 1 when omitted
    pub quantity: Option<Decimal>,
    pub unit: Option<String>,
    pub notes: Option<String>,
    pub estimated_price: Option<Decimal>,
    /// Defaults to medium when omitted
    pub priority: Option<ItemPriority>,
    /// Explicit category; when omitted the classifier takes a guess
    pub category_id: Option<Uuid>,
}

impl CreateItemDto {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}
