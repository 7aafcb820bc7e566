use rust_decimal::Decimal;
use uuid::Uuid;

use super::model::ListStatus;

/// Partial update; `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateListDto {
    pub name: Option<String>,
    pub description: Option<String>,
    pub budget: Option<Decimal>,
    pub status: Option<ListStatus>,
    pub store_id: Option<Uuid>,
    pub is_template: Option<bool>,
}
