use rust_decimal::Decimal;
use uuid::Uuid;

#[derive(Debug, Clone, Default)]
pub struct CreateListDto {
    pub name: String,
    pub description: Option<String>,
    pub budget: Option<Decimal>,
    pub store_id: Option<Uuid>,
    pub is_template: bool,
}

impl CreateListDto {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}
