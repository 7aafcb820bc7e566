use uuid::Uuid;

use super::model::ListStatus;

/// Sort order for list queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListSortField {
    /// Alphabetical by name
    Name,
    /// Newest first
    CreatedAt,
    /// Recently touched first
    UpdatedAt,
}

/// Filters for fetching a user's lists. All filters are optional;
/// the default sort is newest first.
#[derive(Debug, Clone, Default)]
pub struct ListQueryDto {
    pub status: Option<ListStatus>,
    pub store_id: Option<Uuid>,
    pub is_template: Option<bool>,
    /// Case-insensitive name substring
    pub search: Option<String>,
    pub sort_by: Option<ListSortField>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}
