//! Category domain entity

use uuid::Uuid;

/// Item category used for grouping and auto-classification.
///
/// The set is seeded by the storage adapter; slugs are the stable handle the
/// classifier resolves against.
#[derive(Debug, Clone)]
pub struct Category {
    /// Unique category ID
    pub id: Uuid,
    /// Display name, e.g. "Dairy"
    pub name: String,
    /// Stable machine handle, e.g. "dairy"
    pub slug: String,
    /// Optional display icon
    pub icon: Option<String>,
}

impl Category {
    pub fn new(name: impl Into<String>, slug: impl Into<String>, icon: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            slug: slug.into(),
            icon,
        }
    }
}
