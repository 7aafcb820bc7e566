//! User domain entity

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Account known to the system.
///
/// Accounts are created and maintained by the surrounding identity platform;
/// this layer only reads them to resolve sharing targets and display names.
#[derive(Debug, Clone)]
pub struct User {
    /// Unique user ID
    pub id: Uuid,
    /// Login email, unique across accounts
    pub email: String,
    /// Display name
    pub name: String,
    /// When the account was created
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: email.into(),
            name: name.into(),
            created_at: Utc::now(),
        }
    }
}
