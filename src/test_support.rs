//! Test utilities shared across the crate's unit tests.

use std::sync::Arc;

use crate::domain::User;
use crate::infrastructure::InMemoryStore;

/// Install a fmt subscriber once so failing tests show their traces.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Fresh store with the default category seed.
pub fn store() -> Arc<InMemoryStore> {
    Arc::new(InMemoryStore::new())
}

/// Register an account and hand back the row.
pub fn seed_user(store: &InMemoryStore, email: &str, name: &str) -> User {
    let user = User::new(email, name);
    store.add_user(user.clone());
    user
}
