use std::sync::Arc;

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::storage::KeyValueStore;

/// Storage key holding the session identifier.
pub const SESSION_KEY: &str = "app-uuid";

/// Stable per-profile identifier, generated once and persisted.
///
/// The same value scopes list lookups and is sent as the idempotency key of
/// every create call from this profile.
pub struct IdentityProvider {
    store: Arc<dyn KeyValueStore>,
    // Used when the store loses or cannot hold the value.
    identifier: String,
}

impl IdentityProvider {
    /// Load the persisted identifier, or generate and persist a new one.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        let identifier = match store.get(SESSION_KEY).filter(|value| !value.is_empty()) {
            Some(existing) => {
                debug!("Reusing persisted session identifier");
                existing
            }
            None => {
                let generated = generate_identifier();
                match store.set(SESSION_KEY, &generated) {
                    Ok(()) => info!("Generated new session identifier"),
                    Err(e) => warn!("Failed to persist session identifier: {}", e),
                }
                generated
            }
        };

        Self { store, identifier }
    }

    /// Current session identifier. Never empty.
    pub fn identifier(&self) -> String {
        self.store
            .get(SESSION_KEY)
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| self.identifier.clone())
    }
}

/// Random UUID v4 in its lowercase hyphenated form.
pub fn generate_identifier() -> String {
    Uuid::new_v4().to_string()
}
